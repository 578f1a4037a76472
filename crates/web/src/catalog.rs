//! Static restaurant/menu catalog.
//!
//! The catalog is built once at startup and never mutated, so it needs
//! no synchronization even though every request reads it.

use tasty_core::{MenuItemId, Price, RestaurantId};

/// A single item on a restaurant's menu.
#[derive(Debug, Clone)]
pub struct MenuItem {
    /// Item ID, unique within its restaurant.
    pub id: MenuItemId,
    /// Display name.
    pub name: String,
    /// Item price.
    pub price: Price,
}

/// A restaurant with an ordered menu.
#[derive(Debug, Clone)]
pub struct Restaurant {
    /// Unique restaurant ID.
    pub id: RestaurantId,
    /// Display name.
    pub name: String,
    /// Menu items, in display order.
    pub menu: Vec<MenuItem>,
}

impl Restaurant {
    /// Find a menu item by its ID.
    #[must_use]
    pub fn item(&self, id: MenuItemId) -> Option<&MenuItem> {
        self.menu.iter().find(|item| item.id == id)
    }
}

/// Read-only catalog of restaurants.
#[derive(Debug, Clone)]
pub struct Catalog {
    restaurants: Vec<Restaurant>,
}

impl Catalog {
    /// The demo catalog served by this application.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            restaurants: vec![
                Restaurant {
                    id: RestaurantId::new(1),
                    name: "Pizza Palace".to_string(),
                    menu: vec![
                        MenuItem {
                            id: MenuItemId::new(1),
                            name: "Margherita Pizza".to_string(),
                            price: Price::usd(10),
                        },
                        MenuItem {
                            id: MenuItemId::new(2),
                            name: "Pepperoni Pizza".to_string(),
                            price: Price::usd(12),
                        },
                    ],
                },
                Restaurant {
                    id: RestaurantId::new(2),
                    name: "Burger Barn".to_string(),
                    menu: vec![
                        MenuItem {
                            id: MenuItemId::new(1),
                            name: "Classic Burger".to_string(),
                            price: Price::usd(8),
                        },
                        MenuItem {
                            id: MenuItemId::new(2),
                            name: "Cheese Burger".to_string(),
                            price: Price::usd(9),
                        },
                    ],
                },
            ],
        }
    }

    /// All restaurants, in display order.
    #[must_use]
    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// Find a restaurant by its ID.
    #[must_use]
    pub fn restaurant(&self, id: RestaurantId) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.id == id)
    }
}
