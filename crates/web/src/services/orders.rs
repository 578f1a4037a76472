//! Order placement workflow.
//!
//! Validates and executes an order against the catalog and appends it
//! to the ledger. Checks run in a fixed sequence and the first failure
//! wins; no failure path has a side effect.

use tasty_core::{Email, MenuItemId, RestaurantId};

use crate::catalog::Catalog;
use crate::ledger::{Order, OrderLedger};

/// Why an order was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    /// No identity in the session.
    #[error("please log in to place an order")]
    Unauthenticated,

    /// A submitted ID was not a positive integer.
    #[error("invalid order data")]
    InvalidInput,

    /// No restaurant with the submitted ID.
    #[error("restaurant not found")]
    RestaurantNotFound,

    /// The restaurant exists but has no such menu item.
    #[error("menu item not found")]
    ItemNotFound {
        /// The restaurant the caller was ordering from, so the handler
        /// can send them back to its menu.
        restaurant_id: RestaurantId,
    },
}

/// Validate and place an order.
///
/// On success exactly one entry is appended to the ledger, carrying the
/// restaurant and item names as they were at placement time.
///
/// # Errors
///
/// Returns an [`OrderError`] describing the first failed check;
/// the ledger is untouched on every error path.
pub fn place_order(
    catalog: &Catalog,
    ledger: &OrderLedger,
    identity: Option<&Email>,
    restaurant_id: &str,
    item_id: &str,
) -> Result<Order, OrderError> {
    let Some(identity) = identity else {
        return Err(OrderError::Unauthenticated);
    };

    let restaurant_id = parse_positive_id(restaurant_id)
        .map(RestaurantId::new)
        .ok_or(OrderError::InvalidInput)?;
    let item_id = parse_positive_id(item_id)
        .map(MenuItemId::new)
        .ok_or(OrderError::InvalidInput)?;

    let restaurant = catalog
        .restaurant(restaurant_id)
        .ok_or(OrderError::RestaurantNotFound)?;
    let item = restaurant
        .item(item_id)
        .ok_or(OrderError::ItemNotFound { restaurant_id })?;

    let order = Order {
        restaurant: restaurant.name.clone(),
        item: item.name.clone(),
        user: Some(identity.clone()),
    };
    ledger.append(order.clone());

    Ok(order)
}

/// Parse a form value as a positive (> 0) integer.
fn parse_positive_id(s: &str) -> Option<i64> {
    s.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn identity() -> Email {
        Email::parse("a@x.com").unwrap()
    }

    #[test]
    fn test_unauthenticated_order_has_no_side_effect() {
        let catalog = Catalog::sample();
        let ledger = OrderLedger::new();

        let err = place_order(&catalog, &ledger, None, "1", "1").unwrap_err();
        assert_eq!(err, OrderError::Unauthenticated);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_unparseable_ids_are_invalid_input() {
        let catalog = Catalog::sample();
        let ledger = OrderLedger::new();
        let email = identity();

        for (restaurant_id, item_id) in [("abc", "1"), ("1", ""), ("-1", "1"), ("1", "0")] {
            let err =
                place_order(&catalog, &ledger, Some(&email), restaurant_id, item_id).unwrap_err();
            assert_eq!(err, OrderError::InvalidInput, "ids: {restaurant_id}/{item_id}");
        }
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_unknown_restaurant() {
        let catalog = Catalog::sample();
        let ledger = OrderLedger::new();
        let email = identity();

        let err = place_order(&catalog, &ledger, Some(&email), "99", "1").unwrap_err();
        assert_eq!(err, OrderError::RestaurantNotFound);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_unknown_item_reports_the_restaurant() {
        let catalog = Catalog::sample();
        let ledger = OrderLedger::new();
        let email = identity();

        let err = place_order(&catalog, &ledger, Some(&email), "1", "99").unwrap_err();
        assert_eq!(
            err,
            OrderError::ItemNotFound {
                restaurant_id: RestaurantId::new(1)
            }
        );
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_valid_order_appends_exactly_one_entry() {
        let catalog = Catalog::sample();
        let ledger = OrderLedger::new();
        let email = identity();

        let order = place_order(&catalog, &ledger, Some(&email), "1", "1").unwrap();
        assert_eq!(order.restaurant, "Pizza Palace");
        assert_eq!(order.item, "Margherita Pizza");
        assert_eq!(order.user, Some(email.clone()));

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.for_user(Some(&email)), vec![order]);
    }

    #[test]
    fn test_surrounding_whitespace_is_tolerated() {
        let catalog = Catalog::sample();
        let ledger = OrderLedger::new();
        let email = identity();

        place_order(&catalog, &ledger, Some(&email), " 2 ", " 1 ").unwrap();
        assert_eq!(ledger.snapshot()[0].item, "Classic Burger");
    }

    #[test]
    fn test_duplicate_orders_are_all_recorded() {
        let catalog = Catalog::sample();
        let ledger = OrderLedger::new();
        let email = identity();

        place_order(&catalog, &ledger, Some(&email), "1", "2").unwrap();
        place_order(&catalog, &ledger, Some(&email), "1", "2").unwrap();
        assert_eq!(ledger.len(), 2);
    }
}
