//! Append-only in-memory order ledger.
//!
//! Orders live only for the process lifetime; restart loses them.
//! Appends from concurrently handled requests are serialized by a
//! mutex, which is the only synchronization the ledger needs.

use std::sync::{Mutex, PoisonError};

use tasty_core::Email;

/// A placed order.
///
/// Restaurant and item names are denormalized at placement time, so
/// later catalog changes do not retroactively invalidate history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Restaurant name at placement time.
    pub restaurant: String,
    /// Item name at placement time.
    pub item: String,
    /// Email of the ordering user, when one was signed in.
    pub user: Option<Email>,
}

/// Append-only record of placed orders.
#[derive(Debug, Default)]
pub struct OrderLedger {
    orders: Mutex<Vec<Order>>,
}

impl OrderLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an order. Orders are never mutated or removed afterwards.
    pub fn append(&self, order: Order) {
        self.lock().push(order);
    }

    /// All orders whose `user` equals `identity`, in insertion order.
    ///
    /// An absent identity matches orders that were recorded without a
    /// user attached.
    #[must_use]
    pub fn for_user(&self, identity: Option<&Email>) -> Vec<Order> {
        self.lock()
            .iter()
            .filter(|order| order.user.as_ref() == identity)
            .cloned()
            .collect()
    }

    /// Total number of orders recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the ledger is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// A point-in-time copy of every order, in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Order> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Order>> {
        // A poisoned lock only means another request panicked mid-append;
        // the Vec itself is still valid.
        self.orders.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
