use std::collections::HashMap;

use crate::domain::{OrderRecord, OrderStatus};

/// Placeholder shown by a status selector with nothing selected.
pub const STATUS_PLACEHOLDER: &str = "Select";

/// Currently selected status per order id.
///
/// Seeded from the fetched orders and then edited point-wise. Entries are never
/// pruned; the map only feeds the selectors' displayed values, so an entry for an
/// order that has since disappeared is harmless.
///
/// Alongside each selection the map keeps the last status the server accepted
/// (the fetched one until a mutation succeeds). Rollbacks go back to that value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusMap {
    statuses: HashMap<String, Option<String>>,
    confirmed: HashMap<String, Option<String>>,
}

impl StatusMap {
    /// Replaces the whole map with the statuses of `records`.
    pub fn initialize(&mut self, records: &[OrderRecord]) {
        self.statuses = records
            .iter()
            .map(|order| (order.order_new_id.clone(), order.status.clone()))
            .collect();
        self.confirmed = self.statuses.clone();
    }

    /// Records a selection and returns what was there before.
    pub fn set(&mut self, order_id: &str, status: OrderStatus) -> Option<String> {
        self.statuses
            .insert(order_id.to_string(), Some(status.to_string()))
            .flatten()
    }

    /// The server accepted `status` for `order_id`.
    pub fn confirm(&mut self, order_id: &str, status: Option<String>) {
        self.confirmed.insert(order_id.to_string(), status);
    }

    /// Rolls the selection back to the last confirmed status, but only while it
    /// still shows the rejected `expected` value.
    pub fn restore(&mut self, order_id: &str, expected: &str) -> bool {
        let confirmed = self.confirmed.get(order_id).cloned().flatten();
        match self.statuses.get_mut(order_id) {
            Some(current) if current.as_deref() == Some(expected) => {
                *current = confirmed;
                true
            }
            _ => false,
        }
    }

    pub fn status_of(&self, order_id: &str) -> Option<&str> {
        self.statuses.get(order_id).and_then(|status| status.as_deref())
    }

    pub fn confirmed_status_of(&self, order_id: &str) -> Option<&str> {
        self.confirmed.get(order_id).and_then(|status| status.as_deref())
    }

    /// The selector's value: the stored status, or the placeholder.
    pub fn displayed(&self, order_id: &str) -> &str {
        self.status_of(order_id)
            .filter(|status| !status.is_empty())
            .unwrap_or(STATUS_PLACEHOLDER)
    }

    pub fn contains(&self, order_id: &str) -> bool {
        self.statuses.contains_key(order_id)
    }
}
