use crate::domain::{OrderRecord, OrderStatus};

/// Events the orders page feeds into its view.
#[derive(Debug, Clone)]
pub enum OrdersAction {
    /// A fetch is about to start.
    BeginFetch,
    /// A fetch finished. A successful completion for the current generation
    /// reseeds the status selections.
    CompleteFetch {
        generation: u64,
        outcome: Result<Vec<OrderRecord>, String>,
    },
    /// The operator picked a status for an order.
    ///
    /// # Errors
    /// Fails when no orders are loaded or the id is not among them.
    SetStatus { order_id: String, status: OrderStatus },
    /// The server accepted a status for an order.
    ConfirmStatus { order_id: String, status: Option<String> },
    /// Rolls a selection back to the last confirmed status, provided it still
    /// shows the rejected `expected` value.
    RevertStatus { order_id: String, expected: OrderStatus },
    /// The table moved to another page.
    SetPage(u32),
}

/// Results from OrdersAction - variants match 1:1 with OrdersAction
#[derive(Debug, Clone, PartialEq)]
pub enum OrdersActionResult {
    FetchStarted(u64),
    /// `false` when the completion belonged to a superseded fetch.
    FetchCompleted(bool),
    /// Carries the selection that was replaced.
    StatusSet(Option<String>),
    StatusConfirmed,
    /// `false` when a newer selection was left in place.
    StatusReverted(bool),
    PageChanged(u32),
}
