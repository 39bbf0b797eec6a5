use tracing::{debug, info};

use crate::actor_framework::ViewState;
use crate::app_system::ViewError;
use crate::domain::OrderRecord;
use crate::view_model::{Fetch, FetchStatus, Pagination, StatusMap};

use super::actions::{OrdersAction, OrdersActionResult};

#[derive(Debug, Clone, PartialEq)]
pub struct OrdersSnapshot {
    pub pagination: Pagination,
    pub status: FetchStatus<OrderRecord>,
    pub statuses: StatusMap,
}

#[derive(Debug, Default)]
pub struct OrdersView {
    pagination: Pagination,
    fetch: Fetch<OrderRecord>,
    statuses: StatusMap,
}

impl OrdersView {
    pub fn new(page_size: usize) -> Self {
        Self {
            pagination: Pagination::new(page_size),
            ..Self::default()
        }
    }

    fn ensure_loaded(&self, order_id: &str) -> Result<(), ViewError> {
        let records = self.fetch.records().ok_or(ViewError::NotLoaded)?;
        if records.iter().any(|order| order.order_new_id == order_id) {
            Ok(())
        } else {
            Err(ViewError::UnknownOrder(order_id.to_string()))
        }
    }
}

impl ViewState for OrdersView {
    const NAME: &'static str = "orders";

    type Action = OrdersAction;
    type ActionResult = OrdersActionResult;
    type Snapshot = OrdersSnapshot;

    fn snapshot(&self) -> OrdersSnapshot {
        OrdersSnapshot {
            pagination: self.pagination,
            status: self.fetch.status().clone(),
            statuses: self.statuses.clone(),
        }
    }

    fn handle_action(&mut self, action: OrdersAction) -> Result<OrdersActionResult, ViewError> {
        match action {
            OrdersAction::BeginFetch => Ok(OrdersActionResult::FetchStarted(self.fetch.begin())),
            OrdersAction::CompleteFetch { generation, outcome } => {
                let applied = self.fetch.complete(generation, outcome);
                if applied {
                    if let Some(records) = self.fetch.records() {
                        self.statuses.initialize(records);
                        info!(orders = records.len(), "Status selections seeded");
                    }
                }
                Ok(OrdersActionResult::FetchCompleted(applied))
            }
            OrdersAction::SetStatus { order_id, status } => {
                self.ensure_loaded(&order_id)?;
                let previous = self.statuses.set(&order_id, status);
                debug!(order_id = %order_id, %status, ?previous, "Status selected");
                Ok(OrdersActionResult::StatusSet(previous))
            }
            OrdersAction::ConfirmStatus { order_id, status } => {
                self.statuses.confirm(&order_id, status);
                Ok(OrdersActionResult::StatusConfirmed)
            }
            OrdersAction::RevertStatus { order_id, expected } => {
                let reverted = self.statuses.restore(&order_id, expected.as_str());
                if reverted {
                    debug!(
                        order_id = %order_id,
                        restored = ?self.statuses.confirmed_status_of(&order_id),
                        "Status rolled back"
                    );
                }
                Ok(OrdersActionResult::StatusReverted(reverted))
            }
            OrdersAction::SetPage(page) => {
                self.pagination.set_page(page)?;
                Ok(OrdersActionResult::PageChanged(page))
            }
        }
    }
}
