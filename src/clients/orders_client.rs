use tracing::{debug, instrument};

use crate::actor_framework::ViewClient;
use crate::app_system::ViewError;
use crate::domain::{OrderRecord, OrderStatus};
use crate::orders_view::{OrdersAction, OrdersActionResult, OrdersView};

/// Client for the orders view actor.
#[derive(Clone)]
pub struct OrdersClient {
    inner: ViewClient<OrdersView>,
}

crate::impl_view_client_methods!(OrdersClient, OrdersView, OrdersAction, OrdersActionResult, OrderRecord);

impl OrdersClient {
    /// Records the selection and returns the one it replaced.
    #[instrument(skip(self))]
    pub async fn set_status(&self, order_id: String, status: OrderStatus) -> Result<Option<String>, ViewError> {
        debug!("Sending request");
        match self.inner.perform_action(OrdersAction::SetStatus { order_id, status }).await? {
            OrdersActionResult::StatusSet(previous) => Ok(previous),
            other => Err(ViewError::ActorCommunicationError(format!("Unexpected result: {:?}", other))),
        }
    }

    #[instrument(skip(self))]
    pub async fn confirm_status(&self, order_id: String, status: Option<String>) -> Result<(), ViewError> {
        debug!("Sending request");
        match self.inner.perform_action(OrdersAction::ConfirmStatus { order_id, status }).await? {
            OrdersActionResult::StatusConfirmed => Ok(()),
            other => Err(ViewError::ActorCommunicationError(format!("Unexpected result: {:?}", other))),
        }
    }

    /// Rolls `order_id` back to its last confirmed status if it still shows `expected`.
    #[instrument(skip(self))]
    pub async fn revert_status(&self, order_id: String, expected: OrderStatus) -> Result<bool, ViewError> {
        debug!("Sending request");
        match self.inner.perform_action(OrdersAction::RevertStatus { order_id, expected }).await? {
            OrdersActionResult::StatusReverted(reverted) => Ok(reverted),
            other => Err(ViewError::ActorCommunicationError(format!("Unexpected result: {:?}", other))),
        }
    }
}
