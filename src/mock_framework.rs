//! # Mock Framework
//!
//! Utilities for testing pages and clients in isolation.
//!
//! Use [`create_mock_client`] to get a view client and a receiver, then
//! [`expect_action`] or [`expect_snapshot`] to assert what the client sends.
//! [`StaticDataSource`] and [`RecordingMutator`] stand in for the GraphQL
//! collaborators.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot, Semaphore};

use crate::actor_framework::{ViewClient, ViewRequest, ViewState};
use crate::app_system::{ClientError, ViewError};
use crate::clients::{DataSource, StatusMutator};
use crate::domain::{CustomerRecord, OrderRecord, OrderStatus, UpdatedOrderStatus};

/// Creates a view client whose requests land on a receiver the test controls,
/// instead of on a running [`crate::actor_framework::ViewActor`].
pub fn create_mock_client<S: ViewState>(buffer_size: usize) -> (ViewClient<S>, mpsc::Receiver<ViewRequest<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ViewClient::new(sender), receiver)
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<S: ViewState>(
    receiver: &mut mpsc::Receiver<ViewRequest<S>>,
) -> Option<(S::Action, oneshot::Sender<Result<S::ActionResult, ViewError>>)> {
    match receiver.recv().await {
        Some(ViewRequest::Action { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Snapshot request
pub async fn expect_snapshot<S: ViewState>(
    receiver: &mut mpsc::Receiver<ViewRequest<S>>,
) -> Option<oneshot::Sender<Result<S::Snapshot, ViewError>>> {
    match receiver.recv().await {
        Some(ViewRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Data source answering every fetch with the same canned result.
pub struct StaticDataSource {
    customers: Result<Vec<CustomerRecord>, ClientError>,
    orders: Result<Vec<OrderRecord>, ClientError>,
}

impl StaticDataSource {
    pub fn customers(customers: Vec<CustomerRecord>) -> Self {
        Self {
            customers: Ok(customers),
            orders: Ok(Vec::new()),
        }
    }

    pub fn orders(orders: Vec<OrderRecord>) -> Self {
        Self {
            customers: Ok(Vec::new()),
            orders: Ok(orders),
        }
    }

    pub fn failing(error: ClientError) -> Self {
        Self {
            customers: Err(error.clone()),
            orders: Err(error),
        }
    }
}

#[async_trait]
impl DataSource for StaticDataSource {
    async fn fetch_customers(&self) -> Result<Vec<CustomerRecord>, ClientError> {
        self.customers.clone()
    }

    async fn fetch_orders(&self) -> Result<Vec<OrderRecord>, ClientError> {
        self.orders.clone()
    }
}

/// Mutator that records every call. It can fail (for every status or just one)
/// and can hold each call until [`RecordingMutator::release`] lets it through.
#[derive(Default)]
pub struct RecordingMutator {
    calls: Mutex<Vec<(String, OrderStatus)>>,
    fail_with: Option<ClientError>,
    fail_only: Option<OrderStatus>,
    gate: Option<Arc<Semaphore>>,
}

impl RecordingMutator {
    pub fn failing(error: ClientError) -> Self {
        Self {
            fail_with: Some(error),
            ..Self::default()
        }
    }

    /// Restricts failures to calls for `status`.
    pub fn only_for(mut self, status: OrderStatus) -> Self {
        self.fail_only = Some(status);
        self
    }

    pub fn gated(mut self) -> Self {
        self.gate = Some(Arc::new(Semaphore::new(0)));
        self
    }

    /// Lets one held call through.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }

    pub fn calls(&self) -> Vec<(String, OrderStatus)> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    fn should_fail(&self, status: OrderStatus) -> Option<ClientError> {
        match self.fail_only {
            Some(only) if only != status => None,
            _ => self.fail_with.clone(),
        }
    }
}

#[async_trait]
impl StatusMutator for RecordingMutator {
    async fn update_order_status(
        &self,
        order_id: &str,
        status: OrderStatus,
    ) -> Result<UpdatedOrderStatus, ClientError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((order_id.to_string(), status));
        }
        if let Some(gate) = &self.gate {
            if let Ok(permit) = gate.acquire().await {
                permit.forget();
            }
        }
        match self.should_fail(status) {
            Some(error) => Err(error),
            None => Ok(UpdatedOrderStatus {
                order_new_id: order_id.to_string(),
                status: Some(status.to_string()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::OrdersClient;
    use crate::orders_view::{OrdersAction, OrdersActionResult, OrdersSnapshot, OrdersView};
    use crate::pages::OrdersPage;
    use crate::view_model::{FetchStatus, Pagination, StatusMap};

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<OrdersView>(10);
        let client = OrdersClient::new(client);

        let set_task = tokio::spawn(async move { client.set_status("o1".to_string(), OrderStatus::Shipped).await });

        let (action, responder) = expect_action(&mut receiver).await.expect("Expected Action request");
        match action {
            OrdersAction::SetStatus { order_id, status } => {
                assert_eq!(order_id, "o1");
                assert_eq!(status, OrderStatus::Shipped);
            }
            other => panic!("Unexpected action: {:?}", other),
        }
        responder
            .send(Ok(OrdersActionResult::StatusSet(Some("Processing".to_string()))))
            .unwrap();

        let result = set_task.await.unwrap();
        assert_eq!(result, Ok(Some("Processing".to_string())));
    }

    #[tokio::test]
    async fn test_unexpected_result_is_reported() {
        let (client, mut receiver) = create_mock_client::<OrdersView>(10);
        let client = OrdersClient::new(client);

        let page_task = tokio::spawn(async move { client.set_page(2).await });
        let (_, responder) = expect_action(&mut receiver).await.expect("Expected Action request");
        responder.send(Ok(OrdersActionResult::FetchStarted(1))).unwrap();

        let result = page_task.await.unwrap();
        assert!(matches!(result, Err(ViewError::ActorCommunicationError(_))));
    }

    #[tokio::test]
    async fn test_displayed_status_reads_snapshot() {
        let (client, mut receiver) = create_mock_client::<OrdersView>(10);
        let page = OrdersPage::new(
            Arc::new(StaticDataSource::orders(Vec::new())),
            Arc::new(RecordingMutator::default()),
            OrdersClient::new(client),
            false,
        );

        let shown_task = tokio::spawn(async move { page.displayed_status("o1").await });

        let responder = expect_snapshot(&mut receiver).await.expect("Expected Snapshot request");
        let records = vec![OrderRecord::new("o1", "2024-01-01").with_status("Shipped")];
        let mut statuses = StatusMap::default();
        statuses.initialize(&records);
        responder
            .send(Ok(OrdersSnapshot {
                pagination: Pagination::default(),
                status: FetchStatus::Loaded(records),
                statuses,
            }))
            .unwrap();

        assert_eq!(shown_task.await.unwrap(), Ok("Shipped".to_string()));
    }
}
