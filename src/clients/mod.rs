//! Typed clients: handles on the view actors, and the data-source and mutation
//! collaborators the pages talk to.

pub mod macros;
mod customers_client;
mod orders_client;
pub mod graphql;

pub use customers_client::CustomersClient;
pub use orders_client::OrdersClient;
pub use graphql::GraphqlClient;

use async_trait::async_trait;

use crate::app_system::ClientError;
use crate::domain::{CustomerRecord, OrderRecord, OrderStatus, UpdatedOrderStatus};

/// Read side: one unparameterised query per table.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch_customers(&self) -> Result<Vec<CustomerRecord>, ClientError>;
    async fn fetch_orders(&self) -> Result<Vec<OrderRecord>, ClientError>;
}

/// Write side: the order status mutation.
#[async_trait]
pub trait StatusMutator: Send + Sync {
    async fn update_order_status(
        &self,
        order_id: &str,
        status: OrderStatus,
    ) -> Result<UpdatedOrderStatus, ClientError>;
}
