use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, info, instrument, warn};

use crate::app_system::ClientError;
use crate::config::Settings;
use crate::domain::{CustomerRecord, OrderRecord, OrderStatus, UpdatedOrderStatus};

use super::{DataSource, StatusMutator};

pub const GET_USERS_QUERY: &str = r#"
query GetUsers {
  users {
    user_id
    username
    email
    first_name
    last_name
    address
    phone_number
    registration_date
  }
}
"#;

pub const GET_ORDERS_QUERY: &str = r#"
query GetOrders {
  orderNews {
    order_new_id
    status
    total_amount
    order_date
    quantity
    shipping_address
    shipping_city
    user {
      email
    }
    product {
      product_id
      name
      image
    }
  }
}
"#;

pub const UPDATE_ORDER_STATUS_MUTATION: &str = r#"
mutation UpdateOrderStatus($order_new_id: ID!, $status: String!) {
  updateOrderStatus(order_new_id: $order_new_id, status: $status) {
    order_new_id
    status
  }
}
"#;

#[derive(Debug, Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: Value,
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct GraphqlErrorEntry {
    message: String,
}

#[derive(Debug, Deserialize)]
struct UsersData {
    users: Option<Vec<CustomerRecord>>,
}

#[derive(Debug, Deserialize)]
struct OrdersData {
    #[serde(rename = "orderNews")]
    order_news: Option<Vec<OrderRecord>>,
}

#[derive(Debug, Deserialize)]
struct UpdateOrderStatusData {
    #[serde(rename = "updateOrderStatus")]
    update_order_status: Option<UpdatedOrderStatus>,
}

fn joined_messages(errors: &[GraphqlErrorEntry]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// GraphQL-over-HTTP adapter for both the data source and the mutation.
#[derive(Clone)]
pub struct GraphqlClient {
    http: Client,
    endpoint: String,
    auth_token: Option<String>,
}

impl GraphqlClient {
    pub fn new(settings: &Settings) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            endpoint: settings.endpoint.clone(),
            auth_token: settings.auth_token.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Posts one operation and unwraps the `{data, errors}` envelope.
    async fn execute<T: DeserializeOwned>(&self, query: &str, variables: Value) -> Result<T, ClientError> {
        let mut request = self.http.post(&self.endpoint).json(&GraphqlRequest { query, variables });
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        debug!(status = status.as_u16(), bytes = body.len(), "Received response");

        let envelope = serde_json::from_slice::<GraphqlResponse<T>>(&body);
        if !status.is_success() {
            // GraphQL servers often answer failed operations with 4xx plus an
            // `errors` array; prefer those messages over the bare status.
            return match envelope {
                Ok(envelope) if !envelope.errors.is_empty() => {
                    Err(ClientError::GraphQl(joined_messages(&envelope.errors)))
                }
                _ => Err(ClientError::Status(status.as_u16())),
            };
        }

        let envelope = envelope.map_err(|e| ClientError::Decode(e.to_string()))?;
        if !envelope.errors.is_empty() {
            return Err(ClientError::GraphQl(joined_messages(&envelope.errors)));
        }
        envelope.data.ok_or(ClientError::MissingData("data"))
    }
}

#[async_trait]
impl DataSource for GraphqlClient {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch_customers(&self) -> Result<Vec<CustomerRecord>, ClientError> {
        let data: UsersData = self.execute(GET_USERS_QUERY, json!({})).await?;
        let users = data.users.ok_or(ClientError::MissingData("users"))?;
        info!(count = users.len(), "Fetched customers");
        Ok(users)
    }

    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch_orders(&self) -> Result<Vec<OrderRecord>, ClientError> {
        let data: OrdersData = self.execute(GET_ORDERS_QUERY, json!({})).await?;
        let orders = data.order_news.ok_or(ClientError::MissingData("orderNews"))?;
        info!(count = orders.len(), "Fetched orders");
        Ok(orders)
    }
}

#[async_trait]
impl StatusMutator for GraphqlClient {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn update_order_status(
        &self,
        order_id: &str,
        status: OrderStatus,
    ) -> Result<UpdatedOrderStatus, ClientError> {
        let variables = json!({ "order_new_id": order_id, "status": status.as_str() });
        let data: UpdateOrderStatusData = self.execute(UPDATE_ORDER_STATUS_MUTATION, variables).await?;
        match data.update_order_status {
            Some(updated) => {
                info!(order_id = %updated.order_new_id, status = ?updated.status, "Order status updated");
                Ok(updated)
            }
            None => {
                warn!("Mutation returned no order");
                Err(ClientError::MissingData("updateOrderStatus"))
            }
        }
    }
}
