use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::product::{OrderProduct, ProductLine};
use super::wire::{null_as_default, nullable_string, string_or_number};

/// The statuses an operator may pick for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Processing,
    Shipped,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [Self::Processing, Self::Shipped, Self::Delivered];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Processing => "Processing",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown order status {0:?}, expected one of Processing, Shipped, Delivered")]
pub struct ParseStatusError(pub String);

impl FromStr for OrderStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

/// The user an order belongs to. Only the email is queried.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderUser {
    #[serde(default, deserialize_with = "nullable_string")]
    pub email: String,
}

/// An order as returned by the `orderNews` query.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub order_new_id: String,
    /// Free text on the wire; usually one of the [`OrderStatus`] spellings.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_amount: f64,
    #[serde(default, deserialize_with = "string_or_number")]
    pub order_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity: u32,
    #[serde(default, deserialize_with = "nullable_string")]
    pub shipping_address: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub shipping_city: String,
    #[serde(default)]
    pub user: Option<OrderUser>,
    #[serde(default)]
    pub product: Option<OrderProduct>,
}

impl OrderRecord {
    pub fn email(&self) -> &str {
        self.user.as_ref().map(|u| u.email.as_str()).unwrap_or_default()
    }
}

#[cfg(test)]
impl OrderRecord {
    pub fn new(id: impl Into<String>, order_date: impl Into<String>) -> Self {
        Self {
            order_new_id: id.into(),
            order_date: order_date.into(),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.user = Some(OrderUser { email: email.into() });
        self
    }

    pub fn with_product(mut self, product: OrderProduct, quantity: u32) -> Self {
        self.product = Some(product);
        self.quantity = quantity;
        self
    }

    pub fn with_total(mut self, total_amount: f64) -> Self {
        self.total_amount = total_amount;
        self
    }
}

/// Display-ready order row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRow {
    /// Position of the record in the builder input, before sorting.
    pub key: usize,
    pub display_number: usize,
    pub order_new_id: String,
    pub email: String,
    pub products: Vec<ProductLine>,
    pub total_amount: f64,
    /// Mirrors the single product line's quantity; not a sum over `products`.
    pub total_quantity: u32,
    /// Raw order date; formatting is a column render rule.
    pub order_date: String,
    pub shipping_address: String,
    pub shipping_city: String,
    /// Value shown by the status selector.
    pub status: String,
}

/// Result of the status mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatedOrderStatus {
    #[serde(deserialize_with = "string_or_number")]
    pub order_new_id: String,
    #[serde(default)]
    pub status: Option<String>,
}
