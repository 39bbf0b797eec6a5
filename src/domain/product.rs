use serde::{Deserialize, Serialize};

use super::wire::{nullable_string, string_or_number};

/// The product an order points at, as joined by the orders query.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderProduct {
    #[serde(default, deserialize_with = "string_or_number")]
    pub product_id: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[cfg(test)]
impl OrderProduct {
    pub fn new(product_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// One entry of an order row's product list.
///
/// Orders currently carry a single product, so the list always has one entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductLine {
    pub product: Option<OrderProduct>,
    pub quantity: u32,
}

impl ProductLine {
    pub fn name(&self) -> Option<&str> {
        self.product.as_ref().map(|p| p.name.as_str())
    }

    pub fn image(&self) -> Option<&str> {
        self.product
            .as_ref()
            .and_then(|p| p.image.as_deref())
            .filter(|image| !image.is_empty())
    }
}
