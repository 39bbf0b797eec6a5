use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::wire::{nullable_string, present, string_or_number};

/// Registration timestamp exactly as the data source sent it.
///
/// Usually milliseconds since the epoch, but some backends send it as text and
/// some rows carry garbage. Coercion to a date happens in the view model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTimestamp {
    Number(f64),
    Text(String),
    /// `null`, booleans and anything else the field should not hold.
    Other(Value),
}

/// A registered customer as returned by the `users` query.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CustomerRecord {
    #[serde(default, deserialize_with = "string_or_number")]
    pub user_id: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub username: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub email: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub first_name: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub last_name: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub address: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub phone_number: String,
    /// `None` only when the field is missing; an explicit `null` is kept.
    #[serde(default, deserialize_with = "present")]
    pub registration_date: Option<RawTimestamp>,
}

#[cfg(test)]
impl CustomerRecord {
    pub fn new(user_id: impl Into<String>, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            username: username.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    pub fn registered_at(mut self, raw: RawTimestamp) -> Self {
        self.registration_date = Some(raw);
        self
    }
}

/// Display-ready customer row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerRow {
    pub key: usize,
    pub display_number: usize,
    pub user_id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub phone_number: String,
    /// `YYYY-MM-DD` in UTC, or `"Invalid Date"`.
    pub registration_date: String,
}
