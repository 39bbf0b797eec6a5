//! Serde helpers for the loosely typed fields the GraphQL layer hands back.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Text(String),
    Int(i64),
    Float(f64),
}

impl From<StringOrNumber> for String {
    fn from(value: StringOrNumber) -> Self {
        match value {
            StringOrNumber::Text(text) => text,
            StringOrNumber::Int(n) => n.to_string(),
            StringOrNumber::Float(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                (n as i64).to_string()
            }
            StringOrNumber::Float(n) => n.to_string(),
        }
    }
}

/// `ID` scalars and dates arrive either as strings or as bare numbers.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<StringOrNumber>::deserialize(deserializer).map(|v| v.map(String::from).unwrap_or_default())
}

/// Null and missing text fields both render as blank cells.
pub fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Wraps a present value in `Some`, so a `null` reaches `T` instead of becoming
/// `None`. Pair with `#[serde(default)]` to keep `None` for missing fields.
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Null numbers count as zero, like missing ones.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
