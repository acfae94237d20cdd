use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Decode an optional field, mapping a value of the wrong JSON type to `None`
/// instead of rejecting the whole payload.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}
