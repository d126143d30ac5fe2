//! Serde helpers that trim request strings before `validator` sees them.
//!
//! Length rules then apply to the stored value rather than to padded input.

use serde::{Deserialize, Deserializer};

/// Deserialize a `String` with surrounding whitespace removed.
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().to_string())
}

/// Deserialize an `Option<String>` with surrounding whitespace removed.
///
/// Use together with `#[serde(default)]` so a missing field stays `None`.
pub fn option<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.map(|v| v.trim().to_string()))
}
