//! Serde support for partial-update payloads.
//!
//! A patch field is `Option<Option<T>>`:
//!
//! | JSON            | Value              |
//! |-----------------|--------------------|
//! | key absent      | `None`             |
//! | `"key": null`   | `Some(None)`       |
//! | `"key": value`  | `Some(Some(value))`|
//!
//! Plain serde collapses the first two cases, so fields must be annotated
//! with `#[serde(default, deserialize_with = "deserialize_some")]`.

use serde::{Deserialize, Deserializer};

/// Deserialize a present key (including an explicit `null`) as `Some(..)`.
///
/// Absent keys never reach the deserializer and fall back to `Default`
/// (`None`) via `#[serde(default)]`.
pub fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
