//! Record definitions for the curriculum knowledge base.

mod activity;
mod concept;

pub use activity::*;
pub use concept::*;

use serde::{Deserialize, Deserializer};

/// Deserialize an explicit `null` the same way as a missing key.
///
/// Pair with `#[serde(default)]`, which only covers the missing-key case.
pub(crate) fn default_on_null<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
