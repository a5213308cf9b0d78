//! Shared serde helpers for patch types.
//!
//! A patch field on a nullable entity attribute has three states: absent
//! (keep the stored value), explicitly `null` (clear it), and a value
//! (replace it). Plain `Option<Option<T>>` cannot distinguish the first two
//! under serde's default behaviour, so nullable patch fields are annotated
//! with `#[serde(default, deserialize_with = "double_option")]`.

use serde::{Deserialize, Deserializer};

/// Deserialize into `Some(inner)` whenever the field is present, so that an
/// explicit `null` becomes `Some(None)` rather than `None`.
pub fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
  T: Deserialize<'de>,
  D: Deserializer<'de>,
{
  Deserialize::deserialize(de).map(Some)
}
