pub mod collection;
pub mod method;

pub use collection::{Auth, Body, Collection, CollectionStats, Folder, KeyValue, Request};
pub use method::HttpMethod;

use serde::{Deserialize, Deserializer};

/// Treat an explicit `null` the same as a missing field.
///
/// Hoppscotch exports write `null` for unset descriptions, content types and
/// bodies; the renderer only cares about "empty or not".
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
