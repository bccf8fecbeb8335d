//! Serde helpers shared by the config types.

use serde::{Deserialize, Deserializer};

/// Deserialize an explicit `null` the same way as a missing key.
///
/// `resources:` with nothing after it is a null in YAML; it should load as
/// an empty map rather than fail.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
