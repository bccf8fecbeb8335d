use serde::{Deserialize, Serialize};

use crate::serde_helpers::null_as_default;

/// Instructions for List operations that cannot filter server side.
///
/// Some APIs (S3's ListBuckets) always return every object. The generated
/// read code then picks the element whose `match_fields` all equal the
/// desired resource's values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOperationConfig {
    /// Field names on the list element shape that together identify it
    #[serde(default, deserialize_with = "null_as_default")]
    pub match_fields: Vec<String>,
}

impl ListOperationConfig {
    /// Returns true if `element` matches `target` on every match field.
    ///
    /// A field missing on either side is a mismatch, and an empty
    /// `match_fields` list matches nothing. Fields not listed are never
    /// compared.
    pub fn matches<V, E, T>(&self, element: E, target: T) -> bool
    where
        V: PartialEq,
        E: Fn(&str) -> Option<V>,
        T: Fn(&str) -> Option<V>,
    {
        !self.match_fields.is_empty()
            && self
                .match_fields
                .iter()
                .all(|field| match (element(field), target(field)) {
                    (Some(a), Some(b)) => a == b,
                    _ => false,
                })
    }
}
