use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::serde_helpers::null_as_default;

/// Instructions for unpacking an "Attributes" string map into real fields.
///
/// Some APIs (SNS topics, SQS queues) pass several schema'd fields through a
/// single `map[string]string` parameter. Each key listed in `fields` becomes
/// a generated field, on the desired-state side when writable and on the
/// observed-state side when read-only.
///
/// Keys that are *not* listed are excluded from generated output entirely,
/// even if the live API returns them. Omission is exclusion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnpackAttributesMapConfig {
    /// Field instructions keyed by the original attribute key
    #[serde(default, deserialize_with = "null_as_default")]
    pub fields: BTreeMap<String, FieldGeneratorConfig>,
}

/// How a single unpacked attribute maps onto the generated resource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldGeneratorConfig {
    /// The value cannot be set by the user and belongs on the observed state
    #[serde(default)]
    pub is_read_only: bool,

    /// The value is the account ID owning the resource. It is redirected to
    /// the shared resource metadata slot instead of an ordinary field.
    #[serde(default)]
    pub contains_owner_account_id: bool,
}

/// Where an unpacked attribute lands in the generated resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributePlacement {
    /// Desired state: user settable, sent on create and update
    Spec,
    /// Observed state: populated from reads, never written
    Status,
    /// The shared owner account ID metadata slot
    OwnerAccountId,
}

impl FieldGeneratorConfig {
    /// Get the placement of this field.
    ///
    /// The owner account flag wins over the read-only flag.
    pub fn placement(&self) -> AttributePlacement {
        if self.contains_owner_account_id {
            AttributePlacement::OwnerAccountId
        } else if self.is_read_only {
            AttributePlacement::Status
        } else {
            AttributePlacement::Spec
        }
    }
}

/// A live attribute map split by placement, with unlisted keys dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionedAttributes {
    pub spec: BTreeMap<String, String>,
    pub status: BTreeMap<String, String>,
    pub owner_account_id: Option<String>,
}

impl UnpackAttributesMapConfig {
    /// Classify an attribute key. Returns `None` for keys that are excluded.
    pub fn classify(&self, key: &str) -> Option<AttributePlacement> {
        self.fields.get(key).map(FieldGeneratorConfig::placement)
    }

    /// Returns true if the attribute key is generated at all.
    pub fn includes(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Attribute keys that belong on the desired-state side.
    pub fn spec_fields(&self) -> impl Iterator<Item = &str> {
        self.fields_in(AttributePlacement::Spec)
    }

    /// Attribute keys that belong on the observed-state side.
    pub fn status_fields(&self) -> impl Iterator<Item = &str> {
        self.fields_in(AttributePlacement::Status)
    }

    /// Attribute keys flagged as holding the owner account ID.
    ///
    /// A well-formed config yields at most one key here.
    pub fn owner_account_id_fields(&self) -> impl Iterator<Item = &str> {
        self.fields_in(AttributePlacement::OwnerAccountId)
    }

    fn fields_in(&self, placement: AttributePlacement) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(move |(_, field)| field.placement() == placement)
            .map(|(key, _)| key.as_str())
    }

    /// Split a live attribute map returned by the API.
    ///
    /// Keys not listed in `fields` are dropped. If several keys are flagged
    /// as the owner account ID, the first one encountered wins.
    pub fn partition<I, K, V>(&self, attributes: I) -> PartitionedAttributes
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut out = PartitionedAttributes::default();
        for (key, value) in attributes {
            let key = key.as_ref();
            match self.classify(key) {
                Some(AttributePlacement::Spec) => {
                    out.spec.insert(key.to_string(), value.into());
                }
                Some(AttributePlacement::Status) => {
                    out.status.insert(key.to_string(), value.into());
                }
                Some(AttributePlacement::OwnerAccountId) => {
                    if out.owner_account_id.is_none() {
                        out.owner_account_id = Some(value.into());
                    }
                }
                None => {}
            }
        }
        out
    }
}
