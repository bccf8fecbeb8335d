use serde::{Deserialize, Serialize};

use crate::{ExceptionsConfig, ListOperationConfig, RenamesConfig, UnpackAttributesMapConfig};

/// Generator instructions for a single resource.
///
/// Every sub-config is independent. `None` means "use the generator
/// default"; a present but empty table (`exceptions: {}`) is kept as
/// `Some` and survives serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceGeneratorConfig {
    /// Member of the Create input shape that holds the resource identifier.
    ///
    /// When unset the generator tries "Name", "{Resource}Name" and
    /// "{Resource}Id" in turn.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_field: Option<String>,

    /// Instructions for unpacking a raw attribute map into real fields
    #[serde(
        default,
        rename = "unpack_attributes_map",
        skip_serializing_if = "Option::is_none"
    )]
    pub unpack_attributes: Option<UnpackAttributesMapConfig>,

    /// HTTP status codes for exception shapes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exceptions: Option<ExceptionsConfig>,

    /// Field renames per operation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renames: Option<RenamesConfig>,

    /// Match keys for unfilterable List operations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_operation: Option<ListOperationConfig>,
}

impl ResourceGeneratorConfig {
    /// Get the identifier field override
    pub fn name_field(&self) -> Option<&str> {
        self.name_field.as_deref()
    }

    /// Exception shape signalling a missing resource, if configured.
    pub fn not_found_shape(&self) -> Option<&str> {
        self.exceptions
            .as_ref()
            .and_then(ExceptionsConfig::not_found_shape)
    }

    /// Generated name of an input field of the given operation.
    pub fn input_field_name<'a>(&'a self, operation_id: &str, field: &'a str) -> &'a str {
        match &self.renames {
            Some(renames) => renames.input_name(operation_id, field),
            None => field,
        }
    }

    /// Generated name of an output field of the given operation.
    pub fn output_field_name<'a>(&'a self, operation_id: &str, field: &'a str) -> &'a str {
        match &self.renames {
            Some(renames) => renames.output_name(operation_id, field),
            None => field,
        }
    }

    /// Returns true if no override is set at all.
    pub fn is_empty(&self) -> bool {
        self.name_field.is_none()
            && self.unpack_attributes.is_none()
            && self.exceptions.is_none()
            && self.renames.is_none()
            && self.list_operation.is_none()
    }
}
