use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::serde_helpers::null_as_default;

/// Field renames for the operations of one resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenamesConfig {
    /// Rename tables keyed by operation ID
    #[serde(default, deserialize_with = "null_as_default")]
    pub operations: BTreeMap<String, OperationRenamesConfig>,
}

/// Renames applied to one operation's input and output shapes.
///
/// Each table maps the original wire field name to its generated name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationRenamesConfig {
    #[serde(default, deserialize_with = "null_as_default")]
    pub input_fields: BTreeMap<String, String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub output_fields: BTreeMap<String, String>,
}

impl OperationRenamesConfig {
    /// Generated name of an input field, or the field itself if not renamed.
    pub fn input_name<'a>(&'a self, field: &'a str) -> &'a str {
        self.input_fields
            .get(field)
            .map(String::as_str)
            .unwrap_or(field)
    }

    /// Generated name of an output field, or the field itself if not renamed.
    pub fn output_name<'a>(&'a self, field: &'a str) -> &'a str {
        self.output_fields
            .get(field)
            .map(String::as_str)
            .unwrap_or(field)
    }
}

impl RenamesConfig {
    /// Get the rename tables for an operation.
    pub fn operation(&self, operation_id: &str) -> Option<&OperationRenamesConfig> {
        self.operations.get(operation_id)
    }

    /// Generated name of an input field of the given operation.
    ///
    /// Operations without a rename table leave every field untouched.
    pub fn input_name<'a>(&'a self, operation_id: &str, field: &'a str) -> &'a str {
        match self.operation(operation_id) {
            Some(op) => op.input_name(field),
            None => field,
        }
    }

    /// Generated name of an output field of the given operation.
    pub fn output_name<'a>(&'a self, operation_id: &str, field: &'a str) -> &'a str {
        match self.operation(operation_id) {
            Some(op) => op.output_name(field),
            None => field,
        }
    }
}
