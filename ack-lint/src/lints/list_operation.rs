//! Lint for List operation match fields.

use std::collections::BTreeSet;

use ackgen_config::GeneratorConfig;

use super::resource_location;
use crate::{Diagnostic, Lint};

/// Lint that checks `match_fields` is a non-empty list of distinct names.
pub struct ListOperationLint;

impl Lint for ListOperationLint {
    fn name(&self) -> &'static str {
        "list-operation"
    }

    fn description(&self) -> &'static str {
        "List operation match fields must be non-empty and distinct"
    }

    fn check(&self, config: &GeneratorConfig, diagnostics: &mut Vec<Diagnostic>) {
        for (resource, overrides) in &config.resources {
            let Some(list) = &overrides.list_operation else {
                continue;
            };
            let location = resource_location(resource, &["list_operation", "match_fields"]);

            if list.match_fields.is_empty() {
                diagnostics.push(
                    Diagnostic::error(
                        self.name(),
                        format!(
                            "resource '{}' has a list_operation with no match_fields, so no element can ever match",
                            resource
                        ),
                    )
                    .at(location),
                );
                continue;
            }

            let mut seen = BTreeSet::new();
            for (index, field) in list.match_fields.iter().enumerate() {
                let field_location = format!("{}[{}]", location, index);
                if field.is_empty() {
                    diagnostics.push(
                        Diagnostic::error(self.name(), "match field name is empty")
                            .at(field_location),
                    );
                } else if !seen.insert(field.as_str()) {
                    diagnostics.push(
                        Diagnostic::warning(
                            self.name(),
                            format!("match field '{}' is listed more than once", field),
                        )
                        .at(field_location),
                    );
                }
            }
        }
    }
}
