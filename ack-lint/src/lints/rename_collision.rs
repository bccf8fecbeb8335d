//! Lint for colliding field renames.

use std::collections::BTreeMap;

use ackgen_config::GeneratorConfig;

use super::resource_location;
use crate::{Diagnostic, Lint};

/// Lint that errors on many-to-one renames and empty rename targets.
pub struct RenameCollisionLint;

impl Lint for RenameCollisionLint {
    fn name(&self) -> &'static str {
        "rename-collision"
    }

    fn description(&self) -> &'static str {
        "Renames within one operation direction must be one-to-one"
    }

    fn check(&self, config: &GeneratorConfig, diagnostics: &mut Vec<Diagnostic>) {
        for (resource, overrides) in &config.resources {
            let Some(renames) = &overrides.renames else {
                continue;
            };

            for (operation, tables) in &renames.operations {
                for (direction, table) in [
                    ("input_fields", &tables.input_fields),
                    ("output_fields", &tables.output_fields),
                ] {
                    let location = resource_location(
                        resource,
                        &["renames", "operations", operation.as_str(), direction],
                    );
                    self.check_table(table, &location, diagnostics);
                }
            }
        }
    }
}

impl RenameCollisionLint {
    fn check_table(
        &self,
        table: &BTreeMap<String, String>,
        location: &str,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        // renamed -> original that claimed it first
        let mut seen: BTreeMap<&str, &str> = BTreeMap::new();

        for (original, renamed) in table {
            if renamed.is_empty() {
                diagnostics.push(
                    Diagnostic::error(
                        self.name(),
                        format!("field '{}' is renamed to an empty name", original),
                    )
                    .at(format!("{}.{}", location, original)),
                );
                continue;
            }

            if let Some(first) = seen.get(renamed.as_str()) {
                diagnostics.push(
                    Diagnostic::error(
                        self.name(),
                        format!(
                            "fields '{}' and '{}' are both renamed to '{}'",
                            first, original, renamed
                        ),
                    )
                    .at(format!("{}.{}", location, original)),
                );
            } else {
                seen.insert(renamed, original);
            }
        }
    }
}
