//! Lint for identifier field overrides.

use ackgen_config::GeneratorConfig;

use super::resource_location;
use crate::{Diagnostic, Lint};

/// Lint that errors on a blank `name_field`.
pub struct NameFieldLint;

impl Lint for NameFieldLint {
    fn name(&self) -> &'static str {
        "name-field"
    }

    fn description(&self) -> &'static str {
        "Identifier field overrides must name a field"
    }

    fn check(&self, config: &GeneratorConfig, diagnostics: &mut Vec<Diagnostic>) {
        for (resource, overrides) in &config.resources {
            if overrides
                .name_field()
                .is_some_and(|name_field| name_field.trim().is_empty())
            {
                diagnostics.push(
                    Diagnostic::error(
                        self.name(),
                        format!("resource '{}' sets an empty name_field", resource),
                    )
                    .at(resource_location(resource, &["name_field"])),
                );
            }
        }
    }
}
