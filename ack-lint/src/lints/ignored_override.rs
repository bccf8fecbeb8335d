//! Lint for overrides on ignored resources.

use ackgen_config::GeneratorConfig;

use super::resource_location;
use crate::{Diagnostic, Lint};

/// Lint that warns when a resource both has an override and is ignored.
///
/// Ignored resources are skipped wholesale, so the override never applies.
pub struct IgnoredOverrideLint;

impl Lint for IgnoredOverrideLint {
    fn name(&self) -> &'static str {
        "ignored-override"
    }

    fn description(&self) -> &'static str {
        "Overrides for ignored resources are never applied"
    }

    fn check(&self, config: &GeneratorConfig, diagnostics: &mut Vec<Diagnostic>) {
        for (resource, overrides) in &config.resources {
            if config.is_resource_ignored(resource) && !overrides.is_empty() {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "resource '{}' is listed in ignore.resource_names; its override has no effect",
                            resource
                        ),
                    )
                    .at(resource_location(resource, &[])),
                );
            }
        }
    }
}
