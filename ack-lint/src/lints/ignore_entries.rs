//! Lint for blank ignore entries.

use std::collections::BTreeSet;

use ackgen_config::GeneratorConfig;

use crate::{Diagnostic, Lint};

/// Lint that errors on empty names in the ignore sets.
pub struct IgnoreEntriesLint;

impl Lint for IgnoreEntriesLint {
    fn name(&self) -> &'static str {
        "ignore-entries"
    }

    fn description(&self) -> &'static str {
        "Ignore lists must not contain blank names"
    }

    fn check(&self, config: &GeneratorConfig, diagnostics: &mut Vec<Diagnostic>) {
        let ignore = config.ignore();
        let sets: [(&str, &BTreeSet<String>); 3] = [
            ("operations", &ignore.operations),
            ("resource_names", &ignore.resource_names),
            ("shape_names", &ignore.shape_names),
        ];

        for (key, set) in sets {
            if set.iter().any(|name| name.trim().is_empty()) {
                diagnostics.push(
                    Diagnostic::error(self.name(), format!("ignore.{} contains a blank name", key))
                        .at(format!("ignore.{}", key)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_blank_entries() {
        let config = GeneratorConfig::from_str(
            r#"
            ignore:
              operations:
                - ""
              shape_names:
                - DeliveryStatusLogging
            "#,
        )
        .unwrap();

        let mut diagnostics = Vec::new();
        IgnoreEntriesLint.check(&config, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].location.as_deref(), Some("ignore.operations"));
    }
}
