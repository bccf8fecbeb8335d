//! Lint for keys the schema does not model.

use ackgen_config::GeneratorConfig;

use crate::{Diagnostic, Lint};

/// Lint that warns about every key the loader skipped.
///
/// Unknown keys never block loading, but a misspelled key silently drops
/// the override it was meant to set.
pub struct UnknownKeysLint;

impl Lint for UnknownKeysLint {
    fn name(&self) -> &'static str {
        "unknown-keys"
    }

    fn description(&self) -> &'static str {
        "Keys the generator config schema does not know are ignored"
    }

    fn check(&self, config: &GeneratorConfig, diagnostics: &mut Vec<Diagnostic>) {
        for key in &config.unknown_keys {
            diagnostics.push(
                Diagnostic::warning(self.name(), format!("unknown key '{}' is ignored", key))
                    .at(key.clone()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn check(content: &str) -> Vec<Diagnostic> {
        let config = GeneratorConfig::from_str(content).expect("Failed to parse test config");
        let mut diagnostics = Vec::new();
        UnknownKeysLint.check(&config, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_misspelled_key() {
        let diagnostics = check(
            r#"
            resources:
              Topic:
                name_feild: Name
            "#,
        );

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
        assert_eq!(
            diagnostics[0].location.as_deref(),
            Some("resources.Topic.name_feild")
        );
    }

    #[test]
    fn test_known_keys_only() {
        let diagnostics = check(
            r#"
            resources:
              Topic:
                name_field: Name
            ignore:
              operations:
                - CreatePlatformEndpoint
            "#,
        );
        assert!(diagnostics.is_empty());
    }
}
