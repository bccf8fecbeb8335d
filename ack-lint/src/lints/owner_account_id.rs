//! Lint for owner account ID attribute flags.

use ackgen_config::GeneratorConfig;

use super::resource_location;
use crate::{Diagnostic, Lint};

/// Lint that errors when more than one attribute of a resource holds the
/// owner account ID, and warns when that attribute is writable.
pub struct OwnerAccountIdLint;

impl Lint for OwnerAccountIdLint {
    fn name(&self) -> &'static str {
        "owner-account-id"
    }

    fn description(&self) -> &'static str {
        "At most one read-only attribute per resource may hold the owner account ID"
    }

    fn check(&self, config: &GeneratorConfig, diagnostics: &mut Vec<Diagnostic>) {
        for (resource, overrides) in &config.resources {
            let Some(attrs) = &overrides.unpack_attributes else {
                continue;
            };
            let location = resource_location(resource, &["unpack_attributes_map", "fields"]);

            let owners: Vec<&str> = attrs.owner_account_id_fields().collect();
            if owners.len() > 1 {
                diagnostics.push(
                    Diagnostic::error(
                        self.name(),
                        format!(
                            "resource '{}' marks {} attributes as the owner account ID ({}); only one is allowed",
                            resource,
                            owners.len(),
                            owners.join(", ")
                        ),
                    )
                    .at(location.clone()),
                );
            }

            for (key, field) in &attrs.fields {
                if field.contains_owner_account_id && !field.is_read_only {
                    diagnostics.push(
                        Diagnostic::warning(
                            self.name(),
                            format!("owner account ID attribute '{}' is not read-only", key),
                        )
                        .at(format!("{}.{}", location, key)),
                    );
                }
            }
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
        OwnerAccountIdLint.check(&config, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_single_owner() {
        let diagnostics = check(
            r#"
            resources:
              Topic:
                unpack_attributes_map:
                  fields:
                    Owner:
                      is_read_only: true
                      contains_owner_account_id: true
                    DisplayName: {}
            "#,
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_multiple_owners_is_error() {
        let diagnostics = check(
            r#"
            resources:
              Queue:
                unpack_attributes_map:
                  fields:
                    Owner:
                      is_read_only: true
                      contains_owner_account_id: true
                    AccountId:
                      is_read_only: true
                      contains_owner_account_id: true
            "#,
        );

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_error());
        assert!(diagnostics[0].message.contains("AccountId, Owner"));
        assert_eq!(
            diagnostics[0].location.as_deref(),
            Some("resources.Queue.unpack_attributes_map.fields")
        );
    }

    #[test]
    fn test_writable_owner_is_warning() {
        let diagnostics = check(
            r#"
            resources:
              Topic:
                unpack_attributes_map:
                  fields:
                    Owner:
                      contains_owner_account_id: true
            "#,
        );

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
        assert_eq!(
            diagnostics[0].location.as_deref(),
            Some("resources.Topic.unpack_attributes_map.fields.Owner")
        );
    }
}
