use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{ResourceGeneratorConfig, serde_helpers::null_as_default};

/// Root of a generator config for one service API.
///
/// Resources keep document order so generation is deterministic.
#[derive(Debug, Clone, Default, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Per-resource overrides keyed by resource name
    #[serde(default, deserialize_with = "null_as_default")]
    pub resources: IndexMap<String, ResourceGeneratorConfig>,

    /// Operations, resources and shapes the generator skips
    #[serde(default, deserialize_with = "null_as_default")]
    pub ignore: IgnoreSpec,

    /// Dotted paths of keys the loader found but does not model, in
    /// document order. Filled in by the loader; never serialized.
    #[serde(skip)]
    pub unknown_keys: Vec<String>,
}

// Unknown keys are load diagnostics, not configuration.
impl PartialEq for GeneratorConfig {
    fn eq(&self, other: &Self) -> bool {
        self.resources == other.resources && self.ignore == other.ignore
    }
}

/// Global exclusion sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnoreSpec {
    /// Operation IDs left out of SDK linkage, whichever resource uses them
    #[serde(default, deserialize_with = "null_as_default")]
    pub operations: BTreeSet<String>,

    /// Resources skipped wholesale, overrides included
    #[serde(default, deserialize_with = "null_as_default")]
    pub resource_names: BTreeSet<String>,

    /// Shapes whose fields are suppressed wherever they are nested
    #[serde(default, deserialize_with = "null_as_default")]
    pub shape_names: BTreeSet<String>,
}

impl IgnoreSpec {
    pub fn ignores_operation(&self, operation_id: &str) -> bool {
        self.operations.contains(operation_id)
    }

    pub fn ignores_resource(&self, name: &str) -> bool {
        self.resource_names.contains(name)
    }

    pub fn ignores_shape(&self, name: &str) -> bool {
        self.shape_names.contains(name)
    }

    /// Returns true if nothing is ignored.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty() && self.resource_names.is_empty() && self.shape_names.is_empty()
    }
}

impl GeneratorConfig {
    /// Look up the override for a resource (exact, case-sensitive).
    ///
    /// This does not consult the ignore list; see [`Self::resource_override`].
    pub fn resource(&self, name: &str) -> Option<&ResourceGeneratorConfig> {
        self.resources.get(name)
    }

    /// Look up the override the generator should apply to a resource.
    ///
    /// Returns `None` for ignored resources even when an override exists.
    pub fn resource_override(&self, name: &str) -> Option<&ResourceGeneratorConfig> {
        if self.is_resource_ignored(name) {
            return None;
        }
        self.resource(name)
    }

    /// Get the global ignore spec
    pub fn ignore(&self) -> &IgnoreSpec {
        &self.ignore
    }

    pub fn is_resource_ignored(&self, name: &str) -> bool {
        self.ignore.ignores_resource(name)
    }

    pub fn is_operation_ignored(&self, operation_id: &str) -> bool {
        self.ignore.ignores_operation(operation_id)
    }

    pub fn is_shape_ignored(&self, name: &str) -> bool {
        self.ignore.ignores_shape(name)
    }

    /// Iterate resource overrides in document order, skipping ignored ones.
    pub fn active_resources(&self) -> impl Iterator<Item = (&str, &ResourceGeneratorConfig)> {
        self.resources
            .iter()
            .filter(|(name, _)| !self.is_resource_ignored(name))
            .map(|(name, config)| (name.as_str(), config))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn parse(content: &str) -> GeneratorConfig {
        GeneratorConfig::from_str(content).expect("Failed to parse config")
    }

    #[test]
    fn test_resource_lookup_is_case_sensitive() {
        let config = parse(
            r#"
            resources:
              Topic:
                name_field: Name
            "#,
        );

        assert!(config.resource("Topic").is_some());
        assert!(config.resource("topic").is_none());
    }

    #[test]
    fn test_ignored_resource_has_no_override() {
        let config = parse(
            r#"
            resources:
              Topic:
                name_field: Name
              Subscription:
                name_field: SubscriptionArn
            ignore:
              resource_names:
                - Subscription
            "#,
        );

        assert!(config.resource("Subscription").is_some());
        assert!(config.resource_override("Subscription").is_none());
        assert!(config.resource_override("Topic").is_some());

        let active: Vec<_> = config.active_resources().map(|(n, _)| n).collect();
        assert_eq!(active, vec!["Topic"]);
    }

    #[test]
    fn test_document_order_preserved() {
        let config = parse(
            r#"
            resources:
              Zeta: {}
              Alpha: {}
              Mu: {}
            "#,
        );

        let names: Vec<_> = config.resources.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mu"]);
    }

    #[test]
    fn test_ignore_sets() {
        let config = parse(
            r#"
            ignore:
              operations:
                - CreatePlatformEndpoint
                - CreatePlatformEndpoint
              shape_names:
                - DeliveryStatusLogging
            "#,
        );

        assert!(config.is_operation_ignored("CreatePlatformEndpoint"));
        assert!(!config.is_operation_ignored("CreateTopic"));
        assert!(config.is_shape_ignored("DeliveryStatusLogging"));
        assert_eq!(config.ignore().operations.len(), 1);
        assert!(config.ignore().resource_names.is_empty());
    }

    #[test]
    fn test_unknown_keys_are_not_compared() {
        let mut config = parse("resources:\n  Topic: {}\n");
        config.unknown_keys.push("sdk_names".to_string());
        assert_eq!(config, parse("resources:\n  Topic: {}\n"));
    }

    #[test]
    fn test_null_sections_default() {
        let config = parse(
            r#"
            resources:
            ignore:
              operations:
            "#,
        );

        assert!(config.resources.is_empty());
        assert!(config.ignore().is_empty());
    }
}
