//! Loading generator configs from disk.

use std::{collections::BTreeMap, fs, path::PathBuf};

use ackgen_config::{
    ExceptionsConfig, FieldGeneratorConfig, GeneratorConfig, HttpStatus, IgnoreSpec,
    ListOperationConfig, OperationRenamesConfig, RenamesConfig, ResourceGeneratorConfig,
    UnpackAttributesMapConfig,
};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write fixture");
    path
}

#[test]
fn test_empty_file_loads_empty_config() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "generator.yaml", "");

    let config = GeneratorConfig::from_file(&path).unwrap();
    assert!(config.resources.is_empty());
    assert_eq!(config.ignore, IgnoreSpec::default());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = GeneratorConfig::from_file(dir.path().join("missing.yaml")).unwrap_err();

    assert!(err.is_io());
    assert!(err.to_string().contains("missing.yaml"));
}

#[test]
fn test_non_integer_exception_key_is_schema_error() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "generator.yaml",
        "resources:\n  Topic:\n    exceptions:\n      codes:\n        NotFound: NotFoundException\n",
    );

    let err = GeneratorConfig::from_file(&path).unwrap_err();
    assert!(err.is_parse());
}

#[test]
fn test_format_from_extension() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "generator.toml",
        r#"
        [resources.Bucket]
        name_field = "Bucket"

        [resources.Bucket.list_operation]
        match_fields = ["Name"]
        "#,
    );

    let config = GeneratorConfig::from_file(&path).unwrap();
    let bucket = config.resource("Bucket").unwrap();
    assert_eq!(bucket.name_field(), Some("Bucket"));
    assert_eq!(
        bucket.list_operation,
        Some(ListOperationConfig {
            match_fields: vec!["Name".to_string()]
        })
    );
}

#[test]
fn test_yaml_parse_error_in_toml_file_reports_toml() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "generator.toml", "resources:\n  Topic: {}\n");

    let err = GeneratorConfig::from_file(&path).unwrap_err();
    assert!(err.is_parse());
    assert_eq!(err.to_string(), "failed to parse toml generator config");
}

fn populated() -> GeneratorConfig {
    let mut fields = BTreeMap::new();
    fields.insert("DisplayName".to_string(), FieldGeneratorConfig::default());
    fields.insert(
        "Owner".to_string(),
        FieldGeneratorConfig {
            is_read_only: true,
            contains_owner_account_id: true,
        },
    );

    let mut operations = BTreeMap::new();
    operations.insert(
        "CreateTopic".to_string(),
        OperationRenamesConfig {
            input_fields: [("Name".to_string(), "TopicName".to_string())].into(),
            output_fields: BTreeMap::new(),
        },
    );

    let topic = ResourceGeneratorConfig {
        name_field: Some("Name".to_string()),
        unpack_attributes: Some(UnpackAttributesMapConfig { fields }),
        exceptions: Some(ExceptionsConfig {
            codes: [(HttpStatus::NOT_FOUND, "NotFoundException".to_string())].into(),
        }),
        renames: Some(RenamesConfig { operations }),
        list_operation: None,
    };
    let bucket = ResourceGeneratorConfig {
        list_operation: Some(ListOperationConfig {
            match_fields: vec!["Name".to_string(), "Region".to_string()],
        }),
        exceptions: Some(ExceptionsConfig::default()),
        ..Default::default()
    };

    GeneratorConfig {
        resources: [
            ("Topic".to_string(), topic),
            ("Bucket".to_string(), bucket),
        ]
        .into_iter()
        .collect(),
        ignore: IgnoreSpec {
            operations: ["CreatePlatformEndpoint".to_string()].into(),
            resource_names: ["PlatformApplication".to_string()].into(),
            shape_names: ["DeliveryStatusLogging".to_string()].into(),
        },
        unknown_keys: Vec::new(),
    }
}

#[test]
fn test_round_trip_through_file() {
    let dir = TempDir::new().unwrap();
    let original = populated();
    let path = write(&dir, "generator.yaml", &original.to_yaml_string().unwrap());

    let reloaded = GeneratorConfig::from_file(&path).unwrap();
    assert_eq!(reloaded, original);

    // Present-but-empty survives
    let bucket = reloaded.resource("Bucket").unwrap();
    assert_eq!(bucket.exceptions, Some(ExceptionsConfig::default()));
    assert!(bucket.renames.is_none());
}

#[test]
fn test_same_field_renamed_per_operation() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "generator.yaml",
        r#"
resources:
  Queue:
    renames:
      operations:
        CreateQueue:
          input_fields:
            Attributes: QueueAttributes
        SetQueueAttributes:
          input_fields:
            Attributes: Settings
"#,
    );

    let config = GeneratorConfig::from_file(&path).unwrap();
    let queue = config.resource("Queue").unwrap();
    assert_eq!(
        queue.input_field_name("CreateQueue", "Attributes"),
        "QueueAttributes"
    );
    assert_eq!(
        queue.input_field_name("SetQueueAttributes", "Attributes"),
        "Settings"
    );
    assert_eq!(
        queue.input_field_name("GetQueueAttributes", "Attributes"),
        "Attributes"
    );
}

#[test]
fn test_unmodelled_keys_do_not_block_loading() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "generator.yaml",
        r#"
resources:
  Topic:
    tags: {}
    name_field: Name
sdk_names:
  model_name: sns
"#,
    );

    let config = GeneratorConfig::from_file(&path).unwrap();
    assert_eq!(config.resource("Topic").unwrap().name_field(), Some("Name"));
    assert_eq!(config.unknown_keys, vec!["resources.Topic.tags", "sdk_names"]);

    // Unknown keys are dropped on the way out
    let yaml = config.to_yaml_string().unwrap();
    assert!(!yaml.contains("sdk_names"));
    assert!(!yaml.contains("tags"));
}
