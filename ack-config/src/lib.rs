//! Generator configuration schema for ackgen.
//!
//! A generator config is a single YAML (or TOML/JSON) document that steers
//! controller code generation for one service API: which resources get
//! overrides, how attribute maps are unpacked, which exception shapes map to
//! which HTTP status codes, how operation fields are renamed and what gets
//! ignored altogether.
//!
//! ```text
//! generator.yaml → ackgen-config (load) → ackgen-lint (validate) → generator
//! ```
//!
//! The loaded [`GeneratorConfig`] is immutable. Pass it to the generator by
//! value or share it behind `&`/`Arc`; there is no setter API.
//!
//! # Example
//!
//! ```
//! use std::str::FromStr;
//!
//! use ackgen_config::GeneratorConfig;
//!
//! let config = GeneratorConfig::from_str(
//!     r#"
//! resources:
//!   Topic:
//!     exceptions:
//!       codes:
//!         404: NotFoundException
//! ignore:
//!   resource_names:
//!     - PlatformApplication
//! "#,
//! )
//! .unwrap();
//!
//! let topic = config.resource("Topic").unwrap();
//! assert_eq!(topic.not_found_shape(), Some("NotFoundException"));
//! assert!(config.is_resource_ignored("PlatformApplication"));
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod attributes;
mod config;
mod error;
mod exceptions;
mod format;
mod list_operation;
mod parse;
mod renames;
mod resource;
mod serde_helpers;

pub use attributes::{
    AttributePlacement, FieldGeneratorConfig, PartitionedAttributes, UnpackAttributesMapConfig,
};
pub use config::{GeneratorConfig, IgnoreSpec};
pub use error::{Error, Result, SchemaError, SourceContext};
pub use exceptions::{ExceptionsConfig, HttpStatus};
pub use format::ConfigFormat;
pub use list_operation::ListOperationConfig;
pub use parse::parse_config;
pub use renames::{OperationRenamesConfig, RenamesConfig};
pub use resource::ResourceGeneratorConfig;
