//! Post-load validation for ackgen generator configs.
//!
//! The config schema accepts anything that matches its shape. This crate
//! checks what the shape cannot express (one owner account attribute per
//! resource, one-to-one renames, real HTTP status codes, ...) and reports
//! every issue at once as a list of [`Diagnostic`]s.
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
//!   Queue:
//!     renames:
//!       operations:
//!         CreateQueue:
//!           input_fields:
//!             QueueName: Name
//!             Title: Name
//! "#,
//! )
//! .unwrap();
//!
//! let report = ackgen_lint::validate(&config);
//! assert_eq!(report.error_count(), 1);
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod diagnostic;
mod error;
mod lint;
pub mod lints;
mod report;
mod validator;

use std::path::Path;

use ackgen_config::GeneratorConfig;
pub use diagnostic::{Diagnostic, Severity};
pub use error::{LoadError, ValidationError};
pub use lint::{Lint, LintInfo};
pub use report::Report;
pub use validator::{Validator, validate};

/// A config that passed validation, with any warnings it produced.
#[derive(Debug, Clone)]
pub struct Validated {
    pub config: GeneratorConfig,
    pub warnings: Vec<Diagnostic>,
}

/// Load a generator config and run the built-in lints over it.
///
/// Fails on I/O, schema or configuration errors; warnings are returned
/// alongside the config and logged.
pub fn load_validated(path: impl AsRef<Path>) -> Result<Validated, LoadError> {
    let config = GeneratorConfig::from_file(path)?;
    let warnings = validate(&config).into_result()?;

    for warning in &warnings {
        tracing::warn!(
            lint = warning.lint,
            location = warning.location.as_deref().unwrap_or(""),
            "{}",
            warning.message
        );
    }

    Ok(Validated { config, warnings })
}
