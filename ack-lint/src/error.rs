use std::fmt;

use miette::{LabeledSpan, SourceCode};
use thiserror::Error;

use crate::Diagnostic;

/// A config that loaded but failed the validation pass.
#[derive(Debug, Error, miette::Diagnostic)]
#[error("generator config failed validation with {} error(s)", .errors.len())]
#[diagnostic(code(ackgen::invalid), help("{summary}"))]
pub struct ValidationError {
    /// Every error diagnostic, in lint order.
    pub errors: Vec<Diagnostic>,
    summary: String,
}

impl ValidationError {
    pub fn new(errors: Vec<Diagnostic>) -> Self {
        let summary = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        Self { errors, summary }
    }
}

/// Error returned by [`crate::load_validated`].
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read or parsed.
    #[error(transparent)]
    Config(#[from] Box<ackgen_config::Error>),

    /// The config loaded but has configuration errors.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl LoadError {
    fn inner(&self) -> &dyn miette::Diagnostic {
        match self {
            LoadError::Config(e) => &**e,
            LoadError::Invalid(e) => e,
        }
    }
}

impl miette::Diagnostic for LoadError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.inner().code()
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.inner().help()
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        self.inner().source_code()
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        self.inner().labels()
    }
}
