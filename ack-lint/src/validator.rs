//! Runs lints over a loaded generator config.

use ackgen_config::GeneratorConfig;

use crate::{
    Lint, LintInfo, Report,
    lints::{
        ExceptionCodesLint, IgnoreEntriesLint, IgnoredOverrideLint, ListOperationLint,
        NameFieldLint, OwnerAccountIdLint, RenameCollisionLint, UnknownKeysLint,
    },
};

/// Validation pass over a generator config using configurable lints.
///
/// Every lint runs to completion so the report lists every issue, not just
/// the first one.
pub struct Validator {
    lints: Vec<Box<dyn Lint>>,
}

impl Validator {
    /// Create a new validator with the built-in lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(OwnerAccountIdLint),
                Box::new(RenameCollisionLint),
                Box::new(ExceptionCodesLint),
                Box::new(ListOperationLint),
                Box::new(NameFieldLint),
                Box::new(IgnoredOverrideLint),
                Box::new(IgnoreEntriesLint),
                Box::new(UnknownKeysLint),
            ],
        }
    }

    /// Create a validator with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Get the names of all lints that will be run.
    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    /// Get information about all lints that will be run.
    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }

    /// Run every lint and collect the diagnostics.
    pub fn run(&self, config: &GeneratorConfig) -> Report {
        let mut diagnostics = Vec::new();
        for lint in &self.lints {
            lint.check(config, &mut diagnostics);
        }

        let report = Report::new(diagnostics);
        tracing::debug!(
            lints = self.lints.len(),
            errors = report.error_count(),
            warnings = report.warning_count(),
            "validated generator config"
        );
        report
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate a config with the built-in lints.
pub fn validate(config: &GeneratorConfig) -> Report {
    Validator::new().run(config)
}
