//! Lint for exception code tables.

use std::collections::BTreeMap;

use ackgen_config::{GeneratorConfig, HttpStatus};

use super::resource_location;
use crate::{Diagnostic, Lint};

/// Lint that checks status codes are real HTTP codes pointing at named
/// shapes, and warns when one shape answers several codes.
pub struct ExceptionCodesLint;

impl Lint for ExceptionCodesLint {
    fn name(&self) -> &'static str {
        "exception-codes"
    }

    fn description(&self) -> &'static str {
        "Exception codes must be HTTP status codes mapped to distinct shapes"
    }

    fn check(&self, config: &GeneratorConfig, diagnostics: &mut Vec<Diagnostic>) {
        for (resource, overrides) in &config.resources {
            let Some(exceptions) = &overrides.exceptions else {
                continue;
            };
            let location = resource_location(resource, &["exceptions", "codes"]);
            let mut codes_by_shape: BTreeMap<&str, Vec<HttpStatus>> = BTreeMap::new();

            for (code, shape) in &exceptions.codes {
                let code_location = format!("{}.{}", location, code);

                if !code.is_valid() {
                    diagnostics.push(
                        Diagnostic::error(
                            self.name(),
                            format!("'{}' is not an HTTP status code (expected 100-599)", code),
                        )
                        .at(code_location.clone()),
                    );
                }

                if shape.is_empty() {
                    diagnostics.push(
                        Diagnostic::error(
                            self.name(),
                            format!("status code {} maps to an empty shape name", code),
                        )
                        .at(code_location),
                    );
                    continue;
                }

                codes_by_shape.entry(shape.as_str()).or_default().push(*code);
            }

            for (shape, codes) in codes_by_shape {
                if codes.len() > 1 {
                    let codes: Vec<String> = codes.iter().map(ToString::to_string).collect();
                    diagnostics.push(
                        Diagnostic::warning(
                            self.name(),
                            format!(
                                "shape '{}' is mapped from several status codes ({})",
                                shape,
                                codes.join(", ")
                            ),
                        )
                        .at(location.clone()),
                    );
                }
            }
        }
    }
}
