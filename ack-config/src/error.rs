use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::ConfigFormat;

/// Result type for config operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Keeps the document text and its filename together so parse errors can
/// point at the offending line.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error for a document that failed to deserialize.
    pub fn parse_error(&self, format: ConfigFormat, source: SchemaError) -> Box<Error> {
        let span = source.span(&self.src);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            format,
            source,
        })
    }
}

/// Underlying deserializer error, one variant per document format.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl SchemaError {
    /// Byte span of the error in `src`, when the parser reports a position.
    pub fn span(&self, src: &str) -> Option<SourceSpan> {
        match self {
            SchemaError::Yaml(e) => e
                .location()
                .map(|loc| SourceSpan::from((loc.index(), 1))),
            SchemaError::Toml(e) => e.span().map(SourceSpan::from),
            // serde_json reports line 0 when no position is available
            SchemaError::Json(e) if e.line() > 0 => {
                line_column_offset(src, e.line(), e.column()).map(|o| SourceSpan::from((o, 1)))
            }
            SchemaError::Json(_) => None,
        }
    }
}

/// Convert a 1-based line and column into a byte offset.
fn line_column_offset(src: &str, line: usize, column: usize) -> Option<usize> {
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line.checked_sub(1)?)
        .map(str::len)
        .sum();
    let offset = line_start + column.saturating_sub(1);
    (offset <= src.len()).then_some(offset)
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(ackgen::io),
        help("check that the generator config path exists and is readable")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {format} generator config")]
    #[diagnostic(code(ackgen::parse))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("schema error here")]
        span: Option<SourceSpan>,
        format: ConfigFormat,
        #[source]
        source: SchemaError,
    },

    #[error("failed to serialize generator config")]
    #[diagnostic(code(ackgen::serialize))]
    Serialize {
        #[source]
        source: serde_yaml::Error,
    },
}

impl Error {
    /// Returns true if the file could not be read.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io { .. })
    }

    /// Returns true if the document did not match the schema.
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }
}
