//! Loading generator configs from files and strings.

use std::{path::Path, str::FromStr};

use crate::{ConfigFormat, Error, GeneratorConfig, Result, SchemaError, SourceContext};

impl FromStr for GeneratorConfig {
    type Err = Box<Error>;

    /// Parse a YAML generator config.
    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, "generator.yaml", ConfigFormat::Yaml)
    }
}

impl GeneratorConfig {
    /// Load a generator config from the given path.
    ///
    /// The format is picked from the file extension. Nothing is returned
    /// unless the whole document loads.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path);
        tracing::debug!(path = %path.display(), %format, "loading generator config");

        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let config = parse_config(&content, &path.display().to_string(), format)?;

        tracing::debug!(
            path = %path.display(),
            resources = config.resources.len(),
            "loaded generator config"
        );
        Ok(config)
    }

    /// Parse a generator config with an explicit format and a filename for
    /// error reporting.
    pub fn from_str_with_format(
        content: &str,
        filename: &str,
        format: ConfigFormat,
    ) -> Result<Self> {
        parse_config(content, filename, format)
    }

    /// Serialize to canonical YAML.
    ///
    /// Loading the output yields a config equal to `self`.
    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|source| Box::new(Error::Serialize { source }))
    }
}

/// Parse a generator config from content with the given filename for error
/// reporting.
///
/// A document with no content at all loads as the empty config. Keys the
/// schema does not model are skipped, logged and recorded in
/// [`GeneratorConfig::unknown_keys`].
pub fn parse_config(
    content: &str,
    filename: &str,
    format: ConfigFormat,
) -> Result<GeneratorConfig> {
    if is_blank(content, format) {
        return Ok(GeneratorConfig::default());
    }

    let mut unknown_keys = Vec::new();
    let mut config = deserialize(content, format, |path| {
        unknown_keys.push(dotted_path(&path));
    })
    .map_err(|e| SourceContext::new(content, filename).parse_error(format, e))?;

    for key in &unknown_keys {
        tracing::warn!(file = filename, key = %key, "ignoring unknown generator config key");
    }
    config.unknown_keys = unknown_keys;
    Ok(config)
}

fn deserialize<F>(
    content: &str,
    format: ConfigFormat,
    on_unknown: F,
) -> std::result::Result<GeneratorConfig, SchemaError>
where
    F: FnMut(serde_ignored::Path<'_>),
{
    // A bare null document is as empty as a blank one
    let config = match format {
        ConfigFormat::Yaml => {
            let de = serde_yaml::Deserializer::from_str(content);
            let config: Option<GeneratorConfig> = serde_ignored::deserialize(de, on_unknown)?;
            config.unwrap_or_default()
        }
        ConfigFormat::Toml => {
            let de = toml::Deserializer::parse(content)?;
            serde_ignored::deserialize(de, on_unknown)?
        }
        ConfigFormat::Json => {
            let mut de = serde_json::Deserializer::from_str(content);
            let config: Option<GeneratorConfig> = serde_ignored::deserialize(&mut de, on_unknown)?;
            de.end()?;
            config.unwrap_or_default()
        }
    };
    Ok(config)
}

/// Render an ignored key as `resources.Topic.tags`, without the markers
/// serde_ignored inserts for options and newtypes.
fn dotted_path(path: &serde_ignored::Path<'_>) -> String {
    use serde_ignored::Path;

    match path {
        Path::Root => String::new(),
        Path::Seq { parent, index } => join(dotted_path(parent), &index.to_string()),
        Path::Map { parent, key } => join(dotted_path(parent), key),
        Path::Some { parent }
        | Path::NewtypeStruct { parent }
        | Path::NewtypeVariant { parent } => dotted_path(parent),
    }
}

fn join(mut prefix: String, segment: &str) -> String {
    if !prefix.is_empty() {
        prefix.push('.');
    }
    prefix.push_str(segment);
    prefix
}

/// Returns true if the document holds nothing but whitespace (and, for
/// YAML, comments and document markers).
fn is_blank(content: &str, format: ConfigFormat) -> bool {
    match format {
        ConfigFormat::Yaml => content.lines().map(str::trim).all(|line| {
            line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
        }),
        ConfigFormat::Toml | ConfigFormat::Json => content.trim().is_empty(),
    }
}
