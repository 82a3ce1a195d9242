use log::debug;

use crate::error::ParseError;
use crate::model::Collection;

/// Serialization format of a collection document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// Pick the format from a file extension. Hoppscotch exports JSON, so
    /// anything that is not explicitly YAML is treated as JSON.
    pub fn from_extension(ext: Option<&str>) -> Self {
        match ext {
            Some("yaml" | "yml") => InputFormat::Yaml,
            _ => InputFormat::Json,
        }
    }
}

/// Parse a Hoppscotch collection from JSON.
pub fn from_json(input: &str) -> Result<Collection, ParseError> {
    let collection: Collection = serde_json::from_str(input)?;
    debug!("parsed collection '{}' from JSON", collection.name);
    Ok(collection)
}

/// Parse a Hoppscotch collection from YAML.
pub fn from_yaml(input: &str) -> Result<Collection, ParseError> {
    let collection: Collection = serde_yaml_ng::from_str(input)?;
    debug!("parsed collection '{}' from YAML", collection.name);
    Ok(collection)
}

/// Parse a collection in the given format.
pub fn parse(input: &str, format: InputFormat) -> Result<Collection, ParseError> {
    match format {
        InputFormat::Json => from_json(input),
        InputFormat::Yaml => from_yaml(input),
    }
}
