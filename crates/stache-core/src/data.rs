//! Loading template data from JSON or TOML files

use crate::context::Context;
use crate::error::{Result, StacheError};
use std::path::Path;

/// Supported data file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Toml,
}

impl DataFormat {
    /// Detect the format from a file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(DataFormat::Json),
            "toml" => Some(DataFormat::Toml),
            _ => None,
        }
    }
}

/// Parse data text in the given format into a [`Context`]
///
/// `origin` is only used for error messages.
pub fn parse_context(content: &str, format: DataFormat, origin: &Path) -> Result<Context> {
    let parse_error = |reason: String| StacheError::DataParse {
        path: origin.to_path_buf(),
        reason,
    };

    match format {
        DataFormat::Json => serde_json::from_str::<serde_json::Value>(content)
            .map(Context::from)
            .map_err(|e| parse_error(e.to_string())),
        DataFormat::Toml => content
            .parse::<toml::Table>()
            .map(Context::from)
            .map_err(|e| parse_error(e.to_string())),
    }
}

/// Read a data file and convert it into a [`Context`]
pub fn load_context(path: impl AsRef<Path>) -> Result<Context> {
    let path = path.as_ref();
    let format = DataFormat::from_path(path).ok_or_else(|| StacheError::UnsupportedDataFormat {
        path: path.to_path_buf(),
    })?;

    let content = std::fs::read_to_string(path)?;
    let context = parse_context(&content, format, path)?;
    log::debug!("Loaded {:?} data from {}", format, path.display());
    Ok(context)
}

/// Attach a partial body to the root object under `name`
///
/// Partials are looked up like any other key, so the body becomes a
/// top-level string. An existing key with the same name is replaced.
pub fn insert_partial(context: &mut Context, name: &str, body: impl Into<String>) -> Result<()> {
    let root = context
        .as_object_mut()
        .ok_or_else(|| StacheError::RootNotObject(name.to_string()))?;

    if root.insert(name.to_string(), Context::from(body.into())).is_some() {
        log::warn!("Partial '{}' replaces an existing data key", name);
    }
    Ok(())
}
