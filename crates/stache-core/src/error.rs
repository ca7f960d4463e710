use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StacheError {
    // Template errors
    #[error("TEMPLATE_ERROR: {0}")]
    Template(#[from] crate::template::error::TemplateError),

    // Data errors
    #[error("DATA_PARSE_ERROR: failed to parse '{path}': {reason}")]
    DataParse { path: PathBuf, reason: String },

    #[error("DATA_UNSUPPORTED_FORMAT: '{path}' is neither .json nor .toml")]
    UnsupportedDataFormat { path: PathBuf },

    #[error("DATA_ROOT_NOT_OBJECT: cannot attach partial '{0}' to a non-object root context")]
    RootNotObject(String),

    // Config errors
    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StacheError>;
