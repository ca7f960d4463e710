// Core modules
pub mod config;
pub mod context;
pub mod data;
pub mod error;
pub mod template;

// Re-export commonly used types
pub use context::{Context, Scalar};
pub use error::{Result, StacheError};
pub use template::{render, TemplateEngine, TemplateError};
