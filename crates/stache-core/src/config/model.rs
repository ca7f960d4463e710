use crate::config::consts;
use crate::error::{Result, StacheError};
use crate::template::Delimiters;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// stache.toml schema
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StacheConfig {
    #[serde(default)]
    pub render: RenderConfig,
}

/// Rendering options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Delimiters every template (and partial) starts with
    #[serde(default)]
    pub delimiters: Delimiters,
    #[serde(default = "default_max_partial_depth")]
    pub max_partial_depth: usize,
    /// When false, `{{name}}` is emitted verbatim like `{{{name}}}`
    #[serde(default = "default_escape_html")]
    pub escape_html: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            delimiters: Delimiters::default(),
            max_partial_depth: consts::render::MAX_PARTIAL_DEPTH,
            escape_html: true,
        }
    }
}

fn default_max_partial_depth() -> usize {
    consts::render::MAX_PARTIAL_DEPTH
}

fn default_escape_html() -> bool {
    true
}

impl RenderConfig {
    /// Reject values the engine cannot work with
    pub fn validate(&self) -> Result<()> {
        self.delimiters
            .check()
            .map_err(|reason| StacheError::ConfigInvalidValue {
                field: "render.delimiters".to_string(),
                reason,
            })?;

        if self.max_partial_depth == 0 {
            return Err(StacheError::ConfigInvalidValue {
                field: "render.max_partial_depth".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

impl StacheConfig {
    /// Parse and validate a stache.toml document
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| StacheError::ConfigParseError(e.to_string()))?;
        config.render.validate()?;
        Ok(config)
    }

    /// Read stache.toml
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| StacheError::ConfigParseError(e.to_string()))?;

        Self::parse(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config = StacheConfig::parse("").unwrap();
        assert_eq!(config.render, RenderConfig::default());
        assert_eq!(config.render.max_partial_depth, 64);
        assert!(config.render.escape_html);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[render]
max_partial_depth = 8
escape_html = false

[render.delimiters]
open = "<%"
close = "%>"
"#;
        let config = StacheConfig::parse(toml).unwrap();
        assert_eq!(config.render.max_partial_depth, 8);
        assert!(!config.render.escape_html);
        assert_eq!(config.render.delimiters, Delimiters::new("<%", "%>"));
    }

    #[test]
    fn test_reject_invalid_delimiters() {
        let toml = r#"
[render.delimiters]
open = "< %"
close = "%>"
"#;
        let err = StacheConfig::parse(toml).unwrap_err();
        assert!(matches!(err, StacheError::ConfigInvalidValue { ref field, .. } if field == "render.delimiters"));
    }

    #[test]
    fn test_reject_zero_depth() {
        let err = StacheConfig::parse("[render]\nmax_partial_depth = 0\n").unwrap_err();
        assert!(matches!(err, StacheError::ConfigInvalidValue { .. }));
    }

    #[test]
    fn test_reject_malformed_toml() {
        let err = StacheConfig::parse("[render\n").unwrap_err();
        assert!(matches!(err, StacheError::ConfigParseError(_)));
    }
}
