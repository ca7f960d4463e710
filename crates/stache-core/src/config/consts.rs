//! Constants shared across the engine

/// Rendering limits
pub mod render {
    /// Maximum nesting depth of partial expansion
    pub const MAX_PARTIAL_DEPTH: usize = 64;
}

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "stache.toml";
