//! Engine configuration (`stache.toml`)

pub mod consts;
pub mod model;

pub use model::{RenderConfig, StacheConfig};
