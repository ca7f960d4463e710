//! Shared test helpers for template engine tests

use crate::context::Context;
use serde_json::json;
use toml::toml;

/// Create a simple test context with basic scalar values
pub(super) fn simple_context() -> Context {
    Context::from(json!({
        "title": "My Title",
        "count": 42,
        "price": 9.99,
        "enabled": true,
        "disabled": false,
        "zero": 0,
        "empty": "",
        "nothing": null
    }))
}

/// Create a nested test context with arrays and tables
pub(super) fn nested_context() -> Context {
    let data = toml! {
        [paper]
        title = "Research Paper"
        language = "en"
        date = 2026-01-15

        [[paper.authors]]
        name = "John Doe"
        email = "john@example.com"

        [[paper.authors]]
        name = "Jane Smith"
        email = "jane@example.com"
    };
    Context::from(data)
}

/// Collect (kind, value) pairs for compact token assertions
pub(super) fn kinds_and_values(tokens: &[super::Token]) -> Vec<(super::TokenKind, &str)> {
    tokens
        .iter()
        .map(|token| (token.kind, token.value.as_str()))
        .collect()
}
