//! Template module - mustache-style template engine
//!
//! Renders a template against a [`Context`](crate::context::Context) and
//! returns the output string.
//!
//! ## Pipeline
//!
//! raw text → tokenizer → flat token buffer → renderer → output
//!
//! The renderer walks the token buffer with an explicit cursor. Array
//! sections rewind the cursor for each element, so the buffer is indexed
//! rather than streamed.
//!
//! ## Syntax
//!
//! - Escaped variable: `{{name}}` or `{{ name }}`
//! - Unescaped variable: `{{{name}}}` or `{{&name}}`
//! - Section: `{{#items}} ... {{/items}}`
//! - Inverted section: `{{^items}} ... {{/items}}`
//! - Comment: `{{! ignored }}`
//! - Partial: `{{>name}}` (the partial body is looked up in the context)
//! - Delimiter change: `{{=<% %>=}}`
//! - Dotted paths (`a.b.c`) and the current element (`.`) work wherever a key is accepted

pub mod engine;
pub mod error;
pub mod escape;

pub use engine::{render, tokenize, tokenize_with, Delimiters, Token, TokenKind, TemplateEngine};
pub use error::TemplateError;
pub use escape::escape;
