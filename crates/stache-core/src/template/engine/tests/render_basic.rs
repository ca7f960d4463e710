//! Basic rendering tests for template engine

use super::helpers::{nested_context, simple_context};
use super::*;
use serde_json::json;

#[test]
fn test_render_simple_placeholder() {
    let context = Context::from(json!({"name": "World"}));
    let result = render("Hello, {{name}}!", &context).unwrap();
    assert_eq!(result, "Hello, World!");
}

#[test]
fn test_render_placeholder_with_spaces() {
    let context = simple_context();
    let result = render("Title: {{  title  }}", &context).unwrap();
    assert_eq!(result, "Title: My Title");
}

#[test]
fn test_render_nested_key() {
    let context = nested_context();
    let result = render("Paper: {{paper.title}}", &context).unwrap();
    assert_eq!(result, "Paper: Research Paper");
}

#[test]
fn test_render_scalar_kinds() {
    let context = simple_context();
    let template = "{{count}} {{price}} {{enabled}} {{disabled}} {{zero}}";
    let result = render(template, &context).unwrap();
    assert_eq!(result, "42 9.99 true false 0");
}

#[test]
fn test_render_toml_date_value() {
    let context = nested_context();
    let result = render("Date: {{paper.date}}", &context).unwrap();
    assert_eq!(result, "Date: 2026-01-15");
}

#[test]
fn test_render_multiple_placeholders() {
    let context = nested_context();
    let template = "{{paper.title}} ({{paper.language}}) - {{paper.date}}";
    let result = render(template, &context).unwrap();
    assert_eq!(result, "Research Paper (en) - 2026-01-15");
}

#[test]
fn test_render_missing_key_is_empty() {
    let context = simple_context();
    let result = render("[{{nonexistent}}][{{title.deeper}}]", &context).unwrap();
    assert_eq!(result, "[][]");
}

#[test]
fn test_render_null_is_empty() {
    let context = simple_context();
    let result = render("[{{nothing}}]", &context).unwrap();
    assert_eq!(result, "[]");
}

#[test]
fn test_render_object_and_array_interpolate_as_empty() {
    let context = nested_context();
    let result = render("[{{paper}}][{{paper.authors}}]", &context).unwrap();
    assert_eq!(result, "[][]");
}

#[test]
fn test_render_no_placeholders_is_identity() {
    let context = simple_context();
    for template in [
        "This is plain text with no placeholders.",
        "",
        "multi\nline\n\n  text  \n",
        "{ single } braces and } stray {",
    ] {
        assert_eq!(render(template, &context).unwrap(), template);
        assert_eq!(render(template, &Context::null()).unwrap(), template);
    }
}

#[test]
fn test_render_comment_is_dropped() {
    let context = simple_context();
    let result = render("a{{! hidden title }}b", &context).unwrap();
    assert_eq!(result, "ab");
}

#[test]
fn test_render_standalone_comment_line_is_removed() {
    let context = simple_context();
    let result = render("a\n  {{! note }}\nb\n", &context).unwrap();
    assert_eq!(result, "a\nb\n");
}

#[test]
fn test_render_dot_at_top_level() {
    let context = Context::from("just a string");
    let result = render("{{.}}", &context).unwrap();
    assert_eq!(result, "just a string");
}

#[test]
fn test_render_with_custom_delimiters() {
    let context = simple_context();
    let result = render("{{=<% %>=}}<% title %> {{title}}", &context).unwrap();
    assert_eq!(result, "My Title {{title}}");
}

#[test]
fn test_engine_with_configured_delimiters() {
    let config = RenderConfig {
        delimiters: Delimiters::new("<<", ">>"),
        ..RenderConfig::default()
    };
    let engine = TemplateEngine::with_config(config);
    let result = engine
        .render("<<title>> {{title}}", &simple_context())
        .unwrap();
    assert_eq!(result, "My Title {{title}}");
}

#[test]
fn test_engine_is_reusable() {
    let engine = TemplateEngine::new();
    let first = engine.render("{{count}}", &simple_context()).unwrap();
    let second = engine
        .render("{{count}}", &Context::from(json!({"count": 7})))
        .unwrap();
    assert_eq!(first, "42");
    assert_eq!(second, "7");
}
