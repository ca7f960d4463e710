//! Error handling tests for template engine

use super::helpers::simple_context;
use super::*;
use crate::error::StacheError;

#[test]
fn test_error_malformed_unclosed_placeholder() {
    let context = simple_context();
    let result = render("Value: {{title", &context);
    match result {
        Err(TemplateError::MalformedSyntax { message, line }) => {
            assert!(message.contains("Unclosed"));
            assert_eq!(line, 1);
        }
        other => panic!("Expected MalformedSyntax error, got {:?}", other),
    }
}

#[test]
fn test_error_reports_line_of_tag() {
    let context = simple_context();
    let result = render("one\ntwo\nthree {{#open}}\n", &context);
    match result {
        Err(TemplateError::UnclosedSection { name, line }) => {
            assert_eq!(name, "open");
            assert_eq!(line, 3);
        }
        other => panic!("Expected UnclosedSection error, got {:?}", other),
    }
}

#[test]
fn test_error_unexpected_ender() {
    let context = simple_context();
    let result = render("text {{/stray}}", &context);
    assert!(matches!(
        result,
        Err(TemplateError::UnexpectedEnder { ref name, line: 1 }) if name == "stray"
    ));
}

#[test]
fn test_error_mismatched_ender() {
    let context = simple_context();
    let result = render("{{#a}}{{#b}}{{/a}}{{/b}}", &context);
    match result {
        Err(TemplateError::MismatchedEnder {
            expected, found, ..
        }) => {
            assert_eq!(expected, "b");
            assert_eq!(found, "a");
        }
        other => panic!("Expected MismatchedEnder error, got {:?}", other),
    }
}

#[test]
fn test_error_structure_checked_even_when_section_is_skipped() {
    // `missing` would be skipped, but the template is still rejected
    let context = simple_context();
    let result = render("{{#missing}}{{#inner}}{{/missing}}", &context);
    assert!(matches!(result, Err(TemplateError::MismatchedEnder { .. })));
}

#[test]
fn test_error_unclosed_inverted_section() {
    let context = simple_context();
    let result = render("{{^nothing}}shown", &context);
    assert!(matches!(result, Err(TemplateError::UnclosedSection { .. })));
}

#[test]
fn test_error_unclosed_comment() {
    let context = simple_context();
    let result = render("a {{! never closed", &context);
    assert!(matches!(result, Err(TemplateError::MalformedSyntax { .. })));
}

#[test]
fn test_error_display_messages() {
    let err = TemplateError::MismatchedEnder {
        expected: "a".to_string(),
        found: "b".to_string(),
        line: 4,
    };
    assert_eq!(
        err.to_string(),
        "Mismatched closing tag at line 4: expected {{/a}}, found {{/b}}"
    );

    let err = TemplateError::UnexpectedEnder {
        name: "x".to_string(),
        line: 2,
    };
    assert_eq!(
        err.to_string(),
        "Unexpected {{/x}} at line 2 without a matching opening tag"
    );
}

#[test]
fn test_error_converts_into_crate_error() {
    let err: StacheError = TemplateError::MalformedSyntax {
        message: "Empty tag".to_string(),
        line: 7,
    }
    .into();
    assert_eq!(
        err.to_string(),
        "TEMPLATE_ERROR: Malformed syntax at line 7: Empty tag"
    );
}
