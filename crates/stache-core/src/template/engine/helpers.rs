//! Helper functions for template rendering

use crate::context::Context;

/// Stringify a resolved value for template output
///
/// Missing data renders as the empty string.
pub(crate) fn stringify_value(value: Option<&Context>) -> String {
    value.map(Context::coerce_string).unwrap_or_default()
}

/// Re-apply standalone indentation to every line of a partial body
///
/// The indentation is inserted after each line break that is followed by
/// more text; a trailing line break does not produce a dangling indent.
pub(crate) fn indent_partial(body: &str, indent: &str) -> String {
    let mut output = String::with_capacity(body.len());

    for (index, line) in body.split_inclusive('\n').enumerate() {
        if index > 0 {
            output.push_str(indent);
        }
        output.push_str(line);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_partial_every_line() {
        assert_eq!(indent_partial("line1\nline2", "  "), "line1\n  line2");
    }

    #[test]
    fn test_indent_partial_trailing_newline() {
        assert_eq!(indent_partial("a\nb\n", "\t"), "a\n\tb\n");
    }

    #[test]
    fn test_indent_partial_single_line() {
        assert_eq!(indent_partial("only", "    "), "only");
        assert_eq!(indent_partial("", "    "), "");
    }

    #[test]
    fn test_stringify_missing_value() {
        assert_eq!(stringify_value(None), "");
        assert_eq!(stringify_value(Some(&Context::from(7i64))), "7");
    }
}
