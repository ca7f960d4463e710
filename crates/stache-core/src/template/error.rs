//! Template error types

use thiserror::Error;

/// Template tokenization and rendering errors
///
/// A lookup miss is never an error: missing data renders as the empty string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Malformed tag syntax (unterminated tag, empty tag, bad delimiters)
    #[error("Malformed syntax at line {line}: {message}")]
    MalformedSyntax {
        /// Error message
        message: String,
        /// Line number where the error occurred
        line: usize,
    },

    /// Section or inverted section without a closing tag
    #[error("Unclosed section '{name}' opened at line {line}")]
    UnclosedSection {
        /// Name of the section left open
        name: String,
        /// Line of the opening tag
        line: usize,
    },

    /// Closing tag with no open section
    #[error("Unexpected {{{{/{name}}}}} at line {line} without a matching opening tag")]
    UnexpectedEnder {
        /// Name on the closing tag
        name: String,
        /// Line of the closing tag
        line: usize,
    },

    /// Closing tag that does not match the innermost open section
    #[error("Mismatched closing tag at line {line}: expected {{{{/{expected}}}}}, found {{{{/{found}}}}}")]
    MismatchedEnder {
        /// Name of the innermost open section
        expected: String,
        /// Name on the closing tag
        found: String,
        /// Line of the closing tag
        line: usize,
    },

    /// Partial expansion nested deeper than the configured limit
    #[error("Partial '{name}' exceeded the maximum nesting depth of {depth}. Check for a partial that includes itself.")]
    PartialDepthExceeded {
        /// Partial being expanded when the limit was hit
        name: String,
        /// Configured maximum depth
        depth: usize,
    },
}
