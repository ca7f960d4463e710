//! Block matching utilities (pairing section tags with their closing tags)

use super::tokenize::{Token, TokenKind};
use crate::template::error::TemplateError;

/// Check that every section is closed by a matching `{{/name}}`
///
/// Each closing tag must name the innermost open section. Runs once per
/// token buffer before rendering, so the renderer can rely on depth-only
/// matching afterwards.
pub(crate) fn validate_sections(tokens: &[Token]) -> Result<(), TemplateError> {
    let mut open: Vec<&Token> = Vec::new();

    for token in tokens {
        match token.kind {
            kind if kind.opens_section() => open.push(token),
            TokenKind::Ender => match open.pop() {
                Some(opener) if opener.value == token.value => {}
                Some(opener) => {
                    return Err(TemplateError::MismatchedEnder {
                        expected: opener.value.clone(),
                        found: token.value.clone(),
                        line: token.line,
                    });
                }
                None => {
                    return Err(TemplateError::UnexpectedEnder {
                        name: token.value.clone(),
                        line: token.line,
                    });
                }
            },
            _ => {}
        }
    }

    match open.pop() {
        Some(unclosed) => Err(TemplateError::UnclosedSection {
            name: unclosed.value.clone(),
            line: unclosed.line,
        }),
        None => Ok(()),
    }
}

/// Find the closing tag for the section opened at `open_index`
///
/// Returns the index of the matching `Ender`. Nesting is tracked by depth
/// alone; names were already paired by [`validate_sections`].
///
/// # Performance
///
/// Single forward pass from the opening tag.
pub(crate) fn find_section_end(tokens: &[Token], open_index: usize) -> Option<usize> {
    let mut depth = 0usize;

    for (index, token) in tokens.iter().enumerate().skip(open_index + 1) {
        match token.kind {
            kind if kind.opens_section() => depth += 1,
            TokenKind::Ender if depth == 0 => return Some(index),
            TokenKind::Ender => depth -= 1,
            _ => {
                // Text, variables, partials - continue scanning
            }
        }
    }

    None
}
