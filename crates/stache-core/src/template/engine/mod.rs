//! Template engine implementation

mod blocks;
mod helpers;
mod tokenize;

use crate::config::RenderConfig;
use crate::context::{resolve, Context};
use crate::template::error::TemplateError;
use crate::template::escape::escape;
use log::{debug, trace};

use blocks::{find_section_end, validate_sections};
use helpers::{indent_partial, stringify_value};

pub use tokenize::{tokenize, tokenize_with, Delimiters, Token, TokenKind};

/// What an open section pushed, so its closing tag can undo exactly that
#[derive(Debug)]
enum Frame<'c> {
    /// Object section: one scope frame on the context stack
    Scope,
    /// Array section: current element on the context stack
    Loop {
        items: &'c [Context],
        /// Token index right after the opening tag
        start: usize,
        /// Iterations left, including the one in progress
        remaining: usize,
    },
    /// Truthy scalar or inverted section: nothing pushed
    Pass,
}

/// An open section on the section stack
#[derive(Debug)]
struct OpenSection<'t, 'c> {
    name: &'t str,
    frame: Frame<'c>,
}

/// Rendering state owned by a single invocation
///
/// Partials get a fresh state with a copy of the caller's context stack.
struct RenderState<'t, 'c> {
    tokens: &'t [Token],
    /// Index of the token being interpreted
    cursor: usize,
    /// Scope chain, innermost last
    contexts: Vec<&'c Context>,
    sections: Vec<OpenSection<'t, 'c>>,
    /// Indentation of the last standalone partial line
    indentation: Option<&'t str>,
    /// Partial nesting depth of this invocation
    depth: usize,
    output: String,
}

impl<'t, 'c> RenderState<'t, 'c> {
    fn new(tokens: &'t [Token], contexts: Vec<&'c Context>, depth: usize) -> Self {
        Self {
            tokens,
            cursor: 0,
            contexts,
            sections: Vec::new(),
            indentation: None,
            depth,
            output: String::new(),
        }
    }

    /// Jump past the closing tag of the section opened at the cursor
    fn skip_section(&mut self) -> Result<(), TemplateError> {
        let tokens = self.tokens;
        let token = &tokens[self.cursor];
        let end = find_section_end(tokens, self.cursor).ok_or_else(|| {
            TemplateError::UnclosedSection {
                name: token.value.clone(),
                line: token.line,
            }
        })?;
        self.cursor = end + 1;
        Ok(())
    }

    /// Open a section of the given frame kind
    fn open(&mut self, name: &'t str, frame: Frame<'c>) {
        self.sections.push(OpenSection { name, frame });
        self.cursor += 1;
    }
}

/// Template engine for rendering templates against a [`Context`]
///
/// The engine holds only configuration; every call to [`render`](Self::render)
/// owns its own state, so one engine may render from several threads at once.
#[derive(Debug, Clone, Default)]
pub struct TemplateEngine {
    config: RenderConfig,
}

impl TemplateEngine {
    /// Create a new template engine with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a template engine with the given configuration
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render a template with the given context
    pub fn render(&self, template: &str, context: &Context) -> Result<String, TemplateError> {
        self.render_with_stack(template, vec![context], 0)
    }

    /// Tokenize, validate and interpret one template body
    fn render_with_stack(
        &self,
        template: &str,
        contexts: Vec<&Context>,
        depth: usize,
    ) -> Result<String, TemplateError> {
        let tokens = tokenize_with(template, self.config.delimiters.clone())?;
        validate_sections(&tokens)?;
        self.render_tokens(&tokens, contexts, depth)
    }

    /// Interpret a validated token buffer
    fn render_tokens(
        &self,
        tokens: &[Token],
        contexts: Vec<&Context>,
        depth: usize,
    ) -> Result<String, TemplateError> {
        let mut state = RenderState::new(tokens, contexts, depth);

        while state.cursor < tokens.len() {
            let token = &tokens[state.cursor];
            trace!("token {} {:?} '{}'", state.cursor, token.kind, token.value);

            match token.kind {
                TokenKind::Section => {
                    self.process_section(&mut state, token)?;
                    continue;
                }
                TokenKind::InvertedSection => {
                    self.process_inverted_section(&mut state, token)?;
                    continue;
                }
                TokenKind::Ender => {
                    self.process_ender(&mut state, token)?;
                    continue;
                }
                TokenKind::Text => state.output.push_str(&token.value),
                TokenKind::Comment => {}
                TokenKind::EscapedVariable => {
                    let value = stringify_value(resolve(&state.contexts, &token.value));
                    if self.config.escape_html {
                        state.output.push_str(&escape(&value));
                    } else {
                        state.output.push_str(&value);
                    }
                }
                TokenKind::UnescapedVariable => {
                    let value = stringify_value(resolve(&state.contexts, &token.value));
                    state.output.push_str(&value);
                }
                TokenKind::Indenter => {
                    if !token.value.is_empty() {
                        state.indentation = Some(token.value.as_str());
                        state.output.push_str(&token.value);
                    }
                }
                TokenKind::Partial => self.process_partial(&mut state, token)?,
            }

            state.cursor += 1;
        }

        Ok(state.output)
    }

    /// Process `{{#key}}`
    ///
    /// - absent, empty array or falsy scalar: skip the body
    /// - object: push it as a new scope frame
    /// - array: iterate, one pass per element
    /// - truthy scalar: render the body once in the current scope
    fn process_section<'t, 'c>(
        &self,
        state: &mut RenderState<'t, 'c>,
        token: &'t Token,
    ) -> Result<(), TemplateError> {
        let Some(value) = resolve(&state.contexts, &token.value) else {
            return state.skip_section();
        };

        match value {
            Context::Object(_) => {
                state.contexts.push(value);
                state.open(&token.value, Frame::Scope);
            }
            Context::Array(items) if items.is_empty() => state.skip_section()?,
            Context::Array(items) => {
                debug!(
                    "Entering loop '{}' with {} item(s) at line {}",
                    token.value,
                    items.len(),
                    token.line
                );
                state.contexts.push(&items[0]);
                let start = state.cursor + 1;
                state.open(
                    &token.value,
                    Frame::Loop {
                        items,
                        start,
                        remaining: items.len(),
                    },
                );
            }
            Context::Scalar(scalar) if scalar.is_truthy() => {
                state.open(&token.value, Frame::Pass);
            }
            Context::Scalar(_) => state.skip_section()?,
        }

        Ok(())
    }

    /// Process `{{^key}}`: render the body only for absent or falsy values
    fn process_inverted_section<'t>(
        &self,
        state: &mut RenderState<'t, '_>,
        token: &'t Token,
    ) -> Result<(), TemplateError> {
        let show = !resolve(&state.contexts, &token.value).is_some_and(Context::is_truthy);

        if show {
            state.open(&token.value, Frame::Pass);
            Ok(())
        } else {
            state.skip_section()
        }
    }

    /// Process `{{/key}}`: close the innermost section or advance its loop
    fn process_ender(
        &self,
        state: &mut RenderState<'_, '_>,
        token: &Token,
    ) -> Result<(), TemplateError> {
        let section = state
            .sections
            .pop()
            .ok_or_else(|| TemplateError::UnexpectedEnder {
                name: token.value.clone(),
                line: token.line,
            })?;

        if section.name != token.value {
            return Err(TemplateError::MismatchedEnder {
                expected: section.name.to_string(),
                found: token.value.clone(),
                line: token.line,
            });
        }

        match section.frame {
            Frame::Scope => {
                state.contexts.pop();
                state.cursor += 1;
            }
            Frame::Pass => state.cursor += 1,
            Frame::Loop {
                items,
                start,
                remaining,
            } => {
                state.contexts.pop();
                let remaining = remaining - 1;

                if remaining == 0 {
                    state.cursor += 1;
                } else {
                    state.contexts.push(&items[items.len() - remaining]);
                    state.cursor = start;
                    state.sections.push(OpenSection {
                        name: section.name,
                        frame: Frame::Loop {
                            items,
                            start,
                            remaining,
                        },
                    });
                }
            }
        }

        Ok(())
    }

    /// Process `{{>name}}`
    ///
    /// The partial body is looked up in the context like a variable, indented
    /// with the pending standalone indentation, and rendered against a copy of
    /// the current scope chain. An indented body loses its trailing spaces.
    fn process_partial(
        &self,
        state: &mut RenderState<'_, '_>,
        token: &Token,
    ) -> Result<(), TemplateError> {
        if state.depth >= self.config.max_partial_depth {
            return Err(TemplateError::PartialDepthExceeded {
                name: token.value.clone(),
                depth: self.config.max_partial_depth,
            });
        }

        let body = stringify_value(resolve(&state.contexts, &token.value));
        let body = match state.indentation.take() {
            Some(indent) => indent_partial(body.trim_end_matches(' '), indent),
            None => body,
        };

        debug!(
            "Expanding partial '{}' at line {} (depth {})",
            token.value,
            token.line,
            state.depth + 1
        );
        let rendered = self.render_with_stack(&body, state.contexts.clone(), state.depth + 1)?;
        state.output.push_str(&rendered);
        Ok(())
    }
}

/// Convenience function to render a template with the default configuration
pub fn render(template: &str, context: &Context) -> Result<String, TemplateError> {
    TemplateEngine::new().render(template, context)
}

#[cfg(test)]
mod tests;
