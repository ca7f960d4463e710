//! Tokenization for template engine
//!
//! Turns raw template text into a flat, indexable token buffer. Scanning is
//! forward-only; a second pass applies the standalone-line rule.

use crate::template::error::TemplateError;
use serde::{Deserialize, Serialize};

/// Token classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Literal passthrough text
    Text,
    /// {{! ... }}, also left behind by a delimiter change
    Comment,
    /// {{key}}
    EscapedVariable,
    /// {{{key}}} or {{&key}}
    UnescapedVariable,
    /// {{#key}}
    Section,
    /// {{^key}}
    InvertedSection,
    /// {{/key}}
    Ender,
    /// {{>name}}
    Partial,
    /// Leading whitespace of a standalone partial line
    Indenter,
}

impl TokenKind {
    /// Tags that swallow their whole line when they stand alone on it
    fn may_stand_alone(self) -> bool {
        matches!(
            self,
            TokenKind::Comment
                | TokenKind::Section
                | TokenKind::InvertedSection
                | TokenKind::Ender
                | TokenKind::Partial
        )
    }

    /// Section openers (normal or inverted)
    pub fn opens_section(self) -> bool {
        matches!(self, TokenKind::Section | TokenKind::InvertedSection)
    }
}

/// A single token with its payload and source line
///
/// `value` holds the literal text for `Text`/`Indenter` tokens and the trimmed
/// key path (or partial name) for tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token classification
    pub kind: TokenKind,
    /// Text, key path or partial name
    pub value: String,
    /// Line number where token starts (for error messages)
    pub line: usize,
}

impl Token {
    fn new(kind: TokenKind, value: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            value: value.into(),
            line,
        }
    }
}

/// Opening and closing tag delimiters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delimiters {
    pub open: String,
    pub close: String,
}

impl Delimiters {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Check that both delimiters are usable
    ///
    /// Returns a description of the problem on failure.
    pub fn check(&self) -> Result<(), String> {
        for (which, delimiter) in [("opening", &self.open), ("closing", &self.close)] {
            if delimiter.is_empty() {
                return Err(format!("{} delimiter is empty", which));
            }
            if delimiter.chars().any(|c| c.is_whitespace() || c == '=') {
                return Err(format!(
                    "{} delimiter '{}' contains whitespace or '='",
                    which, delimiter
                ));
            }
        }
        Ok(())
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self::new("{{", "}}")
    }
}

/// Scanner state
///
/// ```text
/// Text ──open delimiter──> Tag ──close delimiter──> Text
///   │                       │
///   └──── end of input ─────┴──> Done
/// ```
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ScanState {
    /// Scanning literal text
    Text,
    /// Positioned on an opening delimiter
    Tag,
    /// Input exhausted or an error was reported
    Done,
}

/// Tag forms that change how the closing delimiter is matched
#[derive(Debug, Clone, Copy, PartialEq)]
enum TagShape {
    /// {{{key}}}
    Triple,
    /// {{=<% %>=}}
    SetDelimiters,
    /// Everything else
    Plain,
}

/// Iterator over raw tokens in a template string
///
/// Yields `Err` once for malformed input and then stops. The tokens are
/// "raw": the standalone-line rule has not been applied yet.
pub(crate) struct TokenStream<'a> {
    text: &'a str,
    /// Current byte position
    pos: usize,
    state: ScanState,
    /// Current line number (for error messages)
    line: usize,
    delimiters: Delimiters,
}

impl<'a> TokenStream<'a> {
    /// Create a new TokenStream with the default `{{ }}` delimiters
    pub fn new(text: &'a str) -> Self {
        Self::with_delimiters(text, Delimiters::default())
    }

    pub fn with_delimiters(text: &'a str, delimiters: Delimiters) -> Self {
        Self {
            text,
            pos: 0,
            state: ScanState::Text,
            line: 1,
            delimiters,
        }
    }

    /// Emit literal text up to the next opening delimiter
    fn scan_text(&mut self) -> Option<Token> {
        let rest = &self.text[self.pos..];
        let end = rest.find(&self.delimiters.open).unwrap_or(rest.len());
        self.state = if end == rest.len() {
            ScanState::Done
        } else {
            ScanState::Tag
        };

        if end == 0 {
            return None;
        }

        let text = &rest[..end];
        let token = Token::new(TokenKind::Text, text, self.line);
        self.line += count_newlines(text);
        self.pos += end;
        Some(token)
    }

    /// Consume the tag at the current position
    fn scan_tag(&mut self) -> Result<Token, TemplateError> {
        let line = self.line;
        let after_open = self.pos + self.delimiters.open.len();

        let shape = match self.text[after_open..].chars().next() {
            Some('{') => TagShape::Triple,
            Some('=') => TagShape::SetDelimiters,
            _ => TagShape::Plain,
        };
        let (content_start, closer) = match shape {
            TagShape::Triple => (after_open + 1, format!("}}{}", self.delimiters.close)),
            TagShape::SetDelimiters => (after_open + 1, format!("={}", self.delimiters.close)),
            TagShape::Plain => (after_open, self.delimiters.close.clone()),
        };

        let close = self.text[content_start..]
            .find(&closer)
            .ok_or_else(|| TemplateError::MalformedSyntax {
                message: format!("Unclosed tag: expected '{}'", closer),
                line,
            })?;
        let content = &self.text[content_start..content_start + close];
        let tag_end = content_start + close + closer.len();

        self.line += count_newlines(&self.text[self.pos..tag_end]);
        self.pos = tag_end;
        self.state = ScanState::Text;

        match shape {
            TagShape::Triple => Ok(Token::new(
                TokenKind::UnescapedVariable,
                require_key(content, line)?,
                line,
            )),
            TagShape::SetDelimiters => {
                self.change_delimiters(content, line)?;
                Ok(Token::new(TokenKind::Comment, content.trim(), line))
            }
            TagShape::Plain => classify_content(content, line),
        }
    }

    /// Apply a `{{=<% %>=}}` tag body
    fn change_delimiters(&mut self, content: &str, line: usize) -> Result<(), TemplateError> {
        let parts: Vec<&str> = content.split_whitespace().collect();
        let [open, close] = parts.as_slice() else {
            return Err(TemplateError::MalformedSyntax {
                message: format!(
                    "Invalid delimiter change '{}': expected two delimiters separated by whitespace",
                    content.trim()
                ),
                line,
            });
        };

        let delimiters = Delimiters::new(*open, *close);
        delimiters
            .check()
            .map_err(|message| TemplateError::MalformedSyntax { message, line })?;
        self.delimiters = delimiters;
        Ok(())
    }
}

impl Iterator for TokenStream<'_> {
    type Item = Result<Token, TemplateError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.state {
                ScanState::Done => return None,
                ScanState::Text => {
                    if let Some(token) = self.scan_text() {
                        return Some(Ok(token));
                    }
                }
                ScanState::Tag => {
                    let result = self.scan_tag();
                    if result.is_err() {
                        self.state = ScanState::Done;
                    }
                    return Some(result);
                }
            }
        }
    }
}

/// Classify tag content by its sigil
///
/// - `#key` → Section, `^key` → InvertedSection, `/key` → Ender
/// - `!...` → Comment, `>name` → Partial, `&key` → UnescapedVariable
/// - `key` or `nested.key` → EscapedVariable
fn classify_content(content: &str, line: usize) -> Result<Token, TemplateError> {
    let trimmed = content.trim();
    let mut chars = trimmed.chars();

    let kind = match chars.next() {
        Some('!') => return Ok(Token::new(TokenKind::Comment, &trimmed[1..], line)),
        Some('#') => TokenKind::Section,
        Some('^') => TokenKind::InvertedSection,
        Some('/') => TokenKind::Ender,
        Some('>') => TokenKind::Partial,
        Some('&') => TokenKind::UnescapedVariable,
        Some(sigil @ ('<' | '$')) => {
            return Err(TemplateError::MalformedSyntax {
                message: format!("Unsupported tag sigil '{}'", sigil),
                line,
            });
        }
        _ => return Ok(Token::new(TokenKind::EscapedVariable, require_key(trimmed, line)?, line)),
    };

    Ok(Token::new(kind, require_key(chars.as_str(), line)?, line))
}

/// Trimmed key of a tag, rejecting empty ones
fn require_key(content: &str, line: usize) -> Result<&str, TemplateError> {
    let key = content.trim();
    if key.is_empty() {
        return Err(TemplateError::MalformedSyntax {
            message: "Empty tag".to_string(),
            line,
        });
    }
    Ok(key)
}

/// Count newlines in text
fn count_newlines(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}

fn is_inline_whitespace(text: &str) -> bool {
    text.chars().all(|c| c == ' ' || c == '\t' || c == '\r')
}

/// Bytes to drop from each text token
#[derive(Debug, Default, Clone, Copy)]
struct Trim {
    start: usize,
    end: usize,
}

/// Apply the standalone-line rule to a raw token buffer
///
/// A standalone tag is the only non-whitespace content on its line. Its
/// leading indentation and trailing line break are removed from the
/// neighbouring text tokens; a standalone partial keeps its indentation as an
/// `Indenter` token placed right before it.
fn apply_standalone(tokens: Vec<Token>) -> Vec<Token> {
    let mut trims = vec![Trim::default(); tokens.len()];
    let mut indents: Vec<Option<String>> = vec![None; tokens.len()];

    for (i, token) in tokens.iter().enumerate() {
        if !token.kind.may_stand_alone() {
            continue;
        }

        let Some((indent_len, indent)) = line_prefix(&tokens, i) else {
            continue;
        };
        let Some(suffix_len) = line_suffix(&tokens, i) else {
            continue;
        };

        if i > 0 {
            trims[i - 1].end = indent_len;
        }
        if i + 1 < tokens.len() {
            trims[i + 1].start = suffix_len;
        }
        if token.kind == TokenKind::Partial && !indent.is_empty() {
            indents[i] = Some(indent.to_string());
        }
    }

    let mut output = Vec::with_capacity(tokens.len());
    for ((mut token, trim), indent) in tokens.into_iter().zip(trims).zip(indents) {
        if let Some(indent) = indent {
            output.push(Token::new(TokenKind::Indenter, indent, token.line));
        }

        if token.kind == TokenKind::Text {
            let len = token.value.len();
            let start = trim.start.min(len);
            let end = len.saturating_sub(trim.end).max(start);
            if start > 0 || end < len {
                token.line += count_newlines(&token.value[..start]);
                token.value = token.value[start..end].to_string();
            }
            if token.value.is_empty() {
                continue;
            }
        }

        output.push(token);
    }

    output
}

/// Whitespace between the start of the line and tag `i`
///
/// Returns the number of bytes to trim from the preceding text token and the
/// indentation itself, or `None` when something else precedes the tag on its
/// line.
fn line_prefix(tokens: &[Token], i: usize) -> Option<(usize, &str)> {
    if i == 0 {
        return Some((0, ""));
    }

    let prev = &tokens[i - 1];
    if prev.kind != TokenKind::Text {
        return None;
    }

    let (tail, at_line_start) = match prev.value.rfind('\n') {
        Some(newline) => (&prev.value[newline + 1..], true),
        None => (prev.value.as_str(), i == 1),
    };

    (at_line_start && is_inline_whitespace(tail)).then_some((tail.len(), tail))
}

/// Whitespace and line break between tag `i` and the end of its line
///
/// Returns the number of bytes to trim from the following text token, or
/// `None` when something else follows the tag on its line.
fn line_suffix(tokens: &[Token], i: usize) -> Option<usize> {
    let Some(next) = tokens.get(i + 1) else {
        return Some(0);
    };
    if next.kind != TokenKind::Text {
        return None;
    }

    match next.value.find('\n') {
        Some(newline) => is_inline_whitespace(&next.value[..newline]).then_some(newline + 1),
        None => (i + 2 == tokens.len() && is_inline_whitespace(&next.value))
            .then_some(next.value.len()),
    }
}

/// Tokenize a template with the default `{{ }}` delimiters
pub fn tokenize(text: &str) -> Result<Vec<Token>, TemplateError> {
    collect_tokens(TokenStream::new(text))
}

/// Tokenize a template starting from the given delimiters
pub fn tokenize_with(text: &str, delimiters: Delimiters) -> Result<Vec<Token>, TemplateError> {
    collect_tokens(TokenStream::with_delimiters(text, delimiters))
}

fn collect_tokens(stream: TokenStream<'_>) -> Result<Vec<Token>, TemplateError> {
    let raw = stream.collect::<Result<Vec<_>, _>>()?;
    Ok(apply_standalone(raw))
}
