//! Format templates: tokenizing, regex compilation, and display rendering.
//!
//! A template is written with symbolic placeholders:
//!
//! | Symbol | Meaning |
//! |--------|---------|
//! | `N` | one decimal digit |
//! | `A` | one character that is not a decimal digit |
//! | `X` | one alphanumeric character |
//! | `[` … `]` | the enclosed literals are optional as a whole |
//! | anything else | a literal that must match itself |
//!
//! Whitespace inside a template is insignificant.

use std::fmt;

use super::TinError;

/// A single symbol of a format template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateToken {
    /// `N`
    Digit,
    /// `A`
    NonDigit,
    /// `X`
    Alnum,
    /// Any character without a special meaning.
    Literal(char),
    /// `[`
    OptionalOpen,
    /// `]`
    OptionalClose,
}

impl TemplateToken {
    fn from_char(c: char) -> Self {
        match c {
            'N' => Self::Digit,
            'A' => Self::NonDigit,
            'X' => Self::Alnum,
            '[' => Self::OptionalOpen,
            ']' => Self::OptionalClose,
            other => Self::Literal(other),
        }
    }

    /// The character this token was written as.
    pub fn symbol(self) -> char {
        match self {
            Self::Digit => 'N',
            Self::NonDigit => 'A',
            Self::Alnum => 'X',
            Self::Literal(c) => c,
            Self::OptionalOpen => '[',
            Self::OptionalClose => ']',
        }
    }

    /// Whether the token consumes one input character when rendering.
    pub fn is_placeholder(self) -> bool {
        matches!(self, Self::Digit | Self::NonDigit | Self::Alnum)
    }

    fn push_regex(self, out: &mut String) {
        match self {
            Self::Digit => out.push_str("[0-9]"),
            Self::NonDigit => out.push_str("[^0-9]"),
            Self::Alnum => out.push_str("[A-Za-z0-9]"),
            Self::Literal(c) => out.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
            Self::OptionalOpen => out.push_str("(?:"),
            Self::OptionalClose => out.push_str(")?"),
        }
    }
}

/// A parsed format template, e.g. `NNNNNNNNN[RT0001]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    tokens: Vec<TemplateToken>,
}

impl Template {
    /// Parse a template string.
    ///
    /// # Errors
    ///
    /// Returns [`TinError::Template`] for an empty template, for nested
    /// optional groups, and for unbalanced brackets.
    pub fn parse(source: &str) -> Result<Self, TinError> {
        let tokens: Vec<TemplateToken> = source
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(TemplateToken::from_char)
            .collect();

        if tokens.is_empty() {
            return Err(TinError::Template("empty template".into()));
        }

        let mut in_group = false;
        for token in &tokens {
            match token {
                TemplateToken::OptionalOpen if in_group => {
                    return Err(TinError::Template(format!(
                        "nested optional group in '{source}'"
                    )));
                }
                TemplateToken::OptionalOpen => in_group = true,
                TemplateToken::OptionalClose if !in_group => {
                    return Err(TinError::Template(format!(
                        "unopened optional group in '{source}'"
                    )));
                }
                TemplateToken::OptionalClose => in_group = false,
                _ => {}
            }
        }
        if in_group {
            return Err(TinError::Template(format!(
                "unclosed optional group in '{source}'"
            )));
        }

        Ok(Self {
            source: source.to_string(),
            tokens,
        })
    }

    /// The template as it was written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Tokens in template order, whitespace removed.
    pub fn tokens(&self) -> &[TemplateToken] {
        &self.tokens
    }

    /// Regex source anchored to the whole input.
    pub fn to_regex_source(&self) -> String {
        let mut out = String::from("^(?:");
        for token in &self.tokens {
            token.push_regex(&mut out);
        }
        out.push_str(")$");
        out
    }

    /// Render `normalized` into the template's display form.
    ///
    /// Group brackets are dropped and every other template character is
    /// walked in order, whitespace included. Each placeholder takes the next
    /// input character, or emits its own symbol once the input is exhausted;
    /// literals are always emitted verbatim. For `NNNNNNNNN[RT0001]` both
    /// `123456789` and `123456789RT0001` render as `123456789RT0001`.
    pub fn render(&self, normalized: &str) -> String {
        let mut input = normalized.chars();
        let mut out = String::with_capacity(self.source.len());
        for token in self.source.chars().map(TemplateToken::from_char) {
            match token {
                TemplateToken::OptionalOpen | TemplateToken::OptionalClose => {}
                t if t.is_placeholder() => out.push(input.next().unwrap_or(t.symbol())),
                t => out.push(t.symbol()),
            }
        }
        out
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
