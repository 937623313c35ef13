//! Error-message templates
//!
//! Templates contain placeholders from a fixed set of [`Token`]s. Formatting
//! is a single left-to-right scan: recognized placeholders are replaced,
//! substituted text is never scanned again, and anything else (including
//! unknown `{...}` sequences) is copied as-is. Formatting reads no global
//! state, so the output depends only on the template and the arguments.

use std::borrow::Cow;
use std::fmt;

/// Template used when a rule has no custom message.
pub const DEFAULT_TEMPLATE: &str = "'{PropertyName}' is not in the correct format.";

// ============================================================================
// TOKENS
// ============================================================================

/// A placeholder recognized inside message templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// `{PropertyName}`: the property display name.
    PropertyName,
    /// `{RegularExpression}`: the pattern source text as configured.
    RegularExpression,
}

impl Token {
    /// Every recognized token.
    pub const ALL: [Token; 2] = [Token::PropertyName, Token::RegularExpression];

    /// The placeholder text, braces included.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::PropertyName => "{PropertyName}",
            Self::RegularExpression => "{RegularExpression}",
        }
    }

    fn resolve<'a>(self, args: &MessageArgs<'a>) -> &'a str {
        match self {
            Self::PropertyName => args.property_name,
            Self::RegularExpression => args.regular_expression,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.placeholder())
    }
}

/// Values substituted for each [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageArgs<'a> {
    pub property_name: &'a str,
    pub regular_expression: &'a str,
}

/// Replaces recognized placeholders in `template`.
///
/// # Examples
///
/// ```rust
/// use pattern_validator::message::{MessageArgs, format_message};
///
/// let args = MessageArgs { property_name: "Forename", regular_expression: r"^\w\d$" };
/// assert_eq!(format_message("test {RegularExpression}", &args), r"test ^\w\d$");
/// assert_eq!(format_message("{Unknown} {PropertyName}", &args), "{Unknown} Forename");
/// ```
#[must_use]
pub fn format_message(template: &str, args: &MessageArgs<'_>) -> String {
    let mut out = String::with_capacity(template.len() + args.regular_expression.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match Token::ALL
            .into_iter()
            .find(|token| tail.starts_with(token.placeholder()))
        {
            Some(token) => {
                out.push_str(token.resolve(args));
                rest = &tail[token.placeholder().len()..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

// ============================================================================
// TEMPLATE
// ============================================================================

/// A rule's error-message template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageTemplate(Cow<'static, str>);

impl MessageTemplate {
    /// Creates a custom template.
    pub fn new(template: impl Into<Cow<'static, str>>) -> Self {
        Self(template.into())
    }

    /// Returns the template text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when this is the built-in default.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_TEMPLATE
    }

    /// Formats the template with `args`.
    #[must_use]
    pub fn format(&self, args: &MessageArgs<'_>) -> String {
        format_message(&self.0, args)
    }
}

impl Default for MessageTemplate {
    fn default() -> Self {
        Self(Cow::Borrowed(DEFAULT_TEMPLATE))
    }
}

impl fmt::Display for MessageTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for MessageTemplate {
    fn from(value: &'static str) -> Self {
        Self::new(value)
    }
}

impl From<String> for MessageTemplate {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
