//! Configuration and contract errors
//!
//! A [`RuleError`] is never a validation outcome. Failed checks are
//! [`ValidationFailure`](crate::foundation::ValidationFailure) values; a
//! `RuleError` means a rule could not be configured, or a subject broke the
//! caller contract (for example a JSON number where a string was expected).

/// Errors raised while configuring rules or reading a subject.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RuleError {
    /// The regular expression did not compile.
    #[error("invalid regular expression '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A rule was registered for a property with no declared accessor.
    #[error("no field named '{property}' is declared on this validator")]
    UnknownProperty { property: String },

    /// The subject held a value of the wrong type for a string rule.
    #[error("property '{property}' must be {expected} or null, found {actual}")]
    TypeMismatch {
        property: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// The subject as a whole had the wrong shape (e.g. a JSON array).
    #[error("subject must be {expected}, found {actual}")]
    InvalidSubject {
        expected: &'static str,
        actual: &'static str,
    },

    /// A rule configuration document could not be parsed.
    #[cfg(feature = "json")]
    #[error("invalid rule configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl RuleError {
    pub(crate) fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }

    pub(crate) fn unknown_property(property: impl Into<String>) -> Self {
        Self::UnknownProperty {
            property: property.into(),
        }
    }

    /// Returns true for errors caused by configuration rather than input.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        !matches!(
            self,
            Self::TypeMismatch { .. } | Self::InvalidSubject { .. }
        )
    }
}
