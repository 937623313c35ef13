//! Validation failure values
//!
//! A [`ValidationFailure`] describes why one rule did not pass for one
//! property. It is produced as a value and collected into a
//! [`ValidationResult`](crate::foundation::ValidationResult); it is never
//! used as control flow.
//!
//! Code and param keys use `Cow<'static, str>` so the common case of static
//! codes allocates nothing.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Error code attached to failures when no custom code is configured.
pub const DEFAULT_ERROR_CODE: &str = "regular_expression";

/// Parameter list carried by a failure (typically 0-2 entries).
pub type FailureParams = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>;

// ============================================================================
// SEVERITY
// ============================================================================

/// Severity level of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Failure that must be fixed (default).
    #[default]
    Error,
    /// Should be addressed but is still reported as a failure.
    Warning,
    /// Informational.
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        })
    }
}

// ============================================================================
// VALIDATION FAILURE
// ============================================================================

/// A single failed rule for a single property.
///
/// # Examples
///
/// ```rust
/// use pattern_validator::foundation::{Severity, ValidationFailure};
///
/// let failure = ValidationFailure::new("Surname", "'Surname' is not in the correct format.")
///     .with_attempted_value("S33")
///     .with_param("pattern", r"^\w\d$");
///
/// assert_eq!(failure.property_name, "Surname");
/// assert_eq!(failure.severity, Severity::Error);
/// assert_eq!(failure.param("pattern"), Some(r"^\w\d$"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    /// Identifier of the property that failed.
    pub property_name: String,

    /// Fully substituted, human-readable message.
    pub error_message: String,

    /// Code for programmatic handling.
    pub error_code: Cow<'static, str>,

    /// The value that was rejected, if one was present.
    pub attempted_value: Option<String>,

    /// Severity level.
    pub severity: Severity,

    /// Parameters that went into the message (e.g. `("pattern", "^\d+$")`).
    pub params: FailureParams,
}

impl ValidationFailure {
    /// Creates a failure with the default code and severity.
    pub fn new(property_name: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            error_message: error_message.into(),
            error_code: Cow::Borrowed(DEFAULT_ERROR_CODE),
            attempted_value: None,
            severity: Severity::Error,
            params: SmallVec::new(),
        }
    }

    /// Sets the error code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.error_code = code.into();
        self
    }

    /// Records the rejected value.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_attempted_value(mut self, value: impl Into<String>) -> Self {
        self.attempted_value = Some(value.into());
        self
    }

    /// Sets the severity level.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Adds a parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.property_name, self.error_message)?;
        if self.severity != Severity::Error {
            write!(f, " ({})", self.severity)?;
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
