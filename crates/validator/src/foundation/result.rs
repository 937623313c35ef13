//! Aggregate outcome of validating one subject

use std::fmt;

use serde::Serialize;

use crate::foundation::ValidationFailure;

/// The pass/fail outcome plus ordered failures for one validated subject.
///
/// Failures are kept in the order rules were registered. The result is
/// created fresh for each `validate` call and is not modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    errors: Vec<ValidationFailure>,
}

impl ValidationResult {
    /// Creates a result with no failures.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub(crate) fn push(&mut self, failure: ValidationFailure) {
        self.errors.push(failure);
    }

    /// Returns true iff no rule failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the failures in rule-registration order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationFailure] {
        &self.errors
    }

    /// Returns the failures reported for one property.
    pub fn errors_for<'a>(
        &'a self,
        property: &'a str,
    ) -> impl Iterator<Item = &'a ValidationFailure> + 'a {
        self.errors
            .iter()
            .filter(move |failure| failure.property_name == property)
    }

    /// Consumes the result and returns the failures.
    #[must_use]
    pub fn into_errors(self) -> Vec<ValidationFailure> {
        self.errors
    }

    /// Converts to a `Result`, `Err` carrying the failures.
    #[must_use = "result must be used"]
    pub fn into_result(self) -> Result<(), Vec<ValidationFailure>> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

impl FromIterator<ValidationFailure> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = ValidationFailure>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return f.write_str("Validation succeeded");
        }
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, failure) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, failure)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_valid() {
        let result = ValidationResult::new();
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
        assert_eq!(result.into_result(), Ok(()));
    }

    #[test]
    fn test_keeps_insertion_order() {
        let result: ValidationResult = [
            ValidationFailure::new("b", "second field"),
            ValidationFailure::new("a", "first field"),
        ]
        .into_iter()
        .collect();

        assert!(!result.is_valid());
        let names: Vec<_> = result
            .errors()
            .iter()
            .map(|f| f.property_name.as_str())
            .collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn test_errors_for() {
        let mut result = ValidationResult::new();
        result.push(ValidationFailure::new("a", "one"));
        result.push(ValidationFailure::new("b", "two"));
        result.push(ValidationFailure::new("a", "three"));

        let messages: Vec<_> = result
            .errors_for("a")
            .map(|f| f.error_message.as_str())
            .collect();
        assert_eq!(messages, ["one", "three"]);
    }
}
