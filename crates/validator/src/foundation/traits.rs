//! Core traits for the validation system
//!
//! This module defines the trait every rule implements.

use crate::foundation::ValidationFailure;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all rules implement.
///
/// The trait is generic over the input type so a rule states at compile
/// time what it can check. A failing check is an ordinary value
/// (`Err(ValidationFailure)`), not an exceptional condition.
///
/// # Type Parameters
///
/// * `Input` - The type being validated (can be `?Sized` for DSTs like `str`)
///
/// # Examples
///
/// ```rust
/// use pattern_validator::foundation::{Validate, ValidationFailure};
///
/// struct NotBlank;
///
/// impl Validate for NotBlank {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationFailure> {
///         if input.trim().is_empty() {
///             Err(ValidationFailure::new("Name", "'Name' must not be blank."))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NotBlank.validate("x").is_ok());
/// assert!(NotBlank.validate("  ").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationFailure)` if validation fails
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationFailure>;

    /// Validates an optional value.
    ///
    /// An absent value is not a format violation, so `None` always passes
    /// and `Some(v)` is checked with [`Validate::validate`].
    fn validate_optional(&self, input: Option<&Self::Input>) -> Result<(), ValidationFailure> {
        match input {
            None => Ok(()),
            Some(value) => self.validate(value),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationFailure> {
            Ok(())
        }
    }

    struct AlwaysFails;

    impl Validate for AlwaysFails {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationFailure> {
            Err(ValidationFailure::new("Field", "always fails"))
        }
    }

    #[test]
    fn test_validator_trait() {
        assert!(AlwaysValid.validate("test").is_ok());
        assert!(AlwaysFails.validate("test").is_err());
    }

    #[test]
    fn test_validate_optional_skips_none() {
        assert!(AlwaysFails.validate_optional(None).is_ok());
        assert!(AlwaysFails.validate_optional(Some("x")).is_err());
    }
}
