//! # pattern-validator
//!
//! Regular-expression rules for object fields, with templated error
//! messages.
//!
//! ## Quick Start
//!
//! ```rust
//! use pattern_validator::prelude::*;
//!
//! struct Person {
//!     surname: Option<String>,
//! }
//!
//! let validator = Validator::new()
//!     .field("Surname", |p: &Person| p.surname.as_deref())
//!     .rule(PatternRule::new("Surname", r"^\w\d$")?)?;
//!
//! let result = validator.validate(&Person { surname: Some("S33".into()) })?;
//! assert!(!result.is_valid());
//! assert_eq!(
//!     result.errors()[0].error_message,
//!     "'Surname' is not in the correct format."
//! );
//! # Ok::<(), RuleError>(())
//! ```
//!
//! ## Semantics
//!
//! - A value that is absent (`None`, JSON `null`) passes.
//! - Any string, including `""`, must match the pattern in full.
//! - Failed rules are values in a [`ValidationResult`](foundation::ValidationResult);
//!   [`RuleError`] is reserved for bad configuration and malformed subjects.
//! - Messages support `{PropertyName}` and `{RegularExpression}`; see
//!   [`message`].

#[cfg(feature = "json")]
pub mod config;
pub mod error;
pub mod foundation;
#[cfg(feature = "json")]
pub mod json;
pub mod message;
pub mod prelude;
pub mod rules;
pub mod validator;

pub use error::RuleError;
