//! Core validation types and traits
//!
//! - **Traits**: [`Validate`]
//! - **Values**: [`ValidationFailure`], [`ValidationResult`], [`Severity`]
//!
//! Rules are generic over their input type and report a failing check as a
//! value. A subject's outcome is the ordered fold of every rule's outcome:
//!
//! ```rust
//! use pattern_validator::foundation::{ValidationFailure, ValidationResult};
//!
//! let result: ValidationResult = vec![ValidationFailure::new("Surname", "bad")]
//!     .into_iter()
//!     .collect();
//! assert!(!result.is_valid());
//! ```

pub mod failure;
pub mod result;
pub mod traits;

pub use failure::{DEFAULT_ERROR_CODE, FailureParams, Severity, ValidationFailure};
pub use result::ValidationResult;
pub use traits::Validate;
