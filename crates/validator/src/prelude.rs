//! Prelude module for convenient imports.
//!
//! `use pattern_validator::prelude::*;` brings in the traits, rule types and
//! result types needed for everyday use.

pub use crate::error::RuleError;
pub use crate::foundation::{Severity, Validate, ValidationFailure, ValidationResult};
pub use crate::message::{DEFAULT_TEMPLATE, MessageTemplate, Token};
pub use crate::rules::{PatternOptions, PatternRule, matches};
pub use crate::validator::Validator;

#[cfg(feature = "json")]
pub use crate::config::{RuleDescriptor, ValidatorConfig};
#[cfg(feature = "json")]
pub use crate::json::json_property;
