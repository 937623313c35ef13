//! Rule registration and subject validation
//!
//! A [`Validator`] owns a statically declared map from field identifier to
//! accessor, plus the rules registered against those fields. Fields are
//! plain closures over the subject type; no reflection is involved.
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
//!     .rule(PatternRule::new("Surname", r"^\w\d$").unwrap())
//!     .unwrap();
//!
//! let result = validator.validate(&Person { surname: Some("S3".into()) }).unwrap();
//! assert!(result.is_valid());
//! ```

use std::fmt;

use indexmap::IndexMap;

use crate::error::RuleError;
use crate::foundation::ValidationResult;
use crate::rules::PatternRule;

/// Reads one string property from a subject.
///
/// `Ok(None)` means the property is absent. `Err` is reserved for subjects
/// that break the caller contract.
pub type Accessor<T> =
    Box<dyn for<'a> Fn(&'a T) -> Result<Option<&'a str>, RuleError> + Send + Sync>;

/// Runs registered rules against subjects of type `T`.
///
/// Immutable once configured; `validate` takes `&self` and can be called
/// from many threads at once.
pub struct Validator<T> {
    fields: IndexMap<String, Accessor<T>>,
    // (index into `fields`, rule) in registration order
    rules: Vec<(usize, PatternRule)>,
}

impl<T> Validator<T> {
    /// Creates a validator with no fields and no rules.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
            rules: Vec::new(),
        }
    }

    /// Declares a field and how to read it.
    ///
    /// Declaring the same name again replaces the accessor and keeps the
    /// rules already registered for it.
    #[must_use = "builder methods must be chained or built"]
    pub fn field<F>(self, name: impl Into<String>, accessor: F) -> Self
    where
        F: for<'a> Fn(&'a T) -> Option<&'a str> + Send + Sync + 'static,
    {
        self.field_fallible(name, move |subject: &T| Ok(accessor(subject)))
    }

    /// Declares a field whose accessor can reject the subject.
    #[must_use = "builder methods must be chained or built"]
    pub fn field_fallible<F>(mut self, name: impl Into<String>, accessor: F) -> Self
    where
        F: for<'a> Fn(&'a T) -> Result<Option<&'a str>, RuleError> + Send + Sync + 'static,
    {
        let name = name.into();
        tracing::debug!(field = %name, "declared field");
        self.fields.insert(name, Box::new(accessor));
        self
    }

    /// Registers a rule for an already declared field.
    pub fn rule(mut self, rule: PatternRule) -> Result<Self, RuleError> {
        self.add_rule(rule)?;
        Ok(self)
    }

    /// Registers a rule for an already declared field, in place.
    pub fn add_rule(&mut self, rule: PatternRule) -> Result<&mut Self, RuleError> {
        let Some(index) = self.fields.get_index_of(rule.property_name()) else {
            return Err(RuleError::unknown_property(rule.property_name()));
        };

        tracing::debug!(
            property = %rule.property_name(),
            pattern = %rule.pattern_source(),
            "registered pattern rule"
        );
        self.rules.push((index, rule));
        Ok(self)
    }

    /// Compiles and registers a pattern rule.
    ///
    /// A malformed pattern is rejected here, never at validation time.
    pub fn register_rule(
        &mut self,
        property: &str,
        pattern: &str,
        message: Option<&str>,
    ) -> Result<&mut Self, RuleError> {
        let mut rule = PatternRule::new(property, pattern)?;
        if let Some(template) = message {
            rule = rule.with_message(template.to_owned());
        }
        self.add_rule(rule)
    }

    /// Declared field names, in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// All rules, in registration order.
    pub fn rules(&self) -> impl Iterator<Item = &PatternRule> {
        self.rules.iter().map(|(_, rule)| rule)
    }

    /// Rules registered for one field, in registration order.
    pub fn rules_for<'a>(&'a self, property: &'a str) -> impl Iterator<Item = &'a PatternRule> + 'a {
        self.rules()
            .filter(move |rule| rule.property_name() == property)
    }

    /// Runs every rule against `subject`.
    ///
    /// Failures come back in rule-registration order. `Err` means the
    /// subject itself was malformed, never that a rule failed.
    pub fn validate(&self, subject: &T) -> Result<ValidationResult, RuleError> {
        let mut result = ValidationResult::new();

        for (field, rule) in &self.rules {
            let accessor = &self.fields[*field];
            if let Some(failure) = rule.evaluate(accessor(subject)?) {
                result.push(failure);
            }
        }

        if !result.is_valid() {
            tracing::debug!(failures = result.errors().len(), "subject failed validation");
        }
        Ok(result)
    }
}

impl<T> Default for Validator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Validator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .field("rules", &self.rules.iter().map(|(_, r)| r).collect::<Vec<_>>())
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
