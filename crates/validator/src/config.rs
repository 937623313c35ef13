//! Declarative rule configuration
//!
//! Rules can be described as data and loaded with serde:
//!
//! ```json
//! {
//!   "rules": [
//!     { "property": "Surname", "pattern": "^\\w\\d$" },
//!     { "property": "Forename", "pattern": "^\\w\\d$", "message": "test {RegularExpression}" }
//!   ]
//! }
//! ```
//!
//! Every pattern is compiled while the validator is built, so a bad
//! configuration is reported before any subject is checked.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RuleError;
use crate::foundation::Severity;
use crate::rules::{PatternOptions, PatternRule};
use crate::validator::Validator;

/// One pattern rule, as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleDescriptor {
    pub property: String,
    pub pattern: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(default)]
    pub case_insensitive: bool,
    #[serde(default)]
    pub multi_line: bool,
    #[serde(default)]
    pub ignore_whitespace: bool,
}

impl RuleDescriptor {
    /// Describes a rule with default message, code, severity and options.
    pub fn new(property: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            pattern: pattern.into(),
            message: None,
            display_name: None,
            error_code: None,
            severity: None,
            case_insensitive: false,
            multi_line: false,
            ignore_whitespace: false,
        }
    }

    /// The compile flags this descriptor asks for.
    pub fn options(&self) -> PatternOptions {
        PatternOptions {
            case_insensitive: self.case_insensitive,
            multi_line: self.multi_line,
            ignore_whitespace: self.ignore_whitespace,
        }
    }

    /// Compiles the described rule.
    pub fn build(&self) -> Result<PatternRule, RuleError> {
        let mut rule = PatternRule::with_options(&*self.property, &self.pattern, self.options())?;
        if let Some(message) = &self.message {
            rule = rule.with_message(message.clone());
        }
        if let Some(name) = &self.display_name {
            rule = rule.with_display_name(name.clone());
        }
        if let Some(code) = &self.error_code {
            rule = rule.with_error_code(code.clone());
        }
        if let Some(severity) = self.severity {
            rule = rule.with_severity(severity);
        }
        Ok(rule)
    }
}

/// An ordered list of rule descriptors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidatorConfig {
    #[serde(default)]
    pub rules: Vec<RuleDescriptor>,
}

impl ValidatorConfig {
    /// Parses a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self, RuleError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds a validator for JSON object subjects.
    ///
    /// Each distinct property becomes a field keyed by the same name; rules
    /// keep the order they appear in the document.
    pub fn build_json_validator(&self) -> Result<Validator<Value>, RuleError> {
        let mut validator = Validator::<Value>::new();
        for descriptor in &self.rules {
            if !validator.field_names().any(|name| name == descriptor.property) {
                validator = validator.json_field(descriptor.property.clone());
            }
            validator.add_rule(descriptor.build()?)?;
        }

        tracing::debug!(
            rules = self.rules.len(),
            fields = validator.field_names().count(),
            "built validator from configuration"
        );
        Ok(validator)
    }
}
