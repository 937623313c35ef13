//! JSON subjects
//!
//! Lets a [`Validator`] check `serde_json::Value` objects by key. A missing
//! key and an explicit `null` are both treated as an absent value. Any
//! non-string value is a contract violation and surfaces as
//! [`RuleError::TypeMismatch`], separate from validation failures; a subject
//! that is not an object at all is [`RuleError::InvalidSubject`].
//!
//! # Examples
//!
//! ```
//! use pattern_validator::prelude::*;
//! use serde_json::json;
//!
//! let mut validator = Validator::<serde_json::Value>::new().json_field("Surname");
//! validator.register_rule("Surname", r"^\w\d$", None).unwrap();
//!
//! assert!(validator.validate(&json!({ "Surname": "S3" })).unwrap().is_valid());
//! assert!(validator.validate(&json!({ "Surname": null })).unwrap().is_valid());
//! assert!(!validator.validate(&json!({ "Surname": "S33" })).unwrap().is_valid());
//! assert!(validator.validate(&json!({ "Surname": 33 })).is_err());
//! ```

use serde_json::Value;

use crate::error::RuleError;
use crate::validator::Validator;

const EXPECTED: &str = "a string";

/// Describes a JSON value's type for error messages.
fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Reads a string property from a JSON object.
pub fn json_property<'a>(subject: &'a Value, name: &str) -> Result<Option<&'a str>, RuleError> {
    let Value::Object(map) = subject else {
        return Err(RuleError::InvalidSubject {
            expected: "an object",
            actual: kind(subject),
        });
    };

    match map.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(RuleError::TypeMismatch {
            property: name.to_owned(),
            expected: EXPECTED,
            actual: kind(other),
        }),
    }
}

impl Validator<Value> {
    /// Declares a field read from the JSON object key `name`.
    #[must_use = "builder methods must be chained or built"]
    pub fn json_field(self, name: impl Into<String>) -> Self {
        let name = name.into();
        let key = name.clone();
        self.field_fallible(name, move |subject: &Value| json_property(subject, &key))
    }
}
