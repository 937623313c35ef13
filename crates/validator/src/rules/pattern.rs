//! Regular-expression rule
//!
//! [`PatternRule`] checks one string property against a pattern. The whole
//! value must match: `S33` does not satisfy `^\w\d` followed by nothing else,
//! even though a prefix of it would. An absent value passes; an empty string
//! is checked like any other value.

use std::borrow::Cow;

use regex::{Regex, RegexBuilder};
use regex_automata::meta;
use regex_syntax::ParserBuilder;
use regex_syntax::hir::{Hir, Look};

use crate::error::RuleError;
use crate::foundation::{DEFAULT_ERROR_CODE, Severity, Validate, ValidationFailure};
use crate::message::{MessageArgs, MessageTemplate};

// ============================================================================
// OPTIONS
// ============================================================================

/// Flags applied when the pattern is compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PatternOptions {
    /// Match letters without regard to case (`i`).
    pub case_insensitive: bool,
    /// `^` and `$` match at line boundaries (`m`).
    pub multi_line: bool,
    /// Ignore whitespace and allow `#` comments in the pattern (`x`).
    pub ignore_whitespace: bool,
}

impl PatternOptions {
    fn builder(self, pattern: &str) -> RegexBuilder {
        let mut builder = RegexBuilder::new(pattern);
        builder
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .ignore_whitespace(self.ignore_whitespace);
        builder
    }

    /// Compiles `source` so a match must span the entire input.
    ///
    /// The parsed pattern is wrapped between `\A` and `\z` look-arounds, so
    /// inline flags and `#` comments in the source cannot reach the anchors.
    fn full_match(self, source: &str) -> Result<meta::Regex, RuleError> {
        let invalid =
            |message: String| RuleError::invalid_pattern(source, regex::Error::Syntax(message));

        let hir = ParserBuilder::new()
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .ignore_whitespace(self.ignore_whitespace)
            .build()
            .parse(source)
            .map_err(|err| invalid(err.to_string()))?;
        let anchored = Hir::concat(vec![Hir::look(Look::Start), hir, Hir::look(Look::End)]);

        meta::Builder::new()
            .build_from_hir(&anchored)
            .map_err(|err| invalid(err.to_string()))
    }
}

// ============================================================================
// PATTERN RULE
// ============================================================================

/// Validates that a string property matches a regular expression in full.
///
/// The rule is immutable once built and can be shared between threads.
///
/// # Examples
///
/// ```rust
/// use pattern_validator::rules::PatternRule;
///
/// let rule = PatternRule::new("Surname", r"^\w\d$").unwrap();
///
/// assert!(rule.evaluate(Some("S3")).is_none());
/// assert!(rule.evaluate(None).is_none());
///
/// let failure = rule.evaluate(Some("S33")).unwrap();
/// assert_eq!(failure.error_message, "'Surname' is not in the correct format.");
///
/// let rule = PatternRule::new("Forename", r"^\w\d$")
///     .unwrap()
///     .with_message("test {RegularExpression}");
/// assert_eq!(rule.evaluate(Some("")).unwrap().error_message, r"test ^\w\d$");
/// ```
#[derive(Debug, Clone)]
pub struct PatternRule {
    property_name: String,
    display_name: Option<String>,
    pattern: Regex,
    anchored: meta::Regex,
    options: PatternOptions,
    message: MessageTemplate,
    error_code: Cow<'static, str>,
    severity: Severity,
}

impl PatternRule {
    /// Compiles `pattern` for `property_name` with default options.
    pub fn new(property_name: impl Into<String>, pattern: &str) -> Result<Self, RuleError> {
        Self::with_options(property_name, pattern, PatternOptions::default())
    }

    /// Compiles `pattern` for `property_name` with explicit flags.
    pub fn with_options(
        property_name: impl Into<String>,
        pattern: &str,
        options: PatternOptions,
    ) -> Result<Self, RuleError> {
        let compiled = options
            .builder(pattern)
            .build()
            .map_err(|source| RuleError::invalid_pattern(pattern, source))?;
        Self::from_parts(property_name.into(), compiled, options)
    }

    /// Builds a rule from an already compiled regex.
    ///
    /// Flags given to a `RegexBuilder` are not recoverable from a `Regex`;
    /// use inline flags such as `(?i)` in the pattern text instead.
    pub fn from_regex(property_name: impl Into<String>, regex: Regex) -> Result<Self, RuleError> {
        Self::from_parts(property_name.into(), regex, PatternOptions::default())
    }

    fn from_parts(
        property_name: String,
        pattern: Regex,
        options: PatternOptions,
    ) -> Result<Self, RuleError> {
        let anchored = options.full_match(pattern.as_str())?;

        Ok(Self {
            property_name,
            display_name: None,
            pattern,
            anchored,
            options,
            message: MessageTemplate::default(),
            error_code: Cow::Borrowed(DEFAULT_ERROR_CODE),
            severity: Severity::Error,
        })
    }

    /// Replaces the error-message template.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, template: impl Into<MessageTemplate>) -> Self {
        self.message = template.into();
        self
    }

    /// Sets the name substituted for `{PropertyName}`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Replaces the error code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_error_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.error_code = code.into();
        self
    }

    /// Sets the severity reported on failures.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// The property this rule checks.
    pub fn property_name(&self) -> &str {
        &self.property_name
    }

    /// The name used in messages.
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.property_name)
    }

    /// The compiled pattern, as configured (not anchored).
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// The pattern source text.
    pub fn pattern_source(&self) -> &str {
        self.pattern.as_str()
    }

    /// The flags the pattern was compiled with.
    pub fn options(&self) -> PatternOptions {
        self.options
    }

    /// The error-message template.
    pub fn message_template(&self) -> &MessageTemplate {
        &self.message
    }

    /// The code reported on failures.
    pub fn error_code(&self) -> &str {
        &self.error_code
    }

    /// The severity reported on failures.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns true if the whole of `value` matches the pattern.
    pub fn is_match(&self, value: &str) -> bool {
        self.anchored.is_match(value)
    }

    /// Checks one property value.
    ///
    /// `None` passes. Any string, including `""`, must match in full.
    pub fn evaluate(&self, value: Option<&str>) -> Option<ValidationFailure> {
        self.validate_optional(value).err()
    }

    /// Renders the message for this rule.
    pub fn render_message(&self) -> String {
        self.message.format(&MessageArgs {
            property_name: self.display_name(),
            regular_expression: self.pattern_source(),
        })
    }

    fn failure(&self, value: &str) -> ValidationFailure {
        tracing::trace!(
            property = %self.property_name,
            pattern = %self.pattern_source(),
            "value does not match pattern"
        );

        ValidationFailure::new(self.property_name.clone(), self.render_message())
            .with_code(self.error_code.clone())
            .with_severity(self.severity)
            .with_attempted_value(value)
            .with_param("pattern", self.pattern_source().to_owned())
    }
}

impl Validate for PatternRule {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationFailure> {
        if self.is_match(input) {
            Ok(())
        } else {
            Err(self.failure(input))
        }
    }
}

/// Creates a [`PatternRule`] with default options.
pub fn matches(property_name: impl Into<String>, pattern: &str) -> Result<PatternRule, RuleError> {
    PatternRule::new(property_name, pattern)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn surname() -> PatternRule {
        PatternRule::new("Surname", r"^\w\d$").unwrap()
    }

    #[test]
    fn test_full_match_passes() {
        assert!(surname().evaluate(Some("S3")).is_none());
    }

    #[test]
    fn test_mismatch_fails() {
        let rule = surname();
        assert!(rule.evaluate(Some("S33")).is_some());
        assert!(rule.evaluate(Some(" 5")).is_some());
    }

    #[test]
    fn test_empty_string_fails() {
        assert!(surname().evaluate(Some("")).is_some());
    }

    #[test]
    fn test_none_passes() {
        assert!(surname().evaluate(None).is_none());
    }

    #[test]
    fn test_unanchored_pattern_must_still_span_the_value() {
        let rule = PatternRule::new("Code", r"\d+").unwrap();
        assert!(rule.is_match("123"));
        assert!(!rule.is_match("a123"));
        assert!(!rule.is_match("123a"));
    }

    #[test]
    fn test_alternation_prefers_full_match() {
        // Leftmost-first search would stop at "a"; the whole value must be tried.
        let rule = PatternRule::new("Code", "a|ab").unwrap();
        assert!(rule.is_match("ab"));
    }

    #[test]
    fn test_empty_string_passes_when_pattern_allows_it() {
        let rule = PatternRule::new("Notes", ".*").unwrap();
        assert!(rule.evaluate(Some("")).is_none());
    }

    #[test]
    fn test_invalid_pattern_fails_fast() {
        let err = PatternRule::new("Surname", "[unclosed").unwrap_err();
        assert!(matches!(err, RuleError::InvalidPattern { ref pattern, .. } if pattern == "[unclosed"));
    }

    #[test]
    fn test_pattern_that_only_compiles_when_wrapped_is_rejected() {
        assert!(PatternRule::new("Surname", "a)(b").is_err());
    }

    #[test]
    fn test_failure_details() {
        let failure = surname().evaluate(Some("S33")).unwrap();
        assert_eq!(failure.property_name, "Surname");
        assert_eq!(
            failure.error_message,
            "'Surname' is not in the correct format."
        );
        assert_eq!(failure.error_code, DEFAULT_ERROR_CODE);
        assert_eq!(failure.attempted_value.as_deref(), Some("S33"));
        assert_eq!(failure.param("pattern"), Some(r"^\w\d$"));
        assert_eq!(failure.severity, Severity::Error);
    }

    #[test]
    fn test_custom_message_with_expression() {
        let rule = PatternRule::new("Forename", r"^\w\d$")
            .unwrap()
            .with_message("test {RegularExpression}");
        let failure = rule.evaluate(Some("")).unwrap();
        assert_eq!(failure.error_message, r"test ^\w\d$");
    }

    #[test]
    fn test_display_name_only_changes_message() {
        let rule = surname().with_display_name("Last name");
        let failure = rule.evaluate(Some("S33")).unwrap();
        assert_eq!(failure.property_name, "Surname");
        assert_eq!(
            failure.error_message,
            "'Last name' is not in the correct format."
        );
    }

    #[test]
    fn test_code_and_severity() {
        let rule = surname()
            .with_error_code("surname_format")
            .with_severity(Severity::Warning);
        let failure = rule.evaluate(Some("??")).unwrap();
        assert_eq!(failure.error_code, "surname_format");
        assert_eq!(failure.severity, Severity::Warning);
    }

    #[test]
    fn test_case_insensitive_option() {
        let options = PatternOptions {
            case_insensitive: true,
            ..PatternOptions::default()
        };
        let rule = PatternRule::with_options("Code", "^[a-z]{2}$", options).unwrap();
        assert!(rule.is_match("AB"));
        assert_eq!(rule.options(), options);
    }

    #[test]
    fn test_ignore_whitespace_with_trailing_comment() {
        let options = PatternOptions {
            ignore_whitespace: true,
            ..PatternOptions::default()
        };
        let rule = PatternRule::with_options("Code", r"\d{3} # three digits", options).unwrap();
        assert!(rule.is_match("123"));
        assert!(!rule.is_match("1234"));
    }

    #[test]
    fn test_inline_ignore_whitespace_with_trailing_comment() {
        let rule = PatternRule::new("Code", r"(?x)\d{3} # three digits").unwrap();
        assert!(rule.is_match("123"));
        assert!(!rule.is_match("1234"));
    }

    #[test]
    fn test_ignore_whitespace_turned_off_inline() {
        let options = PatternOptions {
            ignore_whitespace: true,
            ..PatternOptions::default()
        };
        let rule = PatternRule::with_options("Code", "a(?-x)", options).unwrap();
        assert!(rule.is_match("a"));
        assert!(!rule.is_match("a\n"));
    }

    #[test]
    fn test_multi_line_still_spans_the_whole_value() {
        let options = PatternOptions {
            multi_line: true,
            ..PatternOptions::default()
        };
        let rule = PatternRule::with_options("Surname", r"^\w\d$", options).unwrap();
        assert!(rule.is_match("S3"));
        assert!(!rule.is_match("S3\nS4"));
        assert!(rule.options().multi_line);
    }

    #[test]
    fn test_multi_line_anchors_match_at_line_boundaries() {
        let lines = r"^\w\d$\n^\w\d$";
        let options = PatternOptions {
            multi_line: true,
            ..PatternOptions::default()
        };
        assert!(PatternRule::with_options("Codes", lines, options).unwrap().is_match("S3\nS4"));
        assert!(!PatternRule::new("Codes", lines).unwrap().is_match("S3\nS4"));
    }

    #[test]
    fn test_from_regex_keeps_source() {
        let rule = PatternRule::from_regex("Code", Regex::new(r"(?i)^x\d$").unwrap()).unwrap();
        assert_eq!(rule.pattern_source(), r"(?i)^x\d$");
        assert!(rule.is_match("X1"));
    }

    #[test]
    fn test_factory() {
        let rule = matches("Surname", r"^\w\d$").unwrap();
        assert_eq!(rule.property_name(), "Surname");
        assert!(rule.message_template().is_default());
    }

    #[test]
    fn test_rule_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PatternRule>();
    }
}
