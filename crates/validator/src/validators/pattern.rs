//! Regular-expression rules

use crate::foundation::{Validate, ValidationError};
use regex::Regex;

/// Raised when a rule is declared with an invalid pattern.
#[derive(Debug, thiserror::Error)]
#[error("invalid pattern `{pattern}`: {source}")]
pub struct PatternError {
    pattern: String,
    #[source]
    source: regex::Error,
}

/// The string must match a regular expression.
///
/// ```
/// use tessera_validator::prelude::*;
///
/// let email = matches(r"^[^@\s]+@[^@\s]+$").unwrap();
/// assert!(email.validate("joe@example.com").is_ok());
/// assert_eq!(email.validate("joe").unwrap_err().code, "invalid_format");
/// ```
#[derive(Debug, Clone)]
pub struct Matches {
    regex: Regex,
}

impl Matches {
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(pattern).map_err(|source| PatternError {
            pattern: pattern.to_owned(),
            source,
        })?;
        Ok(Self { regex })
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

impl Validate for Matches {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if self.regex.is_match(input) {
            Ok(())
        } else {
            Err(ValidationError::invalid_format(self.regex.as_str().to_owned()))
        }
    }
}

/// Creates a [`Matches`] rule.
pub fn matches(pattern: &str) -> Result<Matches, PatternError> {
    Matches::new(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_reports_pattern() {
        let rule = matches(r"^\d+$").unwrap();
        assert!(rule.validate("123").is_ok());
        let error = rule.validate("12a").unwrap_err();
        assert_eq!(error.param("expected"), Some(r"^\d+$"));
    }

    #[test]
    fn test_invalid_pattern() {
        let error = matches("(").unwrap_err();
        assert!(error.to_string().starts_with("invalid pattern `(`"));
    }
}
