//! String length rules
//!
//! Length is measured in chars unless a rule is built with `.bytes(..)`.

use crate::foundation::ValidationError;

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Count bytes.
    Bytes,
    /// Count Unicode scalar values.
    #[default]
    Chars,
}

impl LengthMode {
    #[inline]
    fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

crate::validator! {
    /// The string must not be empty.
    pub NotEmpty for str;
    rule(input) { !input.is_empty() }
    error(input) { ValidationError::new("not_empty", "must not be empty") }
    fn not_empty();
}

crate::validator! {
    /// The string must have at least `min` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize, mode: LengthMode } for str;
    rule(self, input) { self.mode.measure(input) >= self.min }
    error(self, input) { ValidationError::min_length(self.min, self.mode.measure(input)) }
    new(min: usize) { Self { min, mode: LengthMode::Chars } }
    fn min_length(min: usize);
}

impl MinLength {
    /// Counts bytes instead of chars.
    #[must_use]
    pub fn bytes(min: usize) -> Self {
        Self {
            min,
            mode: LengthMode::Bytes,
        }
    }
}

crate::validator! {
    /// The string must have at most `max` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize, mode: LengthMode } for str;
    rule(self, input) { self.mode.measure(input) <= self.max }
    error(self, input) { ValidationError::max_length(self.max, self.mode.measure(input)) }
    new(max: usize) { Self { max, mode: LengthMode::Chars } }
    fn max_length(max: usize);
}

impl MaxLength {
    /// Counts bytes instead of chars.
    #[must_use]
    pub fn bytes(max: usize) -> Self {
        Self {
            max,
            mode: LengthMode::Bytes,
        }
    }
}

crate::validator! {
    /// The string must have exactly `length` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub ExactLength { length: usize } for str;
    rule(self, input) { input.chars().count() == self.length }
    error(self, input) {
        ValidationError::new(
            "exact_length",
            format!("is the wrong length (should be {} characters)", self.length),
        )
        .with_param("expected", self.length.to_string())
        .with_param("actual", input.chars().count().to_string())
    }
    new(length: usize) { Self { length } }
    fn exact_length(length: usize);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;

    #[rstest]
    #[case("", false)]
    #[case(" ", true)]
    #[case("x", true)]
    fn test_not_empty(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(not_empty().validate(input).is_ok(), ok);
    }

    #[rstest]
    #[case("ab", false)]
    #[case("abc", true)]
    #[case("日本語", true)]
    fn test_min_length_counts_chars(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(min_length(3).validate(input).is_ok(), ok);
    }

    #[test]
    fn test_min_length_bytes() {
        assert!(MinLength::bytes(4).validate("日本").is_ok());
        assert!(MinLength::bytes(4).validate("abc").is_err());
    }

    #[test]
    fn test_max_length_error_params() {
        let error = max_length(2).validate("abcd").unwrap_err();
        assert_eq!(error.param("max"), Some("2"));
        assert_eq!(error.param("actual"), Some("4"));
        assert!(MaxLength::bytes(3).validate("日").is_ok());
    }

    #[test]
    fn test_exact_length() {
        assert!(exact_length(3).validate("abc").is_ok());
        let error = exact_length(3).validate("ab").unwrap_err();
        assert_eq!(error.code, "exact_length");
        assert_eq!(error.param("actual"), Some("2"));
    }
}
