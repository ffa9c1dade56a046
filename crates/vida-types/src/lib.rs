//! Validated value types shared across the Vida+ crates.

use std::str::FromStr;

/// Rejection reasons for [`NonEmptyText`].
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    #[error("text cannot be empty")]
    Empty,
}

/// Trimmed text with at least one visible character.
///
/// Used for configured display values such as the clinic name in the menu banner, where a
/// blank value would leave the banner reading `=== SISTEMA  ===`. Patient names and phones
/// are never wrapped in this type; they are stored exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Trims `input` and wraps it.
    ///
    /// # Arguments
    ///
    /// * `input` - Raw text, e.g. a `--clinic-name` flag or `VIDA_CLINIC_NAME` value
    ///
    /// # Returns
    ///
    /// `Ok(NonEmptyText)` holding the trimmed text, or `Err(TextError::Empty)` when
    /// nothing but whitespace was given.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Errors produced when parsing an [`Age`] from operator input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AgeError {
    /// Nothing was typed.
    #[error("age cannot be empty")]
    Empty,
    /// A negative whole number was typed.
    #[error("age cannot be negative: {0:?}")]
    Negative(String),
    /// The input is not a whole number that fits the age range.
    #[error("age must be a whole number: {0:?}")]
    NotANumber(String),
}

/// A patient's age in whole years.
///
/// Ages are non-negative by construction. Parsing from text mirrors the leniency an
/// operator expects at a prompt: surrounding whitespace and a leading `+` are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Age(u32);

impl Age {
    pub fn new(years: u32) -> Self {
        Self(years)
    }

    /// Returns the age in years.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl FromStr for Age {
    type Err = AgeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(AgeError::Empty);
        }

        let (negative, digits) = match trimmed.as_bytes()[0] {
            b'-' => (true, &trimmed[1..]),
            b'+' => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AgeError::NotANumber(input.to_owned()));
        }

        let years: u32 = digits
            .parse()
            .map_err(|_| AgeError::NotANumber(input.to_owned()))?;

        // "-0" is still zero
        if negative && years != 0 {
            return Err(AgeError::Negative(input.to_owned()));
        }

        Ok(Self(years))
    }
}

impl std::fmt::Display for Age {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_text_trims_input() {
        let text = NonEmptyText::new("  Clínica Vida+ ").expect("should accept text");
        assert_eq!(text.as_str(), "Clínica Vida+");
    }

    #[test]
    fn non_empty_text_rejects_whitespace_only() {
        let err = NonEmptyText::new("   ").expect_err("should reject whitespace");
        assert!(matches!(err, TextError::Empty));
    }

    #[test]
    fn age_parses_plain_and_padded_numbers() {
        assert_eq!("30".parse::<Age>().unwrap(), Age::new(30));
        assert_eq!("  45\t".parse::<Age>().unwrap(), Age::new(45));
        assert_eq!("+7".parse::<Age>().unwrap(), Age::new(7));
        assert_eq!("0".parse::<Age>().unwrap(), Age::new(0));
        assert_eq!("-0".parse::<Age>().unwrap(), Age::new(0));
    }

    #[test]
    fn age_rejects_empty_input() {
        let err = "  ".parse::<Age>().expect_err("should reject empty");
        assert_eq!(err, AgeError::Empty);
    }

    #[test]
    fn age_rejects_non_numeric_input() {
        for input in ["abc", "12a", "3.5", "+", "++5", "1 2", "99999999999"] {
            let err = input.parse::<Age>().expect_err("should reject non-numeric");
            assert!(
                matches!(&err, AgeError::NotANumber(raw) if raw == input),
                "unexpected error for {input:?}: {err:?}"
            );
        }
    }

    #[test]
    fn age_rejects_negative_numbers() {
        let err = "-3".parse::<Age>().expect_err("should reject negative");
        assert_eq!(err, AgeError::Negative("-3".into()));
    }
}
