//! Patient record type.
//!
//! A record holds exactly what the operator typed at registration: a name, an age and a
//! phone number. Records have no identifier and are never modified after creation.

use std::fmt;
use vida_types::Age;

/// One patient's stored data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    name: String,
    age: Age,
    phone: String,
}

impl Patient {
    /// Creates a new patient record.
    ///
    /// Name and phone are stored verbatim; no trimming or content checks are applied.
    pub fn new(name: impl Into<String>, age: Age, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            phone: phone.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> Age {
        self.age
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Returns a formatter for the search echo:
    /// `{'Nome': 'Ana', 'Idade': 30, 'Telefone': '1111'}`.
    pub fn echo(&self) -> RecordEcho<'_> {
        RecordEcho(self)
    }
}

/// Formats the record as a listing line: `Nome: X, Idade: Y, Telefone: Z`.
impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Nome: {}, Idade: {}, Telefone: {}",
            self.name, self.age, self.phone
        )
    }
}

/// Dict-style rendering of a [`Patient`], with quoted and escaped text fields.
#[derive(Debug, Clone, Copy)]
pub struct RecordEcho<'a>(&'a Patient);

impl fmt::Display for RecordEcho<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let patient = self.0;
        f.write_str("{'Nome': ")?;
        write_quoted(f, &patient.name)?;
        write!(f, ", 'Idade': {}, 'Telefone': ", patient.age)?;
        write_quoted(f, &patient.phone)?;
        f.write_str("}")
    }
}

/// Single quotes unless the text holds a `'` and no `"`.
fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };

    write!(f, "{quote}")?;
    for c in text.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c == quote => write!(f, "\\{c}")?,
            c if c.is_ascii_control() => write!(f, "\\x{:02x}", c as u32)?,
            c => write!(f, "{c}")?,
        }
    }
    write!(f, "{quote}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_listing_line() {
        let patient = Patient::new("Ana Souza", Age::new(30), "11 99999-0000");
        assert_eq!(
            patient.to_string(),
            "Nome: Ana Souza, Idade: 30, Telefone: 11 99999-0000"
        );
    }

    #[test]
    fn test_fields_are_stored_verbatim() {
        let patient = Patient::new("  ana ", Age::new(0), "");
        assert_eq!(patient.name(), "  ana ");
        assert_eq!(patient.phone(), "");
        assert_eq!(patient.age().value(), 0);
    }

    #[test]
    fn test_echo_renders_dict_with_quoted_fields() {
        let patient = Patient::new("Bruno", Age::new(45), "555-1234");
        assert_eq!(
            patient.echo().to_string(),
            "{'Nome': 'Bruno', 'Idade': 45, 'Telefone': '555-1234'}"
        );
    }

    #[test]
    fn test_echo_switches_quotes_for_apostrophes() {
        let patient = Patient::new("D'Ávila", Age::new(8), "");
        assert_eq!(
            patient.echo().to_string(),
            r#"{'Nome': "D'Ávila", 'Idade': 8, 'Telefone': ''}"#
        );
    }

    #[test]
    fn test_echo_escapes_mixed_quotes_and_control_characters() {
        let patient = Patient::new(r#"O'Neil "Jr""#, Age::new(70), "a\\b\t\u{1b}");
        assert_eq!(
            patient.echo().to_string(),
            r#"{'Nome': 'O\'Neil "Jr"', 'Idade': 70, 'Telefone': 'a\\b\t\x1b'}"#
        );
    }
}
