//! Validated field values: [`Name`], [`Phone`] and [`Birthday`].
//!
//! Every field is built through a fallible constructor, so an instance that
//! exists is always valid. There are no setters; changing a field means
//! building a new value and swapping it in.

use crate::error::{BookError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operator prefixes accepted in the national form (`0` + first operator digit).
const OPERATOR_PREFIXES: [&str; 2] = ["06", "09"];
const NATIONAL_LEN: usize = 10;
const INTERNATIONAL_LEN: usize = 12;
const COUNTRY_CODE: &str = "380";

const ISO_FORMAT: &str = "%Y-%m-%d";
const DOTTED_FORMAT: &str = "%d.%m.%Y";
const DISPLAY_FORMAT: &str = "%d %b %Y";

/// A contact's display name. Also the key of the contact in the book.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let value = raw.into();
        if value.trim().is_empty() {
            return Err(BookError::Validation("name cannot be empty".to_string()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Name {
    type Error = BookError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

/// A mobile phone number in canonical `+380XXXXXXXXX` form.
///
/// Accepted inputs:
/// - national: `0XXXXXXXXX` (10 digits)
/// - international: `380XXXXXXXXX` or `+380XXXXXXXXX` (12 digits)
///
/// In both shapes the national part must start with `06` or `09`.
///
/// ```
/// use contactbook::fields::Phone;
///
/// assert_eq!(Phone::new("0671234567").unwrap().as_str(), "+380671234567");
/// assert_eq!(Phone::new("+380931234567").unwrap().as_str(), "+380931234567");
/// assert!(Phone::new("0501234567").is_err());
/// assert!(Phone::new("067-123-45-67").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(raw: &str) -> Result<Self> {
        let digits = raw.strip_prefix('+').unwrap_or(raw);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid_phone(raw));
        }

        let national = match digits.len() {
            NATIONAL_LEN if digits.starts_with('0') => digits,
            INTERNATIONAL_LEN if digits.starts_with(COUNTRY_CODE) => &digits[2..],
            _ => return Err(invalid_phone(raw)),
        };

        if !OPERATOR_PREFIXES.iter().any(|p| national.starts_with(p)) {
            return Err(invalid_phone(raw));
        }

        Ok(Self(format!("+38{}", national)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn invalid_phone(raw: &str) -> BookError {
    BookError::Validation(format!("wrong phone number '{}'", raw))
}

impl FromStr for Phone {
    type Err = BookError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Phone {
    type Error = BookError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

/// A birthday that may be unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Birthday(Option<NaiveDate>);

impl Birthday {
    /// Parses `YYYY-MM-DD` or `DD.MM.YYYY`. `None` yields an unknown birthday.
    pub fn new(raw: Option<&str>) -> Result<Self> {
        let Some(raw) = raw else {
            return Ok(Self::unknown());
        };

        NaiveDate::parse_from_str(raw, ISO_FORMAT)
            .or_else(|_| NaiveDate::parse_from_str(raw, DOTTED_FORMAT))
            .map(|date| Self(Some(date)))
            .map_err(|_| BookError::DateFormat(raw.to_string()))
    }

    pub fn unknown() -> Self {
        Self(None)
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(Some(date))
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.0
    }

    pub fn is_known(&self) -> bool {
        self.0.is_some()
    }

    /// The date as `DD.MM.YYYY`, the form searches match against.
    pub fn search_key(&self) -> Option<String> {
        self.0.map(|date| date.format(DOTTED_FORMAT).to_string())
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(date) => write!(f, "{}", date.format(DISPLAY_FORMAT)),
            None => f.write_str("No date"),
        }
    }
}
