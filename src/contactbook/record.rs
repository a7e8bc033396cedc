use crate::error::{BookError, Result};
use crate::fields::{Birthday, Name, Phone};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One contact: a name, its phone numbers and an optional birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Birthday,
}

impl Record {
    pub fn new(name: Name, birthday: Birthday) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday,
        }
    }

    /// Builder form of [`add_phone`](Self::add_phone); a number already
    /// present is skipped.
    pub(crate) fn with_phone(mut self, phone: Phone) -> Self {
        if !self.has_phone(&phone) {
            self.phones.push(phone);
        }
        self
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> &Birthday {
        &self.birthday
    }

    pub fn has_phone(&self, phone: &Phone) -> bool {
        self.phones.contains(phone)
    }

    /// Appends a phone. A number the record already holds is rejected.
    pub fn add_phone(&mut self, phone: Phone) -> Result<()> {
        if self.has_phone(&phone) {
            return Err(self.duplicate(&phone));
        }
        self.phones.push(phone);
        Ok(())
    }

    pub fn remove_phone(&mut self, phone: &Phone) -> Result<()> {
        let pos = self.position(phone)?;
        self.phones.remove(pos);
        Ok(())
    }

    /// Swaps `old` for `new`, with `new` moving to the end of the list.
    ///
    /// Either both steps happen or neither does.
    pub fn replace_phone(&mut self, old: &Phone, new: Phone) -> Result<()> {
        let pos = self.position(old)?;
        if &new != old && self.has_phone(&new) {
            return Err(self.duplicate(&new));
        }
        self.phones.remove(pos);
        self.phones.push(new);
        Ok(())
    }

    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = birthday;
    }

    /// Days from `today` to the next birthday, `0` when it is today.
    ///
    /// A Feb 29 birthday falls on Mar 1 in common years. Returns `None`
    /// when the birthday is unknown.
    pub fn days_until_birthday(&self, today: NaiveDate) -> Option<i64> {
        let born = self.birthday.date()?;
        let mut next = anniversary(born, today.year())?;
        if next < today {
            next = anniversary(born, today.year() + 1)?;
        }
        Some((next - today).num_days())
    }

    pub fn days_until_birthday_now(&self) -> Option<i64> {
        self.days_until_birthday(Local::now().date_naive())
    }

    /// Search match: name (case-insensitive), any phone, or the birthday
    /// as `DD.MM.YYYY`.
    pub fn matches(&self, term: &str) -> bool {
        if self
            .name
            .as_str()
            .to_lowercase()
            .contains(&term.to_lowercase())
        {
            return true;
        }
        if self.phones.iter().any(|p| p.as_str().contains(term)) {
            return true;
        }
        self.birthday
            .search_key()
            .is_some_and(|key| key.contains(term))
    }

    fn position(&self, phone: &Phone) -> Result<usize> {
        self.phones
            .iter()
            .position(|p| p == phone)
            .ok_or_else(|| BookError::PhoneNotFound {
                name: self.name.to_string(),
                phone: phone.to_string(),
            })
    }

    fn duplicate(&self, phone: &Phone) -> BookError {
        BookError::DuplicatePhone {
            name: self.name.to_string(),
            phone: phone.to_string(),
        }
    }
}

fn anniversary(born: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, born.month(), born.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numbers: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(
            f,
            "User {} - Numbers: {} - Birthday: {}",
            self.name,
            numbers.join(", "),
            self.birthday
        )
    }
}
