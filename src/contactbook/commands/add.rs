use super::{at_most, required, Outcome};
use crate::book::AddressBook;
use crate::error::Result;
use crate::fields::{Birthday, Name, Phone};
use crate::record::Record;
use crate::store::BookBackend;

/// `add <name> <phone> [birthday]`
///
/// Adds the phone to an existing contact, or creates the contact. The
/// birthday is only read when the contact is new.
pub fn run<B: BookBackend>(book: &mut AddressBook<B>, args: &[String]) -> Result<Outcome> {
    let name = Name::new(required(args, 0, "name")?)?;
    let phone = Phone::new(required(args, 1, "phone")?)?;
    at_most(args, 3)?;

    if let Some(record) = book.get_mut(name.as_str()) {
        record.add_phone(phone.clone())?;
        return Ok(Outcome::Reply(format!(
            "Add phone {} to user {}",
            phone, name
        )));
    }

    let birthday = Birthday::new(args.get(2).map(String::as_str))?;
    let message = format!("Add user {} with phone number {}", name, phone);
    book.add_record(Record::new(name, birthday).with_phone(phone));
    Ok(Outcome::Reply(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BookError;
    use crate::store::memory::fixtures::{empty_book, sample_book};

    fn args(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn creates_new_contact() {
        let mut book = empty_book();
        let outcome = run(&mut book, &args(&["Ann", "0671234567", "1990-01-05"])).unwrap();
        assert_eq!(
            outcome,
            Outcome::reply("Add user Ann with phone number +380671234567")
        );
        let record = book.find("Ann").unwrap();
        assert_eq!(record.phones().len(), 1);
        assert_eq!(record.birthday().to_string(), "05 Jan 1990");
    }

    #[test]
    fn creates_contact_without_birthday() {
        let mut book = empty_book();
        run(&mut book, &args(&["Ann", "380991234567"])).unwrap();
        assert!(!book.find("Ann").unwrap().birthday().is_known());
    }

    #[test]
    fn adds_phone_to_existing_contact() {
        let mut book = sample_book();
        let outcome = run(&mut book, &args(&["Jill", "0681234567"])).unwrap();
        assert_eq!(
            outcome,
            Outcome::reply("Add phone +380681234567 to user Jill")
        );
        assert_eq!(book.find("Jill").unwrap().phones().len(), 2);
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn rejects_duplicate_phone() {
        let mut book = sample_book();
        let err = run(&mut book, &args(&["Jill", "+380991112233"])).unwrap_err();
        assert!(matches!(err, BookError::DuplicatePhone { .. }));
        assert_eq!(book.find("Jill").unwrap().phones().len(), 1);
    }

    #[test]
    fn bad_input_creates_nothing() {
        let mut book = empty_book();
        assert!(matches!(
            run(&mut book, &args(&["Ann"])),
            Err(BookError::MissingArgument(_))
        ));
        assert!(matches!(
            run(&mut book, &args(&["Ann", "12345"])),
            Err(BookError::Validation(_))
        ));
        assert!(matches!(
            run(&mut book, &args(&["Ann", "0671234567", "yesterday"])),
            Err(BookError::DateFormat(_))
        ));
        assert!(matches!(
            run(&mut book, &args(&["Ann", "0671234567", "1990-01-05", "x"])),
            Err(BookError::UnexpectedArgument(_))
        ));
        assert!(book.is_empty());
    }
}
