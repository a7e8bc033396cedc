use super::{at_most, required, Outcome};
use crate::book::AddressBook;
use crate::error::Result;
use crate::fields::Birthday;
use crate::store::BookBackend;

/// `birthday <name> <date>`: sets or replaces a contact's birthday.
pub fn run<B: BookBackend>(book: &mut AddressBook<B>, args: &[String]) -> Result<Outcome> {
    let name = required(args, 0, "name")?;
    let raw = required(args, 1, "birthday")?;
    at_most(args, 2)?;

    let record = book.find_mut(name)?;
    let birthday = Birthday::new(Some(raw))?;
    record.set_birthday(birthday);
    Ok(Outcome::Reply(format!(
        "Birthday date {} of {} was added or changed",
        birthday, name
    )))
}
