use super::{at_most, required, Outcome};
use crate::book::AddressBook;
use crate::error::Result;
use crate::store::BookBackend;
use chrono::{Local, NaiveDate};

/// `days <name>`: days left until the contact's next birthday.
pub fn run<B: BookBackend>(book: &AddressBook<B>, args: &[String]) -> Result<Outcome> {
    run_on(book, args, Local::now().date_naive())
}

pub fn run_on<B: BookBackend>(
    book: &AddressBook<B>,
    args: &[String],
    today: NaiveDate,
) -> Result<Outcome> {
    let name = required(args, 0, "name")?;
    at_most(args, 1)?;

    let message = match book.find(name)?.days_until_birthday(today) {
        Some(days) => format!("{} until {}`s birthday", days, name),
        None => format!("{} has no birthday", name),
    };
    Ok(Outcome::Reply(message))
}
