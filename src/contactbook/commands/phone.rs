use super::{at_most, required, Outcome};
use crate::book::AddressBook;
use crate::error::Result;
use crate::store::BookBackend;

/// `phone <name>`: shows the contact's full record.
pub fn run<B: BookBackend>(book: &AddressBook<B>, args: &[String]) -> Result<Outcome> {
    let name = required(args, 0, "name")?;
    at_most(args, 1)?;
    Ok(Outcome::Reply(book.find(name)?.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BookError;
    use crate::store::memory::fixtures::sample_book;

    #[test]
    fn shows_record() {
        let book = sample_book();
        let outcome = run(&book, &["Jill".to_string()]).unwrap();
        assert_eq!(
            outcome,
            Outcome::reply("User Jill - Numbers: +380991112233 - Birthday: No date")
        );
    }

    #[test]
    fn needs_a_name() {
        let book = sample_book();
        assert!(matches!(run(&book, &[]), Err(BookError::MissingArgument(_))));
        assert!(matches!(
            run(&book, &["jill".to_string()]),
            Err(BookError::NotFound(_))
        ));
    }
}
