use super::Outcome;
use crate::book::AddressBook;
use crate::error::Result;
use crate::store::BookBackend;

/// `exit` / `close` / `good bye`: saves the book and ends the session.
///
/// Trailing words are ignored so that a stray argument never blocks saving.
pub fn run<B: BookBackend>(book: &mut AddressBook<B>, _args: &[String]) -> Result<Outcome> {
    book.save()?;
    Ok(Outcome::Exit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::sample_book;

    #[test]
    fn saves_and_exits() {
        let mut book = sample_book();
        assert_eq!(run(&mut book, &[]).unwrap(), Outcome::Exit);
        assert_eq!(book.backend().save_count(), 1);
        assert_eq!(book.backend().saved().unwrap().len(), 2);
    }
}
