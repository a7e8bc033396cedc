use super::{at_most, Outcome};
use crate::book::AddressBook;
use crate::error::Result;
use crate::store::BookBackend;

/// `show all`: every contact, page by page.
pub fn run<B: BookBackend>(book: &AddressBook<B>, args: &[String]) -> Result<Outcome> {
    at_most(args, 0)?;
    if book.is_empty() {
        return Ok(Outcome::reply("Empty"));
    }
    Ok(Outcome::Reply(book.pages().collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{empty_book, sample_book};

    #[test]
    fn empty_book_says_so() {
        assert_eq!(run(&empty_book(), &[]).unwrap(), Outcome::reply("Empty"));
    }

    #[test]
    fn lists_every_page() {
        let book = sample_book().with_page_size(1);
        let Outcome::Reply(text) = run(&book, &[]).unwrap() else {
            panic!("expected a reply");
        };
        assert_eq!(
            text,
            "Page 0\n\
             User Bill - Numbers: +380671234567, +380931234567 - Birthday: 05 Jan 1990\n\
             Page 1\n\
             User Jill - Numbers: +380991112233 - Birthday: No date\n\
             Page 2\n"
        );
    }
}
