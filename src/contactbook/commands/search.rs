use super::{at_most, required, Outcome};
use crate::book::AddressBook;
use crate::error::Result;
use crate::store::BookBackend;

/// `search <term>`: pages of contacts whose name, phone or birthday contains
/// the term.
pub fn run<B: BookBackend>(book: &AddressBook<B>, args: &[String]) -> Result<Outcome> {
    let term = required(args, 0, "search term")?;
    at_most(args, 1)?;

    let mut out = format!("List of users with '{}' in data:\n", term.to_lowercase());
    out.extend(book.search(term));
    Ok(Outcome::Reply(out))
}
