use super::{at_most, required, Outcome};
use crate::book::AddressBook;
use crate::error::Result;
use crate::fields::Phone;
use crate::store::BookBackend;

/// `delete <name> <phone>`: removes one phone from a contact.
pub fn run<B: BookBackend>(book: &mut AddressBook<B>, args: &[String]) -> Result<Outcome> {
    let name = required(args, 0, "name")?;
    let typed = required(args, 1, "phone")?;
    let phone = Phone::new(typed)?;
    at_most(args, 2)?;

    book.find_mut(name)?.remove_phone(&phone)?;
    Ok(Outcome::Reply(format!(
        "{}`s phone {} was deleted",
        name, typed
    )))
}
