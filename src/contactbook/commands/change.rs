use super::{at_most, required, Outcome};
use crate::book::AddressBook;
use crate::error::Result;
use crate::fields::Phone;
use crate::store::BookBackend;

/// `change <name> <old phone> <new phone>`
pub fn run<B: BookBackend>(book: &mut AddressBook<B>, args: &[String]) -> Result<Outcome> {
    let name = required(args, 0, "name")?;
    let old = Phone::new(required(args, 1, "old phone")?)?;
    let typed = required(args, 2, "new phone")?;
    let new = Phone::new(typed)?;
    at_most(args, 3)?;

    // the new number is echoed as typed
    let message = format!("{}`s number changed from {} to {}", name, old, typed);
    book.find_mut(name)?.replace_phone(&old, new)?;
    Ok(Outcome::Reply(message))
}
