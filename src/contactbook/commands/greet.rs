use super::Outcome;
use crate::error::Result;

/// `hello`: trailing words are ignored.
pub fn run(_args: &[String]) -> Result<Outcome> {
    Ok(Outcome::reply("How can I help you?"))
}
