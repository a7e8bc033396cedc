//! # API Facade
//!
//! [`ContactApi`] is the single entry point a UI drives. It takes a raw input
//! line, finds the command in the static command table, runs it against the
//! book and turns input errors into the messages shown to the user.
//!
//! Storage failures (`Io`, `Serialization`, `Store`) are not turned into
//! messages; they are returned as errors so the UI can stop.

use crate::book::AddressBook;
use crate::commands::{self, Command, Outcome};
use crate::error::{BookError, Result};
use crate::store::BookBackend;

pub const UNKNOWN_COMMAND: &str = "Unknown command! Enter again!";

/// A dispatched line: what ran and what came out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub command: Option<Command>,
    pub outcome: Outcome,
    /// Set when the command failed on bad input.
    pub failed: bool,
}

impl Response {
    fn ok(command: Command, outcome: Outcome) -> Self {
        Self {
            command: Some(command),
            outcome,
            failed: false,
        }
    }

    fn rejected(command: Option<Command>, message: String) -> Self {
        Self {
            command,
            outcome: Outcome::Reply(message),
            failed: true,
        }
    }

    pub fn is_exit(&self) -> bool {
        self.outcome == Outcome::Exit
    }
}

pub struct ContactApi<B: BookBackend> {
    book: AddressBook<B>,
}

impl<B: BookBackend> ContactApi<B> {
    pub fn new(book: AddressBook<B>) -> Self {
        Self { book }
    }

    /// Opens the book stored in `backend`.
    pub fn open(backend: B) -> Result<Self> {
        Ok(Self::new(AddressBook::open(backend)?))
    }

    /// Runs one input line.
    pub fn execute(&mut self, line: &str) -> Result<Response> {
        let Some((command, args)) = commands::parse_line(line) else {
            return Ok(Response::rejected(None, UNKNOWN_COMMAND.to_string()));
        };
        self.run(command, &args)
    }

    pub fn run(&mut self, command: Command, args: &[String]) -> Result<Response> {
        match command.run(&mut self.book, args) {
            Ok(outcome) => Ok(Response::ok(command, outcome)),
            Err(err) if err.is_input_error() => {
                Ok(Response::rejected(Some(command), user_message(&err)))
            }
            Err(err) => Err(err),
        }
    }

    pub fn save(&mut self) -> Result<()> {
        self.book.save()
    }

    pub fn book(&self) -> &AddressBook<B> {
        &self.book
    }
}

/// The message shown for an error caused by user input.
pub fn user_message(err: &BookError) -> String {
    match err {
        BookError::MissingArgument(_) => "Enter a name and phone!".to_string(),
        BookError::UnexpectedArgument(arg) => format!("Too many arguments, unexpected '{}'!", arg),
        BookError::NotFound(_) => "Can`t find this user in list!".to_string(),
        BookError::PhoneNotFound { name, phone } => {
            format!("{}`s contact has no number {}", name, phone)
        }
        BookError::Validation(_) => "Phone number or birthday date is incorrect!".to_string(),
        BookError::DateFormat(_) => "Wrong date type!".to_string(),
        BookError::DuplicatePhone { name, .. } => {
            format!("{}`s contact has already had this number", name)
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemBackend;

    fn api() -> ContactApi<MemBackend> {
        ContactApi::open(MemBackend::new()).unwrap()
    }

    fn reply(response: Response) -> String {
        match response.outcome {
            Outcome::Reply(text) => text,
            Outcome::Exit => panic!("unexpected exit"),
        }
    }

    #[test]
    fn test_dispatches_known_commands() {
        let mut api = api();
        let response = api.execute("add Bill 0671234567").unwrap();
        assert_eq!(response.command, Some(Command::Add));
        assert!(!response.failed);
        assert_eq!(api.book().len(), 1);

        let text = reply(api.execute("phone Bill").unwrap());
        assert!(text.starts_with("User Bill"));
    }

    #[test]
    fn test_unknown_command() {
        let mut api = api();
        let response = api.execute("dance").unwrap();
        assert!(response.failed);
        assert_eq!(response.command, None);
        assert_eq!(reply(response), UNKNOWN_COMMAND);
    }

    #[test]
    fn test_input_errors_become_messages() {
        let mut api = api();
        assert_eq!(reply(api.execute("add").unwrap()), "Enter a name and phone!");
        assert_eq!(
            reply(api.execute("add Bill 12").unwrap()),
            "Phone number or birthday date is incorrect!"
        );
        assert_eq!(
            reply(api.execute("add Bill 0671234567 someday").unwrap()),
            "Wrong date type!"
        );
        assert_eq!(
            reply(api.execute("days Bill").unwrap()),
            "Can`t find this user in list!"
        );

        api.execute("add Bill 0671234567").unwrap();
        assert_eq!(
            reply(api.execute("add Bill +380671234567").unwrap()),
            "Bill`s contact has already had this number"
        );
        assert_eq!(
            reply(api.execute("delete Bill 0671234567 now").unwrap()),
            "Too many arguments, unexpected 'now'!"
        );
    }

    #[test]
    fn test_greeting_ignores_trailing_words() {
        let mut api = api();
        let response = api.execute("hello there").unwrap();
        assert!(!response.failed);
        assert_eq!(reply(response), "How can I help you?");
    }

    #[test]
    fn test_missing_phone_is_not_a_missing_user() {
        let mut api = api();
        api.execute("add Bill 0671234567").unwrap();

        let response = api.execute("delete Bill 0991234567").unwrap();
        assert!(response.failed);
        assert_eq!(
            reply(response),
            "Bill`s contact has no number +380991234567"
        );
        assert_eq!(
            reply(api.execute("change Bill 0991234567 0931234567").unwrap()),
            "Bill`s contact has no number +380991234567"
        );
        assert_eq!(
            reply(api.execute("delete Jill 0991234567").unwrap()),
            "Can`t find this user in list!"
        );
        assert_eq!(
            reply(api.execute("change Jill 0991234567 0931234567").unwrap()),
            "Can`t find this user in list!"
        );
        assert_eq!(api.book().find("Bill").unwrap().phones().len(), 1);
    }

    #[test]
    fn test_exit_saves() {
        let mut api = api();
        api.execute("add Bill 0671234567").unwrap();
        let response = api.execute("good bye").unwrap();
        assert!(response.is_exit());
        assert_eq!(api.book().backend().save_count(), 1);
    }

    #[test]
    fn test_storage_errors_propagate() {
        struct ReadOnly;
        impl BookBackend for ReadOnly {
            fn load(&self) -> Result<Option<Vec<crate::record::Record>>> {
                Ok(None)
            }
            fn save(&mut self, _: &[crate::record::Record]) -> Result<()> {
                Err(BookError::Store("read-only".into()))
            }
        }

        let mut api = ContactApi::open(ReadOnly).unwrap();
        assert!(api.execute("exit").is_err());
    }
}
