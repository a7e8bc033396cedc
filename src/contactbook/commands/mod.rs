//! # Command Layer
//!
//! One module per command. Each exposes a `run` function taking the book and
//! the raw argument words and returning an [`Outcome`]. Commands never print;
//! failures come back as [`BookError`](crate::error::BookError) values for the
//! caller to turn into messages.
//!
//! Command names map to handlers through the static [`COMMANDS`] table.

use crate::book::AddressBook;
use crate::error::{BookError, Result};
use crate::store::BookBackend;

pub mod add;
pub mod birthday;
pub mod change;
pub mod days;
pub mod delete;
pub mod exit;
pub mod greet;
pub mod phone;
pub mod search;
pub mod show_all;

/// What a command asks of its caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Show this text and keep going.
    Reply(String),
    /// The book has been saved; end the session.
    Exit,
}

impl Outcome {
    pub fn reply(text: impl Into<String>) -> Self {
        Outcome::Reply(text.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    ShowAll,
    Exit,
    Delete,
    Birthday,
    Days,
    Search,
}

/// Command words, matched case-insensitively at the start of a line.
pub const COMMANDS: &[(&str, Command)] = &[
    ("hello", Command::Hello),
    ("add", Command::Add),
    ("change", Command::Change),
    ("phone", Command::Phone),
    ("show all", Command::ShowAll),
    ("good bye", Command::Exit),
    ("exit", Command::Exit),
    ("close", Command::Exit),
    ("delete", Command::Delete),
    ("birthday", Command::Birthday),
    ("days", Command::Days),
    ("search", Command::Search),
];

impl Command {
    /// Whether running the command can change the book.
    pub fn mutates(self) -> bool {
        matches!(
            self,
            Command::Add | Command::Change | Command::Delete | Command::Birthday
        )
    }

    pub fn run<B: BookBackend>(self, book: &mut AddressBook<B>, args: &[String]) -> Result<Outcome> {
        match self {
            Command::Hello => greet::run(args),
            Command::Add => add::run(book, args),
            Command::Change => change::run(book, args),
            Command::Phone => phone::run(book, args),
            Command::ShowAll => show_all::run(book, args),
            Command::Exit => exit::run(book, args),
            Command::Delete => delete::run(book, args),
            Command::Birthday => birthday::run(book, args),
            Command::Days => days::run(book, args),
            Command::Search => search::run(book, args),
        }
    }
}

/// Splits an input line into a command and its argument words.
///
/// Returns `None` when the line does not start with a known command word.
pub fn parse_line(line: &str) -> Option<(Command, Vec<String>)> {
    let line = line.trim();
    COMMANDS.iter().find_map(|&(word, command)| {
        let head = line.get(..word.len())?;
        let rest = &line[word.len()..];
        let at_boundary = rest.chars().next().is_none_or(char::is_whitespace);
        if head.eq_ignore_ascii_case(word) && at_boundary {
            Some((command, rest.split_whitespace().map(str::to_string).collect()))
        } else {
            None
        }
    })
}

/// Returns the argument at `pos`, or `MissingArgument(what)`.
pub(crate) fn required<'a>(args: &'a [String], pos: usize, what: &'static str) -> Result<&'a str> {
    args.get(pos)
        .map(String::as_str)
        .ok_or(BookError::MissingArgument(what))
}

/// Rejects anything past the first `max` arguments.
pub(crate) fn at_most(args: &[String], max: usize) -> Result<()> {
    match args.get(max) {
        Some(extra) => Err(BookError::UnexpectedArgument(extra.clone())),
        None => Ok(()),
    }
}
