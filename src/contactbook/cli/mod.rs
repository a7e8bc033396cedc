//! # CLI Layer
//!
//! The only place that knows about the terminal: argument parsing, the
//! interactive prompt, coloured output, logging setup and exit codes.
//!
//! - `run()`: resolves paths and config, opens the book, then either runs the
//!   one-shot command given on the command line or starts the prompt.
//! - `repl`: the `>>> ` loop.
//! - `print`: output formatting.

mod print;
mod repl;
mod setup;

use clap::Parser;
use contactbook::api::ContactApi;
use contactbook::book::AddressBook;
use contactbook::config::BookConfig;
use contactbook::error::{BookError, Result};
use contactbook::store::fs::JsonFileBackend;
use contactbook::store::BookBackend;
use directories::ProjectDirs;
use print::{print_goodbye, print_response};
use setup::{init_tracing, Cli};
use std::path::PathBuf;
use tracing::debug;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let data_dir = data_dir(&cli)?;
    let config = BookConfig::load(&data_dir)?;
    let book_path = cli
        .book
        .clone()
        .unwrap_or_else(|| config.book_path(&data_dir));
    debug!(data_dir = %data_dir.display(), book = %book_path.display(), "opening contact book");

    let book =
        AddressBook::open(JsonFileBackend::new(book_path))?.with_page_size(config.page_size());
    let mut api = ContactApi::new(book);

    if cli.command.is_empty() {
        repl::run(&mut api)
    } else {
        run_once(&mut api, &cli.command.join(" "))
    }
}

fn data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.dir {
        return Ok(dir.clone());
    }
    ProjectDirs::from("com", "contactbook", "contactbook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| BookError::Store("could not determine a data directory".to_string()))
}

/// Runs a single command. Commands that change the book save it right away.
fn run_once<B: BookBackend>(api: &mut ContactApi<B>, line: &str) -> Result<()> {
    let response = api.execute(line)?;
    if response.is_exit() {
        print_goodbye();
        return Ok(());
    }

    print_response(&response);
    if response.failed {
        std::process::exit(2);
    }
    if response.command.is_some_and(|c| c.mutates()) {
        api.save()?;
    }
    Ok(())
}
