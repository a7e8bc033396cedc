use super::print::{print_goodbye, print_response, PROMPT};
use contactbook::api::ContactApi;
use contactbook::error::Result;
use contactbook::store::BookBackend;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Reads commands until `exit` or end of input. End of input saves the book
/// the same way `exit` does.
///
/// Lines are read as bytes; invalid UTF-8 is replaced rather than ending the
/// session.
pub(super) fn run<B: BookBackend>(api: &mut ContactApi<B>) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut buf = Vec::new();

    loop {
        print!("{}", PROMPT);
        io::stdout().flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            println!();
            api.save()?;
            print_goodbye();
            return Ok(());
        }
        let line = String::from_utf8_lossy(&buf);
        if line.trim().is_empty() {
            continue;
        }

        let response = api.execute(&line)?;
        debug!(command = ?response.command, failed = response.failed, "dispatched");
        if response.is_exit() {
            print_goodbye();
            return Ok(());
        }
        print_response(&response);
    }
}
