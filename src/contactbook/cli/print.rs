use colored::Colorize;
use contactbook::api::Response;
use contactbook::commands::Outcome;

pub(super) const PROMPT: &str = ">>> ";

pub(super) fn print_response(response: &Response) {
    let Outcome::Reply(text) = &response.outcome else {
        return;
    };
    let text = text.trim_end_matches('\n');
    if response.failed {
        println!("{}", text.red());
    } else {
        println!("{}", text);
    }
}

pub(super) fn print_goodbye() {
    println!("{}", "Good bye!".green());
}
