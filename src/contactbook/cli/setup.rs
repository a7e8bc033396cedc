use clap::Parser;
use contactbook::error::{BookError, Result};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "contactbook", bin_name = "contactbook", version = get_version())]
#[command(
    about = "Personal contact book with validated phone numbers and birthdays",
    long_about = "Personal contact book with validated phone numbers and birthdays.\n\n\
        Without a command, starts an interactive prompt. Commands: hello, add, change, \
        delete, birthday, days, phone, search, show all, exit (or close, good bye)."
)]
pub struct Cli {
    /// Data directory holding config.json and the contact book
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Contact book file (overrides the configured one)
    #[arg(long, value_name = "FILE")]
    pub book: Option<PathBuf>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// Run one command and exit, e.g. `add Bill 0671234567`
    #[arg(trailing_var_arg = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

/// Logs go to stderr so they never mix with command output. `RUST_LOG`
/// wins over `--verbose`.
pub fn init_tracing(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| BookError::Store(format!("failed to initialize logging: {}", e)))
}
