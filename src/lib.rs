//! Alias resolution and reputation ledgers behind the `repute` CLI.
//!
//! Reporters refer to the same real-world party by phone number, messaging
//! handle, or profile link. [`normalize`] canonicalizes that text,
//! [`ledger::EntityResolver`] maps it to one canonical object (merging two
//! objects when an alias proves they are the same party), and the ledgers
//! attach votes, tags, and comments to the object.
//!
//! All state goes through the [`ports::Store`] held by a [`ServiceContext`].

pub mod adapters;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod ledger;
pub mod model;
pub mod normalize;
pub mod ports;
pub mod telemetry;

pub use catalog::{CatalogError, TagCatalog};
pub use context::ServiceContext;
pub use error::{CoreError, CoreResult};
pub use ledger::Reputation;
pub use normalize::normalize;

use clap::error::ErrorKind;
use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    telemetry::init(cli.verbose);
    commands::dispatch(&cli.command)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_executes_normalize() {
        let result = run(["repute", "normalize", "+7 (999) 888-77-66"]);
        assert!(result.is_ok());
    }

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["repute", "unknown"]);
        assert!(result.is_err());
    }

    #[test]
    fn run_treats_help_as_success() {
        assert!(run(["repute", "--help"]).is_ok());
    }
}
