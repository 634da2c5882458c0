//! Command dispatch and handlers.

pub mod comment;
pub mod merge;
pub mod normalize;
pub mod resolve;
pub mod show;
pub mod tag;
pub mod vote;

use tracing::{error, warn};

use crate::cli::Command;
use crate::config::Config;
use crate::context::ServiceContext;
use crate::error::CoreError;
use crate::ledger::Reputation;

/// Dispatch a parsed command to its handler.
///
/// Configuration is loaded first; the database is opened only for commands
/// that need it.
///
/// # Errors
///
/// Returns an error string if configuration, the store, or the selected
/// command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let config = Config::load().map_err(|err| err.to_string())?;
    let catalog = config.catalog().map_err(|err| err.to_string())?;

    match command {
        Command::Normalize { text } => normalize::run(text),
        Command::Tags => tag::list(&catalog),
        _ => {
            let ctx = ServiceContext::live(&config).map_err(report)?;
            let rep = Reputation::new(&ctx, &catalog);
            dispatch_with_context(command, &rep, &config)
        }
    }
}

/// Dispatch a command against an already-built facade.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch_with_context(
    command: &Command,
    rep: &Reputation<'_>,
    config: &Config,
) -> Result<(), String> {
    match command {
        Command::Normalize { text } => normalize::run(text),
        Command::Resolve { text, link } => resolve::run(rep, text, link.as_deref()),
        Command::Vote { object_id, vote, voter } => vote::run(rep, object_id, *vote, voter),
        Command::Tag { object_id, tag, voter } => tag::run(rep, object_id, tag, voter),
        Command::Comment { object_id, text } => comment::add(rep, object_id, text),
        Command::Comments { object_id, limit } => {
            comment::list(rep, object_id, limit.unwrap_or(config.comment_limit))
        }
        Command::Show { object_id, json } => show::run(rep, object_id, *json),
        Command::Merge { from, into } => merge::run(rep, from, into),
        Command::Tags => tag::list(rep.catalog()),
    }
}

/// Logs a core failure and turns it into the CLI's error string.
pub(crate) fn report(err: CoreError) -> String {
    if err.is_rejection() {
        warn!(error = %err, "request rejected");
    } else {
        error!(error = %err, "operation failed");
    }
    err.to_string()
}
