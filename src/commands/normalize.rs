//! `repute normalize` command.

use super::report;
use crate::model::Alias;
use crate::normalize::normalize;

/// Execute the `normalize` command.
///
/// Prints the alias kind and canonical form. Never opens the database.
///
/// # Errors
///
/// Returns an error string if `text` is not a recognizable alias.
pub fn run(text: &str) -> Result<(), String> {
    let alias = normalize(text).map_err(report)?;
    println!("{}", format_alias(&alias));
    Ok(())
}

fn format_alias(alias: &Alias) -> String {
    format!("{:<12} {}", alias.kind().as_str(), alias)
}
