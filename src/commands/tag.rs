//! `repute tag` and `repute tags` commands.

use super::report;
use super::show::format_tag_line;
use crate::catalog::TagCatalog;
use crate::ledger::Reputation;
use crate::model::{ObjectId, VoterId};

/// Execute the `tag` command and print the tag's new count.
///
/// # Errors
///
/// Returns an error string if the tag is unknown, the voter already tagged
/// the object, the object is not live, or the store fails.
pub fn run(rep: &Reputation<'_>, object_id: &str, tag: &str, voter: &str) -> Result<(), String> {
    let (name, count) =
        rep.add_tag(&VoterId::new(voter), &ObjectId::new(object_id), tag).map_err(report)?;
    println!("{}", format_tag_line(rep.catalog(), name.as_str(), count));
    Ok(())
}

/// Execute the `tags` command: list configured categories.
///
/// # Errors
///
/// Never fails; the signature matches the other handlers.
#[allow(clippy::unnecessary_wraps)]
pub fn list(catalog: &TagCatalog) -> Result<(), String> {
    for entry in catalog.entries() {
        println!("{} {}", entry.emoji, entry.name);
    }
    Ok(())
}
