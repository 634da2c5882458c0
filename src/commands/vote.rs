//! `repute vote` command.

use super::report;
use super::show::format_score;
use crate::ledger::Reputation;
use crate::model::{ObjectId, Vote, VoterId};

/// Execute the `vote` command and print the new score.
///
/// # Errors
///
/// Returns an error string if the voter already voted, the object is not
/// live, or the store fails.
pub fn run(rep: &Reputation<'_>, object_id: &str, vote: Vote, voter: &str) -> Result<(), String> {
    let score =
        rep.cast_vote(&VoterId::new(voter), &ObjectId::new(object_id), vote).map_err(report)?;
    println!("{object_id}: {}", format_score(score));
    Ok(())
}
