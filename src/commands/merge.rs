//! `repute merge` command.

use super::report;
use super::show::format_score;
use crate::ledger::Reputation;
use crate::model::{MergeReport, ObjectId};

/// Execute the `merge` command: retire `from`, fold its records into `into`.
///
/// # Errors
///
/// Returns an error string if either object is not live, both ids are the
/// same, or the store fails.
pub fn run(rep: &Reputation<'_>, from: &str, into: &str) -> Result<(), String> {
    let merge = rep.merge(&ObjectId::new(from), &ObjectId::new(into)).map_err(report)?;
    print!("{}", format_report(&merge));
    Ok(())
}

fn format_report(merge: &MergeReport) -> String {
    format!(
        "Merged {} into {}.\n\
         Aliases moved: {}\n\
         Votes moved: {} (discarded {})\n\
         Tag increments moved: {}\n\
         Tag voters moved: {} (discarded {})\n\
         Comments moved: {}\n\
         Rating: {}\n",
        merge.retired,
        merge.winner,
        merge.aliases_moved,
        merge.votes_moved,
        merge.votes_discarded,
        merge.tag_increments_moved,
        merge.tag_voters_moved,
        merge.tag_voters_discarded,
        merge.comments_moved,
        format_score(merge.score),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TagCatalog;
    use crate::context::ServiceContext;
    use crate::model::{Vote, VoterId};

    #[test]
    fn report_summarizes_merge() {
        let ctx = ServiceContext::deterministic();
        let catalog = TagCatalog::default();
        let rep = Reputation::new(&ctx, &catalog);
        let a = rep.resolve_text("@a", None).unwrap().object;
        let b = rep.resolve_text("@b", None).unwrap().object;
        rep.cast_vote(&VoterId::new("x"), &a, Vote::Up).unwrap();
        rep.cast_vote(&VoterId::new("x"), &b, Vote::Up).unwrap();
        rep.cast_vote(&VoterId::new("y"), &a, Vote::Up).unwrap();

        let merge = rep.merge(&a, &b).unwrap();
        let text = format_report(&merge);
        assert!(text.starts_with("Merged obj-1 into obj-2.\n"));
        assert!(text.contains("Votes moved: 1 (discarded 1)"));
        assert!(text.ends_with("Rating: 👍 2\n"));
    }

    #[test]
    fn self_merge_is_refused() {
        let ctx = ServiceContext::deterministic();
        let catalog = TagCatalog::default();
        let rep = Reputation::new(&ctx, &catalog);
        let a = rep.resolve_text("@a", None).unwrap().object;
        assert!(run(&rep, a.as_str(), a.as_str()).unwrap_err().contains("itself"));
    }
}
