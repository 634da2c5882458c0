//! `repute resolve` command.

use super::report;
use crate::ledger::Reputation;
use crate::model::{ObjectId, Resolution, ResolveOutcome};

/// Execute the `resolve` command.
///
/// Prints the owning object id and how it was reached. With `link`, the
/// alias is attached to that object, merging its previous owner if needed.
///
/// # Errors
///
/// Returns an error string if the text is not an alias, the link target is
/// not live, or the store fails.
pub fn run(rep: &Reputation<'_>, text: &str, link: Option<&str>) -> Result<(), String> {
    let target = link.map(ObjectId::new);
    let resolution = rep.resolve_text(text, target.as_ref()).map_err(report)?;
    println!("{}", format_resolution(&resolution));
    Ok(())
}

fn format_resolution(resolution: &Resolution) -> String {
    let id = &resolution.object;
    match &resolution.outcome {
        ResolveOutcome::Existing => format!("{id} (existing)"),
        ResolveOutcome::Created => format!("{id} (created)"),
        ResolveOutcome::Attached => format!("{id} (alias attached)"),
        ResolveOutcome::Merged(merge) => format!(
            "{id} (merged {} into it, {} votes moved, {} discarded)",
            merge.retired, merge.votes_moved, merge.votes_discarded
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TagCatalog;
    use crate::context::ServiceContext;

    #[test]
    fn formats_each_outcome() {
        let ctx = ServiceContext::deterministic();
        let catalog = TagCatalog::default();
        let rep = Reputation::new(&ctx, &catalog);

        let created = rep.resolve_text("@foo", None).unwrap();
        assert_eq!(format_resolution(&created), "obj-1 (created)");
        let existing = rep.resolve_text("t.me/foo", None).unwrap();
        assert_eq!(format_resolution(&existing), "obj-1 (existing)");
        let attached = rep.resolve_text("vk.com/foo", Some(&created.object)).unwrap();
        assert_eq!(format_resolution(&attached), "obj-1 (alias attached)");

        rep.resolve_text("@bar", None).unwrap();
        let merged = rep.resolve_text("@bar", Some(&created.object)).unwrap();
        assert_eq!(
            format_resolution(&merged),
            "obj-1 (merged obj-2 into it, 0 votes moved, 0 discarded)"
        );
    }

    #[test]
    fn unknown_link_target_fails() {
        let ctx = ServiceContext::deterministic();
        let catalog = TagCatalog::default();
        let rep = Reputation::new(&ctx, &catalog);
        assert!(run(&rep, "@foo", Some("ghost")).is_err());
        assert!(run(&rep, "@foo", None).is_ok());
    }
}
