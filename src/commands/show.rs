//! `repute show` command and the text card shared by other commands.

use std::fmt::Write as _;

use super::report;
use crate::catalog::TagCatalog;
use crate::ledger::Reputation;
use crate::model::{ObjectId, Snapshot};

/// Execute the `show` command.
///
/// Prints a text card by default, or the full snapshot as JSON.
///
/// # Errors
///
/// Returns an error string if the object is not live, the store fails, or
/// JSON serialization fails.
pub fn run(rep: &Reputation<'_>, object_id: &str, json: bool) -> Result<(), String> {
    let snapshot = rep.snapshot(&ObjectId::new(object_id)).map_err(report)?;
    if json {
        let body = serde_json::to_string_pretty(&snapshot)
            .map_err(|err| format!("failed to serialize snapshot: {err}"))?;
        println!("{body}");
    } else {
        print!("{}", format_card(&snapshot, rep.catalog()));
    }
    Ok(())
}

/// Renders a score with a thumb matching its sign.
pub(crate) fn format_score(score: i64) -> String {
    match score {
        s if s > 0 => format!("👍 {s}"),
        s if s < 0 => format!("👎 {s}"),
        _ => "➖ 0".to_string(),
    }
}

/// One tag with its emoji and count.
pub(crate) fn format_tag_line(catalog: &TagCatalog, name: &str, count: u64) -> String {
    format!("{} {name} — {count}", catalog.emoji_for(name))
}

fn format_card(snapshot: &Snapshot, catalog: &TagCatalog) -> String {
    let mut card = String::new();
    let _ = writeln!(card, "{} [{}]", snapshot.title, snapshot.id);
    let _ = writeln!(
        card,
        "Rating: {} ({} up, {} down)",
        format_score(snapshot.score),
        snapshot.up_votes,
        snapshot.down_votes
    );

    if snapshot.tag_counts.is_empty() {
        let _ = writeln!(card, "Tags: none");
    } else {
        let _ = writeln!(card, "Tags:");
        for tag in &snapshot.tag_counts {
            let _ = writeln!(card, "  {}", format_tag_line(catalog, &tag.name, tag.count));
        }
    }

    let aliases: Vec<String> = snapshot.aliases.iter().map(ToString::to_string).collect();
    let _ = writeln!(card, "Aliases: {}", aliases.join(", "));
    let _ = writeln!(card, "Comments: {}", snapshot.comment_count);
    card
}
