//! `repute comment` and `repute comments` commands.

use super::report;
use crate::ledger::Reputation;
use crate::model::{Comment, ObjectId};

/// Execute the `comment` command.
///
/// # Errors
///
/// Returns an error string if the object is not live or the store fails.
pub fn add(rep: &Reputation<'_>, object_id: &str, text: &str) -> Result<(), String> {
    let id = rep.add_comment(&ObjectId::new(object_id), text).map_err(report)?;
    println!("Comment #{} added to {object_id}.", id.0);
    Ok(())
}

/// Execute the `comments` command: newest first, at most `limit`.
///
/// # Errors
///
/// Returns an error string if the object is not live or the store fails.
pub fn list(rep: &Reputation<'_>, object_id: &str, limit: usize) -> Result<(), String> {
    let comments = rep.recent_comments(&ObjectId::new(object_id), limit).map_err(report)?;
    if comments.is_empty() {
        println!("No comments yet.");
        return Ok(());
    }
    for comment in &comments {
        println!("{}", format_comment(comment));
    }
    Ok(())
}

fn format_comment(comment: &Comment) -> String {
    format!("[{}] {}", comment.created_at.format("%Y-%m-%d %H:%M"), comment.text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TagCatalog;
    use crate::context::ServiceContext;

    #[test]
    fn comment_lines_carry_timestamp() {
        let ctx = ServiceContext::deterministic();
        let catalog = TagCatalog::default();
        let rep = Reputation::new(&ctx, &catalog);
        let id = rep.resolve_text("@foo", None).unwrap().object;

        add(&rep, id.as_str(), "answers at night").unwrap();
        let comments = rep.recent_comments(&id, 10).unwrap();
        assert_eq!(format_comment(&comments[0]), "[2024-01-01 00:00] answers at night");
        assert!(list(&rep, id.as_str(), 10).is_ok());
    }

    #[test]
    fn unknown_object_fails() {
        let ctx = ServiceContext::deterministic();
        let catalog = TagCatalog::default();
        let rep = Reputation::new(&ctx, &catalog);
        assert!(add(&rep, "ghost", "hi").is_err());
        assert!(list(&rep, "ghost", 10).is_err());
    }
}
