//! CLI argument definitions.

use clap::{ArgAction, Parser, Subcommand};

use crate::model::Vote;

/// Top-level CLI parser for `repute`.
#[derive(Debug, Parser)]
#[command(
    name = "repute",
    version,
    about = "Look up and rate phone numbers, handles, and profile links"
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the canonical form of an alias without touching the database.
    Normalize {
        /// Phone number, @handle, t.me link, or vk.com link.
        text: String,
    },
    /// Find or create the object an alias refers to.
    Resolve {
        /// Phone number, @handle, t.me link, or vk.com link.
        text: String,
        /// Attach the alias to this object, merging if it belongs elsewhere.
        #[arg(long, value_name = "OBJECT_ID")]
        link: Option<String>,
    },
    /// Cast a single final vote on an object.
    Vote {
        /// Object to vote on.
        object_id: String,
        /// `up` or `down` (also `+1` / `-1`).
        #[arg(allow_hyphen_values = true)]
        vote: Vote,
        /// Identity of the reporter casting the vote.
        #[arg(long)]
        voter: String,
    },
    /// Apply a category tag to an object.
    Tag {
        /// Object to tag.
        object_id: String,
        /// Category name from the configured catalog.
        tag: String,
        /// Identity of the reporter applying the tag.
        #[arg(long)]
        voter: String,
    },
    /// Attach an anonymous comment to an object.
    Comment {
        /// Object to comment on.
        object_id: String,
        /// Comment text, stored verbatim.
        text: String,
    },
    /// List the most recent comments on an object, newest first.
    Comments {
        /// Object whose comments to list.
        object_id: String,
        /// Maximum number of comments (defaults to the configured limit).
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show an object's score, tags, aliases, and comment count.
    Show {
        /// Object to display.
        object_id: String,
        /// Emit JSON instead of the text card.
        #[arg(long)]
        json: bool,
    },
    /// Merge one object into another; the source is retired.
    Merge {
        /// Object to retire.
        from: String,
        /// Object that survives.
        into: String,
    },
    /// List the configured tag categories.
    Tags,
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use crate::model::Vote;
    use clap::Parser;

    #[test]
    fn parses_resolve_with_link() {
        let cli = Cli::parse_from(["repute", "resolve", "@foo", "--link", "obj-1"]);
        match cli.command {
            Command::Resolve { text, link } => {
                assert_eq!(text, "@foo");
                assert_eq!(link.as_deref(), Some("obj-1"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_signed_vote_values() {
        let cli = Cli::parse_from(["repute", "vote", "obj-1", "-1", "--voter", "42"]);
        assert!(matches!(cli.command, Command::Vote { vote: Vote::Down, .. }));

        let cli = Cli::parse_from(["repute", "vote", "obj-1", "up", "--voter", "42"]);
        assert!(matches!(cli.command, Command::Vote { vote: Vote::Up, .. }));
    }

    #[test]
    fn vote_requires_a_voter() {
        assert!(Cli::try_parse_from(["repute", "vote", "obj-1", "up"]).is_err());
    }

    #[test]
    fn verbosity_is_counted_anywhere() {
        let cli = Cli::parse_from(["repute", "-vv", "tags"]);
        assert_eq!(cli.verbose, 2);
        let cli = Cli::parse_from(["repute", "show", "obj-1", "-v"]);
        assert_eq!(cli.verbose, 1);
        assert!(matches!(cli.command, Command::Show { json: false, .. }));
    }
}
