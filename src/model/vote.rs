//! Signed votes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{ObjectId, VoterId};

/// A single up or down vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vote {
    /// `+1`
    Up,
    /// `-1`
    Down,
}

impl Vote {
    /// Contribution to the object's score.
    #[must_use]
    pub fn delta(self) -> i64 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }

    /// Inverse of [`Vote::delta`]; `None` for anything but `±1`.
    #[must_use]
    pub fn from_delta(delta: i64) -> Option<Self> {
        match delta {
            1 => Some(Self::Up),
            -1 => Some(Self::Down),
            _ => None,
        }
    }
}

impl FromStr for Vote {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "up" | "+1" | "+" | "1" => Ok(Self::Up),
            "down" | "-1" | "-" => Ok(Self::Down),
            other => Err(format!("invalid vote {other:?}: expected up or down")),
        }
    }
}

/// One voter's vote on one object. Unique per `(voter, object)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteRecord {
    /// Who voted.
    pub voter: VoterId,
    /// What they voted on.
    pub object: ObjectId,
    /// Direction of the vote.
    pub vote: Vote,
}
