//! Error taxonomy for the reputation core.

use thiserror::Error;

use crate::model::{ObjectId, VoterId};

/// Result alias used throughout the core.
pub type CoreResult<T> = Result<T, CoreError>;

/// Every way a core operation can fail.
///
/// Operations either apply fully or fail with one of these and leave the
/// store untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The input is not a phone number, profile link, or handle.
    #[error("unrecognized alias format: {input:?}")]
    UnrecognizedFormat {
        /// The raw text that failed classification.
        input: String,
    },

    /// The voter already has a vote on record for this object.
    #[error("voter {voter} has already voted on object {object}")]
    AlreadyVoted {
        /// Who tried to vote again.
        voter: VoterId,
        /// The object they already voted on.
        object: ObjectId,
    },

    /// The voter already spent their single tag contribution on this object.
    #[error("voter {voter} has already tagged object {object}")]
    AlreadyTagged {
        /// Who tried to tag again.
        voter: VoterId,
        /// The object they already tagged.
        object: ObjectId,
    },

    /// The tag name is not part of the configured catalog.
    #[error("unknown tag: {name:?}")]
    UnknownTag {
        /// The rejected tag name.
        name: String,
    },

    /// The object id does not exist or was retired by a merge.
    #[error("object not found: {object}")]
    NotFound {
        /// The id that failed to resolve to a live object.
        object: ObjectId,
    },

    /// A merge named the same object as both source and target.
    #[error("cannot merge object {object} into itself")]
    SelfMerge {
        /// The object named twice.
        object: ObjectId,
    },

    /// The backing store failed; the transaction was rolled back.
    #[error("storage failure: {message}")]
    Storage {
        /// Backend-specific description.
        message: String,
    },
}

impl CoreError {
    /// Builds a [`CoreError::Storage`] from any displayable backend error.
    pub fn storage(err: impl std::fmt::Display) -> Self {
        Self::Storage { message: err.to_string() }
    }

    /// Returns `true` for policy rejections a reporter can see and act on.
    ///
    /// These never change state. Everything else is a fault.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::UnrecognizedFormat { .. }
                | Self::AlreadyVoted { .. }
                | Self::AlreadyTagged { .. }
                | Self::UnknownTag { .. }
                | Self::SelfMerge { .. }
        )
    }
}
