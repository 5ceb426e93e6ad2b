//! Saved-state codec for carrying a [`TaskList`] across a configuration
//! change.
//!
//! The bundle holds `{tasks, next_id}` behind a one-byte format version,
//! encoded with postcard. It is process local and never written to disk.
//! Decoding re-checks the list invariants, so a restored list is always one
//! the screen could have reached itself.

use serde::{Deserialize, Serialize};

use crate::task::{Task, TaskError, TaskId, TaskList};

/// Current bundle format version.
pub const FORMAT_VERSION: u8 = 1;

/// Error type for saved-state encode/decode operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CodecError {
    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),
    /// The bundle was written by an unknown format version.
    #[error("unsupported saved-state version {0}")]
    UnsupportedVersion(u8),
    /// The bundle decoded but breaks a task list invariant.
    #[error("invalid saved state: {0}")]
    InvalidState(#[from] TaskError),
}

#[derive(Serialize)]
struct SavedStateRef<'a> {
    version: u8,
    tasks: &'a [Task],
    next_id: TaskId,
}

#[derive(Deserialize)]
struct SavedStateOwned {
    version: u8,
    tasks: Vec<Task>,
    next_id: TaskId,
}

/// Encodes a [`TaskList`] into a byte vector using postcard.
///
/// # Errors
///
/// Returns `CodecError::Serialization` if the list cannot be serialized.
pub fn encode(list: &TaskList) -> Result<Vec<u8>, CodecError> {
    let saved = SavedStateRef {
        version: FORMAT_VERSION,
        tasks: list.tasks(),
        next_id: list.next_id(),
    };
    postcard::to_allocvec(&saved).map_err(|e| CodecError::Serialization(e.to_string()))
}

/// Decodes a [`TaskList`] from a byte slice.
///
/// # Errors
///
/// Returns `CodecError::Serialization` if the bytes cannot be deserialized,
/// `CodecError::UnsupportedVersion` for a foreign version byte, or
/// `CodecError::InvalidState` if the decoded list breaks an invariant.
pub fn decode(bytes: &[u8]) -> Result<TaskList, CodecError> {
    let saved: SavedStateOwned =
        postcard::from_bytes(bytes).map_err(|e| CodecError::Serialization(e.to_string()))?;
    if saved.version != FORMAT_VERSION {
        return Err(CodecError::UnsupportedVersion(saved.version));
    }
    Ok(TaskList::from_parts(saved.tasks, saved.next_id)?)
}

/// An opaque saved-state bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedState(Vec<u8>);

impl SavedState {
    /// Captures `list` into a bundle.
    ///
    /// # Errors
    ///
    /// Propagates [`encode`] failures.
    pub fn capture(list: &TaskList) -> Result<Self, CodecError> {
        encode(list).map(Self)
    }

    /// Wraps raw bundle bytes.
    #[must_use]
    pub const fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Raw bundle bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Restores the list held in this bundle.
    ///
    /// # Errors
    ///
    /// Propagates [`decode`] failures.
    pub fn restore(&self) -> Result<TaskList, CodecError> {
        decode(&self.0)
    }
}
