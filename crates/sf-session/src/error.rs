//! Error types for session orchestration.

use thiserror::Error;

use crate::storage::StorageError;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while driving a game session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Character creation input was invalid.
    #[error(transparent)]
    Core(#[from] sf_core::CoreError),

    /// The persistence surface failed. State is left untouched.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A snapshot could not be encoded or decoded.
    #[error("snapshot codec error: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// A persisted snapshot was written by a different format version.
    #[error("unsupported snapshot version {found} (expected {expected})")]
    SnapshotVersion {
        /// Version found in the persisted snapshot.
        found: u32,
        /// Version this build reads and writes.
        expected: u32,
    },

    /// No saved game exists under the save key.
    #[error("no saved game")]
    NoSavedGame,

    /// An action was submitted before character creation.
    #[error("no character created yet")]
    NoCharacter,
}
