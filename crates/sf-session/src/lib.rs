//! Session orchestration for StoryForge.
//!
//! Wires the pure reducer (`sf-core`) and the response engine
//! (`sf-narrator`) into an interactive session: the turn loop with its
//! artificial narration latency, an injected key/value persistence surface,
//! and versioned snapshots of the full game state.

/// Session configuration (seed, narration delay).
pub mod config;
/// Error types used throughout the crate.
pub mod error;
/// The game session and its turn loop.
pub mod session;
/// Versioned snapshots of the full game state.
pub mod snapshot;
/// The key/value persistence surface and its implementations.
pub mod storage;

/// Re-export configuration types.
pub use config::SessionConfig;
/// Re-export error types.
pub use error::{SessionError, SessionResult};
/// Re-export session types.
pub use session::{FALLBACK_NARRATION, GameSession, SAVE_KEY};
/// Re-export snapshot types.
pub use snapshot::{SNAPSHOT_VERSION, Snapshot};
/// Re-export storage types.
pub use storage::{FileStore, MemoryStore, SaveStore, StorageError};
