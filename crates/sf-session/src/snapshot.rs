//! Versioned snapshots of the full game state.
//!
//! A snapshot is the one blob the persistence surface stores. Snapshots
//! carry a format version; loading a snapshot written by a different
//! version is rejected rather than migrated or trusted as-is.

use serde::{Deserialize, Serialize};
use sf_core::GameState;

use crate::error::{SessionError, SessionResult};

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// A versioned, serializable snapshot of the complete [`GameState`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version.
    pub version: u32,
    /// The captured state.
    pub state: GameState,
}

impl Snapshot {
    /// Wrap a state in a current-version snapshot.
    pub fn capture(state: GameState) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            state,
        }
    }

    /// Serialize to the persisted JSON form.
    pub fn encode(&self) -> SessionResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from the persisted JSON form.
    ///
    /// Rejects snapshots whose version differs from [`SNAPSHOT_VERSION`].
    pub fn decode(raw: &str) -> SessionResult<Self> {
        let snapshot: Snapshot = serde_json::from_str(raw)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SessionError::SnapshotVersion {
                found: snapshot.version,
                expected: SNAPSHOT_VERSION,
            });
        }
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_core::{Character, CharacterClass, GameAction};

    fn sample_state() -> GameState {
        GameState::default()
            .apply(GameAction::SetCharacter(
                Character::new("Aria", CharacterClass::Mage).unwrap(),
            ))
            .apply(GameAction::SetLocation("Mage Tower".to_string()))
            .apply(GameAction::StartGame)
    }

    #[test]
    fn encode_decode_identity() {
        let state = sample_state();
        let raw = Snapshot::capture(state.clone()).encode().unwrap();
        let decoded = Snapshot::decode(&raw).unwrap();
        assert_eq!(decoded.version, SNAPSHOT_VERSION);
        assert_eq!(decoded.state, state);
    }

    #[test]
    fn version_mismatch_rejected() {
        let mut snapshot = Snapshot::capture(sample_state());
        snapshot.version = 99;
        let raw = serde_json::to_string(&snapshot).unwrap();
        assert!(matches!(
            Snapshot::decode(&raw),
            Err(SessionError::SnapshotVersion {
                found: 99,
                expected: SNAPSHOT_VERSION
            })
        ));
    }

    #[test]
    fn malformed_blob_rejected() {
        assert!(matches!(
            Snapshot::decode("not json"),
            Err(SessionError::Snapshot(_))
        ));
        assert!(matches!(
            Snapshot::decode("{\"version\":1}"),
            Err(SessionError::Snapshot(_))
        ));
    }
}
