//! The game state value: character, inventory, location, story log, and the
//! capped recent-event log.

use serde::{Deserialize, Serialize};

use crate::character::Character;

/// Maximum number of entries retained by [`RecentEvents`].
pub const RECENT_EVENT_CAP: usize = 5;

/// One line of the story log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoryLine {
    /// A player action echoed into the log, rendered as `> text`.
    Player(String),
    /// Narration produced by the response engine.
    Narration(String),
}

impl std::fmt::Display for StoryLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Player(text) => write!(f, "> {text}"),
            Self::Narration(text) => write!(f, "{text}"),
        }
    }
}

/// A fixed-capacity, newest-first log of human-readable state deltas.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentEvents {
    events: Vec<String>,
}

impl RecentEvents {
    /// Create an empty event log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend an event, evicting the oldest past [`RECENT_EVENT_CAP`].
    pub fn push(&mut self, event: impl Into<String>) {
        self.events.insert(0, event.into());
        self.events.truncate(RECENT_EVENT_CAP);
    }

    /// All retained events, newest first.
    pub fn entries(&self) -> &[String] {
        &self.events
    }

    /// Number of retained events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// The complete game state.
///
/// The story log grows without bound; only [`RecentEvents`] is capped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The player character, absent until creation.
    pub character: Option<Character>,
    /// Carried item names in acquisition order. Duplicates permitted.
    pub inventory: Vec<String>,
    /// Current location name. Empty until the game starts.
    pub location: String,
    /// The full story log, oldest first.
    pub story: Vec<StoryLine>,
    /// Newest-first capped log of recent deltas.
    pub recent_events: RecentEvents,
    /// Whether a narration request is in flight.
    pub is_loading: bool,
    /// Whether character creation has completed and play has begun.
    pub game_started: bool,
}

impl GameState {
    /// Whether a character has been created.
    pub fn has_character(&self) -> bool {
        self.character.is_some()
    }
}
