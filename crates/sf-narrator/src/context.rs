//! Read-only context snapshot handed to the engine with each action.

use sf_core::Character;

/// How many trailing story lines are carried in the context.
pub const CONTEXT_STORY_LINES: usize = 5;

/// A read-only snapshot of game state, rebuilt fresh for every request.
///
/// Only `location` influences the canned engine today; the remaining fields
/// are carried for backends that condition on history.
#[derive(Debug, Clone)]
pub struct StoryContext {
    /// Last [`CONTEXT_STORY_LINES`] story lines, rendered, oldest first.
    pub recent_story: Vec<String>,
    /// The current character.
    pub character: Character,
    /// Current inventory.
    pub inventory: Vec<String>,
    /// Current location name.
    pub location: String,
    /// Recent event log, newest first.
    pub recent_events: Vec<String>,
}
