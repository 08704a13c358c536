//! Game session orchestration.
//!
//! `GameSession` wires the reducer, a response source, and a save store
//! together. All state changes flow through [`GameState::apply`]; the
//! session decides the fixed order in which a response's deltas become
//! transitions.

use sf_core::{Character, CharacterClass, GameAction, GameState, StoryLine};
use sf_narrator::{
    CONTEXT_STORY_LINES, Narrator, ResponseSource, StoryContext, StoryResponse,
};

use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};
use crate::snapshot::Snapshot;
use crate::storage::{MemoryStore, SaveStore};

/// Persistence key under which the one snapshot lives.
pub const SAVE_KEY: &str = "storyforge-quest-save";

/// Fallback narration appended when response generation fails.
pub const FALLBACK_NARRATION: &str = "The narrator seems lost in thought. Try again...";

/// An interactive game session.
///
/// Holds the authoritative [`GameState`] and drives it one turn at a time.
/// `&mut self` on [`submit_action`](Self::submit_action) means at most one
/// narration request is in flight per session.
pub struct GameSession<R: ResponseSource, S: SaveStore> {
    state: GameState,
    source: R,
    store: S,
    config: SessionConfig,
}

impl GameSession<Narrator, MemoryStore> {
    /// Create a session with the built-in narrator and an in-memory store.
    pub fn with_defaults(config: SessionConfig) -> Self {
        let narrator = Narrator::new(config.seed);
        Self::new(narrator, MemoryStore::new(), config)
    }
}

impl<R: ResponseSource, S: SaveStore> GameSession<R, S> {
    /// Create a session from its collaborators.
    pub fn new(source: R, store: S, config: SessionConfig) -> Self {
        Self {
            state: GameState::default(),
            source,
            store,
            config,
        }
    }

    /// The current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Create the character and start the game.
    ///
    /// Validates the name, places the character at the class starting
    /// location, and appends the welcome narration.
    pub fn create_character(&mut self, name: &str, class: CharacterClass) -> SessionResult<()> {
        let character = Character::new(name, class)?;
        let location = class.starting_location().to_string();
        let welcome = format!(
            "Welcome, brave {} the {}. Your adventure begins in the {location}. \
             What would you like to do?",
            character.name, character.class
        );

        self.dispatch(GameAction::SetCharacter(character));
        self.dispatch(GameAction::SetLocation(location));
        self.dispatch(GameAction::StartGame);
        self.dispatch(GameAction::AppendStory(StoryLine::Narration(welcome)));
        Ok(())
    }

    /// Run one turn: echo the action, generate a response, apply its deltas.
    ///
    /// Delta order is fixed: narration first, then the location change, then
    /// each gained item, then each lost item, each paired with its event
    /// note. A generation failure appends [`FALLBACK_NARRATION`], applies no
    /// deltas, and is never propagated. The context snapshot is taken before
    /// the player echo, so the echo line is not part of its recent story.
    pub async fn submit_action(&mut self, action: &str) -> SessionResult<()> {
        let Some(character) = self.state.character.clone() else {
            return Err(SessionError::NoCharacter);
        };

        self.dispatch(GameAction::SetLoading(true));
        let context = self.context(character);
        self.dispatch(GameAction::AppendStory(StoryLine::Player(
            action.to_string(),
        )));

        tokio::time::sleep(self.config.narration_delay).await;

        match self.source.generate(action, &context) {
            Ok(response) => self.apply_response(response),
            Err(_) => {
                self.dispatch(GameAction::AppendStory(StoryLine::Narration(
                    FALLBACK_NARRATION.to_string(),
                )));
            }
        }

        self.dispatch(GameAction::SetLoading(false));
        Ok(())
    }

    /// Snapshot the current state into the save store.
    ///
    /// Saving is explicit; storage failures leave both the state and any
    /// previously persisted snapshot untouched.
    pub fn save(&mut self) -> SessionResult<()> {
        let raw = Snapshot::capture(self.state.clone()).encode()?;
        self.store.put(SAVE_KEY, &raw)?;
        Ok(())
    }

    /// Replace the state with the persisted snapshot.
    ///
    /// Never called automatically; errors leave the current state untouched.
    pub fn load(&mut self) -> SessionResult<()> {
        let raw = self.store.get(SAVE_KEY)?.ok_or(SessionError::NoSavedGame)?;
        let snapshot = Snapshot::decode(&raw)?;
        self.dispatch(GameAction::LoadGame(snapshot.state));
        Ok(())
    }

    /// Whether a saved snapshot exists. Storage failures read as absent.
    pub fn has_save(&self) -> bool {
        matches!(self.store.get(SAVE_KEY), Ok(Some(_)))
    }

    /// Delete the persisted snapshot, if any.
    pub fn clear_save(&mut self) -> SessionResult<()> {
        self.store.delete(SAVE_KEY)?;
        Ok(())
    }

    /// Restore the default state. The persisted snapshot is kept.
    pub fn reset(&mut self) {
        self.dispatch(GameAction::ResetGame);
    }

    fn apply_response(&mut self, response: StoryResponse) {
        self.dispatch(GameAction::AppendStory(StoryLine::Narration(response.text)));

        if let Some(location) = response.new_location {
            self.dispatch(GameAction::SetLocation(location.clone()));
            self.dispatch(GameAction::AddEvent(format!("Traveled to {location}")));
        }

        for item in response.items_gained {
            self.dispatch(GameAction::AddInventoryItem(item.clone()));
            self.dispatch(GameAction::AddEvent(format!("Found {item}")));
        }

        for item in response.items_lost {
            self.dispatch(GameAction::RemoveInventoryItem(item.clone()));
            self.dispatch(GameAction::AddEvent(format!("Used {item}")));
        }
    }

    fn dispatch(&mut self, action: GameAction) {
        self.state = std::mem::take(&mut self.state).apply(action);
    }

    fn context(&self, character: Character) -> StoryContext {
        let story = &self.state.story;
        let start = story.len().saturating_sub(CONTEXT_STORY_LINES);
        StoryContext {
            recent_story: story[start..].iter().map(ToString::to_string).collect(),
            character,
            inventory: self.state.inventory.clone(),
            location: self.state.location.clone(),
            recent_events: self.state.recent_events.entries().to_vec(),
        }
    }
}
