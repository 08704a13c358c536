//! The reducer: every state change is one [`GameAction`] applied through
//! [`GameState::apply`].

use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::state::{GameState, StoryLine};

/// A single state transition.
///
/// Payloads are validated by the caller (e.g. [`Character::new`] runs before
/// `SetCharacter` is dispatched); the reducer itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    /// Replace the character.
    SetCharacter(Character),
    /// Append an item to the inventory (no dedup, no cap).
    AddInventoryItem(String),
    /// Remove **all** occurrences of the named item. No-op when absent.
    RemoveInventoryItem(String),
    /// Replace the current location unconditionally.
    SetLocation(String),
    /// Append one line to the story log.
    AppendStory(StoryLine),
    /// Prepend an event to the recent-event log, evicting past the cap.
    AddEvent(String),
    /// Replace the loading flag.
    SetLoading(bool),
    /// Mark the game as started.
    StartGame,
    /// Replace the entire state with the default state.
    ResetGame,
    /// Replace the entire state with the supplied snapshot verbatim.
    LoadGame(GameState),
}

impl GameState {
    /// Apply one action, returning the next state.
    ///
    /// Total over all inputs: no transition fails, and none observes
    /// anything beyond `(self, action)`. Side effects such as persistence
    /// live in the orchestrating layer.
    #[must_use]
    pub fn apply(mut self, action: GameAction) -> GameState {
        match action {
            GameAction::SetCharacter(character) => {
                self.character = Some(character);
                self
            }
            GameAction::AddInventoryItem(item) => {
                self.inventory.push(item);
                self
            }
            GameAction::RemoveInventoryItem(item) => {
                self.inventory.retain(|i| *i != item);
                self
            }
            GameAction::SetLocation(location) => {
                self.location = location;
                self
            }
            GameAction::AppendStory(line) => {
                self.story.push(line);
                self
            }
            GameAction::AddEvent(event) => {
                self.recent_events.push(event);
                self
            }
            GameAction::SetLoading(loading) => {
                self.is_loading = loading;
                self
            }
            GameAction::StartGame => {
                self.game_started = true;
                self
            }
            GameAction::ResetGame => GameState::default(),
            GameAction::LoadGame(state) => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::CharacterClass;
    use crate::state::RECENT_EVENT_CAP;

    fn aria() -> Character {
        Character::new("Aria", CharacterClass::Mage).unwrap()
    }

    #[test]
    fn set_character_marks_created() {
        let state = GameState::default().apply(GameAction::SetCharacter(aria()));
        assert!(state.has_character());
        assert_eq!(state.character.unwrap().name, "Aria");
    }

    #[test]
    fn inventory_appends_with_duplicates() {
        let state = GameState::default()
            .apply(GameAction::AddInventoryItem("Torch".to_string()))
            .apply(GameAction::AddInventoryItem("Torch".to_string()))
            .apply(GameAction::AddInventoryItem("Rope".to_string()));
        assert_eq!(state.inventory, ["Torch", "Torch", "Rope"]);
    }

    #[test]
    fn remove_strips_every_occurrence() {
        let state = GameState::default()
            .apply(GameAction::AddInventoryItem("Torch".to_string()))
            .apply(GameAction::AddInventoryItem("Rope".to_string()))
            .apply(GameAction::AddInventoryItem("Torch".to_string()))
            .apply(GameAction::RemoveInventoryItem("Torch".to_string()));
        assert_eq!(state.inventory, ["Rope"]);
    }

    #[test]
    fn remove_absent_item_is_noop() {
        let state = GameState::default()
            .apply(GameAction::AddInventoryItem("Rope".to_string()))
            .apply(GameAction::RemoveInventoryItem("Torch".to_string()));
        assert_eq!(state.inventory, ["Rope"]);
    }

    #[test]
    fn set_location_replaces() {
        let state = GameState::default()
            .apply(GameAction::SetLocation("Mage Tower".to_string()))
            .apply(GameAction::SetLocation("Grand Hall".to_string()));
        assert_eq!(state.location, "Grand Hall");
    }

    #[test]
    fn story_appends_in_order() {
        let state = GameState::default()
            .apply(GameAction::AppendStory(StoryLine::Player(
                "look".to_string(),
            )))
            .apply(GameAction::AppendStory(StoryLine::Narration(
                "You look.".to_string(),
            )));
        assert_eq!(state.story.len(), 2);
        assert_eq!(state.story[0].to_string(), "> look");
        assert_eq!(state.story[1].to_string(), "You look.");
    }

    #[test]
    fn events_stay_capped_through_actions() {
        let mut state = GameState::default();
        for i in 0..20 {
            state = state.apply(GameAction::AddEvent(format!("event {i}")));
            assert!(state.recent_events.len() <= RECENT_EVENT_CAP);
        }
        assert_eq!(state.recent_events.entries()[0], "event 19");
        assert_eq!(state.recent_events.entries()[RECENT_EVENT_CAP - 1], "event 15");
    }

    #[test]
    fn loading_and_start_flags() {
        let state = GameState::default()
            .apply(GameAction::SetLoading(true))
            .apply(GameAction::StartGame);
        assert!(state.is_loading);
        assert!(state.game_started);

        let state = state.apply(GameAction::SetLoading(false));
        assert!(!state.is_loading);
    }

    #[test]
    fn reset_restores_default_regardless_of_history() {
        let state = GameState::default()
            .apply(GameAction::SetCharacter(aria()))
            .apply(GameAction::SetLocation("Mage Tower".to_string()))
            .apply(GameAction::AddInventoryItem("Silver Key".to_string()))
            .apply(GameAction::AddEvent("Found Silver Key".to_string()))
            .apply(GameAction::StartGame)
            .apply(GameAction::ResetGame);
        assert_eq!(state, GameState::default());
    }

    #[test]
    fn load_replaces_verbatim() {
        let snapshot = GameState::default()
            .apply(GameAction::SetCharacter(aria()))
            .apply(GameAction::SetLocation("Hidden Garden".to_string()))
            .apply(GameAction::StartGame);

        let state = GameState::default()
            .apply(GameAction::AddInventoryItem("Rope".to_string()))
            .apply(GameAction::LoadGame(snapshot.clone()));
        assert_eq!(state, snapshot);
    }
}
