//! Core types for StoryForge: the character model, the game state, and the
//! pure reducer that advances it.
//!
//! This crate is independent of the narrative engine and of any persistence
//! or view layer. A [`GameState`] is advanced exclusively through
//! [`GameState::apply`], one [`GameAction`] at a time; every transition is
//! a total function of `(state, action)` with no side effects.

/// Reducer actions and the transition function.
pub mod action;
/// Character classes, stats, and creation validation.
pub mod character;
/// Error types used throughout the crate.
pub mod error;
/// The game state value and its constituent logs.
pub mod state;

/// Re-export reducer types.
pub use action::GameAction;
/// Re-export character types.
pub use character::{Character, CharacterClass, Stats};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export state types.
pub use state::{GameState, RecentEvents, StoryLine};
