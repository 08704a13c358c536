//! Narrative response engine for StoryForge.
//!
//! Classifies free-text player actions into keyword categories, selects a
//! canned [`StoryResponse`] from the category's pool, and optionally appends
//! a location flavor line. There is no real AI here: a lookup table with
//! seeded randomness stands where a remote backend would go, behind the
//! [`ResponseSource`] boundary.

/// Action categories and the ordered keyword classifier.
pub mod category;
/// The per-request context snapshot handed to the engine.
pub mod context;
/// The seeded canned-response engine.
pub mod narrator;
/// Response values, errors, and the backend boundary trait.
pub mod response;
/// Static response templates and location flavor lines.
pub mod tables;

/// Re-export classification types.
pub use category::{ActionCategory, classify};
/// Re-export context types.
pub use context::{CONTEXT_STORY_LINES, StoryContext};
/// Re-export the engine.
pub use narrator::Narrator;
/// Re-export response types.
pub use response::{NarrationError, ResponseSource, StoryResponse};
