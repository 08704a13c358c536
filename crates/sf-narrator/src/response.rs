//! The response value produced by the engine and the boundary trait a
//! fallible backend would implement.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::context::StoryContext;

/// Errors from a response backend.
///
/// The built-in [`Narrator`](crate::Narrator) never fails; a remote backend
/// implementing [`ResponseSource`] reports its failures here. Callers must
/// apply no state deltas when generation fails.
#[derive(Debug, Error)]
pub enum NarrationError {
    /// The backend could not produce a response.
    #[error("narration backend error: {0}")]
    Backend(String),
}

/// Structured result of one narration request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryResponse {
    /// Narration text, possibly suffixed with a location flavor line.
    pub text: String,
    /// New location to move the player to, if the response travels.
    pub new_location: Option<String>,
    /// Items the player gains, in order.
    pub items_gained: Vec<String>,
    /// Items the player loses, in order.
    pub items_lost: Vec<String>,
}

/// A source of narrative responses.
pub trait ResponseSource {
    /// Produce a response for a free-text player action.
    fn generate(
        &mut self,
        action: &str,
        context: &StoryContext,
    ) -> Result<StoryResponse, NarrationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_roundtrip() {
        let response = StoryResponse {
            text: "You take the key.".to_string(),
            new_location: Some("Grand Hall".to_string()),
            items_gained: vec!["Silver Key".to_string()],
            items_lost: vec![],
        };
        let json = serde_json::to_string(&response).unwrap();
        let response2: StoryResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(response, response2);
    }
}
