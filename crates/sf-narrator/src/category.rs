//! Action classification.
//!
//! A free-text action is bucketed by substring membership against ordered
//! keyword groups. The order of [`KEYWORD_GROUPS`] is the precedence:
//! an action matching several groups takes the first. Unmatched actions
//! fall back to the default response pool.

use serde::{Deserialize, Serialize};

/// The bucket a free-text player action is classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionCategory {
    /// Inspecting surroundings or objects.
    Look,
    /// Moving into new territory.
    Explore,
    /// Addressing another character.
    Talk,
    /// Violence.
    Fight,
    /// Operating an item or mechanism.
    Use,
}

impl std::fmt::Display for ActionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Look => write!(f, "look"),
            Self::Explore => write!(f, "explore"),
            Self::Talk => write!(f, "talk"),
            Self::Fight => write!(f, "fight"),
            Self::Use => write!(f, "use"),
        }
    }
}

/// Ordered `(category, keywords)` pairs. Evaluation order is the precedence:
/// look > explore > talk > fight > use.
pub const KEYWORD_GROUPS: &[(ActionCategory, &[&str])] = &[
    (ActionCategory::Look, &["look", "examine", "search"]),
    (ActionCategory::Explore, &["explore", "go", "move"]),
    (ActionCategory::Talk, &["talk", "speak", "ask"]),
    (ActionCategory::Fight, &["fight", "attack", "kill"]),
    (ActionCategory::Use, &["use", "open", "activate"]),
];

/// Classify an action string. Returns `None` when no keyword group matches.
///
/// Matching is case-insensitive substring membership: "looking around"
/// matches `look`, and so does any word that merely contains a keyword.
pub fn classify(action: &str) -> Option<ActionCategory> {
    let lower = action.to_lowercase();
    KEYWORD_GROUPS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(category, _)| *category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_keyword_maps_to_its_group() {
        for (category, keywords) in KEYWORD_GROUPS {
            for keyword in *keywords {
                assert_eq!(classify(keyword), Some(*category), "keyword {keyword}");
            }
        }
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(classify("LOOK around"), Some(ActionCategory::Look));
        assert_eq!(classify("Attack the bandit"), Some(ActionCategory::Fight));
    }

    #[test]
    fn first_match_precedence() {
        // Matches both look and talk; look comes first.
        assert_eq!(classify("search and talk"), Some(ActionCategory::Look));
        // Matches both explore and fight; explore comes first.
        assert_eq!(classify("go fight the beast"), Some(ActionCategory::Explore));
        // Matches talk before use.
        assert_eq!(classify("ask him to open it"), Some(ActionCategory::Talk));
    }

    #[test]
    fn unmatched_returns_none() {
        assert_eq!(classify("grab the sword"), None);
        assert_eq!(classify(""), None);
        assert_eq!(classify("dance wildly"), None);
    }

    #[test]
    fn substring_matching_is_broad() {
        // Membership is substring-based, so embedded keywords count.
        assert_eq!(classify("gossip with the guard"), Some(ActionCategory::Explore)); // "go"
        assert_eq!(classify("examine everything"), Some(ActionCategory::Look));
    }
}
