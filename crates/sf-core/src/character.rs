//! Character model: classes, stats, and creation validation.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Minimum character name length after trimming.
pub const MIN_NAME_LEN: usize = 2;

/// The four character attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Physical power.
    pub strength: u32,
    /// Agility and reflexes.
    pub dexterity: u32,
    /// Reasoning and arcane aptitude.
    pub intelligence: u32,
    /// Presence and persuasion.
    pub charisma: u32,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            strength: 10,
            dexterity: 10,
            intelligence: 10,
            charisma: 10,
        }
    }
}

/// The playable character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacterClass {
    /// Front-line fighter. Begins at the Training Grounds.
    Warrior,
    /// Spellcaster. Begins at the Mage Tower.
    Mage,
    /// Stealth specialist. Begins at the Shadowy Alley.
    Rogue,
}

impl CharacterClass {
    /// Parse a class from a user-supplied label (case-insensitive).
    pub fn parse(s: &str) -> CoreResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "warrior" => Ok(Self::Warrior),
            "mage" => Ok(Self::Mage),
            "rogue" => Ok(Self::Rogue),
            other => Err(CoreError::UnknownClass(other.to_string())),
        }
    }

    /// All classes in display order.
    pub fn all() -> &'static [Self] {
        &[Self::Warrior, Self::Mage, Self::Rogue]
    }

    /// Starting attribute spread for this class.
    pub fn starting_stats(self) -> Stats {
        match self {
            Self::Warrior => Stats {
                strength: 14,
                dexterity: 12,
                intelligence: 8,
                charisma: 10,
            },
            Self::Mage => Stats {
                strength: 8,
                dexterity: 10,
                intelligence: 14,
                charisma: 12,
            },
            Self::Rogue => Stats {
                strength: 10,
                dexterity: 14,
                intelligence: 12,
                charisma: 8,
            },
        }
    }

    /// The location where a fresh character of this class begins.
    pub fn starting_location(self) -> &'static str {
        match self {
            Self::Warrior => "Training Grounds",
            Self::Mage => "Mage Tower",
            Self::Rogue => "Shadowy Alley",
        }
    }
}

impl std::fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warrior => write!(f, "Warrior"),
            Self::Mage => write!(f, "Mage"),
            Self::Rogue => write!(f, "Rogue"),
        }
    }
}

/// A player character. Immutable once created except by full replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Character name (non-empty).
    pub name: String,
    /// Character class.
    pub class: CharacterClass,
    /// Attribute scores.
    pub stats: Stats,
}

impl Character {
    /// Create a character with the class's starting stats.
    ///
    /// The name is trimmed and must be at least [`MIN_NAME_LEN`] characters.
    pub fn new(name: impl Into<String>, class: CharacterClass) -> CoreResult<Self> {
        let name = name.into().trim().to_string();
        if name.chars().count() < MIN_NAME_LEN {
            return Err(CoreError::NameTooShort);
        }
        Ok(Self {
            name,
            class,
            stats: class.starting_stats(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_labels() {
        assert_eq!(
            CharacterClass::parse("warrior").unwrap(),
            CharacterClass::Warrior
        );
        assert_eq!(CharacterClass::parse("MAGE").unwrap(), CharacterClass::Mage);
        assert_eq!(
            CharacterClass::parse("  rogue ").unwrap(),
            CharacterClass::Rogue
        );
        assert!(CharacterClass::parse("bard").is_err());
        assert!(CharacterClass::parse("").is_err());
    }

    #[test]
    fn display_labels() {
        assert_eq!(CharacterClass::Warrior.to_string(), "Warrior");
        assert_eq!(CharacterClass::Mage.to_string(), "Mage");
        assert_eq!(CharacterClass::Rogue.to_string(), "Rogue");
    }

    #[test]
    fn starting_stats_per_class() {
        let warrior = CharacterClass::Warrior.starting_stats();
        assert_eq!(warrior.strength, 14);
        assert_eq!(warrior.intelligence, 8);

        let mage = CharacterClass::Mage.starting_stats();
        assert_eq!(mage.intelligence, 14);
        assert_eq!(mage.strength, 8);

        let rogue = CharacterClass::Rogue.starting_stats();
        assert_eq!(rogue.dexterity, 14);
        assert_eq!(rogue.charisma, 8);
    }

    #[test]
    fn starting_locations() {
        assert_eq!(
            CharacterClass::Warrior.starting_location(),
            "Training Grounds"
        );
        assert_eq!(CharacterClass::Mage.starting_location(), "Mage Tower");
        assert_eq!(CharacterClass::Rogue.starting_location(), "Shadowy Alley");
    }

    #[test]
    fn default_stats_are_all_ten() {
        let stats = Stats::default();
        assert_eq!(stats.strength, 10);
        assert_eq!(stats.dexterity, 10);
        assert_eq!(stats.intelligence, 10);
        assert_eq!(stats.charisma, 10);
    }

    #[test]
    fn character_creation_trims_and_validates() {
        let aria = Character::new("  Aria  ", CharacterClass::Mage).unwrap();
        assert_eq!(aria.name, "Aria");
        assert_eq!(aria.stats, CharacterClass::Mage.starting_stats());

        assert!(matches!(
            Character::new("A", CharacterClass::Mage),
            Err(CoreError::NameTooShort)
        ));
        assert!(matches!(
            Character::new("   ", CharacterClass::Warrior),
            Err(CoreError::NameTooShort)
        ));
    }

    #[test]
    fn serde_roundtrip() {
        let c = Character::new("Aria", CharacterClass::Mage).unwrap();
        let json = serde_json::to_string(&c).unwrap();
        let c2: Character = serde_json::from_str(&json).unwrap();
        assert_eq!(c, c2);
    }
}
