//! Canned response templates and location flavor lines.
//!
//! Response pools are keyed by [`ActionCategory`]; each pool holds two
//! templates, plus two defaults for unclassified actions. Templates carry
//! their structured deltas (destination, items gained, items lost) alongside
//! the narration text. Flavor lines are cosmetic only and never carry
//! deltas.

use crate::category::ActionCategory;
use crate::response::StoryResponse;

/// A canned response template.
#[derive(Debug, Clone, Copy)]
pub struct ResponseTemplate {
    /// Narration text.
    pub text: &'static str,
    /// Destination location, if the response travels.
    pub new_location: Option<&'static str>,
    /// Item names gained, in order.
    pub items_gained: &'static [&'static str],
    /// Item names lost, in order.
    pub items_lost: &'static [&'static str],
}

impl ResponseTemplate {
    /// Materialize the template into an owned response.
    pub fn instantiate(&self) -> StoryResponse {
        StoryResponse {
            text: self.text.to_string(),
            new_location: self.new_location.map(str::to_string),
            items_gained: self.items_gained.iter().map(|s| (*s).to_string()).collect(),
            items_lost: self.items_lost.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

/// Responses for "look" actions.
pub const LOOK_RESPONSES: &[ResponseTemplate] = &[
    ResponseTemplate {
        text: "You scan your surroundings carefully. The stone walls are adorned with faded tapestries depicting ancient battles. A torch flickers nearby, casting dancing shadows across the floor. You notice a small wooden chest in the corner that you hadn't seen before.",
        new_location: None,
        items_gained: &["Small Wooden Chest"],
        items_lost: &[],
    },
    ResponseTemplate {
        text: "The room is dimly lit by shafts of light filtering through cracks in the ceiling. Dust particles dance in the beams. The air smells of old parchment and something vaguely metallic. Near the eastern wall, you spot a glint of metal: a silver key half-buried in debris.",
        new_location: None,
        items_gained: &["Silver Key"],
        items_lost: &[],
    },
];

/// Responses for "explore" actions.
pub const EXPLORE_RESPONSES: &[ResponseTemplate] = &[
    ResponseTemplate {
        text: "You venture deeper into the unexplored passageway. The corridor twists and turns, eventually opening into a grand hall with towering columns. Crystal chandeliers hang overhead, somehow still glowing with magical light after all these years. At the far end, you see a statue holding what appears to be a magical orb.",
        new_location: Some("Grand Hall"),
        items_gained: &["Magical Orb"],
        items_lost: &[],
    },
    ResponseTemplate {
        text: "Your exploration leads you to a lush garden hidden within stone walls. Despite being underground, plants thrive here, fed by an unknown magical source. Glowing mushrooms provide soft illumination, and in the center bubbles a small spring. This place feels untouched by the corruption that plagues the outer world.",
        new_location: Some("Hidden Garden"),
        items_gained: &[],
        items_lost: &[],
    },
];

/// Responses for "talk" actions.
pub const TALK_RESPONSES: &[ResponseTemplate] = &[
    ResponseTemplate {
        text: "\"Well met, traveler,\" says the weathered old man. His eyes betray a wisdom beyond his apparent years. \"These are dark times for our realm. The Crimson Crown has been stolen from the royal vault, and with it, the magical barrier protecting our lands weakens daily. If you seek purpose, perhaps this quest would suit someone of your talents.\"",
        new_location: None,
        items_gained: &[],
        items_lost: &[],
    },
    ResponseTemplate {
        text: "The hooded figure leans forward, speaking in hushed tones. \"Not all who wander these parts come with good intentions. Watch for the sign of the serpent. Those who bear it serve the Shadow Guild. They seek the ancient artifacts to perform a ritual that would plunge our world into eternal darkness. I can offer you this charm for protection.\"",
        new_location: None,
        items_gained: &["Protection Charm"],
        items_lost: &[],
    },
];

/// Responses for "fight" actions.
pub const FIGHT_RESPONSES: &[ResponseTemplate] = &[
    ResponseTemplate {
        text: "You ready your weapon as the creature lunges toward you. Its claws slash through the air, but you deftly sidestep the attack. Countering with a strike of your own, you catch it across its flank. The beast howls in pain but doesn't retreat. Instead, its eyes glow with a newfound fury as it prepares for another assault. You'll need to be more careful with your next move.",
        new_location: None,
        items_gained: &[],
        items_lost: &[],
    },
    ResponseTemplate {
        text: "The bandit draws his blade with a sneer. \"Bad choice, friend.\" He's quick, but you're quicker. As he lunges, you parry his attack and deliver a decisive blow. He stumbles backward, clutching his wound. \"Enough! Enough...\" he gasps, dropping his weapon. \"Take this and spare me. It's worth more than my life anyway.\" He tosses a jeweled pendant at your feet before fleeing into the shadows.",
        new_location: None,
        items_gained: &["Jeweled Pendant"],
        items_lost: &[],
    },
];

/// Responses for "use" actions.
pub const USE_RESPONSES: &[ResponseTemplate] = &[
    ResponseTemplate {
        text: "You carefully apply the healing potion to your wounds. The liquid tingles as it makes contact with your skin, and you watch in amazement as your injuries begin to close before your eyes. The empty vial crumbles to dust; clearly, its magic was single-use.",
        new_location: None,
        items_gained: &[],
        items_lost: &["Healing Potion"],
    },
    ResponseTemplate {
        text: "You insert the Silver Key into the ancient lock. It fits perfectly. With a turn, you hear a series of clicks and whirrs as long-dormant mechanisms spring to life. The door swings open silently, revealing a treasury that hasn't been disturbed for centuries. Golden coins and precious gems glitter in the light of your torch.",
        new_location: Some("Ancient Treasury"),
        items_gained: &["Gold Coins", "Ruby Necklace"],
        items_lost: &["Silver Key"],
    },
];

/// Responses for actions that match no keyword group.
pub const DEFAULT_RESPONSES: &[ResponseTemplate] = &[
    ResponseTemplate {
        text: "You consider your options carefully. The path ahead isn't clear, but you sense that important decisions await. Your instincts have guided you well so far; perhaps they will continue to serve you in the trials to come.",
        new_location: None,
        items_gained: &[],
        items_lost: &[],
    },
    ResponseTemplate {
        text: "Time passes as you contemplate your next move. The world around you continues its subtle movements: dust motes floating in sunbeams, the distant call of birds, the rustle of leaves in a gentle breeze. These quiet moments are rare in an adventurer's life.",
        new_location: None,
        items_gained: &[],
        items_lost: &[],
    },
];

/// The response pool for a classification result.
pub fn templates_for(category: Option<ActionCategory>) -> &'static [ResponseTemplate] {
    match category {
        Some(ActionCategory::Look) => LOOK_RESPONSES,
        Some(ActionCategory::Explore) => EXPLORE_RESPONSES,
        Some(ActionCategory::Talk) => TALK_RESPONSES,
        Some(ActionCategory::Fight) => FIGHT_RESPONSES,
        Some(ActionCategory::Use) => USE_RESPONSES,
        None => DEFAULT_RESPONSES,
    }
}

/// Location flavor lines, keyed by location name.
const LOCATION_FLAVOR: &[(&str, &[&str])] = &[
    (
        "Training Grounds",
        &[
            "The clash of steel rings out as warriors practice their combat skills. Seasoned veterans shout instructions to new recruits. The smell of sweat and determination fills the air.",
            "Training dummies bear the countless marks of blade strikes and arrow hits. A weapons rack nearby holds an impressive array of practice weapons.",
        ],
    ),
    (
        "Mage Tower",
        &[
            "Arcane symbols glow faintly on the walls, and the air tingles with magical energy. Books and scrolls are stacked haphazardly on tables and shelves.",
            "A crystal orb sits at the center of the room, occasionally pulsing with blue light. Apprentices whisper to each other as they practice minor cantrips in the corners.",
        ],
    ),
    (
        "Shadowy Alley",
        &[
            "The narrow passage between buildings blocks most sunlight, creating a perpetual twilight. Footsteps echo strangely here, sometimes seeming to come from impossible directions.",
            "Cloaked figures conduct business in hushed tones. No one makes eye contact for too long. A secret door is visible to your trained eye, hidden within an ordinary-looking wall.",
        ],
    ),
    (
        "Village Square",
        &[
            "Merchants call out their wares as villagers go about their daily business. The smell of fresh bread wafts from the bakery, while children play games near the central fountain.",
            "Town announcements are posted on a notice board. A group of elders discusses recent events in hushed tones, occasionally glancing at passersby with concern.",
        ],
    ),
    (
        "Grand Hall",
        &[
            "The ceiling soars overhead, supported by intricately carved columns. Faded banners of ancient houses hang along the walls, telling stories of forgotten nobility.",
            "Your footsteps echo in the vast space. A raised dais at the far end once held a throne, now missing. Something about this place feels important, as if history itself watches you.",
        ],
    ),
    (
        "Hidden Garden",
        &[
            "Impossibly, butterflies flit between exotic flowers that should not be able to grow underground. The air is clean and fresh, a stark contrast to the musty corridors outside.",
            "A small stone bench sits beside a bubbling spring. The water appears to glow slightly, and you sense it might have healing properties. This peaceful sanctuary feels untouched by time.",
        ],
    ),
    (
        "Ancient Treasury",
        &[
            "Piles of gold coins reflect your torchlight, creating a dazzling display. Gemstones of every color imaginable are scattered among artifacts of obvious historical significance.",
            "Despite the wealth surrounding you, you feel uneasy. Many of these treasures have magical auras, and disturbing them without understanding their nature could be dangerous.",
        ],
    ),
];

/// Flavor lines for a location, if any are defined.
///
/// Unknown locations are tolerated: callers simply skip the flavor step.
pub fn location_flavor(location: &str) -> Option<&'static [&'static str]> {
    LOCATION_FLAVOR
        .iter()
        .find(|(name, _)| *name == location)
        .map(|(_, lines)| *lines)
}
