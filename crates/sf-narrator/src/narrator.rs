//! The canned narrative response engine.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::category::classify;
use crate::context::StoryContext;
use crate::response::{NarrationError, ResponseSource, StoryResponse};
use crate::tables::{location_flavor, templates_for};

/// Threshold for the location flavor draw.
///
/// A uniform draw strictly above this value (~30% of draws) appends a flavor
/// line to the narration.
pub const FLAVOR_THRESHOLD: f64 = 0.7;

/// The canned response engine.
///
/// Stateless across calls apart from its RNG: all history arrives fresh in
/// the [`StoryContext`]. The seed makes pool selection and the flavor draw
/// reproducible.
#[derive(Debug)]
pub struct Narrator {
    rng: StdRng,
}

impl Narrator {
    /// Create a narrator with a seeded RNG.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Produce a response for a player action.
    ///
    /// Classification is deterministic; pool selection is uniform over the
    /// category's templates. When the context's location has flavor lines,
    /// an independent draw may append one to the text, separated by a blank
    /// line. Flavor never alters the structured deltas.
    pub fn respond(&mut self, action: &str, context: &StoryContext) -> StoryResponse {
        let templates = templates_for(classify(action));
        let mut response = templates[self.rng.random_range(0..templates.len())].instantiate();

        if let Some(lines) = location_flavor(&context.location) {
            if self.rng.random::<f64>() > FLAVOR_THRESHOLD {
                let line = lines[self.rng.random_range(0..lines.len())];
                response.text.push_str("\n\n");
                response.text.push_str(line);
            }
        }

        response
    }
}

impl ResponseSource for Narrator {
    fn generate(
        &mut self,
        action: &str,
        context: &StoryContext,
    ) -> Result<StoryResponse, NarrationError> {
        Ok(self.respond(action, context))
    }
}
