//! Pairing outlook between archetypes.

use serde::Serialize;

use crate::domain::scoring::Archetype;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompatibilityLevel {
    Synergy,
    Complementary,
    Neutral,
    Friction,
    /// The user's own archetype.
    #[serde(rename = "self")]
    SelfMatch,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Compatibility {
    pub archetype: Archetype,
    pub short_name: &'static str,
    pub level: CompatibilityLevel,
    pub rating: &'static str,
    pub description: &'static str,
}

fn pairing(
    user: Archetype,
    other: Archetype,
) -> (CompatibilityLevel, &'static str, &'static str) {
    use Archetype::*;
    use CompatibilityLevel::*;

    match (user, other) {
        (DssI, DssI) => (Synergy, "High Synergy", "Shared analytical rigor enables deep technical collaboration"),
        (DssI, DssII) => (Complementary, "Complementary", "Your precision grounds their creativity; their vision expands your scope"),
        (DssI, DssIII) => (Synergy, "High Synergy", "They match your rigor while adding conceptual depth"),
        (DssI, DssIV) => (Neutral, "Mentorship", "You can guide their analytical development effectively"),

        (DssII, DssI) => (Complementary, "Complementary", "Their rigor validates your insights; you push them beyond convention"),
        (DssII, DssII) => (Synergy, "High Synergy", "Rapid creative amplification; ideas build on ideas"),
        (DssII, DssIII) => (Synergy, "High Synergy", "They translate your concepts into implementable frameworks"),
        (DssII, DssIV) => (Neutral, "Mentorship", "You can nurture their conceptual development"),

        (DssIII, DssI) => (Synergy, "High Synergy", "Strong analytical partnership; you add conceptual range to their precision"),
        (DssIII, DssII) => (Synergy, "High Synergy", "You implement their visions while expanding them systematically"),
        (DssIII, DssIII) => (Complementary, "Powerful", "Rare pairing - mutual amplification across all dimensions"),
        (DssIII, DssIV) => (Neutral, "Mentorship", "Ideal mentor role; you model integrated cognitive development"),

        (DssIV, DssI) => (Neutral, "Learning", "Opportunity to develop analytical skills through collaboration"),
        (DssIV, DssII) => (Neutral, "Learning", "Exposure to creative reframing expands your conceptual range"),
        (DssIV, DssIII) => (Complementary, "Growth", "Ideal learning partner; models integrated capability you can develop"),
        (DssIV, DssIV) => (Friction, "Limited", "Similar limitations; seek diverse partnerships for growth"),
    }
}

/// Outlook for `user` paired with each archetype, in archetype order.
///
/// The user's own archetype is reported as a self-match.
pub fn compatibility(user: Archetype) -> Vec<Compatibility> {
    Archetype::ALL
        .iter()
        .map(|&other| {
            let (level, rating, description) = if other == user {
                (CompatibilityLevel::SelfMatch, "You", "Your cognitive architecture")
            } else {
                pairing(user, other)
            };
            Compatibility {
                archetype: other,
                short_name: other.short_name(),
                level,
                rating,
                description,
            }
        })
        .collect()
}
