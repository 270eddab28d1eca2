//! One-line human-readable profile summary.

use crate::domain::scoring::Archetype;

/// |delta| at or above which a profile reads as dominant.
pub const SUMMARY_DOMINANCE_DELTA: f64 = 2.0;

/// Verbal level for a 0-10 dimension score.
pub fn level_label(score: f64) -> &'static str {
    if score >= 7.0 {
        "strong"
    } else if score >= 4.0 {
        "moderate"
    } else {
        "developing"
    }
}

/// Signed delta with an explicit `+` for non-negative values.
pub fn signed_delta(delta: f64) -> String {
    if delta >= 0.0 {
        format!("+{:.1}", delta)
    } else {
        format!("{:.1}", delta)
    }
}

/// e.g. `Integrated Polymathic architecture. strong AMI (8.0), moderate CMI (6.0). Delta=-2.0 (AMI-dominant).`
pub fn summarize(ami: f64, cmi: f64, archetype: Archetype) -> String {
    let delta = cmi - ami;
    let dominance = if delta.abs() >= SUMMARY_DOMINANCE_DELTA {
        if delta > 0.0 {
            "CMI-dominant"
        } else {
            "AMI-dominant"
        }
    } else {
        "balanced"
    };

    format!(
        "{} architecture. {} AMI ({:.1}), {} CMI ({:.1}). Delta={} ({}).",
        archetype.name(),
        level_label(ami),
        ami,
        level_label(cmi),
        cmi,
        signed_delta(delta),
        dominance
    )
}
