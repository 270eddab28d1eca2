//! Full presentation-ready report derived from a profile.

use serde::Serialize;

use super::{
    cognitive_range, compatibility, domain_fit, interpret, CognitiveRange, Compatibility,
    DomainFit, Interpretation, Profile,
};
use crate::domain::questionnaire::{Dimension, Marker, MarkerBand};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerLine {
    pub dimension: Dimension,
    pub marker: Marker,
    pub label: String,
    /// Marker score on the 0-10 display scale.
    pub display_score: f64,
    pub band: MarkerBand,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileReport {
    pub profile: Profile,
    pub archetype_name: &'static str,
    pub archetype_color: &'static str,
    pub interpretation: Interpretation,
    pub domain_fit: DomainFit,
    pub compatibility: Vec<Compatibility>,
    pub cognitive_range: CognitiveRange,
    pub markers: Vec<MarkerLine>,
}

impl ProfileReport {
    /// Derives every interpretive section from the presented scores.
    pub fn from_profile(profile: Profile) -> Self {
        let (ami, cmi, archetype) = (profile.ami, profile.cmi, profile.archetype);

        let markers = Dimension::ALL
            .iter()
            .flat_map(|&dimension| {
                let scores = match dimension {
                    Dimension::Ami => &profile.markers.ami,
                    Dimension::Cmi => &profile.markers.cmi,
                };
                scores.iter().map(move |(marker, &score)| MarkerLine {
                    dimension,
                    marker: marker.clone(),
                    label: marker.label().to_string(),
                    display_score: crate::domain::foundation::round_to(score * 10.0, 1),
                    band: MarkerBand::from_score(score),
                })
            })
            .collect();

        Self {
            archetype_name: archetype.name(),
            archetype_color: archetype.color(),
            interpretation: interpret(ami, cmi, archetype),
            domain_fit: domain_fit(ami, cmi, archetype),
            compatibility: compatibility(archetype),
            cognitive_range: cognitive_range(ami, cmi, profile.age_adjustment.as_ref()),
            markers,
            profile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::{DimensionLikelihood, MarkerBreakdown, TimingSummary};
    use crate::domain::scoring::{estimate_probabilities, Archetype};
    use std::collections::BTreeMap;

    fn profile() -> Profile {
        Profile {
            ami: 8.0,
            cmi: 4.0,
            ami_raw: 8.0,
            cmi_raw: 4.0,
            age_adjustment: None,
            archetype: Archetype::DssI,
            summary: String::new(),
            likelihood: DimensionLikelihood { ami: 0.9, cmi: 0.5 },
            type_probabilities: estimate_probabilities(8.0, 4.0),
            timing: TimingSummary {
                total_ms: 0,
                avg_per_question_ms: 0,
                questions: BTreeMap::new(),
            },
            markers: MarkerBreakdown {
                ami: BTreeMap::from([(Marker::new("first_principles").unwrap(), 0.8)]),
                cmi: BTreeMap::from([(Marker::new("paradox_tolerance").unwrap(), 0.3)]),
            },
        }
    }

    #[test]
    fn report_carries_archetype_metadata() {
        let report = ProfileReport::from_profile(profile());
        assert_eq!(report.archetype_name, "Systematic Analytical");
        assert_eq!(report.interpretation.title, "Systematic Analytical");
        assert_eq!(report.domain_fit.innovation_vector, "Optimization");
        assert_eq!(report.compatibility.len(), 4);
    }

    #[test]
    fn marker_lines_are_labelled_and_banded() {
        let report = ProfileReport::from_profile(profile());
        assert_eq!(report.markers.len(), 2);

        let ami = &report.markers[0];
        assert_eq!(ami.dimension, Dimension::Ami);
        assert_eq!(ami.label, "First Principles Derivation");
        assert_eq!(ami.display_score, 8.0);
        assert_eq!(ami.band, MarkerBand::High);

        assert_eq!(report.markers[1].band, MarkerBand::Low);
    }
}
