//! Trait markers and the two scoring dimensions they roll up into.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::domain::foundation::ValidationError;

/// One of the two primary profile axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// Analytical Mechanics
    #[serde(rename = "AMI")]
    Ami,
    /// Conceptual Morphogenesis
    #[serde(rename = "CMI")]
    Cmi,
}

impl Dimension {
    /// Both dimensions in presentation order.
    pub const ALL: [Dimension; 2] = [Dimension::Ami, Dimension::Cmi];

    /// Long-form name of the dimension.
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Ami => "Analytical Mechanics",
            Dimension::Cmi => "Conceptual Morphogenesis",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Ami => write!(f, "AMI"),
            Dimension::Cmi => write!(f, "CMI"),
        }
    }
}

/// Display labels for the markers shipped with the standard bank.
static MARKER_LABELS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // AMI
        ("symbolic_consistency", "Symbolic Consistency"),
        ("multivariable_manipulation", "Multi-variable Manipulation"),
        ("first_principles", "First Principles Derivation"),
        ("boundary_checking", "Boundary Condition Checking"),
        ("formal_proof_construction", "Formal Proof Construction"),
        ("algorithmic_decomposition", "Algorithmic Decomposition"),
        ("error_propagation", "Error Propagation Tracing"),
        ("symmetry_exploitation", "Symmetry Exploitation"),
        ("logical_consistency", "Logical Consistency Detection"),
        ("quantitative_estimation", "Quantitative Estimation"),
        // CMI
        ("ontology_generation", "Ontology Generation"),
        ("reference_frame_shift", "Reference Frame Shifting"),
        ("paradox_tolerance", "Paradox Tolerance"),
        ("concept_compression", "Concept Compression"),
        ("analogical_transfer", "Analogical Transfer"),
        ("emergence_recognition", "Emergence Recognition"),
        ("abstraction_level_fluidity", "Abstraction Level Fluidity"),
        ("generative_metaphor", "Generative Metaphor"),
        (
            "conceptual_boundary_dissolution",
            "Conceptual Boundary Dissolution",
        ),
        ("problem_space_transformation", "Problem Space Transformation"),
    ])
});

/// Named micro-trait measured by one or more question variants.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Marker(String);

impl Marker {
    /// Creates a marker tag, rejecting blank input.
    pub fn new(tag: impl Into<String>) -> Result<Self, ValidationError> {
        let tag = tag.into();
        if tag.trim().is_empty() {
            return Err(ValidationError::empty_field("marker"));
        }
        Ok(Self(tag))
    }

    /// Returns the raw tag.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-readable label, falling back to the raw tag for unknown markers.
    pub fn label(&self) -> &str {
        MARKER_LABELS
            .get(self.0.as_str())
            .copied()
            .unwrap_or(self.0.as_str())
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Qualitative band for a single marker score in [0,1].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerBand {
    High,
    Medium,
    Low,
}

impl MarkerBand {
    /// Bands a marker score: high at 0.7, medium at 0.4.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.7 {
            Self::High
        } else if score >= 0.4 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}
