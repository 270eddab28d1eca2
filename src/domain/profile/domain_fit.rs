//! Domains, innovation mode and productivity pattern per archetype.

use serde::Serialize;

use crate::domain::scoring::{Archetype, DOMINANCE_THRESHOLD};

/// Rhythm of productive output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductivityKind {
    Deep,
    Burst,
    Variable,
    Steady,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductivityPattern {
    pub kind: ProductivityKind,
    /// Relative intensity, 0-100.
    pub percent: u8,
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainFit {
    pub breakthrough: Vec<&'static str>,
    pub high_fit: Vec<&'static str>,
    pub innovation_vector: &'static str,
    pub innovation_description: &'static str,
    pub productivity: ProductivityPattern,
}

fn base_fit(archetype: Archetype) -> DomainFit {
    match archetype {
        Archetype::DssI => DomainFit {
            breakthrough: vec![
                "Formal Verification",
                "Compiler Design",
                "Cryptography",
                "Mathematical Proof",
            ],
            high_fit: vec![
                "Systems Engineering",
                "Quantitative Finance",
                "Algorithm Design",
                "Security Analysis",
                "Scientific Computing",
            ],
            innovation_vector: "Optimization",
            innovation_description:
                "Breakthrough via rigorous refinement - finding the provably optimal solution",
            productivity: ProductivityPattern {
                kind: ProductivityKind::Deep,
                percent: 85,
                label: "Deep Work",
                description: "Peak output in extended uninterrupted sessions. Struggles with frequent context switches.",
            },
        },
        Archetype::DssII => DomainFit {
            breakthrough: vec![
                "Paradigm Shifts",
                "New Market Creation",
                "Artistic Innovation",
                "Framework Design",
            ],
            high_fit: vec![
                "Strategic Consulting",
                "Product Vision",
                "Research Direction",
                "Creative Direction",
                "Venture Capital",
            ],
            innovation_vector: "Disruption",
            innovation_description:
                "Breakthrough via reconceptualization - seeing what others cannot imagine",
            productivity: ProductivityPattern {
                kind: ProductivityKind::Burst,
                percent: 70,
                label: "Burst Creative",
                description: "High-intensity creative bursts followed by integration periods. Non-linear output pattern.",
            },
        },
        Archetype::DssIII => DomainFit {
            breakthrough: vec![
                "Cross-Domain Synthesis",
                "First-Principles Innovation",
                "Systems Reconceptualization",
                "Novel Theory",
            ],
            high_fit: vec![
                "Research Leadership",
                "Technical Architecture",
                "Deep Tech Founding",
                "Complex Problem Solving",
                "Interdisciplinary Science",
            ],
            innovation_vector: "Synthesis",
            innovation_description:
                "Breakthrough via integration - combining rigorous analysis with conceptual leaps",
            productivity: ProductivityPattern {
                kind: ProductivityKind::Variable,
                percent: 80,
                label: "Adaptive",
                description: "Flexes between deep analytical work and creative exploration. Optimizes mode to problem type.",
            },
        },
        Archetype::DssIV => DomainFit {
            breakthrough: vec![
                "Incremental Improvement",
                "Process Refinement",
                "Practical Application",
            ],
            high_fit: vec![
                "Implementation",
                "Operations",
                "Quality Assurance",
                "Documentation",
                "Support Engineering",
            ],
            innovation_vector: "Iteration",
            innovation_description:
                "Progress via systematic improvement - steady refinement over time",
            productivity: ProductivityPattern {
                kind: ProductivityKind::Steady,
                percent: 65,
                label: "Steady State",
                description: "Consistent output. Benefits from structured environments and clear direction.",
            },
        },
    }
}

/// Domain fit for a profile. Integrated profiles with a dominance-sized
/// gap get breakthrough domains skewed toward their leading dimension.
pub fn domain_fit(ami: f64, cmi: f64, archetype: Archetype) -> DomainFit {
    let mut fit = base_fit(archetype);
    let delta = cmi - ami;

    if archetype == Archetype::DssIII && delta.abs() >= DOMINANCE_THRESHOLD {
        if delta > 0.0 {
            fit.breakthrough = vec![
                "Paradigm Innovation",
                "Theoretical Frameworks",
                "Conceptual Architecture",
                "Vision-Driven R&D",
            ];
            fit.high_fit.insert(0, "Strategic Research");
        } else {
            fit.breakthrough = vec![
                "Formal Innovation",
                "Rigorous Synthesis",
                "Systematic Breakthroughs",
                "Mathematical Unification",
            ];
            fit.high_fit.insert(0, "Technical Research Lead");
        }
    }
    fit
}
