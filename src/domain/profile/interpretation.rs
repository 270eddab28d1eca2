//! Narrative interpretation of an archetype.

use serde::Serialize;

use super::summary::signed_delta;
use crate::domain::scoring::{Archetype, DOMINANCE_THRESHOLD};

/// Narrative sections for one profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interpretation {
    pub title: &'static str,
    pub core: &'static str,
    pub strengths: &'static str,
    pub approach: &'static str,
    pub growth: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dominance_note: Option<String>,
}

struct Narrative {
    core: &'static str,
    strengths: &'static str,
    approach: &'static str,
    growth: &'static str,
}

fn narrative(archetype: Archetype) -> Narrative {
    match archetype {
        Archetype::DssI => Narrative {
            core: "Your cognitive architecture prioritizes analytical mechanics - the rigorous manipulation of formal systems, symbolic reasoning, and structured problem decomposition.",
            strengths: "You excel at detecting inconsistencies, tracing error propagation, and constructing formal proofs. Your thinking naturally gravitates toward precision, boundary checking, and algorithmic clarity.",
            approach: "Problems are best approached through systematic breakdown, first-principles derivation, and careful verification. You build understanding through rigorous analysis rather than intuitive leaps.",
            growth: "Consider developing conceptual fluidity - the ability to shift reference frames, tolerate productive ambiguity, and recognize emergent patterns that resist formal capture.",
        },
        Archetype::DssII => Narrative {
            core: "Your cognitive architecture prioritizes conceptual morphogenesis - the generation of novel frameworks, cross-domain transfer, and paradigm-shifting insight.",
            strengths: "You excel at reframing problems, dissolving apparent boundaries between concepts, and recognizing deep structural analogies across disparate domains. Paradox is generative for you rather than problematic.",
            approach: "Problems are best approached through metaphor, abstraction-level shifting, and ontological creativity. You build understanding through pattern recognition and conceptual compression.",
            growth: "Consider developing analytical rigor - the ability to verify intuitions formally, trace implications systematically, and ground creative insights in defensible logical structure.",
        },
        Archetype::DssIII => Narrative {
            core: "Your cognitive architecture integrates both analytical mechanics and conceptual morphogenesis - enabling rigorous analysis combined with creative reconceptualization.",
            strengths: "You can both generate novel frameworks AND verify them formally. This dual capacity allows paradigm-shifting insight grounded in systematic validation - the signature of breakthrough thinking.",
            approach: "Problems yield to iterative cycles: creative reframing followed by rigorous testing, conceptual leaps verified through formal analysis. You can operate at multiple abstraction levels while maintaining logical coherence.",
            growth: "Your integrated architecture is rare. The key development path is deepening both capacities rather than allowing one to atrophy. Maintain deliberate practice in both analytical rigor and conceptual creativity.",
        },
        Archetype::DssIV => Narrative {
            core: "Your cognitive architecture shows balanced development potential across both analytical and conceptual dimensions.",
            strengths: "You have flexibility - neither dimension dominates, which means neither constrains the other. This creates openness to multiple problem-solving approaches.",
            approach: "Focus on deliberate development of both capacities. Analytical skills build through practice with formal systems, proofs, and systematic verification. Conceptual skills build through cross-domain exploration and creative reframing exercises.",
            growth: "Identify which dimension feels more natural and invest in strengthening the complementary one. The goal is integrated capability - being able to both generate novel ideas AND rigorously evaluate them.",
        },
    }
}

/// Builds the narrative for `archetype`, adding a dominance note when
/// the scores differ by at least the dominance threshold.
pub fn interpret(ami: f64, cmi: f64, archetype: Archetype) -> Interpretation {
    let delta = cmi - ami;
    let dominance_note = (delta.abs() >= DOMINANCE_THRESHOLD).then(|| {
        let body = if delta > 0.0 {
            "Your CMI significantly exceeds AMI, indicating strong conceptual orientation with adequate analytical foundation."
        } else {
            "Your AMI significantly exceeds CMI, indicating strong analytical orientation with adequate conceptual foundation."
        };
        format!("Dominance pattern (Delta={}): {}", signed_delta(delta), body)
    });

    let n = narrative(archetype);
    Interpretation {
        title: archetype.name(),
        core: n.core,
        strengths: n.strengths,
        approach: n.approach,
        growth: n.growth,
        dominance_note,
    }
}
