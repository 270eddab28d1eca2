//! Profile module - assembly and interpretation of assessment results.
//!
//! - `assembler` - runs the scoring engine and builds the immutable `Profile`
//! - `summary` - one-line verbal summary
//! - `interpretation`, `domain_fit`, `compatibility`, `cognitive_range` -
//!   derived narrative and projections consumed by presentation
//! - `report` - bundles a profile with all derived sections

mod assembler;
mod cognitive_range;
mod compatibility;
mod domain_fit;
mod interpretation;
mod report;
mod summary;

pub use assembler::{
    assemble_profile, AgeAdjustmentDetail, DimensionLikelihood, MarkerBreakdown, Profile,
    ProfileInput, TimingSummary,
};
pub use cognitive_range::{
    cognitive_range, map_to_iq, CognitiveRange, DevelopmentVector, GrowthPotential,
    GROWTH_FACTOR, IQ_CEILING, IQ_FLOOR,
};
pub use compatibility::{compatibility, Compatibility, CompatibilityLevel};
pub use domain_fit::{domain_fit, DomainFit, ProductivityKind, ProductivityPattern};
pub use interpretation::{interpret, Interpretation};
pub use report::{MarkerLine, ProfileReport};
pub use summary::{level_label, summarize};
