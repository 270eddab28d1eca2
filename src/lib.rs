//! DS2 Profile - cognitive-style questionnaire and scoring engine
//!
//! This crate samples a questionnaire from a marker-organized question bank,
//! records answers and per-question timings, and scores the result on two
//! dimensions (AMI and CMI) into an archetype profile.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
