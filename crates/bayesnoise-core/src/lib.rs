//! # bayesnoise-core
//!
//! A small probabilistic-reasoning sandbox: Shannon entropy, Bayes-factor
//! scoring, iterative posterior updates, a weighted decision heuristic and a
//! cosine-projection "wave collapse" that reduces a state sequence to one
//! scalar plus diagnostics.
//!
//! ## Quick Start
//!
//! ```
//! use bayesnoise_core::{WaveCollapseSimulator, bayes_factor, categorical_entropy};
//!
//! let h = categorical_entropy(&[1.0, 1.0, 2.0, 2.0]).unwrap();
//! assert!((h - 1.0).abs() < 1e-12);
//!
//! let bf = bayes_factor(&[0.1, 0.2, 0.3, 0.4]).unwrap();
//! assert_eq!(bf.interpretation.to_string(), "anecdotal");
//!
//! let collapsed = WaveCollapseSimulator::default()
//!     .collapse(&[0.1, 0.2, 0.3, 0.4], 0)
//!     .unwrap();
//! assert!((collapsed.collapsed_state - 1.0).abs() < 1e-9);
//! ```
//!
//! ## Architecture
//!
//! Noise → Validation → Entropy → {Bayes scoring, Projection} → Collapse → ResultStore
//!
//! Every scoring entry point validates its sequence first and returns
//! [`AnalyticsError`] instead of propagating NaN. Nothing here renders
//! output; presentation belongs to the caller.

pub mod bayes;
pub mod collapse;
pub mod decision;
pub mod error;
pub mod information;
pub mod noise;
pub mod projection;
pub mod record;
pub mod store;
pub mod timestamp;
pub mod validate;

pub use bayes::{
    BayesFactorResult, EvidenceRecord, HypothesisDistribution, Interpretation, bayes_factor,
    bayesian_update, conditional_probability, high_coherence_prior, joint_probability,
    parse_distribution, parse_evidence_rounds, posterior_probability,
};
pub use collapse::{CollapseResult, DEFAULT_PRN_INFLUENCE, WaveCollapseSimulator};
pub use decision::{DecisionWeights, NormalizedInputs, WeightedDecision, weigh_decision};
pub use error::{AnalyticsError, Result};
pub use information::{categorical_entropy, magnitude_entropy};
pub use noise::{
    DEFAULT_POINTS, NoiseConfig, NoiseKind, gaussian_noise, perlin_like_noise, uniform_noise,
};
pub use projection::{
    ActionProbabilities, ActionSelection, ProjectionResult, cosine_projection,
    deviation_distance, projection_cosines, select_action,
};
pub use record::ComputationRecord;
pub use store::{Clock, DEFAULT_CAPACITY, ResultStore, SharedResultStore, StoredResult, SystemClock};
pub use validate::{ensure_numeric_sequence, is_valid_numeric_sequence};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
