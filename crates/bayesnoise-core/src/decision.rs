//! Weighted-probability decision heuristic.
//!
//! Entropy, coherence and an external pseudo-random-number (PRN) influence
//! are each clamped to [0, 1] and mixed by [`DecisionWeights`]. The default
//! weights sum to 1, which keeps the mixed probability in [0, 1];
//! [`DecisionWeights::new`] does not enforce that, so custom weights can push
//! `weighted_probability` and `confidence` outside their nominal ranges.
//! Use [`DecisionWeights::strict`] when bounded output matters.

use serde::Serialize;

use crate::error::{AnalyticsError, Result};

/// Probability above which action 1 is recommended.
const ACTION_THRESHOLD: f64 = 0.5;

/// Tolerance for the strict sum-to-one check.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Mixing weights for [`weigh_decision`].
///
/// Built only through [`Default`], [`DecisionWeights::new`] or
/// [`DecisionWeights::strict`], so every instance holds finite weights:
///
/// ```compile_fail
/// use bayesnoise_core::DecisionWeights;
///
/// let w = DecisionWeights { entropy: f64::NAN, coherence: 0.3, prn_influence: 0.3 };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DecisionWeights {
    entropy: f64,
    coherence: f64,
    prn_influence: f64,
}

impl Default for DecisionWeights {
    fn default() -> Self {
        Self {
            entropy: 0.4,
            coherence: 0.3,
            prn_influence: 0.3,
        }
    }
}

impl DecisionWeights {
    /// Any finite weights are accepted.
    pub fn new(entropy: f64, coherence: f64, prn_influence: f64) -> Result<Self> {
        let weights = Self {
            entropy,
            coherence,
            prn_influence,
        };
        for (name, w) in weights.named() {
            if !w.is_finite() {
                return Err(AnalyticsError::InvalidConfig(format!(
                    "{name} weight must be finite, got {w}"
                )));
            }
        }
        Ok(weights)
    }

    /// Each weight in [0, 1] and the three summing to 1.
    pub fn strict(entropy: f64, coherence: f64, prn_influence: f64) -> Result<Self> {
        let weights = Self::new(entropy, coherence, prn_influence)?;
        for (name, w) in weights.named() {
            if !(0.0..=1.0).contains(&w) {
                return Err(AnalyticsError::InvalidConfig(format!(
                    "{name} weight must lie in [0, 1], got {w}"
                )));
            }
        }
        let sum = weights.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(AnalyticsError::InvalidConfig(format!(
                "weights must sum to 1, got {sum}"
            )));
        }
        Ok(weights)
    }

    pub fn entropy(&self) -> f64 {
        self.entropy
    }

    pub fn coherence(&self) -> f64 {
        self.coherence
    }

    pub fn prn_influence(&self) -> f64 {
        self.prn_influence
    }

    pub fn sum(&self) -> f64 {
        self.entropy + self.coherence + self.prn_influence
    }

    fn named(&self) -> [(&'static str, f64); 3] {
        [
            ("entropy", self.entropy),
            ("coherence", self.coherence),
            ("prn_influence", self.prn_influence),
        ]
    }
}

/// The three inputs after clamping to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalizedInputs {
    pub entropy: f64,
    pub coherence: f64,
    pub prn_influence: f64,
}

/// Output of [`weigh_decision`].
#[derive(Debug, Clone, Serialize)]
pub struct WeightedDecision {
    pub weighted_probability: f64,
    /// 1 when `weighted_probability > 0.5`, else 0.
    pub recommended_action: u8,
    /// Distance from the 0.5 boundary, scaled so the extremes read 1.0.
    pub confidence: f64,
    pub normalized_inputs: NormalizedInputs,
}

/// Clamp, mix and threshold the three signals.
pub fn weigh_decision(
    entropy: f64,
    coherence: f64,
    prn_influence: f64,
    weights: &DecisionWeights,
) -> WeightedDecision {
    let normalized_inputs = NormalizedInputs {
        entropy: unit_clamp(entropy),
        coherence: unit_clamp(coherence),
        prn_influence: unit_clamp(prn_influence),
    };

    let weighted_probability = weights.entropy * normalized_inputs.entropy
        + weights.coherence * normalized_inputs.coherence
        + weights.prn_influence * normalized_inputs.prn_influence;

    let recommended_action = u8::from(weighted_probability > ACTION_THRESHOLD);
    let confidence = (weighted_probability - ACTION_THRESHOLD).abs() * 2.0;

    WeightedDecision {
        weighted_probability,
        recommended_action,
        confidence,
        normalized_inputs,
    }
}

/// Clamp to [0, 1]; NaN maps to 0.
fn unit_clamp(x: f64) -> f64 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}
