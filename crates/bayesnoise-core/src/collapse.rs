//! End-to-end "wave collapse" of a state sequence into one scalar.
//!
//! Pipeline: categorical entropy → deviation of the first state from the
//! mean → coherence `e^-distance` → tanh action selection → cosine
//! projection → sum of the projection.
//!
//! The projection is a softmax, so `collapsed_state` is 1 for every valid
//! input up to rounding. It carries no information about the states; the
//! diagnostics (`entropy`, `coherence`, `mahalanobis_distance`, `action`) do.

use serde::Serialize;

use crate::error::Result;
use crate::information::categorical_entropy;
use crate::projection::{cosine_projection, deviation_distance, select_action};
use crate::validate::ensure_numeric_sequence;

/// Default external PRN influence.
pub const DEFAULT_PRN_INFLUENCE: f64 = 0.5;

/// Output of [`WaveCollapseSimulator::collapse`].
#[derive(Debug, Clone, Serialize)]
pub struct CollapseResult {
    /// Sum of the projected distribution.
    pub collapsed_state: f64,
    pub action: u8,
    pub entropy: f64,
    /// `e^-mahalanobis_distance`, in (0, 1]. Floored at `f64::MIN_POSITIVE`
    /// when the exponential underflows.
    pub coherence: f64,
    /// Deviation of the first state from the sequence mean (1-D proxy).
    pub mahalanobis_distance: f64,
}

/// Stateless collapse pipeline configured with a PRN influence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveCollapseSimulator {
    prn_influence: f64,
}

impl Default for WaveCollapseSimulator {
    fn default() -> Self {
        Self::new(DEFAULT_PRN_INFLUENCE)
    }
}

impl WaveCollapseSimulator {
    pub fn new(prn_influence: f64) -> Self {
        Self { prn_influence }
    }

    pub fn prn_influence(&self) -> f64 {
        self.prn_influence
    }

    /// Collapse `states` into a [`CollapseResult`].
    ///
    /// `previous_action` and the PRN influence are part of the interface but
    /// do not enter the decision rule. States spread so far apart that the
    /// first one's distance from the mean exceeds `f64::MAX` are rejected as
    /// `InvalidInput`.
    pub fn collapse(&self, states: &[f64], previous_action: u8) -> Result<CollapseResult> {
        ensure_numeric_sequence(states, "collapse")?;

        let entropy = categorical_entropy(states)?;
        let mahalanobis_distance = deviation_distance(states, &states[..1])?[0];
        // e^-d underflows to 0 past d ≈ 745; keep coherence strictly positive.
        let coherence = (-mahalanobis_distance).exp().max(f64::MIN_POSITIVE);

        let selection = select_action(entropy, coherence);
        let projected = cosine_projection(states, entropy, coherence)?;
        let collapsed_state = projected.total();

        log::debug!(
            "collapse: {} states, previous action {previous_action}, prn {:.3} -> action {}, \
             entropy {entropy:.4}, coherence {coherence:.4}, distance {mahalanobis_distance:.4}",
            states.len(),
            self.prn_influence,
            selection.action
        );

        Ok(CollapseResult {
            collapsed_state,
            action: selection.action,
            entropy,
            coherence,
            mahalanobis_distance,
        })
    }
}
