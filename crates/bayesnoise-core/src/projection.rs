//! Cosine-projection engine behind the wave-collapse heuristic.
//!
//! The "quantum" vocabulary is figurative. States are scaled by the cosine
//! and sine of an entropy angle, the two projections are compared with a
//! deviation-from-mean distance, and the distances are softmax-normalized
//! into a probability-shaped vector.
//!
//! [`deviation_distance`] stands in for a Mahalanobis distance in one
//! dimension: it is `|x - mean|` with no covariance scaling, so it is not
//! statistically comparable to a real Mahalanobis metric.

use serde::Serialize;

use crate::error::{AnalyticsError, Result};
use crate::validate::{ensure_numeric_sequence, mean};

/// Probability above which the tanh selector picks action 1.
const ACTION_THRESHOLD: f64 = 0.5;

/// Softmax-normalized projection distances, one per input state.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectionResult {
    pub probabilities: Vec<f64>,
}

impl ProjectionResult {
    /// Sum of all probabilities; 1 up to rounding.
    pub fn total(&self) -> f64 {
        self.probabilities.iter().sum()
    }

    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }
}

/// Two-outcome distribution from the tanh selector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActionProbabilities {
    pub action_0: f64,
    pub action_1: f64,
}

/// Output of [`select_action`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActionSelection {
    pub action: u8,
    pub probabilities: ActionProbabilities,
}

/// `|t - mean(reference)|` for every `t` in `target`.
///
/// Fails with `InvalidInput` when a distance is not a finite number, which
/// happens when a target is non-finite or lies more than `f64::MAX` from the
/// mean.
pub fn deviation_distance(reference: &[f64], target: &[f64]) -> Result<Vec<f64>> {
    ensure_numeric_sequence(reference, "deviation_distance")?;
    let center = mean(reference);
    target
        .iter()
        .enumerate()
        .map(|(i, &t)| {
            let d = (t - center).abs();
            if d.is_finite() {
                Ok(d)
            } else {
                Err(AnalyticsError::invalid(
                    "deviation_distance",
                    format!("distance of target {i} ({t}) from mean {center} is not finite"),
                ))
            }
        })
        .collect()
}

/// Direction cosines `(cos entropy, sin entropy, coherence)`.
pub fn projection_cosines(entropy: f64, coherence: f64) -> (f64, f64, f64) {
    (entropy.cos(), entropy.sin(), coherence)
}

/// Project `states` onto the entropy/coherence axes and softmax the
/// deviation between the two projections.
///
/// `A[i] = states[i]·cos(entropy)`, `B[i] = states[i]·sin(entropy)·coherence`,
/// distances are [`deviation_distance`]`(A, B)`.
pub fn cosine_projection(states: &[f64], entropy: f64, coherence: f64) -> Result<ProjectionResult> {
    ensure_numeric_sequence(states, "cosine_projection")?;
    if !entropy.is_finite() || !coherence.is_finite() {
        return Err(AnalyticsError::invalid(
            "cosine_projection",
            format!("entropy ({entropy}) and coherence ({coherence}) must be finite"),
        ));
    }

    let (cos_x, cos_y, cos_z) = projection_cosines(entropy, coherence);
    let projected_a: Vec<f64> = states.iter().map(|s| s * cos_x).collect();
    let projected_b: Vec<f64> = states.iter().map(|s| s * cos_y * cos_z).collect();

    let distances = deviation_distance(&projected_a, &projected_b)?;
    let probabilities = softmax(&distances);
    log::debug!(
        "cosine projection: {} states, entropy {entropy:.4}, coherence {coherence:.4}",
        states.len()
    );
    Ok(ProjectionResult { probabilities })
}

/// `p = tanh(entropy·coherence)`; action 1 iff `p > 0.5`.
pub fn select_action(entropy: f64, coherence: f64) -> ActionSelection {
    let p = (entropy * coherence).tanh();
    ActionSelection {
        action: u8::from(p > ACTION_THRESHOLD),
        probabilities: ActionProbabilities {
            action_0: 1.0 - p,
            action_1: p,
        },
    }
}

/// Exponentiate and normalize. Shifting by the max leaves the result
/// unchanged and keeps `exp` finite.
fn softmax(values: &[f64]) -> Vec<f64> {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = values.iter().map(|v| (v - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deviation_distance() {
        let d = deviation_distance(&[1.0, 2.0, 3.0], &[0.0, 2.0, 5.0]).unwrap();
        assert_eq!(d, vec![2.0, 0.0, 3.0]);
    }

    #[test]
    fn test_deviation_distance_rejects_empty_reference() {
        assert!(deviation_distance(&[], &[1.0]).is_err());
    }

    #[test]
    fn test_deviation_distance_of_huge_constant_sequence() {
        let d = deviation_distance(&[1e308, 1e308], &[1e308, 1e308]).unwrap();
        assert_eq!(d, vec![0.0, 0.0]);
    }

    #[test]
    fn test_deviation_distance_out_of_range() {
        let spread = [f64::MAX, -f64::MAX, -f64::MAX, -f64::MAX];
        assert!(matches!(
            deviation_distance(&spread, &spread[..1]),
            Err(AnalyticsError::InvalidInput { .. })
        ));
        assert!(deviation_distance(&[1.0], &[f64::NAN]).is_err());
    }

    #[test]
    fn test_projection_of_huge_states() {
        let result = cosine_projection(&[1e308, 1e308], 0.0, 1.0).unwrap();
        assert!((result.total() - 1.0).abs() < 1e-12);
        assert!(cosine_projection(&[1.0, 2.0], 1.0, f64::INFINITY).is_err());
        // sin(1)·coherence overflows the projection, so the distances are rejected.
        assert!(cosine_projection(&[1e308, -1e308], 1.0, 1e10).is_err());
    }

    #[test]
    fn test_deviation_distance_empty_target() {
        assert!(deviation_distance(&[1.0], &[]).unwrap().is_empty());
    }

    #[test]
    fn test_projection_cosines() {
        let (x, y, z) = projection_cosines(0.0, 0.7);
        assert_eq!((x, y, z), (1.0, 0.0, 0.7));
    }

    #[test]
    fn test_projection_is_a_distribution() {
        let inputs: [&[f64]; 4] = [
            &[1.0],
            &[0.1, 0.2, 0.3, 0.4],
            &[-5.0, 3.0, 12.5, 0.0, 0.0],
            &[1e3, -1e3, 2e3],
        ];
        for states in inputs {
            for (entropy, coherence) in [(0.0, 1.0), (1.3, 0.5), (2.0, 0.01), (7.0, 1.0)] {
                let result = cosine_projection(states, entropy, coherence).unwrap();
                assert_eq!(result.len(), states.len());
                assert!((result.total() - 1.0).abs() < 1e-9, "{states:?}");
                assert!(result.probabilities.iter().all(|&p| p >= 0.0));
            }
        }
    }

    #[test]
    fn test_projection_hand_computed() {
        // entropy 0: A = states, B = 0, so distances = |0 - mean(states)| everywhere.
        let result = cosine_projection(&[1.0, 3.0], 0.0, 0.5).unwrap();
        assert!((result.probabilities[0] - 0.5).abs() < 1e-12);
        assert!((result.probabilities[1] - 0.5).abs() < 1e-12);

        // entropy π/2, coherence 1: A ≈ 0, B = states, distances ≈ |states|.
        let result = cosine_projection(&[0.0, 1.0], std::f64::consts::FRAC_PI_2, 1.0).unwrap();
        let e = std::f64::consts::E;
        assert!((result.probabilities[1] - e / (1.0 + e)).abs() < 1e-9);
    }

    #[test]
    fn test_projection_rejects_bad_input() {
        assert!(cosine_projection(&[], 1.0, 1.0).is_err());
        assert!(cosine_projection(&[1.0, f64::NAN], 1.0, 1.0).is_err());
        assert!(cosine_projection(&[1.0], f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_select_action() {
        let low = select_action(0.1, 0.5);
        assert_eq!(low.action, 0);
        assert!((low.probabilities.action_0 + low.probabilities.action_1 - 1.0).abs() < 1e-12);

        let high = select_action(2.0, 1.0);
        assert_eq!(high.action, 1);
        assert!((high.probabilities.action_1 - 2.0f64.tanh()).abs() < 1e-12);

        // tanh(x) = 0.5 at x ≈ 0.5493; the boundary itself is action 0.
        assert_eq!(select_action(0.0, 1.0).action, 0);
    }
}
