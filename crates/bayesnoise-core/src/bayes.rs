//! Bayes-factor scoring and iterative posterior updates.
//!
//! The "Bayes factor" here is the absolute mean of a data sequence, read off
//! a fixed evidence ladder. It is a heuristic strength score, not a ratio of
//! marginal likelihoods.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, Result};
use crate::information::categorical_entropy;
use crate::validate::{ensure_numeric_sequence, mean};

/// Hypothesis name to probability.
pub type HypothesisDistribution = BTreeMap<String, f64>;

/// Hypothesis name to likelihood for one round of evidence.
pub type EvidenceRecord = BTreeMap<String, f64>;

/// Qualitative strength of a Bayes factor, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpretation {
    Anecdotal,
    Substantial,
    Strong,
    Decisive,
}

/// Exclusive upper bounds of the ladder; anything at or above the last is decisive.
const LADDER: [(f64, Interpretation); 3] = [
    (1.0, Interpretation::Anecdotal),
    (3.0, Interpretation::Substantial),
    (10.0, Interpretation::Strong),
];

impl Interpretation {
    /// First rung whose bound exceeds `factor`.
    pub fn from_factor(factor: f64) -> Self {
        LADDER
            .iter()
            .find(|(bound, _)| factor < *bound)
            .map(|&(_, label)| label)
            .unwrap_or(Self::Decisive)
    }
}

impl std::fmt::Display for Interpretation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Anecdotal => write!(f, "anecdotal"),
            Self::Substantial => write!(f, "substantial"),
            Self::Strong => write!(f, "strong"),
            Self::Decisive => write!(f, "decisive"),
        }
    }
}

/// Output of [`bayes_factor`].
#[derive(Debug, Clone, Serialize)]
pub struct BayesFactorResult {
    pub bayes_factor: f64,
    pub interpretation: Interpretation,
    /// Categorical Shannon entropy of the same data.
    pub entropy: f64,
}

/// Absolute mean of `data` with its interpretation and categorical entropy.
pub fn bayes_factor(data: &[f64]) -> Result<BayesFactorResult> {
    ensure_numeric_sequence(data, "bayes_factor")?;

    let factor = mean(data).abs();
    let interpretation = Interpretation::from_factor(factor);
    let entropy = categorical_entropy(data)?;
    log::debug!("bayes factor {factor:.6} ({interpretation}), entropy {entropy:.6}");

    Ok(BayesFactorResult {
        bayes_factor: factor,
        interpretation,
        entropy,
    })
}

/// Apply each evidence round in order, feeding every posterior back in as
/// the next prior.
///
/// Per round: `total = Σ prior[h]·e[h]`, then `posterior[h] = prior[h]·e[h] / total`.
/// Keys present in the evidence but not the prior are ignored. A round whose
/// weighted mass overflows `f64` is rejected as `InvalidInput`.
pub fn bayesian_update(
    priors: &HypothesisDistribution,
    rounds: &[EvidenceRecord],
) -> Result<HypothesisDistribution> {
    ensure_finite_table(priors, "bayesian_update")?;

    let mut posterior = priors.clone();
    for (round, evidence) in rounds.iter().enumerate() {
        ensure_finite_table(evidence, "bayesian_update")?;

        let mut total = 0.0;
        for (hypothesis, p) in posterior.iter_mut() {
            let likelihood = evidence.get(hypothesis).copied().ok_or_else(|| {
                AnalyticsError::MissingLikelihood {
                    round,
                    hypothesis: hypothesis.clone(),
                }
            })?;
            *p *= likelihood;
            total += *p;
        }

        if total == 0.0 {
            return Err(AnalyticsError::DivisionByZero(format!(
                "evidence round {round}: total likelihood-weighted mass is zero"
            )));
        }
        if !total.is_finite() {
            return Err(AnalyticsError::invalid(
                "bayesian_update",
                format!("evidence round {round}: likelihood-weighted mass overflows ({total})"),
            ));
        }
        for p in posterior.values_mut() {
            *p /= total;
        }
        log::debug!("round {round}: normalized over total {total:.6}");
    }
    Ok(posterior)
}

/// Decode a JSON object such as `{"A": 0.5, "B": 0.5}`.
pub fn parse_distribution(json: &str) -> Result<HypothesisDistribution> {
    Ok(serde_json::from_str(json)?)
}

/// Decode a JSON array of evidence objects such as `[{"A": 0.8, "B": 0.2}]`.
pub fn parse_evidence_rounds(json: &str) -> Result<Vec<EvidenceRecord>> {
    Ok(serde_json::from_str(json)?)
}

// ---------------------------------------------------------------------------
// Scalar helpers
// ---------------------------------------------------------------------------

/// Prior favouring low coherence: `e^-coherence`.
pub fn high_coherence_prior(coherence: f64) -> f64 {
    (-coherence).exp()
}

/// `coherence · event · projection`.
pub fn joint_probability(coherence: f64, event: f64, projection: f64) -> f64 {
    coherence * event * projection
}

/// `joint / prior`.
pub fn conditional_probability(joint: f64, prior: f64) -> Result<f64> {
    if prior == 0.0 {
        return Err(AnalyticsError::DivisionByZero(
            "conditional probability with a zero prior".to_string(),
        ));
    }
    Ok(joint / prior)
}

/// `prior · prior_coherence · conditional`.
pub fn posterior_probability(prior: f64, prior_coherence: f64, conditional: f64) -> f64 {
    prior * prior_coherence * conditional
}

fn ensure_finite_table(table: &BTreeMap<String, f64>, context: &'static str) -> Result<()> {
    match table.iter().find(|(_, v)| !v.is_finite()) {
        Some((k, v)) => Err(AnalyticsError::invalid(
            context,
            format!("value for '{k}' is not a finite number ({v})"),
        )),
        None => Ok(()),
    }
}
