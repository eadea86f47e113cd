//! Any core output, as one storable value.

use serde::Serialize;

use crate::bayes::{BayesFactorResult, HypothesisDistribution};
use crate::collapse::CollapseResult;
use crate::decision::WeightedDecision;
use crate::projection::ProjectionResult;

/// A computed result of any kind, the default payload of
/// [`ResultStore`](crate::store::ResultStore).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComputationRecord {
    Noise(Vec<f64>),
    Entropy(f64),
    BayesFactor(BayesFactorResult),
    Posterior(HypothesisDistribution),
    Decision(WeightedDecision),
    Projection(ProjectionResult),
    Collapse(CollapseResult),
}

impl ComputationRecord {
    /// Conventional store type for this record.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Noise(_) => "noise",
            Self::Entropy(_) => "entropy",
            Self::BayesFactor(_) => "bayes",
            Self::Posterior(_) => "posterior",
            Self::Decision(_) => "decision",
            Self::Projection(_) => "projection",
            Self::Collapse(_) => "collapse",
        }
    }
}

impl From<BayesFactorResult> for ComputationRecord {
    fn from(r: BayesFactorResult) -> Self {
        Self::BayesFactor(r)
    }
}

impl From<WeightedDecision> for ComputationRecord {
    fn from(r: WeightedDecision) -> Self {
        Self::Decision(r)
    }
}

impl From<ProjectionResult> for ComputationRecord {
    fn from(r: ProjectionResult) -> Self {
        Self::Projection(r)
    }
}

impl From<CollapseResult> for ComputationRecord {
    fn from(r: CollapseResult) -> Self {
        Self::Collapse(r)
    }
}

impl From<Vec<f64>> for ComputationRecord {
    /// A generated noise signal.
    fn from(signal: Vec<f64>) -> Self {
        Self::Noise(signal)
    }
}

impl From<f64> for ComputationRecord {
    /// A Shannon entropy in bits.
    fn from(entropy: f64) -> Self {
        Self::Entropy(entropy)
    }
}

impl From<HypothesisDistribution> for ComputationRecord {
    fn from(posterior: HypothesisDistribution) -> Self {
        Self::Posterior(posterior)
    }
}
