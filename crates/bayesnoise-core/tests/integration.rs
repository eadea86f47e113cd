//! Integration tests for bayesnoise-core.
//!
//! These tests run the full pipeline:
//! noise generation → validation → entropy / Bayes scoring → collapse → result store.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use bayesnoise_core::{
    AnalyticsError, Clock, ComputationRecord, DecisionWeights, NoiseConfig, NoiseKind,
    ResultStore, WaveCollapseSimulator, bayes_factor, bayesian_update, categorical_entropy,
    cosine_projection, magnitude_entropy, parse_distribution, parse_evidence_rounds,
    weigh_decision,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

struct StepClock(AtomicU64);

impl Clock for StepClock {
    fn now(&self) -> Duration {
        Duration::from_millis(self.0.fetch_add(1, Ordering::SeqCst))
    }
}

fn step_clock() -> StepClock {
    StepClock(AtomicU64::new(1_700_000_000_000))
}

#[test]
fn noise_feeds_collapse() {
    let mut rng = StdRng::seed_from_u64(7);
    for kind in [NoiseKind::Gaussian, NoiseKind::PerlinLike, NoiseKind::Uniform] {
        let config = NoiseConfig {
            kind,
            points: 64,
            ..Default::default()
        };
        let states = config.generate(&mut rng).unwrap();
        let result = WaveCollapseSimulator::default().collapse(&states, 0).unwrap();
        assert!(
            (result.collapsed_state - 1.0).abs() < 1e-9,
            "{kind}: collapsed state {}",
            result.collapsed_state
        );
        assert!(result.coherence > 0.0 && result.coherence <= 1.0);
        assert!(result.mahalanobis_distance >= 0.0);
        // Continuous noise has no repeated values: log2(64) bits.
        assert!((result.entropy - 6.0).abs() < 1e-9);
    }
}

#[test]
fn categorical_entropy_zero_iff_constant() {
    let mut rng = StdRng::seed_from_u64(11);
    let noisy = NoiseConfig::default().generate(&mut rng).unwrap();
    assert!(categorical_entropy(&noisy).unwrap() > 0.0);
    assert_eq!(categorical_entropy(&[2.5; 40]).unwrap(), 0.0);
}

#[test]
fn entropy_variants_disagree_on_same_input() {
    let data = [1.0, 1.0, 2.0, 2.0];
    let categorical = categorical_entropy(&data).unwrap();
    let magnitude = magnitude_entropy(&data).unwrap();
    assert!((categorical - 1.0).abs() < 1e-12);
    assert!((magnitude - 1.918_295_834).abs() < 1e-6);
}

#[test]
fn json_tables_through_update_and_collapse() {
    let priors = parse_distribution(r#"{"H1": 0.2, "H2": 0.3, "H3": 0.5}"#).unwrap();
    let rounds = parse_evidence_rounds(
        r#"[{"H1": 0.9, "H2": 0.5, "H3": 0.1}, {"H1": 0.7, "H2": 0.6, "H3": 0.2}]"#,
    )
    .unwrap();
    let posterior = bayesian_update(&priors, &rounds).unwrap();
    let total: f64 = posterior.values().sum();
    assert!((total - 1.0).abs() < 1e-12);
    assert!(posterior["H1"] > priors["H1"]);
    assert!(posterior["H3"] < priors["H3"]);

    let prior_values: Vec<f64> = priors.values().copied().collect();
    let collapsed = WaveCollapseSimulator::default()
        .collapse(&prior_values, 0)
        .unwrap();
    assert!((collapsed.collapsed_state - 1.0).abs() < 1e-9);
}

#[test]
fn errors_are_distinguishable() {
    let invalid = bayes_factor(&[f64::NAN]).unwrap_err();
    assert!(matches!(invalid, AnalyticsError::InvalidInput { .. }));

    let priors = parse_distribution(r#"{"A": 1.0, "B": 0.0}"#).unwrap();
    let rounds = parse_evidence_rounds(r#"[{"A": 0.0, "B": 1.0}]"#).unwrap();
    let zero = bayesian_update(&priors, &rounds).unwrap_err();
    assert!(matches!(zero, AnalyticsError::DivisionByZero(_)));

    let config = DecisionWeights::strict(0.9, 0.9, 0.9).unwrap_err();
    assert!(matches!(config, AnalyticsError::InvalidConfig(_)));
}

#[test]
fn decision_from_collapse_diagnostics() {
    let result = WaveCollapseSimulator::default()
        .collapse(&[0.1, 0.2, 0.3, 0.4], 0)
        .unwrap();
    let decision = weigh_decision(
        result.entropy,
        result.coherence,
        0.5,
        &DecisionWeights::default(),
    );
    assert!(decision.weighted_probability >= 0.0 && decision.weighted_probability <= 1.0);
    assert!(decision.confidence >= 0.0 && decision.confidence <= 1.0);
}

#[test]
fn projection_of_bayes_data() {
    let data = [0.1, 0.2, 0.3, 0.4];
    let entropy = magnitude_entropy(&data).unwrap();
    let projection = cosine_projection(&data, entropy, 0.5).unwrap();
    assert_eq!(projection.len(), data.len());
    assert!((projection.total() - 1.0).abs() < 1e-12);
}

#[test]
fn store_keeps_last_hundred_records() {
    let mut store = ResultStore::with_clock(100, step_clock());
    let mut ids = Vec::new();
    for i in 0..101 {
        let record = ComputationRecord::Entropy(i as f64);
        ids.push(store.store(record.kind(), record));
    }
    assert_eq!(store.len(), 100);
    assert!(store.get(&ids[0]).is_none());
    assert!(store.get(&ids[100]).is_some());
}

#[test]
fn store_query_by_type_round_trip() {
    let mut store = ResultStore::with_clock(100, step_clock());
    let mut bayes_ids = Vec::new();
    for data in [[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]] {
        let record = ComputationRecord::from(bayes_factor(&data).unwrap());
        bayes_ids.push(store.store(record.kind(), record));
        let collapse = WaveCollapseSimulator::default().collapse(&data, 0).unwrap();
        store.store("collapse", collapse.into());
    }

    let found: Vec<String> = store
        .query(Some("bayes"))
        .into_iter()
        .map(|(id, _)| id)
        .collect();
    assert_eq!(found, bayes_ids);

    let (_, first) = &store.query(Some("bayes"))[0];
    match &first.result {
        ComputationRecord::BayesFactor(r) => assert!((r.bayes_factor - 1.5).abs() < 1e-12),
        other => panic!("unexpected record {other:?}"),
    }
}

#[test]
fn stored_records_serialize_to_json() {
    let mut store = ResultStore::with_clock(10, step_clock());
    let record = ComputationRecord::from(bayes_factor(&[0.1, 0.2, 0.3, 0.4]).unwrap());
    store.store(record.kind(), record);
    let json = serde_json::to_value(store.query(None)).unwrap();
    let entry = &json[0][1];
    assert_eq!(entry["type"], "bayes");
    assert_eq!(entry["result"]["bayes_factor"]["interpretation"], "anecdotal");
}
