use bayesnoise_core::{ComputationRecord, DecisionWeights, Result, ResultStore, weigh_decision};

pub fn run(
    entropy: f64,
    coherence: f64,
    prn: f64,
    weights: Option<&str>,
    strict: bool,
    store: &mut ResultStore<ComputationRecord>,
) -> Result<()> {
    let weights = match weights {
        Some(raw) => {
            let (e, c, p) = super::parse_triple(raw, "--weights")?;
            if strict {
                DecisionWeights::strict(e, c, p)?
            } else {
                DecisionWeights::new(e, c, p)?
            }
        }
        None => DecisionWeights::default(),
    };
    if !strict && (weights.sum() - 1.0).abs() > 1e-9 {
        log::warn!(
            "weights sum to {:.4}; probability and confidence may leave [0, 1]",
            weights.sum()
        );
    }

    let d = weigh_decision(entropy, coherence, prn, &weights);
    println!(
        "Weights: entropy {:.2}, coherence {:.2}, prn {:.2}\n",
        weights.entropy(),
        weights.coherence(),
        weights.prn_influence()
    );
    println!("  Weighted probability: {:.4}", d.weighted_probability);
    println!("  Recommended action:   {}", d.recommended_action);
    println!("  Confidence:           {:.4}", d.confidence);
    println!(
        "  Inputs (clamped):     entropy {:.4}, coherence {:.4}, prn {:.4}",
        d.normalized_inputs.entropy, d.normalized_inputs.coherence, d.normalized_inputs.prn_influence
    );

    super::remember(store, d.into());
    Ok(())
}
