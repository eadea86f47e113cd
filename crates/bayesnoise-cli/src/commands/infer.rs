use bayesnoise_core::{
    ComputationRecord, Result, ResultStore, WaveCollapseSimulator, bayesian_update,
    parse_distribution, parse_evidence_rounds,
};

pub fn run(
    priors_json: &str,
    likelihoods_json: &str,
    store: &mut ResultStore<ComputationRecord>,
) -> Result<()> {
    let priors = parse_distribution(priors_json)?;
    let rounds = parse_evidence_rounds(likelihoods_json)?;
    let posterior = bayesian_update(&priors, &rounds)?;

    println!(
        "Posterior after {} evidence round(s):\n",
        rounds.len()
    );
    println!("  {:<20} {:>10} {:>10}", "Hypothesis", "Prior", "Posterior");
    println!("  {}", "-".repeat(42));
    for (hypothesis, prior) in &priors {
        let post = posterior.get(hypothesis).copied().unwrap_or_default();
        println!("  {hypothesis:<20} {prior:>10.4} {post:>10.4}");
    }

    let prior_values: Vec<f64> = priors.values().copied().collect();
    let collapse = WaveCollapseSimulator::default().collapse(&prior_values, 0)?;
    println!("\nWave collapse of the prior values:\n");
    super::collapse::print_collapse(&collapse);

    super::remember(store, posterior.into());
    super::remember(store, collapse.into());
    Ok(())
}
