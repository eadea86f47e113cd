use bayesnoise_core::{ComputationRecord, Result, ResultStore, bayes_factor};

pub fn run(data: &str, store: &mut ResultStore<ComputationRecord>) -> Result<()> {
    let values = super::parse_sequence(data, "--data")?;
    let result = bayes_factor(&values)?;

    println!("Bayes factor:   {:.4}", result.bayes_factor);
    println!("Interpretation: {} evidence", result.interpretation);
    println!("Entropy:        {:.4}", result.entropy);

    super::remember(store, result.into());
    Ok(())
}
