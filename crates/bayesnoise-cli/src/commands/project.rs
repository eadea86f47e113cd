use bayesnoise_core::{
    ComputationRecord, Result, ResultStore, cosine_projection, magnitude_entropy,
};

pub fn run(data: &str, coherence: f64, store: &mut ResultStore<ComputationRecord>) -> Result<()> {
    let values = super::parse_sequence(data, "--data")?;
    let entropy = magnitude_entropy(&values)?;
    let projection = cosine_projection(&values, entropy, coherence)?;

    println!("Entropy (magnitude): {entropy:.4}");
    println!("Projections:         {}", super::fmt4(&projection.probabilities));

    super::remember(store, projection.into());
    Ok(())
}
