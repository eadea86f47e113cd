use bayesnoise_core::{
    ComputationRecord, Result, ResultStore, categorical_entropy, magnitude_entropy,
};

pub fn run(data: &str, mode: &str, store: &mut ResultStore<ComputationRecord>) -> Result<()> {
    let values = super::parse_sequence(data, "--data")?;
    let h = match mode {
        "magnitude" => magnitude_entropy(&values)?,
        _ => categorical_entropy(&values)?,
    };

    println!("Shannon entropy ({mode}, {} values): {h:.4} bits", values.len());
    super::remember(store, h.into());
    Ok(())
}
