use bayesnoise_core::{
    CollapseResult, ComputationRecord, Result, ResultStore, WaveCollapseSimulator,
};

pub fn run(
    states: &str,
    previous_action: u8,
    prn: f64,
    store: &mut ResultStore<ComputationRecord>,
) -> Result<()> {
    let values = super::parse_sequence(states, "--states")?;
    let result = WaveCollapseSimulator::new(prn).collapse(&values, previous_action)?;
    print_collapse(&result);
    super::remember(store, result.into());
    Ok(())
}

pub fn print_collapse(result: &CollapseResult) {
    println!("  Collapsed State:      {:.4}", result.collapsed_state);
    println!("  Action:               {}", result.action);
    println!("  Entropy:              {:.4}", result.entropy);
    println!("  Coherence:            {:.4}", result.coherence);
    println!("  Mahalanobis Distance: {:.4}", result.mahalanobis_distance);
}
