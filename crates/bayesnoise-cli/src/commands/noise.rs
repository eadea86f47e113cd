use bayesnoise_core::{ComputationRecord, NoiseConfig, Result, ResultStore};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub fn run(
    config: &NoiseConfig,
    seed: Option<u64>,
    check: bool,
    store: &mut ResultStore<ComputationRecord>,
) -> Result<()> {
    let signal = match seed {
        Some(seed) => config.generate(&mut StdRng::seed_from_u64(seed))?,
        None => config.generate(&mut rand::rng())?,
    };

    println!(
        "{} noise, {} points (amplitude {}, frequency {}, phase {}):\n",
        config.kind, config.points, config.amplitude, config.frequency, config.phase
    );
    for (i, chunk) in signal.chunks(10).enumerate() {
        println!("  {:>4}  {}", i * 10, super::fmt4(chunk));
    }

    if check {
        print_battery(&signal);
    }

    super::remember(store, signal.into());
    Ok(())
}

fn print_battery(signal: &[f64]) {
    let results = bayesnoise_tests::run_all_tests(signal);
    let score = bayesnoise_tests::calculate_quality_score(&results);

    println!("\n{}", "=".repeat(72));
    println!(
        "{:<24} {:>10} {:>12} {:>6}  {}",
        "Test", "p-value", "Statistic", "Grade", "Details"
    );
    println!("{}", "-".repeat(72));
    for r in &results {
        let p = r
            .p_value
            .map(|p| format!("{p:.4}"))
            .unwrap_or_else(|| "-".to_string());
        let mark = if r.passed { "✓" } else { "✗" };
        println!(
            "{:<24} {:>10} {:>12.4} {:>4} {}  {}",
            r.name, p, r.statistic, r.grade, mark, r.details
        );
    }
    println!("{}", "=".repeat(72));
    let passed = results.iter().filter(|r| r.passed).count();
    println!(
        "Quality score: {score:.0}/100 ({passed}/{} passed)",
        results.len()
    );
}
