//! CLI for bayesnoise: entropy, Bayes scoring and wave-collapse diagnostics.

mod commands;

use bayesnoise_core::{ComputationRecord, DEFAULT_POINTS, NoiseConfig, NoiseKind, ResultStore};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bayesnoise")]
#[command(about = "bayesnoise: entropy, Bayes scoring and wave-collapse diagnostics")]
#[command(version = bayesnoise_core::VERSION)]
struct Cli {
    /// Write every result computed in this run as JSON
    #[arg(long, global = true)]
    output: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a synthetic noise signal
    Noise {
        /// Generator: gaussian (sine + jitter), perlin (smoothed), uniform
        #[arg(long, default_value = "gaussian", value_parser = ["gaussian", "perlin", "uniform"])]
        kind: String,

        #[arg(long, default_value = "1.0", allow_hyphen_values = true)]
        amplitude: f64,

        /// Carrier frequency (ignored by uniform)
        #[arg(long, default_value = "1.0", allow_hyphen_values = true)]
        frequency: f64,

        /// Carrier phase in radians (ignored by uniform)
        #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
        phase: f64,

        #[arg(long, default_value_t = DEFAULT_POINTS)]
        points: usize,

        /// Seed for a reproducible signal
        #[arg(long)]
        seed: Option<u64>,

        /// Run the signal quality battery on the generated values
        #[arg(long)]
        check: bool,
    },

    /// Shannon entropy of a comma-separated sequence
    Entropy {
        /// Comma-separated numbers, e.g. "1,1,2,2"
        #[arg(long, allow_hyphen_values = true)]
        data: String,

        /// categorical: values are draws; magnitude: values are weights
        #[arg(long, default_value = "categorical", value_parser = ["categorical", "magnitude"])]
        mode: String,
    },

    /// Bayes factor (absolute mean) with its evidence interpretation
    BayesFactor {
        /// Comma-separated numbers, e.g. "0.1,0.2,0.3,0.4"
        #[arg(long, allow_hyphen_values = true)]
        data: String,
    },

    /// Posterior update from JSON prior and likelihood tables, then a collapse of the priors
    Infer {
        /// JSON object, e.g. '{"A": 0.5, "B": 0.5}'
        #[arg(long)]
        priors: String,

        /// JSON array of objects, e.g. '[{"A": 0.8, "B": 0.2}]'
        #[arg(long)]
        likelihoods: String,
    },

    /// Weighted decision from entropy, coherence and PRN influence
    Decide {
        #[arg(long, allow_hyphen_values = true)]
        entropy: f64,

        #[arg(long, allow_hyphen_values = true)]
        coherence: f64,

        #[arg(long, default_value = "0.5", allow_hyphen_values = true)]
        prn: f64,

        /// Comma-separated weights entropy,coherence,prn (default 0.4,0.3,0.3)
        #[arg(long, allow_hyphen_values = true)]
        weights: Option<String>,

        /// Require weights in [0, 1] summing to 1
        #[arg(long)]
        strict_weights: bool,
    },

    /// Magnitude entropy and cosine projection of a sequence
    Project {
        /// Comma-separated numbers
        #[arg(long, allow_hyphen_values = true)]
        data: String,

        #[arg(long, default_value = "0.5", allow_hyphen_values = true)]
        coherence: f64,
    },

    /// Collapse a state sequence into one scalar plus diagnostics
    Collapse {
        /// Comma-separated numbers
        #[arg(long, allow_hyphen_values = true)]
        states: String,

        /// Previous action (0 or 1); recorded but not used by the decision rule
        #[arg(long, default_value = "0", value_parser = clap::value_parser!(u8).range(0..=1))]
        previous_action: u8,

        #[arg(long, default_value = "0.5", allow_hyphen_values = true)]
        prn: f64,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let mut store: ResultStore<ComputationRecord> = ResultStore::default();

    let outcome = match cli.command {
        Commands::Noise {
            kind,
            amplitude,
            frequency,
            phase,
            points,
            seed,
            check,
        } => kind.parse::<NoiseKind>().and_then(|kind| {
            commands::noise::run(
                &NoiseConfig {
                    kind,
                    amplitude,
                    frequency,
                    phase,
                    points,
                },
                seed,
                check,
                &mut store,
            )
        }),
        Commands::Entropy { data, mode } => commands::entropy::run(&data, &mode, &mut store),
        Commands::BayesFactor { data } => commands::bayes::run(&data, &mut store),
        Commands::Infer {
            priors,
            likelihoods,
        } => commands::infer::run(&priors, &likelihoods, &mut store),
        Commands::Decide {
            entropy,
            coherence,
            prn,
            weights,
            strict_weights,
        } => commands::decide::run(
            entropy,
            coherence,
            prn,
            weights.as_deref(),
            strict_weights,
            &mut store,
        ),
        Commands::Project { data, coherence } => {
            commands::project::run(&data, coherence, &mut store)
        }
        Commands::Collapse {
            states,
            previous_action,
            prn,
        } => commands::collapse::run(&states, previous_action, prn, &mut store),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    if let Some(path) = cli.output.as_deref() {
        commands::write_history(path, &store);
    }
}
