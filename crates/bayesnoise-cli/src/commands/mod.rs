pub mod bayes;
pub mod collapse;
pub mod decide;
pub mod entropy;
pub mod infer;
pub mod noise;
pub mod project;

use bayesnoise_core::timestamp::now_iso8601_millis;
use bayesnoise_core::{AnalyticsError, ComputationRecord, Result, ResultStore, StoredResult};
use serde::Serialize;

/// JSON document written by `--output`.
#[derive(Serialize)]
struct HistoryReport {
    generated_at: String,
    bayesnoise_version: &'static str,
    results: Vec<StoredResult<ComputationRecord>>,
}

/// Parse a comma-separated list of numbers, e.g. `"0.1, 0.2, 0.3"`.
pub fn parse_sequence(raw: &str, flag: &'static str) -> Result<Vec<f64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>().map_err(|_| AnalyticsError::InvalidInput {
                context: flag,
                reason: format!("'{s}' is not a number"),
            })
        })
        .collect()
}

/// Parse exactly three comma-separated numbers.
pub fn parse_triple(raw: &str, flag: &'static str) -> Result<(f64, f64, f64)> {
    match parse_sequence(raw, flag)?.as_slice() {
        &[a, b, c] => Ok((a, b, c)),
        other => Err(AnalyticsError::InvalidInput {
            context: flag,
            reason: format!("expected 3 values, got {}", other.len()),
        }),
    }
}

/// Render values to four decimals, comma separated.
pub fn fmt4(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format!("{v:.4}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Store `record` under its conventional type and echo the id at debug level.
pub fn remember(store: &mut ResultStore<ComputationRecord>, record: ComputationRecord) {
    let id = store.store(record.kind(), record);
    log::debug!("stored {id}");
}

/// Write the run's result history as pretty JSON.
pub fn write_history(path: &str, store: &ResultStore<ComputationRecord>) {
    let report = HistoryReport {
        generated_at: now_iso8601_millis(),
        bayesnoise_version: bayesnoise_core::VERSION,
        results: store.query(None).into_iter().map(|(_, e)| e).collect(),
    };
    match serde_json::to_string_pretty(&report) {
        Ok(json) => {
            if let Err(e) = std::fs::write(path, json) {
                eprintln!("Failed to write results to {path}: {e}");
            } else {
                println!("\nResults saved to: {path}");
            }
        }
        Err(e) => eprintln!("Failed to serialize results: {e}"),
    }
}
