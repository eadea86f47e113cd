//! Precondition gate for numeric sequences.

use crate::error::{AnalyticsError, Result};

/// True iff `data` is non-empty and every element is finite.
pub fn is_valid_numeric_sequence(data: &[f64]) -> bool {
    !data.is_empty() && data.iter().all(|x| x.is_finite())
}

/// Fail fast with [`AnalyticsError::InvalidInput`] unless `data` passes
/// [`is_valid_numeric_sequence`].
pub fn ensure_numeric_sequence(data: &[f64], context: &'static str) -> Result<()> {
    if data.is_empty() {
        return Err(AnalyticsError::invalid(context, "sequence is empty"));
    }
    if let Some((idx, x)) = data.iter().enumerate().find(|(_, x)| !x.is_finite()) {
        return Err(AnalyticsError::invalid(
            context,
            format!("element {idx} is not a finite number ({x})"),
        ));
    }
    Ok(())
}

/// Arithmetic mean that cannot overflow for finite input: every term is
/// scaled by `1/n` before summing, so the partial sums stay within
/// `max |x|`.
pub(crate) fn mean(data: &[f64]) -> f64 {
    let n = data.len() as f64;
    data.iter().map(|x| x / n).sum()
}
