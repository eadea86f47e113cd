//! Shannon entropy over numeric sequences.
//!
//! Two variants with different assumptions about what the numbers mean:
//!
//! - [`categorical_entropy`]: values are categorical draws. Probabilities
//!   come from how often each exact value occurs.
//! - [`magnitude_entropy`]: values are weights. Probabilities come from each
//!   value's share of the total.
//!
//! They disagree on the same input (`[1, 1, 2, 2]` is 1.0 bit categorically
//! but ~1.918 bits as magnitudes), so they stay separate functions.

use std::collections::HashMap;

use crate::error::{AnalyticsError, Result};
use crate::validate::ensure_numeric_sequence;

/// Shannon entropy in bits of the empirical value distribution.
pub fn categorical_entropy(data: &[f64]) -> Result<f64> {
    ensure_numeric_sequence(data, "categorical_entropy")?;

    let mut counts: HashMap<u64, usize> = HashMap::new();
    for &x in data {
        *counts.entry(symbol_key(x)).or_insert(0) += 1;
    }

    let n = data.len() as f64;
    let mut h = 0.0;
    for &c in counts.values() {
        let p = c as f64 / n;
        h -= p * p.log2();
    }
    log::debug!(
        "categorical entropy: {} samples, {} symbols, H={h:.6}",
        data.len(),
        counts.len()
    );
    Ok(h)
}

/// Shannon entropy in bits of `data` normalized by its sum.
///
/// Non-positive shares contribute nothing. A sequence summing to zero has
/// no distribution and is rejected. Values are scaled by the largest
/// magnitude before summing so the total cannot overflow.
pub fn magnitude_entropy(data: &[f64]) -> Result<f64> {
    ensure_numeric_sequence(data, "magnitude_entropy")?;

    let scale = data.iter().fold(0.0f64, |m, x| m.max(x.abs()));
    let total: f64 = if scale > 0.0 {
        data.iter().map(|x| x / scale).sum()
    } else {
        0.0
    };
    if total == 0.0 {
        return Err(AnalyticsError::invalid(
            "magnitude_entropy",
            "magnitudes sum to zero",
        ));
    }

    let mut h = 0.0;
    for &x in data {
        let p = (x / scale) / total;
        if p > 0.0 {
            h -= p * p.log2();
        }
    }
    log::debug!("magnitude entropy: {} weights, H={h:.6}", data.len());
    Ok(h)
}

/// Hash key for exact value equality; `0.0` and `-0.0` are one symbol.
fn symbol_key(x: f64) -> u64 {
    if x == 0.0 { 0.0f64.to_bits() } else { x.to_bits() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorical_two_equiprobable_symbols() {
        let h = categorical_entropy(&[1.0, 1.0, 2.0, 2.0]).unwrap();
        assert!((h - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_categorical_constant_is_zero() {
        let h = categorical_entropy(&[3.5; 17]).unwrap();
        assert_eq!(h, 0.0);
        assert!(h.is_sign_positive());
    }

    #[test]
    fn test_categorical_all_distinct() {
        let h = categorical_entropy(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]).unwrap();
        assert!((h - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_categorical_skewed() {
        // p = {3/4, 1/4}: H = 0.811278...
        let h = categorical_entropy(&[0.0, 0.0, 0.0, 9.0]).unwrap();
        let expected = -(0.75f64 * 0.75f64.log2() + 0.25 * 0.25f64.log2());
        assert!((h - expected).abs() < 1e-12);
    }

    #[test]
    fn test_categorical_signed_zero_is_one_symbol() {
        let h = categorical_entropy(&[0.0, -0.0]).unwrap();
        assert_eq!(h, 0.0);
    }

    #[test]
    fn test_categorical_non_negative_for_varied_inputs() {
        let inputs: [&[f64]; 4] = [&[1.0], &[1.0, 2.0], &[-1.0, 5.5, -1.0], &[0.1, 0.2, 0.3, 0.4]];
        for data in inputs {
            assert!(categorical_entropy(data).unwrap() >= 0.0);
        }
    }

    #[test]
    fn test_magnitude_uniform_weights() {
        let h = magnitude_entropy(&[2.0, 2.0, 2.0, 2.0]).unwrap();
        assert!((h - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_magnitude_hand_computed() {
        // p = {1/6, 1/6, 2/6, 2/6}
        let h = magnitude_entropy(&[1.0, 1.0, 2.0, 2.0]).unwrap();
        let expected = -(2.0 * (1.0 / 6.0) * (1.0f64 / 6.0).log2()
            + 2.0 * (1.0 / 3.0) * (1.0f64 / 3.0).log2());
        assert!((h - expected).abs() < 1e-12);
        assert!((h - 1.918_295_834).abs() < 1e-6);
    }

    #[test]
    fn test_magnitude_skips_non_positive_shares() {
        // total = 4, shares = {1, 0, 0}: only the 4 counts, and it is certain.
        let h = magnitude_entropy(&[4.0, 0.0, 0.0]).unwrap();
        assert_eq!(h, 0.0);
        // total = 2, shares = {1.5, -0.5}: the negative share is skipped.
        let h = magnitude_entropy(&[3.0, -1.0]).unwrap();
        let expected = -(1.5f64 * 1.5f64.log2());
        assert!((h - expected).abs() < 1e-12);
    }

    #[test]
    fn test_magnitude_of_huge_values() {
        let h = magnitude_entropy(&[1e308, 1e308]).unwrap();
        assert!((h - 1.0).abs() < 1e-12);
        let h = magnitude_entropy(&[f64::MAX, f64::MAX, f64::MAX, f64::MAX]).unwrap();
        assert!((h - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_magnitude_zero_sum_rejected() {
        assert!(matches!(
            magnitude_entropy(&[1.0, -1.0]),
            Err(AnalyticsError::InvalidInput { .. })
        ));
        assert!(magnitude_entropy(&[0.0, 0.0]).is_err());
    }

    #[test]
    fn test_invalid_input_rejected() {
        assert!(categorical_entropy(&[]).is_err());
        assert!(categorical_entropy(&[1.0, f64::NAN]).is_err());
        assert!(magnitude_entropy(&[]).is_err());
        assert!(magnitude_entropy(&[f64::INFINITY, 1.0]).is_err());
    }
}
