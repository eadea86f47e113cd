//! Statistical quality battery for real-valued noise signals.
//!
//! Each test returns a [`TestResult`] with a p-value (where applicable), a
//! pass/fail determination, and a letter grade (A through F). The battery
//! checks the properties a demo signal is expected to have: centred on zero,
//! spread evenly across its range, and free of serial structure. Smoothed
//! (perlin-like) signals are expected to fail the serial tests.

use statrs::distribution::{ChiSquared, ContinuousCDF};
use statrs::function::erf::erfc;

/// Significance threshold for pass/fail.
const ALPHA: f64 = 0.01;

/// Equal-width bins for the uniformity test.
const UNIFORM_BINS: usize = 10;

// ═══════════════════════════════════════════════════════════════════════════════
// Core types
// ═══════════════════════════════════════════════════════════════════════════════

/// Result of a single signal test.
#[derive(Debug, Clone)]
pub struct TestResult {
    pub name: String,
    pub passed: bool,
    pub p_value: Option<f64>,
    pub statistic: f64,
    pub details: String,
    pub grade: char,
}

impl TestResult {
    /// Assign a letter grade based on p-value.
    ///
    /// - A: p >= 0.1
    /// - B: p >= 0.01
    /// - C: p >= 0.001
    /// - D: p >= 0.0001
    /// - F: otherwise or None
    pub fn grade_from_p(p: Option<f64>) -> char {
        match p {
            Some(p) if p >= 0.1 => 'A',
            Some(p) if p >= 0.01 => 'B',
            Some(p) if p >= 0.001 => 'C',
            Some(p) if p >= 0.0001 => 'D',
            _ => 'F',
        }
    }

    /// Determine pass/fail from p-value against a threshold.
    pub fn pass_from_p(p: Option<f64>, threshold: f64) -> bool {
        match p {
            Some(p) => p >= threshold,
            None => false,
        }
    }

    fn from_p(name: &str, p: f64, statistic: f64, details: String) -> Self {
        TestResult {
            name: name.to_string(),
            passed: Self::pass_from_p(Some(p), ALPHA),
            p_value: Some(p),
            statistic,
            details,
            grade: Self::grade_from_p(Some(p)),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helpers
// ═══════════════════════════════════════════════════════════════════════════════

/// Return a failing `TestResult` when data is too short.
fn insufficient(name: &str, needed: usize, got: usize) -> TestResult {
    failed(name, format!("Insufficient data: need {needed}, got {got}"))
}

fn failed(name: &str, details: String) -> TestResult {
    TestResult {
        name: name.to_string(),
        passed: false,
        p_value: None,
        statistic: 0.0,
        details,
        grade: 'F',
    }
}

/// Two-sided normal p-value for a z-score.
fn two_sided_p(z: f64) -> f64 {
    erfc(z.abs() / std::f64::consts::SQRT_2)
}

fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / data.len() as f64
}

// ═══════════════════════════════════════════════════════════════════════════════
// 1. LOCATION
// ═══════════════════════════════════════════════════════════════════════════════

/// Test 1: Mean deviation -- z-test of the sample mean against zero.
pub fn mean_deviation(data: &[f64]) -> TestResult {
    let name = "Mean Deviation";
    let n = data.len();
    if n < 30 {
        return insufficient(name, 30, n);
    }
    let m = mean(data);
    let var = data.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / (n - 1) as f64;
    if var < 1e-20 {
        return failed(name, "Zero variance".to_string());
    }
    let z = m / (var / n as f64).sqrt();
    TestResult::from_p(
        name,
        two_sided_p(z),
        z,
        format!("mean={m:.6}, sd={:.6}, n={n}", var.sqrt()),
    )
}

// ═══════════════════════════════════════════════════════════════════════════════
// 2. DISTRIBUTION
// ═══════════════════════════════════════════════════════════════════════════════

/// Test 2: Uniform chi-squared -- counts in 10 equal-width bins over [min, max].
pub fn uniform_chi_squared(data: &[f64]) -> TestResult {
    let name = "Uniform Chi-Squared";
    let n = data.len();
    if n < UNIFORM_BINS * 5 {
        return insufficient(name, UNIFORM_BINS * 5, n);
    }
    let lo = data.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = hi - lo;
    if range < 1e-12 {
        return failed(name, "Zero range".to_string());
    }

    let mut hist = [0u64; UNIFORM_BINS];
    for &x in data {
        let bin = (((x - lo) / range) * UNIFORM_BINS as f64) as usize;
        hist[bin.min(UNIFORM_BINS - 1)] += 1;
    }
    let expected = n as f64 / UNIFORM_BINS as f64;
    let chi2: f64 = hist
        .iter()
        .map(|&c| {
            let diff = c as f64 - expected;
            diff * diff / expected
        })
        .sum();
    let p = match ChiSquared::new((UNIFORM_BINS - 1) as f64) {
        Ok(dist) => dist.sf(chi2),
        Err(_) => return failed(name, "Invalid degrees of freedom".to_string()),
    };
    TestResult::from_p(
        name,
        p,
        chi2,
        format!("n={n}, bins={UNIFORM_BINS}, range=[{lo:.4}, {hi:.4}]"),
    )
}

// ═══════════════════════════════════════════════════════════════════════════════
// 3. SERIAL STRUCTURE
// ═══════════════════════════════════════════════════════════════════════════════

/// Test 3: Lag-1 autocorrelation -- `r1·√n` is approximately standard normal
/// for independent samples.
pub fn lag_one_autocorrelation(data: &[f64]) -> TestResult {
    let name = "Lag-1 Autocorrelation";
    let n = data.len();
    if n < 30 {
        return insufficient(name, 30, n);
    }
    let m = mean(data);
    let denom: f64 = data.iter().map(|x| (x - m) * (x - m)).sum();
    if denom < 1e-20 {
        return failed(name, "Zero variance".to_string());
    }
    let num: f64 = data.windows(2).map(|w| (w[0] - m) * (w[1] - m)).sum();
    let r1 = num / denom;
    let z = r1 * (n as f64).sqrt();
    TestResult::from_p(name, two_sided_p(z), r1, format!("r1={r1:.6}, n={n}"))
}

/// Test 4: Runs about the median (Wald-Wolfowitz).
///
/// Values equal to the median are dropped before counting runs.
pub fn runs_about_median(data: &[f64]) -> TestResult {
    let name = "Runs About Median";
    let n = data.len();
    if n < 30 {
        return insufficient(name, 30, n);
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let median = if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    };

    let signs: Vec<bool> = data
        .iter()
        .filter(|&&x| x != median)
        .map(|&x| x > median)
        .collect();
    let above = signs.iter().filter(|&&s| s).count() as f64;
    let below = signs.len() as f64 - above;
    if above == 0.0 || below == 0.0 {
        return failed(name, "All values on one side of the median".to_string());
    }

    let runs = 1 + signs.windows(2).filter(|w| w[0] != w[1]).count();
    let total = above + below;
    let expected = 2.0 * above * below / total + 1.0;
    let variance =
        2.0 * above * below * (2.0 * above * below - total) / (total * total * (total - 1.0));
    if variance < 1e-20 {
        return failed(name, "Zero variance".to_string());
    }
    let z = (runs as f64 - expected) / variance.sqrt();
    TestResult::from_p(
        name,
        two_sided_p(z),
        z,
        format!("runs={runs}, expected={expected:.1}, above={above}, below={below}"),
    )
}

// ═══════════════════════════════════════════════════════════════════════════════
// Battery
// ═══════════════════════════════════════════════════════════════════════════════

/// Run every test in the battery.
pub fn run_all_tests(data: &[f64]) -> Vec<TestResult> {
    let tests: Vec<fn(&[f64]) -> TestResult> = vec![
        mean_deviation,
        uniform_chi_squared,
        lag_one_autocorrelation,
        runs_about_median,
    ];
    tests.iter().map(|t| t(data)).collect()
}

/// Average grade score: A=100, B=75, C=50, D=25, F=0.
pub fn calculate_quality_score(results: &[TestResult]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    let total: f64 = results
        .iter()
        .map(|r| match r.grade {
            'A' => 100.0,
            'B' => 75.0,
            'C' => 50.0,
            'D' => 25.0,
            _ => 0.0,
        })
        .sum();
    total / results.len() as f64
}
