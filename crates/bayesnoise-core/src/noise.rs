//! Synthetic noise signals used as demo and test input.
//!
//! All generators draw from a caller-supplied [`Rng`], so a seeded
//! `StdRng` reproduces a signal exactly while `rand::rng()` gives fresh
//! values on every call.
//!
//! - **Gaussian**: a sine carrier plus uniform jitter in [-0.2, 0.2).
//! - **PerlinLike**: a slower (frequency / 5) gaussian signal passed through a
//!   3-point moving average. This is a smoothing approximation, not Perlin
//!   gradient noise.
//! - **Uniform**: independent draws in [-amplitude, amplitude).

use rand::Rng;
use serde::Serialize;

use crate::error::{AnalyticsError, Result};

/// Default number of points per generated signal.
pub const DEFAULT_POINTS: usize = 50;

/// Peak magnitude of the jitter added to the gaussian carrier.
const JITTER: f64 = 0.2;

/// Factor by which perlin-like noise slows the carrier frequency.
const PERLIN_FREQUENCY_DIVISOR: f64 = 5.0;

/// Which generator to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum NoiseKind {
    #[default]
    Gaussian,
    PerlinLike,
    Uniform,
}

impl std::fmt::Display for NoiseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gaussian => write!(f, "gaussian"),
            Self::PerlinLike => write!(f, "perlin"),
            Self::Uniform => write!(f, "uniform"),
        }
    }
}

impl std::str::FromStr for NoiseKind {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "gaussian" => Ok(Self::Gaussian),
            "perlin" | "perlin-like" | "perlin_like" => Ok(Self::PerlinLike),
            "uniform" => Ok(Self::Uniform),
            other => Err(AnalyticsError::InvalidConfig(format!(
                "unknown noise kind '{other}' (expected gaussian, perlin or uniform)"
            ))),
        }
    }
}

/// Parameters for one generated signal.
#[derive(Debug, Clone)]
pub struct NoiseConfig {
    pub kind: NoiseKind,
    pub amplitude: f64,
    /// Ignored by [`NoiseKind::Uniform`].
    pub frequency: f64,
    /// Ignored by [`NoiseKind::Uniform`].
    pub phase: f64,
    pub points: usize,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            kind: NoiseKind::Gaussian,
            amplitude: 1.0,
            frequency: 1.0,
            phase: 0.0,
            points: DEFAULT_POINTS,
        }
    }
}

impl NoiseConfig {
    /// Generate the configured signal.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Vec<f64>> {
        match self.kind {
            NoiseKind::Gaussian => {
                gaussian_noise(rng, self.amplitude, self.frequency, self.phase, self.points)
            }
            NoiseKind::PerlinLike => {
                perlin_like_noise(rng, self.amplitude, self.frequency, self.phase, self.points)
            }
            NoiseKind::Uniform => uniform_noise(rng, self.amplitude, self.points),
        }
    }
}

/// Sine carrier with uniform jitter: `amplitude * sin(frequency * i + phase) + u * 0.2`.
pub fn gaussian_noise<R: Rng>(
    rng: &mut R,
    amplitude: f64,
    frequency: f64,
    phase: f64,
    points: usize,
) -> Result<Vec<f64>> {
    ensure_points(points, "gaussian_noise")?;
    Ok((0..points)
        .map(|i| {
            let carrier = amplitude * (frequency * i as f64 + phase).sin();
            carrier + unit_draw(rng) * JITTER
        })
        .collect())
}

/// Gaussian noise at `frequency / 5`, smoothed by a 3-point moving average.
///
/// Interior points average their unsmoothed neighbours; the two endpoints
/// are kept as generated.
pub fn perlin_like_noise<R: Rng>(
    rng: &mut R,
    amplitude: f64,
    frequency: f64,
    phase: f64,
    points: usize,
) -> Result<Vec<f64>> {
    ensure_points(points, "perlin_like_noise")?;
    let raw = gaussian_noise(
        rng,
        amplitude,
        frequency / PERLIN_FREQUENCY_DIVISOR,
        phase,
        points,
    )?;
    let last = raw.len() - 1;
    Ok(raw
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            if i > 0 && i < last {
                (raw[i - 1] + value + raw[i + 1]) / 3.0
            } else {
                value
            }
        })
        .collect())
}

/// Independent draws in [-amplitude, amplitude). A negative amplitude flips the sign.
pub fn uniform_noise<R: Rng>(rng: &mut R, amplitude: f64, points: usize) -> Result<Vec<f64>> {
    ensure_points(points, "uniform_noise")?;
    Ok((0..points).map(|_| unit_draw(rng) * amplitude).collect())
}

/// Uniform draw in [-1, 1).
fn unit_draw<R: Rng>(rng: &mut R) -> f64 {
    rng.random_range(-1.0..1.0)
}

fn ensure_points(points: usize, context: &'static str) -> Result<()> {
    if points == 0 {
        return Err(AnalyticsError::invalid(context, "points must be at least 1"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(0xdeadbeef)
    }

    #[test]
    fn test_gaussian_stays_within_carrier_plus_jitter() {
        let data = gaussian_noise(&mut seeded(), 2.0, 0.5, 0.3, 200).unwrap();
        assert_eq!(data.len(), 200);
        for (i, &x) in data.iter().enumerate() {
            let carrier = 2.0 * (0.5 * i as f64 + 0.3).sin();
            assert!((x - carrier).abs() <= JITTER, "point {i}: {x} vs {carrier}");
        }
    }

    #[test]
    fn test_zero_amplitude_gaussian_is_pure_jitter() {
        let data = gaussian_noise(&mut seeded(), 0.0, 1.0, 0.0, 100).unwrap();
        assert!(data.iter().all(|x| x.abs() <= JITTER));
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = gaussian_noise(&mut seeded(), 1.0, 1.0, 0.0, 50).unwrap();
        let b = gaussian_noise(&mut seeded(), 1.0, 1.0, 0.0, 50).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_perlin_like_smooths_interior_only() {
        let raw = gaussian_noise(&mut seeded(), 1.0, 2.0 / PERLIN_FREQUENCY_DIVISOR, 0.0, 20)
            .unwrap();
        let smooth = perlin_like_noise(&mut seeded(), 1.0, 2.0, 0.0, 20).unwrap();
        assert_eq!(smooth.len(), 20);
        assert_eq!(smooth[0], raw[0]);
        assert_eq!(smooth[19], raw[19]);
        for i in 1..19 {
            let expected = (raw[i - 1] + raw[i] + raw[i + 1]) / 3.0;
            assert!((smooth[i] - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_perlin_like_short_signals() {
        assert_eq!(perlin_like_noise(&mut seeded(), 1.0, 1.0, 0.0, 1).unwrap().len(), 1);
        assert_eq!(perlin_like_noise(&mut seeded(), 1.0, 1.0, 0.0, 2).unwrap().len(), 2);
    }

    #[test]
    fn test_uniform_bounds_and_negative_amplitude() {
        let pos = uniform_noise(&mut seeded(), 3.0, 500).unwrap();
        assert!(pos.iter().all(|x| x.abs() <= 3.0));

        let neg = uniform_noise(&mut seeded(), -3.0, 500).unwrap();
        for (p, n) in pos.iter().zip(&neg) {
            assert_eq!(*p, -*n);
        }
    }

    #[test]
    fn test_uniform_zero_amplitude() {
        let data = uniform_noise(&mut seeded(), 0.0, 10).unwrap();
        assert!(data.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_zero_points_rejected() {
        assert!(gaussian_noise(&mut seeded(), 1.0, 1.0, 0.0, 0).is_err());
        assert!(perlin_like_noise(&mut seeded(), 1.0, 1.0, 0.0, 0).is_err());
        assert!(uniform_noise(&mut seeded(), 1.0, 0).is_err());
    }

    #[test]
    fn test_config_default_and_parse() {
        let config = NoiseConfig::default();
        assert_eq!(config.points, DEFAULT_POINTS);
        assert_eq!(config.generate(&mut seeded()).unwrap().len(), DEFAULT_POINTS);

        assert_eq!("perlin".parse::<NoiseKind>().unwrap(), NoiseKind::PerlinLike);
        assert_eq!("Uniform".parse::<NoiseKind>().unwrap(), NoiseKind::Uniform);
        assert!("pink".parse::<NoiseKind>().is_err());
        assert_eq!(NoiseKind::PerlinLike.to_string(), "perlin");
    }
}
