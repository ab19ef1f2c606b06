use crate::domain::errors::PipelineError;
use crate::domain::report::MonteCarloResult;
use crate::domain::stats::Stats;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonteCarloConfig {
    pub mean: f64,
    pub std_dev: f64,
    pub samples: usize,
    pub seed: u64,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            mean: 2.82,
            std_dev: 4.01,
            samples: 1000,
            seed: 42,
        }
    }
}

/// Synthetic normal sample, independent of the quote table.
pub struct MonteCarloEngine;

impl MonteCarloEngine {
    pub fn simulate(config: &MonteCarloConfig) -> Result<MonteCarloResult, PipelineError> {
        let normal = Normal::new(config.mean, config.std_dev).map_err(|_| {
            PipelineError::InvalidSimulation {
                mean: config.mean,
                std: config.std_dev,
            }
        })?;

        let mut rng = StdRng::seed_from_u64(config.seed);
        let simulated: Vec<f64> = (0..config.samples)
            .map(|_| normal.sample(&mut rng))
            .collect();

        // Percentiles come from the unrounded draws.
        let mut sorted = simulated.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let p5 = Stats::percentile(&sorted, 5.0).unwrap_or(f64::NAN);
        let p95 = Stats::percentile(&sorted, 95.0).unwrap_or(f64::NAN);

        Ok(MonteCarloResult {
            values: simulated.iter().map(|v| Stats::round_to(*v, 2)).collect(),
            mean: config.mean,
            std: config.std_dev,
            percentile5: Stats::round_to(p5, 2),
            percentile95: Stats::round_to(p95, 2),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monte_carlo_default_shape() {
        let config = MonteCarloConfig::default();
        let result = MonteCarloEngine::simulate(&config).unwrap();

        assert_eq!(result.values.len(), 1000);
        assert_eq!(result.mean, 2.82);
        assert_eq!(result.std, 4.01);
        assert!(result.percentile5 < result.mean);
        assert!(result.percentile95 > result.mean);
        // Roughly mean -/+ 1.645 std for a sample this size.
        assert!((result.percentile5 - (2.82 - 1.645 * 4.01)).abs() < 1.5);
        assert!((result.percentile95 - (2.82 + 1.645 * 4.01)).abs() < 1.5);
    }

    #[test]
    fn test_monte_carlo_is_deterministic() {
        let config = MonteCarloConfig::default();
        let a = MonteCarloEngine::simulate(&config).unwrap();
        let b = MonteCarloEngine::simulate(&config).unwrap();

        let bits = |r: &MonteCarloResult| r.values.iter().map(|v| v.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&a), bits(&b));
        assert_eq!(a.percentile5.to_bits(), b.percentile5.to_bits());
    }

    #[test]
    fn test_values_rounded_to_cents() {
        let result = MonteCarloEngine::simulate(&MonteCarloConfig::default()).unwrap();
        for v in &result.values {
            assert!((v * 100.0 - (v * 100.0).round()).abs() < 1e-6);
        }
    }

    #[test]
    fn test_negative_std_rejected() {
        let config = MonteCarloConfig {
            std_dev: -1.0,
            ..MonteCarloConfig::default()
        };
        assert!(matches!(
            MonteCarloEngine::simulate(&config),
            Err(PipelineError::InvalidSimulation { .. })
        ));
    }
}
