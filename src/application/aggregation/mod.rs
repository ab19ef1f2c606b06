//! The seven independent views derived from the cleaned quote table.
//!
//! Each view is a pure function of its inputs, so they can run in any order
//! or in parallel.

pub mod correlation;
pub mod monte_carlo;
pub mod monthly;
pub mod scatter;
pub mod summary;
pub mod volatility;
pub mod volume_ranking;

pub use correlation::correlations;
pub use monte_carlo::{MonteCarloConfig, MonteCarloEngine};
pub use monthly::monthly_series;
pub use scatter::scatter_sample;
pub use summary::summary_stats;
pub use volatility::volatility_distribution;
pub use volume_ranking::volume_ranking;
