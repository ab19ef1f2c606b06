//! Configuration module for the stock dashboard pipeline.
//!
//! Every tunable is fixed at build time. The CLI may redirect the input
//! and output paths but never reads the environment or a config file.

pub mod static_blocks;

use crate::application::aggregation::monte_carlo::MonteCarloConfig;
use std::path::PathBuf;

pub const DEFAULT_INPUT_PATH: &str = "data.csv";
pub const DEFAULT_OUTPUT_DIR: &str = ".";
pub const DEFAULT_JSON_NAME: &str = "stock_data.json";
pub const DEFAULT_SCRIPT_NAME: &str = "stock_data.js";
pub const SCRIPT_CONSTANT: &str = "STOCK_DATA";

pub const SCATTER_SAMPLE_SIZE: usize = 500;
pub const HISTOGRAM_BINS: usize = 20;
pub const SAMPLING_SEED: u64 = 42;

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    pub json_name: String,
    pub script_name: String,
    /// Identifier the script variant assigns the document to.
    pub script_constant: String,
    pub scatter_sample_size: usize,
    pub histogram_bins: usize,
    pub sampling_seed: u64,
    pub monte_carlo: MonteCarloConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            json_name: DEFAULT_JSON_NAME.to_string(),
            script_name: DEFAULT_SCRIPT_NAME.to_string(),
            script_constant: SCRIPT_CONSTANT.to_string(),
            scatter_sample_size: SCATTER_SAMPLE_SIZE,
            histogram_bins: HISTOGRAM_BINS,
            sampling_seed: SAMPLING_SEED,
            monte_carlo: MonteCarloConfig::default(),
        }
    }
}

impl PipelineConfig {
    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join(&self.json_name)
    }

    pub fn script_path(&self) -> PathBuf {
        self.output_dir.join(&self.script_name)
    }
}
