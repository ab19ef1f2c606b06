use crate::application::aggregation::{
    MonteCarloEngine, correlations, monthly_series, scatter_sample, summary_stats,
    volatility_distribution, volume_ranking,
};
use crate::config::PipelineConfig;
use crate::config::static_blocks::{ANOVA, REGRESSION, company_colors};
use crate::domain::errors::PipelineError;
use crate::domain::quote::QuoteTable;
use crate::domain::report::{DateRange, Metadata, ResultDocument};

/// Computes every view over `table` and merges them with the static blocks.
///
/// The views are independent, so they run on the rayon pool and are joined
/// before assembly. Output is the same as a sequential run.
pub fn build_document(
    table: &QuoteTable,
    config: &PipelineConfig,
) -> Result<ResultDocument, PipelineError> {
    let (first, last) = table.date_range().ok_or_else(|| PipelineError::EmptyTable {
        path: config.input_path.clone(),
    })?;

    let ((summary, monthly_data), ((ranking, correlations), ((scatter, volatility), monte_carlo))) =
        rayon::join(
            || rayon::join(|| summary_stats(table), || monthly_series(table)),
            || {
                rayon::join(
                    || rayon::join(|| volume_ranking(table), || correlations(table)),
                    || {
                        rayon::join(
                            || {
                                rayon::join(
                                    || {
                                        scatter_sample(
                                            table,
                                            config.scatter_sample_size,
                                            config.sampling_seed,
                                        )
                                    },
                                    || volatility_distribution(table, config.histogram_bins),
                                )
                            },
                            || MonteCarloEngine::simulate(&config.monte_carlo),
                        )
                    },
                )
            },
        );

    Ok(ResultDocument {
        metadata: Metadata {
            total_records: table.len(),
            companies: table.companies(),
            date_range: DateRange {
                start: first.format("%Y-%m-%d").to_string(),
                end: last.format("%Y-%m-%d").to_string(),
            },
        },
        summary,
        monthly_data,
        volume_ranking: ranking,
        correlations,
        scatter_data: scatter,
        volatility_distribution: volatility,
        monte_carlo: monte_carlo?,
        anova: ANOVA,
        regression: REGRESSION,
        colors: company_colors(),
    })
}
