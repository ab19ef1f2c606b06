use crate::domain::quote::QuoteTable;
use crate::domain::report::SummaryRow;
use crate::domain::stats::Stats;

/// Per-company descriptive statistics, one row per ticker in ticker order.
///
/// Standard deviations use the sample convention and are `None` for a
/// company with a single record.
pub fn summary_stats(table: &QuoteTable) -> Vec<SummaryRow> {
    table
        .by_company()
        .into_iter()
        .map(|(company, quotes)| {
            let closes: Vec<f64> = quotes.iter().map(|q| q.close).collect();
            let volumes: Vec<f64> = quotes.iter().map(|q| q.volume as f64).collect();
            let ranges: Vec<f64> = quotes.iter().map(|q| q.daily_range).collect();

            SummaryRow {
                company: company.to_string(),
                avg_close: Stats::round_opt(Stats::mean(&closes), 2),
                min_close: Stats::round_opt(Stats::min(&closes), 2),
                max_close: Stats::round_opt(Stats::max(&closes), 2),
                std_close: Stats::round_opt(Stats::sample_std_dev(&closes), 2),
                avg_volume: Stats::round_opt(Stats::mean(&volumes), 2),
                avg_daily_range: Stats::round_opt(Stats::mean(&ranges), 2),
                std_daily_range: Stats::round_opt(Stats::sample_std_dev(&ranges), 2),
                records: quotes.len(),
            }
        })
        .collect()
}
