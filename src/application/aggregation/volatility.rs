use crate::domain::quote::QuoteTable;
use crate::domain::report::HistogramBucket;
use crate::domain::stats::Stats;

/// Equal-width histogram of daily ranges with labelled buckets.
pub fn volatility_distribution(table: &QuoteTable, bins: usize) -> Vec<HistogramBucket> {
    let (edges, counts) = Stats::histogram(&table.daily_ranges(), bins);

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBucket {
            range: format!("{:.1}-{:.1}", edges[i], edges[i + 1]),
            count,
        })
        .collect()
}
