use crate::domain::quote::QuoteTable;
use crate::domain::report::CorrelationEntry;
use crate::domain::stats::Stats;

/// Pearson coefficients over the whole table for the three fixed column
/// pairs. A zero-variance column yields `None`.
pub fn correlations(table: &QuoteTable) -> Vec<CorrelationEntry> {
    let closes = table.closes();
    let volumes = table.volumes();
    let ranges = table.daily_ranges();

    [
        ("Price-Volatility", &closes, &ranges),
        ("Price-Volume", &closes, &volumes),
        ("Volume-Volatility", &volumes, &ranges),
    ]
    .into_iter()
    .map(|(pair, xs, ys)| CorrelationEntry {
        pair,
        coefficient: Stats::round_opt(Stats::pearson(xs, ys), 3),
    })
    .collect()
}
