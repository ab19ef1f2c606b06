use crate::domain::quote::QuoteTable;
use crate::domain::report::VolumeRankEntry;
use crate::domain::stats::Stats;

/// Companies ordered by mean volume, highest first. Ties keep ticker order.
pub fn volume_ranking(table: &QuoteTable) -> Vec<VolumeRankEntry> {
    let mut means: Vec<(&str, f64)> = table
        .by_company()
        .into_iter()
        .map(|(company, quotes)| {
            let volumes: Vec<f64> = quotes.iter().map(|q| q.volume as f64).collect();
            (company, Stats::mean(&volumes).unwrap_or(0.0))
        })
        .collect();

    means.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    means
        .into_iter()
        .map(|(company, mean)| VolumeRankEntry {
            company: company.to_string(),
            avg_volume: mean as u64,
        })
        .collect()
}
