use crate::domain::quote::QuoteTable;
use crate::domain::report::ScatterPoint;
use crate::domain::stats::Stats;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index;

/// Uniform sample of `min(sample_size, table.len())` rows without
/// replacement. The same seed and table always give the same sample.
pub fn scatter_sample(table: &QuoteTable, sample_size: usize, seed: u64) -> Vec<ScatterPoint> {
    let quotes = table.quotes();
    let amount = sample_size.min(quotes.len());
    let mut rng = StdRng::seed_from_u64(seed);

    index::sample(&mut rng, quotes.len(), amount)
        .into_iter()
        .map(|i| {
            let q = &quotes[i];
            ScatterPoint {
                company: q.company.clone(),
                close: Stats::round_to(q.close, 2),
                daily_range: Stats::round_to(q.daily_range, 2),
                volume: q.volume,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::aggregation::fixtures::quote;
    use std::collections::HashSet;

    fn table(rows: usize) -> QuoteTable {
        let quotes = (0..rows)
            .map(|i| {
                let day = (i % 28) as u32 + 1;
                let month = (i / 28) as u32 % 12 + 1;
                let close = 100.0 + i as f64;
                quote("QCOM", (2020, month, day), close, close + 1.0, 99.0, i as u64)
            })
            .collect();
        QuoteTable::new(quotes, 0)
    }

    #[test]
    fn test_small_table_sampled_whole_without_duplicates() {
        let sample = scatter_sample(&table(10), 500, 42);
        assert_eq!(sample.len(), 10);

        let volumes: HashSet<u64> = sample.iter().map(|p| p.volume).collect();
        assert_eq!(volumes.len(), 10);
    }

    #[test]
    fn test_large_table_capped_at_sample_size() {
        let sample = scatter_sample(&table(300), 50, 42);
        assert_eq!(sample.len(), 50);
    }

    #[test]
    fn test_sample_is_reproducible() {
        let t = table(120);
        assert_eq!(scatter_sample(&t, 30, 7), scatter_sample(&t, 30, 7));
    }
}
