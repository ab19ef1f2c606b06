use crate::domain::quote::{Quote, QuoteTable};
use crate::domain::report::{MonthlyPoint, MonthlySeries};
use crate::domain::stats::Stats;
use std::collections::BTreeMap;

/// Monthly averages per company, keyed by ticker and ordered by month.
/// Mean volume is truncated to an integer.
pub fn monthly_series(table: &QuoteTable) -> MonthlySeries {
    table
        .by_company()
        .into_iter()
        .map(|(company, quotes)| (company.to_string(), company_months(&quotes)))
        .collect()
}

fn company_months(quotes: &[&Quote]) -> Vec<MonthlyPoint> {
    let mut months: BTreeMap<(i32, u32), Vec<&Quote>> = BTreeMap::new();
    for &quote in quotes {
        months.entry(quote.year_month()).or_default().push(quote);
    }

    months
        .into_iter()
        .map(|((year, month), bucket)| {
            let closes: Vec<f64> = bucket.iter().map(|q| q.close).collect();
            let volumes: Vec<f64> = bucket.iter().map(|q| q.volume as f64).collect();
            let ranges: Vec<f64> = bucket.iter().map(|q| q.daily_range).collect();

            MonthlyPoint {
                date: format!("{:04}-{:02}", year, month),
                close: Stats::round_opt(Stats::mean(&closes), 2),
                volume: Stats::mean(&volumes).map_or(0, |v| v as u64),
                daily_range: Stats::round_opt(Stats::mean(&ranges), 2),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::aggregation::fixtures::{quote, three_day_table};

    #[test]
    fn test_single_month_series() {
        let series = monthly_series(&three_day_table());
        let aapl = &series["AAPL"];

        assert_eq!(aapl.len(), 1);
        assert_eq!(aapl[0].date, "2020-01");
        assert_eq!(aapl[0].close, Some(11.0));
        assert_eq!(aapl[0].volume, 150);
        assert_eq!(aapl[0].daily_range, Some(2.0));
    }

    #[test]
    fn test_months_are_chronological_and_volume_truncates() {
        let table = QuoteTable::new(
            vec![
                quote("TSLA", (2021, 2, 1), 20.0, 21.0, 19.0, 10),
                quote("TSLA", (2020, 12, 30), 10.0, 11.0, 9.0, 100),
                quote("TSLA", (2020, 12, 31), 12.0, 13.0, 11.0, 101),
                quote("TSLA", (2021, 1, 4), 15.0, 16.0, 14.0, 7),
            ],
            0,
        );

        let tsla = &monthly_series(&table)["TSLA"];
        let labels: Vec<_> = tsla.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(labels, vec!["2020-12", "2021-01", "2021-02"]);

        // Mean of 100 and 101 is 100.5, truncated rather than rounded.
        assert_eq!(tsla[0].volume, 100);
        assert_eq!(tsla[0].close, Some(11.0));
    }
}
