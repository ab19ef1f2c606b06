//! Output views and the result document handed to the dashboard.
//!
//! Field names serialize in camelCase, which is the contract the dashboard
//! reads. Undefined statistics serialize as `null`.

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRow {
    pub company: String,
    pub avg_close: Option<f64>,
    pub min_close: Option<f64>,
    pub max_close: Option<f64>,
    pub std_close: Option<f64>,
    pub avg_volume: Option<f64>,
    pub avg_daily_range: Option<f64>,
    pub std_daily_range: Option<f64>,
    pub records: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPoint {
    /// `YYYY-MM`
    pub date: String,
    pub close: Option<f64>,
    pub volume: u64,
    pub daily_range: Option<f64>,
}

/// Ticker -> chronologically ordered monthly points.
pub type MonthlySeries = BTreeMap<String, Vec<MonthlyPoint>>;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeRankEntry {
    pub company: String,
    pub avg_volume: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationEntry {
    pub pair: &'static str,
    pub coefficient: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterPoint {
    pub company: String,
    pub close: f64,
    pub daily_range: f64,
    pub volume: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBucket {
    pub range: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonteCarloResult {
    pub values: Vec<f64>,
    pub mean: f64,
    pub std: f64,
    pub percentile5: f64,
    pub percentile95: f64,
}

/// Precomputed one-way ANOVA on volume by company.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnovaResult {
    pub f_statistic: f64,
    pub p_value: &'static str,
    pub effect_size: f64,
    pub conclusion: &'static str,
}

/// Precomputed regression of daily range on close.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegressionResult {
    pub r_squared: f64,
    pub coefficient: f64,
    pub intercept: f64,
    pub beta: f64,
    pub equation: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub total_records: usize,
    pub companies: Vec<String>,
    pub date_range: DateRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultDocument {
    pub metadata: Metadata,
    pub summary: Vec<SummaryRow>,
    pub monthly_data: MonthlySeries,
    pub volume_ranking: Vec<VolumeRankEntry>,
    pub correlations: Vec<CorrelationEntry>,
    pub scatter_data: Vec<ScatterPoint>,
    pub volatility_distribution: Vec<HistogramBucket>,
    pub monte_carlo: MonteCarloResult,
    pub anova: AnovaResult,
    pub regression: RegressionResult,
    pub colors: BTreeMap<&'static str, &'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_row_serializes_camel_case_with_null_std() {
        let row = SummaryRow {
            company: "AAPL".to_string(),
            avg_close: Some(11.0),
            min_close: Some(11.0),
            max_close: Some(11.0),
            std_close: None,
            avg_volume: Some(100.0),
            avg_daily_range: Some(2.0),
            std_daily_range: None,
            records: 1,
        };

        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["avgClose"], json!(11.0));
        assert_eq!(value["stdClose"], json!(null));
        assert_eq!(value["stdDailyRange"], json!(null));
        assert_eq!(value["records"], json!(1));
    }

    #[test]
    fn test_monthly_point_keys() {
        let point = MonthlyPoint {
            date: "2020-01".to_string(),
            close: Some(11.0),
            volume: 150,
            daily_range: Some(2.0),
        };
        let value = serde_json::to_value(&point).unwrap();
        assert_eq!(
            value,
            json!({"date": "2020-01", "close": 11.0, "volume": 150, "dailyRange": 2.0})
        );
    }
}
