//! Results computed outside this pipeline, passed through verbatim.

use crate::domain::report::{AnovaResult, RegressionResult};
use std::collections::BTreeMap;

pub const ANOVA: AnovaResult = AnovaResult {
    f_statistic: 3015.193,
    p_value: "<0.001",
    effect_size: 0.519,
    conclusion: "H₀ rejected: Significant volume differences exist between companies",
};

pub const REGRESSION: RegressionResult = RegressionResult {
    r_squared: 0.608,
    coefficient: 0.031,
    intercept: -0.318,
    beta: 0.78,
    equation: "DailyRange = -0.318 + 0.031 × Close",
};

const COMPANY_COLORS: [(&str, &str); 10] = [
    ("AAPL", "#007AFF"),
    ("AMD", "#ED1C24"),
    ("AMZN", "#FF9900"),
    ("CSCO", "#049FD9"),
    ("META", "#0668E1"),
    ("MSFT", "#00A4EF"),
    ("NFLX", "#E50914"),
    ("QCOM", "#3253DC"),
    ("SBUX", "#00704A"),
    ("TSLA", "#CC0000"),
];

/// Dashboard color per ticker.
pub fn company_colors() -> BTreeMap<&'static str, &'static str> {
    COMPANY_COLORS.into_iter().collect()
}
