use statrs::statistics::Statistics;

/// Shared statistics utilities for the aggregation views.
///
/// Missing values are carried as NaN and skipped, the way a dataframe
/// skips them. Undefined results come back as `None`.
pub struct Stats;

impl Stats {
    /// Rounds half away from zero to `places` decimals. NaN passes through.
    pub fn round_to(value: f64, places: i32) -> f64 {
        let factor = 10f64.powi(places);
        (value * factor).round() / factor
    }

    pub fn round_opt(value: Option<f64>, places: i32) -> Option<f64> {
        value.map(|v| Self::round_to(v, places))
    }

    fn present(values: &[f64]) -> Vec<f64> {
        values.iter().copied().filter(|v| !v.is_nan()).collect()
    }

    pub fn mean(values: &[f64]) -> Option<f64> {
        let present = Self::present(values);
        if present.is_empty() {
            return None;
        }
        Some(Statistics::mean(&present))
    }

    /// Sample standard deviation (n - 1 denominator). Undefined below two values.
    pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
        let present = Self::present(values);
        if present.len() < 2 {
            return None;
        }
        Some(Statistics::std_dev(&present))
    }

    pub fn min(values: &[f64]) -> Option<f64> {
        let present = Self::present(values);
        if present.is_empty() {
            return None;
        }
        Some(Statistics::min(&present))
    }

    pub fn max(values: &[f64]) -> Option<f64> {
        let present = Self::present(values);
        if present.is_empty() {
            return None;
        }
        Some(Statistics::max(&present))
    }

    /// Pearson product-moment correlation over pairwise-complete observations.
    pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
        let (xs, ys): (Vec<f64>, Vec<f64>) = xs
            .iter()
            .zip(ys)
            .filter(|(x, y)| !x.is_nan() && !y.is_nan())
            .map(|(x, y)| (*x, *y))
            .unzip();

        let n = xs.len();
        if n < 2 {
            return None;
        }

        let mean_x = xs.iter().sum::<f64>() / n as f64;
        let mean_y = ys.iter().sum::<f64>() / n as f64;

        let mut numer = 0.0;
        let mut var_x = 0.0;
        let mut var_y = 0.0;
        for (x, y) in xs.iter().zip(&ys) {
            let dx = x - mean_x;
            let dy = y - mean_y;
            numer += dx * dy;
            var_x += dx * dx;
            var_y += dy * dy;
        }

        if var_x == 0.0 || var_y == 0.0 {
            return None;
        }

        Some((numer / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
    }

    /// Percentile with linear interpolation between closest ranks.
    /// `sorted` must be ascending and free of NaN.
    pub fn percentile(sorted: &[f64], pct: f64) -> Option<f64> {
        if sorted.is_empty() {
            return None;
        }
        let rank = (pct / 100.0).clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
        let lo = rank.floor() as usize;
        let hi = rank.ceil() as usize;
        let frac = rank - lo as f64;
        Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
    }

    /// Equal-width histogram. Returns `bins + 1` edges and `bins` counts;
    /// the last bin is closed on the right. NaN values are skipped.
    pub fn histogram(values: &[f64], bins: usize) -> (Vec<f64>, Vec<u64>) {
        let present = Self::present(values);
        let bins = bins.max(1);

        let (mut first, mut last) = match (Self::min(&present), Self::max(&present)) {
            (Some(lo), Some(hi)) => (lo, hi),
            _ => (0.0, 1.0),
        };
        if first == last {
            first -= 0.5;
            last += 0.5;
        }

        let step = (last - first) / bins as f64;
        let mut edges: Vec<f64> = (0..bins).map(|i| first + step * i as f64).collect();
        edges.push(last);

        let mut counts = vec![0u64; bins];
        let norm = bins as f64 / (last - first);
        for v in present {
            let mut idx = (((v - first) * norm) as usize).min(bins - 1);
            // Float error can land a value one bin off its edges.
            if idx > 0 && v < edges[idx] {
                idx -= 1;
            } else if idx + 1 < bins && v >= edges[idx + 1] {
                idx += 1;
            }
            counts[idx] += 1;
        }

        (edges, counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(Stats::round_to(2.345, 1), 2.3);
        assert_eq!(Stats::round_to(11.0, 2), 11.0);
        assert_eq!(Stats::round_to(-0.3186, 3), -0.319);
        assert!(Stats::round_to(f64::NAN, 2).is_nan());
    }

    #[test]
    fn test_mean_and_std_skip_nan() {
        let values = vec![10.0, f64::NAN, 12.0, 11.0];
        assert_eq!(Stats::mean(&values), Some(11.0));
        assert_eq!(Stats::sample_std_dev(&values), Some(1.0));
        assert_eq!(Stats::min(&values), Some(10.0));
        assert_eq!(Stats::max(&values), Some(12.0));
    }

    #[test]
    fn test_std_dev_undefined_for_single_value() {
        assert_eq!(Stats::sample_std_dev(&[42.0]), None);
        assert_eq!(Stats::mean(&[]), None);
    }

    #[test]
    fn test_pearson_perfect_and_degenerate() {
        let xs = vec![1.0, 2.0, 3.0, 4.0];
        let ys = vec![2.0, 4.0, 6.0, 8.0];
        let inverse = vec![8.0, 6.0, 4.0, 2.0];
        let flat = vec![5.0, 5.0, 5.0, 5.0];

        assert!((Stats::pearson(&xs, &ys).unwrap() - 1.0).abs() < 1e-12);
        assert!((Stats::pearson(&xs, &inverse).unwrap() + 1.0).abs() < 1e-12);
        assert_eq!(Stats::pearson(&xs, &flat), None);
        assert_eq!(Stats::pearson(&[1.0], &[2.0]), None);
    }

    #[test]
    fn test_percentile_interpolates() {
        let sorted = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(Stats::percentile(&sorted, 0.0), Some(1.0));
        assert_eq!(Stats::percentile(&sorted, 50.0), Some(3.0));
        assert!((Stats::percentile(&sorted, 95.0).unwrap() - 4.8).abs() < 1e-12);
        assert_eq!(Stats::percentile(&[], 5.0), None);
    }

    #[test]
    fn test_histogram_counts_every_value() {
        let values = vec![0.0, 0.5, 1.0, 1.5, 2.0, f64::NAN];
        let (edges, counts) = Stats::histogram(&values, 4);

        assert_eq!(edges, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
        // Max lands in the closed last bin.
        assert_eq!(counts, vec![1, 1, 1, 2]);
    }

    #[test]
    fn test_histogram_degenerate_range_widens() {
        let (edges, counts) = Stats::histogram(&[3.0, 3.0, 3.0], 2);
        assert_eq!(edges, vec![2.5, 3.0, 3.5]);
        assert_eq!(counts, vec![0, 3]);
    }
}
