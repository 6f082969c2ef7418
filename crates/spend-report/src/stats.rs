//! Descriptive statistics over payment amounts.

use spend_model::{FinancialSummary, PaymentStatistics};

/// Linear-interpolation percentile of sorted, non-empty `values`.
///
/// `quantile` is clamped to `[0, 1]`.
pub fn percentile(sorted: &[f64], quantile: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let rank = quantile.clamp(0.0, 1.0) * last as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let weight = rank - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * weight)
}

/// Sum and distribution of the given amounts.
pub fn financial_summary(amounts: &[f64]) -> FinancialSummary {
    let total: f64 = amounts.iter().sum();
    if amounts.is_empty() {
        return FinancialSummary {
            total_amount_gbp: 0.0,
            payment_statistics: PaymentStatistics::default(),
        };
    }

    let mut sorted = amounts.to_vec();
    sorted.sort_by(f64::total_cmp);

    FinancialSummary {
        total_amount_gbp: total,
        payment_statistics: PaymentStatistics {
            min: sorted.first().copied(),
            max: sorted.last().copied(),
            mean: Some(total / sorted.len() as f64),
            median: percentile(&sorted, 0.5),
            p95: percentile(&sorted, 0.95),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentile_interpolates_between_ranks() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(percentile(&sorted, 0.5), Some(2.5));
        assert_eq!(percentile(&sorted, 0.0), Some(1.0));
        assert_eq!(percentile(&sorted, 1.0), Some(4.0));
        let p95 = percentile(&sorted, 0.95).unwrap();
        assert!((p95 - 3.85).abs() < 1e-9);
    }

    #[test]
    fn percentile_of_nothing_is_absent() {
        assert_eq!(percentile(&[], 0.5), None);
        assert_eq!(percentile(&[7.0], 0.95), Some(7.0));
    }

    #[test]
    fn summary_of_amounts() {
        let summary = financial_summary(&[300.0, -100.0, 100.0]);
        assert_eq!(summary.total_amount_gbp, 300.0);
        let stats = summary.payment_statistics;
        assert_eq!(stats.min, Some(-100.0));
        assert_eq!(stats.max, Some(300.0));
        assert_eq!(stats.mean, Some(100.0));
        assert_eq!(stats.median, Some(100.0));
    }

    #[test]
    fn empty_summary_has_zero_total_and_no_statistics() {
        let summary = financial_summary(&[]);
        assert_eq!(summary.total_amount_gbp, 0.0);
        assert_eq!(summary.payment_statistics, PaymentStatistics::default());
    }
}
