//! Temporal coverage: reporting window, fiscal year, release estimate.

use chrono::{Datelike, NaiveDate};
use spend_model::{NormalizedTable, ReportingPeriod, TemporalCoverage};

/// UK fiscal year label (April to March) for a reporting month.
///
/// ```
/// use spend_model::ReportingPeriod;
/// use spend_report::fiscal_year_label;
///
/// assert_eq!(fiscal_year_label(ReportingPeriod::new(2025, 1).unwrap()), "2024-25");
/// assert_eq!(fiscal_year_label(ReportingPeriod::new(2025, 4).unwrap()), "2025-26");
/// ```
pub fn fiscal_year_label(period: ReportingPeriod) -> String {
    let start = if period.month() >= 4 {
        period.year()
    } else {
        period.year() - 1
    };
    format!("{start}-{:02}", (start + 1).rem_euclid(100))
}

/// Expected release date of the following month's data.
///
/// Falls back to the last day of the following month when `day` does not
/// exist in it.
pub fn next_publication_date(period: ReportingPeriod, day: u32) -> NaiveDate {
    let next = period.next();
    NaiveDate::from_ymd_opt(next.year(), next.month(), day.max(1)).unwrap_or(next.last_day())
}

/// Nominal window plus the observed payment date range.
pub fn temporal_coverage(period: ReportingPeriod, table: &NormalizedTable) -> TemporalCoverage {
    let mut observed: Vec<NaiveDate> = table
        .rows()
        .iter()
        .filter_map(|row| row.date.as_deref())
        .filter_map(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
        .collect();
    observed.sort_unstable();

    TemporalCoverage {
        period: period.to_string(),
        fiscal_year: fiscal_year_label(period),
        start_date: iso(period.first_day()),
        end_date: iso(period.last_day()),
        earliest_payment_date: observed.first().copied().map(iso),
        latest_payment_date: observed.last().copied().map(iso),
    }
}

fn iso(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

#[cfg(test)]
mod tests {
    use spend_model::SpendRecord;

    use super::*;

    fn period(year: i32, month: u32) -> ReportingPeriod {
        ReportingPeriod::new(year, month).unwrap()
    }

    #[test]
    fn fiscal_year_boundaries() {
        assert_eq!(fiscal_year_label(period(2025, 3)), "2024-25");
        assert_eq!(fiscal_year_label(period(2025, 4)), "2025-26");
        assert_eq!(fiscal_year_label(period(2099, 12)), "2099-00");
    }

    #[test]
    fn next_publication_rolls_over_the_year() {
        assert_eq!(
            next_publication_date(period(2024, 12), 15),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
        );
        assert_eq!(
            next_publication_date(period(2025, 1), 31),
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
    }

    #[test]
    fn observed_range_is_independent_of_the_window() {
        let rows = ["2025-02-03", "2024-12-30", "not-a-date"]
            .into_iter()
            .map(|date| SpendRecord {
                date: Some(date.to_string()),
                ..SpendRecord::default()
            })
            .collect();
        let coverage = temporal_coverage(period(2025, 1), &NormalizedTable::new(rows));
        assert_eq!(coverage.start_date, "2025-01-01");
        assert_eq!(coverage.end_date, "2025-01-31");
        assert_eq!(coverage.earliest_payment_date.as_deref(), Some("2024-12-30"));
        assert_eq!(coverage.latest_payment_date.as_deref(), Some("2025-02-03"));
    }

    #[test]
    fn no_dates_means_no_observed_range() {
        let coverage = temporal_coverage(period(2025, 1), &NormalizedTable::default());
        assert_eq!(coverage.period, "2025-01");
        assert!(coverage.earliest_payment_date.is_none());
        assert!(coverage.latest_payment_date.is_none());
    }
}
