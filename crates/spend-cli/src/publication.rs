//! Publication conventions of the monthly series.

use chrono::NaiveDate;
use spend_model::ReportingPeriod;

const PUBLICATION_BASE: &str =
    "https://www.gov.uk/government/publications/hmt-spend-greater-than-25000";

/// GOV.UK page announcing the data for `period`.
pub fn publication_url(period: ReportingPeriod) -> String {
    format!(
        "{PUBLICATION_BASE}-{}-{}",
        period.month_name().to_lowercase(),
        period.year()
    )
}

/// The period processed when none is requested: the month before `today`.
pub fn default_period(today: NaiveDate) -> ReportingPeriod {
    ReportingPeriod::containing(today).previous()
}

/// Last path segment of a URL or file path, without query or fragment.
pub fn asset_name(location: &str) -> String {
    let path = location
        .split(['?', '#'])
        .next()
        .unwrap_or(location)
        .trim_end_matches('/');
    path.rsplit(['/', '\\'])
        .next()
        .unwrap_or(path)
        .to_string()
}
