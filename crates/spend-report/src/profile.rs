//! Publisher profile: the descriptive constants of a dataset series.

use serde::Deserialize;
use spend_model::{ContactInfo, FieldDisclosure};

/// Version of the metadata layout emitted by this crate.
pub const SCHEMA_VERSION: &str = "1.1.0";

/// Static facts about the publisher and the dataset series.
///
/// Every field has a default, so a configuration file only lists what
/// differs from the HM Treasury series.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatasetProfile {
    /// Title stem; the month is appended as ` - {Month YYYY}`.
    pub title_prefix: String,
    pub publisher: String,
    pub department_code: String,
    pub license: String,
    pub license_url: String,
    pub data_classification: String,
    pub spending_threshold: u64,
    pub currency: String,
    pub amount_precision: u32,
    pub generator: String,
    pub update_frequency: String,
    /// Day of the following month on which the next release is expected.
    pub publication_day: u32,
    pub top_suppliers: usize,
    pub top_entities: usize,
    pub top_expense_types: usize,
    pub data_completeness: Vec<FieldDisclosure>,
    pub known_limitations: Vec<String>,
    pub contact: ContactInfo,
    pub keywords: Vec<String>,
    pub themes: Vec<String>,
}

impl Default for DatasetProfile {
    fn default() -> Self {
        Self {
            title_prefix: "HM Treasury Expenditure Over £25,000".to_string(),
            publisher: "HM Treasury".to_string(),
            department_code: "HMT".to_string(),
            license: "Open Government Licence v3.0".to_string(),
            license_url:
                "https://www.nationalarchives.gov.uk/doc/open-government-licence/version/3/"
                    .to_string(),
            data_classification: "public".to_string(),
            spending_threshold: 25_000,
            currency: "GBP".to_string(),
            amount_precision: 2,
            generator: "hmt-spend-json@1.2.0".to_string(),
            update_frequency: "monthly".to_string(),
            publication_day: 15,
            top_suppliers: 10,
            top_entities: 50,
            top_expense_types: 50,
            data_completeness: vec![
                disclosure("supplier_postcode", "not_provided", "Supplier privacy protection"),
                disclosure(
                    "supplier_type",
                    "not_collected",
                    "Field not part of standard reporting",
                ),
                disclosure(
                    "contract_number",
                    "optional",
                    "Only required for framework contracts",
                ),
                disclosure(
                    "project_code",
                    "internal_use",
                    "Internal tracking codes not disclosed",
                ),
            ],
            known_limitations: strings(&[
                "Supplier details limited for privacy reasons",
                "Contract numbers only provided for framework agreements",
                "Some transactions may be aggregated for commercial sensitivity",
                "Excludes classified or security-related expenditure",
            ]),
            contact: ContactInfo {
                email: "public.enquiries@hmtreasury.gov.uk".to_string(),
                department: "HM Treasury Transparency Team".to_string(),
            },
            keywords: strings(&[
                "transparency",
                "public spending",
                "government expenditure",
                "HM Treasury",
            ]),
            themes: strings(&[
                "Public Finance",
                "Government Transparency",
                "Fiscal Accountability",
            ]),
        }
    }
}

fn disclosure(field: &str, status: &str, reason: &str) -> FieldDisclosure {
    FieldDisclosure {
        field: field.to_string(),
        status: status.to_string(),
        reason: reason.to_string(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}
