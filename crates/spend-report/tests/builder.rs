//! Metadata assembly over small normalized tables.

use chrono::{TimeZone, Utc};
use spend_model::{
    CanonicalField, ColumnMapping, Coverage, MappedColumn, MatchKind, NormalizedTable, Provenance,
    ReportingPeriod, SpendRecord, WorksheetChoice,
};
use spend_report::{DatasetProfile, MetadataBuilder, RunFacts};

fn record(date: &str, supplier: &str, expense_type: &str, amount: f64) -> SpendRecord {
    SpendRecord {
        entity: Some("HMT".to_string()),
        date: Some(date.to_string()),
        expense_type: Some(expense_type.to_string()),
        expense_area: Some("Digital".to_string()),
        supplier: Some(supplier.to_string()),
        amount_gbp: Some(amount),
        description: Some("Services".to_string()),
        ..SpendRecord::default()
    }
}

fn sample_table() -> NormalizedTable {
    NormalizedTable::new(vec![
        record("2025-01-05", "A", "IT", 300.0),
        record("2025-01-20", "B", "IT", 300.0),
        record("2024-12-31", "C", "Estates", 100.0),
    ])
}

fn provenance() -> Provenance {
    Provenance {
        publication_url: "https://www.gov.uk/government/publications/hmt-spend-greater-than-25000-january-2025".to_string(),
        source_url: "https://assets.publishing.service.gov.uk/hmt.xlsx".to_string(),
        workbook: "hmt.xlsx".to_string(),
        worksheet: WorksheetChoice::Auto {
            sheet: "Data".to_string(),
            fallback: false,
        },
        bytes: 1024,
        content_type: "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            .to_string(),
        sha256: "00ff".to_string(),
    }
}

fn mapping() -> ColumnMapping {
    ColumnMapping::from_entries([(
        CanonicalField::Supplier,
        MappedColumn {
            index: 0,
            label: "Supplier".to_string(),
            match_kind: MatchKind::Exact,
        },
    )])
}

fn facts<'a>(
    table: &'a NormalizedTable,
    mapping: &'a ColumnMapping,
    provenance: &'a Provenance,
) -> RunFacts<'a> {
    RunFacts {
        period: ReportingPeriod::new(2025, 1).unwrap(),
        table,
        mapping,
        source_rows: 5,
        provenance,
        parse_warnings: 1,
        processed_at: Utc.with_ymd_and_hms(2025, 2, 3, 4, 5, 6).unwrap(),
    }
}

#[test]
fn builds_the_hm_treasury_record() {
    let table = sample_table();
    let mapping = mapping();
    let provenance = provenance();
    let profile = DatasetProfile {
        top_suppliers: 2,
        ..DatasetProfile::default()
    };
    let record = MetadataBuilder::new(&profile).build(&facts(&table, &mapping, &provenance));

    assert_eq!(record.title, "HM Treasury Expenditure Over £25,000 - January 2025");
    assert_eq!(record.schema_version, "1.1.0");
    assert_eq!(record.record_counts.transaction_count, 3);
    assert_eq!(record.record_counts.source_record_count, 5);
    assert_eq!(record.record_counts.unique_suppliers, 3);
    assert_eq!(record.record_counts.unique_entities, 1);
    assert_eq!(record.record_counts.unique_expense_types, 2);
    assert_eq!(record.financial_summary.total_amount_gbp, 700.0);
    assert_eq!(record.financial_summary.payment_statistics.median, Some(300.0));
    assert_eq!(record.financial_summary.payment_statistics.p95, Some(300.0));
    assert_eq!(record.data_quality.completeness_score, 1.0);
    assert_eq!(record.data_quality.coverage, Coverage::Complete);
    assert_eq!(record.data_quality.validation.parse_warnings, 1);
    assert_eq!(
        record.data_quality.missing_data_counts.get(CanonicalField::DepartmentFamily),
        Some(3)
    );

    let suppliers: Vec<_> = record
        .top_suppliers
        .groups
        .iter()
        .map(|g| g.key.as_deref())
        .collect();
    assert_eq!(suppliers, [Some("A"), Some("B")]);

    let coverage = serde_json::to_string(&record.temporal_coverage).unwrap();
    insta::assert_snapshot!(coverage, @r#"{"period":"2025-01","fiscal_year":"2024-25","start_date":"2025-01-01","end_date":"2025-01-31","earliest_payment_date":"2024-12-31","latest_payment_date":"2025-01-20"}"#);

    let processing = serde_json::to_string(&record.processing_info).unwrap();
    insta::assert_snapshot!(processing, @r#"{"generator":"hmt-spend-json@1.2.0","processed_timestamp":"2025-02-03T04:05:06.000000Z","update_frequency":"monthly","next_publication_date":"2025-02-15"}"#);

    let worksheet = serde_json::to_string(&record.source_worksheet).unwrap();
    insta::assert_snapshot!(worksheet, @r#"{"workbook":"hmt.xlsx","worksheet":"Data","selector":"auto","reason":"most signal columns"}"#);
}

#[test]
fn top_level_keys_follow_the_contract_order() {
    let table = sample_table();
    let mapping = mapping();
    let provenance = provenance();
    let profile = DatasetProfile::default();
    let record = MetadataBuilder::new(&profile).build(&facts(&table, &mapping, &provenance));
    let json = serde_json::to_string(&record).unwrap();

    let keys = [
        "title",
        "publisher",
        "department_code",
        "publication_url",
        "source_url",
        "license",
        "license_url",
        "schema_version",
        "data_classification",
        "spending_threshold",
        "currency",
        "amount_precision",
        "temporal_coverage",
        "processing_info",
        "source_worksheet",
        "source_file",
        "column_mapping",
        "record_counts",
        "financial_summary",
        "data_quality",
        "data_completeness",
        "known_limitations",
        "top_suppliers",
        "spending_by_entity",
        "spending_by_expense_type",
        "contact_info",
        "keywords",
        "themes",
    ];
    let positions: Vec<usize> = keys
        .iter()
        .map(|key| json.find(&format!("\"{key}\":")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(json.contains(r#""column_mapping":{"supplier":"Supplier"}"#));
}

#[test]
fn empty_table_degrades_without_failing() {
    let table = NormalizedTable::default();
    let mapping = ColumnMapping::default();
    let provenance = provenance();
    let profile = DatasetProfile::default();
    let record = MetadataBuilder::new(&profile).build(&facts(&table, &mapping, &provenance));

    assert_eq!(record.data_quality.completeness_score, 0.0);
    assert_eq!(record.data_quality.coverage, Coverage::Unknown);
    assert_eq!(record.financial_summary.total_amount_gbp, 0.0);
    assert_eq!(record.financial_summary.payment_statistics.mean, None);
    assert!(record.top_suppliers.groups.is_empty());
    assert_eq!(record.temporal_coverage.earliest_payment_date, None);
}

#[test]
fn only_the_timestamp_differs_between_runs() {
    let table = sample_table();
    let mapping = mapping();
    let provenance = provenance();
    let profile = DatasetProfile::default();
    let builder = MetadataBuilder::new(&profile);

    let first = builder.build(&facts(&table, &mapping, &provenance));
    let mut later = facts(&table, &mapping, &provenance);
    later.processed_at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    let mut second = builder.build(&later);

    assert_ne!(
        first.processing_info.processed_timestamp,
        second.processing_info.processed_timestamp
    );
    second.processing_info.processed_timestamp = first.processing_info.processed_timestamp.clone();
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
