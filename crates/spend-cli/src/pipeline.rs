//! One monthly run: load, normalize, describe, write.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use spend_ingest::{LoadOptions, load_source};
use spend_map::{AliasRegistry, UnresolvedField};
use spend_model::{MetadataRecord, Provenance, ReportingPeriod};
use spend_report::{DatasetProfile, MetadataBuilder, RunFacts};
use spend_transform::{CoercionStats, RowNormalizer};
use tracing::{info, info_span};

use crate::publication::{asset_name, publication_url};
use crate::sink::write_document;

/// Inputs of one run, resolved from flags and configuration.
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub period: ReportingPeriod,
    pub input: PathBuf,
    pub output_root: PathBuf,
    /// Where the asset was downloaded from; defaults to the input path.
    pub source_url: Option<String>,
    /// Defaults to the series' GOV.UK page for `period`.
    pub publication_url: Option<String>,
    /// Defaults to the MIME type of the input's extension.
    pub content_type: Option<String>,
    pub sheet: Option<String>,
    pub processed_at: DateTime<Utc>,
}

/// What a run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub path: PathBuf,
    pub metadata: MetadataRecord,
    pub unresolved: Vec<UnresolvedField>,
    pub stats: CoercionStats,
}

/// Executes one run. Nothing is written unless every stage succeeds.
pub fn run(
    request: &RunRequest,
    registry: &AliasRegistry,
    profile: &DatasetProfile,
) -> Result<RunOutcome> {
    let span = info_span!("run", period = %request.period);
    let _guard = span.enter();
    let start = Instant::now();

    let options = LoadOptions {
        sheet: request.sheet.clone(),
    };
    let source = load_source(&request.input, &options)
        .with_context(|| format!("load {}", request.input.display()))?;

    let normalized = RowNormalizer::new(registry).normalize(&source.table);

    let source_url = request
        .source_url
        .clone()
        .unwrap_or_else(|| request.input.display().to_string());
    let provenance = Provenance {
        publication_url: request
            .publication_url
            .clone()
            .unwrap_or_else(|| publication_url(request.period)),
        workbook: if request.source_url.is_some() {
            asset_name(&source_url)
        } else {
            source.file_name.clone()
        },
        source_url,
        worksheet: source.worksheet.clone(),
        bytes: source.fingerprint.bytes,
        content_type: request
            .content_type
            .clone()
            .unwrap_or_else(|| source.format.content_type().to_string()),
        sha256: source.fingerprint.sha256.clone(),
    };

    let metadata = MetadataBuilder::new(profile).build(&RunFacts {
        period: request.period,
        table: &normalized.table,
        mapping: &normalized.mapping,
        source_rows: normalized.source_rows,
        provenance: &provenance,
        parse_warnings: normalized.stats.total(),
        processed_at: request.processed_at,
    });

    let path = write_document(
        &request.output_root,
        request.period,
        &metadata,
        &normalized.table,
    )?;

    info!(
        path = %path.display(),
        duration_ms = start.elapsed().as_millis(),
        "run complete"
    );

    Ok(RunOutcome {
        path,
        metadata,
        unresolved: normalized.unresolved,
        stats: normalized.stats,
    })
}
