//! JSON document sink.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use spend_model::{MetadataRecord, NormalizedTable, ReportingPeriod, SpendDocument};
use tracing::info;

/// `<root>/<year>/<year>-<month>.json`.
pub fn output_path(root: &Path, period: ReportingPeriod) -> PathBuf {
    root.join(format!("{:04}", period.year()))
        .join(format!("{period}.json"))
}

/// Writes `{ "metadata": ..., "data": [...] }` for `period` under `root`.
///
/// The document is written to a sibling temporary file and renamed into
/// place, so readers never observe a partial file.
pub fn write_document(
    root: &Path,
    period: ReportingPeriod,
    metadata: &MetadataRecord,
    data: &NormalizedTable,
) -> Result<PathBuf> {
    let path = output_path(root, period);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display()))?;
    }

    let staging = path.with_extension("json.tmp");
    {
        let file = File::create(&staging)
            .with_context(|| format!("create {}", staging.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &SpendDocument { metadata, data })
            .context("serialize spend document")?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }
    fs::rename(&staging, &path)
        .with_context(|| format!("move {} into place", path.display()))?;

    info!(path = %path.display(), rows = data.len(), "wrote spend document");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_layout() {
        let period = ReportingPeriod::new(2025, 3).unwrap();
        assert_eq!(
            output_path(Path::new("/out"), period),
            PathBuf::from("/out/2025/2025-03.json")
        );
    }
}
