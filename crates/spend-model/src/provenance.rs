//! Facts about where a source table came from.

/// How the worksheet holding the data was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorksheetChoice {
    /// Single-table source with no worksheets.
    Csv,
    /// Picked by the signal-column heuristic.
    Auto { sheet: String, fallback: bool },
    /// Named explicitly by the caller.
    Manual { sheet: String },
}

impl WorksheetChoice {
    /// Sheet name, or `<csv>` for single-table sources.
    pub fn sheet_label(&self) -> &str {
        match self {
            Self::Csv => "<csv>",
            Self::Auto { sheet, .. } | Self::Manual { sheet } => sheet,
        }
    }

    pub fn selector(&self) -> &'static str {
        match self {
            Self::Csv | Self::Auto { .. } => "auto",
            Self::Manual { .. } => "manual",
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            Self::Csv => "single table source",
            Self::Auto {
                fallback: false, ..
            } => "most signal columns",
            Self::Auto { fallback: true, .. } => "no signal columns found; first sheet",
            Self::Manual { .. } => "requested by caller",
        }
    }
}

/// Provenance facts supplied alongside a raw table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    pub publication_url: String,
    pub source_url: String,
    /// File name of the downloaded asset.
    pub workbook: String,
    pub worksheet: WorksheetChoice,
    pub bytes: u64,
    pub content_type: String,
    pub sha256: String,
}
