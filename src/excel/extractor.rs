//! Row extraction - workbook rows → snippet records

use crate::error::{SnippetError, SnippetResult};
use crate::excel::source::{CalamineSource, Cell, Row, SheetSource, COLUMNS};
use crate::types::SnippetRecord;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// Worksheet holding the ticket rows unless told otherwise.
pub const DEFAULT_SHEET: &str = "Bull";

/// Reads snippet records from a workbook on disk
pub struct RowExtractor {
    path: PathBuf,
    sheet: String,
}

impl RowExtractor {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            sheet: DEFAULT_SHEET.to_string(),
        }
    }

    /// Read from worksheets named `sheet` instead of the default.
    pub fn with_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.sheet = sheet.into();
        self
    }

    /// Open the workbook and extract every record.
    ///
    /// The workbook is closed before this returns.
    pub fn extract(&self) -> SnippetResult<Vec<SnippetRecord>> {
        let mut source = CalamineSource::open(&self.path)?;
        extract_records(&mut source, &self.sheet)
    }
}

/// Extract records from every sheet of `source` named exactly `sheet`, in
/// workbook order.
///
/// The first failing row aborts extraction; nothing read so far is returned.
pub fn extract_records<S: SheetSource + ?Sized>(
    source: &mut S,
    sheet: &str,
) -> SnippetResult<Vec<SnippetRecord>> {
    let matching: Vec<String> = source
        .sheet_names()
        .into_iter()
        .filter(|name| name == sheet)
        .collect();

    if matching.is_empty() {
        warn!(sheet, "workbook has no matching worksheet");
        return Ok(Vec::new());
    }

    let mut records = Vec::new();
    for name in &matching {
        let rows = source.rows(name)?;
        debug!(sheet = %name, rows = rows.len(), "reading worksheet");

        for row in &rows {
            let [tag, title, description] = row_text(name, row)?;
            match SnippetRecord::from_row(tag, title, description) {
                Some(record) => records.push(record),
                None => trace!(sheet = %name, row = row.number, "skipping header or blank row"),
            }
        }
    }

    Ok(records)
}

fn row_text(sheet: &str, row: &Row) -> SnippetResult<[Option<String>; 3]> {
    let [a, b, c] = &row.cells;
    Ok([
        cell_text(sheet, row.number, COLUMNS[0], a)?,
        cell_text(sheet, row.number, COLUMNS[1], b)?,
        cell_text(sheet, row.number, COLUMNS[2], c)?,
    ])
}

fn cell_text(sheet: &str, row: u32, column: char, cell: &Cell) -> SnippetResult<Option<String>> {
    match cell {
        Cell::Empty => Ok(None),
        Cell::Text(text) => Ok(Some(text.clone())),
        Cell::Error(value) => Err(SnippetError::DataFormat {
            sheet: sheet.to_string(),
            detail: format!("cell {}{} holds error value {}", column, row, value),
        }),
        Cell::Value { kind } => Err(SnippetError::Cast {
            sheet: sheet.to_string(),
            row,
            column,
            found: kind,
        }),
    }
}
