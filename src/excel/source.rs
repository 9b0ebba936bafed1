//! Workbook access behind a narrow trait
//!
//! The extractor only needs sheet names and the first three cells of each
//! row. [`CalamineSource`] provides them from a workbook on disk; tests can
//! provide them from memory.

use crate::error::{SnippetError, SnippetResult};
use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Columns read from every row: tag, name, description.
pub const COLUMNS: [char; 3] = ['A', 'B', 'C'];

/// A cell as seen by the extractor.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    /// Spreadsheet error value such as `#N/A`
    Error(String),
    /// Any non-text value; `kind` names its type for diagnostics
    Value { kind: &'static str },
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => Cell::Empty,
            Data::String(s) => Cell::Text(s.clone()),
            Data::Error(e) => Cell::Error(e.to_string()),
            Data::Int(_) | Data::Float(_) => Cell::Value { kind: "number" },
            Data::Bool(_) => Cell::Value { kind: "boolean" },
            Data::DateTime(_) | Data::DateTimeIso(_) => Cell::Value { kind: "date" },
            Data::DurationIso(_) => Cell::Value { kind: "duration" },
        }
    }
}

/// One worksheet row, numbered from 1 like the spreadsheet UI.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub number: u32,
    pub cells: [Cell; 3],
}

impl Row {
    pub fn new(number: u32, cells: [Cell; 3]) -> Self {
        Self { number, cells }
    }
}

/// Anything the extractor can pull rows from.
pub trait SheetSource {
    /// Sheet names in workbook order.
    fn sheet_names(&self) -> Vec<String>;

    /// Every row of `sheet` from the first used row to the last.
    fn rows(&mut self, sheet: &str) -> SnippetResult<Vec<Row>>;
}

/// Workbook on disk, read through calamine.
pub struct CalamineSource {
    workbook: Sheets<BufReader<File>>,
}

impl CalamineSource {
    /// Open `path` read-only, detecting the format from its extension.
    pub fn open(path: &Path) -> SnippetResult<Self> {
        if !path.is_file() {
            return Err(SnippetError::SourceFile(path.to_path_buf()));
        }

        let workbook = open_workbook_auto(path).map_err(|e| match e {
            calamine::Error::Io(io) => {
                SnippetError::Extraction(format!("failed to read {}: {}", path.display(), io))
            }
            other => SnippetError::SourceFormat(format!("{}: {}", path.display(), other)),
        })?;

        Ok(Self { workbook })
    }
}

impl SheetSource for CalamineSource {
    fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names()
    }

    fn rows(&mut self, sheet: &str) -> SnippetResult<Vec<Row>> {
        let range = self
            .workbook
            .worksheet_range(sheet)
            .map_err(|e| SnippetError::DataFormat {
                sheet: sheet.to_string(),
                detail: e.to_string(),
            })?;

        Ok(range_rows(&range))
    }
}

/// Rows of a used range, keyed by absolute position so a sheet whose data
/// starts past column A still reads A as empty.
fn range_rows(range: &Range<Data>) -> Vec<Row> {
    let (Some((first, _)), Some((last, _))) = (range.start(), range.end()) else {
        return Vec::new();
    };

    (first..=last)
        .map(|row| {
            let cell = |col: u32| {
                range
                    .get_value((row, col))
                    .map(Cell::from)
                    .unwrap_or(Cell::Empty)
            };
            Row::new(row + 1, [cell(0), cell(1), cell(2)])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_from_data() {
        assert_eq!(Cell::from(&Data::Empty), Cell::Empty);
        assert_eq!(
            Cell::from(&Data::String("ABC-1".to_string())),
            Cell::Text("ABC-1".to_string())
        );
        assert_eq!(Cell::from(&Data::Float(1.5)), Cell::Value { kind: "number" });
        assert_eq!(Cell::from(&Data::Int(3)), Cell::Value { kind: "number" });
        assert_eq!(Cell::from(&Data::Bool(true)), Cell::Value { kind: "boolean" });
        assert!(matches!(
            Cell::from(&Data::Error(calamine::CellErrorType::NA)),
            Cell::Error(_)
        ));
    }

    #[test]
    fn test_range_rows_uses_absolute_columns() {
        let mut range = Range::new((2, 1), (3, 2));
        range.set_value((2, 1), Data::String("Name".to_string()));
        range.set_value((3, 2), Data::String("Desc".to_string()));

        let rows = range_rows(&range);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].number, 3);
        assert_eq!(rows[0].cells[0], Cell::Empty);
        assert_eq!(rows[0].cells[1], Cell::Text("Name".to_string()));
        assert_eq!(rows[1].number, 4);
        assert_eq!(rows[1].cells[2], Cell::Text("Desc".to_string()));
    }

    #[test]
    fn test_range_rows_empty_range() {
        let range: Range<Data> = Range::empty();
        assert!(range_rows(&range).is_empty());
    }

    #[test]
    fn test_open_missing_file() {
        let result = CalamineSource::open(Path::new("does/not/exist.xlsx"));
        assert!(matches!(result, Err(SnippetError::SourceFile(_))));
    }
}
