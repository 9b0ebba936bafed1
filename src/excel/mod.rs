//! Spreadsheet import
//!
//! - `source`: workbook access (calamine) behind the `SheetSource` trait
//! - `extractor`: rows → normalized `SnippetRecord`s

mod extractor;
mod source;

pub use extractor::{extract_records, RowExtractor, DEFAULT_SHEET};
pub use source::{CalamineSource, Cell, Row, SheetSource, COLUMNS};
