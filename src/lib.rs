//! Ticket Snippets - spreadsheet of ticket tags → editor snippet file
//!
//! Reads the `Bull` worksheet of a workbook, one ticket per row (tag, name,
//! description), and writes a snippet file where typing `#<tag>` expands to
//! the tag.
//!
//! # Example
//!
//! ```no_run
//! use ticket_snippets::excel::RowExtractor;
//! use ticket_snippets::writer::{write_snippets, OutputStyle};
//! use std::path::Path;
//!
//! let records = RowExtractor::new("tags.xlsx").extract()?;
//! println!("Snippets: {}", records.len());
//!
//! write_snippets(Path::new("ticket.code-snippets"), &records, OutputStyle::Strict)?;
//! # Ok::<(), ticket_snippets::error::SnippetError>(())
//! ```

pub mod cli;
pub mod error;
pub mod excel;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use error::{SnippetError, SnippetResult};
pub use types::SnippetRecord;
pub use writer::OutputStyle;
