use std::path::PathBuf;
use thiserror::Error;

pub type SnippetResult<T> = Result<T, SnippetError>;

/// Process exit codes of the `ticket-snippets` binary.
pub mod exit_code {
    pub const SUCCESS: u8 = 0;
    pub const ARGUMENT: u8 = 1;
    pub const INVALID_CAST: u8 = 2;
    pub const INVALID_DATA: u8 = 3;
    pub const SOURCE_FORMAT: u8 = 4;
    pub const ERROR: u8 = 5;
    pub const SOURCE_NOT_FOUND: u8 = 6;
    pub const WRITE: u8 = 7;
}

#[derive(Error, Debug)]
pub enum SnippetError {
    #[error("{0}")]
    Argument(String),

    #[error("{} does not exist or is not a file", .0.display())]
    SourceFile(PathBuf),

    #[error("sheet '{sheet}': {detail}")]
    DataFormat { sheet: String, detail: String },

    #[error("sheet '{sheet}', cell {column}{row}: expected text, found {found}")]
    Cast {
        sheet: String,
        row: u32,
        column: char,
        found: &'static str,
    },

    #[error("{0}")]
    SourceFormat(String),

    #[error("{0}")]
    Extraction(String),

    #[error("{}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SnippetError {
    /// One-line label printed ahead of the error details.
    pub fn category(&self) -> &'static str {
        match self {
            SnippetError::Argument(_) => "invalid input parameter",
            SnippetError::SourceFile(_) => "source file not found",
            SnippetError::DataFormat { .. } => "invalid data, check your input file",
            SnippetError::Cast { .. } => "invalid cast, check your input file",
            SnippetError::SourceFormat(_) => "invalid source file",
            SnippetError::Extraction(_) => "reading source file failed",
            SnippetError::Write { .. } => "cannot write destination file",
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            SnippetError::Argument(_) => exit_code::ARGUMENT,
            SnippetError::SourceFile(_) => exit_code::SOURCE_NOT_FOUND,
            SnippetError::DataFormat { .. } => exit_code::INVALID_DATA,
            SnippetError::Cast { .. } => exit_code::INVALID_CAST,
            SnippetError::SourceFormat(_) => exit_code::SOURCE_FORMAT,
            SnippetError::Extraction(_) => exit_code::ERROR,
            SnippetError::Write { .. } => exit_code::WRITE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_exit_codes_are_distinct() {
        let errors = [
            SnippetError::Argument("missing".to_string()),
            SnippetError::SourceFile(PathBuf::from("tags.xlsx")),
            SnippetError::DataFormat {
                sheet: "Bull".to_string(),
                detail: "bad".to_string(),
            },
            SnippetError::Cast {
                sheet: "Bull".to_string(),
                row: 2,
                column: 'B',
                found: "number",
            },
            SnippetError::SourceFormat("bad".to_string()),
            SnippetError::Extraction("bad".to_string()),
            SnippetError::Write {
                path: PathBuf::from("out.json"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            },
        ];

        let mut codes: Vec<u8> = errors.iter().map(SnippetError::exit_code).collect();
        assert!(!codes.contains(&exit_code::SUCCESS));
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_cast_error_display_names_cell() {
        let error = SnippetError::Cast {
            sheet: "Bull".to_string(),
            row: 7,
            column: 'C',
            found: "boolean",
        };
        assert_eq!(
            error.to_string(),
            "sheet 'Bull', cell C7: expected text, found boolean"
        );
        assert_eq!(error.exit_code(), exit_code::INVALID_CAST);
    }

    #[test]
    fn test_write_error_keeps_source() {
        let error = SnippetError::Write {
            path: PathBuf::from("out/snippets.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such directory"),
        };
        let msg = error.to_string();
        assert!(msg.contains("out/snippets.json"));
        assert!(msg.contains("no such directory"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_source_file_category() {
        let error = SnippetError::SourceFile(PathBuf::from("missing.xls"));
        assert_eq!(error.category(), "source file not found");
        assert!(error.to_string().contains("missing.xls"));
    }
}
