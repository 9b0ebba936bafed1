use crate::error::{SnippetError, SnippetResult};
use crate::excel::{RowExtractor, DEFAULT_SHEET};
use crate::types::SnippetRecord;
use crate::writer::{self, OutputStyle};
use colored::Colorize;
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

/// Settings for one conversion run
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Worksheet to read rows from
    pub sheet: String,
    pub style: OutputStyle,
    /// Print progress banners
    pub verbose: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            sheet: DEFAULT_SHEET.to_string(),
            style: OutputStyle::default(),
            verbose: false,
        }
    }
}

/// Execute the convert command
///
/// Prints the number of extracted records, then writes the snippet file.
/// Nothing is written when extraction fails.
pub fn convert(source: &Path, destination: &Path, options: &ConvertOptions) -> SnippetResult<usize> {
    if source == destination {
        return Err(SnippetError::Argument(format!(
            "destination {} would overwrite the source workbook",
            destination.display()
        )));
    }

    if options.verbose {
        println!("{}", "🔖 Ticket Snippets - Converting workbook".bold().green());
        println!("   Source:      {}", source.display());
        println!("   Destination: {}", destination.display());
        println!("   Sheet:       {}\n", options.sheet.bright_blue());
        println!("{}", "📖 Reading rows...".cyan());
    }

    let records = RowExtractor::new(source)
        .with_sheet(options.sheet.as_str())
        .extract()?;

    println!("{}", records.len());
    warn_duplicate_names(&records);

    if options.verbose {
        println!("{}", "💾 Writing snippet file...".cyan());
    }

    writer::write_snippets(destination, &records, options.style)?;

    info!(
        records = records.len(),
        destination = %destination.display(),
        "snippet file written"
    );
    if options.verbose {
        println!("{}", "✅ Conversion Complete!".bold().green());
        println!("   Snippets: {}", records.len());
        println!("   Output:   {}\n", destination.display());
    }

    Ok(records.len())
}

/// Print a failed run the way users of the tool expect: category, then details.
pub fn report_error(error: &SnippetError) {
    println!("{} {}", "Error:".bold().red(), error.category());
    println!("Description: {}", error);
}

fn warn_duplicate_names(records: &[SnippetRecord]) {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.name.as_str()) {
            warn!(name = %record.name, tag = %record.tag, "duplicate snippet name, editor keeps the last");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_convert_missing_source_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let destination = dir.path().join("out.json");

        let result = convert(
            &dir.path().join("missing.xlsx"),
            &destination,
            &ConvertOptions::default(),
        );

        assert!(matches!(result, Err(SnippetError::SourceFile(_))));
        assert!(!destination.exists());
    }

    #[test]
    fn test_convert_unreadable_workbook_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("tags.xlsx");
        fs::write(&source, "not a workbook").unwrap();
        let destination = dir.path().join("out.json");

        let result = convert(&source, &destination, &ConvertOptions::default());

        assert!(matches!(result, Err(SnippetError::SourceFormat(_))));
        assert!(!destination.exists());
    }

    #[test]
    fn test_convert_refuses_to_overwrite_source() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("tags.xlsx");
        fs::write(&source, "workbook bytes").unwrap();

        let result = convert(&source, &source, &ConvertOptions::default());

        assert!(matches!(result, Err(SnippetError::Argument(_))));
        assert_eq!(fs::read_to_string(&source).unwrap(), "workbook bytes");
    }

    #[test]
    fn test_default_options() {
        let options = ConvertOptions::default();
        assert_eq!(options.sheet, "Bull");
        assert_eq!(options.style, OutputStyle::TrailingComma);
        assert!(!options.verbose);
    }
}
