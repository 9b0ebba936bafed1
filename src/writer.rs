use crate::error::{SnippetError, SnippetResult};
use crate::types::SnippetRecord;
use std::fs;
use std::path::Path;

/// How the last entry of a snippet file is terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    /// Every entry ends with a comma, the last one included. Editors that
    /// accept JSON with trailing commas load this; strict parsers reject it.
    #[default]
    TrailingComma,
    /// No comma after the last entry, so the file is strict JSON.
    Strict,
}

/// Render records as a snippet file, entries in record order.
pub fn format_snippets(records: &[SnippetRecord], style: OutputStyle) -> String {
    let mut out = String::from("{\n");
    for (i, record) in records.iter().enumerate() {
        let last = i + 1 == records.len();
        write_entry(&mut out, record);
        if !(last && style == OutputStyle::Strict) {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str("}\n");
    out
}

/// Write the snippet file, replacing anything already at `path`.
pub fn write_snippets(
    path: &Path,
    records: &[SnippetRecord],
    style: OutputStyle,
) -> SnippetResult<()> {
    fs::write(path, format_snippets(records, style)).map_err(|source| SnippetError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn write_entry(out: &mut String, record: &SnippetRecord) {
    let prefix = quote(&record.prefix());
    out.push_str(&format!(
        "\t{}: {{\n\t\t\"prefix\": {},\n\t\t\"body\": {},\n\t\t\"description\": {}\n\t}}",
        quote(&record.name),
        prefix,
        prefix,
        quote(&record.description)
    ));
}

fn quote(text: &str) -> String {
    serde_json::Value::String(text.to_string()).to_string()
}
