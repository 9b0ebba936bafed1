use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use ticket_snippets::cli::{self, ConvertOptions};
use ticket_snippets::error::SnippetError;
use ticket_snippets::excel::DEFAULT_SHEET;
use ticket_snippets::OutputStyle;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ticket-snippets")]
#[command(about = "Generate editor snippets for ticket tags from a spreadsheet.")]
#[command(long_about = "Generate editor snippets for ticket tags from a spreadsheet.

Reads every row of the 'Bull' worksheet: column A is the tag, B the snippet
name, C the description. Typing #<tag> in the editor then expands to the tag.

ROWS:
  - a row whose tag reads 'tag' (any case) is the header and is skipped
  - blank rows are skipped
  - a missing name, or a description that is missing, '?' or '_', makes
    both the name and the description fall back to the tag
  - only the first line of a multi-line description is kept; when that
    line is empty the description falls back to the tag

SOURCE FORMATS:
  .xls, .xla, .xlsx, .xlsm, .xlam, .xlsb, .ods

OUTPUT:
  Any extension. Every entry ends with a comma, the last one included; use
  --strict-json for a file that strict JSON parsers accept.

EXIT CODES:
  0 success              4 invalid workbook
  1 invalid arguments    5 other read error
  2 non-text cell        6 source file not found
  3 invalid cell data    7 destination not writable

EXAMPLES:
  ticket-snippets tags.xlsx ticket.code-snippets
  ticket-snippets tags.xls snippets.json --sheet Bear --strict-json")]
#[command(version)]
struct Cli {
    /// Spreadsheet with the ticket tags
    source: PathBuf,

    /// Snippet file to write (replaced if it exists)
    destination: PathBuf,

    /// Worksheet holding the ticket rows
    #[arg(short, long, default_value = DEFAULT_SHEET)]
    sheet: String,

    /// Omit the comma after the last entry so the output is strict JSON
    #[arg(long)]
    strict_json: bool,

    /// Show progress and info-level logs
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{}", err);
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let error = SnippetError::Argument(err.to_string().trim_end().to_string());
            cli::report_error(&error);
            return ExitCode::from(error.exit_code());
        }
    };

    init_tracing(cli.verbose);

    let options = ConvertOptions {
        sheet: cli.sheet,
        style: if cli.strict_json {
            OutputStyle::Strict
        } else {
            OutputStyle::TrailingComma
        },
        verbose: cli.verbose,
    };

    match cli::convert(&cli.source, &cli.destination, &options) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            cli::report_error(&err);
            ExitCode::from(err.exit_code())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "ticket_snippets=info"
    } else {
        "ticket_snippets=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .init();
}
