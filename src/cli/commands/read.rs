//! Read command - pull every document through the corpus reader

use crate::cli::commands::ScanArgs;
use crate::cli::output::{colors, format_progress, print_warning};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::reader::CorpusReader;
use crate::core::types::Document;
use clap::Args;

/// Arguments for the read command
#[derive(Args, Debug)]
pub struct ReadArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Print document text as well as metadata
    #[arg(long, short = 't')]
    pub text: bool,

    /// Stop after this many documents
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

/// Execute the read command
///
/// JSON output is one document per line.
pub fn execute(
    args: ReadArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let scan_config = args.scan.to_scan_config(config);
    let skip_unreadable = scan_config.skip_unreadable;
    let mut reader = CorpusReader::open(&scan_config)?;
    let limit = args.limit.unwrap_or(usize::MAX);
    let mut read = 0;

    while read < limit && reader.has_next() {
        let mut doc = match reader.get_next() {
            Ok(doc) => doc,
            Err(e) if skip_unreadable && e.is_read_failure() => {
                print_warning(&e.message());
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        read += 1;

        match format {
            OutputFormat::Human => print!("{}", render_document(&doc, args.text, reader.progress())),
            OutputFormat::Json => {
                if !args.text {
                    doc.text.clear();
                }
                println!("{}", serde_json::to_string(&doc)?);
            }
        }
    }

    if format == OutputFormat::Human {
        // Settles progress at (total, total) once the corpus is drained
        let exhausted = !reader.has_next();
        let tracker = reader.tracker();
        println!(
            "{} {} documents from {} ({}, {:.0}%)",
            colors::success(if exhausted { "Read" } else { "Stopped after" }),
            colors::number(&read.to_string()),
            colors::file_path(tracker.key()),
            format_progress(tracker.current(), tracker.total()),
            tracker.fraction() * 100.0
        );
    }

    Ok(())
}

/// Metadata line, then the text when requested
fn render_document(doc: &Document, with_text: bool, progress: (usize, usize)) -> String {
    let mut out = format!(
        "{} {}  patient={}  type={}  time={}  prefix={}\n",
        colors::dim(&format_progress(progress.0 + 1, progress.1)),
        colors::document_id(&doc.document_id),
        colors::patient(doc.patient_id.as_deref().unwrap_or("-")),
        doc.document_type,
        doc.document_time,
        if doc.id_prefix.is_empty() {
            "-"
        } else {
            doc.id_prefix.as_str()
        }
    );
    if with_text {
        // Normalized text already ends with a newline
        out.push_str(&doc.text);
    }
    out
}
