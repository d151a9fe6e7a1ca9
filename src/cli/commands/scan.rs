//! Scan command - list the corpus without reading file contents

use crate::cli::commands::ScanArgs;
use crate::cli::output::{colors, format_duration, print_header};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::reader::CorpusReader;
use crate::core::types::{CorpusEntry, ScanStats};
use clap::Args;
use serde::Serialize;

/// Arguments for the scan command
#[derive(Args, Debug)]
pub struct ScanCommandArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Only print the patient summary
    #[arg(long, short = 's')]
    pub summary: bool,
}

#[derive(Debug, Serialize)]
pub struct PatientCount {
    pub patient_id: String,
    pub documents: usize,
}

/// Scan result response
#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub stats: ScanStats,
    pub patients: Vec<PatientCount>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<CorpusEntry>,
}

/// Execute the scan command
pub fn execute(
    args: ScanCommandArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let scan_config = args.scan.to_scan_config(config);
    let reader = CorpusReader::open(&scan_config)?;

    let response = ScanResponse {
        stats: reader.stats().clone(),
        patients: reader
            .registry()
            .iter()
            .map(|(id, count)| PatientCount {
                patient_id: id.to_string(),
                documents: count,
            })
            .collect(),
        entries: if args.summary {
            Vec::new()
        } else {
            reader.entries().to_vec()
        },
    };

    match format {
        OutputFormat::Human => print_human(&response),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
    }

    Ok(())
}

fn print_human(response: &ScanResponse) {
    if !response.entries.is_empty() {
        print_header("Documents (read order):");
        for (idx, entry) in response.entries.iter().enumerate() {
            println!(
                "{:>5}  {}  {}  {}  {}",
                colors::rank(&(idx + 1).to_string()),
                colors::document_id(&entry.document_id),
                colors::patient(entry.patient_id.as_deref().unwrap_or("-")),
                colors::dim(&entry.document_type),
                colors::file_path(&entry.path.display().to_string())
            );
        }
        println!();
    }

    print_header("Patients:");
    for patient in &response.patients {
        println!(
            "  {}  {}",
            colors::patient(&patient.patient_id),
            colors::number(&patient.documents.to_string())
        );
    }
    println!();

    println!(
        "{} {} documents for {} patients under {} in {}",
        colors::success("Scanned"),
        colors::number(&response.stats.documents.to_string()),
        colors::number(&response.stats.patients.to_string()),
        colors::file_path(&response.stats.root),
        colors::number(&format_duration(response.stats.duration_ms as f64 / 1000.0))
    );
}
