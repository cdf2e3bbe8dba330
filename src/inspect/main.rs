//! Command-line inspection of lookup documents.
//!
//! Checks result and query documents against the contract, exports results to
//! CSV, converts Google geocoding payloads into results and prints lookup or
//! map URLs for queries.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use geobridge::codec;
use geobridge::config::Config;
use geobridge::conformance::{check_document, RecordKind};
use geobridge::export::CsvExporter;
use geobridge::google::{to_resolution_result, GeocodeResponse};
use geobridge::models::catalog::FIELDS;
use geobridge::models::MapProvider;

#[derive(Parser, Debug)]
#[command(name = "inspect")]
#[command(about = "Inspect address lookup documents")]
struct Args {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a document for shape conformance
    Check {
        /// Shape of the records
        #[arg(long, value_enum, default_value_t = RecordKind::Result)]
        kind: RecordKind,

        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Export result records to CSV
    Export {
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert a Google geocoding response into a result
    ConvertGoogle {
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Print the lookup URL (from `[lookup] custom_url`) or a map URL for each query
    Urls {
        /// Print a map viewer URL instead of the configured lookup URL
        #[arg(long, value_enum)]
        map: Option<MapProvider>,

        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// List the result fields
    Fields,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr, stdout carries data
    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::load(args.config.as_deref()).context("Failed to load config")?;

    match args.command {
        Command::Check { kind, file } => {
            let input = read_input(file.as_deref())?;
            check(&input, kind)?;
        }
        Command::Export { file, output } => {
            let input = read_input(file.as_deref())?;
            let results = codec::decode_results(&input).context("Failed to decode results")?;

            let writer: Box<dyn Write> = match &output {
                Some(path) => Box::new(BufWriter::new(
                    File::create(path)
                        .with_context(|| format!("Failed to create {}", path.display()))?,
                )),
                None => Box::new(io::stdout().lock()),
            };

            let mut exporter = CsvExporter::new(writer, &config.export)?;
            exporter.write_all(&results)?;
            exporter.finish()?;
        }
        Command::ConvertGoogle { file } => {
            let input = read_input(file.as_deref())?;
            let response = GeocodeResponse::from_json(&input)
                .context("Failed to parse geocoding response")?;
            let result = to_resolution_result(&response, &config.google.conversion_options());

            if !result.is_success() {
                warn!("Upstream lookup did not succeed: {}", result.status);
            }

            let mut stdout = io::stdout().lock();
            writeln!(
                stdout,
                "{}",
                codec::encode_result(&result, config.output.pretty)?
            )?;
        }
        Command::Urls { map, file } => {
            let input = read_input(file.as_deref())?;
            let queries = codec::decode_queries(&input).context("Failed to decode queries")?;

            let mut stdout = io::stdout().lock();
            for query in &queries {
                if !query.in_standard_range() {
                    warn!("Query {},{} is outside the standard range", query.lat, query.lng);
                }
                let url = match map {
                    Some(provider) => Some(query.map_url(provider)),
                    None => config.lookup.url_for(query),
                };
                let Some(url) = url else {
                    anyhow::bail!("no lookup.custom_url configured; pass --map for a map URL");
                };
                writeln!(stdout, "{}", url)?;
            }
        }
        Command::Fields => {
            let mut stdout = io::stdout().lock();
            for spec in FIELDS {
                writeln!(
                    stdout,
                    "{:<14} {:<15} {:<7} {}",
                    spec.name,
                    spec.group.label(),
                    spec.kind,
                    if spec.required { "required" } else { "optional" }
                )?;
            }
        }
    }

    Ok(())
}

/// Read a file, or stdin when no path is given
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Log a conformance report; fails when the document has violations
fn check(input: &str, kind: RecordKind) -> Result<()> {
    let report = check_document(input, kind).context("Failed to read document")?;

    for (index, violation) in &report.violations {
        error!("{} record {}: {}", kind, index, violation);
    }

    if report.is_conformant() {
        info!("{} {} records conform", report.records, kind);
    } else {
        info!(
            "{} of {} {} records have violations ({} total)",
            report.failing_records(),
            report.records,
            kind,
            report.violations.len()
        );
    }

    if !report.is_conformant() {
        anyhow::bail!("document has violations");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_conformant() {
        assert!(check(r#"{"lat": 21.0285, "lng": 105.8542}"#, RecordKind::Query).is_ok());
    }

    #[test]
    fn test_check_violations_are_errors() {
        let err = check(r#"{"lat": 21.0285}"#, RecordKind::Query).unwrap_err();
        assert_eq!(err.to_string(), "document has violations");
    }

    #[test]
    fn test_check_unreadable_document() {
        let err = check("", RecordKind::Result).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read document"));
    }
}
