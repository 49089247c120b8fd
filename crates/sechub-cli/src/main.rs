#![forbid(unsafe_code)]

use clap::Parser;
use sechub_core::{CatalogError, DatabaseConfig, ExitCode};
use sechub_ingest::{import_catalog, ImportOptions, ImportReport};
use sechub_store::{FileResourceRepository, FileVendorRepository, SqliteDatabase};
use std::path::PathBuf;
use std::process::ExitCode as ProcessExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dbimport")]
#[command(about = "Import vendor and resource descriptors into the catalog database")]
#[command(override_usage = "dbimport <path_to_vendor_yamls> <path_to_resource_yamls>")]
struct Cli {
    /// Directory holding vendor descriptors.
    vendors_path: PathBuf,
    /// Directory holding resource descriptors.
    resources_path: PathBuf,
    /// Print the import report as JSON instead of progress lines.
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Import descriptors even when they fail validation.
    #[arg(long = "no-validate", default_value_t = false)]
    no_validate: bool,
}

fn main() -> ProcessExitCode {
    let cli = Cli::parse();
    init_tracing();
    match run(&cli).and_then(|report| emit_report(&report, cli.json)) {
        Ok(()) => ProcessExitCode::from(ExitCode::Success as u8),
        Err(err) => {
            if cli.json {
                match serde_json::to_string(&err.to_machine_error()) {
                    Ok(line) => eprintln!("{line}"),
                    Err(_) => eprintln!("{err}"),
                }
            } else {
                eprintln!("{err}");
            }
            ProcessExitCode::from(err.exit_code() as u8)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<ImportReport, CatalogError> {
    let cfg = DatabaseConfig::from_env()?;
    let db = SqliteDatabase::open(&cfg.database_path())?;
    info!(config = ?cfg, "database opened");

    let vendors = FileVendorRepository::from_path(&cli.vendors_path)?;
    let resources = FileResourceRepository::from_path(&cli.resources_path)?;
    import_catalog(
        &db,
        &vendors,
        &resources,
        ImportOptions {
            validate: !cli.no_validate,
        },
    )
}

fn emit_report(report: &ImportReport, json: bool) -> Result<(), CatalogError> {
    if json {
        let text = serde_json::to_string_pretty(report)
            .map_err(|e| CatalogError::backend(format!("report serialization failed: {e}")))?;
        println!("{text}");
    } else {
        for event in &report.events {
            println!("{event}");
        }
    }
    Ok(())
}
