//! Operator CLI for the sampler catalog.
//!
//! # Responsibility
//! - Probe core linkage (`ping`, `version`).
//! - Import catalog documents, the only path that creates sounds.
//! - Print the assembled catalog exactly as the HTTP API would return it.

use clap::{Parser, Subcommand};
use sampler_core::db::open_db;
use sampler_core::{
    default_log_level, init_logging, CatalogDocument, ImportService, LoggingConfig,
    PresetService, SqlitePresetRepository, SqliteSoundRepository,
};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "sampler-cli")]
#[command(version, about = "Sampler preset catalog tools", long_about = None)]
struct Cli {
    /// Absolute directory for rotating log files; logging stays off when unset.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Checks that the core crate is linked.
    Ping,
    /// Prints the core crate version.
    Version,
    /// Imports a JSON array of presets with their samples.
    Import {
        /// Catalog database file.
        #[arg(long)]
        db: PathBuf,
        /// JSON document in the public listing shape.
        file: PathBuf,
    },
    /// Prints assembled presets as JSON.
    List {
        #[arg(long)]
        db: PathBuf,
        /// Only print the preset with this exact name.
        #[arg(long)]
        preset: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_ref() {
        let config = LoggingConfig {
            level: default_log_level().to_string(),
            log_dir: log_dir.clone(),
            echo_to_stderr: false,
        };
        if let Err(err) = init_logging(&config) {
            eprintln!("sampler-cli: {err}");
            return ExitCode::FAILURE;
        }
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("sampler-cli: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Ping => println!("sampler_core ping={}", sampler_core::ping()),
        Commands::Version => println!("sampler_core version={}", sampler_core::core_version()),
        Commands::Import { db, file } => {
            let source = std::fs::read_to_string(&file)?;
            let document = CatalogDocument::from_json_str(&source)?;
            let mut conn = open_db(&db)?;
            let summary = ImportService::new(&mut conn).import_catalog(&document)?;
            println!(
                "imported presets={} sounds={}",
                summary.presets, summary.sounds
            );
        }
        Commands::List { db, preset } => {
            let conn = open_db(&db)?;
            let service = PresetService::new(
                SqlitePresetRepository::new(&conn),
                SqliteSoundRepository::new(&conn),
            );
            let output = match preset {
                Some(name) => serde_json::to_string_pretty(&service.find_by_name(&name)?)?,
                None => serde_json::to_string_pretty(&service.list_all()?)?,
            };
            println!("{output}");
        }
    }
    Ok(())
}
