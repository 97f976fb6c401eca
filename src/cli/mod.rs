mod render;

pub use render::*;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::application::{FinanceLedger, LedgerConfig};
use crate::io::{Exporter, ImportOptions, Importer};
use crate::storage::{FileStore, DEFAULT_STORAGE_KEY};

/// finledger - personal finance operations, grouped by profile
#[derive(Parser)]
#[command(name = "finledger")]
#[command(about = "A local-first ledger of income and expenses per profile")]
#[command(version)]
pub struct Cli {
    /// Directory holding the ledger files
    #[arg(long, env = "FINLEDGER_DATA_DIR", default_value = ".finledger", global = true)]
    pub data_dir: PathBuf,

    /// Storage key the operations are kept under
    #[arg(long, env = "FINLEDGER_KEY", default_value = DEFAULT_STORAGE_KEY, global = true)]
    pub key: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record an operation and show the profile's updated list
    Add {
        /// Amount (e.g., "50", "12.5" or "12,5")
        amount: String,

        /// Profile the operation belongs to
        #[arg(short, long)]
        profile: String,

        /// Category; "income" records a credit, anything else a debit
        #[arg(short, long)]
        category: String,

        /// Free-text comment
        #[arg(long)]
        comment: Option<String>,

        /// When it happened (e.g. 2024-01-15T10:30, defaults to now)
        #[arg(short, long)]
        time: Option<String>,
    },

    /// List a profile's operations, most recent first
    List {
        /// Profile to show
        #[arg(short, long)]
        profile: String,
    },

    /// List profiles that have operations
    Profiles,

    /// Income, expense and per-category totals for a profile
    Summary {
        /// Profile to summarize
        #[arg(short, long)]
        profile: String,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Export all operations
    Export {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Format: json, csv
        #[arg(short, long, default_value = "json")]
        format: String,
    },

    /// Append operations from a CSV or JSON file
    Import {
        /// Input file
        input: PathBuf,

        /// Format: json, csv (guessed from the file extension if omitted)
        #[arg(short, long)]
        format: Option<String>,

        /// Validate without importing
        #[arg(long)]
        dry_run: bool,
    },

    /// Delete every operation of every profile
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

/// Install the tracing subscriber. `RUST_LOG` wins over the verbose flag.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed when embedded; keep the existing one
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

impl Cli {
    fn open_ledger(&self) -> FinanceLedger<FileStore> {
        let config = LedgerConfig::default().with_storage_key(self.key.clone());
        FinanceLedger::with_config(FileStore::new(&self.data_dir), config)
    }

    pub fn run(self) -> Result<()> {
        init_logging(self.verbose);
        let mut ledger = self.open_ledger();

        match self.command {
            Commands::Add {
                amount,
                profile,
                category,
                comment,
                time,
            } => {
                let op = ledger
                    .add_operation(
                        &profile,
                        &amount,
                        &category,
                        comment.as_deref(),
                        time.as_deref(),
                    )
                    .context("Operation not recorded")?;

                println!(
                    "Recorded {} {} for {}\n",
                    crate::domain::format_signed(op.amount, op.is_income()),
                    op.category,
                    op.profile
                );
                let mut renderer = TextRenderer::new();
                ledger.refresh(&profile, &mut renderer);
                print!("{}", renderer.output());
            }

            Commands::List { profile } => {
                let mut renderer = TextRenderer::new();
                ledger.refresh(&profile, &mut renderer);
                print!("{}", renderer.output());
            }

            Commands::Profiles => {
                let profiles = ledger.profiles();
                if profiles.is_empty() {
                    println!("No profiles found.");
                }
                for profile in profiles {
                    println!("{}", profile);
                }
            }

            Commands::Summary { profile, format } => {
                let summary = ledger.summary(&profile);
                match format.as_str() {
                    "table" => print!("{}", format_summary(&summary)),
                    "json" => println!("{}", serde_json::to_string_pretty(&summary)?),
                    other => bail!("Unknown format '{}'. Use table or json", other),
                }
            }

            Commands::Export { output, format } => {
                run_export_command(&ledger, output, &format)?;
            }

            Commands::Import {
                input,
                format,
                dry_run,
            } => {
                run_import_command(&mut ledger, input, format, dry_run)?;
            }

            Commands::Clear { yes } => {
                if !yes {
                    bail!("Refusing to delete all operations without --yes");
                }
                let removed = ledger.clear()?;
                println!("Removed {} operation(s)", removed);
            }
        }
        Ok(())
    }
}

fn run_export_command(
    ledger: &FinanceLedger<FileStore>,
    output: Option<PathBuf>,
    format: &str,
) -> Result<()> {
    let writer: Box<dyn Write> = match &output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    let exporter = Exporter::new(ledger);
    let count = match format {
        "json" => exporter.export_json(writer)?,
        "csv" => exporter.export_csv(writer)?,
        other => bail!("Unknown format '{}'. Use json or csv", other),
    };

    if let Some(path) = output {
        eprintln!("Exported {} operation(s) to {}", count, path.display());
    }
    Ok(())
}

fn run_import_command(
    ledger: &mut FinanceLedger<FileStore>,
    input: PathBuf,
    format: Option<String>,
    dry_run: bool,
) -> Result<()> {
    let format = match format {
        Some(f) => f,
        None => match input.extension().and_then(|e| e.to_str()) {
            Some("csv") => "csv".to_string(),
            _ => "json".to_string(),
        },
    };

    let file =
        File::open(&input).with_context(|| format!("Failed to open {}", input.display()))?;
    let reader = BufReader::new(file);
    let options = ImportOptions { dry_run };

    let mut importer = Importer::new(ledger);
    let result = match format.as_str() {
        "json" => importer.import_json(reader, options)?,
        "csv" => importer.import_csv(reader, options)?,
        other => bail!("Unknown format '{}'. Use json or csv", other),
    };

    for error in &result.errors {
        match &error.field {
            Some(field) => eprintln!("  line {} ({}): {}", error.line, field, error.error),
            None => eprintln!("  line {}: {}", error.line, error.error),
        }
    }

    if dry_run {
        println!(
            "Dry run: {} operation(s) would be imported, {} rejected",
            result.imported,
            result.errors.len()
        );
    } else {
        println!(
            "Imported {} operation(s), {} rejected",
            result.imported,
            result.errors.len()
        );
    }
    Ok(())
}
