//! Boxpack command-line runner

mod input;
mod report;

use anyhow::Context;
use boxpack_core::{BatchSummary, Solver};
use boxpack_packer::{CatalogFile, LogObserver, Packer, PackerConfig};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "boxpack")]
#[command(about = "Pack orders of rectangular products into standard boxes")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack the orders of a JSON file ("-" reads stdin)
    Pack {
        /// Orders file: an array of orders or an object with an "orders" array
        file: PathBuf,

        /// Catalog file replacing the standard boxes
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Leave the "unpacked" lists empty; drops are only logged
        #[arg(long)]
        no_unpacked: bool,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,

        /// Output file for results (JSON); stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print batch statistics to stderr
        #[arg(long)]
        summary: bool,
    },

    /// Show the box catalog
    Catalog {
        /// Catalog file replacing the standard boxes
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Print as JSON in catalog file format
        #[arg(long)]
        json: bool,
    },
}

/// Maps the `-v` count to a default filter level.
fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Pack {
            file,
            catalog,
            no_unpacked,
            pretty,
            output,
            summary,
        } => {
            let catalog = input::load_catalog(catalog.as_deref())?;
            let orders = input::read_orders(&file)?;
            log::info!("packing {} orders", orders.len());

            let config = PackerConfig::new().with_report_unpacked(!no_unpacked);
            let packer = Packer::new(&catalog).with_config(config);
            let results = packer.process_orders_observed(&orders, &mut LogObserver);

            let json = if pretty {
                serde_json::to_string_pretty(&results)?
            } else {
                serde_json::to_string(&results)?
            };

            match output {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    log::info!("results saved to {}", path.display());
                }
                None => println!("{}", json),
            }

            if summary {
                eprint!("{}", report::format_summary(&BatchSummary::from_results(&results)));
            }
        }

        Commands::Catalog { catalog, json } => {
            let catalog = input::load_catalog(catalog.as_deref())?;
            if json {
                let file = CatalogFile::from(&catalog);
                println!("{}", serde_json::to_string_pretty(&file)?);
            } else {
                print!("{}", report::format_catalog(&catalog));
            }
        }
    }

    Ok(())
}
