//! animalsd daemon entry point.
//!
//! Parses the filter configuration, initializes logging, runs the census
//! pipeline once, and exits.

use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use animalsd::{CensusMgr, CensusReport};
use census_core::{CensusFilter, SEED_ANIMALS};

/// Animal census daemon
#[derive(Parser, Debug)]
#[command(name = "animalsd")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Animal name to report on, or "all"
    #[arg(short = 'a', long, default_value = "all")]
    animal_type: String,

    /// Only report animals observed at least this many times
    #[arg(short = 'c', long, default_value = "0")]
    min_count: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, default_value = "info")]
    log_level: String,

    /// Print the filtered report as JSON on stdout
    #[arg(long)]
    json: bool,
}

/// Initializes tracing/logging.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Runs the census pipeline once: build, filter, report, teardown.
fn run(args: &Args) -> anyhow::Result<()> {
    let filter = CensusFilter::new(args.animal_type.clone(), args.min_count)
        .context("invalid filter configuration")?;

    let mut mgr = CensusMgr::new(filter);
    mgr.build(&SEED_ANIMALS);
    mgr.apply_filter();

    CensusReport::new("census", mgr.census(), None).emit();

    let filtered_report = CensusReport::new("filtered", mgr.filtered(), Some(mgr.filter()));
    filtered_report.emit();

    if args.json {
        let json = filtered_report
            .to_json()
            .context("failed to serialize filtered report")?;
        println!("{}", json);
    }

    mgr.teardown();
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level);

    info!("--- Starting animalsd ---");
    info!(
        "filter configuration: animal type ({}), minimum count {}",
        args.animal_type, args.min_count
    );
    let start = Instant::now();

    match run(&args) {
        Ok(()) => {
            info!("animalsd finished in {} ms", start.elapsed().as_millis());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("animalsd failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
