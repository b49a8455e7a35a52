//! Parity Arb CLI
//!
//! Loads an option chain CSV and prints conversions, reversals and the best
//! box spread at the given underlying price.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use parity_arb::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Layout {
    /// NSE export: BID, ASK, STRIKE, BID, ASK
    Nse,
    /// BID, ASK, STRIKE, BID_P, ASK_P
    Simple,
}

#[derive(Parser)]
#[command(name = "parity-arb")]
#[command(about = "Scan an option chain for put-call parity arbitrage", long_about = None)]
struct Cli {
    /// Option chain CSV file
    #[arg(short, long)]
    file: PathBuf,

    /// Current price of the underlying
    #[arg(short, long)]
    spot: f64,

    /// Column layout of the CSV
    #[arg(short, long, value_enum, default_value_t = Layout::Nse)]
    layout: Layout,

    /// Lines to skip before the header row
    #[arg(long, default_value_t = 0)]
    skip_rows: usize,

    /// Fail on strikes with missing quotes instead of skipping them
    #[arg(long)]
    strict_rows: bool,

    /// Refuse chains whose strikes are not ascending
    #[arg(long)]
    strict_strikes: bool,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let columns = match cli.layout {
        Layout::Nse => ChainColumns::nse(),
        Layout::Simple => ChainColumns::simple(),
    };
    let loader = LoaderConfig {
        columns,
        skip_rows: cli.skip_rows,
        skip_incomplete_rows: !cli.strict_rows,
    };

    let chain = load_chain(&cli.file, &loader)
        .with_context(|| format!("Failed to load option chain from {}", cli.file.display()))?
        .with_timestamp(Utc::now());

    let config = if cli.strict_strikes {
        ScanConfig::strict()
    } else {
        ScanConfig::default()
    };
    let report = ChainScanner::with_config(config)
        .scan(&chain, cli.spot)
        .context("Scan failed")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Parity Scan");
    println!("===========\n");
    println!("  Underlying: {:.2}", report.underlying);
    println!("  Strikes: {}\n", report.strikes);

    print_opportunity("First reversal", report.first_reversal.as_ref());
    print_opportunity("Best reversal", report.best_reversal.as_ref());
    print_opportunity("First conversion", report.first_conversion.as_ref());
    print_opportunity("Best conversion", report.best_conversion.as_ref());

    println!("Best box spread:");
    match report.best_box {
        Some(b) => println!("  {}", b),
        None => println!("  none"),
    }

    Ok(())
}

fn print_opportunity(title: &str, opportunity: Option<&Opportunity>) {
    println!("{}:", title);
    match opportunity {
        Some(o) => {
            println!("  {}", o.call_leg());
            println!("  {}", o.put_leg());
            println!("  Premium: {:.2}", o.net_premium());
            println!("  Edge: {:.2}", o.edge);
        }
        None => println!("  none"),
    }
    println!();
}
