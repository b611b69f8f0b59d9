// Desktop/tooling crate: unwrap/expect/panic acceptable in non-embedded code.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod cd_map;
mod check;
mod tables;
mod test;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Smart-dimming development tasks", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check host and no_std target builds, clippy and formatting
    Check,
    /// Run unit, integration and doc tests
    Test {
        /// Run only unit tests
        #[arg(long)]
        unit: bool,
        /// Run only integration tests
        #[arg(long)]
        integration: bool,
    },
    /// Print gamma tables built from a captured MTP dump
    Gamma {
        /// Panel config (JSON)
        #[arg(long)]
        config: PathBuf,
        /// MTP dump: hex bytes separated by whitespace or commas
        #[arg(long)]
        mtp: PathBuf,
        /// Only print the table for this brightness level
        #[arg(long)]
        candela: Option<u16>,
        /// Print bytes as hex
        #[arg(long)]
        hex: bool,
    },
    /// Print the AID log (MTP offsets and every cached table)
    AidLog {
        /// Panel config (JSON)
        #[arg(long)]
        config: PathBuf,
        /// MTP dump: hex bytes separated by whitespace or commas
        #[arg(long)]
        mtp: PathBuf,
    },
    /// Show the backlight to candela mapping of a board table
    CdMap {
        /// `idx from till candela` rows, one per line
        #[arg(long, conflicts_with = "blob")]
        table: Option<PathBuf>,
        /// Raw big-endian device-tree property
        #[arg(long)]
        blob: Option<PathBuf>,
        /// Only resolve this backlight level
        #[arg(long)]
        level: Option<u8>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check => check::run(),
        Commands::Test { unit, integration } => test::run(unit, integration),
        Commands::Gamma {
            config,
            mtp,
            candela,
            hex,
        } => tables::gamma(&config, &mtp, candela, hex),
        Commands::AidLog { config, mtp } => tables::aid_log(&config, &mtp),
        Commands::CdMap { table, blob, level } => {
            cd_map::run(table.as_deref(), blob.as_deref(), level)
        }
    }
}
