use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::constants::{DEFAULT_STATION_ID, DEFAULT_YEAR};

#[derive(Parser)]
#[command(name = "ghcn-processor")]
#[command(about = "GHCN-Daily weather data processor producing Tufte-style chart series")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download the raw station file for a year
    Fetch {
        #[arg(short, long, default_value_t = DEFAULT_YEAR)]
        year: i32,

        #[arg(short, long, default_value = DEFAULT_STATION_ID)]
        station: String,

        #[arg(short, long, default_value = "data", help = "Data directory root")]
        data_dir: PathBuf,
    },

    /// Extract the chart series from an already-fetched raw file
    Process {
        #[arg(short, long, default_value_t = DEFAULT_YEAR)]
        year: i32,

        #[arg(short, long, default_value = DEFAULT_STATION_ID)]
        station: String,

        #[arg(short, long, default_value = "data", help = "Data directory root")]
        data_dir: PathBuf,
    },

    /// Fetch (when the raw file is absent) then extract
    Run {
        #[arg(short, long, default_value_t = DEFAULT_YEAR)]
        year: i32,

        #[arg(short, long, default_value = DEFAULT_STATION_ID)]
        station: String,

        #[arg(short, long, default_value = "data", help = "Data directory root")]
        data_dir: PathBuf,

        #[arg(
            long,
            default_value = "false",
            help = "Ask the external renderer to use its parallel helper (extraction is unaffected)"
        )]
        parallel_render: bool,
    },
}
