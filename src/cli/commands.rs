//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// DroneLogBook API client
#[derive(Parser, Debug)]
#[command(name = "dronelogbook")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Credential file (JSON with dlb_api_key and dlb_url), defaults to ~/.cass-keys
    #[arg(long, global = true)]
    pub credentials: Option<PathBuf>,

    /// API key, used together with --dlb-url instead of a credential file
    #[arg(long, global = true, env = "DLB_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Customer DroneLogBook URL
    #[arg(long, global = true, env = "DLB_URL")]
    pub dlb_url: Option<String>,

    /// REST API base URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value = "30")]
    pub timeout_secs: u64,

    /// Maximum pages fetched by listing commands
    #[arg(long, global = true, default_value = "1000")]
    pub max_pages: u32,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch one flight
    Flight {
        guid: String,

        /// Also fetch the flight's drone, place, project and equipment
        #[arg(long)]
        hydrate: bool,
    },

    /// List all flights
    Flights {
        /// First page to fetch
        #[arg(long, default_value = "1")]
        page: u32,

        /// Also fetch each flight's related records
        #[arg(long)]
        hydrate: bool,
    },

    /// Fetch one drone
    Drone { guid: String },

    /// List all drones
    Drones,

    /// Fetch one place
    Place {
        guid: String,

        /// Replace the altitude with the USGS ground elevation
        #[arg(long)]
        usgs_altitude: bool,
    },

    /// Fetch one piece of equipment
    Equipment { guid: String },

    /// List all scoops with their sensor serials
    Scoops,

    /// Download the original log of a flight
    Download {
        guid: String,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON, one document per line
    Json,
    /// Indented JSON
    Pretty,
}
