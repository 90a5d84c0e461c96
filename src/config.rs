use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::board::SortKey;

#[derive(Parser, Debug, Clone)]
#[command(name = "angojob", about = "Angolan job board: search, filters, CSV export and statistics")]
pub struct Config {
    /// Key-value store file holding the job cache
    #[arg(long, env = "ANGOJOB_STORE_PATH", default_value = ".angojob/store.json")]
    pub store_path: PathBuf,

    /// Simulated source latency in milliseconds
    #[arg(long, env = "FETCH_DELAY_MS", default_value = "1500")]
    pub fetch_delay_ms: u64,

    /// Jobs generated per fetch
    #[arg(long, env = "BATCH_SIZE", default_value = "100")]
    pub batch_size: usize,

    /// Seed for reproducible mock batches
    #[arg(long, env = "MOCK_SEED")]
    pub mock_seed: Option<u64>,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value = "text")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(clap::Subcommand, Debug, Clone)]
pub enum Command {
    /// Start the web server (default when no subcommand given)
    Serve {
        /// Listen address
        #[arg(long, env = "LISTEN_ADDR", default_value = "0.0.0.0:8080")]
        listen_addr: String,
    },
    /// Write the filtered board to a CSV file
    Export(ExportArgs),
    /// Refetch jobs and overwrite the cache
    Fetch,
    /// Print statistics for the cached (or freshly fetched) jobs as JSON
    Stats,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ExportArgs {
    /// Directory receiving the CSV file
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Keep only these categories (repeatable)
    #[arg(long = "category")]
    pub categories: Vec<String>,

    /// Keep only these locations (repeatable)
    #[arg(long = "location")]
    pub locations: Vec<String>,

    #[arg(long)]
    pub salary_min: Option<u64>,

    #[arg(long)]
    pub salary_max: Option<u64>,

    /// Free-text filter over title, company, description and category
    #[arg(long, default_value = "")]
    pub query: String,

    /// date, salary or relevance
    #[arg(long, default_value = "date")]
    pub sort: String,

    /// Number of 12-job increments to export; all matches when omitted
    #[arg(long)]
    pub pages: Option<usize>,
}

impl ExportArgs {
    pub fn sort_key(&self) -> SortKey {
        self.sort.parse().unwrap_or_default()
    }
}

impl Config {
    /// Resolve the command, defaulting to Serve if none specified.
    pub fn resolved_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve {
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
        })
    }

    pub fn fetch_delay(&self) -> Duration {
        Duration::from_millis(self.fetch_delay_ms)
    }
}
