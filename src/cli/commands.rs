//! CLI arguments

use crate::resource::Resource;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Extract Reftab inventory records to CSV and/or stdout
#[derive(Parser, Debug)]
#[command(name = "reftab-extract")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Which collection to extract
    #[arg(long, value_enum, default_value_t = Resource::Assets)]
    pub resource: Resource,

    /// Free-text filter forwarded as the `q` query parameter
    #[arg(long)]
    pub query: Option<String>,

    /// Page size per request
    #[arg(long, default_value_t = 200, value_parser = clap::value_parser!(u32).range(1..))]
    pub limit: u32,

    /// Seconds to sleep between pages and before each retry
    #[arg(long, default_value_t = 0.2)]
    pub sleep: f64,

    /// CSV output path; omit to skip the CSV write
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Print the full JSON result array instead of a summary
    #[arg(long)]
    pub stdout: bool,
}

impl Cli {
    /// The sleep flag as a duration, clamped at zero
    pub fn sleep_duration(&self) -> Duration {
        Duration::from_secs_f64(self.sleep.max(0.0))
    }
}
