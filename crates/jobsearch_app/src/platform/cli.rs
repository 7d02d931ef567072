use std::path::PathBuf;

use clap::Parser;

use super::logging::LogDestination;

/// Terminal job search: pick a role and a location, browse matching jobs,
/// and keep a list of saved jobs between runs.
#[derive(Parser, Debug, Default)]
#[command(name = "jobsearch")]
#[command(version)]
#[command(about = "Search job listings and keep a list of saved jobs", long_about = None)]
pub struct Cli {
    /// Configuration file (RON). Defaults to ./jobsearch.ron when present.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Search endpoint URL
    #[arg(long = "endpoint")]
    pub endpoint: Option<String>,

    /// Directory holding saved jobs
    #[arg(long = "state-dir")]
    pub state_dir: Option<PathBuf>,

    /// Initial role, by name or 1-based number
    #[arg(short = 'r', long = "role")]
    pub role: Option<String>,

    /// Initial location, by name or 1-based number
    #[arg(short = 'l', long = "location")]
    pub location: Option<String>,

    /// Run one search for the initial selection, print it and exit
    #[arg(long = "once")]
    pub once: bool,

    /// Keep saved jobs in memory only
    #[arg(long = "ephemeral")]
    pub ephemeral: bool,

    /// Where log output goes
    #[arg(long = "log", value_enum)]
    pub log_destination: Option<LogDestination>,

    /// Log level (error, warn, info, debug, trace, off)
    #[arg(long = "log-level")]
    pub log_level: Option<String>,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,
}
