use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "mot-creators",
    version,
    about = "Browse, search, like and submit designs from the MOT Creators catalog",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Catalog file (.toml or .json) to load instead of the built-in catalog.
    #[arg(long, value_name = "PATH", env = "MOT_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Maximum number of tags per submitted design.
    #[arg(long)]
    pub max_tags: Option<usize>,

    /// Show confirmations after actions such as submitting a design.
    #[arg(long)]
    pub push_notifications: Option<bool>,

    /// Run a shell command and exit instead of reading from stdin. Repeatable.
    #[arg(short = 'e', long = "exec", value_name = "COMMAND")]
    pub exec: Vec<String>,
}
