//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

use epstein_core::DEFAULT_BASE_URL;

/// DOJ Multimedia Search Client - Query and export document metadata.
#[derive(Parser, Debug)]
#[command(name = "epstein")]
#[command(author, version, about)]
pub struct Args {
    /// Search query (empty = all documents)
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Maximum number of results to fetch
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Delay between requests in seconds
    #[arg(short, long, default_value_t = 0.5, value_parser = parse_delay)]
    pub delay: f64,

    /// Output file prefix
    #[arg(short = 'o', long, default_value = "epstein_library")]
    pub prefix: String,

    /// Directory to save report files
    #[arg(long, default_value = "lib_data")]
    pub output_path: PathBuf,

    /// Base search endpoint URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Do not save results to files (only print summary)
    #[arg(long)]
    pub no_save: bool,

    /// Number of top results to display
    #[arg(long, default_value_t = 10)]
    pub head: usize,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}

/// The delay feeds `Duration::from_secs_f64`, which rejects negative and
/// non-finite values, so validation happens at the parsing boundary.
fn parse_delay(value: &str) -> Result<f64, String> {
    let delay: f64 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if !delay.is_finite() || delay < 0.0 {
        return Err(format!("delay must be a non-negative number, got {value}"));
    }
    Ok(delay)
}
