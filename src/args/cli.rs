use clap::Parser;

use super::parsers::parse_positive_u64;
use super::types::PositiveU64;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Minimal concurrent HTTPS benchmark - fan out GET requests per host and report per-host success, failure, and latency stats."
)]
pub struct BenchArgs {
    /// Comma-separated list of target URLs (https only)
    #[arg(long, short = 'H')]
    pub hosts: Option<String>,

    /// Number of requests per host
    #[arg(long, short = 'C', default_value = "1", value_parser = parse_positive_u64)]
    pub count: PositiveU64,

    /// File with one target URL per line (blank lines skipped)
    #[arg(long, short = 'F')]
    pub file: Option<String>,

    /// Write the report to this path instead of stdout
    #[arg(long, short = 'O')]
    pub output: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable colored log output
    #[arg(long = "no-color")]
    pub no_color: bool,
}
