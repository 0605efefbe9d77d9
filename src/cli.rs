use clap::Parser;
use std::path::PathBuf;

/// Compare two vulnerability scan exports and report dropped hosts
#[derive(Parser, Debug)]
#[command(name = "scandiff")]
#[command(version)]
#[command(
    about = "Compare two vulnerability scan exports and report, per issue, the hosts no longer affected",
    long_about = None
)]
pub struct Args {
    /// Path to the baseline (earlier) scan export
    pub baseline: PathBuf,

    /// Path to the latest scan export to compare against
    pub comparator: PathBuf,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
