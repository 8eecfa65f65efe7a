use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Input capacity reserved up front by `sort`.
pub const DEFAULT_INPUT_RESERVE: usize = 100_000;
/// Zero-padded key width used by `sort` and `generate`.
pub const DEFAULT_KEY_WIDTH: usize = 6;
pub const DEFAULT_MAX_KEY: u32 = 999_999;

#[derive(Debug, Parser)]
#[command(
    name = "csort",
    version,
    about = "Counting sort versus the standard stable sort on `key value` records"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Time counting sort and the stable baseline on records from stdin
    Bench(BenchArgs),
    /// Counting-sort records from stdin and print them
    Sort(SortArgs),
    /// Write random records to a file
    Generate(GenerateArgs),
}

#[derive(Debug, Args)]
pub struct BenchArgs {
    /// Unit for the reported times
    #[arg(long, value_enum, default_value_t = TimeUnit::Us)]
    pub unit: TimeUnit,
    /// Fail on a malformed record instead of stopping there
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Args)]
pub struct SortArgs {
    /// Records to reserve room for before reading
    #[arg(long, default_value_t = DEFAULT_INPUT_RESERVE)]
    pub reserve: usize,
    /// Zero-padded width of printed keys
    #[arg(long, default_value_t = DEFAULT_KEY_WIDTH)]
    pub width: usize,
    /// Fail on a malformed record instead of stopping there
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Number of records
    pub count: usize,
    /// Destination file
    pub output: PathBuf,
    /// RNG seed; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,
    /// Largest generated key
    #[arg(long, default_value_t = DEFAULT_MAX_KEY)]
    pub max_key: u32,
    /// Zero-padded width of written keys
    #[arg(long, default_value_t = DEFAULT_KEY_WIDTH)]
    pub width: usize,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum TimeUnit {
    Us,
    Ms,
}

impl TimeUnit {
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Us => "us",
            Self::Ms => "ms",
        }
    }

    pub fn count(self, elapsed: Duration) -> u128 {
        match self {
            Self::Us => elapsed.as_micros(),
            Self::Ms => elapsed.as_millis(),
        }
    }
}
