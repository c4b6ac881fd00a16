//! CLI argument definitions using clap.

use clap::Parser;
use sschecker::Mode;
use std::path::PathBuf;

/// sschecker: validate sequencing samplesheets before submission
#[derive(Parser)]
#[command(name = "sschecker")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the samplesheet to check
    #[arg(short, long, value_name = "FILE")]
    pub samplesheet: PathBuf,

    /// Directory receiving <stem>.report.txt and <stem>.report.json
    #[arg(short, long, value_name = "DIR", default_value = "report")]
    pub output: PathBuf,

    /// Index/chemistry registry (UDP sheet) to check index sequences against
    #[arg(short, long, value_name = "FILE")]
    pub udp: Option<PathBuf>,

    /// Check mode: default treats every finding as fatal, skip ignores index order
    #[arg(short, long, default_value = "default")]
    pub mode: ModeChoice,

    /// JSON file overriding the built-in profiles and schemas
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Check mode as spelled on the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeChoice {
    #[default]
    Default,
    Skip,
}

impl std::str::FromStr for ModeChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" | "strict" => Ok(ModeChoice::Default),
            "skip" => Ok(ModeChoice::Skip),
            _ => Err(format!("Unknown mode: {}. Use default or skip.", s)),
        }
    }
}

impl std::fmt::Display for ModeChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModeChoice::Default => write!(f, "default"),
            ModeChoice::Skip => write!(f, "skip"),
        }
    }
}

impl From<ModeChoice> for Mode {
    fn from(choice: ModeChoice) -> Self {
        match choice {
            ModeChoice::Default => Mode::Strict,
            ModeChoice::Skip => Mode::SkipIndexOrder,
        }
    }
}
