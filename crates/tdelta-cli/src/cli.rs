//! Command-line argument definitions.

use std::fmt;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Parse and normalize durations.
///
/// Accepts ISO-8601 durations and intervals, positional tuples, unit
/// mappings and numbers with units, and prints the canonical duration.
#[derive(Debug, Parser)]
#[command(name = "tdelta", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse an ISO-8601 duration or interval, or a number with `--unit`.
    Parse {
        /// The duration text (e.g., P1Y2M10DT2H30M, 2007-03-01/2008-05-11).
        #[arg(allow_hyphen_values = true)]
        input: String,

        /// Read the input as a number in this unit (e.g., hours).
        #[arg(short, long)]
        unit: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Parse `years months days hours minutes seconds [microseconds]`.
    Tuple {
        /// Six or seven numbers.
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Parse unit assignments such as `days=3 hours=4.5`.
    Fields {
        /// `unit=amount` pairs.
        #[arg(required = true, allow_hyphen_values = true)]
        entries: Vec<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Convert a duration to a number of days, years or months.
    Convert {
        /// The duration text.
        #[arg(allow_hyphen_values = true)]
        input: String,

        /// Target unit: days, years or months.
        #[arg(short, long, default_value = "days")]
        to: String,
    },

    /// Show the duration between two timestamps.
    Between {
        /// Start timestamp (e.g., 2007-03-01T13:00:00Z).
        start: String,

        /// End timestamp.
        end: String,

        #[command(flatten)]
        output: OutputArgs,
    },
}

/// Output options shared by the parsing subcommands.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct OutputArgs {
    /// Output format; defaults to the configured format.
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write every ISO-8601 field, including zeros.
    #[arg(long)]
    pub full: bool,
}

/// How a parsed duration is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// ISO-8601 duration string.
    Iso,
    /// Years, weeks, days, hours, minutes and seconds.
    Long,
    /// Carried days, seconds and microseconds.
    Dict,
    /// All of the above as JSON.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Iso => "iso",
            Self::Long => "long",
            Self::Dict => "dict",
            Self::Json => "json",
        };
        write!(f, "{s}")
    }
}
