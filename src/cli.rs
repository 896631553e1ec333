//! CLI definition using clap

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// File format for exported histories
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Csv,
    Xlsx,
}

#[derive(Parser)]
#[command(name = "reverb-estimator")]
#[command(version)]
#[command(about = "Octave-band reverberation time (T60) estimation using Sabine's formula")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate T60 for a room
    Compute {
        /// Room length in metres
        #[arg(long, default_value_t = 5.0)]
        length: f64,

        /// Room width in metres
        #[arg(long, default_value_t = 4.0)]
        width: f64,

        /// Room height in metres
        #[arg(long, default_value_t = 3.0)]
        height: f64,

        /// Ceiling main material
        #[arg(long, default_value = "Select Material")]
        ceiling_main: String,

        /// Ceiling additional material
        #[arg(long, default_value = "Select Material")]
        ceiling_add: String,

        /// Area covered by the additional ceiling material (m²)
        #[arg(long, default_value_t = 0.0)]
        ceiling_add_area: f64,

        /// Walls main material
        #[arg(long, default_value = "Select Material")]
        walls_main: String,

        /// Walls additional material
        #[arg(long, default_value = "Select Material")]
        walls_add: String,

        /// Area covered by the additional wall material (m²)
        #[arg(long, default_value_t = 0.0)]
        walls_add_area: f64,

        /// Floor main material
        #[arg(long, default_value = "Select Material")]
        floor_main: String,

        /// Floor additional material
        #[arg(long, default_value = "Select Material")]
        floor_add: String,

        /// Area covered by the additional floor material (m²)
        #[arg(long, default_value_t = 0.0)]
        floor_add_area: f64,

        /// Raft or baffle material
        #[arg(long, default_value = "Select Material")]
        raft: String,

        /// Number of rafts or baffles
        #[arg(long, default_value_t = 0)]
        raft_count: u32,

        /// Append the result to a JSON results file. Without a value the
        /// configured results file is used.
        #[arg(long, value_name = "FILE")]
        save: Option<Option<PathBuf>>,
    },

    /// List or edit saved results
    History {
        /// Path to JSON results file. Uses config value if not specified.
        results: Option<PathBuf>,

        /// Limit number of entries shown
        #[arg(long, short = 'n', default_value = "20")]
        limit: usize,

        /// Remove entries at these 1-based positions
        #[arg(long, num_args = 1.., value_name = "POS")]
        remove: Vec<usize>,

        /// Remove the most recent entry
        #[arg(long)]
        remove_last: bool,

        /// Remove all entries
        #[arg(long)]
        clear: bool,
    },

    /// Export saved results to CSV or Excel
    Export {
        /// Path to JSON results file. Uses config value if not specified.
        results: Option<PathBuf>,

        /// Output file path
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Output file format
        #[arg(long = "format-out", value_enum, default_value = "csv")]
        format_out: ExportFormat,
    },

    /// Import results from a CSV file into a JSON results file
    Import {
        /// Path to CSV file
        file: PathBuf,

        /// Path to JSON results file. Uses config value if not specified.
        #[arg(long)]
        results: Option<PathBuf>,
    },

    /// Show the material catalog
    Materials {
        /// Show a single band only (Hz)
        #[arg(long)]
        band: Option<u32>,

        /// Show a single material only
        #[arg(long)]
        name: Option<String>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set the user materials file (TOML)
        #[arg(long)]
        set_materials_file: Option<PathBuf>,

        /// Stop using a user materials file
        #[arg(long)]
        clear_materials_file: bool,

        /// Set the default results file
        #[arg(long)]
        set_results_file: Option<PathBuf>,

        /// Stop using a default results file
        #[arg(long)]
        clear_results_file: bool,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
