use crate::export::ExportFormat;
use crate::models::alert::AlertKind;
use crate::models::risk_level::RiskLevel;
use clap::{Parser, Subcommand};

/// Command-line interface definition for SafeEntry
/// CLI monitor for sanitation-worker manhole entries
#[derive(Parser)]
#[command(
    name = "safeentry",
    version = env!("CARGO_PKG_VERSION"),
    about = "Manhole entry safety monitor: risk scoring, countdowns, alerts and entry logs",
    long_about = None
)]
pub struct Cli {
    /// Override state file path (useful for tests or a custom location)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the state file, anchoring a new dataset
    Init {
        /// Generator seed (default: `seed` from the configuration)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the state file (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending state file migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check state file integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the state file using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show state file information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Supervisor dashboard: stats, active operations and alerts
    Dashboard {
        /// Restrict operations and alerts to one ward (e.g. "Ward A")
        #[arg(long, short)]
        ward: Option<String>,
    },

    /// Live countdowns of active entries, refreshed every second
    Watch {
        #[arg(long, short)]
        ward: Option<String>,

        /// Stop after N refreshes (default: run until interrupted)
        #[arg(long)]
        ticks: Option<u64>,
    },

    /// Show the profile of one manhole
    Manhole {
        /// Manhole id (e.g. MH-SOL-0007)
        id: String,
    },

    /// Risk distribution of the manhole network
    Heatmap {
        /// Only list manholes at this risk level
        #[arg(long, value_enum)]
        risk: Option<RiskLevel>,

        /// Per-ward breakdown
        #[arg(long)]
        wards: bool,

        /// Write markers as GeoJSON to this file
        #[arg(long, value_name = "FILE")]
        geojson: Option<String>,

        /// Overwrite the GeoJSON file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Entry logs
    Logs {
        /// Search worker name, manhole id or ward
        #[arg(long, short)]
        search: Option<String>,

        /// Only sessions that exceeded their maximum duration
        #[arg(long)]
        overstay: bool,
    },

    /// List alerts
    Alerts {
        #[arg(long, short)]
        ward: Option<String>,

        /// Only alerts of this kind
        #[arg(long, value_enum)]
        kind: Option<AlertKind>,

        /// Only unresolved alerts
        #[arg(long)]
        open: bool,
    },

    /// Mark an alert as resolved
    Resolve {
        /// Alert id (e.g. ALT-001)
        id: String,

        /// Optional operator note
        #[arg(long)]
        note: Option<String>,
    },

    /// Print (or save as SVG) the QR tag of a manhole
    Qr {
        id: String,

        /// Write an SVG image instead of printing to the terminal
        #[arg(long, value_name = "FILE")]
        svg: Option<String>,

        /// Minimum SVG size in pixels
        #[arg(long, default_value_t = 160)]
        size: u32,

        /// Overwrite the SVG file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Score and classify a set of risk counters
    Score {
        incidents: u32,
        rainfall: f64,
        blockages: u32,
        overstays: u32,
    },

    /// Export entry logs in various formats
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Filter by entry date.
        ///
        /// Supported formats: YYYY, YYYY-MM, YYYY-MM-DD, ranges in the same
        /// format (start:end) and the special value `all`.
        #[arg(long, value_name = "RANGE")]
        range: Option<String>,

        #[arg(long, short)]
        search: Option<String>,

        #[arg(long)]
        overstay: bool,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the state file
    Backup {
        /// Destination file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup (zip on Windows, tar.gz on Unix)
        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
