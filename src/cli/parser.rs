use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for gapcheck
/// CLI application to record an employment history and check it for gaps
#[derive(Parser)]
#[command(
    name = "gapcheck",
    version = env!("CARGO_PKG_VERSION"),
    about = "Employment history gap checker: find, explain and export uncovered periods using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Pin "today" (YYYY-MM-DD) for current positions
    #[arg(global = true, long = "today")]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add an employment interval, or edit one with --edit --id
    Add {
        /// Employer name (new intervals)
        name: Option<String>,

        #[arg(long = "employer", help = "Employer name (alternative to the positional name)")]
        employer: Option<String>,

        #[arg(long = "start", help = "First day of employment (YYYY-MM-DD)")]
        start: Option<String>,

        #[arg(long = "end", help = "Last day of employment (YYYY-MM-DD)")]
        end: Option<String>,

        #[arg(
            long = "current",
            conflicts_with = "not_current",
            help = "Position still held: covers every day up to today"
        )]
        current: bool,

        #[arg(long = "not-current", help = "Clear the current flag (with --edit)")]
        not_current: bool,

        #[arg(long = "id", help = "Interval ID to edit (used with --edit)")]
        id: Option<i64>,

        #[arg(long = "edit", requires = "id", help = "Edit an existing interval")]
        edit: bool,
    },

    /// Delete an employment interval
    Del {
        #[arg(long = "id", help = "Interval ID to delete")]
        id: i64,
    },

    /// List the employment history with gaps inline
    List,

    /// Show detected gaps and their explanation status
    Gaps {
        #[arg(
            long = "threshold",
            conflicts_with = "regulatory",
            help = "Minimum gap length: a number of days, 'any' or 'regulatory'"
        )]
        threshold: Option<String>,

        #[arg(long = "regulatory", help = "Use the reference threshold from the configuration")]
        regulatory: bool,

        #[arg(long = "unexplained", help = "Only show gaps still waiting for an explanation")]
        unexplained: bool,
    },

    /// Explain a gap, delete an explanation, or prune stale ones
    Explain {
        #[arg(long = "gap", help = "Gap number as listed by `gaps`")]
        gap: Option<usize>,

        #[arg(long = "reason", requires = "gap", help = "Why the period is uncovered")]
        reason: Option<String>,

        #[arg(
            long = "threshold",
            conflicts_with = "regulatory",
            help = "Threshold used to number the gaps (same as `gaps --threshold`)"
        )]
        threshold: Option<String>,

        #[arg(long = "regulatory", help = "Number gaps as `gaps --regulatory` does")]
        regulatory: bool,

        #[arg(long = "del", requires = "id", help = "Delete the explanation with --id")]
        del: bool,

        #[arg(long = "id", help = "Explanation ID (used with --del)")]
        id: Option<i64>,

        #[arg(long = "prune", help = "Remove explanations that match no gap any more")]
        prune: bool,
    },

    /// Show which employers need a reference request
    References,

    /// Backup the database
    Backup {
        #[arg(long = "file", help = "Destination file")]
        file: String,

        #[arg(long = "compress", help = "Compress the backup into a zip archive")]
        compress: bool,
    },

    /// Export the employment history or its gaps
    Export {
        #[arg(long = "format", value_enum, help = "Output format")]
        format: ExportFormat,

        #[arg(long = "file", help = "Absolute path of the output file")]
        file: String,

        #[arg(
            long = "range",
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, or ranges like YYYY-MM:YYYY-MM)"
        )]
        range: Option<String>,

        #[arg(long = "gaps", help = "Export the gap list instead of the intervals")]
        gaps: bool,

        #[arg(long = "regulatory", help = "Use the reference threshold for gaps")]
        regulatory: bool,

        #[arg(long = "force", help = "Overwrite an existing file without asking")]
        force: bool,
    },
}
