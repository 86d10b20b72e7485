use clap::{Parser, Subcommand};

/// Command-line interface definition for shiftplan
#[derive(Parser)]
#[command(
    name = "shiftplan",
    version = env!("CARGO_PKG_VERSION"),
    about = "Edit monthly shift schedules stored in a spreadsheet and check driver coverage",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of the standard one
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Use a CSV workbook fixture directory instead of the configured backend
    #[arg(global = true, long = "workbook", value_name = "DIR")]
    pub workbook: Option<String>,

    /// Access PIN (asked for interactively when one is configured)
    #[arg(global = true, long = "pin")]
    pub pin: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file (and the local workbook with --workbook)
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

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

    /// List the month sheets
    Months,

    /// Show a month's schedule with the driver check column
    Show {
        /// Month: sheet name (e.g. "Leden", "cervenec") or number 1-12
        month: String,

        #[arg(long = "missing", help = "Only rows where a driver is missing")]
        missing: bool,
    },

    /// Edit cells of a month and save the whole sheet back
    ///
    /// Examples:
    ///   shiftplan edit Leden --set "3:Vozidlo=Dodávka" --set "3:Tichý=✓"
    ///   shiftplan edit 2 --add-rows 1 --set "21:Datum=02.02.2026"
    ///   shiftplan edit 2 --remove-row 5 --dry-run
    Edit {
        /// Month: sheet name or number 1-12
        month: String,

        /// Cell assignment ROW:COLUMN=VALUE (row numbers start at 1)
        #[arg(long = "set", value_name = "ROW:COLUMN=VALUE")]
        set: Vec<String>,

        /// Append empty rows before applying --set
        #[arg(long = "add-rows", value_name = "N", default_value_t = 0)]
        add_rows: usize,

        /// Delete a row (after --set)
        #[arg(long = "remove-row", value_name = "ROW")]
        remove_row: Vec<usize>,

        /// Apply and show the result without saving
        #[arg(long = "dry-run")]
        dry_run: bool,
    },
}
