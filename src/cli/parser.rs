use clap::{Parser, Subcommand};

/// Command-line interface definition for rworklog
/// CLI work timer that logs each session to a Markdown table
#[derive(Parser)]
#[command(
    name = "rworklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple work timer: start/stop sessions per project and log them to 'Work Log.md'",
    long_about = None
)]
pub struct Cli {
    /// Override the log directory for this run (useful for tests or a second vault)
    #[arg(global = true, long = "dir", value_name = "DIR")]
    pub dir: Option<String>,

    /// Run in test mode (no config file or activity log update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration
    Init,

    /// Manage the configuration file (view, check, edit, set the log directory)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check the configuration and the log directory")]
        check: bool,

        #[arg(
            long = "set-dir",
            value_name = "DIR",
            help = "Set the folder that holds 'Work Log.md'"
        )]
        set_dir: Option<String>,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Time work sessions interactively (Enter stops the running timer)
    Track {
        /// Project to start right away (otherwise prompted)
        project: Option<String>,
    },

    /// Log a finished session for today
    Add {
        /// Project label
        project: String,

        /// Start time (HH:MM or HH:MM:SS)
        #[arg(long = "in", help = "Start time (HH:MM or HH:MM:SS)")]
        start: String,

        /// End time (HH:MM or HH:MM:SS)
        #[arg(long = "out", help = "End time (HH:MM or HH:MM:SS)")]
        end: String,
    },

    /// Print the internal activity log
    Log {
        #[arg(long = "print", help = "Print the internal activity log")]
        print: bool,
    },
}
