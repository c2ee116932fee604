use clap::{Parser, Subcommand};

/// Command-line interface definition for tip
/// CLI application to track work sessions against a daily target
#[derive(Parser)]
#[command(
    name = "tip",
    version = env!("CARGO_PKG_VERSION"),
    about = "Time It Please: easy command line work timer",
    long_about = None
)]
pub struct Cli {
    /// Override record file path (useful for tests or a custom log)
    #[arg(global = true, long = "file")]
    pub file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the timer (archives the previous day first when needed)
    #[command(visible_alias = "start")]
    On,

    /// Stop the running timer
    #[command(visible_alias = "stop")]
    Off,

    /// Attach a free-text note to the current session
    Note {
        /// Note text; multiple words are joined with spaces
        #[arg(required = true, trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// Show timer status, elapsed and remaining time
    #[command(visible_alias = "status")]
    Info,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

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

    /// Initialize the configuration file
    Init,
}
