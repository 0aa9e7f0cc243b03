//! CLI definitions: argument parsing, subcommands, and help text.

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  relay-chat                              Launch interactive TUI
  relay-chat -p \"what is 2+2?\"            Send one message, print the reply
  relay-chat -p - --html                  Read the message from stdin, print the reply as HTML
  relay-chat format < reply.txt           Format assistant text from stdin as HTML
  relay-chat format --json < reply.json   Format a JSON payload (non-strings are pretty-printed)
  relay-chat --endpoint http://host/chat  Talk to another endpoint
  relay-chat config                       Show endpoint and log file
  relay-chat completions bash             Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Terminal chat client for a JSON chat endpoint",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Send a single message then exit (without opening the TUI)
    #[arg(
        short = 'p',
        long,
        help = "Send one message and print the reply (use '-' to read from stdin)"
    )]
    pub prompt: Option<String>,

    /// Print the reply of `-p` as formatted HTML instead of raw text
    #[arg(long, requires = "prompt")]
    pub html: bool,

    /// Chat endpoint URL (overrides RELAY_CHAT_ENDPOINT)
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Format text from stdin and print the HTML markup
    Format {
        /// Treat the input as a user message (escaped, no formatting)
        #[arg(long)]
        user: bool,
        /// Parse stdin as JSON content; non-string values are pretty-printed
        #[arg(long)]
        json: bool,
    },
    /// Show endpoint, timestamp setting, and log file path
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }

    /// True when no subcommand or prompt is given, i.e. the TUI will own the terminal.
    pub fn is_tui(&self) -> bool {
        self.command.is_none() && self.prompt.is_none()
    }
}
