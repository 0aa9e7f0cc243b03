//! # relay-chat
//!
//! Terminal chat client: sends each message as one JSON POST to a chat
//! endpoint and renders the replies with light formatting (code blocks,
//! math, bold/italic).
//!
//! ## Modes
//! - Interactive terminal UI (default)
//! - Single message with `-p`, optionally printed as HTML with `--html`
//! - `format`: the message formatter over stdin
//! - `config` and `completions`

mod cli;
mod core;
mod run;
mod tui;

use clap::{CommandFactory, Parser};
use dotenv::dotenv;

use cli::{Args, Commands};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    match args.command {
        Some(Commands::Format { user, json }) => {
            core::cli::run_format(user, json);
            return Ok(());
        }
        Some(Commands::Completions { shell }) => {
            let mut cmd = Args::command();
            cli::generate(shell, &mut cmd, core::app::NAME, &mut std::io::stdout());
            return Ok(());
        }
        _ => {}
    }

    // Print user-friendly message; exit uses Display not Debug
    let config = core::config::load(args.endpoint.as_deref()).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    if matches!(args.command, Some(Commands::Config)) {
        core::cli::run_config(&config);
        return Ok(());
    }

    if let Some(prompt) = args.prompt.as_deref() {
        return run::run_single_prompt(prompt, args.html, &config).await;
    }

    run::launch_tui(config).await
}
