//! CLI-only commands: config info and the stdin formatter.
//!
//! These run without opening the TUI and produce plain text output.

use std::io::{self, Read};

use serde_json::Value;

use crate::core::app;
use crate::core::config::Config;
use crate::core::format;
use crate::core::message::Author;
use crate::core::paths;

/// Run the `config` command: display endpoint, timestamps, and log file.
pub fn run_config(config: &Config) {
    let log_file = paths::log_file()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "—".to_string());
    let timestamps = if config.show_timestamps { "on" } else { "off" };

    println!("Version:      {} {}", app::NAME, app::VERSION);
    println!("Endpoint:     {}", config.endpoint);
    println!("Timestamps:   {}", timestamps);
    println!("Log file:     {}", log_file);
}

/// Format `input` as a message of the given author. With `json`, the input is
/// parsed as a JSON value first.
pub fn format_input(input: &str, author: Author, json: bool) -> Result<String, serde_json::Error> {
    if json {
        let content: Value = serde_json::from_str(input)?;
        Ok(format::format_content(&content, author))
    } else {
        Ok(format::format_text(input, author))
    }
}

/// Run the `format` command: read stdin, print the HTML markup.
pub fn run_format(user: bool, json: bool) {
    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("Error reading from stdin: {}", e);
        std::process::exit(1);
    }
    let author = if user { Author::User } else { Author::Assistant };
    match format_input(&buf, author, json) {
        Ok(html) => println!("{}", html),
        Err(e) => {
            eprintln!("Error: invalid JSON input: {}", e);
            std::process::exit(1);
        }
    }
}
