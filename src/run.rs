//! Application run modes: logger init, single prompt, TUI launch.

use std::io;
use std::sync::Arc;

use crate::cli::Args;
use crate::core;
use crate::core::client::ChatClient;
use crate::core::config::Config;
use crate::core::message::Author;

/// Initialize env_logger. In TUI mode, writes to file to avoid corrupting the display.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level));

    if args.is_tui()
        && let Some(path) = core::paths::log_file()
    {
        if let Some(dir) = path.parent() {
            let _ = std::fs::create_dir_all(dir);
        }
        if let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
        {
            logger.target(env_logger::Target::Pipe(Box::new(file)));
        }
    }
    let _ = logger.try_init();
}

/// Run single prompt mode: send one message, print the reply to stdout.
pub async fn run_single_prompt(
    prompt_arg: &str,
    html: bool,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let prompt = if prompt_arg == "-" {
        io::read_to_string(io::stdin())?
    } else {
        prompt_arg.to_string()
    };
    let prompt = prompt.trim();
    if prompt.is_empty() {
        eprintln!("Error: empty prompt");
        std::process::exit(1);
    }

    let client = ChatClient::new(config)?;
    let reply = client.send(prompt).await?;
    if html {
        println!("{}", core::format::format_text(&reply, Author::Assistant));
    } else {
        println!("{}", reply);
    }
    Ok(())
}

/// Launch the TUI in a blocking thread. Returns on panic or IO error.
pub async fn launch_tui(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let client = Arc::new(ChatClient::new(&config)?);
    let join_result: Result<io::Result<()>, tokio::task::JoinError> =
        tokio::task::spawn_blocking(move || crate::tui::run(&config, client)).await;

    match join_result {
        Ok(io_result) => io_result?,
        Err(join_err) => {
            if let Ok(panic) = join_err.try_into_panic() {
                let msg = if let Some(s) = panic.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic.downcast_ref::<String>() {
                    s.clone()
                } else {
                    format!("{:?}", panic)
                };
                eprintln!("TUI panic: {}", msg);
            }
            return Err(
                Box::new(io::Error::other("TUI thread panicked")) as Box<dyn std::error::Error>
            );
        }
    }
    Ok(())
}
