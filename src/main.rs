use anyhow::Result;

use aoe4_overlay::cli::Command;
use aoe4_overlay::{handle_fetch, handle_watch, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Watch {
            profile_id,
            interval,
            theme,
        } => handle_watch(*profile_id, *interval, theme.clone()),
        Command::Fetch { profile_id } => handle_fetch(*profile_id),
    }
}
