use anyhow::Result;

use fbref_scraper::cli::Command;
use fbref_scraper::{handle_history, handle_scrape, interpret};

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
    execute_command(command)
}

fn execute_command(command: Command) -> Result<()> {
    match command {
        Command::Scrape {
            gender,
            scope,
            season,
            details,
        } => handle_scrape(gender, scope, season, details),
        Command::History { league } => handle_history(&league),
    }
}
