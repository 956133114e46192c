pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod export;
pub mod extract;
pub mod fetchers;
pub mod http;
pub mod services;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::{Command, GenderArg, ScopeArg};
use crate::config::AppConfig;
use crate::services::{HistoryService, ScrapeOptions, ScrapeService};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_scrape(
    gender: GenderArg,
    scope: ScopeArg,
    season: Option<String>,
    details: bool,
) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let mut service = ScrapeService::new(config)?;
        let options = ScrapeOptions {
            gender: gender.into(),
            scope: scope.into(),
            season,
            with_details: details,
        };
        service.run(&options).await?;
        Ok(())
    })
}

pub fn handle_history(league: &str) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let mut service = HistoryService::new(config)?;
        service.run(league).await?;
        Ok(())
    })
}
