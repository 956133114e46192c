use anyhow::{Context, Result};
use log::info;

use crate::config::AppConfig;
use crate::domain::{LinkRef, PageSection, ScrapeResult};
use crate::errors::ScrapeError;
use crate::export::ArtifactWriter;
use crate::extract::{build_season_records, normalize_field};
use crate::fetchers::{find_league, format_season_url, history_url, CompetitionsFetcher};
use crate::http::RetryingClient;

/// Orchestrates single-league history mode: locate the league on the
/// listing page, fetch its seasons table, write artifacts
pub struct HistoryService {
    config: AppConfig,
    client: RetryingClient,
    fetcher: CompetitionsFetcher,
}

impl HistoryService {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = RetryingClient::new(&config.scraper)?;
        let fetcher = CompetitionsFetcher::new(config.scraper.base_url);

        Ok(Self {
            config,
            client,
            fetcher,
        })
    }

    pub async fn run(&mut self, league_name: &str) -> Result<ScrapeResult> {
        info!("=== Starting League History Scrape: {league_name} ===\n");

        let league = self.locate_league(league_name).await?;
        info!("  → Found league: {} ({})\n", league.name, league.url);

        let seasons_section = self.fetch_seasons_section(&league.name, &league.url).await?;
        let seasons = build_season_records(&seasons_section);
        info!("  → Extracted {} seasons\n", seasons.len());

        let result = ScrapeResult::league_history(league.name, league.url, seasons);

        let writer = ArtifactWriter::new(self.config.output.data_dir);
        let stem = format!("{}_history", normalize_field(league_name));
        writer.write(&stem, &result)?;

        info!("\n=== History Scrape Complete ===");
        Ok(result)
    }

    async fn locate_league(&mut self, league_name: &str) -> Result<LinkRef> {
        let url = format_season_url(self.config.scraper.base_url, None);
        let sections = self.fetcher.fetch(&mut self.client, &url).await?;

        find_league(&sections, league_name)
            .ok_or_else(|| ScrapeError::LeagueNotFound(league_name.to_string()).into())
    }

    async fn fetch_seasons_section(
        &mut self,
        league_name: &str,
        league_url: &str,
    ) -> Result<PageSection> {
        let url = history_url(league_url, league_name)
            .with_context(|| format!("Cannot derive a history URL from {league_url}"))?;

        let sections = self.fetcher.fetch(&mut self.client, &url).await?;

        pick_seasons_section(sections)
            .with_context(|| format!("No seasons table found at {url}"))
    }
}

/// Prefer the table with id `seasons`, the id the history pages give
/// their seasons table; then any section whose headers carry a
/// "Season" column; then the first one with any rows
fn pick_seasons_section(sections: Vec<PageSection>) -> Option<PageSection> {
    if let Some(idx) = sections
        .iter()
        .position(|s| s.table_id.as_deref() == Some("seasons"))
    {
        return sections.into_iter().nth(idx);
    }
    if let Some(idx) = sections
        .iter()
        .position(|s| s.headers.iter().any(|h| h == "Season"))
    {
        return sections.into_iter().nth(idx);
    }
    sections.into_iter().find(|s| !s.rows.is_empty())
}
