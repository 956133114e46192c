use anyhow::Result;
use indexmap::IndexMap;
use log::{debug, info};

use crate::config::AppConfig;
use crate::domain::{CompetitionTable, DataType, Gender, PageSection, ScrapeResult};
use crate::export::ArtifactWriter;
use crate::extract::{build_tables, GenderMode};
use crate::fetchers::{format_season_url, is_valid_season, CompetitionPageFetcher, CompetitionsFetcher};
use crate::http::RetryingClient;

/// Which table sections of the listing page to keep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    All,
    Club,
    NationalTeam,
}

impl Scope {
    fn keeps(&self, section_title: &str) -> bool {
        let is_national = section_title.to_lowercase().contains("national team");
        match self {
            Scope::All => true,
            Scope::Club => !is_national,
            Scope::NationalTeam => is_national,
        }
    }
}

/// What one scrape invocation should produce
#[derive(Debug, Clone)]
pub struct ScrapeOptions {
    pub gender: GenderMode,
    pub scope: Scope,
    pub season: Option<String>,
    pub with_details: bool,
}

/// Orchestrates a competitions-listing scrape: fetch, aggregate,
/// optionally enrich from detail pages, write artifacts
pub struct ScrapeService {
    config: AppConfig,
    client: RetryingClient,
    fetcher: CompetitionsFetcher,
    details: CompetitionPageFetcher,
}

impl ScrapeService {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = RetryingClient::new(&config.scraper)?;
        let fetcher = CompetitionsFetcher::new(config.scraper.base_url);

        Ok(Self {
            config,
            client,
            fetcher,
            details: CompetitionPageFetcher::new(),
        })
    }

    pub async fn run(&mut self, options: &ScrapeOptions) -> Result<ScrapeResult> {
        info!("=== Starting Competitions Scrape ===\n");

        let url = format_season_url(self.config.scraper.base_url, options.season.as_deref());
        let sections = self.fetcher.fetch(&mut self.client, &url).await?;

        let sections: Vec<PageSection> = sections
            .into_iter()
            .filter(|s| options.scope.keeps(&s.title))
            .collect();
        log_page_structure(&sections);
        info!("  → {} sections in scope\n", sections.len());

        let mut tables = build_tables(&sections, options.gender);

        if options.with_details {
            self.enrich_from_detail_pages(&mut tables).await;
        }

        let result = ScrapeResult::competitions(data_type(options), tables);
        for table in &result.summary.tables {
            info!("  → {}: {} rows, {} links", table.name, table.rows, table.total_links);
        }

        let writer = ArtifactWriter::new(self.config.output.data_dir);
        writer.write(&dataset_stem(options), &result)?;

        info!("\n=== Scrape Complete ===");
        Ok(result)
    }

    /// Fill missing champion/top-scorer fields from each competition's
    /// own page. Lookup failures leave the fields unset.
    async fn enrich_from_detail_pages(
        &mut self,
        tables: &mut IndexMap<String, CompetitionTable>,
    ) {
        info!("Fetching competition detail pages...");
        let mut fetched = 0usize;

        for table in tables.values_mut() {
            for row in &mut table.rows {
                if row.champion.is_some() && row.top_scorer.is_some() {
                    continue;
                }
                let Some(url) = row.url.clone() else {
                    continue;
                };

                let details = self.details.fetch(&mut self.client, &url).await;
                if row.champion.is_none() {
                    row.champion = details.champion;
                }
                if row.top_scorer.is_none() {
                    row.top_scorer = details.top_scorer;
                }
                fetched += 1;
            }
        }

        info!("  → Visited {fetched} detail pages\n");
    }
}

fn data_type(options: &ScrapeOptions) -> DataType {
    if options.scope == Scope::NationalTeam {
        return DataType::NationalTeam;
    }
    match options.gender {
        GenderMode::All => DataType::All,
        GenderMode::Men => DataType::Mens,
        GenderMode::Women => DataType::Womens,
    }
}

fn dataset_stem(options: &ScrapeOptions) -> String {
    let base = if options.scope == Scope::NationalTeam {
        "national_team_competitions"
    } else {
        match options.gender {
            GenderMode::All => "all_football_competitions",
            GenderMode::Men => "mens_football_competitions",
            GenderMode::Women => "womens_football_competitions",
        }
    };

    match options.season.as_deref().filter(|s| is_valid_season(s)) {
        Some(season) => format!("{base}_{season}"),
        None => base.to_string(),
    }
}

fn log_page_structure(sections: &[PageSection]) {
    for section in sections {
        let men = count_gender(section, Gender::Male);
        let women = count_gender(section, Gender::Female);
        debug!(
            "section '{}': {} rows ({} men's, {} women's)",
            section.title,
            section.rows.len(),
            men,
            women
        );
    }
}

fn count_gender(section: &PageSection, gender: Gender) -> usize {
    section
        .rows
        .iter()
        .filter(|r| r.gender == Some(gender))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(gender: GenderMode, scope: Scope, season: Option<&str>) -> ScrapeOptions {
        ScrapeOptions {
            gender,
            scope,
            season: season.map(|s| s.to_string()),
            with_details: false,
        }
    }

    #[test]
    fn scope_filters_sections_by_title() {
        assert!(Scope::Club.keeps("Club Competitions Table"));
        assert!(!Scope::Club.keeps("National Team Competitions Table"));
        assert!(Scope::NationalTeam.keeps("National Team Competitions Table"));
        assert!(Scope::All.keeps("National Team Competitions Table"));
    }

    #[test]
    fn data_type_follows_scope_then_gender() {
        assert_eq!(
            data_type(&options(GenderMode::Women, Scope::NationalTeam, None)),
            DataType::NationalTeam
        );
        assert_eq!(data_type(&options(GenderMode::Women, Scope::All, None)), DataType::Womens);
        assert_eq!(data_type(&options(GenderMode::All, Scope::Club, None)), DataType::All);
    }

    #[test]
    fn dataset_stem_appends_valid_seasons_only() {
        assert_eq!(
            dataset_stem(&options(GenderMode::Men, Scope::All, Some("2003-2004"))),
            "mens_football_competitions_2003-2004"
        );
        assert_eq!(
            dataset_stem(&options(GenderMode::Men, Scope::All, Some("abc"))),
            "mens_football_competitions"
        );
        assert_eq!(
            dataset_stem(&options(GenderMode::All, Scope::NationalTeam, None)),
            "national_team_competitions"
        );
    }
}
