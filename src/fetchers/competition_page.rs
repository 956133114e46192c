use log::warn;
use scraper::{Html, Selector};

use crate::domain::CompetitionDetails;
use crate::http::RetryingClient;

/// Pulls champion and top-scorer names off a competition's own page.
///
/// Best-effort by contract: any fetch or parse failure degrades to
/// `None` for both fields and is never fatal.
pub struct CompetitionPageFetcher;

impl CompetitionPageFetcher {
    pub fn new() -> Self {
        Self
    }

    pub async fn fetch(&self, client: &mut RetryingClient, url: &str) -> CompetitionDetails {
        match client.fetch_text(url).await {
            Ok(body) => self.parse_details(&Html::parse_document(&body)),
            Err(e) => {
                warn!("Failed to fetch details for {url}: {e:#}");
                CompetitionDetails::default()
            }
        }
    }

    pub fn parse_details(&self, html: &Html) -> CompetitionDetails {
        let mut details = CompetitionDetails {
            champion: select_text(html, ".champion-info, .champions-section, #champions-section"),
            top_scorer: select_text(html, ".top-scorer-info, .scorers-section, #top-scorers"),
        };

        // Fall back to captioned tables
        if details.champion.is_none() || details.top_scorer.is_none() {
            self.scan_captioned_tables(html, &mut details);
        }

        details
    }

    fn scan_captioned_tables(&self, html: &Html, details: &mut CompetitionDetails) {
        let table_sel = Selector::parse("table").unwrap();
        let caption_sel = Selector::parse("caption").unwrap();
        let value_sel = Selector::parse("tbody tr:first-child td:last-child").unwrap();

        for table in html.select(&table_sel) {
            let Some(caption) = table.select(&caption_sel).next() else {
                continue;
            };
            let caption_text = caption.text().collect::<String>().to_lowercase();

            if caption_text.contains("champion") && details.champion.is_none() {
                details.champion = table
                    .select(&value_sel)
                    .next()
                    .map(|cell| cell.text().collect::<String>().trim().to_string());
            }
            if caption_text.contains("scorer") && details.top_scorer.is_none() {
                details.top_scorer = table
                    .select(&value_sel)
                    .next()
                    .map(|cell| cell.text().collect::<String>().trim().to_string());
            }
        }
    }
}

impl Default for CompetitionPageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

fn select_text(html: &Html, selectors: &str) -> Option<String> {
    let sel = Selector::parse(selectors).unwrap();
    html.select(&sel)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
}
