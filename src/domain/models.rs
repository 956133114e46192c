use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Site identifier stamped into every aggregate
pub const SOURCE: &str = "fbref.com";

/// Gender tag for a competition row, read from the row's CSS class
/// on the source page (`gender-m` / `gender-f`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }
}

/// Which slice of the source data a scrape covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    #[serde(rename = "all")]
    All,
    #[serde(rename = "men's")]
    Mens,
    #[serde(rename = "women's")]
    Womens,
    #[serde(rename = "league history")]
    LeagueHistory,
    #[serde(rename = "national team")]
    NationalTeam,
}

/// Named hyperlink extracted from a table cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRef {
    pub name: String,
    pub url: String,
}

/// One row of a competition listing table, normalized.
///
/// Absent data is represented by field omission, never by empty strings;
/// `country` is the one exception (empty = undetected).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompetitionRecord {
    pub competition_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub governing_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_season: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_season: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub awards: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub champion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub champion_points: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_scorer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub squads: Option<i64>,
    /// Columns the listing carries that have no dedicated field;
    /// flattened, so an empty map adds nothing to the output.
    /// Keyed maps keep column order as read off the page.
    #[serde(flatten)]
    pub extra: IndexMap<String, String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub links: IndexMap<String, LinkRef>,
}

impl CompetitionRecord {
    /// The source tables repeat their header row inside `tbody`; those
    /// artifacts carry the literal column label as a name.
    pub fn is_header_artifact(&self) -> bool {
        self.competition_name.is_empty() || self.competition_name == "Competition Name"
    }
}

/// One row of a single league's season-history table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonRecord {
    pub season: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub squad: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub champion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub champion_points: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_scorer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub squad_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub champion_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_scorer_url: Option<String>,
    #[serde(flatten)]
    pub extra: IndexMap<String, String>,
}

/// A named collection of competition rows, keyed by a slug of its
/// section heading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitionTable {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<CompetitionRecord>,
    pub links: Vec<LinkRef>,
}

/// Per-table row/link counts for the summary block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSummary {
    pub name: String,
    pub rows: usize,
    pub total_links: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapeSummary {
    pub total_tables: usize,
    pub tables: Vec<TableSummary>,
}

/// Root aggregate produced by one scrape. Carries either `tables`
/// (competition listing modes) or the `league_*`/`seasons` trio
/// (single-league history mode).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapeResult {
    pub timestamp: String,
    pub source: String,
    #[serde(rename = "dataType")]
    pub data_type: DataType,
    pub summary: ScrapeSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tables: Option<IndexMap<String, CompetitionTable>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub league_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub league_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seasons: Option<Vec<SeasonRecord>>,
}

impl ScrapeResult {
    pub fn competitions(data_type: DataType, tables: IndexMap<String, CompetitionTable>) -> Self {
        let summary = ScrapeSummary {
            total_tables: tables.len(),
            tables: tables
                .values()
                .map(|t| TableSummary {
                    name: t.title.clone(),
                    rows: t.rows.len(),
                    total_links: t.links.len(),
                })
                .collect(),
        };

        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            source: SOURCE.to_string(),
            data_type,
            summary,
            tables: Some(tables),
            league_name: None,
            league_url: None,
            seasons: None,
        }
    }

    pub fn league_history(
        league_name: String,
        league_url: String,
        seasons: Vec<SeasonRecord>,
    ) -> Self {
        let total_links = seasons.iter().filter(|s| s.season_url.is_some()).count();
        let summary = ScrapeSummary {
            total_tables: 1,
            tables: vec![TableSummary {
                name: league_name.clone(),
                rows: seasons.len(),
                total_links,
            }],
        };

        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            source: SOURCE.to_string(),
            data_type: DataType::LeagueHistory,
            summary,
            tables: None,
            league_name: Some(league_name),
            league_url: Some(league_url),
            seasons: Some(seasons),
        }
    }

    pub fn is_league_history(&self) -> bool {
        self.league_name.is_some() && self.seasons.is_some()
    }
}

// --- Raw Page Data (handed over by the fetcher layer) ---

/// One table cell as read from the rendered page: trimmed text plus
/// the href of the first anchor, if any
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawCell {
    pub text: String,
    pub href: Option<String>,
}

impl RawCell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: None,
        }
    }

    pub fn with_href(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: Some(href.into()),
        }
    }
}

/// One table row plus its CSS-class-derived gender marker
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionRow {
    pub cells: Vec<RawCell>,
    pub gender: Option<Gender>,
}

/// One rendered table section: heading, the table's `id` attribute
/// when it has one, raw header labels, rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageSection {
    pub title: String,
    pub table_id: Option<String>,
    pub headers: Vec<String>,
    pub rows: Vec<SectionRow>,
}

/// Champion/top-scorer pair pulled from a competition's own page;
/// both sides degrade to `None` when the lookup fails
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompetitionDetails {
    pub champion: Option<String>,
    pub top_scorer: Option<String>,
}
