use indexmap::IndexMap;
use log::debug;

use crate::domain::{CompetitionTable, Gender, PageSection, SeasonRecord};
use crate::extract::country::detect_country;
use crate::extract::fields::{normalize_field, slug_table_key};
use crate::extract::row::{extract_row, split_champion};

/// How the gender tag is decided for extracted rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenderMode {
    /// Tag each row from its own class marker; untagged rows count as men's
    All,
    /// Keep only men's rows, tag fixed
    Men,
    /// Keep only women's rows, tag fixed
    Women,
}

impl GenderMode {
    fn keeps(&self, row_gender: Option<Gender>) -> bool {
        match self {
            GenderMode::All => true,
            GenderMode::Men => row_gender != Some(Gender::Female),
            GenderMode::Women => row_gender == Some(Gender::Female),
        }
    }

    fn tag(&self, row_gender: Option<Gender>) -> Gender {
        match self {
            GenderMode::All => row_gender.unwrap_or(Gender::Male),
            GenderMode::Men => Gender::Male,
            GenderMode::Women => Gender::Female,
        }
    }
}

/// Assemble page sections into slug-keyed competition tables.
///
/// Header-artifact rows are dropped, each surviving row gets its gender
/// tag and detected country, and rows with a primary link feed the
/// per-table link list. Tables keep the order their sections appear on
/// the page; when two headings slugify identically the later section
/// overwrites the earlier one in place.
pub fn build_tables(sections: &[PageSection], mode: GenderMode) -> IndexMap<String, CompetitionTable> {
    let mut tables = IndexMap::new();

    for section in sections {
        let key = slug_table_key(&section.title);
        if key.is_empty() {
            continue;
        }

        let headers: Vec<String> = section.headers.iter().map(|h| normalize_field(h)).collect();

        let mut rows = Vec::new();
        let mut links = Vec::new();

        for section_row in &section.rows {
            if !mode.keeps(section_row.gender) {
                continue;
            }

            let mut record = extract_row(&section_row.cells, &headers);
            if record.is_header_artifact() {
                continue;
            }

            record.gender = Some(mode.tag(section_row.gender));
            record.country =
                detect_country(&record.competition_name, record.governing_body.as_deref());

            if let Some(link) = record.links.get("competition_link") {
                links.push(link.clone());
            }

            rows.push(record);
        }

        debug!(
            "section '{}' -> key '{}': {} rows, {} links",
            section.title,
            key,
            rows.len(),
            links.len()
        );

        tables.insert(
            key,
            CompetitionTable {
                title: section.title.clone(),
                headers,
                rows,
                links,
            },
        );
    }

    tables
}

/// Build season records for single-league history mode from one table
/// section, keyed by the literal header labels of the history page.
/// Rows without a season value distinct from the "Season" label are
/// dropped.
pub fn build_season_records(section: &PageSection) -> Vec<SeasonRecord> {
    let mut seasons = Vec::new();

    for row in &section.rows {
        let mut record = SeasonRecord::default();

        for (i, cell) in row.cells.iter().enumerate() {
            let Some(label) = section.headers.get(i) else {
                continue;
            };
            if cell.text.is_empty() {
                continue;
            }

            match label.as_str() {
                "Season" => {
                    record.season = cell.text.clone();
                    record.season_url = cell.href.clone();
                }
                "Competition Name" => record.competition = Some(cell.text.clone()),
                "# Squads" => {
                    if let Ok(n) = cell.text.parse::<i64>() {
                        record.squad = Some(n);
                    } else {
                        record.extra.insert("squads".to_string(), cell.text.clone());
                    }
                    record.squad_url = cell.href.clone();
                }
                "Champion" => {
                    let (name, points) = split_champion(&cell.text);
                    record.champion = Some(name);
                    record.champion_points = points;
                    record.champion_url = cell.href.clone();
                }
                "Top Scorer" => {
                    record.top_scorer = Some(cell.text.clone());
                    record.top_scorer_url = cell.href.clone();
                }
                "Notes" => record.notes = Some(cell.text.clone()),
                _ => {
                    record
                        .extra
                        .insert(normalize_field(label), cell.text.clone());
                }
            }
        }

        if record.season.is_empty() || record.season == "Season" {
            continue;
        }

        seasons.push(record);
    }

    seasons
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RawCell, SectionRow};

    fn listing_section() -> PageSection {
        PageSection {
            title: "Club Competitions Table".to_string(),
            table_id: None,
            headers: vec!["Competition Name".to_string(), "Governing Body".to_string()],
            rows: vec![
                SectionRow {
                    cells: vec![
                        RawCell::new("Competition Name"),
                        RawCell::new("Governing Body"),
                    ],
                    gender: None,
                },
                SectionRow {
                    cells: vec![
                        RawCell::with_href("La Liga", "https://fbref.com/en/comps/12"),
                        RawCell::new("RFEF"),
                    ],
                    gender: Some(Gender::Male),
                },
                SectionRow {
                    cells: vec![
                        RawCell::with_href("Liga F", "https://fbref.com/en/comps/230"),
                        RawCell::new("RFEF"),
                    ],
                    gender: Some(Gender::Female),
                },
            ],
        }
    }

    #[test]
    fn tables_are_keyed_by_heading_slug() {
        let tables = build_tables(&[listing_section()], GenderMode::All);
        assert!(tables.contains_key("club_competitions"));
    }

    #[test]
    fn header_artifacts_never_reach_the_table() {
        let tables = build_tables(&[listing_section()], GenderMode::All);
        let table = &tables["club_competitions"];

        assert_eq!(table.rows.len(), 2);
        assert!(table.rows.iter().all(|r| !r.is_header_artifact()));
    }

    #[test]
    fn all_mode_tags_rows_from_their_class_marker() {
        let tables = build_tables(&[listing_section()], GenderMode::All);
        let rows = &tables["club_competitions"].rows;

        assert_eq!(rows[0].gender, Some(Gender::Male));
        assert_eq!(rows[1].gender, Some(Gender::Female));
    }

    #[test]
    fn women_mode_filters_and_tags() {
        let tables = build_tables(&[listing_section()], GenderMode::Women);
        let rows = &tables["club_competitions"].rows;

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].competition_name, "Liga F");
        assert_eq!(rows[0].gender, Some(Gender::Female));
    }

    #[test]
    fn countries_are_attached_during_aggregation() {
        let tables = build_tables(&[listing_section()], GenderMode::All);
        let rows = &tables["club_competitions"].rows;

        assert_eq!(rows[0].country, "Spain");
        assert_eq!(rows[1].country, "Spain");
    }

    #[test]
    fn primary_links_feed_the_table_link_list() {
        let tables = build_tables(&[listing_section()], GenderMode::All);
        let links = &tables["club_competitions"].links;

        assert_eq!(links.len(), 2);
        assert_eq!(links[0].name, "La Liga");
    }

    #[test]
    fn colliding_slugs_overwrite_the_earlier_section() {
        let mut second = listing_section();
        second.title = "Club Competitions".to_string();
        second.rows.truncate(2);

        let tables = build_tables(&[listing_section(), second], GenderMode::All);

        assert_eq!(tables.len(), 1);
        assert_eq!(tables["club_competitions"].title, "Club Competitions");
        assert_eq!(tables["club_competitions"].rows.len(), 1);
    }

    #[test]
    fn tables_keep_page_order_not_alphabetical_order() {
        let mut zebra = listing_section();
        zebra.title = "Zebra Cups Table".to_string();
        let mut alpha = listing_section();
        alpha.title = "Alpha Leagues Table".to_string();

        let tables = build_tables(&[zebra, alpha], GenderMode::All);
        let keys: Vec<&String> = tables.keys().collect();

        assert_eq!(keys, vec!["zebra_cups", "alpha_leagues"]);
    }

    fn history_section() -> PageSection {
        PageSection {
            title: "Premier League Seasons".to_string(),
            table_id: Some("seasons".to_string()),
            headers: vec![
                "Season".to_string(),
                "Competition Name".to_string(),
                "# Squads".to_string(),
                "Champion".to_string(),
                "Top Scorer".to_string(),
            ],
            rows: vec![
                SectionRow {
                    cells: vec![
                        RawCell::new("Season"),
                        RawCell::new("Competition Name"),
                        RawCell::new("# Squads"),
                        RawCell::new("Champion"),
                        RawCell::new("Top Scorer"),
                    ],
                    gender: None,
                },
                SectionRow {
                    cells: vec![
                        RawCell::with_href("2023-2024", "https://fbref.com/en/comps/9/2023-2024"),
                        RawCell::new("Premier League"),
                        RawCell::new("20"),
                        RawCell::new("Manchester City - 91"),
                        RawCell::new("Erling Haaland - 27"),
                    ],
                    gender: None,
                },
                SectionRow {
                    cells: vec![RawCell::new(""), RawCell::new("Premier League")],
                    gender: None,
                },
            ],
        }
    }

    #[test]
    fn history_rows_map_through_the_fixed_dictionary() {
        let seasons = build_season_records(&history_section());

        assert_eq!(seasons.len(), 1);
        let record = &seasons[0];
        assert_eq!(record.season, "2023-2024");
        assert_eq!(record.competition.as_deref(), Some("Premier League"));
        assert_eq!(record.squad, Some(20));
        assert_eq!(record.champion.as_deref(), Some("Manchester City"));
        assert_eq!(record.champion_points, Some(91));
        assert_eq!(record.top_scorer.as_deref(), Some("Erling Haaland - 27"));
        assert_eq!(
            record.season_url.as_deref(),
            Some("https://fbref.com/en/comps/9/2023-2024")
        );
    }

    #[test]
    fn non_numeric_squad_counts_land_in_extra_under_squads() {
        let mut section = history_section();
        section.rows[1].cells[2] = RawCell::new("20 clubs");

        let seasons = build_season_records(&section);

        assert_eq!(seasons[0].squad, None);
        assert_eq!(seasons[0].extra.get("squads").map(String::as_str), Some("20 clubs"));
    }

    #[test]
    fn seasonless_and_label_rows_are_dropped() {
        let seasons = build_season_records(&history_section());
        assert!(seasons.iter().all(|s| s.season != "Season" && !s.season.is_empty()));
    }
}
