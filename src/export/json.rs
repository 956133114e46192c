use anyhow::{Context, Result};

use crate::domain::ScrapeResult;

/// Render an aggregate as pretty-printed JSON (two-space indentation,
/// fields in declaration order, nothing filtered out)
pub fn to_json(result: &ScrapeResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("Failed to serialize scrape result")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        CompetitionRecord, CompetitionTable, DataType, Gender, LinkRef, ScrapeResult,
    };
    use indexmap::IndexMap;

    #[test]
    fn json_round_trip_preserves_structure_and_numbers() {
        let mut record = CompetitionRecord {
            competition_name: "Premier League".to_string(),
            url: Some("https://fbref.com/en/comps/9".to_string()),
            gender: Some(Gender::Male),
            governing_body: Some("The FA".to_string()),
            country: "England".to_string(),
            champion: Some("Manchester City".to_string()),
            champion_points: Some(91),
            squads: Some(20),
            ..Default::default()
        };
        record.extra.insert("notes".to_string(), "promoted".to_string());
        record.links.insert(
            "competition_link".to_string(),
            LinkRef {
                name: "Premier League".to_string(),
                url: "https://fbref.com/en/comps/9".to_string(),
            },
        );

        let table = CompetitionTable {
            title: "Club Competitions Table".to_string(),
            headers: vec!["competition_name".to_string(), "governing_body".to_string()],
            rows: vec![record],
            links: vec![LinkRef {
                name: "Premier League".to_string(),
                url: "https://fbref.com/en/comps/9".to_string(),
            }],
        };
        let mut tables = IndexMap::new();
        tables.insert("club_competitions".to_string(), table);
        let result = ScrapeResult::competitions(DataType::Mens, tables);

        let json = to_json(&result).unwrap();
        let parsed: ScrapeResult = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, result);

        // numeric fields stay numeric on the wire
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let row = &value["tables"]["club_competitions"]["rows"][0];
        assert!(row["champion_points"].is_i64());
        assert!(row["squads"].is_i64());
        assert_eq!(value["dataType"], "men's");
    }

    #[test]
    fn output_is_two_space_indented() {
        let result = ScrapeResult::competitions(DataType::All, IndexMap::new());
        let json = to_json(&result).unwrap();
        assert!(json.lines().nth(1).unwrap().starts_with("  \""));
    }

    #[test]
    fn absent_fields_are_omitted_not_nulled() {
        let record = CompetitionRecord {
            competition_name: "Mystery Cup".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&record).unwrap();

        assert_eq!(json, r#"{"competition_name":"Mystery Cup"}"#);
    }
}
