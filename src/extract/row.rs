use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::{CompetitionRecord, LinkRef, RawCell};

/// Trailing "<name> - <points>" form used in champion cells.
///
/// With several " - " separators only the final dash-number segment is
/// taken as the score; everything before it stays in the name. Known
/// limitation: a club whose name legitimately ends in a dash-number
/// sequence is split the same way.
static CHAMPION_POINTS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.*) - (\d+)$").unwrap());

/// "Champion: <name>" fragments inside awards/notes cells
static AWARDS_CHAMPION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Champion:?\s*([^,;]+)").unwrap());

/// "Top Scorer: <name>" / "Golden Boot: <name>" fragments
static AWARDS_TOP_SCORER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:Top Scorer|Golden Boot):?\s*([^,;]+)").unwrap());

/// Map one rendered table row onto a [`CompetitionRecord`].
///
/// The first cell is always the competition name regardless of its
/// header label; later cells are keyed by the normalized header at the
/// same index. Cells with empty text are omitted entirely. Callers must
/// drop records for which [`CompetitionRecord::is_header_artifact`]
/// holds.
pub fn extract_row(cells: &[RawCell], headers: &[String]) -> CompetitionRecord {
    let mut record = CompetitionRecord::default();

    for (i, cell) in cells.iter().enumerate() {
        if i == 0 {
            record.competition_name = cell.text.clone();
            if let Some(href) = &cell.href {
                record.url = Some(href.clone());
                record.links.insert(
                    "competition_link".to_string(),
                    LinkRef {
                        name: cell.text.clone(),
                        url: href.clone(),
                    },
                );
            }
            continue;
        }

        let Some(key) = headers.get(i).filter(|k| !k.is_empty()) else {
            continue;
        };
        if cell.text.is_empty() {
            continue;
        }

        assign_field(&mut record, key, &cell.text);

        if let Some(href) = &cell.href {
            record.links.insert(
                format!("{key}_link"),
                LinkRef {
                    name: cell.text.clone(),
                    url: href.clone(),
                },
            );
        }
    }

    record
}

/// Split a champion cell into name and trailing points. Returns the
/// whole trimmed text with no points when the pattern does not match.
pub fn split_champion(text: &str) -> (String, Option<i64>) {
    if let Some(caps) = CHAMPION_POINTS.captures(text) {
        let name = caps[1].trim().to_string();
        if let Ok(points) = caps[2].parse::<i64>() {
            return (name, Some(points));
        }
    }
    (text.trim().to_string(), None)
}

// --- Field Dispatch ---

fn assign_field(record: &mut CompetitionRecord, key: &str, text: &str) {
    match key {
        "governing_body" => record.governing_body = Some(text.to_string()),
        "first_season" => record.first_season = Some(text.to_string()),
        "last_season" => record.last_season = Some(text.to_string()),
        "tier" => record.tier = Some(text.to_string()),
        "champion" => {
            let (name, points) = split_champion(text);
            record.champion = Some(name);
            record.champion_points = points;
        }
        "top_scorer" => record.top_scorer = Some(text.to_string()),
        "awards" => {
            record.awards = Some(text.to_string());
            mine_awards(record, text);
        }
        "notes" => {
            record.extra.insert(key.to_string(), text.to_string());
            mine_awards(record, text);
        }
        _ if key.contains("squads") => match text.parse::<i64>() {
            Ok(n) => record.squads = Some(n),
            Err(_) => {
                record.extra.insert(key.to_string(), text.to_string());
            }
        },
        _ => {
            record.extra.insert(key.to_string(), text.to_string());
        }
    }
}

/// Awards/notes cells sometimes carry champion and top-scorer names as
/// free text fragments
fn mine_awards(record: &mut CompetitionRecord, text: &str) {
    if let Some(caps) = AWARDS_CHAMPION.captures(text) {
        record.champion = Some(caps[1].trim().to_string());
    }
    if let Some(caps) = AWARDS_TOP_SCORER.captures(text) {
        record.top_scorer = Some(caps[1].trim().to_string());
    }
}
