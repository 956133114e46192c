use crate::domain::{CompetitionRecord, ScrapeResult, SeasonRecord};

const COMPETITIONS_HEADER: &str =
    "league,gender,governing_body,first_season,last_season,tier,awards,url,country,champion,top_scorer";

const HISTORY_HEADER: &str =
    "season,competition,squad,champion,top_scorer,notes,season_url,squad_url,champion_url,top_scorer_url";

/// Render an aggregate as CSV text. The schema is picked from the
/// aggregate's shape: league-history when it carries a league name and
/// seasons, competition-list otherwise.
pub fn to_csv(result: &ScrapeResult) -> String {
    if result.is_league_history() {
        history_csv(result.seasons.as_deref().unwrap_or_default())
    } else {
        competitions_csv(result)
    }
}

fn competitions_csv(result: &ScrapeResult) -> String {
    let mut lines = vec![COMPETITIONS_HEADER.to_string()];

    if let Some(tables) = &result.tables {
        for table in tables.values() {
            for row in &table.rows {
                if row.is_header_artifact() {
                    continue;
                }
                lines.push(competition_line(row));
            }
        }
    }

    lines.join("\n")
}

fn competition_line(row: &CompetitionRecord) -> String {
    let fields = [
        league_name(&row.competition_name),
        row.gender.map(|g| g.as_str().to_string()).unwrap_or_default(),
        row.governing_body.clone().unwrap_or_default(),
        row.first_season.clone().unwrap_or_default(),
        row.last_season.clone().unwrap_or_default(),
        row.tier.clone().unwrap_or_default(),
        row.awards.clone().unwrap_or_default(),
        row.url.clone().unwrap_or_default(),
        row.country.clone(),
        row.champion.clone().unwrap_or_default(),
        row.top_scorer.clone().unwrap_or_default(),
    ];
    join_line(&fields)
}

fn history_csv(seasons: &[SeasonRecord]) -> String {
    let mut lines = vec![HISTORY_HEADER.to_string()];
    lines.extend(seasons.iter().map(history_line));
    lines.join("\n")
}

fn history_line(season: &SeasonRecord) -> String {
    let fields = [
        season.season.clone(),
        season.competition.clone().unwrap_or_default(),
        season.squad.map(|n| n.to_string()).unwrap_or_default(),
        season.champion.clone().unwrap_or_default(),
        season.top_scorer.clone().unwrap_or_default(),
        season.notes.clone().unwrap_or_default(),
        season.season_url.clone().unwrap_or_default(),
        season.squad_url.clone().unwrap_or_default(),
        season.champion_url.clone().unwrap_or_default(),
        season.top_scorer_url.clone().unwrap_or_default(),
    ];
    join_line(&fields)
}

/// Strip a parenthetical country suffix from a competition name
fn league_name(competition_name: &str) -> String {
    competition_name
        .split('(')
        .next()
        .unwrap_or(competition_name)
        .trim()
        .to_string()
}

fn join_line(fields: &[String]) -> String {
    fields
        .iter()
        .map(|f| escape_field(f))
        .collect::<Vec<_>>()
        .join(",")
}

/// Quote a field only when it carries a comma or a double quote;
/// internal double quotes are doubled
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
