use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

static SINGLE_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}$").unwrap());
static YEAR_RANGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{4}$").unwrap());

/// A 4-digit year or a YYYY-YYYY range
pub fn is_valid_season(season: &str) -> bool {
    SINGLE_YEAR.is_match(season) || YEAR_RANGE.is_match(season)
}

/// URL of the competitions listing, optionally scoped to a season.
///
/// Invalid season formats warn and fall back to the unscoped
/// (current-season) listing.
pub fn format_season_url(base_url: &str, season: Option<&str>) -> String {
    let listing = format!("{base_url}/en/comps");

    let Some(season) = season else {
        return listing;
    };

    if !is_valid_season(season) {
        warn!("Invalid season format: {season}. Using default URL.");
        return listing;
    }

    format!("{listing}/season/{season}")
}

/// Season-history page for a league, derived from its competition URL
/// (".../en/comps/<id>/<Name>-Stats" → ".../en/comps/<id>/history/<Name>-Seasons")
pub fn history_url(competition_url: &str, league_name: &str) -> Option<String> {
    let (prefix, rest) = competition_url.split_once("/comps/")?;
    let id = rest.split('/').next().filter(|id| !id.is_empty())?;
    let slug = league_slug(league_name);
    Some(format!("{prefix}/comps/{id}/history/{slug}-Seasons"))
}

/// Turn a relative href into an absolute URL against the site base
pub fn absolutize(base_url: &str, href: &str) -> String {
    if href.starts_with('/') {
        format!("{base_url}{href}")
    } else {
        href.to_string()
    }
}

fn league_slug(league_name: &str) -> String {
    urlencoding::encode(&league_name.replace(' ', "-")).into_owned()
}
