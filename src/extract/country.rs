use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// Curated competition-name → country table. Authoritative for the
/// common case; consulted before any pattern guessing.
static LEAGUE_COUNTRIES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // England
        ("Premier League", "England"),
        ("FA Women's Super League", "England"),
        ("EFL Championship", "England"),
        ("EFL League One", "England"),
        ("EFL League Two", "England"),
        ("National League", "England"),
        ("Premier League 2", "England"),
        ("Premier League 2 — Division 2", "England"),
        ("FA Cup", "England"),
        ("FA Community Shield", "England"),
        ("EFL Cup", "England"),
        // Spain
        ("La Liga", "Spain"),
        ("Liga F", "Spain"),
        ("Spanish Segunda División", "Spain"),
        ("Copa del Rey", "Spain"),
        ("Supercopa de España", "Spain"),
        // France
        ("Ligue 1", "France"),
        ("Ligue 2", "France"),
        ("Première Ligue", "France"),
        ("Coupe de France", "France"),
        ("Coupe de la Ligue", "France"),
        ("Trophée des Champions", "France"),
        // Germany
        ("Fußball-Bundesliga", "Germany"),
        ("Frauen-Bundesliga", "Germany"),
        ("2. Fußball-Bundesliga", "Germany"),
        ("3. Fußball-Liga", "Germany"),
        ("DFB-Pokal", "Germany"),
        ("DFB-Pokal Frauen", "Germany"),
        ("U17 DFB Youth League", "Germany"),
        ("U19 DFB Youth League", "Germany"),
        ("Franz Beckenbauer Supercup", "Germany"),
        // Italy
        ("Serie A", "Italy"),
        ("Serie B", "Italy"),
        ("Coppa Italia", "Italy"),
        ("Supercoppa Italiana", "Italy"),
        // Netherlands
        ("Eredivisie", "Netherlands"),
        ("Eredivisie Vrouwen", "Netherlands"),
        ("Eerste Divisie", "Netherlands"),
        // Portugal
        ("Primeira Liga", "Portugal"),
        // Scotland
        ("Scottish Premiership", "Scotland"),
        ("Scottish Championship", "Scotland"),
        // Turkey
        ("Süper Lig", "Turkey"),
        // Belgium
        ("Belgian Pro League", "Belgium"),
        ("Belgian Women's Super League", "Belgium"),
        ("Challenger Pro League", "Belgium"),
        // Poland
        ("Ekstraklasa", "Poland"),
        // Sweden
        ("Allsvenskan", "Sweden"),
        ("Damallsvenskan", "Sweden"),
        ("Superettan", "Sweden"),
        // Norway
        ("Eliteserien", "Norway"),
        ("Toppserien", "Norway"),
        // United States
        ("Major League Soccer", "United States"),
        ("National Women's Soccer League", "United States"),
        ("Women's Professional Soccer", "United States"),
        ("Women's United Soccer Association", "United States"),
        ("North American Soccer League", "United States"),
        ("USL Championship", "United States"),
        ("USL First Division", "United States"),
        ("USL League One", "United States"),
        ("USSF Division 2 Professional League", "United States"),
        ("Lamar Hunt U.S. Open Cup", "United States"),
        ("NWSL Challenge Cup", "United States"),
        ("NWSL Fall Series", "United States"),
        // Mexico
        ("Liga MX", "Mexico"),
        // Japan
        ("J1 League", "Japan"),
        ("J2 League", "Japan"),
        ("Women Empowerment League", "Japan"),
        // South Korea
        ("K League 1", "South Korea"),
        // Australia
        ("A-League Men", "Australia"),
        ("A-League Women", "Australia"),
        // India
        ("Indian Super League", "India"),
        ("I-League", "India"),
        // China
        ("Chinese Football Association Super League", "China"),
        // Saudi Arabia
        ("Saudi Pro League", "Saudi Arabia"),
        // Austria
        ("Austrian Football Bundesliga", "Austria"),
        ("ÖFB Frauen-Bundesliga", "Austria"),
        // Brazil
        ("Campeonato Brasileiro Série A", "Brazil"),
        ("Campeonato Brasileiro Série B", "Brazil"),
        ("Brasileirão Feminino Série A1", "Brazil"),
        // Argentina
        ("Liga Profesional de Fútbol Argentina", "Argentina"),
        ("Copa de la Liga Profesional", "Argentina"),
        // Other countries
        ("Croatian Football League", "Croatia"),
        ("Czech First League", "Czech Republic"),
        ("Danish Superliga", "Denmark"),
        ("Liga Profesional Ecuador", "Ecuador"),
        ("Veikkausliiga", "Finland"),
        ("Super League Greece", "Greece"),
        ("Nemzeti Bajnokság I", "Hungary"),
        ("League of Ireland Premier Division", "Ireland"),
        ("Persian Gulf Pro League", "Iran"),
        ("Paraguayan Primera División", "Paraguay"),
        ("Liga 1 de Fútbol Profesional", "Peru"),
        ("Liga I", "Romania"),
        ("Russian Premier League", "Russia"),
        ("Serbian SuperLiga", "Serbia"),
        ("Swiss Super League", "Switzerland"),
        ("Swiss Women's Super League", "Switzerland"),
        ("Ukrainian Premier League", "Ukraine"),
        ("Uruguayan Primera División", "Uruguay"),
        ("Venezuelan Primera División", "Venezuela"),
        ("South African Premiership", "South Africa"),
        ("División de Fútbol Profesional", "Bolivia"),
        ("Canadian Premier League", "Canada"),
        ("Chilean Primera División", "Chile"),
        ("Categoría Primera A", "Colombia"),
        ("A-Liga", "Slovenia"),
    ])
});

/// Substrings that mark confederation and national-team tournaments
static INTERNATIONAL_MARKERS: &[&str] = &[
    "FIFA",
    "UEFA",
    "AFC",
    "CAF",
    "CONCACAF",
    "CONMEBOL",
    "OFC",
    "World Cup",
    "Champions League",
    "Europa League",
    "Nations League",
    "Copa Libertadores",
    "Sudamericana",
    "Leagues Cup",
    "Olympics",
    "International",
    "Confederations Cup",
    "Gold Cup",
    "Asian Cup",
    "Copa América",
    "European Championship",
    "African Cup of Nations",
    "Algarve Cup",
    "SheBelieves Cup",
];

static PARENTHETICAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\((.*?)\)").unwrap());

/// Best-guess country (or the literal region "International") for a
/// competition. Returns an empty string when nothing matched.
///
/// The source encodes country inconsistently, so detection is a
/// prioritized cascade of matchers rather than a single lookup; the
/// first match wins.
pub fn detect_country(competition_name: &str, governing_body: Option<&str>) -> String {
    let matchers: &[fn(&str) -> Option<String>] = &[
        known_league,
        international_marker,
        parenthetical,
        dash_prefix,
    ];

    for matcher in matchers {
        if let Some(country) = matcher(competition_name) {
            return country;
        }
    }

    if let Some(gov_body) = governing_body {
        let gov_body = gov_body.trim();
        if let Some(country) = parenthetical(gov_body) {
            return country;
        }
        if let Some(country) = comma_prefix(gov_body) {
            return country;
        }
    }

    String::new()
}

// --- Matchers, in precedence order ---

fn known_league(name: &str) -> Option<String> {
    LEAGUE_COUNTRIES.get(name).map(|c| c.to_string())
}

fn international_marker(name: &str) -> Option<String> {
    INTERNATIONAL_MARKERS
        .iter()
        .any(|marker| name.contains(marker))
        .then(|| "International".to_string())
}

/// First parenthesized substring, unless it is a bare gender marker
fn parenthetical(text: &str) -> Option<String> {
    let inner = PARENTHETICAL.captures(text)?.get(1)?.as_str().trim();
    if inner.is_empty() || inner == "M" || inner == "W" {
        return None;
    }
    Some(inner.to_string())
}

fn dash_prefix(name: &str) -> Option<String> {
    name.split_once(" - ").map(|(prefix, _)| prefix.trim().to_string())
}

fn comma_prefix(text: &str) -> Option<String> {
    text.split_once(',').map(|(prefix, _)| prefix.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_lookup_wins_over_everything() {
        assert_eq!(detect_country("La Liga", None), "Spain");
        assert_eq!(detect_country("Premier League", Some("The FA (England)")), "England");
        assert_eq!(detect_country("Süper Lig", None), "Turkey");
        // lookup is case-sensitive
        assert_eq!(detect_country("la liga", None), "");
    }

    #[test]
    fn confederation_tournaments_map_to_international() {
        assert_eq!(detect_country("FIFA World Cup", None), "International");
        assert_eq!(detect_country("UEFA Champions League", None), "International");
        assert_eq!(detect_country("Copa América Femenina", None), "International");
    }

    #[test]
    fn parenthetical_country_is_extracted() {
        assert_eq!(detect_country("Some League (Spain)", None), "Spain");
    }

    #[test]
    fn gender_markers_are_not_countries() {
        assert_eq!(detect_country("Some League (M)", None), "");
        assert_eq!(detect_country("Some League (W)", None), "");
    }

    #[test]
    fn dash_prefix_is_used_when_no_parenthetical() {
        assert_eq!(detect_country("Wales - Cymru Premier", None), "Wales");
    }

    #[test]
    fn governing_body_fallback_splits_on_comma() {
        assert_eq!(
            detect_country("Unknown Cup", Some("France, Ligue de Football")),
            "France"
        );
    }

    #[test]
    fn governing_body_parenthetical_beats_comma_split() {
        assert_eq!(
            detect_country("Unknown Cup", Some("Federation (Iceland), Reykjavik")),
            "Iceland"
        );
    }

    #[test]
    fn undetected_is_empty_string() {
        assert_eq!(detect_country("Mystery Shield", None), "");
        assert_eq!(detect_country("Mystery Shield", Some("No Hints Here")), "");
    }
}
