use anyhow::Result;
use log::{debug, info};
use scraper::{ElementRef, Html, Selector};

use crate::domain::{Gender, LinkRef, PageSection, RawCell, SectionRow};
use crate::fetchers::urls::absolutize;
use crate::http::RetryingClient;

/// Reads the rendered competitions listing into plain section data.
///
/// This is the DOM boundary: everything downstream works on
/// [`PageSection`] values and never touches the page again.
pub struct CompetitionsFetcher {
    base_url: &'static str,
}

impl CompetitionsFetcher {
    pub fn new(base_url: &'static str) -> Self {
        Self { base_url }
    }

    /// Fetch a listing page and hand back its table sections
    pub async fn fetch(&self, client: &mut RetryingClient, url: &str) -> Result<Vec<PageSection>> {
        info!("Fetching competitions page: {url}");
        let body = client.fetch_text(url).await?;
        let html = Html::parse_document(&body);

        let sections = self.parse_sections(&html);
        info!("  → Found {} table sections", sections.len());
        Ok(sections)
    }

    /// Pull every `.table_wrapper` section: heading text, raw header
    /// labels, and rows of trimmed cell text plus first-anchor hrefs.
    /// Rows hidden by the page's filter presets are skipped.
    pub fn parse_sections(&self, html: &Html) -> Vec<PageSection> {
        let wrapper_sel = Selector::parse(".table_wrapper").unwrap();
        let heading_sel = Selector::parse(".section_heading h2").unwrap();
        let table_sel = Selector::parse("table").unwrap();
        let header_sel = Selector::parse("thead th").unwrap();
        let row_sel = Selector::parse("tbody tr").unwrap();
        let cell_sel = Selector::parse("th, td").unwrap();

        let mut sections = Vec::new();

        for wrapper in html.select(&wrapper_sel) {
            let Some(heading) = wrapper.select(&heading_sel).next() else {
                continue;
            };
            let Some(table) = wrapper.select(&table_sel).next() else {
                continue;
            };

            let title = element_text(&heading);
            let table_id = table.value().attr("id").map(str::to_string);
            let headers: Vec<String> =
                table.select(&header_sel).map(|th| element_text(&th)).collect();

            let rows: Vec<SectionRow> = table
                .select(&row_sel)
                .filter(|row| !has_class(row, "hidden"))
                .map(|row| self.parse_row(&row, &cell_sel))
                .collect();

            debug!("section '{}': {} rows", title, rows.len());
            sections.push(PageSection { title, table_id, headers, rows });
        }

        sections
    }

    fn parse_row(&self, row: &ElementRef, cell_sel: &Selector) -> SectionRow {
        let cells = row
            .select(cell_sel)
            .map(|cell| RawCell {
                text: element_text(&cell),
                href: self.first_anchor_href(&cell),
            })
            .collect();

        SectionRow {
            cells,
            gender: row_gender(row),
        }
    }

    fn first_anchor_href(&self, cell: &ElementRef) -> Option<String> {
        let anchor_sel = Selector::parse("a").unwrap();
        cell.select(&anchor_sel)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(|href| absolutize(self.base_url, href))
    }
}

/// Locate a league among the primary links of the given sections.
/// A row matches when its first-cell text contains the requested name,
/// case-insensitively, so a partial name like "premier" is enough.
pub fn find_league(sections: &[PageSection], league_name: &str) -> Option<LinkRef> {
    let needle = league_name.to_lowercase();

    for section in sections {
        for row in &section.rows {
            let Some(first) = row.cells.first() else {
                continue;
            };
            if first.text.to_lowercase().contains(&needle) {
                if let Some(href) = &first.href {
                    return Some(LinkRef {
                        name: first.text.clone(),
                        url: href.clone(),
                    });
                }
            }
        }
    }
    None
}

// --- DOM Helpers ---

fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn has_class(element: &ElementRef, class: &str) -> bool {
    element
        .value()
        .attr("class")
        .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
}

fn row_gender(row: &ElementRef) -> Option<Gender> {
    if has_class(row, "gender-f") {
        Some(Gender::Female)
    } else if has_class(row, "gender-m") {
        Some(Gender::Male)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <div class="table_wrapper">
            <div class="section_heading"><h2>Club Competitions Table</h2></div>
            <table id="comps_club">
              <thead><tr><th>Competition Name</th><th>Governing Body</th></tr></thead>
              <tbody>
                <tr class="gender-m">
                  <th><a href="/en/comps/12/La-Liga-Stats">La Liga</a></th>
                  <td>RFEF</td>
                </tr>
                <tr class="gender-f">
                  <th><a href="/en/comps/230/Liga-F-Stats">Liga F</a></th>
                  <td>RFEF</td>
                </tr>
                <tr class="hidden gender-m">
                  <th>Hidden League</th><td></td>
                </tr>
              </tbody>
            </table>
          </div>
          <div class="table_wrapper">
            <div class="section_heading"><h2>Empty Section</h2></div>
          </div>
        </body></html>
    "#;

    fn fetcher() -> CompetitionsFetcher {
        CompetitionsFetcher::new("https://fbref.com")
    }

    #[test]
    fn sections_carry_headings_headers_and_rows() {
        let html = Html::parse_document(PAGE);
        let sections = fetcher().parse_sections(&html);

        // wrapper without a table is ignored
        assert_eq!(sections.len(), 1);
        let section = &sections[0];
        assert_eq!(section.title, "Club Competitions Table");
        assert_eq!(section.table_id.as_deref(), Some("comps_club"));
        assert_eq!(section.headers, vec!["Competition Name", "Governing Body"]);
        assert_eq!(section.rows.len(), 2);
    }

    #[test]
    fn hidden_rows_are_dropped() {
        let html = Html::parse_document(PAGE);
        let sections = fetcher().parse_sections(&html);

        assert!(sections[0]
            .rows
            .iter()
            .all(|r| r.cells[0].text != "Hidden League"));
    }

    #[test]
    fn hrefs_are_absolutized() {
        let html = Html::parse_document(PAGE);
        let sections = fetcher().parse_sections(&html);

        assert_eq!(
            sections[0].rows[0].cells[0].href.as_deref(),
            Some("https://fbref.com/en/comps/12/La-Liga-Stats")
        );
    }

    #[test]
    fn gender_markers_come_from_row_classes() {
        let html = Html::parse_document(PAGE);
        let sections = fetcher().parse_sections(&html);

        assert_eq!(sections[0].rows[0].gender, Some(Gender::Male));
        assert_eq!(sections[0].rows[1].gender, Some(Gender::Female));
    }

    #[test]
    fn leagues_are_found_case_insensitively() {
        let html = Html::parse_document(PAGE);
        let sections = fetcher().parse_sections(&html);

        let link = find_league(&sections, "la liga").unwrap();
        assert_eq!(link.name, "La Liga");
        assert_eq!(link.url, "https://fbref.com/en/comps/12/La-Liga-Stats");

        assert!(find_league(&sections, "Serie Z").is_none());
    }

    #[test]
    fn partial_league_names_match_by_substring() {
        let html = Html::parse_document(PAGE);
        let sections = fetcher().parse_sections(&html);

        let link = find_league(&sections, "liga f").unwrap();
        assert_eq!(link.name, "Liga F");

        // a fragment of the name is enough
        let link = find_league(&sections, "liga").unwrap();
        assert_eq!(link.name, "La Liga");
    }
}
