pub mod history;
pub mod scrape;

pub use history::HistoryService;
pub use scrape::{Scope, ScrapeOptions, ScrapeService};
