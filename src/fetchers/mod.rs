pub mod competition_page;
pub mod competitions;
pub mod urls;

pub use competition_page::CompetitionPageFetcher;
pub use competitions::{find_league, CompetitionsFetcher};
pub use urls::{absolutize, format_season_url, history_url, is_valid_season};
