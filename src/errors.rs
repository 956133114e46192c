use thiserror::Error;

/// Failures the pipeline cannot degrade around
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// History mode needs a target URL; without a matching league on
    /// the competitions page there is nothing to fetch.
    #[error("league '{0}' not found on the competitions page")]
    LeagueNotFound(String),
}
