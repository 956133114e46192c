use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use crate::domain::ScrapeResult;
use crate::export::{csv, json};

/// Writes the JSON and CSV artifacts of a scrape under a data directory
pub struct ArtifactWriter {
    data_dir: PathBuf,
}

impl ArtifactWriter {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Serialize `result` and write `<stem>.json` and `<stem>.csv`,
    /// creating the data directory if needed. Returns both paths.
    pub fn write(&self, stem: &str, result: &ScrapeResult) -> Result<(PathBuf, PathBuf)> {
        fs::create_dir_all(&self.data_dir).context("Failed to create data directory")?;

        let json_path = self.data_dir.join(format!("{stem}.json"));
        let json_text = json::to_json(result)?;
        fs::write(&json_path, json_text)
            .with_context(|| format!("Failed to write {}", json_path.display()))?;
        info!("Saved JSON artifact: {}", json_path.display());

        let csv_path = self.data_dir.join(format!("{stem}.csv"));
        fs::write(&csv_path, csv::to_csv(result))
            .with_context(|| format!("Failed to write {}", csv_path.display()))?;
        info!("Saved CSV artifact: {}", csv_path.display());

        Ok((json_path, csv_path))
    }
}
