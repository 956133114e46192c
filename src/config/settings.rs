pub struct ScraperSettings {
    pub base_url: &'static str,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    pub rate_limit_ms: u64,
    pub fetch_attempts: usize,
    pub retry_backoff_secs: u64,
}

impl Default for ScraperSettings {
    fn default() -> Self {
        Self {
            base_url: "https://fbref.com",
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36",
            timeout_secs: 30,
            rate_limit_ms: 1000,
            fetch_attempts: 3,
            retry_backoff_secs: 5,
        }
    }
}

pub struct OutputSettings {
    pub data_dir: &'static str,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { data_dir: "data" }
    }
}

pub struct AppConfig {
    pub scraper: ScraperSettings,
    pub output: OutputSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            scraper: ScraperSettings::default(),
            output: OutputSettings::default(),
        }
    }
}
