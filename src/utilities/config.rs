use std::{env, time::Duration};

use log::error;

use crate::utilities::constants::{DEFAULT_CONNECTIVITY_RETRY_MS, POKEMON_TCG_API_URL};

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    /// `None` means the binary reads queries from stdin.
    pub search: Option<String>,
    pub selected: Option<usize>,
    pub connectivity_retry_ms: u64,
    pub fetch_timeout_secs: Option<u64>,
    pub image_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: POKEMON_TCG_API_URL.to_string(),
            search: None,
            selected: None,
            connectivity_retry_ms: DEFAULT_CONNECTIVITY_RETRY_MS,
            fetch_timeout_secs: None,
            image_dir: "".to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let mut config = Config::default();
        config.update_from_env();
        config
    }

    pub fn connectivity_retry_interval(&self) -> Duration {
        Duration::from_millis(self.connectivity_retry_ms)
    }

    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.fetch_timeout_secs.map(Duration::from_secs)
    }

    fn update_from_env(&mut self) {
        if let Ok(api_url) = env::var("POKEMON_API_URL") {
            if url::Url::parse(&api_url).is_ok() {
                self.api_url = api_url;
            } else {
                error!("POKEMON_API_URL '{}' is not a valid url, using default", api_url);
            }
        }
        if let Ok(search) = env::var("SEARCH") {
            self.search = Some(search);
        }
        if let Ok(selected) = env::var("SELECT") {
            self.selected = parse_or_log("SELECT", &selected);
        }
        if let Ok(retry) = env::var("CONNECTIVITY_RETRY_MS") {
            self.connectivity_retry_ms =
                parse_or_log("CONNECTIVITY_RETRY_MS", &retry).unwrap_or(DEFAULT_CONNECTIVITY_RETRY_MS);
        }
        if let Ok(timeout) = env::var("FETCH_TIMEOUT_SECS") {
            self.fetch_timeout_secs = parse_or_log("FETCH_TIMEOUT_SECS", &timeout);
        }
        if let Ok(image_dir) = env::var("IMAGE_DIR") {
            self.image_dir = image_dir.trim().to_string();
        }
    }
}

fn parse_or_log<T: std::str::FromStr>(name: &str, value: &str) -> Option<T> {
    match value.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            error!("Supplied invalid value '{}' for {}, ignoring it", value, name);
            None
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: Config = Config::new();
}
