use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error, info, warn};
use serde::Deserialize;

use crate::cards::card_collection::CardCollection;
use crate::utilities::constants::{DEFAULT_CONNECTIVITY_RETRY_MS, POKEMON_TCG_API_URL};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("the catalog response had no body")]
    EmptyResponse,
    #[error("could not decode the catalog: {0}")]
    Decode(String),
}

/// Something that can hand out the complete card catalog.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CardCatalog: Send + Sync {
    async fn fetch_catalog(&self) -> Result<CardCollection, FetchError>;
}

#[derive(Deserialize)]
struct CardsResponse {
    cards: CardCollection,
}

pub struct CardCatalogClient {
    client: reqwest::Client,
    url: String,
    connectivity_retry: Duration,
    timeout: Option<Duration>,
}

impl CardCatalogClient {
    pub fn new(url: Option<&str>, client: reqwest::Client) -> Self {
        CardCatalogClient {
            client,
            url: url.unwrap_or(POKEMON_TCG_API_URL).to_string(),
            connectivity_retry: Duration::from_millis(DEFAULT_CONNECTIVITY_RETRY_MS),
            timeout: None,
        }
    }

    /// How long to wait before trying again while the endpoint can't be reached.
    pub fn with_connectivity_retry(mut self, interval: Duration) -> Self {
        self.connectivity_retry = interval;
        self
    }

    /// Upper bound for a whole fetch, connectivity waits included. `None` waits forever.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    fn setup_http_headers() -> reqwest::header::HeaderMap {
        let mut header_map = reqwest::header::HeaderMap::new();
        header_map.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );
        header_map.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("pokemon_card_catalog"),
        );
        header_map
    }

    // Connection failures are queued up and retried, anything after that is reported.
    async fn send_when_connected(&self) -> Result<reqwest::Response, FetchError> {
        let mut attempt: u32 = 1;
        loop {
            match self
                .client
                .get(&self.url)
                .headers(Self::setup_http_headers())
                .send()
                .await
            {
                Ok(response) => return Ok(response),
                Err(e) if e.is_connect() => {
                    warn!(
                        "Waiting for connectivity to {} (attempt {}): {}",
                        self.url, attempt, e
                    );
                    attempt = attempt.saturating_add(1);
                    tokio::time::sleep(self.connectivity_retry).await;
                }
                Err(e) => return Err(FetchError::Network(e.to_string())),
            }
        }
    }

    async fn fetch(&self) -> Result<CardCollection, FetchError> {
        let response = self.send_when_connected().await?;
        debug!("Catalog response: {:?}", response);

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Network(format!(
                "{} responded with HTTP {}",
                self.url, status
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        decode_catalog(&body)
    }
}

#[async_trait]
impl CardCatalog for CardCatalogClient {
    async fn fetch_catalog(&self) -> Result<CardCollection, FetchError> {
        info!("Fetching card catalog from {}", self.url);

        let result = match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, self.fetch())
                .await
                .unwrap_or_else(|_| {
                    Err(FetchError::Network(format!(
                        "no catalog from {} within {:?}",
                        self.url, timeout
                    )))
                }),
            None => self.fetch().await,
        };

        match &result {
            Ok(cards) => info!("Fetched {} cards", cards.len()),
            Err(e) => error!("Failed to fetch card catalog: {}", e),
        }
        result
    }
}

/// Decodes a `{ "cards": [...] }` body.
pub fn decode_catalog(body: &[u8]) -> Result<CardCollection, FetchError> {
    if body.is_empty() {
        return Err(FetchError::EmptyResponse);
    }

    serde_json::from_slice::<CardsResponse>(body)
        .map(|response| response.cards)
        .map_err(|e| FetchError::Decode(e.to_string()))
}
