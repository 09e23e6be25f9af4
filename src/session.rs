use std::sync::{PoisonError, RwLock};

use log::{info, warn};

use crate::{
    cards::{card_collection::CardCollection, card_detail::CardDetail, card_row::CardRow},
    catalog_client::{CardCatalog, FetchError},
    filter_service::CardFilterService,
};

/// What a list screen binds to: load the catalog once, search it on every keystroke and
/// open the detail of one of the rows currently shown.
pub struct CatalogSession {
    source: Box<dyn CardCatalog>,
    filter: CardFilterService,
    results: RwLock<CardCollection>,
}

impl CatalogSession {
    pub fn new(source: Box<dyn CardCatalog>) -> Self {
        CatalogSession {
            source,
            filter: CardFilterService::new(),
            results: RwLock::new(CardCollection::default()),
        }
    }

    pub fn filter_service(&self) -> &CardFilterService {
        &self.filter
    }

    /// Fetches a fresh catalog. On failure the previous catalog, if any, stays in place.
    pub async fn refresh(&self) -> Result<usize, FetchError> {
        match self.source.fetch_catalog().await {
            Ok(cards) => {
                let count = cards.len();
                self.filter.set_catalog(cards);
                info!("Catalog loaded with {} cards", count);
                Ok(count)
            }
            Err(e) => {
                warn!("Keeping previous catalog after failed fetch: {}", e);
                Err(e)
            }
        }
    }

    pub fn search(&self, query: &str) -> Vec<CardRow> {
        let results = self.filter.filter(query);
        let rows = results.iter().map(CardRow::from).collect();
        *self
            .results
            .write()
            .unwrap_or_else(PoisonError::into_inner) = results;
        rows
    }

    /// Detail of the `index`-th row of the last search.
    pub fn select(&self, index: usize) -> Option<CardDetail> {
        self.results
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(index)
            .map(CardDetail::new)
    }
}
