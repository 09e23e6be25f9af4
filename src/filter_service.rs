use std::sync::{PoisonError, RwLock};

use log::debug;

use crate::cards::card_collection::CardCollection;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum CatalogState {
    Empty,
    Loaded,
}

/// Owns the current catalog and answers type searches against it.
///
/// Replacing the catalog swaps one reference under a short write lock. Readers clone
/// that reference and filter without holding the lock, so a concurrent
/// `set_catalog` never exposes a half written catalog.
#[derive(Debug, Default)]
pub struct CardFilterService {
    catalog: RwLock<Option<CardCollection>>,
}

impl CardFilterService {
    pub fn new() -> Self {
        CardFilterService::default()
    }

    pub fn set_catalog(&self, collection: CardCollection) {
        debug!("Replacing catalog with {} cards", collection.len());
        *self
            .catalog
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(collection);
    }

    pub fn catalog(&self) -> Option<CardCollection> {
        self.catalog
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn state(&self) -> CatalogState {
        match self.catalog() {
            Some(_) => CatalogState::Loaded,
            None => CatalogState::Empty,
        }
    }

    /// Cards with a type tag containing `query`, ignoring case, in catalog order.
    ///
    /// Only a literally empty query returns the whole catalog; `" "` is a real query.
    pub fn filter(&self, query: &str) -> CardCollection {
        let catalog = self.catalog().unwrap_or_default();
        if query.is_empty() {
            return catalog;
        }

        catalog
            .iter()
            .filter(|card| card.has_type_matching(query))
            .cloned()
            .collect()
    }
}
