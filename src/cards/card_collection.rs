use std::{ops::Deref, sync::Arc};

use serde::{Deserialize, Deserializer};

use crate::cards::card::Card;

/// An ordered, immutable list of cards. Cloning only bumps a reference count,
/// so handing the full catalog to a reader never copies the cards.
#[derive(Debug, Clone)]
pub struct CardCollection {
    cards: Arc<[Card]>,
}

impl CardCollection {
    pub fn new(cards: Vec<Card>) -> Self {
        CardCollection {
            cards: cards.into(),
        }
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// True if both collections share the same backing storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.cards, &other.cards)
    }

    pub fn names(&self) -> Vec<&str> {
        self.cards.iter().map(|card| card.name.as_str()).collect()
    }
}

impl Default for CardCollection {
    fn default() -> Self {
        CardCollection::new(Vec::new())
    }
}

impl Deref for CardCollection {
    type Target = [Card];

    fn deref(&self) -> &[Card] {
        &self.cards
    }
}

impl From<Vec<Card>> for CardCollection {
    fn from(cards: Vec<Card>) -> Self {
        CardCollection::new(cards)
    }
}

impl FromIterator<Card> for CardCollection {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        CardCollection::new(iter.into_iter().collect())
    }
}

impl PartialEq for CardCollection {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<'de> Deserialize<'de> for CardCollection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(CardCollection::new(Vec::<Card>::deserialize(deserializer)?))
    }
}
