use std::fmt;

use log::debug;
use url::Url;

use crate::{
    cards::card::Card,
    utilities::{constants::NOT_AVAILABLE, string_manipulators::join_types},
};

/// The read-only detail view of one card, with `N/A` for anything the card lacks.
#[derive(Debug, PartialEq, Clone)]
pub struct CardDetail {
    pub name: String,
    pub image_url: Option<Url>,
    pub fields: Vec<(&'static str, String)>,
}

impl CardDetail {
    pub fn new(card: &Card) -> Self {
        let or_na = |value: Option<&str>| value.unwrap_or(NOT_AVAILABLE).to_string();

        let fields = vec![
            ("Name", card.name.clone()),
            (
                "Types",
                join_types(card.types.as_deref()).unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            ),
            ("HP", or_na(card.hp.as_deref())),
            (
                "Pokedex Number",
                card.national_pokedex_number
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            ),
            ("Subtype", or_na(card.subtype.as_deref())),
            ("Supertype", or_na(card.supertype.as_deref())),
            ("Rarity", or_na(card.rarity.as_deref())),
            ("Series", or_na(card.series.as_deref())),
            ("Set", or_na(card.card_set.as_deref())),
            ("Artist", or_na(card.artist.as_deref())),
        ];

        CardDetail {
            name: card.name.clone(),
            image_url: parse_image_url(card.image_url_hi_res.as_deref()),
            fields,
        }
    }

    pub fn field(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, value)| value.as_str())
    }
}

pub fn parse_image_url(raw: Option<&str>) -> Option<Url> {
    let raw = raw?;
    match Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Some(url),
        Ok(url) => {
            debug!("Skipping image with unsupported scheme: {}", url);
            None
        }
        Err(e) => {
            debug!("Skipping invalid image url '{}': {}", raw, e);
            None
        }
    }
}

impl fmt::Display for CardDetail {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (label, value) in &self.fields {
            writeln!(f, "{}: {}", label, value)?;
        }
        match &self.image_url {
            Some(url) => write!(f, "Image: {}", url),
            None => write!(f, "Image: {}", NOT_AVAILABLE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::helpers::{gardevoir, mew_without_types};

    #[test]
    fn test_detail_of_complete_card() {
        let detail = CardDetail::new(&gardevoir());

        assert_eq!(detail.name, "Gardevoir");
        assert_eq!(detail.field("Types"), Some("Fairy"));
        assert_eq!(detail.field("HP"), Some("130"));
        assert_eq!(detail.field("Pokedex Number"), Some("282"));
        assert_eq!(detail.field("Set"), Some("Ancient Origins"));
        assert_eq!(detail.field("Artist"), Some("TOKIYA"));
        assert_eq!(
            detail.image_url.unwrap().as_str(),
            "https://images.pokemontcg.io/xy7/54_hires.png"
        );
    }

    #[test]
    fn test_missing_fields_show_not_available() {
        let detail = CardDetail::new(&mew_without_types());

        let labels: Vec<&str> = detail.fields.iter().map(|(l, _)| *l).collect();
        assert_eq!(
            labels,
            vec![
                "Name",
                "Types",
                "HP",
                "Pokedex Number",
                "Subtype",
                "Supertype",
                "Rarity",
                "Series",
                "Set",
                "Artist"
            ]
        );
        assert_eq!(detail.field("Name"), Some("Mew"));
        assert!(detail.fields[1..].iter().all(|(_, v)| v == "N/A"));
        assert!(detail.image_url.is_none());
    }

    #[test]
    fn test_display() {
        let text = CardDetail::new(&Card::new("Potion")).to_string();
        assert!(text.starts_with("Name: Potion\nTypes: N/A\nHP: N/A\n"));
        assert!(text.ends_with("Artist: N/A\nImage: N/A"));
    }

    #[test]
    fn test_invalid_image_urls_are_skipped() {
        assert!(parse_image_url(None).is_none());
        assert!(parse_image_url(Some("")).is_none());
        assert!(parse_image_url(Some("not a url")).is_none());
        assert!(parse_image_url(Some("ftp://images.pokemontcg.io/a.png")).is_none());
        assert!(parse_image_url(Some("http://images.pokemontcg.io/a.png")).is_some());
    }
}
