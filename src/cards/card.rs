use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::utilities::string_manipulators::contains_ignore_case;

/// One card as returned by the Pokémon TCG api.
///
/// Only `name` is required. Every other field decodes to `None` when it is missing,
/// `null` or of an unexpected shape, so one odd card can't fail the whole catalog.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    #[serde(
        rename = "imageUrlHiRes",
        alias = "imageurl_hires",
        alias = "imageURLHiRes",
        default,
        deserialize_with = "lenient_string"
    )]
    pub image_url_hi_res: Option<String>,
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub types: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub hp: Option<String>,
    #[serde(
        rename = "nationalPokedexNumber",
        default,
        deserialize_with = "lenient_integer"
    )]
    pub national_pokedex_number: Option<i64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub subtype: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub supertype: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub rarity: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub series: Option<String>,
    #[serde(rename = "set", default, deserialize_with = "lenient_string")]
    pub card_set: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub artist: Option<String>,
}

impl Card {
    pub fn new(name: &str) -> Self {
        Card {
            name: name.to_string(),
            image_url_hi_res: None,
            types: None,
            hp: None,
            national_pokedex_number: None,
            subtype: None,
            supertype: None,
            rarity: None,
            series: None,
            card_set: None,
            artist: None,
        }
    }

    pub fn with_types(mut self, types: &[&str]) -> Self {
        self.types = Some(types.iter().map(|t| t.to_string()).collect());
        self
    }

    /// True if any type tag contains `query`, ignoring case.
    /// Cards without type tags never match, whatever their name is.
    pub fn has_type_matching(&self, query: &str) -> bool {
        self.types
            .as_deref()
            .is_some_and(|types| types.iter().any(|t| contains_ignore_case(t, query)))
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_i64())
}

// Non-string tags are dropped, a non-array is treated as absent.
fn lenient_string_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(values) => Some(
            values
                .into_iter()
                .filter_map(|v| match v {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}
