use crate::cards::{card::Card, card_collection::CardCollection};

pub fn charmander() -> Card {
    Card {
        hp: Some("50".to_string()),
        national_pokedex_number: Some(4),
        ..Card::new("Charmander").with_types(&["Fire"])
    }
}

pub fn squirtle() -> Card {
    Card {
        hp: Some("50".to_string()),
        national_pokedex_number: Some(7),
        ..Card::new("Squirtle").with_types(&["Water"])
    }
}

pub fn charizard() -> Card {
    Card::new("Charizard").with_types(&["Fire", "Dragon"])
}

pub fn mew_without_types() -> Card {
    Card::new("Mew")
}

pub fn ditto_with_empty_types() -> Card {
    Card::new("Ditto").with_types(&[])
}

pub fn gardevoir() -> Card {
    Card {
        name: "Gardevoir".to_string(),
        image_url_hi_res: Some("https://images.pokemontcg.io/xy7/54_hires.png".to_string()),
        types: Some(vec!["Fairy".to_string()]),
        hp: Some("130".to_string()),
        national_pokedex_number: Some(282),
        subtype: Some("Stage 2".to_string()),
        supertype: Some("Pokémon".to_string()),
        rarity: Some("Rare Holo".to_string()),
        series: Some("XY".to_string()),
        card_set: Some("Ancient Origins".to_string()),
        artist: Some("TOKIYA".to_string()),
    }
}

pub fn starter_catalog() -> CardCollection {
    CardCollection::new(vec![charmander(), squirtle()])
}

pub fn mixed_catalog() -> CardCollection {
    CardCollection::new(vec![
        charmander(),
        mew_without_types(),
        squirtle(),
        ditto_with_empty_types(),
        charizard(),
        gardevoir(),
    ])
}
