use crate::{cards::card::Card, utilities::string_manipulators::join_types};

/// What a list shows for one card: its name and its type tags joined by ", ".
#[derive(Debug, PartialEq, Clone)]
pub struct CardRow {
    pub name: String,
    pub types: String,
}

impl From<&Card> for CardRow {
    fn from(card: &Card) -> Self {
        CardRow {
            name: card.name.clone(),
            types: join_types(card.types.as_deref()).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_from_card() {
        let row = CardRow::from(&Card::new("Charizard").with_types(&["Fire", "Dragon"]));
        assert_eq!(row.name, "Charizard");
        assert_eq!(row.types, "Fire, Dragon");
    }

    #[test]
    fn test_row_without_types() {
        assert_eq!(CardRow::from(&Card::new("Potion")).types, "");
    }
}
