pub mod card;
pub mod card_collection;
pub mod card_detail;
pub mod card_row;
