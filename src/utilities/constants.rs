pub const POKEMON_TCG_API_URL: &str = "https://api.pokemontcg.io/v1/cards";

pub const DEFAULT_CONNECTIVITY_RETRY_MS: u64 = 2000;

pub const NOT_AVAILABLE: &str = "N/A";
pub const TYPES_SEPARATOR: &str = ", ";

pub const DEFAULT_IMAGE_EXTENSION: &str = "png";
