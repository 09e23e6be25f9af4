use crate::utilities::constants::TYPES_SEPARATOR;

/// Unicode aware, case-insensitive substring check. An empty needle is contained in everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

pub fn join_types(types: Option<&[String]>) -> Option<String> {
    types.map(|tags| tags.join(TYPES_SEPARATOR))
}

pub fn clean_file_name(input: &str) -> String {
    input
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect::<String>()
        .trim_matches('_')
        .to_string()
}
