use std::{
    fs,
    path::{Path, PathBuf},
};

use url::Url;

use crate::utilities::{
    constants::DEFAULT_IMAGE_EXTENSION, string_manipulators::clean_file_name,
};

/// Writes `bytes` to `<dir>/<card name>.<ext>`, where the extension is taken from the image url.
pub fn save_image(
    dir: &str,
    card_name: &str,
    image_url: Option<&Url>,
    bytes: &[u8],
) -> std::io::Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let mut file_name = clean_file_name(card_name);
    if file_name.is_empty() {
        file_name = "card".to_string();
    }
    let path = Path::new(dir).join(format!("{}.{}", file_name, image_extension(image_url)));
    fs::write(&path, bytes)?;
    Ok(path)
}

fn image_extension(image_url: Option<&Url>) -> String {
    image_url
        .and_then(|url| url.path_segments()?.last().map(str::to_string))
        .and_then(|segment| {
            let (_, ext) = segment.rsplit_once('.')?;
            if !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()) {
                Some(ext.to_lowercase())
            } else {
                None
            }
        })
        .unwrap_or_else(|| DEFAULT_IMAGE_EXTENSION.to_string())
}
