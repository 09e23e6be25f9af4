use log::{debug, warn};

use crate::cards::card_detail::parse_image_url;

/// Downloads card images. Every failure ends up as "no image", never as an error.
#[derive(Clone)]
pub struct ImageLoader {
    client: reqwest::Client,
}

impl ImageLoader {
    pub fn new(client: reqwest::Client) -> Self {
        ImageLoader { client }
    }

    pub async fn load(&self, image_url: Option<&str>) -> Option<Vec<u8>> {
        let url = parse_image_url(image_url)?;
        debug!("Loading image from {}", url);

        let response = match self.client.get(url.clone()).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Could not load image {}: {}", url, e);
                return None;
            }
        };
        if !response.status().is_success() {
            warn!("Image {} responded with HTTP {}", url, response.status());
            return None;
        }

        match response.bytes().await {
            Ok(bytes) if !bytes.is_empty() => Some(bytes.to_vec()),
            Ok(_) => {
                warn!("Image {} was empty", url);
                None
            }
            Err(e) => {
                warn!("Could not read image {}: {}", url, e);
                None
            }
        }
    }
}
