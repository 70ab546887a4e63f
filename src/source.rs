//! Resolving a location string to a decoded image.

use crate::{Result, TextGraphError};
use image::{DynamicImage, ImageReader};
use std::io::{Cursor, Read};
use std::path::Path;

/// Default cap on downloaded image bodies.
pub const DEFAULT_BODY_LIMIT: u64 = 32 * 1024 * 1024;

/// Resolves a location (URL or path) to a decoded image.
pub trait ImageSource {
    fn open(&self, location: &str) -> Result<DynamicImage>;
}

/// Fetches `http`/`https` URLs and reads `file://` URLs or plain paths.
#[derive(Debug, Clone, Copy)]
pub struct Locator {
    body_limit: u64,
}

impl Locator {
    pub fn new() -> Self {
        Self { body_limit: DEFAULT_BODY_LIMIT }
    }

    pub fn with_body_limit(mut self, bytes: u64) -> Self {
        self.body_limit = bytes;
        self
    }

    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        log::debug!("fetching {url}");
        let response = ureq::get(url)
            .call()
            .map_err(|e| TextGraphError::SourceUnavailable(format!("{url}: {e}")))?;

        let mut bytes = Vec::new();
        response
            .into_body()
            .into_reader()
            .take(self.body_limit + 1)
            .read_to_end(&mut bytes)?;
        if bytes.len() as u64 > self.body_limit {
            return Err(TextGraphError::SourceUnavailable(format!(
                "{url}: body exceeds {} bytes",
                self.body_limit
            )));
        }
        Ok(bytes)
    }
}

impl Default for Locator {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageSource for Locator {
    fn open(&self, location: &str) -> Result<DynamicImage> {
        if is_remote(location) {
            let bytes = self.fetch(location)?;
            let image = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?.decode()?;
            return Ok(image);
        }

        let path = Path::new(location.strip_prefix("file://").unwrap_or(location));
        log::debug!("reading {}", path.display());
        let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
        Ok(image)
    }
}

fn is_remote(location: &str) -> bool {
    let lower = location.get(..8).unwrap_or(location).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
