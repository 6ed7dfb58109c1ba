//! Structured (JSON API) image directory.

use serde_json::Value;

use super::{fetch_text, ImageReference, ImageSource, SourceError};
use crate::fetch::AsyncHttpClient;

/// Lists images from a JSON document.
///
/// The document is expected to contain an array of URL strings at a
/// configurable [JSON pointer](https://datatracker.ietf.org/doc/html/rfc6901)
/// (empty pointer = the document root). Array entries that are not
/// strings are skipped.
pub struct JsonDirectorySource<C: AsyncHttpClient> {
    client: C,
    url: String,
    pointer: String,
}

impl<C: AsyncHttpClient> JsonDirectorySource<C> {
    /// Creates a source reading `url`, taking the URL array at `pointer`.
    pub fn new(client: C, url: impl Into<String>, pointer: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            pointer: pointer.into(),
        }
    }

    fn extract(&self, body: &str) -> Result<Vec<ImageReference>, SourceError> {
        let document: Value = serde_json::from_str(body)
            .map_err(|e| SourceError::Malformed(format!("invalid JSON: {}", e)))?;

        let node = if self.pointer.is_empty() {
            &document
        } else {
            document.pointer(&self.pointer).ok_or_else(|| {
                SourceError::Malformed(format!("no value at pointer {:?}", self.pointer))
            })?
        };

        let array = node.as_array().ok_or_else(|| {
            SourceError::Malformed(format!("value at pointer {:?} is not an array", self.pointer))
        })?;

        let references: Vec<ImageReference> = array
            .iter()
            .filter_map(|v| v.as_str())
            .map(ImageReference::new)
            .collect();

        if references.is_empty() {
            return Err(SourceError::Empty);
        }
        Ok(references)
    }
}

impl<C: AsyncHttpClient> ImageSource for JsonDirectorySource<C> {
    async fn list(&self) -> Result<Vec<ImageReference>, SourceError> {
        let body = fetch_text(&self.client, &self.url).await?;
        self.extract(&body)
    }
}
