//! Markup-scraped image directory.

use regex::Regex;

use super::{fetch_text, ImageReference, ImageSource, SourceError};
use crate::fetch::AsyncHttpClient;

/// Lists images by scraping `background-image` styles from a directory
/// page.
///
/// Matches tags whose `class` attribute contains the marker class and
/// whose inline `style` carries a `background-image: url(...)` — the shape
/// of team/people directory pages that render portraits as CSS
/// backgrounds.
pub struct HtmlDirectorySource<C: AsyncHttpClient> {
    client: C,
    url: String,
    marker_class: String,
}

impl<C: AsyncHttpClient> HtmlDirectorySource<C> {
    /// Creates a source scraping `url` for elements carrying
    /// `marker_class`.
    pub fn new(client: C, url: impl Into<String>, marker_class: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            marker_class: marker_class.into(),
        }
    }

    fn pattern(&self) -> Result<Regex, SourceError> {
        // One tag: class attr containing the marker, then a style attr
        // with a background-image url, in either quote style.
        let pattern = format!(
            r#"<[^>]*class\s*=\s*["'][^"']*{}[^"']*["'][^>]*style\s*=\s*["'][^"']*background-image:\s*url\(([^)]+)\)"#,
            regex::escape(&self.marker_class)
        );
        Regex::new(&pattern).map_err(|e| SourceError::Malformed(e.to_string()))
    }

    fn extract(&self, body: &str) -> Result<Vec<ImageReference>, SourceError> {
        let pattern = self.pattern()?;
        let references: Vec<ImageReference> = pattern
            .captures_iter(body)
            .map(|caps| {
                let raw = caps[1].trim();
                // The url() argument may be quoted.
                let url = raw.trim_matches(|c| c == '"' || c == '\'' || c == ' ');
                ImageReference::new(url)
            })
            .collect();

        if references.is_empty() {
            return Err(SourceError::Empty);
        }
        Ok(references)
    }
}

impl<C: AsyncHttpClient> ImageSource for HtmlDirectorySource<C> {
    async fn list(&self) -> Result<Vec<ImageReference>, SourceError> {
        let body = fetch_text(&self.client, &self.url).await?;
        self.extract(&body)
    }
}
