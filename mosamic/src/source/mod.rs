//! Image source abstraction.
//!
//! The pipeline core is agnostic to where the photo list comes from; it
//! only needs an ordered sequence of opaque locators. The [`ImageSource`]
//! trait is that seam. Two implementations ship here:
//!
//! - [`HtmlDirectorySource`] scrapes `background-image: url(...)` locators
//!   out of a directory page, matching elements by a marker CSS class.
//! - [`JsonDirectorySource`] reads an array of URL strings from a JSON
//!   document, for directories that expose a structured API.
//!
//! Both are generic over [`AsyncHttpClient`] for dependency injection and
//! mock-backed testing.

mod error;
mod html;
mod json;

pub use error::SourceError;
pub use html::HtmlDirectorySource;
pub use json::JsonDirectorySource;

use std::fmt;

use crate::fetch::AsyncHttpClient;

/// Opaque locator for one source image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageReference(String);

impl ImageReference {
    /// Wraps a URL as an image reference.
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// The underlying URL.
    pub fn url(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Produces the ordered list of source image references.
pub trait ImageSource: Send + Sync {
    /// Lists the references, in directory order.
    fn list(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<ImageReference>, SourceError>> + Send;
}

/// A fixed, in-memory reference list.
///
/// Useful when the caller already has the URLs, and as the test double
/// for pipeline tests.
pub struct StaticSource {
    references: Vec<ImageReference>,
}

impl StaticSource {
    /// Wraps an existing list of URLs.
    pub fn new<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            references: urls.into_iter().map(ImageReference::new).collect(),
        }
    }
}

impl ImageSource for StaticSource {
    async fn list(&self) -> Result<Vec<ImageReference>, SourceError> {
        Ok(self.references.clone())
    }
}

/// Shared helper: fetch a directory document body as UTF-8 text.
async fn fetch_text<C: AsyncHttpClient>(client: &C, url: &str) -> Result<String, SourceError> {
    let bytes = client
        .get(url)
        .await
        .map_err(|e| SourceError::Fetch(e.to_string()))?;
    String::from_utf8(bytes).map_err(|_| SourceError::Malformed("response is not valid UTF-8".into()))
}
