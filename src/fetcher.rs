//! URL validation, the single page fetch, and status gating.
//!
//! [`CarouselScraper`] wraps a [`CarouselFactory`] with the checks that must
//! pass before there is a document to extract from.

use crate::carousel::{CarouselFactory, DefaultCarousel};
use crate::error::{Extraction, ScrapeError};
use crate::http::{FetchError, HttpClient, ReqwestClient};
use crate::parser::{DocumentParser, HtmlDocumentParser};
use tokio::sync::OnceCell;
use url::Url;

/// Only Google result pages carry the carousel markup
pub const SEARCH_URL_PREFIX: &str = "https://www.google.com/search?";

/// Scrapes the carousel from one Google search URL.
///
/// The page is fetched and parsed at most once, on the first call to
/// [`errors`](Self::errors) or [`carousel_json`](Self::carousel_json).
pub struct CarouselScraper<C = ReqwestClient, P = HtmlDocumentParser, X = DefaultCarousel> {
    url: String,
    client: C,
    parser: P,
    carousel: X,
    extraction: OnceCell<Extraction>,
}

impl CarouselScraper {
    /// Scraper with the default reqwest client, parser and selectors
    pub fn new(url: impl Into<String>) -> Result<Self, FetchError> {
        Ok(Self::with_collaborators(
            url,
            ReqwestClient::new()?,
            HtmlDocumentParser,
            DefaultCarousel::default(),
        ))
    }
}

impl<C: HttpClient, P: DocumentParser, X: CarouselFactory> CarouselScraper<C, P, X> {
    pub fn with_collaborators(url: impl Into<String>, client: C, parser: P, carousel: X) -> Self {
        Self {
            url: url.into(),
            client,
            parser,
            carousel,
            extraction: OnceCell::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn errors(&self) -> &[String] {
        self.extraction().await.errors()
    }

    /// Carousel JSON, or `None` whenever [`errors`](Self::errors) is non-empty
    pub async fn carousel_json(&self) -> Option<&str> {
        self.extraction().await.json()
    }

    pub async fn extraction(&self) -> &Extraction {
        self.extraction.get_or_init(|| self.run()).await
    }

    async fn run(&self) -> Extraction {
        if !is_search_url(&self.url) {
            return Extraction::failed(ScrapeError::InvalidSearchPath);
        }

        let response = match self.client.get(&self.url).await {
            Ok(response) => response,
            Err(e) => return Extraction::failed(ScrapeError::Request(e)),
        };
        if response.status_code != 200 {
            return Extraction::failed(ScrapeError::BadStatus {
                code: response.status_code,
                message: response.status_message,
            });
        }

        tracing::debug!(bytes = response.body.len(), "parsing result page");
        let document = self.parser.parse(&response.body);
        self.carousel.extract(&document)
    }
}

pub fn is_search_url(url: &str) -> bool {
    url.starts_with(SEARCH_URL_PREFIX)
}

/// Build a search URL for `query`, e.g. `https://www.google.com/search?q=van+gogh`
pub fn search_url(query: &str) -> Result<String, url::ParseError> {
    let base = &SEARCH_URL_PREFIX[..SEARCH_URL_PREFIX.len() - 1];
    Ok(Url::parse_with_params(base, &[("q", query)])?.into())
}
