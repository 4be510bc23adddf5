//! # serp-carousel
//!
//! Extracts the entity carousel (artworks, buildings, ...) from a Google
//! search results page into JSON keyed by the carousel title.
//!
//! ## Pipeline
//!
//! - **[`CarouselScraper`]**: validates the search URL, fetches the page once, gates on status
//! - **[`CarouselExtractor`]**: finds the carousel container and title, assembles the output
//! - **[`ItemExtractor`]**: resolves name, date, link and image for one card
//!
//! Failures are reported through `errors()` rather than returned as `Err`;
//! JSON is only available when the error list is empty.

pub mod carousel;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod http;
pub mod item;
pub mod logging;
pub mod parser;
pub mod record;
pub mod selectors;

pub use carousel::{CarouselExtractor, CarouselFactory, DefaultCarousel};
pub use config::Config;
pub use error::{Extraction, ScrapeError};
pub use fetcher::CarouselScraper;
pub use http::{HttpClient, HttpResponse, ReqwestClient};
pub use item::ItemExtractor;
pub use parser::{DocumentParser, HtmlDocumentParser};
pub use record::{CarouselOutput, ExtractedItem};
pub use selectors::CarouselSelectors;
