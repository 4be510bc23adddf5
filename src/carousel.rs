//! Carousel location and JSON assembly over a parsed results page.

use crate::error::{Extraction, ScrapeError};
use crate::item::ItemExtractor;
use crate::record::{CarouselOutput, ExtractedItem, UNKNOWN_TITLE};
use crate::selectors::CarouselSelectors;
use scraper::{ElementRef, Html};
use std::cell::OnceCell;

/// Builds the carousel extraction for a parsed page
pub trait CarouselFactory: Send + Sync {
    fn extract(&self, document: &Html) -> Extraction;
}

/// [`CarouselFactory`] running a [`CarouselExtractor`] with the given selectors
#[derive(Debug, Clone, Default)]
pub struct DefaultCarousel {
    selectors: CarouselSelectors,
}

impl DefaultCarousel {
    pub fn new(selectors: CarouselSelectors) -> Self {
        Self { selectors }
    }
}

impl CarouselFactory for DefaultCarousel {
    fn extract(&self, document: &Html) -> Extraction {
        CarouselExtractor::new(document, &self.selectors)
            .extraction()
            .clone()
    }
}

/// Extracts the first carousel on a page.
///
/// Lookups happen on first access and are cached for the extractor's lifetime,
/// so `errors()` and `json()` can be called in any order.
pub struct CarouselExtractor<'a> {
    document: &'a Html,
    selectors: &'a CarouselSelectors,
    container: OnceCell<Option<ElementRef<'a>>>,
    items: OnceCell<Vec<ExtractedItem>>,
    title: OnceCell<String>,
    extraction: OnceCell<Extraction>,
}

impl<'a> CarouselExtractor<'a> {
    pub fn new(document: &'a Html, selectors: &'a CarouselSelectors) -> Self {
        Self {
            document,
            selectors,
            container: OnceCell::new(),
            items: OnceCell::new(),
            title: OnceCell::new(),
            extraction: OnceCell::new(),
        }
    }

    pub fn errors(&self) -> &[String] {
        self.extraction().errors()
    }

    pub fn json(&self) -> Option<&str> {
        self.extraction().json()
    }

    pub fn extraction(&self) -> &Extraction {
        self.extraction.get_or_init(|| match self.output() {
            Ok(output) => match output.to_json() {
                Ok(json) => Extraction::succeeded(json),
                Err(e) => Extraction::failed(ScrapeError::from(e)),
            },
            Err(e) => Extraction::failed(e),
        })
    }

    /// Resolved carousel title, falling back to [`UNKNOWN_TITLE`]
    pub fn title(&self) -> &str {
        self.title.get_or_init(|| {
            self.document
                .select(&self.selectors.title)
                .next()
                .map(|element| element.text().collect::<String>())
                .filter(|text| !text.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN_TITLE.to_string())
        })
    }

    pub fn items(&self) -> &[ExtractedItem] {
        self.items.get_or_init(|| {
            let Some(container) = self.container() else {
                return Vec::new();
            };
            container
                .select(&self.selectors.item)
                .map(|node| ItemExtractor::new(node, self.selectors).to_record().clone())
                .collect()
        })
    }

    fn output(&self) -> Result<CarouselOutput, ScrapeError> {
        if self.container().is_none() {
            return Err(ScrapeError::NoCarousel);
        }
        let items = self.items();
        if items.is_empty() {
            return Err(ScrapeError::EmptyCarousel);
        }

        let title = self.title();
        tracing::info!(title, items = items.len(), "carousel extracted");

        Ok(CarouselOutput {
            title: title.to_string(),
            items: items.to_vec(),
        })
    }

    fn container(&self) -> Option<ElementRef<'a>> {
        *self
            .container
            .get_or_init(|| self.document.select(&self.selectors.container).next())
    }
}
