//! Field extraction for a single carousel card.

use crate::record::ExtractedItem;
use crate::selectors::CarouselSelectors;
use scraper::ElementRef;
use std::cell::OnceCell;

/// Origin prepended to the card's relative `href`
pub const LINK_ORIGIN: &str = "https://www.google.com";

/// Resolves the four fields of one carousel card.
///
/// Missing fields come back as `None`; extraction never fails.
pub struct ItemExtractor<'a> {
    node: ElementRef<'a>,
    selectors: &'a CarouselSelectors,
    name_element: OnceCell<Option<ElementRef<'a>>>,
    date_element: OnceCell<Option<ElementRef<'a>>>,
    image_element: OnceCell<Option<ElementRef<'a>>>,
    record: OnceCell<ExtractedItem>,
}

impl<'a> ItemExtractor<'a> {
    pub fn new(node: ElementRef<'a>, selectors: &'a CarouselSelectors) -> Self {
        Self {
            node,
            selectors,
            name_element: OnceCell::new(),
            date_element: OnceCell::new(),
            image_element: OnceCell::new(),
            record: OnceCell::new(),
        }
    }

    pub fn to_record(&self) -> &ExtractedItem {
        self.record.get_or_init(|| ExtractedItem {
            name: self.name(),
            extensions: [self.date()],
            link: self.link(),
            image: self.image(),
        })
    }

    /// Missing fields are expected on real cards, so this is always empty.
    pub fn errors(&self) -> &[String] {
        &[]
    }

    fn name(&self) -> Option<String> {
        if let Some(element) = self.name_element() {
            let text = element_text(element);
            if !text.is_empty() {
                return Some(text);
            }
        }

        self.image_element()
            .and_then(|img| img.value().attr("alt"))
            .map(str::to_string)
    }

    fn date(&self) -> Option<String> {
        self.date_element().map(element_text)
    }

    fn link(&self) -> Option<String> {
        self.node
            .value()
            .attr("href")
            .map(|href| format!("{LINK_ORIGIN}{href}"))
    }

    fn image(&self) -> Option<String> {
        self.image_element()
            .and_then(|img| img.value().attr("src"))
            .map(str::to_string)
    }

    fn name_element(&self) -> Option<ElementRef<'a>> {
        *self
            .name_element
            .get_or_init(|| self.node.select(&self.selectors.item_name).next())
    }

    fn date_element(&self) -> Option<ElementRef<'a>> {
        *self
            .date_element
            .get_or_init(|| self.node.select(&self.selectors.item_date).next())
    }

    fn image_element(&self) -> Option<ElementRef<'a>> {
        *self
            .image_element
            .get_or_init(|| self.node.select(&self.selectors.item_image).next())
    }
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    const FULL_CARD: &str = r#"
        <a class="BVG0Nb OxTOff" href="/search?some_random_text_abc">
          <div>
            <div style="width:112px">
              <div class="l7d08" style="width:112px;height:112px">
                <img class="h1hFNe" alt="Café Terrace at Night" src="data:image/gif;base64,R0lGOD//yHEAAAICTAEAOw==" id="dimg_29" data-deferred="1">
              </div>
              <div class="RWuggc kCrYT">
                <div><div class="BNeawe s3v9rd AP7Wnd">Café Terrace at Night</div></div>
                <div><div class="BNeawe tAd8D AP7Wnd">1888</div></div>
              </div>
            </div>
          </div>
        </a>"#;

    const NAMELESS_CARD: &str = r#"
        <a class="BVG0Nb OxTOff" href="/search?some_random_text_abc">
          <img alt="Café Terrace at Night" src="data:image/gif;base64,R0lGOD//yHEAAAICTAEAOw==">
          <div class="BNeawe s3v9rd AP7Wnd"></div>
          <div class="BNeawe tAd8D AP7Wnd">1888</div>
        </a>"#;

    fn record_for(html: &str) -> ExtractedItem {
        let fragment = Html::parse_fragment(html);
        let anchor = Selector::parse("a").unwrap();
        let selectors = CarouselSelectors::default();
        let node = fragment.select(&anchor).next().unwrap();
        ItemExtractor::new(node, &selectors).to_record().clone()
    }

    fn expected_terrace() -> ExtractedItem {
        ExtractedItem {
            name: Some("Café Terrace at Night".to_string()),
            extensions: [Some("1888".to_string())],
            link: Some("https://www.google.com/search?some_random_text_abc".to_string()),
            image: Some("data:image/gif;base64,R0lGOD//yHEAAAICTAEAOw==".to_string()),
        }
    }

    #[test]
    fn extracts_all_fields() {
        assert_eq!(record_for(FULL_CARD), expected_terrace());
    }

    #[test]
    fn falls_back_to_image_alt_for_name() {
        assert_eq!(record_for(NAMELESS_CARD), expected_terrace());
    }

    #[test]
    fn empty_node_yields_null_fields() {
        let record = record_for(r#"<a class="BVG0Nb OxTOff"></a>"#);
        assert_eq!(
            record,
            ExtractedItem {
                name: None,
                extensions: [None],
                link: None,
                image: None,
            }
        );
    }

    #[test]
    fn whitespace_name_is_kept_over_image_alt() {
        let record = record_for(
            r#"<a class="BVG0Nb OxTOff"><img alt="X"><div class="BNeawe s3v9rd AP7Wnd"> </div></a>"#,
        );
        assert_eq!(record.name.as_deref(), Some(" "));
    }

    #[test]
    fn image_without_alt_leaves_name_empty() {
        let record = record_for(r#"<a href="/x"><img src="pic.png"></a>"#);
        assert_eq!(record.name, None);
        assert_eq!(record.image.as_deref(), Some("pic.png"));
        assert_eq!(record.link.as_deref(), Some("https://www.google.com/x"));
    }

    #[test]
    fn record_is_memoized_and_errors_are_empty() {
        let fragment = Html::parse_fragment(FULL_CARD);
        let anchor = Selector::parse("a").unwrap();
        let selectors = CarouselSelectors::default();
        let item = ItemExtractor::new(fragment.select(&anchor).next().unwrap(), &selectors);

        let first: *const ExtractedItem = item.to_record();
        let second: *const ExtractedItem = item.to_record();
        assert_eq!(first, second);
        assert!(item.errors().is_empty());
    }
}
