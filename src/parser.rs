//! HTML collaborator turning a response body into a queryable document.

use scraper::Html;

pub trait DocumentParser: Send + Sync {
    fn parse(&self, body: &str) -> Html;
}

/// Full-document parsing with html5ever via scraper
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlDocumentParser;

impl DocumentParser for HtmlDocumentParser {
    fn parse(&self, body: &str) -> Html {
        Html::parse_document(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Selector;

    #[test]
    fn parses_empty_body_into_document() {
        let document = HtmlDocumentParser.parse("");
        let body = Selector::parse("body").unwrap();
        assert!(document.select(&body).next().is_some());
    }
}
