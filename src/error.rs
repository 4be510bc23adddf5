//! Reported failures of the extraction pipeline.
//!
//! Every variant renders to the exact message callers see in `errors()`.

use crate::http::FetchError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Invalid Google URL search path")]
    InvalidSearchPath,
    #[error("Response code: {code}, message: {message}")]
    BadStatus { code: u16, message: String },
    #[error("Request failed: {0}")]
    Request(#[from] FetchError),
    #[error("No carousel detected")]
    NoCarousel,
    #[error("Carousel detected, but failed to extract data")]
    EmptyCarousel,
    #[error("failed to serialize carousel: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Outcome of one pipeline stage: either JSON or a non-empty list of errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    errors: Vec<String>,
    json: Option<String>,
}

impl Extraction {
    pub fn succeeded(json: String) -> Self {
        Self {
            errors: Vec::new(),
            json: Some(json),
        }
    }

    pub fn failed(error: ScrapeError) -> Self {
        tracing::warn!(%error, "carousel extraction failed");
        Self {
            errors: vec![error.to_string()],
            json: None,
        }
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// The JSON document, present only when there are no errors
    pub fn json(&self) -> Option<&str> {
        if !self.errors.is_empty() {
            return None;
        }
        self.json.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_reported_strings() {
        assert_eq!(
            ScrapeError::InvalidSearchPath.to_string(),
            "Invalid Google URL search path"
        );
        let status = ScrapeError::BadStatus {
            code: 404,
            message: "Not Found".to_string(),
        };
        assert_eq!(status.to_string(), "Response code: 404, message: Not Found");
        assert_eq!(ScrapeError::NoCarousel.to_string(), "No carousel detected");
        assert_eq!(
            ScrapeError::EmptyCarousel.to_string(),
            "Carousel detected, but failed to extract data"
        );
    }

    #[test]
    fn failed_extraction_has_no_json() {
        let extraction = Extraction::failed(ScrapeError::NoCarousel);
        assert_eq!(extraction.errors(), ["No carousel detected"]);
        assert_eq!(extraction.json(), None);
    }

    #[test]
    fn succeeded_extraction_has_no_errors() {
        let extraction = Extraction::succeeded("{}".to_string());
        assert!(extraction.errors().is_empty());
        assert_eq!(extraction.json(), Some("{}"));
    }
}
