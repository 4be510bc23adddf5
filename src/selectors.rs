//! CSS selectors locating the carousel in Google's basic HTML results.
//!
//! These class names are tied to the markup Google currently serves to
//! non-browser user agents. When Google changes that markup, extraction starts
//! reporting "No carousel detected" and the constants (or the `[selectors]`
//! config section) need updating.

use scraper::Selector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CAROUSEL_CONTAINER: &str = ".Xdlr0d";
pub const CAROUSEL_ITEM: &str = ".BVG0Nb.OxTOff";
pub const CAROUSEL_TITLE: &str = ".BNeawe.wyrwXc.AP7Wnd";
pub const ITEM_NAME: &str = ".BNeawe.s3v9rd.AP7Wnd";
pub const ITEM_DATE: &str = ".BNeawe.tAd8D.AP7Wnd";
pub const ITEM_IMAGE: &str = "img";

#[derive(Error, Debug)]
#[error("invalid {field} selector '{css}': {reason}")]
pub struct SelectorError {
    pub field: &'static str,
    pub css: String,
    pub reason: String,
}

/// Selector source strings, as written in the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub container: String,
    pub item: String,
    pub title: String,
    pub item_name: String,
    pub item_date: String,
    pub item_image: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            container: CAROUSEL_CONTAINER.to_string(),
            item: CAROUSEL_ITEM.to_string(),
            title: CAROUSEL_TITLE.to_string(),
            item_name: ITEM_NAME.to_string(),
            item_date: ITEM_DATE.to_string(),
            item_image: ITEM_IMAGE.to_string(),
        }
    }
}

/// Compiled selectors shared by the carousel and item extractors
#[derive(Debug, Clone)]
pub struct CarouselSelectors {
    pub container: Selector,
    pub item: Selector,
    pub title: Selector,
    pub item_name: Selector,
    pub item_date: Selector,
    pub item_image: Selector,
}

impl CarouselSelectors {
    pub fn from_config(config: &SelectorConfig) -> Result<Self, SelectorError> {
        Ok(Self {
            container: compile("container", &config.container)?,
            item: compile("item", &config.item)?,
            title: compile("title", &config.title)?,
            item_name: compile("item_name", &config.item_name)?,
            item_date: compile("item_date", &config.item_date)?,
            item_image: compile("item_image", &config.item_image)?,
        })
    }
}

impl Default for CarouselSelectors {
    fn default() -> Self {
        Self {
            container: Selector::parse(CAROUSEL_CONTAINER).unwrap(),
            item: Selector::parse(CAROUSEL_ITEM).unwrap(),
            title: Selector::parse(CAROUSEL_TITLE).unwrap(),
            item_name: Selector::parse(ITEM_NAME).unwrap(),
            item_date: Selector::parse(ITEM_DATE).unwrap(),
            item_image: Selector::parse(ITEM_IMAGE).unwrap(),
        }
    }
}

fn compile(field: &'static str, css: &str) -> Result<Selector, SelectorError> {
    Selector::parse(css).map_err(|e| SelectorError {
        field,
        css: css.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_selectors_compile_from_default_config() {
        assert!(CarouselSelectors::from_config(&SelectorConfig::default()).is_ok());
    }

    #[test]
    fn invalid_override_names_the_field() {
        let config = SelectorConfig {
            item_date: "..broken".to_string(),
            ..Default::default()
        };
        let err = CarouselSelectors::from_config(&config).unwrap_err();
        assert_eq!(err.field, "item_date");
        assert_eq!(err.css, "..broken");
        assert!(err.to_string().starts_with("invalid item_date selector '..broken'"));
    }
}
