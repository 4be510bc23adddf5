//! Extracted carousel records and the JSON shape they serialize to.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

/// Title used when the page has no usable carousel title
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// One carousel card.
///
/// Every field is nullable and always serialized, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedItem {
    pub name: Option<String>,
    /// Always exactly one entry: the card's date, if any
    pub extensions: [Option<String>; 1],
    pub link: Option<String>,
    pub image: Option<String>,
}

impl ExtractedItem {
    pub fn date(&self) -> Option<&str> {
        self.extensions[0].as_deref()
    }
}

/// The carousel title mapped to its cards, serialized as `{"<title>": [...]}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselOutput {
    pub title: String,
    pub items: Vec<ExtractedItem>,
}

impl CarouselOutput {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Re-render carousel JSON with indentation, keeping field order
pub fn pretty_json(json: &str) -> Result<String, serde_json::Error> {
    let output: BTreeMap<String, Vec<ExtractedItem>> = serde_json::from_str(json)?;
    serde_json::to_string_pretty(&output)
}

impl Serialize for CarouselOutput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.title, &self.items)?;
        map.end()
    }
}
