use serde::{Deserialize, Serialize};

/// A catalog entry as delivered by the upstream fetcher.
///
/// Only the fields the extractor reads are kept; anything else in the
/// source JSON is ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    pub description: String,
}

impl Item {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// An [`Item`] with a normalized title and the extracted recipe Markdown.
///
/// `recipe` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedItem {
    pub title: String,
    pub description: String,
    pub recipe: String,
}
