//! Extract drink recipes embedded in video descriptions and render them as
//! deduplicated, title-sorted Markdown.

pub mod config;
pub mod error;
pub mod extract;
pub mod html;
pub mod model;
pub mod render;
pub mod search;

pub use config::ExtractConfig;
pub use error::{BarflyError, SkipReason};
pub use extract::{
    extract, process, process_scraped_items, process_scraped_items_with_config,
    process_with_config,
};
pub use html::markdown_to_html;
pub use model::{Item, ProcessedItem};
pub use render::{render_markdown, write_markdown};
pub use search::{search, SearchResult};

/// Extract recipes from items and render the ones found as Markdown.
///
/// Returns the Markdown along with the items that had no recipe.
pub fn items_to_markdown<I>(items: I, config: &ExtractConfig) -> (String, Vec<Item>)
where
    I: IntoIterator<Item = Item>,
{
    let (processed, skipped) = process_scraped_items_with_config(items, config);
    (render_markdown(&processed), skipped)
}
