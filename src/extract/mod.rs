//! Recipe extraction from free-form item descriptions.
//!
//! The pipeline for one item is: split into paragraphs, locate the first
//! paragraph with a measurement line, drop later link paragraphs, format each
//! remaining paragraph as Markdown, and normalize the title.

mod format;
mod paragraphs;
mod title;

pub use format::{classify_line, format_paragraph, LineKind};
pub use paragraphs::{is_blocked_paragraph, is_measurement, locate_recipe, split_paragraphs};
pub use title::normalize_title;

use crate::config::ExtractConfig;
use crate::error::SkipReason;
use crate::model::{Item, ProcessedItem};
use log::{debug, info};

/// Extract a recipe from one item, reporting why when there is none.
pub fn extract(item: &Item, config: &ExtractConfig) -> Result<ProcessedItem, SkipReason> {
    if let Some(prefix) = config
        .blocked_types
        .iter()
        .find(|prefix| item.title.starts_with(prefix.as_str()))
    {
        return Err(SkipReason::BlockedType {
            prefix: prefix.clone(),
        });
    }

    let paras = split_paragraphs(&item.description);
    let start = locate_recipe(&paras).ok_or(SkipReason::NoRecipeFound)?;

    let taken = take_recipe_paragraphs(&paras, start);

    debug!(
        "Recipe found in \"{}\" at paragraph {}. Taking it and remaining {} paragraphs.",
        item.title,
        start,
        taken.len() - 1
    );

    let recipe = taken
        .iter()
        .map(|para| format_paragraph(para, config))
        .filter(|formatted| !formatted.is_empty())
        .collect::<Vec<_>>();

    if recipe.is_empty() {
        return Err(SkipReason::EmptyRecipe);
    }

    Ok(ProcessedItem {
        title: normalize_title(&item.title),
        description: item.description.clone(),
        recipe: recipe.join("\n\n"),
    })
}

/// The paragraphs making up the recipe starting at `start`, before any are
/// formatted away. The opening paragraph is kept even when it carries links.
fn take_recipe_paragraphs<'a>(paras: &[&'a str], start: usize) -> Vec<&'a str> {
    let remainder = paras[start + 1..]
        .iter()
        .copied()
        .filter(|para| !is_blocked_paragraph(para));
    std::iter::once(paras[start]).chain(remainder).collect()
}

/// Extract a recipe from the given item with the default configuration.
///
/// Returns `None` if it doesn't contain a recipe.
pub fn process(item: &Item) -> Option<ProcessedItem> {
    process_with_config(item, &ExtractConfig::default())
}

pub fn process_with_config(item: &Item, config: &ExtractConfig) -> Option<ProcessedItem> {
    match extract(item, config) {
        Ok(processed) => Some(processed),
        Err(SkipReason::NoRecipeFound) => {
            info!("No recipe found in \"{}\". Skipping.", item.title);
            debug!("{}", item.description);
            None
        }
        Err(reason) => {
            info!("Skipping \"{}\": {}", item.title, reason);
            None
        }
    }
}

/// Split items into ones with a recipe and ones without, keeping input order
/// within each side.
pub fn process_scraped_items<I>(items: I) -> (Vec<ProcessedItem>, Vec<Item>)
where
    I: IntoIterator<Item = Item>,
{
    process_scraped_items_with_config(items, &ExtractConfig::default())
}

pub fn process_scraped_items_with_config<I>(
    items: I,
    config: &ExtractConfig,
) -> (Vec<ProcessedItem>, Vec<Item>)
where
    I: IntoIterator<Item = Item>,
{
    let mut processed = Vec::new();
    let mut skipped = Vec::new();

    for item in items {
        match process_with_config(&item, config) {
            Some(recipe_item) => processed.push(recipe_item),
            None => skipped.push(item),
        }
    }

    (processed, skipped)
}
