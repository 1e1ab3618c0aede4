//! Markdown rendering of processed items with cross-item block dedup.

use crate::model::ProcessedItem;
use deunicode::deunicode;
use std::collections::HashSet;
use std::io::{self, Write};

/// Sort key for a title: accent-folded, case kept.
pub fn title_sort_key(title: &str) -> String {
    deunicode(title)
}

/// Split a recipe into `## `-headed blocks. Text before the first heading,
/// or a recipe with no heading at all, forms one block.
fn split_recipe_blocks(recipe: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in recipe.lines() {
        if line.starts_with("## ") && !current.is_empty() {
            blocks.push(current.join("\n").trim().to_string());
            current.clear();
        }
        current.push(line);
    }
    if !current.is_empty() {
        blocks.push(current.join("\n").trim().to_string());
    }

    blocks.retain(|block| !block.is_empty());
    blocks
}

/// Drop blocks already in `seen`, recording the new ones.
fn dedupe_recipe_blocks(recipe: &str, seen: &mut HashSet<String>) -> String {
    split_recipe_blocks(recipe)
        .into_iter()
        .filter(|block| seen.insert(block.clone()))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render the given recipes as Markdown, sorted by title.
///
/// A recipe block already emitted for an earlier item is left out; an item
/// with nothing left is skipped entirely.
pub fn render_markdown(items: &[ProcessedItem]) -> String {
    let mut sorted: Vec<&ProcessedItem> = items.iter().collect();
    sorted.sort_by_cached_key(|item| title_sort_key(&item.title));

    let mut seen_blocks = HashSet::new();
    let mut out = String::new();
    for item in sorted {
        let recipe = dedupe_recipe_blocks(&item.recipe, &mut seen_blocks);
        if recipe.is_empty() {
            continue;
        }
        out.push_str(&format!("# {}\n\n{recipe}\n\n", item.title));
    }
    out
}

pub fn write_markdown<W: Write>(out: &mut W, items: &[ProcessedItem]) -> io::Result<()> {
    out.write_all(render_markdown(items).as_bytes())
}
