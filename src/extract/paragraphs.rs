use regex::Regex;
use std::sync::LazyLock;

static PARAGRAPHS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").unwrap());

static MEASURE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?mx)
        ^[\d./\s-]+    # numeric quantities like 1 1/2
        \s*(oz|ml|g)   # common recipe units
        ",
    )
    .unwrap()
});

static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bhttps?://").unwrap());

/// Split raw text into paragraphs on runs of two or more newlines.
///
/// Always yields at least one paragraph, which may be empty.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPHS_RE.split(text).collect()
}

/// Whether any line of `text` starts with a quantity followed by a unit.
pub fn is_measurement(text: &str) -> bool {
    MEASURE_RE.is_match(text)
}

/// Index of the first paragraph holding a measurement line.
pub fn locate_recipe(paragraphs: &[&str]) -> Option<usize> {
    paragraphs.iter().position(|para| is_measurement(para))
}

/// Link and sponsor paragraphs carry a URL somewhere in their text.
pub fn is_blocked_paragraph(para: &str) -> bool {
    URL_RE.is_match(para)
}
