use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

/// A recipe matched during search, rebuilt from rendered recipe HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub title: String,
    pub recipe: String,
}

/// Text of the nearest preceding sibling that has any.
fn extract_title(list: ElementRef) -> String {
    for sibling in list.prev_siblings() {
        let text = if let Some(element) = ElementRef::wrap(sibling) {
            element.text().map(str::trim).collect::<String>()
        } else if let Some(text) = sibling.value().as_text() {
            text.trim().to_string()
        } else {
            continue;
        };

        if !text.is_empty() {
            return text;
        }
    }
    String::new()
}

/// Search recipe HTML for lists whose title or lines contain every query
/// token, case-insensitively.
pub fn search<I, S>(recipe_html: &str, query: I) -> Vec<SearchResult>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tokens: Vec<String> = query
        .into_iter()
        .map(|token| token.as_ref().to_lowercase())
        .collect();
    let document = Html::parse_document(recipe_html);
    let selector = Selector::parse("ul").unwrap();

    document
        .select(&selector)
        .filter_map(|list| {
            let title = extract_title(list);
            let recipe = list
                .text()
                .map(str::trim)
                .filter(|text| !text.is_empty())
                .collect::<Vec<_>>()
                .join("\n");
            let haystack = format!("{title}\n{recipe}").to_lowercase();

            tokens
                .iter()
                .all(|token| haystack.contains(token.as_str()))
                .then_some(SearchResult { title, recipe })
        })
        .collect()
}
