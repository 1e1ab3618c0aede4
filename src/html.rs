use pulldown_cmark::{html, Event, Parser};

/// Convert rendered recipe Markdown into the HTML read by [`crate::search`].
///
/// Raw HTML in the source text is emitted as escaped text; descriptions come
/// from third parties.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new(markdown).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        other => other,
    });

    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}
