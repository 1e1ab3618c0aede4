use regex::Regex;
use std::sync::LazyLock;

static TYPE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<type>.*):\s*(?P<name>.*)").unwrap());

/// Strip a channel-style `<type>: ` prefix from a title.
///
/// The type capture is greedy, so the split happens at the last colon on the
/// first line.
pub fn normalize_title(title: &str) -> String {
    TYPE_NAME_RE
        .captures(title)
        .and_then(|caps| caps.name("name"))
        .map_or(title, |name| name.as_str().trim())
        .to_string()
}
