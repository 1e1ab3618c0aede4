use crate::config::ExtractConfig;
use crate::extract::paragraphs::is_measurement;
use regex::Regex;
use std::sync::LazyLock;

static BLOCKED_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)here.*spec").unwrap());

static RECIPE_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)
        ^recipes?\b          # recipe or recipes
        (?:\s*[:\-]\s*       # optional separator
        (?P<title>.*))?      # optional inline title
        $",
    )
    .unwrap()
});

/// How the first line of a paragraph is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Prose; left as is
    Descriptive,
    /// Ingredient line; rendered as a bullet
    Measurement,
    /// Drink name; rendered as a level-2 heading
    Title,
}

type LineRule = (LineKind, fn(&str, &ExtractConfig) -> bool);

/// Evaluated top to bottom, first match wins.
const LINE_RULES: [LineRule; 3] = [
    (LineKind::Descriptive, is_descriptive),
    (LineKind::Measurement, is_measurement_line),
    (LineKind::Title, any_line),
];

fn is_descriptive(line: &str, config: &ExtractConfig) -> bool {
    line.split_whitespace().count() > config.descriptive_word_threshold
}

fn is_measurement_line(line: &str, _config: &ExtractConfig) -> bool {
    is_measurement(line)
}

fn any_line(_line: &str, _config: &ExtractConfig) -> bool {
    true
}

pub fn classify_line(line: &str, config: &ExtractConfig) -> LineKind {
    LINE_RULES
        .iter()
        .find(|(_, matches)| matches(line, config))
        .map_or(LineKind::Title, |(kind, _)| *kind)
}

fn is_blocked_line(line: &str) -> bool {
    BLOCKED_LINE_RE.is_match(line)
}

/// Trimmed, non-empty lines with lead-in and "Recipe" label lines removed.
///
/// A label carrying an inline title ("Recipe - Margarita Negra") is replaced
/// by that title; bare labels are dropped until a content line appears.
fn clean_recipe_lines(para: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = para
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !is_blocked_line(line))
        .collect();

    while let Some(&first) = lines.first() {
        let Some(label) = RECIPE_LABEL_RE.captures(first) else {
            break;
        };
        let title = label
            .name("title")
            .map(|title| title.as_str().trim())
            .filter(|title| !title.is_empty());
        match title {
            Some(title) => {
                lines[0] = title;
                break;
            }
            None => {
                lines.remove(0);
            }
        }
    }

    lines
}

/// Render one paragraph as Markdown. Returns an empty string when nothing
/// survives line filtering.
pub fn format_paragraph(para: &str, config: &ExtractConfig) -> String {
    let lines = clean_recipe_lines(para);
    let Some((first, rest)) = lines.split_first() else {
        return String::new();
    };

    let head = match classify_line(first, config) {
        LineKind::Title => format!("## {first}\n"),
        LineKind::Measurement => format!("* {first}"),
        LineKind::Descriptive => first.to_string(),
    };

    std::iter::once(head)
        .chain(rest.iter().map(|line| format!("* {line}")))
        .collect::<Vec<_>>()
        .join("\n")
}
