use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Display language label used to pick a highlighter for a content fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    JavaScript,
    Python,
    Json,
    Html,
    Cpp,
    Markdown,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::Python => "python",
            Language::Json => "json",
            Language::Html => "html",
            Language::Cpp => "cpp",
            Language::Markdown => "markdown",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn json_object_regex() -> &'static Regex {
    static JSON_OBJECT_REGEX: OnceLock<Regex> = OnceLock::new();
    JSON_OBJECT_REGEX.get_or_init(|| {
        Regex::new(r#"(?s)\{.*"[^"]+"\s*:.*\}"#).expect("Invalid JSON object regex")
    })
}

/// Classifies `content` with substring heuristics, first match wins.
///
/// The checks are deliberately loose: any mention of `let` or `var` anywhere
/// makes the fragment JavaScript, including ordinary English prose.
pub fn sniff_language(content: &str) -> Language {
    let has = |needle: &str| content.contains(needle);

    if ["function", "const", "let", "var"].into_iter().any(has) {
        Language::JavaScript
    } else if has("def ") || (has("import ") && has("print(")) {
        Language::Python
    } else if has("```json") || json_object_regex().is_match(content) {
        Language::Json
    } else if has("<html") || has("<!DOCTYPE") {
        Language::Html
    } else if has("#include") || has("int main(") {
        Language::Cpp
    } else {
        Language::Markdown
    }
}
