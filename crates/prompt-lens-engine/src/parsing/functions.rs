use std::sync::OnceLock;

use regex::Regex;

use super::types::FunctionChild;

fn function_regex() -> &'static Regex {
    static FUNCTION_REGEX: OnceLock<Regex> = OnceLock::new();
    FUNCTION_REGEX
        .get_or_init(|| Regex::new(r"(?s)<function>(.*?)</function>").expect("Invalid function regex"))
}

/// Splits the interior of a `functions` element into its entries.
///
/// Scans left to right for `<function>...</function>`; the first closing tag
/// after an opening one always ends the entry. Blank text between entries is
/// dropped, other text is kept verbatim. Returns an empty vector when the
/// interior contains no complete entry.
pub fn segment_functions(interior: &str) -> Vec<FunctionChild> {
    let mut children = Vec::new();
    let mut last_end = 0;

    fn push_text(children: &mut Vec<FunctionChild>, text: &str) {
        if !text.trim().is_empty() {
            children.push(FunctionChild::text(text));
        }
    }

    for caps in function_regex().captures_iter(interior) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        push_text(&mut children, &interior[last_end..whole.start()]);
        children.push(FunctionChild::function(inner.as_str()));
        last_end = whole.end();
    }

    if children.is_empty() {
        return children;
    }
    push_text(&mut children, &interior[last_end..]);
    children
}
