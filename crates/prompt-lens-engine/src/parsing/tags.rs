//! Tag span matching.
//!
//! Pairs each closing tag with the nearest preceding opening tag of the same
//! name in the unconsumed input. There is no stack of open tags: differently
//! named tags that interleave without nesting pair by proximity alone.
//!
//! One exception keeps tool listings whole: a `</function>` that closes inside
//! an open `<functions>` element is matched as part of that element, so the
//! pair reported is the enclosing `functions` one.

use std::sync::OnceLock;

use regex::Regex;

use super::span::Span;

const FUNCTION_TAG: &str = "function";

fn functions_opening_regex() -> &'static Regex {
    static FUNCTIONS_OPENING_REGEX: OnceLock<Regex> = OnceLock::new();
    FUNCTIONS_OPENING_REGEX
        .get_or_init(|| Regex::new(r"(?i)<(functions)>").expect("Invalid functions tag regex"))
}

fn functions_tag_regex() -> &'static Regex {
    static FUNCTIONS_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    FUNCTIONS_TAG_REGEX
        .get_or_init(|| Regex::new(r"(?i)<(/?)functions>").expect("Invalid functions tag regex"))
}

fn closing_tag_regex() -> &'static Regex {
    static CLOSING_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    CLOSING_TAG_REGEX.get_or_init(|| {
        Regex::new(r"</([A-Za-z][A-Za-z0-9_-]*)>").expect("Invalid closing tag regex")
    })
}

/// The outcome of scanning for the next closing tag.
///
/// Spans are relative to whatever string was scanned; [`TagSpans`] reports
/// them as absolute offsets into its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagMatch<'a> {
    /// A closing tag with no opening tag of the same name before it.
    /// `span` runs from the scan start through the end of the closing tag.
    Unmatched { span: Span },
    /// A closing tag paired with the nearest preceding opening tag.
    Paired {
        name: &'a str,
        /// Text between the scan start and the opening tag. May be empty.
        leading: Span,
        /// From the opening tag through the closing tag, inclusive.
        element: Span,
        /// Between the two tags, exclusive.
        inner: Span,
    },
}

impl TagMatch<'_> {
    /// End of the consumed region; scanning resumes here.
    pub fn end(&self) -> usize {
        match self {
            TagMatch::Unmatched { span } => span.end,
            TagMatch::Paired { element, .. } => element.end,
        }
    }

    fn offset(self, base: usize) -> Self {
        match self {
            TagMatch::Unmatched { span } => TagMatch::Unmatched {
                span: span.offset(base),
            },
            TagMatch::Paired {
                name,
                leading,
                element,
                inner,
            } => TagMatch::Paired {
                name,
                leading: leading.offset(base),
                element: element.offset(base),
                inner: inner.offset(base),
            },
        }
    }
}

/// Finds the next closing tag in `rest` and pairs it.
///
/// Returns `None` when `rest` holds no closing tag at all.
pub fn next_tag_span(rest: &str) -> Option<TagMatch<'_>> {
    let caps = closing_tag_regex().captures(rest)?;
    let close = caps.get(0)?;
    let name = caps.get(1)?.as_str();

    if name == FUNCTION_TAG
        && let Some(enclosing) = enclosing_functions(rest, close.start())
    {
        return Some(enclosing);
    }

    let opening = format!("<{name}>");
    let found = match rest[..close.start()].rfind(&opening) {
        Some(open_start) => TagMatch::Paired {
            name,
            leading: Span::new(0, open_start),
            element: Span::new(open_start, close.end()),
            inner: Span::new(open_start + opening.len(), close.start()),
        },
        None => TagMatch::Unmatched {
            span: Span::new(0, close.end()),
        },
    };
    Some(found)
}

/// Pairs the nearest `<functions>` before `close_start` with the first
/// matching `</functions>` after it, if both exist.
///
/// Any `<functions>` opener met before that closer belongs to the closer
/// instead, so the search gives up there. The forward scan never passes
/// the next `functions` opener, so no stretch of input is scanned twice.
fn enclosing_functions(rest: &str, close_start: usize) -> Option<TagMatch<'_>> {
    let open = functions_opening_regex()
        .captures_iter(&rest[..close_start])
        .last()?;
    let open_tag = open.get(0)?;
    let name = open.get(1)?.as_str();

    let closing = format!("</{name}>");
    let mut close_at = None;
    for caps in functions_tag_regex().captures_iter(&rest[close_start..]) {
        let tag = caps.get(0)?;
        if caps.get(1).is_none_or(|slash| slash.is_empty()) {
            // another opener: the nearest one wins
            return None;
        }
        if tag.as_str() == closing {
            close_at = Some(close_start + tag.start());
            break;
        }
    }
    let close_at = close_at?;

    Some(TagMatch::Paired {
        name,
        leading: Span::new(0, open_tag.start()),
        element: Span::new(open_tag.start(), close_at + closing.len()),
        inner: Span::new(open_tag.end(), close_at),
    })
}

/// Iterates over successive tag matches of a source string.
///
/// Each match consumes input up to the end of its closing tag; whatever is
/// left when the iterator is exhausted is available via [`TagSpans::rest`].
#[derive(Debug, Clone)]
pub struct TagSpans<'a> {
    source: &'a str,
    cursor: usize,
}

impl<'a> TagSpans<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, cursor: 0 }
    }

    /// The unconsumed suffix as an absolute span.
    pub fn rest(&self) -> Span {
        Span::new(self.cursor, self.source.len())
    }
}

impl<'a> Iterator for TagSpans<'a> {
    type Item = TagMatch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let source = self.source;
        let found = next_tag_span(&source[self.cursor..])?.offset(self.cursor);
        self.cursor = found.end();
        Some(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn no_closing_tag_means_no_match() {
        assert_eq!(next_tag_span("plain <open> text"), None);
        assert_eq!(next_tag_span(""), None);
    }

    #[test]
    fn pairs_simple_element() {
        let m = next_tag_span("A<system>B</system>C").unwrap();
        assert_eq!(
            m,
            TagMatch::Paired {
                name: "system",
                leading: Span::new(0, 1),
                element: Span::new(1, 19),
                inner: Span::new(9, 10),
            }
        );
        assert_eq!(m.end(), 19);
    }

    #[test]
    fn closing_tag_pairs_with_nearest_opening() {
        let input = "<a>1<a>2</a>";
        let Some(TagMatch::Paired {
            leading, element, ..
        }) = next_tag_span(input)
        else {
            panic!("expected a paired match");
        };
        assert_eq!(leading.slice(input), "<a>1");
        assert_eq!(element.slice(input), "<a>2</a>");
    }

    #[test]
    fn unmatched_closing_tag_consumes_prefix() {
        let input = "stray</b> then <b>x</b>";
        let m = next_tag_span(input).unwrap();
        assert_eq!(
            m,
            TagMatch::Unmatched {
                span: Span::new(0, 9)
            }
        );
    }

    #[test]
    fn interleaved_names_pair_by_proximity() {
        // `</a>` is the first closing tag; its nearest `<a>` lies before `<b>`
        let input = "<a><b></a></b>";
        let Some(TagMatch::Paired { name, element, .. }) = next_tag_span(input) else {
            panic!("expected a paired match");
        };
        assert_eq!(name, "a");
        assert_eq!(element.slice(input), "<a><b></a>");
    }

    #[rstest]
    #[case("</1abc>")]
    #[case("</ system>")]
    #[case("</a b>")]
    #[case("</>")]
    fn rejects_invalid_tag_names(#[case] input: &str) {
        assert_eq!(next_tag_span(input), None);
    }

    #[rstest]
    #[case("<tool_use>x</tool_use>", "tool_use")]
    #[case("<search-result>x</search-result>", "search-result")]
    #[case("<H1>x</H1>", "H1")]
    fn accepts_word_and_dash_names(#[case] input: &str, #[case] expected: &str) {
        let Some(TagMatch::Paired { name, .. }) = next_tag_span(input) else {
            panic!("expected a paired match for {input}");
        };
        assert_eq!(name, expected);
    }

    #[test]
    fn opening_tag_must_match_case_exactly() {
        let m = next_tag_span("<System>x</system>").unwrap();
        assert!(matches!(m, TagMatch::Unmatched { .. }));
    }

    #[test]
    fn function_close_inside_functions_reports_the_container() {
        let input = "x<functions><function>f</function></functions>y";
        let Some(TagMatch::Paired {
            name,
            leading,
            element,
            inner,
        }) = next_tag_span(input)
        else {
            panic!("expected a paired match");
        };
        assert_eq!(name, "functions");
        assert_eq!(leading.slice(input), "x");
        assert_eq!(
            element.slice(input),
            "<functions><function>f</function></functions>"
        );
        assert_eq!(inner.slice(input), "<function>f</function>");
    }

    #[test]
    fn function_close_without_functions_closer_pairs_normally() {
        let input = "<functions><function>f</function>";
        let Some(TagMatch::Paired { name, element, .. }) = next_tag_span(input) else {
            panic!("expected a paired match");
        };
        assert_eq!(name, "function");
        assert_eq!(element.slice(input), "<function>f</function>");
    }

    #[test]
    fn later_functions_opener_claims_the_closer() {
        let input = "<functions><function>a</function>\n<b>x</b>\n<functions></functions>";
        let Some(TagMatch::Paired {
            name,
            leading,
            element,
            ..
        }) = next_tag_span(input)
        else {
            panic!("expected a paired match");
        };
        assert_eq!(name, "function");
        assert_eq!(leading.slice(input), "<functions>");
        assert_eq!(element.slice(input), "<function>a</function>");
    }

    #[test]
    fn differently_cased_closer_is_skipped() {
        let input = "<functions><function>f</function></FUNCTIONS></functions>";
        let Some(TagMatch::Paired { name, element, .. }) = next_tag_span(input) else {
            panic!("expected a paired match");
        };
        assert_eq!(name, "functions");
        assert_eq!(element.slice(input), input);
    }

    #[test]
    fn lone_function_element_pairs_normally() {
        let input = "<function>f</function>";
        let Some(TagMatch::Paired { name, .. }) = next_tag_span(input) else {
            panic!("expected a paired match");
        };
        assert_eq!(name, "function");
    }

    #[test]
    fn functions_opening_matches_any_case() {
        let input = "<FUNCTIONS><function>f</function></FUNCTIONS>";
        let Some(TagMatch::Paired { name, element, .. }) = next_tag_span(input) else {
            panic!("expected a paired match");
        };
        assert_eq!(name, "FUNCTIONS");
        assert_eq!(element.end, input.len());
    }

    #[test]
    fn iterator_reports_absolute_spans_and_rest() {
        let input = "<a>1</a>mid<b>2</b>tail";
        let mut spans = TagSpans::new(input);

        let first = spans.next().unwrap();
        assert!(matches!(first, TagMatch::Paired { name: "a", .. }));

        let Some(TagMatch::Paired {
            leading, element, ..
        }) = spans.next()
        else {
            panic!("expected second paired match");
        };
        assert_eq!(leading.slice(input), "mid");
        assert_eq!(element.slice(input), "<b>2</b>");

        assert_eq!(spans.next(), None);
        assert_eq!(spans.rest().slice(input), "tail");
    }
}
