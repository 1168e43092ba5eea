use super::{
    functions::segment_functions,
    tags::{TagMatch, TagSpans},
    types::ContentBlock,
};

const FUNCTIONS_TAG: &str = "functions";

/// Segments prompt text into an ordered sequence of blocks.
///
/// Total over all inputs: malformed or unmatched markup degrades to `Text`
/// blocks. The concatenated [`ContentBlock::content`] of the result always
/// equals `content`, and an input with nothing to segment (including the
/// empty string) yields exactly one `Text` block.
pub fn segment(content: &str) -> Vec<ContentBlock> {
    let mut blocks = Vec::new();
    let mut spans = TagSpans::new(content);

    for found in spans.by_ref() {
        match found {
            TagMatch::Unmatched { span } => blocks.push(ContentBlock::text(span.slice(content))),
            TagMatch::Paired {
                name,
                leading,
                element,
                inner,
            } => {
                if !leading.is_empty() {
                    blocks.push(ContentBlock::text(leading.slice(content)));
                }
                blocks.push(element_block(
                    name,
                    element.slice(content),
                    inner.slice(content),
                ));
            }
        }
    }

    let rest = spans.rest();
    if !rest.is_empty() || blocks.is_empty() {
        blocks.push(ContentBlock::text(rest.slice(content)));
    }
    blocks
}

fn element_block(name: &str, element: &str, inner: &str) -> ContentBlock {
    if name.eq_ignore_ascii_case(FUNCTIONS_TAG) {
        let children = segment_functions(inner);
        if !children.is_empty() {
            return ContentBlock::FunctionsContainer {
                tag_name: name.to_string(),
                content: element.to_string(),
                children,
            };
        }
    }
    ContentBlock::tagged(name, element)
}
