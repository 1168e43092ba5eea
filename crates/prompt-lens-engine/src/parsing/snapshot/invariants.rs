use crate::parsing::types::ContentBlock;

/// Validates segmenter output invariants.
///
/// Asserts that:
/// - The sequence is never empty
/// - Block contents concatenate back to `source` exactly
/// - Tagged blocks begin with `<name>` and end with `</name>`
/// - Functions containers always carry at least one child
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(source: &str, blocks: &[ContentBlock]) {
    assert!(!blocks.is_empty(), "segmentation produced no blocks");

    let rebuilt: String = blocks.iter().map(ContentBlock::content).collect();
    assert_eq!(
        rebuilt, source,
        "block contents do not reconstruct the source"
    );

    for b in blocks {
        if let Some(name) = b.tag_name() {
            let open = format!("<{name}>");
            let close = format!("</{name}>");
            assert!(
                b.content().starts_with(&open) && b.content().ends_with(&close),
                "tagged content lost its markers: {:?}",
                b.content()
            );
        }
        if let ContentBlock::FunctionsContainer { children, .. } = b {
            assert!(
                !children.is_empty(),
                "functions container without children: {:?}",
                b.content()
            );
        }
    }
}
