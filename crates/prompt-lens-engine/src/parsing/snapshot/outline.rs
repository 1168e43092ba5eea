use std::fmt::Write;

use crate::parsing::types::{ContentBlock, FunctionChild};

const PREVIEW_CHARS: usize = 60;

/// Renders blocks as one line per node, children indented beneath their
/// container. Content is shown escaped and truncated for readability.
pub fn outline(blocks: &[ContentBlock]) -> String {
    let mut out = String::new();
    for b in blocks {
        match b {
            ContentBlock::Text { content } => {
                let _ = writeln!(out, "Text {}", preview(content));
            }
            ContentBlock::Tagged { tag_name, content } => {
                let _ = writeln!(out, "Tagged({tag_name}) {}", preview(content));
            }
            ContentBlock::FunctionsContainer {
                tag_name,
                content,
                children,
            } => {
                let _ = writeln!(out, "Functions({tag_name}) {}", preview(content));
                for child in children {
                    let label = match child {
                        FunctionChild::Text { .. } => "Text",
                        FunctionChild::Function { .. } => "Function",
                    };
                    let _ = writeln!(out, "  {label} {}", preview(child.content()));
                }
            }
        }
    }
    out
}

fn preview(s: &str) -> String {
    if s.chars().count() <= PREVIEW_CHARS {
        return format!("{s:?}");
    }
    let head: String = s.chars().take(PREVIEW_CHARS).collect();
    format!("{head:?}…")
}
