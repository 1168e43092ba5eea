//! # Render Plan
//!
//! Turns segmented blocks into a UI-agnostic tree of render nodes. The plan
//! decides what is shown and how it is labelled; painting it is left to the
//! front end.

pub mod border;

pub use border::BorderCategory;

use serde::Serialize;

use crate::parsing::{ContentBlock, FunctionChild, Language, segment, sniff_language};

/// Whether content is shown segmented or as a single raw listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Styled,
    Raw,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Styled => ViewMode::Raw,
            ViewMode::Raw => ViewMode::Styled,
        }
    }
}

/// One renderable element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum RenderNode {
    /// Highlighted code for untagged text.
    Code { language: Language, content: String },
    /// A framed section for a tagged block; `content` includes the tags.
    Bordered {
        tag_name: String,
        border: BorderCategory,
        language: Language,
        content: String,
    },
    /// A functions container: open and close markers around its children.
    Functions {
        tag_name: String,
        children: Vec<RenderNode>,
    },
    /// One function entry, tags excluded.
    Function { language: Language, content: String },
}

/// Builds the render plan for a block sequence.
///
/// Blank text, at the top level or between function entries, produces no node.
pub fn render_blocks(blocks: &[ContentBlock]) -> Vec<RenderNode> {
    blocks
        .iter()
        .filter_map(|b| match b {
            ContentBlock::Text { content } => code_node(content),
            ContentBlock::Tagged { tag_name, content } => Some(RenderNode::Bordered {
                tag_name: tag_name.clone(),
                border: BorderCategory::for_tag(tag_name),
                language: sniff_language(content),
                content: content.clone(),
            }),
            ContentBlock::FunctionsContainer {
                tag_name, children, ..
            } => Some(RenderNode::Functions {
                tag_name: tag_name.clone(),
                children: children.iter().filter_map(function_child_node).collect(),
            }),
        })
        .collect()
}

/// Renders raw file content in the given view mode.
pub fn render_content(content: &str, mode: ViewMode) -> Vec<RenderNode> {
    match mode {
        ViewMode::Styled => render_blocks(&segment(content)),
        ViewMode::Raw => code_node(content).into_iter().collect(),
    }
}

fn code_node(content: &str) -> Option<RenderNode> {
    if content.trim().is_empty() {
        return None;
    }
    Some(RenderNode::Code {
        language: sniff_language(content),
        content: content.to_string(),
    })
}

fn function_child_node(child: &FunctionChild) -> Option<RenderNode> {
    match child {
        FunctionChild::Text { content } => code_node(content),
        FunctionChild::Function { content } => Some(RenderNode::Function {
            language: sniff_language(content),
            content: content.clone(),
        }),
    }
}
