use serde::Serialize;

/// A segmented block of prompt content.
///
/// `Tagged` and `FunctionsContainer` keep the opening and closing markers in
/// `content`, so concatenating [`ContentBlock::content`] over a sequence
/// reproduces the segmented input byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum ContentBlock {
    /// A run of content with no recognized enclosing tag.
    Text { content: String },
    /// A `<name>...</name>` pair. `content` is the full span including both tags.
    Tagged { tag_name: String, content: String },
    /// A `functions` pair whose interior held at least one `<function>` entry.
    FunctionsContainer {
        /// The matched name with its original casing.
        tag_name: String,
        /// Full span including both tags.
        content: String,
        /// Interior decomposition, tags stripped.
        children: Vec<FunctionChild>,
    },
}

impl ContentBlock {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
        }
    }

    pub fn tagged(tag_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Tagged {
            tag_name: tag_name.into(),
            content: content.into(),
        }
    }

    /// The raw source slice this block was cut from.
    pub fn content(&self) -> &str {
        match self {
            Self::Text { content }
            | Self::Tagged { content, .. }
            | Self::FunctionsContainer { content, .. } => content,
        }
    }

    /// The tag name for tagged variants, `None` for plain text.
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Self::Text { .. } => None,
            Self::Tagged { tag_name, .. } | Self::FunctionsContainer { tag_name, .. } => {
                Some(tag_name)
            }
        }
    }

    /// True when the content is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.content().trim().is_empty()
    }
}

/// One entry inside a [`ContentBlock::FunctionsContainer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum FunctionChild {
    /// Interior text between `<function>` entries.
    Text { content: String },
    /// The inner content of one `<function>...</function>` pair.
    Function { content: String },
}

impl FunctionChild {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
        }
    }

    pub fn function(content: impl Into<String>) -> Self {
        Self::Function {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Self::Text { content } | Self::Function { content } => content,
        }
    }
}
