use serde::Serialize;

/// Visual family of a tagged block, chosen from its tag name at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BorderCategory {
    Tool,
    Instruction,
    Example,
    User,
    Assistant,
    Default,
}

impl BorderCategory {
    /// Looks up the category for a tag name, ignoring ASCII case.
    pub fn for_tag(tag_name: &str) -> Self {
        match tag_name.to_ascii_lowercase().as_str() {
            "function" | "functions" | "tool" | "tools" => BorderCategory::Tool,
            "system" | "instructions" => BorderCategory::Instruction,
            "example" | "examples" => BorderCategory::Example,
            "user" | "human" => BorderCategory::User,
            "assistant" | "ai" | "bot" => BorderCategory::Assistant,
            _ => BorderCategory::Default,
        }
    }
}
