use relative_path::{RelativePath, RelativePathBuf};

/// Broad kind of a prompt file, derived from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Prompt,
    Tool,
    Model,
}

impl FileKind {
    /// Classifies a file name: `tool` anywhere wins over `model`, otherwise prompt.
    pub fn from_file_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        if lower.contains("tool") {
            FileKind::Tool
        } else if lower.contains("model") {
            FileKind::Model
        } else {
            FileKind::Prompt
        }
    }
}

/// Represents a prompt file inside a category folder
#[derive(Debug, Clone, PartialEq)]
pub struct PromptFile {
    name: String,
    relative_path: RelativePathBuf,
    kind: FileKind,
}

impl PromptFile {
    /// Create a new PromptFile for `name` inside the category `folder`
    pub fn new(folder: &str, name: impl Into<String>) -> Self {
        let name = name.into();
        let relative_path = RelativePathBuf::from(folder).join(&name);
        let kind = FileKind::from_file_name(&name);

        Self {
            name,
            relative_path,
            kind,
        }
    }

    /// Get the file name, which is also its lookup key within the category
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the path relative to the prompts root
    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    pub fn kind(&self) -> FileKind {
        self.kind
    }
}
