pub mod catalog;
pub mod prompt_file;

pub use catalog::{Catalog, Category};
pub use prompt_file::{FileKind, PromptFile};
