pub mod io;
pub mod models;
pub mod parsing;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use models::*;
pub use parsing::{ContentBlock, FunctionChild, Language, segment, sniff_language};
pub use render::{BorderCategory, RenderNode, ViewMode, render_blocks, render_content};
