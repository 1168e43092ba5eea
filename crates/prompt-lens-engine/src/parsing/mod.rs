//! # Prompt Segmentation
//!
//! Splits free-form prompt text containing ad-hoc pseudo-tags (`<system>`,
//! `<example>`, `<functions>`, ...) into an ordered sequence of typed blocks.
//!
//! ## Modules
//!
//! - **`tags`**: `next_tag_span()` pairs the next closing tag with the nearest
//!   preceding opening tag of the same name
//! - **`functions`**: `segment_functions()` splits a `functions` interior into
//!   `function` entries and interstitial text
//! - **`assemble`**: `segment()` drives the tag matcher over the whole input
//! - **`language`**: `sniff_language()` picks a display language label
//! - **`snapshot`**: outline and invariant helpers for tests
//!
//! ## Lossless Output
//!
//! Tagged blocks keep their markers, so concatenating the content of every
//! block reproduces the input. Blank text is never dropped here; skipping it
//! is a rendering concern.

pub mod assemble;
pub mod functions;
pub mod language;
pub mod snapshot;
pub mod span;
pub mod tags;
pub mod types;

pub use assemble::segment;
pub use functions::segment_functions;
pub use language::{Language, sniff_language};
pub use span::Span;
pub use tags::{TagMatch, TagSpans, next_tag_span};
pub use types::{ContentBlock, FunctionChild};
