//! # Snapshot Testing Support
//!
//! Utilities for testing the segmenter via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`outline`**: Renders a block sequence as a stable, indented text outline
//!   for `insta` inline snapshots
//! - **`invariants`**: Runtime checks for segmenter correctness (full coverage,
//!   tag markers retained in tagged content, no empty containers)

pub mod invariants;
pub mod outline;

pub use invariants::check as invariants;
pub use outline::outline;
