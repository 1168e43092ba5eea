/// A byte range `[start, end)` into the segmented input.
///
/// Every block produced by [`segment`](crate::parsing::segment) covers one
/// span, and the spans of a block sequence tile the input without gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Shifts both ends by `base`, turning a suffix-local span into an absolute one.
    #[must_use]
    pub fn offset(self, base: usize) -> Self {
        Self {
            start: self.start + base,
            end: self.end + base,
        }
    }

    /// Slices `s` with this span.
    ///
    /// # Panics
    /// Panics if the span is out of bounds or not on a char boundary.
    pub fn slice(self, s: &str) -> &str {
        &s[self.start..self.end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_and_empty() {
        assert_eq!(Span::new(3, 7).len(), 4);
        assert!(Span::new(5, 5).is_empty());
        // Inverted spans saturate to zero rather than underflowing
        assert!(Span::new(7, 3).is_empty());
    }

    #[test]
    fn offset_moves_both_ends() {
        assert_eq!(Span::new(1, 4).offset(10), Span::new(11, 14));
    }

    #[test]
    fn slice_reads_the_range() {
        assert_eq!(Span::new(1, 4).slice("<a>b"), "a>b");
    }
}
