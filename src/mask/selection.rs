//! Selection over buffer offsets.

use std::ops::Range;

/// A selection with anchor (start point) and head (moving point).
/// Offsets are character positions in `0..=len`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    /// Where the selection started (fixed point)
    pub anchor: usize,
    /// Where the selection ends up (moving point)
    pub head: usize,
}

impl Selection {
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// Create a collapsed selection (caret with no selection)
    pub fn collapsed(pos: usize) -> Self {
        Self {
            anchor: pos,
            head: pos,
        }
    }

    /// One-character selection covering `pos`
    pub fn single(pos: usize) -> Self {
        Self {
            anchor: pos,
            head: pos + 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    pub fn start(&self) -> usize {
        self.anchor.min(self.head)
    }

    pub fn end(&self) -> usize {
        self.anchor.max(self.head)
    }

    /// Number of selected characters
    pub fn len(&self) -> usize {
        self.end() - self.start()
    }

    pub fn range(&self) -> Range<usize> {
        self.start()..self.end()
    }

    /// Check if selection is reversed (head before anchor)
    pub fn is_reversed(&self) -> bool {
        self.head < self.anchor
    }

    /// Check if a position is within this selection (end is exclusive)
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start() && pos < self.end()
    }
}
