//! Caret and selection movement over a masked buffer.
//!
//! Insert mode keeps a zero-width caret that never rests in front of a
//! literal. Overtype mode keeps a one-character selection over the variable
//! slot the next keystroke will overwrite.

use super::buffer::MaskedBuffer;
use super::messages::NavIntent;
use super::selection::Selection;

/// Direction of travel, decides which way literals are skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

// =============================================================================
// Placement rules
// =============================================================================

impl MaskedBuffer {
    /// Insert-mode caret position for `pos`: skips over literals in the
    /// direction of travel, turning around at the start of the template.
    pub fn settle_caret(&self, pos: usize, direction: Direction) -> usize {
        let start = pos.min(self.template.len());
        let mut p = start;
        match direction {
            Direction::Forward => {
                while self.template.is_literal(p) {
                    p += 1;
                }
            }
            Direction::Backward => {
                while self.template.is_literal(p) {
                    if p == 0 {
                        return self.settle_caret(start, Direction::Forward);
                    }
                    p -= 1;
                }
            }
        }
        p
    }

    /// Overtype-mode span for `pos`: the nearest variable slot in the
    /// direction of travel, or a collapsed caret at the end when there is
    /// no variable slot left.
    pub fn overtype_span(&self, pos: usize, direction: Direction) -> (usize, Selection) {
        let len = self.template.len();
        let found = match direction {
            Direction::Forward => self.template.next_variable(pos),
            Direction::Backward => self
                .template
                .prev_variable(pos.saturating_add(1))
                .or_else(|| self.template.next_variable(pos)),
        };
        match found {
            Some(slot) => (slot, Selection::single(slot)),
            None => (len, Selection::collapsed(len)),
        }
    }

    /// Move the caret to `pos` using the placement rule of the current mode
    pub(super) fn place_caret(&mut self, pos: usize, direction: Direction) {
        if self.overtype {
            let (caret, selection) = self.overtype_span(pos, direction);
            self.caret = caret;
            self.selection = selection;
        } else {
            self.caret = self.settle_caret(pos, direction);
            self.selection = Selection::collapsed(self.caret);
        }
    }

    /// True when the user has selected something; the one-slot span of
    /// overtype mode does not count.
    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
            && !(self.overtype && self.selection == Selection::single(self.caret))
    }
}

// =============================================================================
// Movement Operations
// =============================================================================

impl MaskedBuffer {
    /// Apply a navigation intent, returning `(caret, selection_start, selection_end)`
    pub fn navigate(&mut self, intent: NavIntent) -> (usize, usize, usize) {
        match intent {
            NavIntent::Left => self.move_left(),
            NavIntent::Right => self.move_right(),
            NavIntent::Home => self.move_home(),
            NavIntent::End => self.move_end(),
            NavIntent::SelectAll => self.select_all(),
            NavIntent::ClickAt(pos) => self.click_at(pos),
            NavIntent::DoubleClickAt(pos) => self.double_click_at(pos),
        }
        tracing::trace!(
            "navigate {:?}: caret {}, selection {:?}",
            intent,
            self.caret,
            self.selection.range()
        );
        (self.caret, self.selection.start(), self.selection.end())
    }

    /// Move one position left; a selection collapses to its start
    pub fn move_left(&mut self) {
        if self.has_selection() {
            let start = self.selection.start();
            self.place_caret(start, Direction::Forward);
            return;
        }
        match self.caret.checked_sub(1) {
            Some(pos) => self.place_caret(pos, Direction::Backward),
            None => self.place_caret(0, Direction::Forward),
        }
    }

    /// Move one position right; a selection collapses to its end
    pub fn move_right(&mut self) {
        if self.has_selection() {
            let end = self.selection.end();
            self.place_caret(end, Direction::Forward);
            return;
        }
        let next = (self.caret + 1).min(self.template.len());
        self.place_caret(next, Direction::Forward);
    }

    /// Move to the first variable slot
    pub fn move_home(&mut self) {
        self.place_caret(0, Direction::Forward);
    }

    /// Move to the end (overtype: onto the last variable slot)
    pub fn move_end(&mut self) {
        let len = self.template.len();
        self.place_caret(len, Direction::Backward);
    }

    /// Select from the first variable slot to the end
    pub fn select_all(&mut self) {
        let len = self.template.len();
        let start = self.template.first_variable().unwrap_or(0);
        self.selection = Selection::new(start, len);
        self.caret = len;
    }

    /// Single click.
    ///
    /// Clicking inside a selection that reaches into the leading literals
    /// re-anchors it on the first variable slot. Any other click collapses
    /// to a caret (or a one-slot span in overtype mode).
    pub fn click_at(&mut self, pos: usize) {
        let len = self.template.len();
        let pos = pos.min(len);
        let first = self.template.first_variable().unwrap_or(0);
        let sel = self.selection;
        if self.has_selection() && sel.start() <= first && pos >= sel.start() && pos <= sel.end() {
            self.selection = Selection::new(first, sel.end());
            self.caret = sel.end();
            return;
        }
        self.place_caret(pos, Direction::Forward);
    }

    /// Double click always collapses onto `pos`
    pub fn double_click_at(&mut self, pos: usize) {
        let pos = pos.min(self.template.len());
        self.place_caret(pos, Direction::Forward);
    }

    /// Flip between insert and overtype mode, keeping the logical position.
    /// Returns true when overtype mode is now enabled.
    pub fn toggle_overtype(&mut self) -> bool {
        self.set_overtype(!self.overtype);
        self.overtype
    }

    pub fn set_overtype(&mut self, enabled: bool) {
        let anchor = if self.overtype {
            self.selection.start()
        } else {
            self.caret
        };
        self.overtype = enabled;
        self.place_caret(anchor, Direction::Forward);
    }
}
