//! MaskedBuffer - a fixed-length string kept consistent with its template.
//!
//! Every mutation is planned on a copy of the content first and only
//! committed once it is known to be valid, so a rejected edit never leaves
//! a partially written buffer behind.

use std::ops::Range;
use std::sync::Arc;

use super::error::MaskError;
use super::navigation::Direction;
use super::replace::{RemovedText, ReplaceState};
use super::selection::Selection;
use super::template::{Slot, Template};

/// Editable content bound to one [`Template`], with caret, selection and
/// insert/overtype mode.
#[derive(Debug, Clone)]
pub struct MaskedBuffer {
    pub(super) template: Arc<Template>,
    /// Always exactly `template.len()` characters
    pub(super) content: Vec<char>,
    pub(super) caret: usize,
    pub(super) selection: Selection,
    pub(super) overtype: bool,
    replace_state: ReplaceState,
}

/// A validated insert, ready to be committed
#[derive(Debug)]
struct InsertPlan {
    content: Vec<char>,
    caret: usize,
}

/// Create a buffer initialized to the template's default fill
pub fn create_buffer(template: Arc<Template>) -> MaskedBuffer {
    MaskedBuffer::new(template)
}

impl MaskedBuffer {
    /// Create a buffer holding the default fill, caret on the first variable slot
    pub fn new(template: Arc<Template>) -> Self {
        let content = template.default_fill().chars().collect();
        let mut buffer = Self {
            template,
            content,
            caret: 0,
            selection: Selection::default(),
            overtype: false,
            replace_state: ReplaceState::Idle,
        };
        buffer.place_caret(0, Direction::Forward);
        buffer
    }

    /// Create a buffer and insert `text` (raw or already formatted) at offset 0
    pub fn with_content(template: Arc<Template>, text: &str) -> Result<Self, MaskError> {
        let mut buffer = Self::new(template);
        if !text.is_empty() {
            buffer.insert(0, text)?;
        }
        Ok(buffer)
    }

    pub fn template(&self) -> &Arc<Template> {
        &self.template
    }

    /// Snapshot of the formatted content
    pub fn content(&self) -> String {
        self.content.iter().collect()
    }

    pub fn chars(&self) -> &[char] {
        &self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Always false, content is never shorter than the template
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selection_range(&self) -> Range<usize> {
        self.selection.range()
    }

    pub fn is_overtype(&self) -> bool {
        self.overtype
    }

    pub fn replace_state(&self) -> &ReplaceState {
        &self.replace_state
    }

    /// Number of filled variable slots
    pub fn variable_count(&self) -> usize {
        self.variable_chars_in(0..self.content.len()).len()
    }

    /// True when every variable slot is filled
    pub fn is_complete(&self) -> bool {
        self.variable_count() == self.template.capacity()
    }

    /// The filled variable characters in order, e.g. `5551234567`
    pub fn value(&self) -> String {
        self.variable_chars_in(0..self.content.len())
            .into_iter()
            .collect()
    }

    /// Get the selected text (empty string if no selection)
    pub fn selected_text(&self) -> String {
        self.content[self.selection.range()].iter().collect()
    }

    /// Check the structural invariants of the content
    pub fn is_well_formed(&self) -> bool {
        let placeholder = self.template.placeholder();
        self.content.len() == self.template.len()
            && self
                .template
                .slots()
                .iter()
                .zip(&self.content)
                .all(|(slot, &ch)| match slot {
                    Slot::Literal(lit) => ch == *lit,
                    Slot::Variable(class) => ch == placeholder || class.matches(ch),
                })
            && self.caret <= self.content.len()
            && self.selection.end() <= self.content.len()
    }

    /// Reset to the default fill
    pub fn clear(&mut self) {
        self.content = self.template.default_fill().chars().collect();
        self.place_caret(0, Direction::Forward);
        tracing::trace!("buffer cleared");
    }
}

// =============================================================================
// Formatting primitives
// =============================================================================

impl MaskedBuffer {
    /// Keep only the characters a variable slot of the template accepts.
    pub fn extract_variable_chars(&self, raw: &str) -> String {
        raw.chars().filter(|&c| self.template.accepts(c)).collect()
    }

    /// Lay `raw` into template positions starting at `offset`.
    ///
    /// Literal positions emit their fixed character without consuming input.
    /// Stops as soon as every input character is placed, or at the end of
    /// the template.
    pub fn format(&self, offset: usize, raw: &str) -> String {
        let chars: Vec<char> = raw.chars().collect();
        layout(&self.template, offset, &chars).into_iter().collect()
    }

    /// Check if inserting `value` at `offset` would be accepted
    pub fn validate(&self, offset: usize, value: &str) -> bool {
        self.plan_insert(offset, value).is_ok()
    }

    /// Filled variable characters at positions inside `range`
    fn variable_chars_in(&self, range: Range<usize>) -> Vec<char> {
        let placeholder = self.template.placeholder();
        range
            .filter(|&pos| self.template.is_variable(pos) && self.content[pos] != placeholder)
            .map(|pos| self.content[pos])
            .collect()
    }

    fn check_range(&self, offset: usize, count: usize) -> Result<Range<usize>, MaskError> {
        let len = self.template.len();
        if offset > len {
            return Err(MaskError::OutOfRange { offset, len });
        }
        match offset.checked_add(count) {
            Some(end) if end <= len => Ok(offset..end),
            _ => Err(MaskError::OutOfRange {
                offset: offset.saturating_add(count),
                len,
            }),
        }
    }

    /// Drop a leading literal the template already places right before `offset`
    fn strip_retyped_literal<'a>(&self, offset: usize, value: &'a str) -> &'a str {
        let Some(first) = value.chars().next() else {
            return value;
        };
        match offset.checked_sub(1).and_then(|p| self.template.literal_at(p)) {
            Some(lit) if lit == first => &value[first.len_utf8()..],
            _ => value,
        }
    }

    /// `value` is already laid out against the template from `offset`
    fn is_aligned(&self, offset: usize, value: &str) -> bool {
        let placeholder = self.template.placeholder();
        value.chars().enumerate().all(|(i, ch)| {
            match self.template.slots().get(offset + i) {
                Some(Slot::Literal(lit)) => ch == *lit,
                Some(Slot::Variable(class)) => ch == placeholder || class.matches(ch),
                None => false,
            }
        })
    }

    /// Variable characters carried by `value`.
    ///
    /// Formatted text keeps its filled variable positions. Raw text may
    /// contain template literals and placeholders, which are skipped; any
    /// other character rejects the edit.
    fn incoming_chars(&self, offset: usize, value: &str) -> Result<Vec<char>, MaskError> {
        let placeholder = self.template.placeholder();
        if self.is_aligned(offset, value) {
            return Ok(value
                .chars()
                .enumerate()
                .filter(|&(i, ch)| self.template.is_variable(offset + i) && ch != placeholder)
                .map(|(_, ch)| ch)
                .collect());
        }

        let mut chars = Vec::with_capacity(value.len());
        for ch in value.chars() {
            if self.template.accepts(ch) {
                chars.push(ch);
            } else if ch != placeholder && !self.template.is_literal_char(ch) {
                return Err(MaskError::InvalidFormat);
            }
        }
        Ok(chars)
    }

    /// Variable slots from `from` onwards hold placeholders or characters of their class
    fn fits_classes(&self, content: &[char], from: usize) -> bool {
        let placeholder = self.template.placeholder();
        (from..content.len()).all(|pos| match self.template.slots()[pos] {
            Slot::Literal(lit) => content[pos] == lit,
            Slot::Variable(class) => content[pos] == placeholder || class.matches(content[pos]),
        })
    }

    fn plan_insert(&self, offset: usize, value: &str) -> Result<InsertPlan, MaskError> {
        let len = self.template.len();
        if offset > len {
            return Err(MaskError::OutOfRange { offset, len });
        }
        if value == self.template.default_fill() {
            return Ok(InsertPlan {
                content: value.chars().collect(),
                caret: 0,
            });
        }

        let value = self.strip_retyped_literal(offset, value);
        let incoming = self.incoming_chars(offset, value)?;
        let available = self.template.variable_slots_from(offset);
        if incoming.len() > available {
            return Err(MaskError::InvalidFormat);
        }

        let mut next = self.content.clone();
        if self.overtype {
            overwrite_from(&self.template, &mut next, offset, &incoming);
        } else {
            if self.variable_count() + incoming.len() > self.template.capacity() {
                return Err(MaskError::InvalidFormat);
            }
            let mut shifted = incoming.clone();
            shifted.extend(self.variable_chars_in(offset..len));
            // Tail characters pushed past the last slot are dropped
            shifted.truncate(available);
            fill_from(&self.template, &mut next, offset, &shifted);
        }

        if !self.fits_classes(&next, offset) {
            return Err(MaskError::InvalidFormat);
        }

        Ok(InsertPlan {
            content: next,
            caret: offset + layout(&self.template, offset, &incoming).len(),
        })
    }
}

// =============================================================================
// Mutations
// =============================================================================

impl MaskedBuffer {
    /// Insert raw or formatted text at `offset`.
    ///
    /// In insert mode the variable characters at and after `offset` shift
    /// right to make room; in overtype mode they are overwritten in place.
    /// Returns the new caret position.
    pub fn insert(&mut self, offset: usize, value: &str) -> Result<usize, MaskError> {
        match self.plan_insert(offset, value) {
            Ok(plan) => {
                self.content = plan.content;
                self.place_caret(plan.caret, Direction::Forward);
                debug_assert!(self.is_well_formed());
                tracing::trace!(
                    "insert {:?} at {}: {:?}, caret {}",
                    value,
                    offset,
                    self.content(),
                    self.caret
                );
                Ok(self.caret)
            }
            Err(err) => {
                if let Some(removed) = self.replace_state.removed().cloned() {
                    tracing::debug!(
                        "replace rejected, restoring {:?} at {}",
                        removed.text,
                        removed.offset
                    );
                    self.restore(removed);
                }
                tracing::debug!("insert {:?} at {} rejected: {}", value, offset, err);
                Err(err)
            }
        }
    }

    /// Remove `count` characters starting at `offset`.
    ///
    /// Literals are never removed. A removal that only covers literals is
    /// moved back onto the nearest variable slot before `offset`, so that
    /// backspacing over `)` deletes the digit in front of it. Variable
    /// characters after the removed region shift left to fill the gap.
    pub fn remove(&mut self, offset: usize, count: usize) -> Result<usize, MaskError> {
        let requested = self.check_range(offset, count)?;
        let replacing = self.replace_state.is_replacing();

        let range = if requested.clone().any(|pos| self.template.is_variable(pos)) {
            Some(requested)
        } else if count > 0 && !replacing {
            self.template.prev_variable(offset).map(|pos| pos..pos + 1)
        } else {
            None
        };

        if replacing {
            let (start, text) = match &range {
                Some(r) => (r.start, self.content[r.clone()].iter().collect()),
                None => (offset, String::new()),
            };
            self.replace_state = ReplaceState::Replacing {
                removed: Some(RemovedText {
                    offset: start,
                    text,
                    content: self.content.clone(),
                    caret: self.caret,
                    selection: self.selection,
                }),
            };
        }

        let Some(range) = range else {
            if !replacing {
                self.place_caret(offset, Direction::Forward);
            }
            return Ok(self.caret);
        };

        let shifted = if self.overtype && replacing {
            None
        } else {
            let survivors = self.variable_chars_in(range.end..self.content.len());
            let mut next = self.content.clone();
            fill_from(&self.template, &mut next, range.start, &survivors);
            // Mixed classes: a shift that moves a character into a slot of
            // another class blanks the range in place instead
            self.fits_classes(&next, range.start).then_some(next)
        };
        match shifted {
            Some(next) => self.content = next,
            None => {
                let placeholder = self.template.placeholder();
                for pos in range.clone() {
                    if self.template.is_variable(pos) {
                        self.content[pos] = placeholder;
                    }
                }
            }
        }

        if !replacing {
            self.place_caret(range.start, Direction::Forward);
        }
        debug_assert!(self.is_well_formed());
        tracing::trace!(
            "remove {}..{}: {:?}, caret {}",
            range.start,
            range.end,
            self.content(),
            self.caret
        );
        Ok(self.caret)
    }

    /// Remove `count` characters at `offset`, then insert `text` there.
    ///
    /// If the insert is rejected the buffer is restored to exactly what it
    /// was before the call.
    pub fn replace(&mut self, offset: usize, count: usize, text: &str) -> Result<usize, MaskError> {
        self.check_range(offset, count)?;
        self.replace_state = ReplaceState::Replacing { removed: None };
        let result = self
            .remove(offset, count)
            .and_then(|_| self.insert(offset, text));
        self.replace_state = ReplaceState::Idle;
        result
    }

    fn restore(&mut self, removed: RemovedText) {
        self.content = removed.content;
        self.caret = removed.caret;
        self.selection = removed.selection;
    }
}

/// Positioned characters produced by laying `chars` out from `offset`
fn layout(template: &Template, offset: usize, chars: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(chars.len());
    let mut input = chars.iter();
    let mut pending = input.next();
    let mut pos = offset;
    while let Some(&ch) = pending {
        match template.slots().get(pos) {
            None => break,
            Some(Slot::Literal(lit)) => out.push(*lit),
            Some(Slot::Variable(_)) => {
                out.push(ch);
                pending = input.next();
            }
        }
        pos += 1;
    }
    out
}

/// Rewrite `content[offset..]`: `chars` fill the variable slots in order and
/// the remaining slots fall back to the default fill.
fn fill_from(template: &Template, content: &mut [char], offset: usize, chars: &[char]) {
    let mut input = chars.iter();
    for (pos, slot) in template.slots().iter().enumerate().skip(offset) {
        content[pos] = match slot {
            Slot::Literal(lit) => *lit,
            Slot::Variable(_) => input.next().copied().unwrap_or(template.placeholder()),
        };
    }
}

/// Overwrite variable slots from `offset` with `chars`, leaving the rest alone
fn overwrite_from(template: &Template, content: &mut [char], offset: usize, chars: &[char]) {
    let mut input = chars.iter();
    for (pos, slot) in template.slots().iter().enumerate().skip(offset) {
        if slot.is_literal() {
            continue;
        }
        match input.next() {
            Some(&ch) => content[pos] = ch,
            None => break,
        }
    }
}
