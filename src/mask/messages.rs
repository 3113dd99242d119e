//! Message types forwarded by a text widget to a masked buffer.

/// Caret and selection movement intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    /// Move one position left
    Left,
    /// Move one position right
    Right,
    /// Move to the first variable slot
    Home,
    /// Move to the end
    End,
    /// Select every variable position
    SelectAll,
    /// Single mouse click at a character offset
    ClickAt(usize),
    /// Double mouse click at a character offset
    DoubleClickAt(usize),
}

/// Unified message type for editing a masked buffer.
#[derive(Debug, Clone, PartialEq)]
pub enum MaskEditMsg {
    // === Movement ===
    Navigate(NavIntent),

    // === Insertion ===
    /// Insert a single typed character
    InsertChar(char),
    /// Insert a string (e.g., from completion)
    InsertText(String),
    /// Paste text from clipboard
    Paste(String),

    // === Deletion ===
    /// Delete character before caret (Backspace)
    DeleteBackward,
    /// Delete character after caret (Delete)
    DeleteForward,
    /// Reset to the template's default fill
    Clear,

    // === Mode ===
    ToggleOvertype,
}

impl MaskEditMsg {
    /// Check if this message modifies the buffer
    pub fn is_editing(&self) -> bool {
        matches!(
            self,
            MaskEditMsg::InsertChar(_)
                | MaskEditMsg::InsertText(_)
                | MaskEditMsg::Paste(_)
                | MaskEditMsg::DeleteBackward
                | MaskEditMsg::DeleteForward
                | MaskEditMsg::Clear
        )
    }

    /// Check if this message is a movement operation
    pub fn is_movement(&self) -> bool {
        matches!(self, MaskEditMsg::Navigate(_))
    }

    /// Check if this message is a selection operation
    pub fn is_selection(&self) -> bool {
        matches!(
            self,
            MaskEditMsg::Navigate(NavIntent::SelectAll)
                | MaskEditMsg::Navigate(NavIntent::ClickAt(_))
        )
    }
}
