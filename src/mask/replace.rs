//! Bookkeeping for an in-flight replace (remove followed by insert).

use super::selection::Selection;

/// Text taken out by the remove half of a replace, plus everything needed to
/// put the buffer back if the insert half is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedText {
    /// Offset the removal started at (after literal adjustment)
    pub offset: usize,
    /// The removed characters, literals included
    pub text: String,
    pub(crate) content: Vec<char>,
    pub(crate) caret: usize,
    pub(crate) selection: Selection,
}

/// Whether a replace is in progress.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ReplaceState {
    #[default]
    Idle,
    /// Set by `replace` before the remove step. `removed` is filled once the
    /// remove has captured what it took out.
    Replacing { removed: Option<RemovedText> },
}

impl ReplaceState {
    pub fn is_replacing(&self) -> bool {
        matches!(self, ReplaceState::Replacing { .. })
    }

    /// Text captured by the remove step, if any
    pub fn removed(&self) -> Option<&RemovedText> {
        match self {
            ReplaceState::Replacing { removed } => removed.as_ref(),
            ReplaceState::Idle => None,
        }
    }
}
