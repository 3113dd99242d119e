//! Errors returned by masked buffer operations.

/// Errors that can occur when editing a masked buffer.
///
/// Both kinds are recoverable. The buffer is left exactly as it was before
/// the failing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskError {
    /// An offset or length argument falls outside `0..=len`
    OutOfRange { offset: usize, len: usize },
    /// The edit would break slot classes or exceed the template's capacity
    InvalidFormat,
}

impl MaskError {
    /// True for edits the user should be told about (beep, flash, ...).
    /// Out-of-range arguments are caller bugs instead.
    pub fn is_rejection(&self) -> bool {
        matches!(self, MaskError::InvalidFormat)
    }
}

impl std::fmt::Display for MaskError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaskError::OutOfRange { offset, len } => {
                write!(f, "offset {} out of range for template of length {}", offset, len)
            }
            MaskError::InvalidFormat => write!(f, "edit does not fit the template"),
        }
    }
}

impl std::error::Error for MaskError {}
