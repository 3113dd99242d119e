//! Dispatch of widget messages onto masked buffer operations.

use super::buffer::MaskedBuffer;
use super::error::MaskError;
use super::messages::MaskEditMsg;
use crate::tracing::BufferSnapshot;

/// Apply one message to the buffer, returning the caret position afterwards.
///
/// A rejected edit returns the error with the buffer unchanged; the caller
/// decides how to alert the user.
pub fn update(buffer: &mut MaskedBuffer, msg: MaskEditMsg) -> Result<usize, MaskError> {
    let before = BufferSnapshot::from_buffer(buffer);

    let result = match &msg {
        MaskEditMsg::Navigate(intent) => {
            let (caret, _, _) = buffer.navigate(*intent);
            Ok(caret)
        }
        MaskEditMsg::InsertChar(ch) => type_text(buffer, ch.encode_utf8(&mut [0; 4])),
        MaskEditMsg::InsertText(text) | MaskEditMsg::Paste(text) => type_text(buffer, text),
        MaskEditMsg::DeleteBackward => delete_backward(buffer),
        MaskEditMsg::DeleteForward => delete_forward(buffer),
        MaskEditMsg::Clear => {
            let fill = buffer.template().default_fill().to_string();
            buffer.insert(0, &fill)
        }
        MaskEditMsg::ToggleOvertype => {
            buffer.toggle_overtype();
            Ok(buffer.caret())
        }
    };

    match &result {
        Ok(_) => {
            if let Some(diff) = before.diff(&BufferSnapshot::from_buffer(buffer)) {
                tracing::trace!("{:?}: {}", msg, diff);
            }
        }
        Err(err) if err.is_rejection() => tracing::debug!("{:?} rejected", msg),
        Err(err) => tracing::warn!("{:?} failed: {}", msg, err),
    }
    result
}

/// Typing replaces the selection if there is one, otherwise inserts at the caret
fn type_text(buffer: &mut MaskedBuffer, text: &str) -> Result<usize, MaskError> {
    if buffer.has_selection() {
        let range = buffer.selection_range();
        buffer.replace(range.start, range.len(), text)
    } else {
        buffer.insert(buffer.caret(), text)
    }
}

fn delete_backward(buffer: &mut MaskedBuffer) -> Result<usize, MaskError> {
    if buffer.has_selection() {
        let range = buffer.selection_range();
        return buffer.remove(range.start, range.len());
    }
    match buffer.caret().checked_sub(1) {
        Some(pos) => buffer.remove(pos, 1),
        None => Ok(buffer.caret()),
    }
}

fn delete_forward(buffer: &mut MaskedBuffer) -> Result<usize, MaskError> {
    if buffer.has_selection() {
        let range = buffer.selection_range();
        return buffer.remove(range.start, range.len());
    }
    if buffer.caret() < buffer.len() {
        buffer.remove(buffer.caret(), 1)
    } else {
        Ok(buffer.caret())
    }
}
