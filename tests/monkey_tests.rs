//! Monkey tests - long operation sequences and unusual inputs
//!
//! Every sequence here is deterministic; the buffer must stay well formed
//! after each step no matter which operations are rejected.

mod common;

use common::{assert_invariants, pattern_buffer, phone_buffer, EMPTY_PHONE};
use maskfield::mask::{update, MaskEditMsg, MaskedBuffer, NavIntent};

const INPUTS: [&str; 8] = ["5", "42", "x", "(", "", "1-2", "999999999999", "é"];

fn message(i: usize) -> MaskEditMsg {
    match i % 12 {
        0 => MaskEditMsg::InsertChar(char::from(b'0' + (i % 10) as u8)),
        1 => MaskEditMsg::InsertText(INPUTS[i % INPUTS.len()].to_string()),
        2 => MaskEditMsg::Paste(INPUTS[(i / 3) % INPUTS.len()].to_string()),
        3 => MaskEditMsg::DeleteBackward,
        4 => MaskEditMsg::DeleteForward,
        5 => MaskEditMsg::Navigate(NavIntent::Left),
        6 => MaskEditMsg::Navigate(NavIntent::Right),
        7 => MaskEditMsg::Navigate(NavIntent::ClickAt((i * 7) % 16)),
        8 => MaskEditMsg::Navigate(NavIntent::SelectAll),
        9 => MaskEditMsg::Navigate(NavIntent::DoubleClickAt((i * 5) % 16)),
        10 if i % 5 == 0 => MaskEditMsg::ToggleOvertype,
        10 => MaskEditMsg::Navigate(NavIntent::End),
        _ if i % 7 == 0 => MaskEditMsg::Clear,
        _ => MaskEditMsg::Navigate(NavIntent::Home),
    }
}

fn run_messages(buf: &mut MaskedBuffer, steps: usize) {
    for i in 0..steps {
        let msg = message(i);
        let before = buf.content();
        let result = update(buf, msg.clone());
        if result.is_err() {
            assert_eq!(buf.content(), before, "rejected {:?} changed content", msg);
        }
        assert_invariants(buf);
    }
}

// ========================================================================
// Message sequences
// ========================================================================

#[test]
fn test_long_message_sequence_phone() {
    let mut buf = phone_buffer();
    run_messages(&mut buf, 2_000);
}

#[test]
fn test_long_message_sequence_mixed_classes() {
    let mut buf = pattern_buffer("??-AA-HH/##", '_');
    run_messages(&mut buf, 2_000);
}

#[test]
fn test_long_message_sequence_starting_in_overtype() {
    let mut buf = phone_buffer();
    buf.set_overtype(true);
    run_messages(&mut buf, 2_000);
}

// ========================================================================
// Direct operation sequences
// ========================================================================

#[test]
fn test_rapid_insert_remove_cycle() {
    let mut buf = phone_buffer();
    for i in 0..500 {
        let offset = (i * 13) % 15;
        let _ = buf.insert(offset, INPUTS[i % INPUTS.len()]);
        assert_invariants(&buf);
        let _ = buf.remove((i * 11) % 15, i % 4);
        assert_invariants(&buf);
    }
}

#[test]
fn test_rapid_replace_cycle() {
    let mut buf = phone_buffer();
    for i in 0..500 {
        if i % 50 == 0 {
            buf.toggle_overtype();
        }
        let before = buf.content();
        let result = buf.replace((i * 7) % 14, i % 5, INPUTS[(i * 3) % INPUTS.len()]);
        if result.is_err() {
            assert_eq!(buf.content(), before);
        }
        assert_invariants(&buf);
    }
}

#[test]
fn test_alternating_modes_while_typing() {
    let mut buf = phone_buffer();
    for i in 0..40 {
        let _ = update(&mut buf, MaskEditMsg::InsertChar('7'));
        if i % 3 == 0 {
            update(&mut buf, MaskEditMsg::ToggleOvertype).unwrap();
        }
        assert_invariants(&buf);
    }
    assert!(buf.is_complete());
}

// ========================================================================
// Unusual inputs
// ========================================================================

#[test]
fn test_unicode_input_is_rejected_cleanly() {
    let mut buf = phone_buffer();
    for text in ["٣", "🦀", "５", "\u{0}", "\n"] {
        assert!(buf.insert(1, text).is_err(), "{:?} accepted", text);
        assert_eq!(buf.content(), EMPTY_PHONE);
    }
}

#[test]
fn test_unicode_letters_fill_letter_slots() {
    let mut buf = pattern_buffer("???", '_');
    assert_eq!(buf.insert(0, "éßж"), Ok(3));
    assert_eq!(buf.content(), "éßж");
    assert!(buf.is_complete());
}

#[test]
fn test_delete_on_empty_buffer_repeatedly() {
    let mut buf = phone_buffer();
    for _ in 0..20 {
        update(&mut buf, MaskEditMsg::DeleteBackward).unwrap();
        update(&mut buf, MaskEditMsg::DeleteForward).unwrap();
    }
    assert_eq!(buf.content(), EMPTY_PHONE);
    assert_invariants(&buf);
}
