//! Text editing tests - insert, remove, replace

mod common;

use common::{assert_invariants, phone_buffer, phone_with, EMPTY_PHONE};
use maskfield::mask::MaskError;

// ========================================================================
// Insert tests
// ========================================================================

#[test]
fn test_insert_full_number_on_fresh_buffer() {
    let mut buf = phone_buffer();
    assert_eq!(buf.insert(1, "5551234567"), Ok(13));
    assert_eq!(buf.content(), "(555)123-4567");
    assert_eq!(buf.caret(), 13);
    assert_invariants(&buf);
}

#[test]
fn test_insert_first_group_skips_closing_paren() {
    let mut buf = phone_buffer();
    assert_eq!(buf.insert(1, "555"), Ok(5));
    assert_eq!(buf.content(), "(555)   -    ");
    assert_eq!(buf.caret(), 5);
}

#[test]
fn test_insert_letters_rejected() {
    let mut buf = phone_buffer();
    assert_eq!(buf.insert(1, "abc"), Err(MaskError::InvalidFormat));
    assert_eq!(buf.content(), EMPTY_PHONE);
    assert_eq!(buf.caret(), 1);
}

#[test]
fn test_insert_formatted_paste() {
    let mut buf = phone_buffer();
    assert_eq!(buf.insert(0, "(555)123-4567"), Ok(13));
    assert_eq!(buf.content(), "(555)123-4567");
}

#[test]
fn test_insert_ignores_literal_characters_in_raw_text() {
    let mut buf = phone_buffer();
    buf.insert(1, "555-12").unwrap();
    assert_eq!(buf.content(), "(555)12 -    ");
    assert_eq!(buf.caret(), 7);
}

#[test]
fn test_insert_in_middle_shifts_following_digits() {
    let mut buf = phone_with("555123");
    assert_eq!(buf.insert(5, "99"), Ok(7));
    assert_eq!(buf.content(), "(555)991-23  ");
    assert_invariants(&buf);
}

#[test]
fn test_insert_shift_crosses_literals() {
    let mut buf = phone_with("123456789");
    assert_eq!(buf.insert(1, "0"), Ok(2));
    assert_eq!(buf.content(), "(012)345-6789");
}

#[test]
fn test_insert_beyond_capacity_rejected() {
    let mut buf = phone_with("5551234567");
    assert_eq!(buf.insert(1, "1"), Err(MaskError::InvalidFormat));
    assert_eq!(buf.content(), "(555)123-4567");
}

#[test]
fn test_insert_more_than_remaining_slots_rejected() {
    let mut buf = phone_buffer();
    assert_eq!(buf.insert(9, "12345"), Err(MaskError::InvalidFormat));
    assert_eq!(buf.content(), EMPTY_PHONE);
}

#[test]
fn test_validate_accepts_insert_that_pushes_tail_out() {
    let mut buf = phone_buffer();
    buf.insert(12, "7").unwrap();
    assert!(buf.validate(12, "8"));
    assert_eq!(buf.content(), "(   )   -   7");
}

#[test]
fn test_insert_truncates_shifted_tail() {
    let mut buf = phone_buffer();
    buf.insert(12, "7").unwrap();
    assert_eq!(buf.insert(12, "8"), Ok(13));
    assert_eq!(buf.content(), "(   )   -   8");
    assert_invariants(&buf);
}

#[test]
fn test_insert_truncates_only_what_overflows() {
    let mut buf = phone_buffer();
    buf.insert(11, "67").unwrap();
    assert_eq!(buf.content(), "(   )   -  67");
    assert_eq!(buf.insert(10, "5"), Ok(11));
    assert_eq!(buf.content(), "(   )   - 567");
    assert_eq!(buf.insert(9, "34"), Ok(11));
    assert_eq!(buf.content(), "(   )   -3456");
}

#[test]
fn test_insert_retyped_literal_is_tolerated() {
    let mut buf = phone_with("555");
    assert_eq!(buf.insert(5, ")"), Ok(5));
    assert_eq!(buf.content(), "(555)   -    ");
}

#[test]
fn test_insert_at_end_rejected() {
    let mut buf = phone_buffer();
    assert_eq!(buf.insert(13, "1"), Err(MaskError::InvalidFormat));
    assert_eq!(
        buf.insert(14, "1"),
        Err(MaskError::OutOfRange { offset: 14, len: 13 })
    );
}

// ========================================================================
// Remove tests
// ========================================================================

#[test]
fn test_remove_first_digit_of_second_group() {
    let mut buf = phone_with("5551234567");
    assert_eq!(buf.remove(5, 1), Ok(5));
    assert_eq!(buf.content(), "(555)234-567 ");
    assert_eq!(buf.caret(), 5);
    assert_invariants(&buf);
}

#[test]
fn test_remove_never_deletes_literal() {
    let mut buf = phone_with("5551234567");
    assert_eq!(buf.remove(8, 1), Ok(7));
    assert_eq!(buf.content(), "(555)124-567 ");
    assert_eq!(buf.chars()[8], '-');
}

#[test]
fn test_remove_everything() {
    let mut buf = phone_with("5551234567");
    assert_eq!(buf.remove(0, 13), Ok(1));
    assert_eq!(buf.content(), EMPTY_PHONE);
    assert_eq!(buf.variable_count(), 0);
}

#[test]
fn test_remove_last_digit() {
    let mut buf = phone_with("5551234567");
    assert_eq!(buf.remove(12, 1), Ok(12));
    assert_eq!(buf.content(), "(555)123-456 ");
}

#[test]
fn test_remove_out_of_range_leaves_buffer() {
    let mut buf = phone_with("555");
    assert_eq!(
        buf.remove(14, 1),
        Err(MaskError::OutOfRange { offset: 14, len: 13 })
    );
    assert_eq!(buf.content(), "(555)   -    ");
}

// ========================================================================
// Replace tests
// ========================================================================

#[test]
fn test_replace_area_code() {
    let mut buf = phone_with("5551234567");
    assert_eq!(buf.replace(1, 3, "212"), Ok(5));
    assert_eq!(buf.content(), "(212)123-4567");
    assert_invariants(&buf);
}

#[test]
fn test_replace_with_fewer_digits_shifts_left() {
    let mut buf = phone_with("5551234567");
    assert_eq!(buf.replace(1, 3, "9"), Ok(2));
    assert_eq!(buf.content(), "(912)345-67  ");
}

#[test]
fn test_replace_rejected_restores_content() {
    let mut buf = phone_with("5551234567");
    let before = buf.content();
    let caret = buf.caret();
    assert_eq!(buf.replace(5, 4, "12a"), Err(MaskError::InvalidFormat));
    assert_eq!(buf.content(), before);
    assert_eq!(buf.caret(), caret);
    assert_invariants(&buf);
}

#[test]
fn test_replace_too_many_digits_restores_content() {
    let mut buf = phone_with("5551234567");
    assert_eq!(buf.replace(1, 1, "12"), Err(MaskError::InvalidFormat));
    assert_eq!(buf.content(), "(555)123-4567");
}

#[test]
fn test_replace_out_of_range() {
    let mut buf = phone_with("555");
    assert_eq!(
        buf.replace(10, 4, "1"),
        Err(MaskError::OutOfRange { offset: 14, len: 13 })
    );
    assert_eq!(buf.content(), "(555)   -    ");
    assert_invariants(&buf);
}

#[test]
fn test_replace_zero_count_is_insert() {
    let mut buf = phone_with("555");
    assert_eq!(buf.replace(5, 0, "1"), Ok(6));
    assert_eq!(buf.content(), "(555)1  -    ");
}

// ========================================================================
// Overtype tests
// ========================================================================

#[test]
fn test_overtype_insert_overwrites_in_place() {
    let mut buf = phone_with("5551234567");
    assert!(buf.toggle_overtype());
    assert_eq!(buf.insert(1, "9"), Ok(2));
    assert_eq!(buf.content(), "(955)123-4567");
    assert_eq!(buf.caret(), 2);
    assert_eq!(buf.selection_range(), 2..3);
}

#[test]
fn test_overtype_insert_across_literal() {
    let mut buf = phone_with("5551234567");
    buf.toggle_overtype();
    assert_eq!(buf.insert(3, "00"), Ok(6));
    assert_eq!(buf.content(), "(550)023-4567");
    assert_eq!(buf.selection_range(), 6..7);
}

#[test]
fn test_overtype_insert_into_empty_slots() {
    let mut buf = phone_buffer();
    buf.toggle_overtype();
    assert_eq!(buf.insert(9, "42"), Ok(11));
    assert_eq!(buf.content(), "(   )   -42  ");
}
