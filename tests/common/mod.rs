//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::sync::Arc;

use maskfield::mask::{MaskedBuffer, Slot, Template};

pub const EMPTY_PHONE: &str = "(   )   -    ";

/// Fresh phone-number buffer, caret on the first digit slot
pub fn phone_buffer() -> MaskedBuffer {
    MaskedBuffer::new(Arc::new(Template::phone()))
}

/// Phone-number buffer holding `digits`, caret after the last one
pub fn phone_with(digits: &str) -> MaskedBuffer {
    MaskedBuffer::with_content(Arc::new(Template::phone()), digits).unwrap()
}

/// Fresh buffer for an inline mask pattern
pub fn pattern_buffer(pattern: &str, placeholder: char) -> MaskedBuffer {
    MaskedBuffer::new(Arc::new(Template::parse(pattern, placeholder).unwrap()))
}

/// Assert the structural invariants every operation must preserve
pub fn assert_invariants(buffer: &MaskedBuffer) {
    let template = buffer.template();
    let content: Vec<char> = buffer.content().chars().collect();
    assert_eq!(content.len(), template.len(), "length changed: {:?}", buffer.content());

    for (pos, slot) in template.slots().iter().enumerate() {
        match slot {
            Slot::Literal(lit) => assert_eq!(
                content[pos], *lit,
                "literal at {} lost in {:?}",
                pos,
                buffer.content()
            ),
            Slot::Variable(class) => assert!(
                content[pos] == template.placeholder() || class.matches(content[pos]),
                "slot {} holds {:?} in {:?}",
                pos,
                content[pos],
                buffer.content()
            ),
        }
    }

    assert!(buffer.variable_count() <= template.capacity());
    let sel = buffer.selection();
    assert!(sel.start() <= sel.end());
    assert!(sel.end() <= template.len());
    assert!(buffer.caret() <= template.len());
    assert!(!buffer.replace_state().is_replacing());
}
