//! Masked text editing for fixed-format inputs.
//!
//! A masked field edits a string whose shape never changes: phone numbers
//! like `(555)123-4567`, dates, serial keys. Literal characters stay put
//! while the variable characters shift around them.
//!
//! # Architecture
//!
//! - [`Template`]: immutable slot layout (literals and variable character classes)
//! - [`MaskedBuffer`]: formatted content plus caret, selection and overtype mode
//! - [`ReplaceState`]: rollback bookkeeping for an in-flight replace
//! - [`MaskEditMsg`] / [`NavIntent`]: what a widget forwards on key and mouse input
//! - [`update`]: maps those messages onto buffer operations
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use maskfield::mask::{MaskedBuffer, Template};
//!
//! let mut buffer = MaskedBuffer::new(Arc::new(Template::phone()));
//! buffer.insert(1, "5551234567").unwrap();
//! assert_eq!(buffer.content(), "(555)123-4567");
//!
//! buffer.remove(5, 1).unwrap();
//! assert_eq!(buffer.content(), "(555)234-567 ");
//! ```

mod buffer;
mod error;
mod messages;
mod navigation;
mod replace;
mod selection;
mod template;
mod update;

// Re-export main types
pub use buffer::{create_buffer, MaskedBuffer};
pub use error::MaskError;
pub use messages::{MaskEditMsg, NavIntent};
pub use navigation::Direction;
pub use replace::{RemovedText, ReplaceState};
pub use selection::Selection;
pub use template::{CharClass, Slot, Template, TemplateError};
pub use update::update;
