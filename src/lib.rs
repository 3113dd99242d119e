//! Masked field editing engine
//!
//! This crate keeps fixed-format strings such as `(555)123-4567` consistent
//! under insert, delete and replace, while tracking a caret, a selection and
//! insert/overtype mode. Rendering and event dispatch belong to the caller.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod mask;
pub mod tracing;

// Re-export commonly used types
pub use config::MaskConfig;
pub use mask::{create_buffer, MaskEditMsg, MaskError, MaskedBuffer, NavIntent, Template};
