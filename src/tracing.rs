//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! edit rejections, rollbacks and caret placement.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - rejected edits and rollbacks
//! - `RUST_LOG=maskfield::mask=trace` - every mutation and caret move
//!
//! # Log Files
//!
//! Logs are written to `~/.config/maskfield/logs/maskfield.log` with daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::mask::MaskedBuffer;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG env var for filtering and defaults to `warn`.
/// File logging writes debug level to `~/.config/maskfield/logs/maskfield.log`.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG, stderr keeps stdout for results
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "maskfield.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of buffer state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferSnapshot {
    pub content: String,
    pub caret: usize,
    pub selection: (usize, usize),
    pub overtype: bool,
}

impl BufferSnapshot {
    pub fn from_buffer(buffer: &MaskedBuffer) -> Self {
        let selection = buffer.selection();
        Self {
            content: buffer.content(),
            caret: buffer.caret(),
            selection: (selection.start(), selection.end()),
            overtype: buffer.is_overtype(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &BufferSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.content != other.content {
            changes.push(format!("{:?} → {:?}", self.content, other.content));
        }
        if self.caret != other.caret {
            changes.push(format!("caret {} → {}", self.caret, other.caret));
        }
        if self.selection != other.selection {
            changes.push(format!(
                "selection {}..{} → {}..{}",
                self.selection.0, self.selection.1, other.selection.0, other.selection.1
            ));
        }
        if self.overtype != other.overtype {
            let mode = if other.overtype { "overtype" } else { "insert" };
            changes.push(format!("mode {}", mode));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
