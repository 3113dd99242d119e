use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use maskfield::cli::{CliArgs, ScriptOp};
use maskfield::config::MaskConfig;
use maskfield::mask::{update, MaskError, MaskedBuffer, Template};

/// State of the buffer after one scripted operation
#[derive(Debug, Serialize)]
struct StepReport<'a> {
    op: &'a str,
    content: String,
    caret: usize,
    selection: (usize, usize),
    overtype: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> StepReport<'a> {
    fn new(op: &'a str, buffer: &MaskedBuffer, error: Option<&MaskError>) -> Self {
        let selection = buffer.selection();
        Self {
            op,
            content: buffer.content(),
            caret: buffer.caret(),
            selection: (selection.start(), selection.end()),
            overtype: buffer.is_overtype(),
            error: error.map(|e| e.to_string()),
        }
    }

    fn print(&self, json: bool) -> Result<()> {
        if json {
            println!("{}", serde_json::to_string(self)?);
        } else {
            let mode = if self.overtype { "overtype" } else { "insert" };
            println!(
                "{:<24} {:?} caret {} selection {}..{} {}",
                self.op, self.content, self.caret, self.selection.0, self.selection.1, mode
            );
        }
        Ok(())
    }
}

fn apply(buffer: &mut MaskedBuffer, op: ScriptOp) -> Result<usize, MaskError> {
    match op {
        ScriptOp::Insert { offset, text } => buffer.insert(offset, &text),
        ScriptOp::Remove { offset, count } => buffer.remove(offset, count),
        ScriptOp::Replace {
            offset,
            count,
            text,
        } => buffer.replace(offset, count, &text),
        ScriptOp::Message(msg) => update(buffer, msg),
    }
}

fn main() -> Result<()> {
    maskfield::tracing::init();

    let args = CliArgs::parse();
    let script = args.script().map_err(anyhow::Error::msg)?;

    let config = match &args.config {
        Some(path) => MaskConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => MaskConfig::load(),
    };

    let template = match &args.pattern {
        Some(pattern) => Template::parse(pattern, config.placeholder)
            .with_context(|| format!("Invalid mask pattern {:?}", pattern))?,
        None => config.template(args.template.as_deref())?,
    };

    let mut buffer = config.buffer_for(Arc::new(template));
    if args.overtype {
        buffer.set_overtype(true);
    }

    let mut rejected = 0;
    for (raw, op) in args.ops.iter().zip(script) {
        let result = apply(&mut buffer, op);
        if let Err(err) = &result {
            rejected += 1;
            if err.is_rejection() {
                // Terminal bell as the invalid-edit cue
                eprint!("\x07");
            }
            tracing::info!("{} rejected: {}", raw, err);
        }
        if args.verbose || result.is_err() {
            StepReport::new(raw, &buffer, result.as_ref().err()).print(args.json)?;
        }
    }

    StepReport::new("final", &buffer, None).print(args.json)?;
    if rejected > 0 {
        tracing::debug!("{} operation(s) rejected", rejected);
    }
    Ok(())
}
