//! Command-line argument parsing for the scripting binary
//!
//! Supports:
//! - Picking a named template from config or an inline mask pattern
//! - Starting in overtype mode
//! - A script of edit and navigation operations

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

use crate::mask::{MaskEditMsg, NavIntent};

/// Apply scripted edits to a masked field
#[derive(Parser, Debug)]
#[command(name = "maskfield", version, about = "Apply scripted edits to a masked field")]
pub struct CliArgs {
    /// Operations to apply, in order (e.g. `insert:1:555`, `type:12`, `backspace`)
    #[arg(value_name = "OPS")]
    pub ops: Vec<String>,

    /// Config file (defaults to ~/.config/maskfield/config.yaml)
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Named template from the config
    #[arg(short = 't', long, value_name = "NAME", conflicts_with = "pattern")]
    pub template: Option<String>,

    /// Inline mask pattern, e.g. `(###)###-####`
    #[arg(short = 'p', long, value_name = "MASK")]
    pub pattern: Option<String>,

    /// Start in overtype mode
    #[arg(short = 'o', long)]
    pub overtype: bool,

    /// Print the state after every operation
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Print states as JSON
    #[arg(long)]
    pub json: bool,
}

/// A single scripted operation
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptOp {
    Insert { offset: usize, text: String },
    Remove { offset: usize, count: usize },
    Replace { offset: usize, count: usize, text: String },
    /// Key-level message routed through `mask::update`
    Message(MaskEditMsg),
}

impl FromStr for ScriptOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, rest) = match s.split_once(':') {
            Some((name, rest)) => (name, Some(rest)),
            None => (s, None),
        };

        let op = match (name, rest) {
            ("insert", Some(rest)) => {
                let (offset, text) = split_number(rest, s)?;
                ScriptOp::Insert {
                    offset,
                    text: text.to_string(),
                }
            }
            ("remove", Some(rest)) => {
                let (offset, count) = split_number(rest, s)?;
                ScriptOp::Remove {
                    offset,
                    count: parse_number(count, s)?,
                }
            }
            ("replace", Some(rest)) => {
                let (offset, rest) = split_number(rest, s)?;
                let (count, text) = split_number(rest, s)?;
                ScriptOp::Replace {
                    offset,
                    count,
                    text: text.to_string(),
                }
            }
            ("type", Some(text)) => ScriptOp::Message(MaskEditMsg::InsertText(text.to_string())),
            ("paste", Some(text)) => ScriptOp::Message(MaskEditMsg::Paste(text.to_string())),
            ("click", Some(pos)) => {
                ScriptOp::Message(MaskEditMsg::Navigate(NavIntent::ClickAt(parse_number(pos, s)?)))
            }
            ("dblclick", Some(pos)) => ScriptOp::Message(MaskEditMsg::Navigate(
                NavIntent::DoubleClickAt(parse_number(pos, s)?),
            )),
            ("backspace", None) => ScriptOp::Message(MaskEditMsg::DeleteBackward),
            ("delete", None) => ScriptOp::Message(MaskEditMsg::DeleteForward),
            ("left", None) => ScriptOp::Message(MaskEditMsg::Navigate(NavIntent::Left)),
            ("right", None) => ScriptOp::Message(MaskEditMsg::Navigate(NavIntent::Right)),
            ("home", None) => ScriptOp::Message(MaskEditMsg::Navigate(NavIntent::Home)),
            ("end", None) => ScriptOp::Message(MaskEditMsg::Navigate(NavIntent::End)),
            ("select-all", None) => ScriptOp::Message(MaskEditMsg::Navigate(NavIntent::SelectAll)),
            ("toggle", None) => ScriptOp::Message(MaskEditMsg::ToggleOvertype),
            ("clear", None) => ScriptOp::Message(MaskEditMsg::Clear),
            _ => return Err(format!("Invalid operation: {}", s)),
        };
        Ok(op)
    }
}

fn parse_number(text: &str, op: &str) -> Result<usize, String> {
    text.parse()
        .map_err(|_| format!("Invalid number {:?} in operation: {}", text, op))
}

/// Split `N:rest` into the number and the remainder (which may contain `:`)
fn split_number<'a>(text: &'a str, op: &str) -> Result<(usize, &'a str), String> {
    let (number, rest) = text
        .split_once(':')
        .ok_or_else(|| format!("Missing argument in operation: {}", op))?;
    Ok((parse_number(number, op)?, rest))
}

impl CliArgs {
    /// Parse every scripted operation, failing on the first invalid one
    pub fn script(&self) -> Result<Vec<ScriptOp>, String> {
        self.ops.iter().map(|op| op.parse()).collect()
    }
}
