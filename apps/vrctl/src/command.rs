//! Operator command parsing.

use thiserror::Error;

use vr_core::NodeId;

/// One line of operator input, parsed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Status,
    Pickup(NodeId),
    Drop(NodeId),
    Auto,
    Step,
    Path,
    Help,
    Exit,
}

/// A line that is not a valid command.  Reported; nothing changes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Invalid command '{0}'. Type 'help' for a list of commands.")]
    Unknown(String),

    #[error("Invalid {verb} command. Format: {verb} <node_id>")]
    MissingId { verb: &'static str },

    #[error("Invalid {verb} command: '{raw}' is not a node id")]
    BadId { verb: &'static str, raw: String },

    #[error("'{verb}' takes no further arguments")]
    TrailingArgs { verb: &'static str },

    #[error("Invalid command: input is not valid UTF-8")]
    NotUtf8,
}

/// Parse one raw input line.  Bytes that are not UTF-8 are a malformed
/// command like any other.
pub fn parse_bytes(line: &[u8]) -> Result<Option<Command>, CommandError> {
    let line = std::str::from_utf8(line).map_err(|_| CommandError::NotUtf8)?;
    parse_line(line)
}

/// Parse one input line.
///
/// The line is trimmed and lowercased first.  A blank line is `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim().to_lowercase();
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };

    let cmd = match verb {
        "status"        => bare(Command::Status, "status", &mut words)?,
        "auto"          => bare(Command::Auto, "auto", &mut words)?,
        "step"          => bare(Command::Step, "step", &mut words)?,
        "path"          => bare(Command::Path, "path", &mut words)?,
        "help"          => bare(Command::Help, "help", &mut words)?,
        "exit" | "quit" => bare(Command::Exit, "exit", &mut words)?,
        "pickup"        => Command::Pickup(node_arg("pickup", &mut words)?),
        "drop"          => Command::Drop(node_arg("drop", &mut words)?),
        other           => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(cmd))
}

fn bare<'a>(
    cmd:   Command,
    verb:  &'static str,
    words: &mut impl Iterator<Item = &'a str>,
) -> Result<Command, CommandError> {
    match words.next() {
        None    => Ok(cmd),
        Some(_) => Err(CommandError::TrailingArgs { verb }),
    }
}

fn node_arg<'a>(
    verb:  &'static str,
    words: &mut impl Iterator<Item = &'a str>,
) -> Result<NodeId, CommandError> {
    let raw = words.next().ok_or(CommandError::MissingId { verb })?;
    let id = raw
        .parse::<NodeId>()
        .map_err(|_| CommandError::BadId { verb, raw: raw.to_string() })?;
    if words.next().is_some() {
        return Err(CommandError::TrailingArgs { verb });
    }
    Ok(id)
}
