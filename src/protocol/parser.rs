//! Command parser.
//!
//! Parses incoming protocol lines from the presentation side into structured
//! `Command` variants that the main loop can dispatch on.

use tracing::warn;

use crate::board::NodeId;

/// A parsed presentation-to-engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// A click or tap on a board position: `click <node>`.
    Click { node: NodeId },

    /// Freeze the clock and ignore clicks.
    Pause,

    /// Unfreeze the clock and clicks.
    Resume,

    /// Throw the current game away and start over.
    Reset,

    /// Advance the game clock: `tick [seconds]`, one second by default.
    Tick { seconds: u32 },

    /// Print the full presentation snapshot.
    State,

    /// Set an engine option: `setoption name <id> value <n>`.
    SetOption { name: String, value: String },

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    match tokens[0] {
        "isready" => Some(Command::IsReady),
        "pause" => Some(Command::Pause),
        "resume" => Some(Command::Resume),
        "reset" => Some(Command::Reset),
        "state" => Some(Command::State),
        "quit" => Some(Command::Quit),

        "click" => parse_click(&tokens),
        "tick" => parse_tick(&tokens),
        "setoption" => parse_setoption(&tokens),

        other => {
            warn!(command = other, "unknown command");
            None
        }
    }
}

/// Parses `click <node>`.
fn parse_click(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 2 {
        warn!("malformed click: expected 'click <circuit>-<index>'");
        return None;
    }
    match tokens[1].parse::<NodeId>() {
        Ok(node) => Some(Command::Click { node }),
        Err(e) => {
            warn!(error = %e, "malformed click");
            None
        }
    }
}

/// Parses `tick [seconds]`.
fn parse_tick(tokens: &[&str]) -> Option<Command> {
    match tokens.get(1) {
        None => Some(Command::Tick { seconds: 1 }),
        Some(raw) => match raw.parse::<u32>() {
            Ok(seconds) => Some(Command::Tick { seconds }),
            Err(_) => {
                warn!(value = *raw, "invalid tick count");
                None
            }
        },
    }
}

/// Parses `setoption name <id> value <n>`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    match tokens {
        [_, "name", name, "value", value] => Some(Command::SetOption {
            name: name.to_string(),
            value: value.to_string(),
        }),
        _ => {
            warn!("malformed setoption: expected 'setoption name <id> value <n>'");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Circuit;

    #[test]
    fn parse_bare_commands() {
        assert_eq!(parse_command("isready"), Some(Command::IsReady));
        assert_eq!(parse_command("pause"), Some(Command::Pause));
        assert_eq!(parse_command("resume"), Some(Command::Resume));
        assert_eq!(parse_command("reset"), Some(Command::Reset));
        assert_eq!(parse_command("state"), Some(Command::State));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
    }

    #[test]
    fn parse_empty_line_returns_none() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("  "), None);
        assert_eq!(parse_command("\t"), None);
    }

    #[test]
    fn parse_unknown_command_returns_none() {
        assert_eq!(parse_command("foobar"), None);
    }

    #[test]
    fn parse_click_node() {
        assert_eq!(
            parse_command("click middle-4"),
            Some(Command::Click { node: NodeId::new(Circuit::Middle, 4) })
        );
    }

    #[test]
    fn parse_click_malformed_returns_none() {
        assert_eq!(parse_command("click"), None);
        assert_eq!(parse_command("click core-1"), None);
        assert_eq!(parse_command("click outer-9"), None);
        assert_eq!(parse_command("click outer-1 outer-2"), None);
    }

    #[test]
    fn parse_tick_defaults_to_one_second() {
        assert_eq!(parse_command("tick"), Some(Command::Tick { seconds: 1 }));
        assert_eq!(parse_command("tick 60"), Some(Command::Tick { seconds: 60 }));
        assert_eq!(parse_command("tick soon"), None);
    }

    #[test]
    fn parse_setoption_with_value() {
        assert_eq!(
            parse_command("setoption name TurnDuration value 30"),
            Some(Command::SetOption {
                name: "TurnDuration".to_string(),
                value: "30".to_string(),
            })
        );
    }

    #[test]
    fn parse_setoption_needs_name_and_value() {
        assert_eq!(parse_command("setoption"), None);
        assert_eq!(parse_command("setoption foo"), None);
        assert_eq!(parse_command("setoption name Titans"), None);
        assert_eq!(parse_command("setoption name value 3"), None);
        assert_eq!(parse_command("setoption name Game Duration value 3"), None);
        assert_eq!(parse_command("setoption name Titans value 3 4"), None);
    }

    #[test]
    fn parse_with_leading_trailing_whitespace() {
        assert_eq!(parse_command("  isready  "), Some(Command::IsReady));
        assert_eq!(
            parse_command("\tclick inner-0 "),
            Some(Command::Click { node: NodeId::new(Circuit::Inner, 0) })
        );
    }
}
