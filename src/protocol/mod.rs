//! Text protocol for driving a game over stdin/stdout.
//!
//! This module implements the command parser for the main loop and the
//! serializable snapshot handed to whatever renders the board.

pub mod parser;
pub mod snapshot;

pub use parser::{parse_command, Command};
pub use snapshot::{EdgeView, NodeView, PlayerView, Snapshot};
