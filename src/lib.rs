//! Titans game engine library.
//!
//! Exposes the board representation, rule engine, turn state machine, game
//! clock, text protocol and realtime ticker for use by integration tests and
//! the binary entry point.

pub mod board;
pub mod config;
pub mod engine;
pub mod game;
pub mod protocol;
pub mod rules;
pub mod ticker;
