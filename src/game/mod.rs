//! Turn/phase state machine, game clock and end-of-game resolution.
//!
//! Everything here sequences rule-engine calls against a `GameState`: whose
//! turn it is, which phase is active, when the game stops.

pub mod clock;
pub mod end;
pub mod turn;

pub use clock::{tick, ClockEvent};
pub use end::{end_game, resolve_outcome, EndReason};
pub use turn::{handle_node_activated, Activation};

use tracing::{debug, info};

use crate::board::GameState;
use crate::config::GameConfig;

/// Passes the turn: toggles the current player, restarts the turn clock and
/// drops any pending selection (it belonged to the outgoing player).
pub fn switch_player(state: &mut GameState) {
    state.current_player = state.current_player.opponent();
    state.turn_timer = state.config.turn_duration_secs;
    state.selected = None;
    debug!(player = %state.current_player, "turn passed");
}

/// Freezes the clock and click handling. Returns false if nothing changed.
pub fn pause(state: &mut GameState) -> bool {
    if state.paused {
        return false;
    }
    state.paused = true;
    info!("game paused");
    true
}

/// Unfreezes the clock and click handling. Returns false if nothing changed.
pub fn resume(state: &mut GameState) -> bool {
    if !state.paused {
        return false;
    }
    state.paused = false;
    info!("game resumed");
    true
}

/// Discards the current game and starts a fresh one from `config`.
pub fn reset(state: &mut GameState, config: GameConfig) {
    *state = GameState::new(config);
    info!(?config, "game reset");
}
