//! Game clock.
//!
//! The engine owns no timers. An external scheduler calls [`tick`] once per
//! second; each call is a complete state transition run on the same thread
//! as clicks, so a tick never observes a half-applied move.

use tracing::{info, trace};

use super::end::{end_game, EndReason};
use super::switch_player;
use crate::board::{GameState, Outcome, Player};

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockEvent {
    /// The clock is stopped (paused or game over).
    Idle,
    /// Both timers counted down.
    Ticked,
    /// The turn timer ran out and the turn passed to `next`.
    TurnExpired { next: Player },
    /// The game timer ran out and the game ended.
    GameExpired(Outcome),
}

/// Advances both clocks by one second.
pub fn tick(state: &mut GameState) -> ClockEvent {
    if !state.is_accepting_input() {
        return ClockEvent::Idle;
    }

    state.game_timer = state.game_timer.saturating_sub(1);
    if state.game_timer == 0 {
        return ClockEvent::GameExpired(end_game(state, EndReason::ClockExpired));
    }

    state.turn_timer = state.turn_timer.saturating_sub(1);
    if state.turn_timer == 0 {
        let timed_out = state.current_player;
        switch_player(state);
        info!(player = %timed_out, "turn timed out");
        return ClockEvent::TurnExpired { next: state.current_player };
    }

    trace!(game = state.game_timer, turn = state.turn_timer, "tick");
    ClockEvent::Ticked
}
