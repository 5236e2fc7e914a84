//! End-of-game resolution.

use std::fmt;

use tracing::info;

use crate::board::{GameState, Outcome, Player};

/// What brought the game to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    ClockExpired,
    InnerCircuitFull,
    /// The given player lost their last titan on the board.
    Eliminated(Player),
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndReason::ClockExpired => f.write_str("clock expired"),
            EndReason::InnerCircuitFull => f.write_str("inner circuit full"),
            EndReason::Eliminated(p) => write!(f, "{} eliminated", p),
        }
    }
}

/// Decides the result from current scores: strictly higher wins, equal ties.
pub fn resolve_outcome(state: &GameState) -> Outcome {
    let red = state.stats(Player::Red).score;
    let blue = state.stats(Player::Blue).score;
    if red > blue {
        Outcome::Winner { player: Player::Red, score: red }
    } else if blue > red {
        Outcome::Winner { player: Player::Blue, score: blue }
    } else {
        Outcome::Tie { score: red }
    }
}

/// Stops the game and records its outcome. Board and counters are left as they are.
pub fn end_game(state: &mut GameState, reason: EndReason) -> Outcome {
    debug_assert!(state.active, "ending a game that already ended");
    let outcome = resolve_outcome(state);
    state.active = false;
    state.selected = None;
    state.outcome = Some(outcome);
    info!(%reason, ?outcome, "game over");
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_score_wins() {
        let mut state = GameState::default();
        state.stats_mut(Player::Blue).score = 5;
        state.stats_mut(Player::Red).score = 2;
        assert_eq!(
            resolve_outcome(&state),
            Outcome::Winner { player: Player::Blue, score: 5 }
        );
    }

    #[test]
    fn equal_scores_tie() {
        let mut state = GameState::default();
        state.stats_mut(Player::Blue).score = 4;
        state.stats_mut(Player::Red).score = 4;
        assert_eq!(resolve_outcome(&state), Outcome::Tie { score: 4 });
    }

    #[test]
    fn end_game_deactivates_without_resetting() {
        let mut state = GameState::default();
        state.stats_mut(Player::Red).score = 1;
        state.game_timer = 42;
        let outcome = end_game(&mut state, EndReason::ClockExpired);
        assert_eq!(outcome, Outcome::Winner { player: Player::Red, score: 1 });
        assert!(!state.active);
        assert_eq!(state.outcome, Some(outcome));
        assert_eq!(state.game_timer, 42);
        assert_eq!(state.stats(Player::Red).score, 1);
    }

    #[test]
    fn reason_display() {
        assert_eq!(EndReason::Eliminated(Player::Blue).to_string(), "blue eliminated");
    }
}
