//! Turn and phase sequencing for user clicks.
//!
//! A click is one atomic step: validate, apply, run the circuit or capture
//! check, rebuild scores, then either end the game or hand the turn over.
//! Invalid clicks are reported as `Activation::Ignored` (or, for a pending
//! movement selection, `SelectionCleared`) and otherwise leave the state alone.
//!
//! Phase flow:
//! - Placement -> Placement while either player still holds reserve titans
//! - Placement -> Movement once both reserves are empty
//! - Either phase -> ended on inner circuit full, elimination or clock expiry

use tracing::{debug, info};

use super::end::{end_game, EndReason};
use super::switch_player;
use crate::board::{Circuit, GameState, NodeId, Phase, Player};
use crate::rules::{
    apply_move, apply_placement, check_captured_titans, check_circuit_full, legal_destinations,
    recompute_scores, validate_move, validate_placement, CircuitCheck, MoveError,
};

/// What a click did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Nothing changed.
    Ignored(MoveError),
    /// A titan was placed; `unlocked` names a newly opened circuit.
    Placed {
        player: Player,
        node: NodeId,
        unlocked: Option<Circuit>,
    },
    /// A titan was picked up for moving.
    Selected(NodeId),
    /// The picked-up titan was put back.
    Deselected(NodeId),
    /// A titan moved; `captured` lists every titan removed afterwards.
    Moved {
        player: Player,
        from: NodeId,
        to: NodeId,
        captured: Vec<(NodeId, Player)>,
    },
    /// A pending selection was dropped because the target was not a legal move.
    SelectionCleared { from: NodeId, reason: MoveError },
}

/// Handles a click on `node` for the current player.
pub fn handle_node_activated(state: &mut GameState, node: NodeId) -> Activation {
    if !state.active {
        return ignored(MoveError::Inactive);
    }
    if state.paused {
        return ignored(MoveError::Paused);
    }
    match state.phase {
        Phase::Placement => place(state, node),
        Phase::Movement => movement_click(state, node),
    }
}

fn ignored(reason: MoveError) -> Activation {
    debug!(%reason, "click ignored");
    Activation::Ignored(reason)
}

fn place(state: &mut GameState, node: NodeId) -> Activation {
    let player = state.current_player;
    if let Err(e) = validate_placement(state, node, player) {
        return ignored(e);
    }

    apply_placement(state, node, player);
    let circuit = check_circuit_full(state);

    if state.players.iter().all(|p| p.titans_remaining == 0) {
        state.phase = Phase::Movement;
        info!("all titans placed, movement phase begins");
    }

    recompute_scores(state);

    if circuit == CircuitCheck::AllFull {
        end_game(state, EndReason::InnerCircuitFull);
    } else {
        switch_player(state);
    }

    Activation::Placed {
        player,
        node,
        unlocked: match circuit {
            CircuitCheck::Unlocked(c) => Some(c),
            _ => None,
        },
    }
}

fn movement_click(state: &mut GameState, node: NodeId) -> Activation {
    let player = state.current_player;
    let from = match state.selected {
        None => {
            if state.occupant(node) != Some(player) {
                return ignored(MoveError::NotOwner { node, player });
            }
            state.selected = Some(node);
            debug!(%player, %node, targets = ?legal_destinations(state, node), "titan selected");
            return Activation::Selected(node);
        }
        Some(from) => from,
    };

    state.selected = None;
    if from == node {
        debug!(%player, %node, "titan deselected");
        return Activation::Deselected(node);
    }

    if let Err(reason) = validate_move(state, player, from, node) {
        debug!(%player, %from, to = %node, %reason, "selection cleared");
        return Activation::SelectionCleared { from, reason };
    }

    apply_move(state, from, node);
    let report = check_captured_titans(state);
    recompute_scores(state);

    match report.eliminated.first() {
        Some(&loser) => {
            end_game(state, EndReason::Eliminated(loser));
        }
        None => switch_player(state),
    }

    Activation::Moved {
        player,
        from,
        to: node,
        captured: report.captured,
    }
}
