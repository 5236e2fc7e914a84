//! Territorial scoring.
//!
//! An edge is controlled by a player when both endpoints hold that player's
//! titans. A player's score is the summed weight of the edges they control.
//! Control and scores are always rebuilt from occupancy in full.

use crate::board::{Edge, GameState, Player};

/// The player holding both ends of `edge`, if any.
pub fn edge_controller(state: &GameState, edge: &Edge) -> Option<Player> {
    match (state.occupant(edge.a), state.occupant(edge.b)) {
        (Some(a), Some(b)) if a == b => Some(a),
        _ => None,
    }
}

/// Rebuilds edge control and both players' scores from current occupancy.
pub fn recompute_scores(state: &mut GameState) {
    for p in state.players.iter_mut() {
        p.score = 0;
    }
    for i in 0..state.topology.edges().len() {
        let edge = state.topology.edges()[i];
        let controller = edge_controller(state, &edge);
        state.edge_control[i] = controller;
        if let Some(player) = controller {
            state.stats_mut(player).score += edge.weight;
        }
    }
}
