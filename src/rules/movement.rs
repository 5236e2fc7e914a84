//! Movement-phase rules.

use tracing::info;

use super::{adjacent_nodes, MoveError};
use crate::board::{GameState, NodeId, Player};

/// Checks that `player` may slide the titan on `from` to `to`.
pub fn validate_move(state: &GameState, player: Player, from: NodeId, to: NodeId) -> Result<(), MoveError> {
    if state.occupant(from) != Some(player) {
        return Err(MoveError::NotOwner { node: from, player });
    }
    if !adjacent_nodes(state, from).contains(&to) {
        return Err(MoveError::NotAdjacent { from, to });
    }
    if state.occupant(to).is_some() {
        return Err(MoveError::Occupied(to));
    }
    Ok(())
}

/// Slides the titan on `from` to `to`. Counters are unchanged.
///
/// The caller is responsible for validating first.
pub fn apply_move(state: &mut GameState, from: NodeId, to: NodeId) {
    let player = state.occupant(from);
    debug_assert!(player.is_some(), "moving from empty {}", from);
    debug_assert!(state.occupant(to).is_none(), "moving onto occupied {}", to);

    state.set_occupant(from, None);
    state.set_occupant(to, player);
    if let Some(player) = player {
        info!(%player, %from, %to, "titan moved");
    }
}

/// Empty nodes adjacent to `from`.
pub fn legal_destinations(state: &GameState, from: NodeId) -> Vec<NodeId> {
    adjacent_nodes(state, from)
        .iter()
        .copied()
        .filter(|n| state.occupant(*n).is_none())
        .collect()
}
