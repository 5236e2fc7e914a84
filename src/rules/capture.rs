//! Capture detection.
//!
//! A titan is captured when it has at least one neighbour and every
//! neighbour holds an opposing titan. The whole board is judged against the
//! position as it stood before any removal, so several titans can fall in a
//! single pass, including two enemies that surround each other. Removing one
//! titan never saves or dooms another within the same pass.

use tracing::info;

use super::adjacent_nodes;
use crate::board::{GameState, NodeId, Player, ALL_NODES, ALL_PLAYERS, PLAYER_COUNT};

/// Titans removed by one capture pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureReport {
    /// Each captured node with the player who lost the titan there.
    pub captured: Vec<(NodeId, Player)>,
    /// Players whose last titan on the board was taken in this pass.
    pub eliminated: Vec<Player>,
}

impl CaptureReport {
    pub fn is_empty(&self) -> bool {
        self.captured.is_empty()
    }
}

/// Returns true if the titan on `node` is surrounded by opponents.
///
/// Empty nodes and nodes without neighbours are never surrounded.
pub fn is_surrounded(state: &GameState, node: NodeId) -> bool {
    let owner = match state.occupant(node) {
        Some(p) => p,
        None => return false,
    };
    let neighbors = adjacent_nodes(state, node);
    !neighbors.is_empty()
        && neighbors
            .iter()
            .all(|n| state.occupant(*n) == Some(owner.opponent()))
}

/// Lists every titan that would be captured in the current position.
pub fn find_captures(state: &GameState) -> Vec<(NodeId, Player)> {
    ALL_NODES
        .iter()
        .filter(|n| is_surrounded(state, **n))
        .filter_map(|n| state.occupant(*n).map(|p| (*n, p)))
        .collect()
}

/// Removes every surrounded titan and updates the owners' counters.
pub fn check_captured_titans(state: &mut GameState) -> CaptureReport {
    let captured = find_captures(state);
    let titans = state.config.titans_per_player;
    let mut lost = [false; PLAYER_COUNT];

    for &(node, player) in &captured {
        state.set_occupant(node, None);
        let stats = state.stats_mut(player);
        debug_assert!(stats.titans_placed > 0, "{} captured with none placed", player);
        stats.titans_placed -= 1;
        stats.titans_captured += 1;
        debug_assert_eq!(stats.total_titans(), titans, "{} titans not conserved", player);
        lost[player as usize] = true;
        info!(%player, %node, left = stats.titans_placed, "titan captured");
    }

    let eliminated = ALL_PLAYERS
        .into_iter()
        .filter(|p| lost[*p as usize] && state.stats(*p).titans_placed == 0)
        .collect();

    CaptureReport { captured, eliminated }
}
