//! Rule engine.
//!
//! Adjacency queries, placement and move validation, capture detection and
//! territorial scoring. These functions validate and mutate a `GameState`
//! but never decide whose turn it is; sequencing lives in `crate::game`.

pub mod capture;
pub mod movement;
pub mod placement;
pub mod score;

pub use capture::{check_captured_titans, find_captures, is_surrounded, CaptureReport};
pub use movement::{apply_move, legal_destinations, validate_move};
pub use placement::{apply_placement, check_circuit_full, validate_placement, CircuitCheck};
pub use score::{edge_controller, recompute_scores};

use crate::board::{Circuit, GameState, NodeId, Player};

/// Why a user intent was rejected. Rejected intents leave the state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("game is not active")]
    Inactive,

    #[error("game is paused")]
    Paused,

    #[error("{node} is not on the unlocked {unlocked} circuit")]
    WrongCircuit { node: NodeId, unlocked: Circuit },

    #[error("{0} is occupied")]
    Occupied(NodeId),

    #[error("{0} has no titans left to place")]
    NoTitansRemaining(Player),

    #[error("{node} is not held by {player}")]
    NotOwner { node: NodeId, player: Player },

    #[error("{to} is not adjacent to {from}")]
    NotAdjacent { from: NodeId, to: NodeId },
}

/// Nodes sharing an edge with `node`.
pub fn adjacent_nodes(state: &GameState, node: NodeId) -> &[NodeId] {
    state.topology.neighbors(node)
}
