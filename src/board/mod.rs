//! Board representation and game-state types.
//!
//! Contains node identities, players, the weighted board topology, and the
//! overall game state.

pub mod node;
pub mod player;
pub mod state;
pub mod topology;

pub use node::{
    Circuit, NodeId, NodeIdError, ALL_CIRCUITS, ALL_NODES, CIRCUIT_COUNT, CIRCUIT_SIZE, NODE_COUNT,
};
pub use player::{Player, PlayerStats, ALL_PLAYERS, PLAYER_COUNT};
pub use state::{GameState, Outcome, Phase};
pub use topology::{inward_spoke, Edge, EdgeKind, Topology, EDGE_COUNT, RING_EDGE_COUNT, SPOKE_COUNT};
