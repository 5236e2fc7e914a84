//! Presentation snapshot.
//!
//! Everything a renderer needs after a state change, flattened into plain
//! serializable records: per-player score and reserve, per-node occupant and
//! highlight, per-edge controller, both timers and the outcome once decided.
//! Nodes and edges are identified by notation so the presentation layer can
//! keep its own id-keyed mapping to visual elements.

use serde::Serialize;

use crate::board::{
    Circuit, EdgeKind, GameState, NodeId, Outcome, Phase, Player, ALL_NODES, ALL_PLAYERS,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerView {
    pub player: Player,
    pub score: u32,
    pub titans_remaining: u8,
    pub titans_placed: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeView {
    pub id: NodeId,
    pub occupant: Option<Player>,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeView {
    pub a: NodeId,
    pub b: NodeId,
    pub weight: u32,
    pub kind: EdgeKind,
    pub controlled_by: Option<Player>,
}

/// Observable state of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub current_player: Player,
    pub phase: Phase,
    pub unlocked_circuit: Circuit,
    pub game_timer: u32,
    pub turn_timer: u32,
    pub active: bool,
    pub paused: bool,
    pub players: Vec<PlayerView>,
    pub nodes: Vec<NodeView>,
    pub edges: Vec<EdgeView>,
    pub outcome: Option<Outcome>,
}

impl Snapshot {
    /// Captures the observable parts of `state`.
    pub fn of(state: &GameState) -> Self {
        let players = ALL_PLAYERS
            .iter()
            .map(|&p| {
                let stats = state.stats(p);
                PlayerView {
                    player: p,
                    score: stats.score,
                    titans_remaining: stats.titans_remaining,
                    titans_placed: stats.titans_placed,
                }
            })
            .collect();

        let nodes = ALL_NODES
            .iter()
            .map(|&id| NodeView {
                id,
                occupant: state.occupant(id),
                selected: state.selected == Some(id),
            })
            .collect();

        let edges = state
            .topology
            .edges()
            .iter()
            .zip(state.edge_control.iter())
            .map(|(e, control)| EdgeView {
                a: e.a,
                b: e.b,
                weight: e.weight,
                kind: e.kind,
                controlled_by: *control,
            })
            .collect();

        Snapshot {
            current_player: state.current_player,
            phase: state.phase,
            unlocked_circuit: state.unlocked_circuit,
            game_timer: state.game_timer,
            turn_timer: state.turn_timer,
            active: state.active,
            paused: state.paused,
            players,
            nodes,
            edges,
            outcome: state.outcome,
        }
    }

    /// Serializes the snapshot as a single line of JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
