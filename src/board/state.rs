//! Game state representation.
//!
//! Holds the complete snapshot of a game at a given point in time: node
//! occupancy, derived edge control, player counters, phase, the unlocked
//! circuit, the pending selection, both clocks and the activity flags.
//! Every rule and state-machine operation takes this struct by reference;
//! there is no module-level game state.

use serde::Serialize;

use super::node::{Circuit, NodeId, ALL_NODES, NODE_COUNT};
use super::player::{Player, PlayerStats, PLAYER_COUNT};
use super::topology::{Topology, EDGE_COUNT};
use crate::config::GameConfig;

/// The phase of play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Players take turns dropping titans onto the unlocked circuit.
    Placement,
    /// Players take turns sliding titans along edges.
    Movement,
}

/// How a finished game was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum Outcome {
    /// One player finished with a strictly higher score.
    Winner { player: Player, score: u32 },
    /// Both players finished on the same score.
    Tie { score: u32 },
}

impl Outcome {
    /// The winning (or shared) score.
    pub fn score(&self) -> u32 {
        match *self {
            Outcome::Winner { score, .. } | Outcome::Tie { score } => score,
        }
    }

    /// The winner, or `None` for a tie.
    pub fn winner(&self) -> Option<Player> {
        match *self {
            Outcome::Winner { player, .. } => Some(player),
            Outcome::Tie { .. } => None,
        }
    }
}

/// Complete game state.
///
/// Per-node and per-edge data use fixed arrays indexed by `NodeId::slot()`
/// and by position in `topology.edges()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub config: GameConfig,
    pub topology: Topology,
    /// Owner of the titan on each node, if any.
    pub occupancy: [Option<Player>; NODE_COUNT],
    /// Controller of each edge as of the last scoring pass.
    pub edge_control: [Option<Player>; EDGE_COUNT],
    pub players: [PlayerStats; PLAYER_COUNT],
    pub current_player: Player,
    pub phase: Phase,
    pub unlocked_circuit: Circuit,
    /// Titan picked up during the movement phase, awaiting a destination.
    pub selected: Option<NodeId>,
    pub game_timer: u32,
    pub turn_timer: u32,
    pub active: bool,
    pub paused: bool,
    pub outcome: Option<Outcome>,
}

impl GameState {
    /// Creates a running game with an empty board.
    pub fn new(config: GameConfig) -> Self {
        let fresh = PlayerStats::fresh(config.titans_per_player);
        GameState {
            config,
            topology: Topology::build(),
            occupancy: [None; NODE_COUNT],
            edge_control: [None; EDGE_COUNT],
            players: [fresh; PLAYER_COUNT],
            current_player: Player::Red,
            phase: Phase::Placement,
            unlocked_circuit: Circuit::Outer,
            selected: None,
            game_timer: config.game_duration_secs,
            turn_timer: config.turn_duration_secs,
            active: true,
            paused: false,
            outcome: None,
        }
    }

    /// Owner of the titan on `node`.
    pub fn occupant(&self, node: NodeId) -> Option<Player> {
        self.occupancy[node.slot()]
    }

    /// Sets or clears the titan on `node` without touching any counters.
    pub fn set_occupant(&mut self, node: NodeId, owner: Option<Player>) {
        self.occupancy[node.slot()] = owner;
    }

    pub fn stats(&self, player: Player) -> &PlayerStats {
        &self.players[player as usize]
    }

    pub fn stats_mut(&mut self, player: Player) -> &mut PlayerStats {
        &mut self.players[player as usize]
    }

    /// Returns true while clicks should be acted on.
    pub fn is_accepting_input(&self) -> bool {
        self.active && !self.paused
    }

    /// Returns true if every node of `circuit` holds a titan.
    pub fn is_circuit_full(&self, circuit: Circuit) -> bool {
        ALL_NODES
            .iter()
            .filter(|n| n.circuit == circuit)
            .all(|n| self.occupant(*n).is_some())
    }

    /// Nodes currently holding one of `player`'s titans.
    pub fn titans_of(&self, player: Player) -> impl Iterator<Item = NodeId> + '_ {
        ALL_NODES
            .into_iter()
            .filter(move |n| self.occupant(*n) == Some(player))
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::player::ALL_PLAYERS;

    #[test]
    fn fresh_game_values() {
        let state = GameState::default();
        assert!(state.occupancy.iter().all(|o| o.is_none()));
        assert!(state.edge_control.iter().all(|c| c.is_none()));
        assert_eq!(state.current_player, Player::Red);
        assert_eq!(state.phase, Phase::Placement);
        assert_eq!(state.unlocked_circuit, Circuit::Outer);
        assert_eq!(state.game_timer, 600);
        assert_eq!(state.turn_timer, 60);
        assert!(state.active);
        assert!(!state.paused);
        assert!(state.selected.is_none());
        assert!(state.outcome.is_none());
        for p in ALL_PLAYERS {
            assert_eq!(state.stats(p).titans_remaining, 4);
            assert_eq!(state.stats(p).score, 0);
        }
    }

    #[test]
    fn occupancy_by_node() {
        let mut state = GameState::default();
        let node = NodeId::new(Circuit::Middle, 2);
        state.set_occupant(node, Some(Player::Blue));
        assert_eq!(state.occupant(node), Some(Player::Blue));
        assert_eq!(state.titans_of(Player::Blue).collect::<Vec<_>>(), vec![node]);
        assert_eq!(state.titans_of(Player::Red).count(), 0);
    }

    #[test]
    fn circuit_full_detection() {
        let mut state = GameState::default();
        for i in 0..5 {
            state.set_occupant(NodeId::new(Circuit::Outer, i), Some(Player::Red));
        }
        assert!(!state.is_circuit_full(Circuit::Outer));
        state.set_occupant(NodeId::new(Circuit::Outer, 5), Some(Player::Blue));
        assert!(state.is_circuit_full(Circuit::Outer));
        assert!(!state.is_circuit_full(Circuit::Middle));
    }

    #[test]
    fn input_gate() {
        let mut state = GameState::default();
        assert!(state.is_accepting_input());
        state.paused = true;
        assert!(!state.is_accepting_input());
        state.paused = false;
        state.active = false;
        assert!(!state.is_accepting_input());
    }

    #[test]
    fn outcome_accessors() {
        let win = Outcome::Winner { player: Player::Blue, score: 7 };
        assert_eq!(win.winner(), Some(Player::Blue));
        assert_eq!(win.score(), 7);
        let tie = Outcome::Tie { score: 3 };
        assert_eq!(tie.winner(), None);
        assert_eq!(tie.score(), 3);
    }
}
