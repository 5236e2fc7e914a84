//! Node identities on the three-circuit board.
//!
//! The board has three concentric circuits of six nodes each. A node is
//! identified by its circuit and its index around that circuit, written in
//! notation as `outer-0` .. `inner-5`. Nodes are also addressable by a dense
//! slot number (`0..NODE_COUNT`) so per-node data can live in fixed arrays.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of nodes on each circuit.
pub const CIRCUIT_SIZE: usize = 6;

/// Number of circuits on the board.
pub const CIRCUIT_COUNT: usize = 3;

/// Total number of nodes on the board.
pub const NODE_COUNT: usize = CIRCUIT_SIZE * CIRCUIT_COUNT;

/// One of the three concentric rings, ordered from the outside in.
///
/// The `#[repr(u8)]` discriminant doubles as the circuit's slot block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Circuit {
    Outer = 0,
    Middle = 1,
    Inner = 2,
}

/// All circuits in unlock order.
pub const ALL_CIRCUITS: [Circuit; CIRCUIT_COUNT] = [Circuit::Outer, Circuit::Middle, Circuit::Inner];

impl Circuit {
    /// Weight of an edge that lies on, or leads into, this circuit.
    pub const fn weight(self) -> u32 {
        match self {
            Circuit::Outer => 1,
            Circuit::Middle => 2,
            Circuit::Inner => 3,
        }
    }

    /// Lowercase name used in node notation.
    pub const fn name(self) -> &'static str {
        match self {
            Circuit::Outer => "outer",
            Circuit::Middle => "middle",
            Circuit::Inner => "inner",
        }
    }

    /// Parses a circuit from its lowercase name.
    pub fn from_name(s: &str) -> Option<Circuit> {
        match s {
            "outer" => Some(Circuit::Outer),
            "middle" => Some(Circuit::Middle),
            "inner" => Some(Circuit::Inner),
            _ => None,
        }
    }

    /// The circuit unlocked after this one fills, or `None` for the innermost.
    pub const fn next(self) -> Option<Circuit> {
        match self {
            Circuit::Outer => Some(Circuit::Middle),
            Circuit::Middle => Some(Circuit::Inner),
            Circuit::Inner => None,
        }
    }

    const fn from_ordinal(n: usize) -> Circuit {
        match n {
            0 => Circuit::Outer,
            1 => Circuit::Middle,
            _ => Circuit::Inner,
        }
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors produced when parsing node notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeIdError {
    #[error("expected '<circuit>-<index>', got '{0}'")]
    Malformed(String),

    #[error("unknown circuit: '{0}'")]
    UnknownCircuit(String),

    #[error("node index out of range 0..6: '{0}'")]
    BadIndex(String),
}

/// A position on the board: a circuit plus an index 0..6 around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NodeId {
    pub circuit: Circuit,
    pub index: u8,
}

impl NodeId {
    /// Creates a node id. The index must be below `CIRCUIT_SIZE`.
    pub const fn new(circuit: Circuit, index: u8) -> Self {
        assert!((index as usize) < CIRCUIT_SIZE);
        NodeId { circuit, index }
    }

    /// Dense array slot for this node: circuits occupy consecutive blocks of six.
    pub const fn slot(self) -> usize {
        self.circuit as usize * CIRCUIT_SIZE + self.index as usize
    }

    /// Inverse of [`NodeId::slot`].
    pub const fn from_slot(slot: usize) -> NodeId {
        assert!(slot < NODE_COUNT);
        NodeId {
            circuit: Circuit::from_ordinal(slot / CIRCUIT_SIZE),
            index: (slot % CIRCUIT_SIZE) as u8,
        }
    }

    /// The next node around the same circuit (index + 1, wrapping).
    pub const fn clockwise(self) -> NodeId {
        NodeId {
            circuit: self.circuit,
            index: ((self.index as usize + 1) % CIRCUIT_SIZE) as u8,
        }
    }

    /// The previous node around the same circuit (index - 1, wrapping).
    pub const fn counter_clockwise(self) -> NodeId {
        NodeId {
            circuit: self.circuit,
            index: ((self.index as usize + CIRCUIT_SIZE - 1) % CIRCUIT_SIZE) as u8,
        }
    }

    /// The same-indexed node on another circuit.
    pub const fn on(self, circuit: Circuit) -> NodeId {
        NodeId { circuit, index: self.index }
    }
}

const fn build_all_nodes() -> [NodeId; NODE_COUNT] {
    let mut nodes = [NodeId { circuit: Circuit::Outer, index: 0 }; NODE_COUNT];
    let mut slot = 0;
    while slot < NODE_COUNT {
        nodes[slot] = NodeId::from_slot(slot);
        slot += 1;
    }
    nodes
}

/// All nodes in slot order (outer-0 .. outer-5, middle-0 .. inner-5).
pub const ALL_NODES: [NodeId; NODE_COUNT] = build_all_nodes();

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.circuit.name(), self.index)
    }
}

impl FromStr for NodeId {
    type Err = NodeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (circuit, index) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| NodeIdError::Malformed(s.to_string()))?;
        let circuit =
            Circuit::from_name(circuit).ok_or_else(|| NodeIdError::UnknownCircuit(circuit.to_string()))?;
        let index: u8 = index
            .parse()
            .map_err(|_| NodeIdError::BadIndex(index.to_string()))?;
        if index as usize >= CIRCUIT_SIZE {
            return Err(NodeIdError::BadIndex(index.to_string()));
        }
        Ok(NodeId { circuit, index })
    }
}

impl TryFrom<String> for NodeId {
    type Error = NodeIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<NodeId> for String {
    fn from(node: NodeId) -> String {
        node.to_string()
    }
}
