//! Board topology: the fixed weighted edge set and its adjacency index.
//!
//! Every node is joined to its clockwise neighbour on the same circuit, which
//! closes each circuit into a six-cycle. Radial spokes join odd-indexed outer
//! nodes to the middle node of the same index, and even-indexed middle nodes
//! to the inner node of the same index.
//!
//! Ring edges weigh their own circuit's weight. A spoke weighs the weight of
//! the circuit it leads into, so an outer-middle spoke is worth 2 and a
//! middle-inner spoke is worth 3.

use serde::Serialize;

use super::node::{Circuit, NodeId, ALL_NODES, NODE_COUNT};

/// Number of ring edges (six per circuit).
pub const RING_EDGE_COUNT: usize = 18;

/// Number of radial spokes.
pub const SPOKE_COUNT: usize = 6;

/// Total number of edges on the board.
pub const EDGE_COUNT: usize = RING_EDGE_COUNT + SPOKE_COUNT;

/// Whether an edge runs around a circuit or between circuits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Ring,
    Spoke,
}

/// An undirected weighted edge between two nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub a: NodeId,
    pub b: NodeId,
    pub weight: u32,
    pub kind: EdgeKind,
}

impl Edge {
    /// Returns true if this edge joins `x` and `y`, in either order.
    pub fn connects(&self, x: NodeId, y: NodeId) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }
}

/// Returns the inner node reached by the spoke leaving `node`, if any.
///
/// Only odd outer nodes and even middle nodes have an inward spoke.
pub const fn inward_spoke(node: NodeId) -> Option<NodeId> {
    match node.circuit {
        Circuit::Outer if node.index % 2 == 1 => Some(node.on(Circuit::Middle)),
        Circuit::Middle if node.index % 2 == 0 => Some(node.on(Circuit::Inner)),
        _ => None,
    }
}

/// The immutable board graph for one game.
///
/// Adjacency is stored as a flat neighbour list with per-node `(start, end)`
/// offsets, built from the edge list so it is symmetric by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    edges: Vec<Edge>,
    neighbors: Vec<NodeId>,
    offsets: [(u8, u8); NODE_COUNT],
}

impl Topology {
    /// Generates the 18-node, 24-edge board.
    pub fn build() -> Self {
        let mut edges = Vec::with_capacity(EDGE_COUNT);
        for node in ALL_NODES {
            edges.push(Edge {
                a: node,
                b: node.clockwise(),
                weight: node.circuit.weight(),
                kind: EdgeKind::Ring,
            });
            if let Some(inner) = inward_spoke(node) {
                edges.push(Edge {
                    a: node,
                    b: inner,
                    weight: inner.circuit.weight(),
                    kind: EdgeKind::Spoke,
                });
            }
        }
        debug_assert_eq!(edges.len(), EDGE_COUNT);

        let mut per_node: [Vec<NodeId>; NODE_COUNT] = std::array::from_fn(|_| Vec::new());
        for edge in &edges {
            per_node[edge.a.slot()].push(edge.b);
            per_node[edge.b.slot()].push(edge.a);
        }

        let mut neighbors = Vec::with_capacity(EDGE_COUNT * 2);
        let mut offsets = [(0u8, 0u8); NODE_COUNT];
        for (slot, list) in per_node.iter_mut().enumerate() {
            list.sort_by_key(|n| n.slot());
            let start = neighbors.len();
            neighbors.extend_from_slice(list);
            offsets[slot] = (start as u8, neighbors.len() as u8);
        }

        Topology {
            edges,
            neighbors,
            offsets,
        }
    }

    /// All edges, ring edge then optional spoke for each node in slot order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Nodes sharing an edge with `node`, in slot order.
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        let (start, end) = self.offsets[node.slot()];
        &self.neighbors[start as usize..end as usize]
    }

    /// Returns true if an edge joins `a` and `b`.
    pub fn is_adjacent(&self, a: NodeId, b: NodeId) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// Sum of every edge weight: the most points both players could hold together.
    pub fn total_weight(&self) -> u32 {
        self.edges.iter().map(|e| e.weight).sum()
    }
}

impl Default for Topology {
    fn default() -> Self {
        Topology::build()
    }
}
