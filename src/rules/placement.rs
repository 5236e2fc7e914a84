//! Placement-phase rules: validating and applying placements, and unlocking
//! circuits as they fill.

use tracing::info;

use super::MoveError;
use crate::board::{Circuit, GameState, NodeId, Player};

/// Result of checking whether the unlocked circuit has filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircuitCheck {
    /// The unlocked circuit still has empty nodes.
    Open,
    /// The unlocked circuit filled and the next one is now open.
    Unlocked(Circuit),
    /// The innermost circuit is full; the game should end.
    AllFull,
}

/// Checks that `player` may place a titan on `node`.
pub fn validate_placement(state: &GameState, node: NodeId, player: Player) -> Result<(), MoveError> {
    if node.circuit != state.unlocked_circuit {
        return Err(MoveError::WrongCircuit {
            node,
            unlocked: state.unlocked_circuit,
        });
    }
    if state.occupant(node).is_some() {
        return Err(MoveError::Occupied(node));
    }
    if state.stats(player).titans_remaining == 0 {
        return Err(MoveError::NoTitansRemaining(player));
    }
    Ok(())
}

/// Puts one of `player`'s reserve titans on `node`.
///
/// The caller is responsible for validating first.
pub fn apply_placement(state: &mut GameState, node: NodeId, player: Player) {
    debug_assert!(state.occupant(node).is_none(), "placing onto occupied {}", node);
    debug_assert!(state.stats(player).titans_remaining > 0, "{} has no reserve", player);

    state.set_occupant(node, Some(player));
    let stats = state.stats_mut(player);
    stats.titans_remaining -= 1;
    stats.titans_placed += 1;
    info!(%player, %node, remaining = stats.titans_remaining, "titan placed");
}

/// Advances the unlocked circuit if it has filled.
///
/// Circuits only ever advance outer, middle, inner. When the inner circuit is
/// the unlocked one and it is full, reports `AllFull` and leaves the state as is.
pub fn check_circuit_full(state: &mut GameState) -> CircuitCheck {
    let circuit = state.unlocked_circuit;
    if !state.is_circuit_full(circuit) {
        return CircuitCheck::Open;
    }
    match circuit.next() {
        Some(next) => {
            state.unlocked_circuit = next;
            info!(filled = %circuit, unlocked = %next, "circuit unlocked");
            CircuitCheck::Unlocked(next)
        }
        None => CircuitCheck::AllFull,
    }
}
