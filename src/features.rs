//! State abstraction - reduces a full snapshot to a hashable table key

use serde::{Deserialize, Serialize};

use crate::ports::GameSnapshot;
use crate::types::Pos;

/// Compact, hashable abstraction of a game snapshot.
///
/// The full simulation state is far too large to index a table with, so
/// the learner keys its Q-values on three features: the actor position,
/// the ghost positions, and the remaining food count. Two abstractions are
/// equal iff all three components are equal; ghost ordering matters and is
/// kept exactly as the simulation enumerates it (no canonicalization), so
/// lookups stay consistent across ticks.
///
/// An abstraction is built fresh from a snapshot at every decision point
/// and is never persisted independently of the snapshot it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateFeatures {
    /// Actor position
    pub agent: Pos,
    /// Ghost positions in enumeration order
    pub ghosts: Vec<Pos>,
    /// Food pellets still on the grid
    pub food_remaining: u32,
}

impl StateFeatures {
    /// Derive the abstraction from a snapshot. Pure and deterministic.
    pub fn from_snapshot<S: GameSnapshot>(snapshot: &S) -> Self {
        StateFeatures {
            agent: snapshot.agent_position(),
            ghosts: snapshot.ghost_positions(),
            food_remaining: snapshot.food_remaining(),
        }
    }
}
