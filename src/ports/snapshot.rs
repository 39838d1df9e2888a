//! Snapshot port - the read-only view the simulation exposes to the agent
//!
//! The game engine owns the full simulation state; the agent only reads
//! it. This port defines exactly what the learner needs: legal actions,
//! the actor and ghost positions, the remaining food count, the running
//! score, and the terminal flags.

use crate::types::{Action, Pos};

/// Read-only view of one simulation tick.
///
/// # Design Philosophy
///
/// This trait is a **port** in hexagonal architecture - the boundary
/// between the learning core and the external game engine. The engine
/// supplies an adapter implementing it; tests supply a hand-built fake.
///
/// Implementations must be cheap to clone: the agent keeps a clone of the
/// snapshot it last acted from so the reward model can compare it against
/// the following snapshot.
///
/// # Contract
///
/// - `legal_actions` may include [`Action::Stop`]; filtering it out is the
///   policy's responsibility, not the snapshot's.
/// - `ghost_positions` must preserve the simulation's ghost enumeration
///   order across calls. The state abstraction hashes the positions in
///   order, so a stable order is required for table lookups to be
///   consistent.
/// - `is_win` and `is_lose` are mutually exclusive in practice.
pub trait GameSnapshot: Clone {
    /// Actions legal for the actor on this tick, possibly including `Stop`.
    fn legal_actions(&self) -> Vec<Action>;

    /// Current position of the actor.
    fn agent_position(&self) -> Pos;

    /// Ghost positions in the simulation's enumeration order.
    fn ghost_positions(&self) -> Vec<Pos>;

    /// Number of food pellets still on the grid.
    fn food_remaining(&self) -> u32;

    /// Current game score.
    fn score(&self) -> f64;

    /// Whether this snapshot is a winning terminal state.
    fn is_win(&self) -> bool;

    /// Whether this snapshot is a losing terminal state.
    fn is_lose(&self) -> bool;
}
