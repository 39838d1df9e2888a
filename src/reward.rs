//! Shaped reward model over pairs of raw snapshots
//!
//! The raw game score alone is a sparse training signal, so the reward
//! for a transition is shaped from four additive terms: the score delta,
//! a large terminal bonus/penalty, a bonus per pellet eaten, and a
//! penalty per ghost adjacent to the actor.

use crate::ports::GameSnapshot;

/// Bonus for reaching a winning terminal state.
const WIN_BONUS: f64 = 1000.0;

/// Penalty for reaching a losing terminal state.
const LOSE_PENALTY: f64 = 1000.0;

/// Reward per food pellet consumed between the two snapshots.
const FOOD_REWARD: f64 = 600.0;

/// Penalty per ghost within [`GHOST_DANGER_DISTANCE`] of the actor.
const GHOST_PENALTY: f64 = 300.0;

/// Ghosts strictly closer than this Manhattan distance are penalized.
const GHOST_DANGER_DISTANCE: u32 = 2;

/// Compute the shaped reward for the transition from `start` to `end`.
///
/// Pure function of the two snapshots; no clamping or normalization is
/// applied to the result. The terms, in order:
///
/// 1. Score delta: `end.score() - start.score()`
/// 2. Terminal bonus: +1000 on a win, -1000 on a loss
/// 3. Food progress: +600 per pellet consumed between the snapshots
///    (signed, so it goes negative if the count somehow increased)
/// 4. Ghost proximity: -300 for each ghost in `end` at Manhattan distance
///    0 or 1 from the actor, stacking per ghost
///
/// A snapshot pair with no ghosts simply skips the proximity term.
pub fn compute_reward<S: GameSnapshot>(start: &S, end: &S) -> f64 {
    let mut reward = end.score() - start.score();

    if end.is_win() {
        reward += WIN_BONUS;
    }
    if end.is_lose() {
        reward -= LOSE_PENALTY;
    }

    let food_eaten = i64::from(start.food_remaining()) - i64::from(end.food_remaining());
    reward += food_eaten as f64 * FOOD_REWARD;

    let agent = end.agent_position();
    for ghost in end.ghost_positions() {
        if agent.manhattan_distance(ghost) < GHOST_DANGER_DISTANCE {
            reward -= GHOST_PENALTY;
        }
    }

    reward
}
