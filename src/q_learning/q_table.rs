//! Sparse Q-table with per-pair visitation counts

use std::collections::HashMap;

use crate::features::StateFeatures;
use crate::types::Action;

/// Q-table mapping (state, action) pairs to value estimates and
/// visitation counts.
///
/// Both maps are sparse: reading an unseen pair returns 0.0 / 0 rather
/// than failing, and no insertion happens on read. The two maps share the
/// same key type and only ever mutate together through
/// [`QTable::record_update`], so a pair's count is exactly the number of
/// learning updates applied to it. Entries are never evicted.
#[derive(Debug, Clone, Default)]
pub struct QTable {
    /// Q-values: (state, action) -> estimate
    q_values: HashMap<(StateFeatures, Action), f64>,
    /// Visitation counts: (state, action) -> applied update count
    visits: HashMap<(StateFeatures, Action), u32>,
}

impl QTable {
    /// Create an empty Q-table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the Q-value for a state-action pair, 0.0 if unseen.
    pub fn q_value(&self, state: &StateFeatures, action: Action) -> f64 {
        self.q_values
            .get(&(state.clone(), action))
            .copied()
            .unwrap_or(0.0)
    }

    /// Get the visitation count for a state-action pair, 0 if unseen.
    pub fn visit_count(&self, state: &StateFeatures, action: Action) -> u32 {
        self.visits
            .get(&(state.clone(), action))
            .copied()
            .unwrap_or(0)
    }

    /// Store an updated Q-value and increment the pair's visitation count.
    ///
    /// This is the sole write path for both maps; callers other than the
    /// learning update rule should not invoke it.
    pub fn record_update(&mut self, state: StateFeatures, action: Action, value: f64) {
        let key = (state, action);
        self.q_values.insert(key.clone(), value);
        *self.visits.entry(key).or_insert(0) += 1;
    }

    /// Maximum Q-value over the given actions, 0.0 if the slice is empty.
    ///
    /// The empty case is the bootstrap value for terminal states, where
    /// the simulation reports no legal actions.
    pub fn max_q(&self, state: &StateFeatures, actions: &[Action]) -> f64 {
        actions
            .iter()
            .map(|&action| self.q_value(state, action))
            .fold(None, |best: Option<f64>, q| {
                Some(best.map_or(q, |b| b.max(q)))
            })
            .unwrap_or(0.0)
    }

    /// All actions achieving the maximum Q-value among the given actions.
    ///
    /// Returns the full tie set so the caller can break ties uniformly at
    /// random. Candidates are read from the same map, so exact equality
    /// against the maximum is sound. Empty input yields an empty set.
    pub fn greedy_actions(&self, state: &StateFeatures, actions: &[Action]) -> Vec<Action> {
        if actions.is_empty() {
            return Vec::new();
        }
        let best = self.max_q(state, actions);
        actions
            .iter()
            .copied()
            .filter(|&action| self.q_value(state, action) == best)
            .collect()
    }

    /// Number of distinct (state, action) pairs with a stored Q-value.
    pub fn len(&self) -> usize {
        self.q_values.len()
    }

    /// Whether the table has no stored Q-values.
    pub fn is_empty(&self) -> bool {
        self.q_values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Pos;

    fn state(x: i32) -> StateFeatures {
        StateFeatures {
            agent: Pos::new(x, 0),
            ghosts: vec![Pos::new(9, 9)],
            food_remaining: 5,
        }
    }

    #[test]
    fn unseen_pair_defaults_to_zero() {
        let table = QTable::new();
        assert_eq!(table.q_value(&state(0), Action::North), 0.0);
        assert_eq!(table.visit_count(&state(0), Action::North), 0);
        assert!(table.is_empty());
    }

    #[test]
    fn reads_are_idempotent() {
        let mut table = QTable::new();
        table.record_update(state(0), Action::East, 2.5);

        for _ in 0..3 {
            assert_eq!(table.q_value(&state(0), Action::East), 2.5);
            assert_eq!(table.visit_count(&state(0), Action::East), 1);
        }
    }

    #[test]
    fn record_update_increments_count_alongside_value() {
        let mut table = QTable::new();
        table.record_update(state(0), Action::North, 1.0);
        table.record_update(state(0), Action::North, 0.5);

        assert_eq!(table.q_value(&state(0), Action::North), 0.5);
        assert_eq!(table.visit_count(&state(0), Action::North), 2);
        // Sibling action untouched.
        assert_eq!(table.visit_count(&state(0), Action::South), 0);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn max_q_over_actions() {
        let mut table = QTable::new();
        table.record_update(state(1), Action::North, 0.5);
        table.record_update(state(1), Action::South, 1.5);
        table.record_update(state(1), Action::East, 0.8);

        let actions = [Action::North, Action::South, Action::East];
        assert_eq!(table.max_q(&state(1), &actions), 1.5);
        // Unseen West drags the unstored default into the comparison.
        assert_eq!(table.max_q(&state(1), &[Action::West]), 0.0);
    }

    #[test]
    fn max_q_of_empty_action_set_is_zero() {
        let mut table = QTable::new();
        table.record_update(state(1), Action::North, -4.0);
        assert_eq!(table.max_q(&state(1), &[]), 0.0);
    }

    #[test]
    fn greedy_actions_returns_full_tie_set() {
        let mut table = QTable::new();
        table.record_update(state(2), Action::North, 1.0);
        table.record_update(state(2), Action::South, 1.0);
        table.record_update(state(2), Action::East, -2.0);

        let actions = [Action::North, Action::South, Action::East, Action::West];
        let greedy = table.greedy_actions(&state(2), &actions);
        assert_eq!(greedy, vec![Action::North, Action::South]);
    }

    #[test]
    fn greedy_actions_all_tied_when_state_unseen() {
        let table = QTable::new();
        let actions = [Action::North, Action::East];
        assert_eq!(
            table.greedy_actions(&state(3), &actions),
            vec![Action::North, Action::East]
        );
    }
}
