//! Q-learning agent driven by simulation callbacks
//!
//! The game loop calls [`QLearnAgent::select_action`] once per tick and
//! [`QLearnAgent::on_episode_end`] once per completed game. The agent
//! keeps a single pending (state, action) decision between callbacks;
//! each callback finalizes the pending transition with a reward and a
//! temporal difference update before anything else happens.

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use crate::{
    app::AgentConfig,
    error::{Error, Result},
    features::StateFeatures,
    ports::GameSnapshot,
    q_learning::q_table::QTable,
    reward::compute_reward,
    types::Action,
};

/// Lifecycle phase of the agent.
///
/// The transition from `Training` to `Evaluation` is one-way: once the
/// configured number of training episodes has completed, alpha and
/// epsilon are forced to zero and never restored, freezing the learned
/// Q-values and disabling exploration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Training,
    Evaluation,
}

/// Report returned from the episode-end callback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpisodeReport {
    /// Number of episodes completed so far, including this one.
    pub episode: u32,
    /// Phase the agent is in after this episode.
    pub phase: Phase,
    /// True exactly once: on the episode that exhausted the training
    /// budget and switched the agent to evaluation.
    pub training_complete: bool,
}

/// Summary of an agent's run, suitable for JSON export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningSummary {
    /// Episodes completed
    pub episodes_completed: u32,
    /// Current phase
    pub phase: Phase,
    /// Distinct (state, action) pairs with a stored Q-value
    pub pairs_visited: usize,
}

impl LearningSummary {
    /// Save the summary to a JSON file.
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load a summary from a JSON file.
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let summary = serde_json::from_reader(file)?;
        Ok(summary)
    }
}

/// The most recent decision, awaiting its resulting reward and update.
///
/// Holds the raw snapshot the decision was made from (the reward model
/// compares it against the following snapshot) together with the derived
/// features and the chosen action.
#[derive(Debug, Clone)]
struct PendingDecision<S> {
    snapshot: S,
    features: StateFeatures,
    action: Action,
}

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Q-learning agent (off-policy TD control) for the grid pursuit game.
///
/// Selects actions epsilon-greedily over a sparse Q-table and updates
/// toward `r + gamma * max_a' Q(s', a')` once per completed transition.
/// The learning rate anneals per state-action pair: the pair's effective
/// rate is `alpha / (1 + n(s, a))`, so estimates stabilize as pairs are
/// revisited.
#[derive(Debug, Clone)]
pub struct QLearnAgent<S: GameSnapshot> {
    q_table: QTable,
    alpha: f64,
    epsilon: f64,
    gamma: f64,
    max_attempts: u32,
    num_training: u32,
    episodes_so_far: u32,
    phase: Phase,
    pending: Option<PendingDecision<S>>,
    rng: StdRng,
    rng_seed: Option<u64>,
}

impl<S: GameSnapshot> QLearnAgent<S> {
    /// Create a new agent from the given hyperparameters.
    pub fn new(config: AgentConfig) -> Self {
        Self {
            q_table: QTable::new(),
            alpha: config.alpha,
            epsilon: config.epsilon,
            gamma: config.gamma,
            max_attempts: config.max_attempts,
            num_training: config.num_training,
            episodes_so_far: 0,
            phase: Phase::Training,
            pending: None,
            rng: build_rng(config.seed),
            rng_seed: config.seed,
        }
    }

    /// Seed the agent's random number generator for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.set_rng_seed(seed);
        self
    }

    /// Reseed the random number generator in place.
    pub fn set_rng_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
        self.rng_seed = Some(seed);
    }

    /// Current learning rate scale (zero once training is over).
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Current exploration probability (zero once training is over).
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Discount factor.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Per-pair attempt cap. Accepted from configuration but not consumed
    /// by the update rule; reserved for exploration-bonus strategies.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Configured training-episode budget.
    pub fn num_training(&self) -> u32 {
        self.num_training
    }

    /// Episodes completed so far.
    pub fn episodes_so_far(&self) -> u32 {
        self.episodes_so_far
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of distinct (state, action) pairs with a stored Q-value.
    pub fn table_size(&self) -> usize {
        self.q_table.len()
    }

    /// Q-value estimate for a state-action pair, 0.0 if never updated.
    pub fn q_value(&self, state: &StateFeatures, action: Action) -> f64 {
        self.q_table.q_value(state, action)
    }

    /// Number of learning updates applied to a state-action pair.
    pub fn visit_count(&self, state: &StateFeatures, action: Action) -> u32 {
        self.q_table.visit_count(state, action)
    }

    /// Summarize the run so far.
    pub fn summary(&self) -> LearningSummary {
        LearningSummary {
            episodes_completed: self.episodes_so_far,
            phase: self.phase,
            pairs_visited: self.q_table.len(),
        }
    }

    /// Per-pair annealed learning rate: `alpha / (1 + n(s, a))`.
    fn effective_alpha(&self, state: &StateFeatures, action: Action) -> f64 {
        self.alpha / (1.0 + f64::from(self.q_table.visit_count(state, action)))
    }

    /// Maximum Q-value attainable from the snapshot's state.
    ///
    /// Ranges over the snapshot's legal actions as reported, without
    /// filtering the stop action; an empty legal set (terminal state)
    /// bootstraps to 0.0.
    pub fn max_q(&self, snapshot: &S) -> f64 {
        let features = StateFeatures::from_snapshot(snapshot);
        self.q_table.max_q(&features, &snapshot.legal_actions())
    }

    /// Apply a Q-learning update for one completed transition.
    ///
    /// Computes the target `reward + gamma * max_q(next)`, blends it into
    /// the stored estimate at the pair's annealed rate, and increments the
    /// pair's visitation count. This is the sole mutator of the tables.
    pub fn learn(&mut self, state: StateFeatures, action: Action, reward: f64, next: &S) {
        let target = reward + self.gamma * self.max_q(next);
        let alpha_eff = self.effective_alpha(&state, action);
        let current = self.q_table.q_value(&state, action);
        let updated = (1.0 - alpha_eff) * current + alpha_eff * target;
        self.q_table.record_update(state, action, updated);
    }

    /// Finalize the pending decision, if any, against the given snapshot.
    fn settle_pending(&mut self, snapshot: &S) {
        if let Some(pending) = self.pending.take() {
            let reward = compute_reward(&pending.snapshot, snapshot);
            self.learn(pending.features, pending.action, reward, snapshot);
        }
    }

    /// Select the next action for the current snapshot.
    ///
    /// Called by the game loop once per tick. If a previous decision is
    /// still pending, its transition is settled first: the reward from
    /// the stored snapshot to this one is computed and the learning
    /// update applied. Then an action is chosen epsilon-greedily among
    /// the snapshot's legal actions with the stop action removed: with
    /// probability epsilon a uniform random action (exploration),
    /// otherwise a uniform random choice among the actions tied for the
    /// maximum Q-value (exploitation).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoLegalActions`] if the legal set is empty after
    /// removing the stop action. This should not occur in a live game but
    /// is reported explicitly rather than returning an arbitrary action.
    pub fn select_action(&mut self, snapshot: &S) -> Result<Action> {
        self.settle_pending(snapshot);

        let legal: Vec<Action> = snapshot
            .legal_actions()
            .into_iter()
            .filter(|action| !action.is_stop())
            .collect();
        if legal.is_empty() {
            return Err(Error::NoLegalActions);
        }

        let features = StateFeatures::from_snapshot(snapshot);

        let action = if self.rng.random::<f64>() < self.epsilon {
            // Explore: uniform over the legal set
            *legal.choose(&mut self.rng).unwrap()
        } else {
            // Exploit: uniform over the greedy tie set
            let greedy = self.q_table.greedy_actions(&features, &legal);
            *greedy.choose(&mut self.rng).unwrap()
        };

        self.pending = Some(PendingDecision {
            snapshot: snapshot.clone(),
            features,
            action,
        });

        Ok(action)
    }

    /// Handle the end of an episode.
    ///
    /// Called by the game loop once per completed game with the final
    /// snapshot. Settles the pending decision against the final snapshot
    /// (an episode with no decisions skips the update), increments the
    /// episode counter, and, when the counter reaches the training
    /// budget, switches the agent to evaluation by forcing alpha and
    /// epsilon to zero. The switch is one-way.
    pub fn on_episode_end(&mut self, final_snapshot: &S) -> EpisodeReport {
        self.settle_pending(final_snapshot);

        self.episodes_so_far += 1;
        let training_complete = self.episodes_so_far == self.num_training;
        if training_complete {
            self.alpha = 0.0;
            self.epsilon = 0.0;
            self.phase = Phase::Evaluation;
        }

        EpisodeReport {
            episode: self.episodes_so_far,
            phase: self.phase,
            training_complete,
        }
    }
}
