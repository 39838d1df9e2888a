//! Tabular Q-learning agent for a Pacman-style grid pursuit game
//!
//! This crate provides:
//! - A compact, hashable state abstraction over full game snapshots
//! - A shaped reward model over score deltas, terminal outcomes, food
//!   progress, and ghost proximity
//! - A sparse Q-table with per-pair visitation counts and annealed
//!   learning rates
//! - An epsilon-greedy agent with a one-way training/evaluation switch
//!
//! The game engine itself (maze, rendering, ghost AI, game loop) is an
//! external collaborator reached through the [`ports::GameSnapshot`] port;
//! the crate never simulates the grid.

pub mod app;
pub mod error;
pub mod features;
pub mod ports;
pub mod q_learning;
pub mod reward;
pub mod types;

pub use app::AgentConfig;
pub use error::{Error, Result};
pub use features::StateFeatures;
pub use ports::GameSnapshot;
pub use q_learning::{EpisodeReport, LearningSummary, Phase, QLearnAgent, QTable};
pub use reward::compute_reward;
pub use types::{Action, Pos};
