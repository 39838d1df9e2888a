//! Tabular Q-learning
//!
//! This module implements off-policy temporal difference control with a
//! sparse Q-table. The agent follows an epsilon-greedy policy while
//! training and updates toward `r + gamma * max_a' Q(s', a')` after every
//! completed transition, with a per-pair learning rate that anneals as
//! `alpha / (1 + n(s, a))` so heavily visited pairs update conservatively.
//!
//! ## Usage Example
//!
//! ```no_run
//! use pacq::{AgentConfig, QLearnAgent};
//!
//! let config = AgentConfig::default()
//!     .with_epsilon(0.3)
//!     .with_num_training(10);
//! let agent: QLearnAgent<MySnapshot> = QLearnAgent::new(config);
//! # #[derive(Clone)] struct MySnapshot;
//! # impl pacq::GameSnapshot for MySnapshot {
//! #     fn legal_actions(&self) -> Vec<pacq::Action> { vec![] }
//! #     fn agent_position(&self) -> pacq::Pos { pacq::Pos::new(0, 0) }
//! #     fn ghost_positions(&self) -> Vec<pacq::Pos> { vec![] }
//! #     fn food_remaining(&self) -> u32 { 0 }
//! #     fn score(&self) -> f64 { 0.0 }
//! #     fn is_win(&self) -> bool { false }
//! #     fn is_lose(&self) -> bool { false }
//! # }
//! ```

pub mod agent;
pub mod q_table;

// Public re-exports
pub use agent::{EpisodeReport, LearningSummary, Phase, QLearnAgent};
pub use q_table::QTable;
