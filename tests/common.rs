//! Common test utilities for the pacq test suite.
//!
//! Provides a hand-built [`GameSnapshot`] implementation so the agent can
//! be driven without a game engine.

use pacq::{Action, GameSnapshot, Pos};

/// A fully scripted game snapshot.
///
/// Defaults to a mid-game state: all four moves plus `Stop` legal, the
/// actor at (1, 1), one ghost far away, ten pellets left, score zero.
#[derive(Debug, Clone)]
pub struct TestSnapshot {
    pub legal: Vec<Action>,
    pub agent: Pos,
    pub ghosts: Vec<Pos>,
    pub food: u32,
    pub score: f64,
    pub win: bool,
    pub lose: bool,
}

impl Default for TestSnapshot {
    fn default() -> Self {
        Self {
            legal: vec![
                Action::North,
                Action::South,
                Action::East,
                Action::West,
                Action::Stop,
            ],
            agent: Pos::new(1, 1),
            ghosts: vec![Pos::new(20, 20)],
            food: 10,
            score: 0.0,
            win: false,
            lose: false,
        }
    }
}

impl TestSnapshot {
    pub fn with_legal(mut self, legal: &[Action]) -> Self {
        self.legal = legal.to_vec();
        self
    }

    pub fn with_agent(mut self, agent: Pos) -> Self {
        self.agent = agent;
        self
    }

    pub fn with_ghosts(mut self, ghosts: &[Pos]) -> Self {
        self.ghosts = ghosts.to_vec();
        self
    }

    pub fn with_food(mut self, food: u32) -> Self {
        self.food = food;
        self
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = score;
        self
    }

    /// Terminal winning state: no legal actions, win flag set.
    pub fn won(mut self) -> Self {
        self.legal = Vec::new();
        self.win = true;
        self
    }

    /// Terminal losing state: no legal actions, lose flag set.
    pub fn lost(mut self) -> Self {
        self.legal = Vec::new();
        self.lose = true;
        self
    }
}

impl GameSnapshot for TestSnapshot {
    fn legal_actions(&self) -> Vec<Action> {
        self.legal.clone()
    }

    fn agent_position(&self) -> Pos {
        self.agent
    }

    fn ghost_positions(&self) -> Vec<Pos> {
        self.ghosts.clone()
    }

    fn food_remaining(&self) -> u32 {
        self.food
    }

    fn score(&self) -> f64 {
        self.score
    }

    fn is_win(&self) -> bool {
        self.win
    }

    fn is_lose(&self) -> bool {
        self.lose
    }
}
