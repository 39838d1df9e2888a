//! Core domain types: grid positions and agent actions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A position on the game grid.
///
/// Coordinates follow the simulation's convention: `x` grows eastward,
/// `y` grows northward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    /// Create a new grid position.
    pub const fn new(x: i32, y: i32) -> Self {
        Pos { x, y }
    }

    /// Manhattan (L1) distance to another position.
    ///
    /// # Examples
    ///
    /// ```
    /// use pacq::types::Pos;
    ///
    /// let a = Pos::new(1, 1);
    /// let b = Pos::new(4, 3);
    /// assert_eq!(a.manhattan_distance(b), 5);
    /// ```
    pub fn manhattan_distance(self, other: Pos) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An action the actor can take on a given tick.
///
/// `Stop` is part of the simulation's legal-action vocabulary but is
/// excluded from the learner's candidate set by the policy (the agent
/// never voluntarily stands still).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    North,
    South,
    East,
    West,
    Stop,
}

impl Action {
    /// All directional moves, excluding `Stop`.
    pub const MOVES: [Action; 4] = [Action::North, Action::South, Action::East, Action::West];

    /// Whether this action is the stop sentinel.
    pub fn is_stop(self) -> bool {
        matches!(self, Action::Stop)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::North => "North",
            Action::South => "South",
            Action::East => "East",
            Action::West => "West",
            Action::Stop => "Stop",
        };
        write!(f, "{name}")
    }
}
