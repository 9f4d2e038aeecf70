//! Round state and core game types
//!
//! One `Round` owns exactly one shape and one hole of the same kind.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::Point;

/// Kind of figure for the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Square, ShapeKind::Triangle];

    /// Pick a kind uniformly at random
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
            ShapeKind::Triangle => "triangle",
        }
    }
}

/// Whether the round accepts input or is showing the win overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    /// Shape can be dragged, containment is checked every frame
    Active,
    /// Shape is in the hole, waiting for the restart timer
    Solved,
}

/// The draggable figure
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub kind: ShapeKind,
    pub center: Point,
    pub size: f32,
}

impl Shape {
    /// Snap the shape to a new position
    #[inline]
    pub fn move_to(&mut self, pos: Point) {
        self.center = pos;
    }
}

/// The fixed target region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    pub kind: ShapeKind,
    pub center: Point,
    pub size: f32,
}

/// One play cycle: shape and hole generated together, solved once
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub shape: Shape,
    pub hole: Hole,
    pub state: RoundState,
}

impl Round {
    pub fn kind(&self) -> ShapeKind {
        self.shape.kind
    }

    pub fn is_active(&self) -> bool {
        self.state == RoundState::Active
    }
}

/// Notable things that happened during a frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fresh shape/hole pair was generated
    RoundStarted { kind: ShapeKind },
    /// The shape was dropped into the hole
    Solved { kind: ShapeKind },
}
