//! Deterministic game module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time comes in from the caller (frame timestamps in ms)
//! - Seeded RNG only
//! - Detections are applied in the order the detector reported them
//! - No rendering or platform dependencies

pub mod demo;
pub mod geometry;
pub mod hands;
pub mod interaction;
pub mod round;
pub mod schedule;
pub mod session;
pub mod state;
pub mod tick;

pub use demo::DemoHand;
pub use geometry::{Bounds, circle_inside, shape_inside_hole, square_inside, triangle_inside};
pub use hands::{DetectionMailbox, HandDetection, Keypoint, fingertips, parse_detections};
pub use interaction::InteractionEngine;
pub use round::RoundController;
pub use schedule::OneShotTask;
pub use session::Session;
pub use state::{GameEvent, Hole, Round, RoundState, Shape, ShapeKind};
pub use tick::{TickInput, tick};
