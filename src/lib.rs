//! Shape Drop - drag a shape into its hole with your index finger
//!
//! Core modules:
//! - `sim`: Deterministic round logic (containment, dragging, restarts)
//! - `renderer`: Scene description and Canvas 2D backend
//! - `settings`: Runtime configuration persisted in LocalStorage

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// A position in frame-pixel space (origin top-left, y down)
pub type Point = Vec2;

/// Game configuration constants
pub mod consts {
    /// Camera frame / canvas dimensions
    pub const FRAME_WIDTH: f32 = 640.0;
    pub const FRAME_HEIGHT: f32 = 480.0;

    /// Draggable shape size (diameter / side length)
    pub const SHAPE_SIZE: f32 = 50.0;
    /// Target hole size, must stay larger than the shape
    pub const HOLE_SIZE: f32 = 60.0;

    /// Extra reach beyond the shape's half size for picking it up
    pub const PICKUP_TOLERANCE: f32 = 20.0;

    /// Landmark index of the index-finger tip in a hand detection
    pub const FINGERTIP_INDEX: usize = 8;

    /// Delay between a win and the next round
    pub const RESTART_DELAY_MS: f64 = 3000.0;
}

/// Geometric center of a frame of the given size
#[inline]
pub fn frame_center(width: f32, height: f32) -> Point {
    Vec2::new(width / 2.0, height / 2.0)
}
