//! Scripted hand for idle/demo mode
//!
//! Produces one synthetic detection per frame that grabs the shape and walks
//! it to the hole, with a small wobble so it doesn't look robotic.

use glam::Vec2;

use super::hands::HandDetection;
use super::round::RoundController;
use super::state::RoundState;

pub struct DemoHand {
    /// Pixels the fingertip moves per frame (must stay under the pickup reach)
    pub step: f32,
    /// Landmark slot the fingertip is written to
    pub fingertip_index: usize,
    frame: u64,
}

impl DemoHand {
    pub fn new(step: f32, fingertip_index: usize) -> Self {
        Self {
            step,
            fingertip_index,
            frame: 0,
        }
    }

    /// Detections for the next frame. Empty while the round is solved,
    /// like a player lowering their hand.
    pub fn detections(&mut self, controller: &RoundController) -> Vec<HandDetection> {
        self.frame += 1;
        if controller.state() != RoundState::Active {
            return Vec::new();
        }

        let shape = controller.shape().center;
        let to_hole = controller.hole().center - shape;

        let t = self.frame as f32 * 0.15;
        let wobble = Vec2::new(t.sin(), (t * 0.7).cos()) * 1.5;

        let tip = shape + to_hole.clamp_length_max(self.step) + wobble;
        vec![HandDetection::with_landmark(self.fingertip_index, tip)]
    }
}
