//! Fingertip dragging
//!
//! A fingertip close enough to the shape grabs it: the shape snaps to the
//! fingertip position. No smoothing, no hand ownership.

use super::hands::HandDetection;
use super::state::{RoundState, Shape};
use crate::consts::{FINGERTIP_INDEX, PICKUP_TOLERANCE};
use crate::settings::Settings;

/// Applies hand detections to the shape position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionEngine {
    /// Reach beyond the shape's half size
    pub pickup_tolerance: f32,
    /// Landmark used as the drag point
    pub fingertip_index: usize,
}

impl Default for InteractionEngine {
    fn default() -> Self {
        Self {
            pickup_tolerance: PICKUP_TOLERANCE,
            fingertip_index: FINGERTIP_INDEX,
        }
    }
}

impl InteractionEngine {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            pickup_tolerance: settings.pickup_tolerance,
            fingertip_index: settings.fingertip_index,
        }
    }

    /// Grab radius for a shape of the given size (exclusive)
    #[inline]
    pub fn reach(&self, shape_size: f32) -> f32 {
        shape_size / 2.0 + self.pickup_tolerance
    }

    /// Process one batch in order. Each hand is tested against the shape's
    /// current position, so when several hands are in reach the last one wins.
    ///
    /// Returns true if the shape moved.
    pub fn on_detections(&self, state: RoundState, shape: &mut Shape, detections: &[HandDetection]) -> bool {
        if state != RoundState::Active {
            return false;
        }

        let reach = self.reach(shape.size);
        let mut moved = false;
        for detection in detections {
            let Some(tip) = detection.landmark(self.fingertip_index) else {
                log::debug!(
                    "skipping hand with {} keypoints (no landmark {})",
                    detection.keypoints.len(),
                    self.fingertip_index
                );
                continue;
            };
            if tip.distance(shape.center) < reach {
                shape.move_to(tip);
                moved = true;
            }
        }
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::ShapeKind;
    use glam::Vec2;
    use proptest::prelude::*;

    fn shape_at(center: Vec2) -> Shape {
        Shape {
            kind: ShapeKind::Square,
            center,
            size: 50.0,
        }
    }

    fn hand(pos: Vec2) -> HandDetection {
        HandDetection::with_landmark(FINGERTIP_INDEX, pos)
    }

    #[test]
    fn test_pickup_boundary() {
        let engine = InteractionEngine::default();
        let origin = Vec2::new(100.0, 100.0);
        assert_eq!(engine.reach(50.0), 45.0);

        let mut shape = shape_at(origin);
        assert!(engine.on_detections(RoundState::Active, &mut shape, &[hand(origin + Vec2::new(19.0, 0.0))]));
        assert_eq!(shape.center, origin + Vec2::new(19.0, 0.0));

        let mut shape = shape_at(origin);
        assert!(engine.on_detections(RoundState::Active, &mut shape, &[hand(origin + Vec2::new(44.9, 0.0))]));

        let mut shape = shape_at(origin);
        assert!(!engine.on_detections(RoundState::Active, &mut shape, &[hand(origin + Vec2::new(45.0, 0.0))]));
        assert_eq!(shape.center, origin);

        assert!(!engine.on_detections(RoundState::Active, &mut shape, &[hand(origin + Vec2::new(46.0, 0.0))]));
        assert_eq!(shape.center, origin);
    }

    #[test]
    fn test_solved_round_ignores_input() {
        let engine = InteractionEngine::default();
        let origin = Vec2::new(100.0, 100.0);
        let mut shape = shape_at(origin);
        assert!(!engine.on_detections(RoundState::Solved, &mut shape, &[hand(origin + Vec2::new(1.0, 1.0))]));
        assert_eq!(shape.center, origin);
    }

    #[test]
    fn test_last_hand_in_reach_wins() {
        let engine = InteractionEngine::default();
        let origin = Vec2::new(100.0, 100.0);
        let mut shape = shape_at(origin);
        let batch = [
            hand(origin + Vec2::new(10.0, 0.0)),
            hand(Vec2::new(600.0, 400.0)),
            hand(origin + Vec2::new(0.0, 20.0)),
        ];
        assert!(engine.on_detections(RoundState::Active, &mut shape, &batch));
        assert_eq!(shape.center, origin + Vec2::new(0.0, 20.0));
    }

    #[test]
    fn test_hand_without_fingertip_is_skipped() {
        let engine = InteractionEngine::default();
        let origin = Vec2::new(100.0, 100.0);
        let mut shape = shape_at(origin);
        let batch = [HandDetection::with_landmark(4, origin), hand(origin + Vec2::new(5.0, 5.0))];
        assert!(engine.on_detections(RoundState::Active, &mut shape, &batch));
        assert_eq!(shape.center, origin + Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_empty_batch_leaves_shape() {
        let engine = InteractionEngine::default();
        let mut shape = shape_at(Vec2::new(1.0, 2.0));
        assert!(!engine.on_detections(RoundState::Active, &mut shape, &[]));
        assert_eq!(shape.center, Vec2::new(1.0, 2.0));
    }

    proptest! {
        #[test]
        fn prop_moves_iff_within_reach(dx in -60.0f32..60.0, dy in -60.0f32..60.0) {
            let engine = InteractionEngine::default();
            let origin = Vec2::new(300.0, 200.0);
            let tip = origin + Vec2::new(dx, dy);
            let mut shape = shape_at(origin);
            let moved = engine.on_detections(RoundState::Active, &mut shape, &[hand(tip)]);
            prop_assert_eq!(moved, tip.distance(origin) < 45.0);
            prop_assert_eq!(shape.center, if moved { tip } else { origin });
        }
    }
}
