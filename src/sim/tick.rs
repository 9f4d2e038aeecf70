//! Per-frame update
//!
//! Order within a frame: due restart, then dragging, then the win check.

use super::hands::HandDetection;
use super::interaction::InteractionEngine;
use super::round::RoundController;
use super::state::{GameEvent, RoundState};

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Detection batch that arrived since the previous frame
    pub detections: Option<Vec<HandDetection>>,
}

/// Advance the game by one frame at time `now_ms`
pub fn tick(
    controller: &mut RoundController,
    engine: &InteractionEngine,
    input: &TickInput,
    now_ms: f64,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if let Some(event) = controller.poll_restart(now_ms) {
        events.push(event);
    }

    // Solved rounds are frozen until the restart fires
    if !controller.round().is_active() {
        return events;
    }

    if let Some(batch) = &input.detections {
        let state = controller.state();
        engine.on_detections(state, controller.shape_mut(), batch);
    }

    if controller.evaluate_containment() {
        events.extend(controller.on_contained(now_ms));
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{FINGERTIP_INDEX, RESTART_DELAY_MS};
    use crate::settings::Settings;
    use crate::sim::state::ShapeKind;
    use glam::Vec2;

    fn finger_at(pos: Vec2) -> TickInput {
        TickInput {
            detections: Some(vec![HandDetection::with_landmark(FINGERTIP_INDEX, pos)]),
        }
    }

    /// Seed whose first round has the shape away from the hole
    fn unsolved_controller(kind: ShapeKind) -> RoundController {
        let settings = Settings::default();
        (0u64..)
            .map(|seed| RoundController::new(seed, &settings))
            .find(|c| c.round().kind() == kind && !c.evaluate_containment())
            .unwrap()
    }

    /// Walk the shape to `target` in steps smaller than the pickup reach
    fn drag_to(ctrl: &mut RoundController, engine: &InteractionEngine, target: Vec2, now: &mut f64) -> Vec<GameEvent> {
        let mut events = Vec::new();
        for _ in 0..200 {
            let pos = ctrl.shape().center;
            let step = (target - pos).clamp_length_max(30.0);
            *now += 16.0;
            events.extend(tick(ctrl, engine, &finger_at(pos + step), *now));
            if ctrl.state() == RoundState::Solved {
                break;
            }
        }
        events
    }

    #[test]
    fn test_full_round_cycle_every_kind() {
        let engine = InteractionEngine::default();
        for kind in ShapeKind::ALL {
            let mut ctrl = unsolved_controller(kind);
            let hole = ctrl.hole().center;
            let mut now = 0.0;

            let events = drag_to(&mut ctrl, &engine, hole, &mut now);
            assert_eq!(events, vec![GameEvent::Solved { kind }], "{kind:?}");
            assert_eq!(ctrl.state(), RoundState::Solved);
            let solved_at = now;

            // Frozen while solved: input is ignored, no second win
            let before = *ctrl.shape();
            let events = tick(&mut ctrl, &engine, &finger_at(before.center + Vec2::new(3.0, 0.0)), now + 100.0);
            assert!(events.is_empty());
            assert_eq!(*ctrl.shape(), before);

            // Restart fires after the delay
            let events = tick(&mut ctrl, &engine, &TickInput::default(), solved_at + RESTART_DELAY_MS);
            let new_kind = ctrl.round().kind();
            assert_eq!(events[0], GameEvent::RoundStarted { kind: new_kind });
            // A fresh shape spawning inside the hole is won on the same frame
            let won_on_spawn = ctrl.evaluate_containment();
            let expected_state = if won_on_spawn { RoundState::Solved } else { RoundState::Active };
            assert_eq!(ctrl.state(), expected_state);
            assert_eq!(events.len(), if won_on_spawn { 2 } else { 1 });
            assert_eq!(ctrl.hole().center, Vec2::new(320.0, 240.0));
        }
    }

    #[test]
    fn test_fingertip_on_hole_wins_next_frame() {
        let engine = InteractionEngine::default();
        for kind in ShapeKind::ALL {
            let mut ctrl = unsolved_controller(kind);
            let hole = ctrl.hole().center;
            // Park the shape next to the hole so one detection can grab it
            ctrl.shape_mut().move_to(hole + Vec2::new(30.0, 0.0));
            assert!(!ctrl.evaluate_containment(), "{kind:?}");

            let events = tick(&mut ctrl, &engine, &finger_at(hole), 10.0);
            assert_eq!(events, vec![GameEvent::Solved { kind }]);
            assert_eq!(ctrl.shape().center, hole);
            assert_eq!(ctrl.restart_due_ms(), Some(10.0 + RESTART_DELAY_MS));

            let events = tick(&mut ctrl, &engine, &TickInput::default(), 10.0 + RESTART_DELAY_MS);
            assert!(matches!(events[0], GameEvent::RoundStarted { .. }), "{kind:?}");
        }
    }

    #[test]
    fn test_no_detections_no_movement() {
        let engine = InteractionEngine::default();
        let mut ctrl = unsolved_controller(ShapeKind::Square);
        let before = *ctrl.shape();
        for frame in 0..10 {
            assert!(tick(&mut ctrl, &engine, &TickInput::default(), frame as f64 * 16.0).is_empty());
        }
        assert_eq!(*ctrl.shape(), before);
    }

    #[test]
    fn test_determinism() {
        let engine = InteractionEngine::default();
        let settings = Settings::default();
        let mut a = RoundController::new(12345, &settings);
        let mut b = RoundController::new(12345, &settings);
        let inputs = [
            finger_at(a.shape().center + Vec2::new(10.0, 10.0)),
            TickInput::default(),
            finger_at(Vec2::new(320.0, 240.0)),
        ];
        for (i, input) in inputs.iter().enumerate() {
            let now = i as f64 * 16.0;
            assert_eq!(tick(&mut a, &engine, input, now), tick(&mut b, &engine, input, now));
        }
        assert_eq!(a.round(), b.round());
    }
}
