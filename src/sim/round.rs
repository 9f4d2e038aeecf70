//! Round controller
//!
//! Owns the round state and is the only thing that mutates it, apart from
//! the shape position handed out to the interaction engine.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::geometry::shape_inside_hole;
use super::schedule::OneShotTask;
use super::state::{GameEvent, Hole, Round, RoundState, Shape, ShapeKind};
use crate::frame_center;
use crate::settings::Settings;

/// Drives new rounds, win detection and the timed restart
#[derive(Debug, Clone)]
pub struct RoundController {
    rng: Pcg32,
    frame_size: Vec2,
    shape_size: f32,
    hole_size: f32,
    restart_delay_ms: f64,
    round: Round,
    restart: OneShotTask,
}

impl RoundController {
    /// Create a controller and start the first round
    pub fn new(seed: u64, settings: &Settings) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let frame_size = Vec2::new(settings.frame_width, settings.frame_height);
        let round = Self::generate(&mut rng, frame_size, settings.shape_size, settings.hole_size);
        log::info!(
            "Round started: {} at ({:.0}, {:.0})",
            round.kind().as_str(),
            round.shape.center.x,
            round.shape.center.y
        );

        Self {
            rng,
            frame_size,
            shape_size: settings.shape_size,
            hole_size: settings.hole_size,
            restart_delay_ms: settings.restart_delay_ms,
            round,
            restart: OneShotTask::new(),
        }
    }

    fn generate(rng: &mut Pcg32, frame_size: Vec2, shape_size: f32, hole_size: f32) -> Round {
        let kind = ShapeKind::random(rng);
        let shape_center = Vec2::new(
            rng.random_range(0.0..frame_size.x),
            rng.random_range(0.0..frame_size.y),
        );
        Round {
            shape: Shape {
                kind,
                center: shape_center,
                size: shape_size,
            },
            hole: Hole {
                kind,
                center: frame_center(frame_size.x, frame_size.y),
                size: hole_size,
            },
            state: RoundState::Active,
        }
    }

    /// Replace the shape/hole pair with a fresh random one and reactivate
    pub fn start_new_round(&mut self) -> GameEvent {
        self.round = Self::generate(&mut self.rng, self.frame_size, self.shape_size, self.hole_size);
        let kind = self.round.kind();
        log::info!(
            "Round started: {} at ({:.0}, {:.0})",
            kind.as_str(),
            self.round.shape.center.x,
            self.round.shape.center.y
        );
        GameEvent::RoundStarted { kind }
    }

    /// Is the shape inside the hole right now
    pub fn evaluate_containment(&self) -> bool {
        shape_inside_hole(&self.round.shape, &self.round.hole)
    }

    /// Mark the round solved and arm the restart.
    ///
    /// Does nothing if the round is already solved, so at most one restart
    /// is ever pending.
    pub fn on_contained(&mut self, now_ms: f64) -> Option<GameEvent> {
        if !self.round.is_active() {
            log::debug!("ignoring win while round is {:?}", self.round.state);
            return None;
        }
        self.round.state = RoundState::Solved;
        let armed = self.restart.schedule(now_ms, self.restart_delay_ms);
        debug_assert!(armed, "restart already pending while round was active");

        let kind = self.round.kind();
        log::info!("Solved {} round, next round in {} ms", kind.as_str(), self.restart_delay_ms);
        Some(GameEvent::Solved { kind })
    }

    /// Start the next round if the restart is due
    pub fn poll_restart(&mut self, now_ms: f64) -> Option<GameEvent> {
        if self.restart.poll(now_ms) {
            Some(self.start_new_round())
        } else {
            None
        }
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn state(&self) -> RoundState {
        self.round.state
    }

    pub fn shape(&self) -> &Shape {
        &self.round.shape
    }

    pub fn hole(&self) -> &Hole {
        &self.round.hole
    }

    /// Mutable shape, for the interaction engine's move-to
    pub fn shape_mut(&mut self) -> &mut Shape {
        &mut self.round.shape
    }

    pub fn frame_size(&self) -> Vec2 {
        self.frame_size
    }

    /// When the pending restart fires, if any
    pub fn restart_due_ms(&self) -> Option<f64> {
        self.restart.due_at_ms()
    }
}
