//! A running game: round controller, interaction engine and detection inbox
//!
//! The platform layer posts detector output whenever it arrives and calls
//! `update` once per animation frame.

use super::hands::{DetectionMailbox, HandDetection, fingertips, parse_detections};
use super::interaction::InteractionEngine;
use super::round::RoundController;
use super::state::GameEvent;
use super::tick::{TickInput, tick};
use crate::Point;
use crate::settings::Settings;

pub struct Session {
    pub controller: RoundController,
    pub engine: InteractionEngine,
    mailbox: DetectionMailbox,
    /// Most recent batch, kept for drawing fingertips between detector updates
    latest: Vec<HandDetection>,
}

impl Session {
    pub fn new(seed: u64, settings: &Settings) -> Self {
        Self {
            controller: RoundController::new(seed, settings),
            engine: InteractionEngine::from_settings(settings),
            mailbox: DetectionMailbox::new(),
            latest: Vec::new(),
        }
    }

    /// Deliver a decoded detection batch
    pub fn post_detections(&mut self, batch: Vec<HandDetection>) {
        self.mailbox.post(batch);
    }

    /// Deliver a raw detector payload. Malformed payloads are logged and dropped.
    pub fn post_detections_json(&mut self, json: &str) -> bool {
        match parse_detections(json) {
            Ok(batch) => {
                self.post_detections(batch);
                true
            }
            Err(e) => {
                log::warn!("Dropping malformed detection batch: {}", e);
                false
            }
        }
    }

    /// Run one frame at time `now_ms`
    pub fn update(&mut self, now_ms: f64) -> Vec<GameEvent> {
        let input = TickInput {
            detections: self.mailbox.take(),
        };
        let events = tick(&mut self.controller, &self.engine, &input, now_ms);
        if let Some(batch) = input.detections {
            self.latest = batch;
        }
        events
    }

    /// Fingertip positions from the latest batch
    pub fn fingertips(&self) -> Vec<Point> {
        fingertips(&self.latest, self.engine.fingertip_index)
    }

    /// Detector batches overwritten before a frame consumed them
    pub fn dropped_batches(&self) -> u64 {
        self.mailbox.dropped()
    }
}
