//! Hand detections from the pose detector
//!
//! The detector pushes batches asynchronously. Only the newest batch matters,
//! so delivery goes through a single-slot mailbox the frame loop drains once
//! per tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Point;

/// One tracked landmark on a hand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    pub x: f32,
    pub y: f32,
    /// Detector label, e.g. "index_finger_tip"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Keypoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, name: None }
    }

    #[inline]
    pub fn pos(&self) -> Point {
        Vec2::new(self.x, self.y)
    }
}

/// All landmarks of one detected hand, in detector order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HandDetection {
    pub keypoints: Vec<Keypoint>,
}

impl HandDetection {
    /// Build a detection whose only meaningful landmark is at `index`.
    /// Earlier slots are filled with copies of the same point.
    pub fn with_landmark(index: usize, pos: Point) -> Self {
        Self {
            keypoints: vec![Keypoint::new(pos.x, pos.y); index + 1],
        }
    }

    /// Landmark at `index`, or None if the detector returned fewer points
    pub fn landmark(&self, index: usize) -> Option<Point> {
        self.keypoints.get(index).map(Keypoint::pos)
    }
}

/// Decode a detector batch (JSON array of hands, unknown fields ignored)
pub fn parse_detections(json: &str) -> serde_json::Result<Vec<HandDetection>> {
    serde_json::from_str(json)
}

/// Fingertip positions of every detection that has one
pub fn fingertips(detections: &[HandDetection], index: usize) -> Vec<Point> {
    detections.iter().filter_map(|d| d.landmark(index)).collect()
}

/// Single-slot mailbox for the latest detection batch.
///
/// Posting overwrites any unread batch; taking empties the slot.
#[derive(Debug, Default)]
pub struct DetectionMailbox {
    slot: Option<Vec<HandDetection>>,
    dropped: u64,
}

impl DetectionMailbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver a new batch. Returns true if an unread batch was replaced.
    pub fn post(&mut self, batch: Vec<HandDetection>) -> bool {
        let replaced = self.slot.replace(batch).is_some();
        if replaced {
            self.dropped += 1;
            log::trace!("detection batch overwritten before it was read");
        }
        replaced
    }

    /// Take the newest batch, if one arrived since the last take
    pub fn take(&mut self) -> Option<Vec<HandDetection>> {
        self.slot.take()
    }

    /// Batches that were overwritten without ever being read
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}
