//! Game settings
//!
//! Persisted in LocalStorage as JSON. Missing fields take their defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Frame ===
    /// Camera/canvas width in pixels
    pub frame_width: f32,
    /// Camera/canvas height in pixels
    pub frame_height: f32,

    // === Round ===
    /// Draggable shape size
    pub shape_size: f32,
    /// Hole size (must be larger than the shape)
    pub hole_size: f32,
    /// Delay before the next round starts (ms)
    pub restart_delay_ms: f64,

    // === Input ===
    /// Extra grab distance beyond the shape's half size
    pub pickup_tolerance: f32,
    /// Detector landmark used as the fingertip
    pub fingertip_index: usize,

    // === Display ===
    /// Flip the camera image horizontally (selfie view)
    pub mirror: bool,
    /// Draw a dot at each tracked fingertip
    pub show_fingertips: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frame_width: FRAME_WIDTH,
            frame_height: FRAME_HEIGHT,

            shape_size: SHAPE_SIZE,
            hole_size: HOLE_SIZE,
            restart_delay_ms: RESTART_DELAY_MS,

            pickup_tolerance: PICKUP_TOLERANCE,
            fingertip_index: FINGERTIP_INDEX,

            mirror: true,
            show_fingertips: true,
        }
    }
}

impl Settings {
    /// Settings the game can actually be played with, or the defaults.
    ///
    /// Every size must be finite, the shape must be strictly smaller than the
    /// hole and the frame must have area, otherwise no round could ever be
    /// solved or generated.
    pub fn validated(self) -> Self {
        let finite = self.frame_width.is_finite()
            && self.frame_height.is_finite()
            && self.shape_size.is_finite()
            && self.hole_size.is_finite()
            && self.pickup_tolerance.is_finite()
            && self.restart_delay_ms.is_finite();
        let playable = finite
            && self.frame_width > 0.0
            && self.frame_height > 0.0
            && self.shape_size > 0.0
            && self.shape_size < self.hole_size
            && self.pickup_tolerance >= 0.0
            && self.restart_delay_ms >= 0.0;
        if playable {
            self
        } else {
            log::warn!("Unplayable settings {:?}, using defaults", self);
            Self::default()
        }
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "shape_drop_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str::<Settings>(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings.validated();
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"mirror": false, "hole_size": 80}"#).unwrap();
        assert!(!settings.mirror);
        assert_eq!(settings.hole_size, 80.0);
        assert_eq!(settings.shape_size, SHAPE_SIZE);
        assert_eq!(settings.fingertip_index, 8);
    }

    #[test]
    fn test_shape_not_smaller_than_hole_is_rejected() {
        let settings = Settings {
            shape_size: 60.0,
            hole_size: 60.0,
            ..Default::default()
        };
        assert_eq!(settings.validated(), Settings::default());
    }

    #[test]
    fn test_non_finite_settings_fall_back() {
        let settings: Settings = serde_json::from_str(r#"{"frame_width": 1e39}"#).unwrap();
        assert!(settings.frame_width.is_infinite());
        assert_eq!(settings.validated(), Settings::default());

        for broken in [
            Settings { frame_height: f32::INFINITY, ..Default::default() },
            Settings { shape_size: f32::NAN, ..Default::default() },
            Settings { hole_size: f32::INFINITY, ..Default::default() },
            Settings { pickup_tolerance: f32::INFINITY, ..Default::default() },
            Settings { restart_delay_ms: f64::INFINITY, ..Default::default() },
        ] {
            assert_eq!(broken.validated(), Settings::default());
        }

        // The fallback is safe to start a round with
        let settings: Settings = serde_json::from_str(r#"{"frame_width": 1e39}"#).unwrap();
        let ctrl = crate::sim::RoundController::new(1, &settings.validated());
        assert_eq!(ctrl.hole().center, glam::Vec2::new(320.0, 240.0));
    }

    #[test]
    fn test_defaults_are_playable() {
        assert_eq!(Settings::default().validated(), Settings::default());
    }
}
