//! Frame description
//!
//! Turns the read-only game state into an ordered list of draw commands so
//! the backend stays a dumb executor and the layout can be tested natively.

use glam::Vec2;

use super::shapes::{Outline, outline};
use crate::Point;
use crate::settings::Settings;
use crate::sim::{RoundController, RoundState};

pub const INSTRUCTIONS: &str = "With your index finger, drag the white shape into the black hole!";
pub const SUCCESS_TEXT: &str = "Success!";

const INSTRUCTION_SIZE_PX: f32 = 20.0;
const SUCCESS_SIZE_PX: f32 = 64.0;
const FINGERTIP_DIAMETER: f32 = 10.0;

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const BLACK: Color = Color(0, 0, 0);
    pub const WHITE: Color = Color(255, 255, 255);
    pub const RED: Color = Color(255, 0, 0);

    /// CSS color string
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Horizontally centered, baseline at the bottom
    BottomCenter,
    /// Centered on both axes
    Center,
}

/// One drawing step. Everything except `Text` is in frame space and follows
/// the mirror transform; text is in screen space so it stays readable.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Camera image covering the whole frame
    Video,
    Fill {
        outline: Outline,
        fill: Color,
        stroke: Option<Color>,
    },
    /// Full-frame rectangle
    Cover(Color),
    Text {
        text: &'static str,
        pos: Point,
        size_px: f32,
        anchor: TextAnchor,
        color: Color,
    },
}

/// Draw list for the current frame
pub fn build_scene(controller: &RoundController, fingertips: &[Point], settings: &Settings) -> Vec<DrawCmd> {
    let frame = controller.frame_size();

    if controller.state() == RoundState::Solved {
        return vec![
            DrawCmd::Cover(Color::BLACK),
            DrawCmd::Text {
                text: SUCCESS_TEXT,
                pos: frame / 2.0,
                size_px: SUCCESS_SIZE_PX,
                anchor: TextAnchor::Center,
                color: Color::WHITE,
            },
        ];
    }

    let mut cmds = vec![
        DrawCmd::Video,
        DrawCmd::Text {
            text: INSTRUCTIONS,
            pos: Vec2::new(frame.x / 2.0, frame.y - 10.0),
            size_px: INSTRUCTION_SIZE_PX,
            anchor: TextAnchor::BottomCenter,
            color: Color::WHITE,
        },
    ];

    if settings.show_fingertips {
        cmds.extend(fingertips.iter().map(|&center| DrawCmd::Fill {
            outline: Outline::Circle {
                center,
                radius: FINGERTIP_DIAMETER / 2.0,
            },
            fill: Color::RED,
            stroke: None,
        }));
    }

    let hole = controller.hole();
    cmds.push(DrawCmd::Fill {
        outline: outline(hole.kind, hole.center, hole.size),
        fill: Color::BLACK,
        stroke: None,
    });

    let shape = controller.shape();
    cmds.push(DrawCmd::Fill {
        outline: outline(shape.kind, shape.center, shape.size),
        fill: Color::WHITE,
        stroke: Some(Color::BLACK),
    });

    cmds
}
