//! Canvas 2D backend
//!
//! Executes a draw list on a `CanvasRenderingContext2d`, mirroring frame-space
//! commands when the camera view is flipped.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlVideoElement};

use super::scene::{Color, DrawCmd, TextAnchor};
use super::shapes::Outline;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    video: HtmlVideoElement,
    width: f64,
    height: f64,
    mirror: bool,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d, video: HtmlVideoElement, width: f64, height: f64, mirror: bool) -> Self {
        Self {
            ctx,
            video,
            width,
            height,
            mirror,
        }
    }

    /// Draw a full frame
    pub fn draw(&self, cmds: &[DrawCmd]) -> Result<(), JsValue> {
        for cmd in cmds {
            match cmd {
                DrawCmd::Text { .. } => self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?,
                _ => self.set_frame_transform()?,
            }
            self.draw_cmd(cmd)?;
        }
        self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    fn set_frame_transform(&self) -> Result<(), JsValue> {
        if self.mirror {
            self.ctx.set_transform(-1.0, 0.0, 0.0, 1.0, self.width, 0.0)
        } else {
            self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
        }
    }

    fn draw_cmd(&self, cmd: &DrawCmd) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        match cmd {
            DrawCmd::Video => {
                ctx.draw_image_with_html_video_element_and_dw_and_dh(&self.video, 0.0, 0.0, self.width, self.height)?;
            }
            DrawCmd::Cover(color) => {
                ctx.set_fill_style_str(&color.css());
                ctx.fill_rect(0.0, 0.0, self.width, self.height);
            }
            DrawCmd::Fill { outline, fill, stroke } => {
                self.trace(outline)?;
                ctx.set_fill_style_str(&fill.css());
                ctx.fill();
                if let Some(stroke) = stroke {
                    ctx.set_stroke_style_str(&stroke.css());
                    ctx.set_line_width(1.0);
                    ctx.stroke();
                }
            }
            DrawCmd::Text {
                text,
                pos,
                size_px,
                anchor,
                color,
            } => {
                ctx.set_font(&format!("{}px sans-serif", size_px));
                ctx.set_text_align("center");
                ctx.set_text_baseline(match anchor {
                    TextAnchor::BottomCenter => "bottom",
                    TextAnchor::Center => "middle",
                });
                ctx.set_fill_style_str(&color.css());
                ctx.fill_text(text, pos.x as f64, pos.y as f64)?;
            }
        }
        Ok(())
    }

    fn trace(&self, outline: &Outline) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.begin_path();
        match outline {
            Outline::Circle { center, radius } => {
                ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU)?;
            }
            Outline::Polygon(points) => {
                if let Some((first, rest)) = points.split_first() {
                    ctx.move_to(first.x as f64, first.y as f64);
                    for p in rest {
                        ctx.line_to(p.x as f64, p.y as f64);
                    }
                }
                ctx.close_path();
            }
        }
        Ok(())
    }

    /// Clear to black (before the camera is ready)
    pub fn clear(&self) -> Result<(), JsValue> {
        self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
        self.ctx.set_fill_style_str(&Color::BLACK.css());
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
        Ok(())
    }
}
