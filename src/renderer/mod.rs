//! Rendering module
//!
//! `scene` describes a frame as draw commands; `canvas` plays them on a
//! Canvas 2D context in the browser.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use scene::{Color, DrawCmd, TextAnchor, build_scene};
pub use shapes::Outline;
