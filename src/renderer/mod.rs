//! Rendering module
//!
//! The game never draws pixels itself. Each frame it builds a [`Frame`]
//! (background, sprites back-to-front, HUD text) and hands it to a
//! [`RenderSink`], which presents it however the platform likes.

pub mod frame;
pub mod headless;

use glam::Vec2;
use serde::Serialize;

pub use frame::build_frame;
pub use headless::HeadlessRenderer;

use crate::sim::Rect;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const WHITE: Color = Color(255, 255, 255);
    pub const BLACK: Color = Color(0, 0, 0);
    pub const PURPLE: Color = Color(155, 89, 182);
    pub const YELLOW: Color = Color(237, 194, 51);
}

/// How a sprite's rectangle is filled
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Visual {
    Solid { color: Color },
    /// Filled circle inscribed in the rect, over a square backdrop
    Disc { fill: Color, backdrop: Color },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sprite {
    pub rect: Rect,
    pub visual: Visual,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextOverlay {
    pub text: String,
    /// Top-left of the text box
    pub pos: Vec2,
    pub size: f32,
    pub color: Color,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub background: Color,
    /// Back-to-front draw order
    pub sprites: Vec<Sprite>,
    pub texts: Vec<TextOverlay>,
}

/// Presents finished frames (window flip, file dump, test recorder...)
pub trait RenderSink {
    fn present(&mut self, frame: &Frame);
}
