//! Axis-aligned rectangles
//!
//! Every entity in the arena is a box in screen pixels (y grows downward).
//! All collision queries go through [`intersects`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box: top-left corner plus size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "rect must have positive size");
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Square of side `side` at `pos`
    pub fn square(pos: Vec2, side: f32) -> Self {
        Self::new(pos.x, pos.y, side, side)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Move so the right edge sits at `x`, never past it
    pub fn set_right(&mut self, x: f32) {
        self.pos.x = x - self.size.x;
        // (x - w) + w can round up by an ulp
        while self.right() > x {
            self.pos.x -= self.pos.x.abs().max(1.0) * f32::EPSILON;
        }
    }

    pub fn set_left(&mut self, x: f32) {
        self.pos.x = x;
    }

    /// Move so the bottom edge sits at `y`, never past it
    pub fn set_bottom(&mut self, y: f32) {
        self.pos.y = y - self.size.y;
        while self.bottom() > y {
            self.pos.y -= self.pos.y.abs().max(1.0) * f32::EPSILON;
        }
    }

    pub fn set_top(&mut self, y: f32) {
        self.pos.y = y;
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.pos += offset;
    }

    /// Grow on every side by `margin`
    pub fn inflate(&self, margin: f32) -> Self {
        Self {
            pos: self.pos - Vec2::splat(margin),
            size: self.size + Vec2::splat(2.0 * margin),
        }
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        intersects(self, other)
    }
}

/// Standard AABB overlap. Touching edges do not count.
#[inline]
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && b.left() < a.right() && a.top() < b.bottom() && b.top() < a.bottom()
}
