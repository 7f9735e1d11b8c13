//! Axis-aligned rectangles for tiles and the player hitbox
//!
//! Coordinates are screen pixels with y pointing down, so `top < bottom`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left corner plus size)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of the given size with its top-left corner at `pos`
    pub fn from_top_left(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn set_top_left(&mut self, pos: Vec2) {
        self.x = pos.x;
        self.y = pos.y;
    }

    /// Middle of the bottom edge (where feet touch the ground)
    pub fn mid_bottom(&self) -> Vec2 {
        Vec2::new(self.center_x(), self.bottom())
    }

    /// Move so the left edge sits at `x`, keeping the size
    #[inline]
    pub fn set_left(&mut self, x: f32) {
        self.x = x;
    }

    /// Move so the right edge sits at `x`, keeping the size
    #[inline]
    pub fn set_right(&mut self, x: f32) {
        self.x = x - self.w;
    }

    #[inline]
    pub fn set_top(&mut self, y: f32) {
        self.y = y;
    }

    #[inline]
    pub fn set_bottom(&mut self, y: f32) {
        self.y = y - self.h;
    }

    /// Copy of this rectangle moved by `(dx, dy)`
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    /// Strict overlap test. Rectangles that only share an edge do not intersect,
    /// so a player resting on a tile is not re-collided every frame.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}
