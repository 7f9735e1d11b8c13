//! Drawing surface
//!
//! The simulation never talks to a GPU. It emits draw calls through the
//! `Canvas` trait; `QuadBatch` turns them into a flat triangle list a host
//! renderer can upload as-is.

pub mod batch;
pub mod shapes;
pub mod vertex;

pub use batch::QuadBatch;
pub use vertex::Vertex;

use glam::Vec2;

use crate::sim::{ParticleEffect, Player, Rect, TileKind};

/// Receiver of per-frame draw calls, in pipeline order
pub trait Canvas {
    /// Start a new frame filled with `color`
    fn clear(&mut self, color: [f32; 4]);

    /// A tile at its on-screen (camera shifted) position
    fn draw_tile(&mut self, rect: Rect, kind: TileKind);

    fn draw_player(&mut self, player: &Player);

    /// A jump or landing dust effect
    fn draw_particle(&mut self, effect: &ParticleEffect);

    /// Running dust under the player's feet
    fn draw_run_dust(&mut self, _pos: Vec2, _frame: usize) {}
}
