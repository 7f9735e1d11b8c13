//! CPU-side triangle batching
//!
//! Collects a frame's draw calls into one vertex list. Upload with
//! `as_bytes()`; the layout is `[f32; 2]` position followed by `[f32; 4]` color.

use glam::Vec2;

use super::Canvas;
use super::shapes;
use super::vertex::Vertex;
use crate::settings::ColorScheme;
use crate::sim::player::RUN_DUST_FRAMES;
use crate::sim::{Facing, ParticleEffect, Player, Rect, TileKind};

#[derive(Debug, Clone, Default)]
pub struct QuadBatch {
    pub colors: ColorScheme,
    clear_color: [f32; 4],
    vertices: Vec<Vertex>,
    /// Draw calls received this frame, for diagnostics
    draw_calls: usize,
}

impl QuadBatch {
    pub fn new(colors: ColorScheme) -> Self {
        Self {
            colors,
            clear_color: [0.0, 0.0, 0.0, 1.0],
            vertices: Vec::with_capacity(4096),
            draw_calls: 0,
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Vertex data ready for a GPU buffer
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn clear_color(&self) -> [f32; 4] {
        self.clear_color
    }

    pub fn draw_calls(&self) -> usize {
        self.draw_calls
    }
}

impl Canvas for QuadBatch {
    fn clear(&mut self, color: [f32; 4]) {
        self.clear_color = color;
        self.vertices.clear();
        self.draw_calls = 0;
    }

    fn draw_tile(&mut self, rect: Rect, kind: TileKind) {
        self.draw_calls += 1;
        self.vertices.extend(shapes::quad(&rect, self.colors.tile(kind)));
    }

    fn draw_player(&mut self, player: &Player) {
        self.draw_calls += 1;
        let rect = player.rect;
        self.vertices.extend(shapes::quad(&rect, self.colors.player));

        // Eye on the facing side so direction reads at a glance
        let eye_x = match player.facing {
            Facing::Right => rect.right() - 10.0,
            Facing::Left => rect.left() + 4.0,
        };
        let eye = Rect::new(eye_x, rect.top() + 12.0, 6.0, 6.0);
        self.vertices.extend(shapes::quad(&eye, self.colors.player_eye));
    }

    fn draw_particle(&mut self, effect: &ParticleEffect) {
        self.draw_calls += 1;
        self.vertices.extend(shapes::dust_puff(
            effect.pos,
            effect.frame_index(),
            effect.kind.frame_count(),
            self.colors.dust,
        ));
    }

    fn draw_run_dust(&mut self, pos: Vec2, frame: usize) {
        self.draw_calls += 1;
        self.vertices
            .extend(shapes::dust_puff(pos, frame, RUN_DUST_FRAMES, self.colors.dust));
    }
}
