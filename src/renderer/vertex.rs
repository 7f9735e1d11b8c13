//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Default colors for game elements
pub mod colors {
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const GREY: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
    pub const PLAYER: [f32; 4] = [0.9, 0.3, 0.2, 1.0];
    pub const PLAYER_EYE: [f32; 4] = [0.1, 0.1, 0.1, 1.0];
    pub const DUST: [f32; 4] = [0.8, 0.75, 0.6, 0.8];
}
