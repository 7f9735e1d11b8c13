//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::sim::Rect;

/// Two triangles covering `rect`
pub fn quad(rect: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let (l, r, t, b) = (rect.left(), rect.right(), rect.top(), rect.bottom());
    [
        Vertex::new(l, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, b, color),
        Vertex::new(l, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, b, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// A puff of dust that grows and fades as the animation advances
pub fn dust_puff(center: Vec2, frame: usize, frame_count: usize, color: [f32; 4]) -> Vec<Vertex> {
    let t = (frame as f32 + 1.0) / frame_count.max(1) as f32;
    let radius = 4.0 + 8.0 * t;
    let alpha = color[3] * (1.0 - t * 0.7);
    let color = [color[0], color[1], color[2], alpha];

    // Three overlapping circles read as a cloud at this size
    let mut vertices = circle(center, radius, color, 10);
    vertices.extend(circle(center + Vec2::new(-radius * 0.8, radius * 0.3), radius * 0.6, color, 8));
    vertices.extend(circle(center + Vec2::new(radius * 0.8, radius * 0.3), radius * 0.6, color, 8));
    vertices
}
