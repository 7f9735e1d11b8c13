//! Collision detection and response against static tiles
//!
//! Axis-separated: move along x and snap out of every overlapping tile, then
//! apply gravity and do the same along y. Tiles are tested at their camera
//! offset; the player rect is already in view space.

use super::player::Player;
use super::tile::Tile;
use crate::consts::{CEILING_RELEASE_VELOCITY, GROUND_RELEASE_VELOCITY};

/// Result of resolving one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Whether any tile was overlapped
    pub hit: bool,
    /// Edge the player was snapped to by the last overlapping tile
    pub edge: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            edge: 0.0,
        }
    }
}

/// Last snapped horizontal contact edge.
///
/// Wall flags are only released once the player has moved past this edge or
/// stopped pushing toward it, so resting against a wall does not flicker.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContactMemory {
    pub current_x: f32,
}

/// Move the player horizontally and push it out of any tile it now overlaps.
///
/// Overlaps are resolved per tile in collection order; the last one wins.
pub fn horizontal_movement_collision(
    player: &mut Player,
    tiles: &[Tile],
    offset: f32,
    memory: &mut ContactMemory,
) -> CollisionResult {
    player.rect.x += player.direction.x * player.speed;

    let mut result = CollisionResult::miss();
    for tile in tiles {
        let tile_rect = tile.shifted_rect(offset);
        if !tile_rect.intersects(&player.rect) {
            continue;
        }
        if player.direction.x < 0.0 {
            player.rect.set_left(tile_rect.right());
            player.on_left = true;
            memory.current_x = player.rect.left();
        } else if player.direction.x > 0.0 {
            player.rect.set_right(tile_rect.left());
            player.on_right = true;
            memory.current_x = player.rect.right();
        } else {
            continue;
        }
        result = CollisionResult {
            hit: true,
            edge: memory.current_x,
        };
    }

    if player.on_left && (player.rect.left() < memory.current_x || player.direction.x >= 0.0) {
        player.on_left = false;
    }
    if player.on_right && (player.rect.right() > memory.current_x || player.direction.x <= 0.0) {
        player.on_right = false;
    }

    result
}

/// Apply gravity, then push the player out of any tile it now overlaps vertically.
///
/// `on_ground` and `on_ceiling` release at different velocities; the ground
/// threshold absorbs the sub-pixel gravity step taken every frame at rest.
pub fn vertical_movement_collision(player: &mut Player, tiles: &[Tile], offset: f32) -> CollisionResult {
    player.apply_gravity();

    let mut result = CollisionResult::miss();
    for tile in tiles {
        let tile_rect = tile.shifted_rect(offset);
        if !tile_rect.intersects(&player.rect) {
            continue;
        }
        if player.direction.y > 0.0 {
            player.rect.set_bottom(tile_rect.top());
            player.direction.y = 0.0;
            player.on_ground = true;
            result = CollisionResult {
                hit: true,
                edge: tile_rect.top(),
            };
        } else if player.direction.y < 0.0 {
            player.rect.set_top(tile_rect.bottom());
            player.direction.y = 0.0;
            player.on_ceiling = true;
            result = CollisionResult {
                hit: true,
                edge: tile_rect.bottom(),
            };
        }
    }

    if (player.on_ground && player.direction.y < 0.0) || player.direction.y > GROUND_RELEASE_VELOCITY {
        player.on_ground = false;
    }
    if player.on_ceiling && player.direction.y > CEILING_RELEASE_VELOCITY {
        player.on_ceiling = false;
    }

    result
}
