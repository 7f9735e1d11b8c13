//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module is synchronous and deterministic:
//! - One call to `Level::advance` is one frame
//! - Stable iteration order (tiles in layout order)
//! - Drawing goes through the `Canvas` trait only

pub mod camera;
pub mod collision;
pub mod layout;
pub mod level;
pub mod particles;
pub mod player;
pub mod rect;
pub mod tile;

pub use camera::Camera;
pub use collision::{ContactMemory, horizontal_movement_collision, vertical_movement_collision};
pub use layout::{Cell, DEFAULT_LEVEL_MAP, Layout, default_layout};
pub use level::{Level, LevelEvent, Palette};
pub use particles::{DustKind, DustSlot, ParticleEffect};
pub use player::{Facing, Player, PlayerInput, PlayerStatus, PlayerTuning};
pub use rect::Rect;
pub use tile::{Layer, LayerToggles, Tile, TileKind, build_tiles};
