//! Palette Run - a tile platformer where the palette decides which tiles exist
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (level controller, collisions, camera, player)
//! - `input`: Key events, held-key state and command bindings
//! - `renderer`: Draw surface trait and CPU-side vertex batching
//! - `settings`: Data-driven tuning loaded from JSON
//! - `game`: Fixed-step frame driver tying input, simulation and drawing together

pub mod game;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Frames per second the simulation is tuned for
    pub const FPS: f32 = 60.0;
    /// Fixed simulation timestep (one frame)
    pub const SIM_DT: f32 = 1.0 / FPS;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Edge length of a square tile in pixels
    pub const TILE_SIZE: f32 = 64.0;
    /// Visible screen width in pixels
    pub const SCREEN_WIDTH: f32 = 1200.0;

    /// Player hitbox
    pub const PLAYER_WIDTH: f32 = 32.0;
    pub const PLAYER_HEIGHT: f32 = 64.0;
    /// Horizontal pixels per frame when the camera is not scrolling
    pub const PLAYER_SPEED: f32 = 8.0;
    /// Vertical acceleration per frame
    pub const GRAVITY: f32 = 0.8;
    /// Vertical velocity applied on jump (negative is up)
    pub const JUMP_SPEED: f32 = -16.0;

    /// World shift per frame while the camera scrolls
    pub const SCROLL_SPEED: f32 = 8.0;

    /// `on_ground` is cleared once falling faster than this
    pub const GROUND_RELEASE_VELOCITY: f32 = 1.0;
    /// `on_ceiling` is cleared once falling faster than this
    pub const CEILING_RELEASE_VELOCITY: f32 = 0.1;
}
