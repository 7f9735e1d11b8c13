//! The controllable character
//!
//! The player owns its own per-frame input handling, status and animation.
//! Collision resolution against tiles is done by the level, not here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Speed of the body animation in frames per tick
pub const ANIMATION_SPEED: f32 = 0.15;
/// Speed of the running-dust animation in frames per tick
pub const RUN_DUST_SPEED: f32 = 0.15;
/// Frames in the running-dust animation
pub const RUN_DUST_FRAMES: usize = 5;

/// Which way the sprite is looking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// +1 for right, -1 for left
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Animation state derived from motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlayerStatus {
    #[default]
    Idle,
    Run,
    Jump,
    Fall,
}

impl PlayerStatus {
    /// Number of animation frames for this status
    pub fn frame_count(self) -> usize {
        match self {
            PlayerStatus::Idle => 4,
            PlayerStatus::Run => 6,
            PlayerStatus::Jump | PlayerStatus::Fall => 1,
        }
    }
}

/// Input sampled once per frame for the player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerInput {
    pub left: bool,
    pub right: bool,
    /// Jump was pressed this frame
    pub jump: bool,
}

/// Movement tuning, in pixels per frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub speed: f32,
    pub gravity: f32,
    pub jump_speed: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            speed: PLAYER_SPEED,
            gravity: GRAVITY,
            jump_speed: JUMP_SPEED,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
        }
    }
}

/// The single player entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Hitbox in view space. Never shifted by the camera.
    pub rect: Rect,
    /// Movement direction; `y` doubles as vertical velocity
    pub direction: Vec2,
    /// Current horizontal pixels per frame (zeroed while the camera scrolls)
    pub speed: f32,
    pub tuning: PlayerTuning,
    pub facing: Facing,
    pub status: PlayerStatus,
    pub on_ground: bool,
    pub on_ceiling: bool,
    pub on_left: bool,
    pub on_right: bool,
    /// Body animation cursor
    pub frame_index: f32,
    /// Running-dust animation cursor
    pub dust_frame: f32,
}

impl Player {
    /// Spawn with the hitbox's top-left at `pos`
    pub fn new(pos: Vec2, tuning: PlayerTuning) -> Self {
        Self {
            rect: Rect::from_top_left(pos, Vec2::new(tuning.width, tuning.height)),
            direction: Vec2::ZERO,
            speed: tuning.speed,
            tuning,
            facing: Facing::Right,
            status: PlayerStatus::Idle,
            on_ground: false,
            on_ceiling: false,
            on_left: false,
            on_right: false,
            frame_index: 0.0,
            dust_frame: 0.0,
        }
    }

    /// Per-frame entity step: input, status, animation.
    ///
    /// Returns true if the player jumped this frame.
    pub fn update(&mut self, input: &PlayerInput) -> bool {
        let jumped = self.apply_input(input);
        self.status = self.derive_status();
        self.animate();
        self.animate_run_dust();
        jumped
    }

    fn apply_input(&mut self, input: &PlayerInput) -> bool {
        if input.right {
            self.direction.x = 1.0;
            self.facing = Facing::Right;
        } else if input.left {
            self.direction.x = -1.0;
            self.facing = Facing::Left;
        } else {
            self.direction.x = 0.0;
        }

        if input.jump && self.on_ground {
            self.jump();
            return true;
        }
        false
    }

    fn derive_status(&self) -> PlayerStatus {
        if self.direction.y < 0.0 {
            PlayerStatus::Jump
        } else if self.direction.y > GROUND_RELEASE_VELOCITY {
            PlayerStatus::Fall
        } else if self.direction.x != 0.0 {
            PlayerStatus::Run
        } else {
            PlayerStatus::Idle
        }
    }

    fn animate(&mut self) {
        self.frame_index += ANIMATION_SPEED;
        if self.frame_index >= self.status.frame_count() as f32 {
            self.frame_index = 0.0;
        }
    }

    fn animate_run_dust(&mut self) {
        if self.status == PlayerStatus::Run && self.on_ground {
            self.dust_frame += RUN_DUST_SPEED;
            if self.dust_frame >= RUN_DUST_FRAMES as f32 {
                self.dust_frame = 0.0;
            }
        }
    }

    /// Current animation frame as an index
    pub fn frame(&self) -> usize {
        self.frame_index as usize
    }

    /// Where the running dust is drawn, if it is showing
    pub fn run_dust_position(&self) -> Option<Vec2> {
        if self.status != PlayerStatus::Run || !self.on_ground {
            return None;
        }
        // Dust trails behind the feet
        let pos = match self.facing {
            Facing::Right => Vec2::new(self.rect.left() - 6.0, self.rect.bottom() - 10.0),
            Facing::Left => Vec2::new(self.rect.right() + 6.0, self.rect.bottom() - 10.0),
        };
        Some(pos)
    }

    /// Integrate gravity and move vertically
    pub fn apply_gravity(&mut self) {
        self.direction.y += self.tuning.gravity;
        self.rect.y += self.direction.y;
    }

    pub fn jump(&mut self) {
        self.direction.y = self.tuning.jump_speed;
    }

    /// Restore the horizontal speed used when the camera is not scrolling
    pub fn reset_speed(&mut self) {
        self.speed = self.tuning.speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::new(Vec2::new(100.0, 100.0), PlayerTuning::default())
    }

    #[test]
    fn test_input_sets_direction_and_facing() {
        let mut p = player();

        p.update(&PlayerInput {
            left: true,
            ..Default::default()
        });
        assert_eq!(p.direction.x, -1.0);
        assert_eq!(p.facing, Facing::Left);

        // Facing is sticky once input stops
        p.update(&PlayerInput::default());
        assert_eq!(p.direction.x, 0.0);
        assert_eq!(p.facing, Facing::Left);

        // Right wins when both are held
        p.update(&PlayerInput {
            left: true,
            right: true,
            jump: false,
        });
        assert_eq!(p.direction.x, 1.0);
        assert_eq!(p.facing, Facing::Right);
    }

    #[test]
    fn test_jump_only_from_ground() {
        let mut p = player();
        let input = PlayerInput {
            jump: true,
            ..Default::default()
        };

        assert!(!p.update(&input));
        assert_eq!(p.direction.y, 0.0);

        p.on_ground = true;
        assert!(p.update(&input));
        assert_eq!(p.direction.y, JUMP_SPEED);
        assert_eq!(p.status, PlayerStatus::Jump);
    }

    #[test]
    fn test_gravity_accumulates() {
        let mut p = player();
        p.apply_gravity();
        p.apply_gravity();
        assert!((p.direction.y - 2.0 * GRAVITY).abs() < 1e-6);
        assert!((p.rect.y - (100.0 + 3.0 * GRAVITY)).abs() < 1e-4);
    }

    #[test]
    fn test_status_thresholds() {
        let mut p = player();
        p.direction.y = 0.8;
        p.update(&PlayerInput::default());
        assert_eq!(p.status, PlayerStatus::Idle);

        p.direction.y = 1.5;
        p.update(&PlayerInput::default());
        assert_eq!(p.status, PlayerStatus::Fall);
    }

    #[test]
    fn test_animation_wraps() {
        let mut p = player();
        for _ in 0..100 {
            p.update(&PlayerInput::default());
            assert!(p.frame() < PlayerStatus::Idle.frame_count());
        }
    }

    #[test]
    fn test_run_dust_only_when_running_on_ground() {
        let mut p = player();
        let run = PlayerInput {
            right: true,
            ..Default::default()
        };
        p.update(&run);
        assert_eq!(p.run_dust_position(), None);

        p.on_ground = true;
        p.update(&run);
        let pos = p.run_dust_position().unwrap();
        assert!(pos.x < p.rect.left());
        assert!(p.dust_frame > 0.0);
    }
}
