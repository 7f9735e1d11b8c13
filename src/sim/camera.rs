//! Horizontal scrolling
//!
//! The camera is locked while the player is in the middle band of the screen.
//! Walking into the outer quarter scrolls the world instead of moving the
//! player.

use serde::{Deserialize, Serialize};

use super::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Camera {
    /// World shift applied this frame
    pub shift: f32,
    /// Sum of every shift applied so far; tiles are seen at `rect.x + offset`
    pub offset: f32,
    /// Pixels per frame while scrolling
    pub scroll_speed: f32,
    pub screen_width: f32,
}

impl Camera {
    pub fn new(screen_width: f32, scroll_speed: f32) -> Self {
        Self {
            shift: 0.0,
            offset: 0.0,
            scroll_speed,
            screen_width,
        }
    }

    /// Accumulate the current shift into the offset
    pub fn apply_shift(&mut self) {
        self.offset += self.shift;
    }

    /// Decide this frame's shift from the player's position and heading.
    ///
    /// While scrolling the player's speed is zeroed so only the world moves.
    pub fn scroll_x(&mut self, player: &mut Player) {
        let player_x = player.rect.center_x();
        let direction_x = player.direction.x;
        let band = self.screen_width / 4.0;

        if player_x < band && direction_x < 0.0 {
            self.shift = self.scroll_speed;
            player.speed = 0.0;
        } else if player_x > self.screen_width - band && direction_x > 0.0 {
            self.shift = -self.scroll_speed;
            player.speed = 0.0;
        } else {
            self.shift = 0.0;
            player.reset_speed();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::player::PlayerTuning;
    use glam::Vec2;

    fn player_at(center_x: f32, direction_x: f32) -> Player {
        let mut p = Player::new(
            Vec2::new(center_x - PLAYER_WIDTH / 2.0, 0.0),
            PlayerTuning::default(),
        );
        p.direction.x = direction_x;
        p
    }

    #[test]
    fn test_middle_band_never_scrolls() {
        let mut camera = Camera::new(SCREEN_WIDTH, SCROLL_SPEED);
        for dir in [-1.0, 0.0, 1.0] {
            let mut p = player_at(SCREEN_WIDTH / 2.0, dir);
            p.speed = 0.0;
            camera.scroll_x(&mut p);
            assert_eq!(camera.shift, 0.0);
            assert_eq!(p.speed, PLAYER_SPEED);
        }
    }

    #[test]
    fn test_left_band_scrolls_right_only_when_heading_left() {
        let mut camera = Camera::new(SCREEN_WIDTH, SCROLL_SPEED);

        let mut p = player_at(100.0, -1.0);
        camera.scroll_x(&mut p);
        assert_eq!(camera.shift, SCROLL_SPEED);
        assert_eq!(p.speed, 0.0);

        let mut p = player_at(100.0, 1.0);
        camera.scroll_x(&mut p);
        assert_eq!(camera.shift, 0.0);
        assert_eq!(p.speed, PLAYER_SPEED);
    }

    #[test]
    fn test_right_band_scrolls_left_only_when_heading_right() {
        let mut camera = Camera::new(SCREEN_WIDTH, SCROLL_SPEED);

        let mut p = player_at(SCREEN_WIDTH - 100.0, 1.0);
        camera.scroll_x(&mut p);
        assert_eq!(camera.shift, -SCROLL_SPEED);
        assert_eq!(p.speed, 0.0);

        let mut p = player_at(SCREEN_WIDTH - 100.0, 0.0);
        camera.scroll_x(&mut p);
        assert_eq!(camera.shift, 0.0);
    }

    #[test]
    fn test_offset_accumulates_shift() {
        let mut camera = Camera::new(SCREEN_WIDTH, SCROLL_SPEED);
        camera.shift = -8.0;
        camera.apply_shift();
        camera.apply_shift();
        assert_eq!(camera.offset, -16.0);
    }
}
