//! Dust effects for jumping and landing
//!
//! Only the trigger decisions and a minimal frame/lifetime model live here.
//! The look of the dust belongs to whoever implements `Canvas`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::player::Facing;

/// Frames advanced per tick
pub const DUST_ANIMATION_SPEED: f32 = 0.5;

/// Which dust animation to play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DustKind {
    Jump,
    Land,
}

impl DustKind {
    pub fn frame_count(self) -> usize {
        match self {
            DustKind::Jump => 4,
            DustKind::Land => 5,
        }
    }
}

/// A single running dust animation, positioned in view space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleEffect {
    pub pos: Vec2,
    pub kind: DustKind,
    pub frame: f32,
}

impl ParticleEffect {
    pub fn new(pos: Vec2, kind: DustKind) -> Self {
        Self {
            pos,
            kind,
            frame: 0.0,
        }
    }

    /// Advance one tick and follow the world shift. Returns false once finished.
    pub fn update(&mut self, shift: f32) -> bool {
        self.frame += DUST_ANIMATION_SPEED;
        self.pos.x += shift;
        self.frame < self.kind.frame_count() as f32
    }

    pub fn frame_index(&self) -> usize {
        self.frame as usize
    }
}

/// Holds at most one dust effect; adding replaces whatever was playing
#[derive(Debug, Clone, Default)]
pub struct DustSlot {
    effect: Option<ParticleEffect>,
}

impl DustSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, effect: ParticleEffect) {
        self.effect = Some(effect);
    }

    pub fn update(&mut self, shift: f32) {
        if let Some(effect) = &mut self.effect {
            if !effect.update(shift) {
                self.effect = None;
            }
        }
    }

    /// Whether any dust is currently playing
    pub fn is_active(&self) -> bool {
        self.effect.is_some()
    }

    pub fn effect(&self) -> Option<&ParticleEffect> {
        self.effect.as_ref()
    }
}

/// Jump dust origin: beside the feet, mirrored by facing
pub fn jump_dust_position(mid_bottom: Vec2, facing: Facing) -> Vec2 {
    match facing {
        Facing::Right => mid_bottom - Vec2::new(10.0, 5.0),
        Facing::Left => mid_bottom + Vec2::new(10.0, -5.0),
    }
}

/// Landing dust origin, mirrored by facing
pub fn landing_dust_position(mid_bottom: Vec2, facing: Facing) -> Vec2 {
    let offset = match facing {
        Facing::Right => Vec2::new(10.0, 15.0),
        Facing::Left => Vec2::new(-10.0, 15.0),
    };
    mid_bottom - offset
}

/// Landing dust fires on the airborne to grounded edge, and never over other dust
#[inline]
pub fn should_spawn_landing_dust(was_on_ground: bool, on_ground: bool, dust_active: bool) -> bool {
    !was_on_ground && on_ground && !dust_active
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_trigger_is_rising_edge_only() {
        assert!(should_spawn_landing_dust(false, true, false));
        assert!(!should_spawn_landing_dust(true, true, false));
        assert!(!should_spawn_landing_dust(false, false, false));
        assert!(!should_spawn_landing_dust(true, false, false));
        // Suppressed while dust is playing
        assert!(!should_spawn_landing_dust(false, true, true));
    }

    #[test]
    fn test_offsets_mirror_with_facing() {
        let feet = Vec2::new(100.0, 200.0);
        assert_eq!(jump_dust_position(feet, Facing::Right), Vec2::new(90.0, 195.0));
        assert_eq!(jump_dust_position(feet, Facing::Left), Vec2::new(110.0, 195.0));
        assert_eq!(landing_dust_position(feet, Facing::Right), Vec2::new(90.0, 185.0));
        assert_eq!(landing_dust_position(feet, Facing::Left), Vec2::new(110.0, 185.0));
    }

    #[test]
    fn test_dust_expires_after_its_frames() {
        let mut slot = DustSlot::new();
        slot.add(ParticleEffect::new(Vec2::ZERO, DustKind::Land));

        // 5 frames at 0.5 per tick
        for _ in 0..9 {
            slot.update(0.0);
            assert!(slot.is_active());
        }
        slot.update(0.0);
        assert!(!slot.is_active());
    }

    #[test]
    fn test_dust_follows_world_shift() {
        let mut slot = DustSlot::new();
        slot.add(ParticleEffect::new(Vec2::new(50.0, 0.0), DustKind::Jump));
        slot.update(-8.0);
        slot.update(-8.0);
        assert_eq!(slot.effect().map(|e| e.pos.x), Some(34.0));
    }

    #[test]
    fn test_add_replaces_current_effect() {
        let mut slot = DustSlot::new();
        slot.add(ParticleEffect::new(Vec2::ZERO, DustKind::Jump));
        slot.update(0.0);
        slot.add(ParticleEffect::new(Vec2::ONE, DustKind::Land));
        let effect = slot.effect().unwrap();
        assert_eq!(effect.kind, DustKind::Land);
        assert_eq!(effect.frame, 0.0);
    }
}
