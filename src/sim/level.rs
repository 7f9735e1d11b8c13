//! Level controller
//!
//! Owns the tiles, the player, the camera and the dust slot, and advances
//! them one frame at a time in a fixed order. Later steps read what earlier
//! steps wrote, so the order in `advance` is part of the behavior.

use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::collision::{ContactMemory, horizontal_movement_collision, vertical_movement_collision};
use super::layout::Layout;
use super::particles::{
    DustKind, DustSlot, ParticleEffect, jump_dust_position, landing_dust_position,
    should_spawn_landing_dust,
};
use super::player::{Player, PlayerInput, PlayerTuning};
use super::tile::{Layer, LayerToggles, Tile, build_tiles};
use crate::renderer::Canvas;
use crate::settings::Settings;

/// Which set of toggleable tiles is shown. Grey tiles exist in both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Palette {
    #[default]
    White,
    Black,
}

/// Things that happened during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelEvent {
    Jumped,
    Landed,
}

pub struct Level {
    /// Stored verbatim; every rebuild reads it again
    layout: Layout,
    tile_size: f32,
    tuning: PlayerTuning,
    toggles: LayerToggles,
    palette: Palette,
    tiles: Vec<Tile>,
    player: Option<Player>,
    camera: Camera,
    contact: ContactMemory,
    dust: DustSlot,
    /// Ground contact sampled before gravity this frame
    player_on_ground: bool,
}

impl Level {
    /// Build a level with the white layer on and the black layer off
    pub fn new(layout: Layout, settings: &Settings) -> Self {
        let mut level = Self {
            layout,
            tile_size: settings.tile_size,
            tuning: settings.player,
            toggles: LayerToggles::default(),
            palette: Palette::White,
            tiles: Vec::new(),
            player: None,
            camera: Camera::new(settings.screen_width, settings.scroll_speed),
            contact: ContactMemory::default(),
            dust: DustSlot::new(),
            player_on_ground: false,
        };
        level.build();

        log::info!(
            "Level built: {} rows, {} tiles, player: {}",
            level.layout.height(),
            level.tiles.len(),
            level.player.is_some()
        );
        if level.player.is_none() {
            log::warn!("Layout has no spawn cell; nothing to control");
        }

        level
    }

    /// Materialize tiles from the layout under the current toggles, and spawn
    /// the player at the first spawn cell if there is no player yet.
    fn build(&mut self) {
        self.tiles = build_tiles(&self.layout, self.toggles, self.tile_size);

        if self.player.is_none() {
            if let Some(spawn) = self.layout.spawn_point(self.tile_size) {
                self.player = Some(Player::new(spawn, self.tuning));
            }
        }
    }

    /// Replace every tile. The player object survives; only its top-left is
    /// carried over explicitly, so velocity, facing and contact flags persist.
    pub fn rebuild(&mut self) {
        let player_pos = self.player.as_ref().map(|p| p.rect.top_left());

        self.tiles.clear();
        self.build();

        if let (Some(player), Some(pos)) = (self.player.as_mut(), player_pos) {
            player.rect.set_top_left(pos);
        }
        log::debug!("Level rebuilt with {:?}: {} tiles", self.toggles, self.tiles.len());
    }

    /// Switch a layer on or off. Always rebuilds, even if nothing changed.
    pub fn set_layer_enabled(&mut self, layer: Layer, enabled: bool) {
        self.toggles.set(layer, enabled);
        self.rebuild();
    }

    /// Show one palette's tiles and hide the other's
    pub fn select_palette(&mut self, palette: Palette) {
        match palette {
            Palette::White => {
                self.set_layer_enabled(Layer::Black, false);
                self.set_layer_enabled(Layer::White, true);
            }
            Palette::Black => {
                self.set_layer_enabled(Layer::White, false);
                self.set_layer_enabled(Layer::Black, true);
            }
        }
        self.palette = palette;
        log::info!("Palette switched to {palette:?}");
    }

    /// Run one frame and emit its draw calls.
    ///
    /// Steps that need the player are skipped when the layout had no spawn.
    pub fn advance(&mut self, input: &PlayerInput, canvas: &mut impl Canvas) -> Vec<LevelEvent> {
        let mut events = Vec::new();

        // Dust, at last frame's shift
        self.dust.update(self.camera.shift);
        if let Some(effect) = self.dust.effect() {
            canvas.draw_particle(effect);
        }

        // Tiles
        self.camera.apply_shift();
        let offset = self.camera.offset;
        for tile in &self.tiles {
            canvas.draw_tile(tile.shifted_rect(offset), tile.kind);
        }

        let Some(player) = self.player.as_mut() else {
            return events;
        };

        self.camera.scroll_x(player);

        if player.update(input) {
            let pos = jump_dust_position(player.rect.mid_bottom(), player.facing);
            self.dust.add(ParticleEffect::new(pos, DustKind::Jump));
            events.push(LevelEvent::Jumped);
            log::debug!("Jump at {:?}", player.rect.top_left());
        }

        horizontal_movement_collision(player, &self.tiles, offset, &mut self.contact);

        self.player_on_ground = player.on_ground;
        vertical_movement_collision(player, &self.tiles, offset);

        if should_spawn_landing_dust(self.player_on_ground, player.on_ground, self.dust.is_active()) {
            let pos = landing_dust_position(player.rect.mid_bottom(), player.facing);
            self.dust.add(ParticleEffect::new(pos, DustKind::Land));
            events.push(LevelEvent::Landed);
            log::debug!("Landed at {:?}", player.rect.top_left());
        }

        if let Some(pos) = player.run_dust_position() {
            canvas.draw_run_dust(pos, player.dust_frame as usize);
        }
        canvas.draw_player(player);

        events
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub fn player_mut(&mut self) -> Option<&mut Player> {
        self.player.as_mut()
    }

    pub fn toggles(&self) -> LayerToggles {
        self.toggles
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn dust(&self) -> &DustSlot {
        &self.dust
    }

    pub fn contact(&self) -> ContactMemory {
        self.contact
    }
}
