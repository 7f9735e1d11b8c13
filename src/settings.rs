//! Game settings and tuning
//!
//! Loaded from a JSON file on native builds. Every field has a default, so a
//! partial file only overrides what it names.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::input::Bindings;
use crate::renderer::vertex::colors;
use crate::sim::{Layout, Palette, PlayerTuning, TileKind, default_layout};

/// Colors used by the vertex batch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    pub white_tile: [f32; 4],
    pub black_tile: [f32; 4],
    pub grey_tile: [f32; 4],
    pub player: [f32; 4],
    pub player_eye: [f32; 4],
    pub dust: [f32; 4],
    /// Background while white tiles are active
    pub white_palette_background: [f32; 4],
    /// Background while black tiles are active
    pub black_palette_background: [f32; 4],
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            white_tile: colors::WHITE,
            black_tile: colors::BLACK,
            grey_tile: colors::GREY,
            player: colors::PLAYER,
            player_eye: colors::PLAYER_EYE,
            dust: colors::DUST,
            // Tiles of the active palette stand out against the opposite color
            white_palette_background: colors::BLACK,
            black_palette_background: colors::WHITE,
        }
    }
}

impl ColorScheme {
    pub fn tile(&self, kind: TileKind) -> [f32; 4] {
        match kind {
            TileKind::White => self.white_tile,
            TileKind::Black => self.black_tile,
            TileKind::Grey => self.grey_tile,
        }
    }

    pub fn background(&self, palette: Palette) -> [f32; 4] {
        match palette {
            Palette::White => self.white_palette_background,
            Palette::Black => self.black_palette_background,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Edge length of a tile in pixels
    pub tile_size: f32,
    /// Visible width; scrolling bands are its outer quarters
    pub screen_width: f32,
    /// World shift per frame while scrolling
    pub scroll_speed: f32,
    pub player: PlayerTuning,
    pub colors: ColorScheme,
    pub bindings: Bindings,
    /// Level rows; the built-in map is used when absent
    pub layout: Option<Layout>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tile_size: TILE_SIZE,
            screen_width: SCREEN_WIDTH,
            scroll_speed: SCROLL_SPEED,
            player: PlayerTuning::default(),
            colors: ColorScheme::default(),
            bindings: Bindings::default(),
            layout: None,
        }
    }
}

impl Settings {
    /// Configured layout, or the built-in map
    pub fn layout(&self) -> Layout {
        self.layout.clone().unwrap_or_else(default_layout)
    }

    /// Screen height follows the number of layout rows
    pub fn screen_height(&self) -> f32 {
        self.layout().pixel_height(self.tile_size)
    }

    /// Parse settings JSON. Unknown fields are ignored, missing ones defaulted.
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str(json) {
            Ok(settings) => Some(settings),
            Err(err) => {
                log::warn!("Invalid settings JSON: {err}");
                None
            }
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => {
                if let Some(settings) = Self::from_json(&json) {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
            }
            Err(err) => log::warn!("Could not read {}: {err}", path.display()),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Write settings as JSON. Failures are logged, not returned.
    pub fn save_to(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        match std::fs::write(path, self.to_json()) {
            Ok(()) => log::info!("Settings saved to {}", path.display()),
            Err(err) => log::warn!("Could not save settings to {}: {err}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "tile_size": 32.0, "player": { "speed": 4.0 } }"#).unwrap();
        assert_eq!(settings.tile_size, 32.0);
        assert_eq!(settings.player.speed, 4.0);
        assert_eq!(settings.player.gravity, GRAVITY);
        assert_eq!(settings.screen_width, SCREEN_WIDTH);
        assert!(settings.layout.is_none());
    }

    #[test]
    fn test_layout_from_json() {
        let settings = Settings::from_json(r#"{ "layout": ["XXXX", "X..X", "XPXX"] }"#).unwrap();
        assert_eq!(settings.layout().height(), 3);
        assert_eq!(settings.screen_height(), 3.0 * TILE_SIZE);
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        assert!(Settings::from_json("{ not json").is_none());
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings::default();
        assert_eq!(Settings::from_json(&settings.to_json()), Some(settings));
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("palette-run-settings-{}.json", std::process::id()));
        let mut settings = Settings::default();
        settings.scroll_speed = 12.0;
        settings.layout = Some(Layout::new(["ZPZ", "ZZZ"]));

        settings.save_to(&path);
        let loaded = Settings::load_from(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load_from("/definitely/not/here/palette-run.json");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_background_contrasts_with_palette() {
        let colors = ColorScheme::default();
        assert_eq!(colors.background(Palette::White), colors.black_tile);
        assert_eq!(colors.background(Palette::Black), colors.white_tile);
    }
}
