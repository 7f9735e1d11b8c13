//! Static tiles and the layer toggles that decide which of them exist

use serde::{Deserialize, Serialize};

use super::layout::{Cell, Layout};
use super::rect::Rect;

/// Visual tag of a tile. Kinds differ only in colour and in which layer owns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    White,
    Black,
    /// Always present regardless of toggles
    Grey,
}

/// A static square of level geometry (layout space, never scrolled in storage)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub rect: Rect,
    pub kind: TileKind,
}

impl Tile {
    pub fn new(x: f32, y: f32, size: f32, kind: TileKind) -> Self {
        Self {
            rect: Rect::new(x, y, size, size),
            kind,
        }
    }

    /// Hitbox as seen through the camera
    #[inline]
    pub fn shifted_rect(&self, offset: f32) -> Rect {
        self.rect.translated(offset, 0.0)
    }
}

/// Toggleable tile layers. Grey has no entry because it cannot be switched off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Layer {
    White,
    Black,
}

/// Which toggleable layers are currently materialized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerToggles {
    pub white: bool,
    pub black: bool,
}

impl Default for LayerToggles {
    fn default() -> Self {
        Self {
            white: true,
            black: false,
        }
    }
}

impl LayerToggles {
    pub fn set(&mut self, layer: Layer, enabled: bool) {
        match layer {
            Layer::White => self.white = enabled,
            Layer::Black => self.black = enabled,
        }
    }

    pub fn is_enabled(&self, layer: Layer) -> bool {
        match layer {
            Layer::White => self.white,
            Layer::Black => self.black,
        }
    }

    /// Tile kind produced by a layout cell under these toggles, if any
    pub fn tile_for(&self, cell: Cell) -> Option<TileKind> {
        match cell {
            Cell::White if self.white => Some(TileKind::White),
            Cell::Black if self.black => Some(TileKind::Black),
            Cell::Grey => Some(TileKind::Grey),
            _ => None,
        }
    }
}

/// Materialize the tiles of `layout` that `toggles` enables, in row-major order
pub fn build_tiles(layout: &Layout, toggles: LayerToggles, tile_size: f32) -> Vec<Tile> {
    layout
        .cells(tile_size)
        .filter_map(|(pos, cell)| {
            toggles
                .tile_for(cell)
                .map(|kind| Tile::new(pos.x, pos.y, tile_size, kind))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn count(tiles: &[Tile], kind: TileKind) -> usize {
        tiles.iter().filter(|t| t.kind == kind).count()
    }

    #[test]
    fn test_build_respects_toggles() {
        let layout = Layout::new(["XYZ", "YXZ"]);

        let white_only = build_tiles(&layout, LayerToggles::default(), 64.0);
        assert_eq!(count(&white_only, TileKind::White), 2);
        assert_eq!(count(&white_only, TileKind::Black), 0);
        assert_eq!(count(&white_only, TileKind::Grey), 2);

        let black_only = LayerToggles {
            white: false,
            black: true,
        };
        let tiles = build_tiles(&layout, black_only, 64.0);
        assert_eq!(count(&tiles, TileKind::White), 0);
        assert_eq!(count(&tiles, TileKind::Black), 2);
        assert_eq!(count(&tiles, TileKind::Grey), 2);
    }

    #[test]
    fn test_tile_positions_are_grid_aligned() {
        let layout = Layout::new(["..", ".X"]);
        let tiles = build_tiles(&layout, LayerToggles::default(), 64.0);
        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles[0].rect, Rect::new(64.0, 64.0, 64.0, 64.0));
    }

    #[test]
    fn test_shifted_rect_leaves_storage_alone() {
        let tile = Tile::new(128.0, 0.0, 64.0, TileKind::Grey);
        assert_eq!(tile.shifted_rect(-8.0).x, 120.0);
        assert_eq!(tile.rect.x, 128.0);
    }

    fn layout_strategy() -> impl Strategy<Value = Layout> {
        prop::collection::vec("[XYZP. ]{0,12}", 0..8)
            .prop_map(|rows: Vec<String>| Layout::new(rows))
    }

    proptest! {
        #[test]
        fn prop_tiles_never_overlap(layout in layout_strategy(), white: bool, black: bool) {
            let tiles = build_tiles(&layout, LayerToggles { white, black }, 64.0);
            for (i, a) in tiles.iter().enumerate() {
                for b in &tiles[i + 1..] {
                    prop_assert!(!a.rect.intersects(&b.rect));
                }
            }
        }

        #[test]
        fn prop_toggle_round_trip_restores_tiles(layout in layout_strategy(), layer_is_white: bool) {
            let layer = if layer_is_white { Layer::White } else { Layer::Black };
            let mut toggles = LayerToggles::default();
            let before = build_tiles(&layout, toggles, 64.0);

            let initial = toggles.is_enabled(layer);
            toggles.set(layer, !initial);
            toggles.set(layer, initial);

            prop_assert_eq!(build_tiles(&layout, toggles, 64.0), before);
        }
    }
}
