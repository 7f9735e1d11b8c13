//! Level layout grid
//!
//! A layout is a list of text rows, one character per cell:
//! `X` white tile, `Y` black tile, `Z` grey tile, `P` player spawn.
//! Any other character is empty space.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Built-in level used when no layout is configured
pub const DEFAULT_LEVEL_MAP: [&str; 11] = [
    "                            ",
    "                            ",
    "                            ",
    " XX    YYY            XX    ",
    " XX P                       ",
    " XXXX         YY         XX ",
    " XXXX       XX              ",
    " XX    Z  XXXX    YY  XX    ",
    "       Z  XXXX    YY  XXX   ",
    "    ZZZZ  XXXXXX  YY  XXXX  ",
    "ZZZZZZZZ  XXXXXX  ZZ  XXXX  ",
];

/// Symbolic contents of one layout cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    White,
    Black,
    Grey,
    Spawn,
}

impl Cell {
    pub fn from_char(c: char) -> Self {
        match c {
            'X' => Cell::White,
            'Y' => Cell::Black,
            'Z' => Cell::Grey,
            'P' => Cell::Spawn,
            _ => Cell::Empty,
        }
    }
}

/// Immutable layout grid, stored verbatim for rebuilds
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layout {
    rows: Vec<String>,
}

impl Layout {
    pub fn new<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a newline-separated block of rows
    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines())
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row
    pub fn width(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.chars().count())
            .max()
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0
    }

    /// Every cell in row-major order with its top-left pixel position
    pub fn cells(&self, tile_size: f32) -> impl Iterator<Item = (Vec2, Cell)> + '_ {
        self.rows.iter().enumerate().flat_map(move |(row_index, row)| {
            row.chars().enumerate().map(move |(col_index, c)| {
                let pos = Vec2::new(col_index as f32 * tile_size, row_index as f32 * tile_size);
                (pos, Cell::from_char(c))
            })
        })
    }

    /// Pixel position of the first spawn cell, if any
    pub fn spawn_point(&self, tile_size: f32) -> Option<Vec2> {
        self.cells(tile_size)
            .find(|(_, cell)| *cell == Cell::Spawn)
            .map(|(pos, _)| pos)
    }

    /// Pixel height of the whole grid
    pub fn pixel_height(&self, tile_size: f32) -> f32 {
        self.height() as f32 * tile_size
    }
}

pub fn default_layout() -> Layout {
    Layout::new(DEFAULT_LEVEL_MAP)
}
