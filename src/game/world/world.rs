//! Fixed-size flat tile world.

use crate::game::world::tile::Tile;

/// Row-major grid of tiles. Dimensions are fixed once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    rows: usize,
    cols: usize,
    tiles: Vec<Tile>,
}

impl World {
    /// Builds the flat world: the top row is grass, every other row alternates
    /// dirt (even columns) and water (odd columns).
    pub fn flat(rows: usize, cols: usize) -> Self {
        let mut tiles = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                let tile = if row == 0 {
                    Tile::Grass
                } else if col % 2 == 0 {
                    Tile::Dirt
                } else {
                    Tile::Water
                };
                tiles.push(tile);
            }
        }
        Self { rows, cols, tiles }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of tiles, `rows * cols`.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.tiles.get(row * self.cols + col).copied()
    }

    pub fn row(&self, row: usize) -> Option<&[Tile]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.tiles[start..start + self.cols])
    }

    /// Every tile as `(row, col, tile)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Tile)> + '_ {
        let cols = self.cols;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, tile)| (i / cols, i % cols, *tile))
    }
}
