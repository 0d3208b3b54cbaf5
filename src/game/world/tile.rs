/// A single cell of the flat world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Grass,
    Dirt,
    Water,
}

impl Tile {
    /// Grass and dirt are ground you could stand on, water is not.
    pub fn is_solid(&self) -> bool {
        !matches!(self, Tile::Water)
    }

    /// Fill colour as straight RGBA bytes.
    pub fn color(&self) -> [u8; 4] {
        match self {
            Tile::Grass => [0, 255, 0, 255],
            Tile::Dirt => [139, 69, 19, 255],
            Tile::Water => [0, 0, 255, 255],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn water_is_the_only_non_solid_tile() {
        assert!(Tile::Grass.is_solid());
        assert!(Tile::Dirt.is_solid());
        assert!(!Tile::Water.is_solid());
    }

    #[test]
    fn tile_colors_are_opaque_and_distinct() {
        let colors = [Tile::Grass.color(), Tile::Dirt.color(), Tile::Water.color()];
        for c in colors {
            assert_eq!(c[3], 255);
        }
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_eq!(Tile::Dirt.color(), [139, 69, 19, 255]);
    }
}
