pub mod cube;
pub mod tiles;

pub use cube::CubeScene;
pub use tiles::TileScene;
