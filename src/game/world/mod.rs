pub mod camera;
pub mod tile;
pub mod world;

pub use camera::{Camera, MouseLook};
pub use tile::Tile;
pub use world::World;
