//! Game-specific logic and features.

pub mod app;
pub mod player;
pub mod scene;
pub mod screenshot;
pub mod state;
pub mod world;

// Re-export commonly used types
pub use app::App;
pub use scene::{CubeScene, TileScene};
pub use world::{Camera, Tile, World};
