//! Library entry point for the game.

pub mod config;
pub mod engine;
pub mod error;
pub mod game;

// Re-export main types for convenience
pub use config::{Cli, Config, SceneKind};
pub use error::GameError;
pub use game::App;
