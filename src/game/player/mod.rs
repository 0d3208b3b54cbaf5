pub mod player;

pub use player::{Bounds, Player};
