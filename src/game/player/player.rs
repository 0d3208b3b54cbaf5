//! Player implementation for the tile scene.

use glam::Vec2;
use log::trace;

use crate::engine::input::DirectionalInput;

/// Area the player marker is allowed to occupy, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
    pub tile_size: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32, tile_size: f32) -> Self {
        Self { width, height, tile_size }
    }

    pub fn max(&self) -> Vec2 {
        Vec2::new(self.width - self.tile_size, self.height - self.tile_size).max(Vec2::ZERO)
    }
}

pub struct Player {
    pub position: Vec2,
    pub move_speed: f32,
}

impl Player {
    pub fn new(position: Vec2, move_speed: f32) -> Self {
        Self { position, move_speed }
    }

    /// Applies this tick's key deltas without clamping. Diagonals are not normalized.
    pub fn step(&mut self, input: &DirectionalInput) {
        if input.up {
            self.position.y -= self.move_speed;
        }
        if input.down {
            self.position.y += self.move_speed;
        }
        if input.left {
            self.position.x -= self.move_speed;
        }
        if input.right {
            self.position.x += self.move_speed;
        }
    }

    pub fn clamp(&mut self, bounds: &Bounds) {
        self.position = self.position.clamp(Vec2::ZERO, bounds.max());
    }

    pub fn update(&mut self, input: &DirectionalInput, bounds: &Bounds) {
        self.step(input);
        self.clamp(bounds);
        trace!("Player at {:?}", self.position);
    }

    pub fn get_position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }
}
