//! The scrolling 2D tile world.

use glam::Vec2;
use log::warn;

use crate::config::Config;
use crate::engine::graphics::canvas::{Canvas, FilledRect};
use crate::engine::input::DirectionalInput;
use crate::game::player::{Bounds, Player};
use crate::game::world::World;

pub const BACKGROUND_COLOR: [u8; 4] = [0, 0, 0, 255];
pub const PLAYER_COLOR: [u8; 4] = [255, 0, 0, 255];

pub struct TileScene {
    pub world: World,
    pub player: Player,
    bounds: Bounds,
    tile_size: f32,
}

impl TileScene {
    pub fn new(config: &Config) -> Self {
        let tile_size = config.tile_size as f32;
        let world = World::flat(config.world_rows, config.world_cols);
        if world.is_empty() {
            warn!("World is {}x{}, only the player will be drawn", config.world_rows, config.world_cols);
        }
        let start = Vec2::new(
            (config.screen_width / 2) as f32,
            (config.screen_height / 2) as f32,
        );
        Self {
            world,
            player: Player::new(start, config.player_speed),
            bounds: Bounds::new(config.screen_width as f32, config.screen_height as f32, tile_size),
            tile_size,
        }
    }

    pub fn update(&mut self, input: &DirectionalInput) {
        self.player.update(input, &self.bounds);
    }

    /// Sub-tile scroll of the world, opposite to the player's position.
    pub fn scroll_offset(&self) -> Vec2 {
        let tile = self.tile_size;
        let pos = self.player.position.floor();
        Vec2::new(pos.x.rem_euclid(tile), pos.y.rem_euclid(tile))
    }

    /// One rect per tile followed by the player marker, in paint order.
    pub fn draw_list(&self) -> Vec<FilledRect> {
        let tile = self.tile_size;
        let offset = self.scroll_offset();
        let mut rects = Vec::with_capacity(self.world.len() + 1);
        for (row, col, t) in self.world.iter() {
            rects.push(FilledRect::new(
                col as f32 * tile - offset.x,
                row as f32 * tile - offset.y,
                tile,
                tile,
                t.color(),
            ));
        }
        let p = self.player.get_position();
        rects.push(FilledRect::new(p.x, p.y, tile, tile, PLAYER_COLOR));
        rects
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        canvas.clear(BACKGROUND_COLOR);
        canvas.fill_rects(&self.draw_list());
    }
}
