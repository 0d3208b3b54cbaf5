//! Runtime configuration and command line.

use clap::{Parser, ValueEnum};
use glam::Vec3;
use std::path::PathBuf;

use crate::error::{GameError, Result};

pub const WINDOW_TITLE: &str = "GoCraft - Minecraft in Go";

/// Upper bound on `world_rows * world_cols`.
pub const MAX_WORLD_TILES: usize = 1 << 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SceneKind {
    /// Scrolling 2D tile world
    #[default]
    Tiles,
    /// Rotating cube with a fly camera
    Cube,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub scene: SceneKind,
    pub screen_width: u32,
    pub screen_height: u32,
    pub tile_size: u32,
    pub world_rows: usize,
    pub world_cols: usize,
    pub player_speed: f32,
    pub camera_speed: f32,
    pub mouse_sensitivity: f32,
    /// Cube spin in degrees per second.
    pub cube_rotation_rate: f32,
    pub camera_position: Vec3,
    pub camera_yaw: f32,
    pub camera_pitch: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scene: SceneKind::Tiles,
            screen_width: 800,
            screen_height: 600,
            tile_size: 40,
            world_rows: 80,
            world_cols: 60,
            player_speed: 5.0,
            camera_speed: 0.05,
            mouse_sensitivity: 0.1,
            cube_rotation_rate: 50.0,
            camera_position: Vec3::new(0.0, 0.0, 3.0),
            camera_yaw: -90.0,
            camera_pitch: 0.0,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(GameError::Config("screen size must be non-zero".into()));
        }
        if self.tile_size == 0 {
            return Err(GameError::Config("tile size must be non-zero".into()));
        }
        if self.tile_size > self.screen_width || self.tile_size > self.screen_height {
            return Err(GameError::Config(format!(
                "tile size {} does not fit a {}x{} screen",
                self.tile_size, self.screen_width, self.screen_height
            )));
        }
        match self.world_rows.checked_mul(self.world_cols) {
            Some(tiles) if tiles <= MAX_WORLD_TILES => {}
            _ => {
                return Err(GameError::Config(format!(
                    "world of {}x{} tiles exceeds the limit of {} tiles",
                    self.world_rows, self.world_cols, MAX_WORLD_TILES
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Parser)]
#[command(name = "gocraft", about = "Minecraft-like tile world and cube demo")]
pub struct Cli {
    /// Scene to run
    #[arg(long, value_enum, default_value_t = SceneKind::Tiles)]
    pub scene: SceneKind,

    /// Window width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Tile edge length in pixels
    #[arg(long)]
    pub tile_size: Option<u32>,

    /// World rows
    #[arg(long)]
    pub rows: Option<usize>,

    /// World columns
    #[arg(long)]
    pub cols: Option<usize>,

    /// Render one tiles frame to this PNG and exit
    #[arg(long)]
    pub screenshot: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn to_config(&self) -> Result<Config> {
        let defaults = Config::default();
        let config = Config {
            scene: self.scene,
            screen_width: self.width.unwrap_or(defaults.screen_width),
            screen_height: self.height.unwrap_or(defaults.screen_height),
            tile_size: self.tile_size.unwrap_or(defaults.tile_size),
            world_rows: self.rows.unwrap_or(defaults.world_rows),
            world_cols: self.cols.unwrap_or(defaults.world_cols),
            ..defaults
        };
        config.validate()?;
        Ok(config)
    }
}
