//! Headless rendering of the tile scene to an image file.

use std::path::Path;
use log::info;

use crate::config::{Config, SceneKind};
use crate::engine::graphics::canvas::RgbaCanvas;
use crate::error::{GameError, Result};
use crate::game::scene::TileScene;

pub fn render_tiles(config: &Config) -> RgbaCanvas {
    let scene = TileScene::new(config);
    let mut canvas = RgbaCanvas::new(config.screen_width, config.screen_height);
    scene.draw(&mut canvas);
    canvas
}

pub fn save(config: &Config, path: &Path) -> Result<()> {
    if config.scene != SceneKind::Tiles {
        return Err(GameError::Config("screenshots are only available for the tiles scene".into()));
    }
    render_tiles(config).image().save(path)?;
    info!("Saved screenshot to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::scene::tiles::PLAYER_COLOR;
    use crate::game::world::Tile;

    #[test]
    fn renders_initial_frame() {
        let canvas = render_tiles(&Config::default());
        assert_eq!(canvas.image().dimensions(), (800, 600));
        // Top row is shifted up by 20px at the start position, so y=10 is still grass.
        assert_eq!(canvas.pixel(10, 10), Some(Tile::Grass.color()));
        assert_eq!(canvas.pixel(10, 30), Some(Tile::Dirt.color()));
        assert_eq!(canvas.pixel(410, 310), Some(PLAYER_COLOR));
    }

    #[test]
    fn writes_png() {
        let config = Config { screen_width: 80, screen_height: 80, ..Config::default() };
        let path = std::env::temp_dir().join(format!("gocraft-screenshot-{}.png", std::process::id()));
        save(&config, &path).unwrap();
        let image = image::open(&path).unwrap().to_rgba8();
        assert_eq!(image.dimensions(), (80, 80));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn cube_scene_has_no_screenshot() {
        let config = Config { scene: SceneKind::Cube, ..Config::default() };
        let path = std::env::temp_dir().join("gocraft-never-written.png");
        assert!(matches!(save(&config, &path), Err(GameError::Config(_))));
    }
}
