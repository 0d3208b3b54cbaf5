//! Window management implementation.

use std::sync::Arc;
use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;
use log::{error, info};

use crate::config::{Config, WINDOW_TITLE};
use crate::error::Result;

#[derive(Default)]
pub struct WindowManager {
    window: Option<Arc<Window>>,
}

impl WindowManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_window(&mut self, event_loop: &ActiveEventLoop, config: &Config) -> Result<Arc<Window>> {
        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(config.screen_width, config.screen_height));
        let window = event_loop.create_window(attributes).map_err(|e| {
            error!("Failed to create window: {:?}", e);
            e
        })?;
        let window = Arc::new(window);
        info!("Window created: {:?}", window.inner_size());
        self.window = Some(window.clone());
        Ok(window)
    }

    pub fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    pub fn get_window(&self) -> Option<&Window> {
        self.window.as_deref()
    }

    pub fn has_window(&self) -> bool {
        self.window.is_some()
    }
}
