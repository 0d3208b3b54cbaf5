use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::event::{DeviceEvent, DeviceId, ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowId;
use log::{debug, error, info, warn};

use crate::config::{Config, SceneKind};
use crate::engine::graphics::{CubeRenderer, GpuContext, RectBatch, RectRenderer};
use crate::engine::input::InputHandler;
use crate::engine::window::WindowManager;
use crate::error::{GameError, Result};
use crate::game::scene::{CubeScene, TileScene};
use crate::game::state::FrameStats;

enum ActiveScene {
    Tiles {
        scene: TileScene,
        batch: RectBatch,
        renderer: Option<RectRenderer>,
    },
    Cube {
        scene: CubeScene,
        renderer: Option<CubeRenderer>,
        // Accumulated raw mouse motion, fed to mouse look as a cursor position.
        cursor: (f64, f64),
    },
}

pub struct App {
    config: Config,
    window: WindowManager,
    gpu: Option<GpuContext>,
    scene: ActiveScene,
    input_handler: InputHandler,
    stats: FrameStats,
    fullscreen: bool,
    fatal: Option<GameError>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let scene = match config.scene {
            SceneKind::Tiles => ActiveScene::Tiles {
                scene: TileScene::new(&config),
                batch: RectBatch::new(),
                renderer: None,
            },
            SceneKind::Cube => ActiveScene::Cube {
                scene: CubeScene::new(&config),
                renderer: None,
                cursor: (0.0, 0.0),
            },
        };
        Self {
            config,
            window: WindowManager::new(),
            gpu: None,
            scene,
            input_handler: InputHandler::new(),
            stats: FrameStats::new(Instant::now()),
            fullscreen: false,
            fatal: None,
        }
    }

    /// The initialisation error that stopped the event loop, if any.
    pub fn take_error(&mut self) -> Option<GameError> {
        self.fatal.take()
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window = self.window.create_window(event_loop, &self.config)?;
        let gpu = pollster::block_on(GpuContext::new(window))?;

        match &mut self.scene {
            ActiveScene::Tiles { scene, renderer, .. } => {
                let logical = (self.config.screen_width as f32, self.config.screen_height as f32);
                let capacity = scene.world.len() + 1;
                *renderer = Some(RectRenderer::new(&gpu, logical, capacity));
            }
            ActiveScene::Cube { renderer, .. } => {
                *renderer = Some(CubeRenderer::new(&gpu));
            }
        }
        self.gpu = Some(gpu);
        // Window and device setup must not count as time spent in the first frame.
        self.stats.restart(Instant::now());
        Ok(())
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, event: &KeyEvent) {
        let PhysicalKey::Code(keycode) = event.physical_key else {
            return;
        };
        let pressed = event.state == ElementState::Pressed;
        self.input_handler.handle_keyboard_input_event(keycode, pressed);

        if !pressed || event.repeat {
            return;
        }
        match keycode {
            KeyCode::Escape => {
                info!("Escape pressed, exiting");
                event_loop.exit();
            }
            KeyCode::F11 => {
                self.input_handler
                    .handle_fullscreen_toggle(&mut self.fullscreen, self.window.get_window());
            }
            KeyCode::F3 => {
                let shown = self.stats.toggle_fps_display();
                info!("Show FPS: {} (last measured {})", shown, self.stats.get_fps());
            }
            _ => {}
        }
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        gpu.resize(new_size);
        if let ActiveScene::Cube { renderer: Some(renderer), .. } = &mut self.scene {
            renderer.resize(gpu);
        }
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let delta = self.stats.begin_frame(now);
        if let Some(fps) = self.stats.poll_fps(now) {
            info!("FPS: {}", fps);
        }

        let input = self.input_handler.directional();
        let Some(gpu) = self.gpu.as_ref() else {
            return;
        };

        let result = match &mut self.scene {
            ActiveScene::Tiles { scene, batch, renderer } => {
                scene.update(&input);
                scene.draw(batch);
                match renderer {
                    Some(renderer) => renderer.render(gpu, batch),
                    None => Ok(()),
                }
            }
            ActiveScene::Cube { scene, renderer, .. } => {
                scene.update(&input, delta.as_secs_f32());
                match renderer {
                    Some(renderer) => renderer.render(gpu, scene.mvp(gpu.aspect())),
                    None => Ok(()),
                }
            }
        };

        match result {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                debug!("Surface lost or outdated, reconfiguring");
                gpu.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                error!("Render error: out of GPU memory, exiting");
                event_loop.exit();
            }
            Err(e) => warn!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.has_window() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            error!("Initialisation failed: {}", e);
            self.fatal = Some(e);
            event_loop.exit();
            return;
        }
        self.window.request_redraw();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                self.frame(event_loop);
                self.window.request_redraw();
            }
            WindowEvent::Resized(physical_size) => {
                self.resize(physical_size);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_key(event_loop, &event);
            }
            WindowEvent::Focused(focused) => {
                let grab = matches!(self.scene, ActiveScene::Cube { .. });
                self.input_handler
                    .handle_window_focus(focused, self.window.get_window(), grab);
                if let ActiveScene::Cube { scene, .. } = &mut self.scene {
                    if !focused {
                        scene.mouse_look.reset();
                    }
                }
            }
            _ => (),
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            if let ActiveScene::Cube { scene, cursor, .. } = &mut self.scene {
                cursor.0 += delta.0;
                cursor.1 += delta.1;
                scene.cursor_moved(cursor.0, cursor.1);
            }
        }
    }
}
