//! Engine module containing graphics, input, and window management.

pub mod graphics;
pub mod input;
pub mod window;

// Re-export commonly used types
pub use graphics::{Canvas, CubeRenderer, GpuContext, RectRenderer};
pub use input::{DirectionalInput, InputHandler};
pub use window::WindowManager;
