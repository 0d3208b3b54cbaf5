pub mod canvas;
pub mod cube_renderer;
pub mod gpu;
pub mod rect_renderer;
pub mod vertex;

pub use canvas::{Canvas, FilledRect, RgbaCanvas};
pub use cube_renderer::CubeRenderer;
pub use gpu::GpuContext;
pub use rect_renderer::{RectBatch, RectRenderer};
pub use vertex::{ColorVertex, RectInstance};
