mod renderer;
mod transform;

pub use renderer::Renderer;
pub(crate) use transform::world_to_screen_px;
pub use transform::{clamp_range, Viewport};
