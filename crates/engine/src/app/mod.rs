mod input;
mod loop_runner;
mod metrics;
mod rendering;
mod scene;

pub use input::{InputAction, ShootDirection};
pub use loop_runner::{run_app, AppError, LoopConfig};
pub use metrics::LoopMetricsSnapshot;
pub use rendering::{clamp_range, Renderer, Viewport};
pub use scene::{
    Camera2D, Entity, EntityId, InputSnapshot, Rect, RenderableDesc, Scene, SceneWorld, Tilemap,
    TilemapError, Vec2,
};
