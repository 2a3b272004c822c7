pub mod app;
pub mod sampling;

pub use app::{
    clamp_range, run_app, AppError, Camera2D, Entity, EntityId, InputAction, InputSnapshot,
    LoopConfig, LoopMetricsSnapshot, Rect, RenderableDesc, Renderer, Scene, SceneWorld,
    ShootDirection, Tilemap, TilemapError, Vec2, Viewport,
};
pub use sampling::{sample_without_replacement, SampleError};
