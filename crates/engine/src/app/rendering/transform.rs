use crate::app::Vec2;

/// Visible window into the world, in world units (one unit per logical pixel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// World-space top-left corner of the viewport when centered on `focus`,
    /// kept inside `[0, world_size]`. Axes where the world is smaller than the
    /// viewport stay pinned at 0.
    pub fn scroll_offset(&self, focus: Vec2, world_size: Vec2) -> Vec2 {
        let width = self.width as f32;
        let height = self.height as f32;
        Vec2 {
            x: clamp_range(focus.x - width * 0.5, 0.0, world_size.x - width),
            y: clamp_range(focus.y - height * 0.5, 0.0, world_size.y - height),
        }
    }
}

/// Clamps `value` to `[min, max]`.
///
/// Unlike `f32::clamp` this does not panic when `max < min`: the lower bound
/// wins for every input, which keeps the viewport still when the world is
/// smaller than it.
pub fn clamp_range(value: f32, min: f32, max: f32) -> f32 {
    if value < min || max < min {
        return min;
    }
    if value > max {
        return max;
    }
    value
}

/// Screen pixel containing `world`, floored so adjacent edges land on the
/// same pixel column.
pub(crate) fn world_to_screen_px(world: Vec2, scroll_offset: Vec2) -> (i32, i32) {
    (
        (world.x - scroll_offset.x).floor() as i32,
        (world.y - scroll_offset.y).floor() as i32,
    )
}
