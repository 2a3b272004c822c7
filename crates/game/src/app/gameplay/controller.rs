use tilescroll_engine::{clamp_range, InputAction, InputSnapshot, Rect, Vec2};

/// Direction flags read once per frame. Opposite flags may both be set and
/// cancel out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct InputState {
    pub(crate) up: bool,
    pub(crate) down: bool,
    pub(crate) left: bool,
    pub(crate) right: bool,
}

impl InputState {
    pub(crate) fn from_snapshot(input: &InputSnapshot) -> Self {
        Self {
            up: input.is_down(InputAction::MoveUp),
            down: input.is_down(InputAction::MoveDown),
            left: input.is_down(InputAction::MoveLeft),
            right: input.is_down(InputAction::MoveRight),
        }
    }

    pub(crate) fn is_idle(&self) -> bool {
        !(self.up || self.down || self.left || self.right)
    }
}

/// Per-axis velocity in units per second. Diagonals are not normalized, so
/// two held axes move `sqrt(2)` times faster than one.
pub(crate) fn velocity(input: InputState, speed: f32) -> Vec2 {
    Vec2 {
        x: speed * (axis(input.right) - axis(input.left)),
        y: speed * (axis(input.down) - axis(input.up)),
    }
}

/// Next top-left position of `body` after moving at `velocity` for
/// `dt_seconds`, kept fully inside `[0, world_size]`.
pub(crate) fn integrate(body: Rect, velocity: Vec2, dt_seconds: f32, world_size: Vec2) -> Vec2 {
    Vec2 {
        x: clamp_range(
            body.position.x + velocity.x * dt_seconds,
            0.0,
            world_size.x - body.size.x,
        ),
        y: clamp_range(
            body.position.y + velocity.y * dt_seconds,
            0.0,
            world_size.y - body.size.y,
        ),
    }
}

fn axis(held: bool) -> f32 {
    if held {
        1.0
    } else {
        0.0
    }
}
