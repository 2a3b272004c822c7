use tilescroll_engine::{Rect, ShootDirection, Vec2};

/// Size and placement of newly fired bullets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BulletSpec {
    pub(crate) size: Vec2,
    /// Offset from the shooter's top-left corner.
    pub(crate) spawn_offset: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bullet {
    pub(crate) rect: Rect,
    pub(crate) x_direction: i8,
    pub(crate) y_direction: i8,
    pub(crate) dead: bool,
}

impl Bullet {
    pub(crate) fn fire(shooter: Rect, direction: ShootDirection, spec: BulletSpec) -> Self {
        let (x_direction, y_direction) = direction.vector();
        Self {
            rect: Rect {
                position: Vec2 {
                    x: shooter.position.x + spec.spawn_offset.x,
                    y: shooter.position.y + spec.spawn_offset.y,
                },
                size: spec.size,
            },
            x_direction,
            y_direction,
            dead: false,
        }
    }
}

// Unit steps are not driven by the frame loop; bullets stay where they spawn.
#[allow(dead_code)]
impl Bullet {
    pub(crate) fn move_left(&mut self) {
        self.rect.position.x -= 1.0;
    }

    pub(crate) fn move_right(&mut self) {
        self.rect.position.x += 1.0;
    }

    pub(crate) fn move_up(&mut self) {
        self.rect.position.y -= 1.0;
    }

    pub(crate) fn move_down(&mut self) {
        self.rect.position.y += 1.0;
    }
}
