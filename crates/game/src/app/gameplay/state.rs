use tilescroll_engine::{Rect, ShootDirection, Vec2};

use super::bullet::{Bullet, BulletSpec};
use super::controller::{integrate, velocity, InputState};

/// Everything the frame loop mutates, owned by the scene.
#[derive(Debug, Clone)]
pub(crate) struct GameState {
    pub(crate) player: Rect,
    pub(crate) player_speed: f32,
    pub(crate) input: InputState,
    pub(crate) bullets: Vec<Bullet>,
    pub(crate) world_size: Vec2,
    pub(crate) bullet_spec: BulletSpec,
}

impl GameState {
    pub(crate) fn new(
        player: Rect,
        player_speed: f32,
        world_size: Vec2,
        bullet_spec: BulletSpec,
    ) -> Self {
        Self {
            player,
            player_speed,
            input: InputState::default(),
            bullets: Vec::new(),
            world_size,
            bullet_spec,
        }
    }

    pub(crate) fn advance(&mut self, dt_seconds: f32) {
        if self.input.is_idle() {
            return;
        }
        let velocity = velocity(self.input, self.player_speed);
        self.player.position = integrate(self.player, velocity, dt_seconds, self.world_size);
    }

    pub(crate) fn shoot(&mut self, direction: ShootDirection) -> &Bullet {
        self.bullets
            .push(Bullet::fire(self.player, direction, self.bullet_spec));
        &self.bullets[self.bullets.len() - 1]
    }
}
