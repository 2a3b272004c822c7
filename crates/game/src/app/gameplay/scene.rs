use tilescroll_engine::{EntityId, InputSnapshot, RenderableDesc, Scene, SceneWorld, Tilemap};
use tracing::{debug, info};

use super::controller::InputState;
use super::state::GameState;

const PLAYER_RENDERABLE: RenderableDesc = RenderableDesc {
    fill: [0, 0, 255, 255],
    outline: Some([0, 0, 0, 255]),
    debug_name: "player",
};
const BULLET_RENDERABLE: RenderableDesc = RenderableDesc {
    fill: [0, 0, 0, 255],
    outline: None,
    debug_name: "bullet",
};

pub(crate) struct TileScrollScene {
    tilemap: Tilemap,
    state: GameState,
    player_entity: Option<EntityId>,
    bullet_entities: Vec<EntityId>,
}

impl TileScrollScene {
    pub(crate) fn new(tilemap: Tilemap, state: GameState) -> Self {
        Self {
            tilemap,
            state,
            player_entity: None,
            bullet_entities: Vec::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &GameState {
        &self.state
    }

    /// Mirrors game state into the render world and republishes the camera
    /// focus. Bullets fired since the last sync get their entities here.
    fn sync_world(&mut self, world: &mut SceneWorld) {
        if let Some(player) = self
            .player_entity
            .and_then(|id| world.find_entity_mut(id))
        {
            player.rect = self.state.player;
        }

        for bullet in &self.state.bullets[self.bullet_entities.len()..] {
            let id = world.spawn(bullet.rect, BULLET_RENDERABLE);
            self.bullet_entities.push(id);
        }
        for (bullet, id) in self.state.bullets.iter().zip(&self.bullet_entities) {
            if let Some(entity) = world.find_entity_mut(*id) {
                entity.rect = bullet.rect;
            }
        }

        // Focus is the player's center, not its top-left corner.
        world.camera_mut().focus = self.state.player.center();
    }
}

impl Scene for TileScrollScene {
    fn load(&mut self, world: &mut SceneWorld) {
        world.set_tilemap(self.tilemap.clone());
        self.player_entity = Some(world.spawn(self.state.player, PLAYER_RENDERABLE));
        self.bullet_entities.clear();
        self.sync_world(world);
        info!(
            filled_tiles = self.tilemap.filled_count(),
            player_x = self.state.player.position.x,
            player_y = self.state.player.position.y,
            "scene_loaded"
        );
    }

    fn update(&mut self, frame_dt_seconds: f32, input: &InputSnapshot, world: &mut SceneWorld) {
        // Shots come from this frame's key presses, so they leave from where
        // the player stood before moving.
        for direction in input.shots() {
            let bullet = self.state.shoot(direction);
            debug!(
                ?direction,
                dx = bullet.x_direction,
                dy = bullet.y_direction,
                x = bullet.rect.position.x,
                y = bullet.rect.position.y,
                "shot_fired"
            );
        }

        self.state.input = InputState::from_snapshot(input);
        self.state.advance(frame_dt_seconds);
        self.sync_world(world);
    }

    fn unload(&mut self, world: &mut SceneWorld) {
        world.clear();
        self.player_entity = None;
        self.bullet_entities.clear();
        info!(bullets_fired = self.state.bullets.len(), "scene_unloaded");
    }

    fn debug_title(&self, _world: &SceneWorld) -> Option<String> {
        Some(format!(
            "Tile Scroller | player ({:.0}, {:.0}) | bullets {}",
            self.state.player.position.x,
            self.state.player.position.y,
            self.state.bullets.iter().filter(|bullet| !bullet.dead).count()
        ))
    }
}
