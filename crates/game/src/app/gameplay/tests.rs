use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tilescroll_engine::{
    InputAction, InputSnapshot, Rect, Scene, SceneWorld, ShootDirection, Tilemap, Vec2, Viewport,
};

use super::bullet::Bullet;
use super::controller::{integrate, velocity, InputState};
use super::*;

const WORLD: Vec2 = Vec2 {
    x: 10_000.0,
    y: 10_000.0,
};
const SPEED: f32 = 400.0;
const BULLET_SPEC: BulletSpec = BulletSpec {
    size: Vec2 { x: 5.0, y: 20.0 },
    spawn_offset: Vec2 { x: 20.0, y: 0.0 },
};

fn player_at(x: f32, y: f32) -> Rect {
    Rect::new(x, y, 20.0, 20.0)
}

fn state_at(x: f32, y: f32) -> GameState {
    GameState::new(player_at(x, y), SPEED, WORLD, BULLET_SPEC)
}

fn snapshot_from_actions(actions: &[InputAction]) -> InputSnapshot {
    let mut snapshot = InputSnapshot::empty();
    for action in actions {
        snapshot = snapshot.with_action_down(*action, true);
    }
    snapshot
}

fn input(up: bool, down: bool, left: bool, right: bool) -> InputState {
    InputState {
        up,
        down,
        left,
        right,
    }
}

fn loaded_scene(x: f32, y: f32) -> (TileScrollScene, SceneWorld) {
    let tilemap = Tilemap::with_filled_tiles(500, 500, 20.0, [0, 1, 2]).expect("tilemap");
    let mut scene = TileScrollScene::new(tilemap, state_at(x, y));
    let mut world = SceneWorld::default();
    scene.load(&mut world);
    (scene, world)
}

#[test]
fn holding_right_for_one_second_moves_speed_units() {
    let mut state = state_at(5_000.0, 5_000.0);
    state.input.right = true;

    state.advance(1.0);

    assert_eq!(state.player.position, Vec2::new(5_400.0, 5_000.0));
}

#[test]
fn no_input_leaves_position_unchanged_for_any_dt() {
    for dt in [0.0, 0.016, 1.0, 250.0] {
        let mut state = state_at(123.5, 4_321.0);
        state.advance(dt);
        assert_eq!(state.player.position, Vec2::new(123.5, 4_321.0));
    }
}

#[test]
fn zero_dt_does_not_move() {
    let mut state = state_at(5_000.0, 5_000.0);
    state.input = input(true, false, true, false);
    state.advance(0.0);
    assert_eq!(state.player.position, Vec2::new(5_000.0, 5_000.0));
}

#[test]
fn right_edge_clamps_player() {
    for dt in [0.001, 0.5, 10.0] {
        let mut state = state_at(WORLD.x - 20.0, 100.0);
        state.input.right = true;
        state.advance(dt);
        assert_eq!(state.player.position.x, WORLD.x - 20.0);
    }
}

#[test]
fn top_left_corner_clamps_at_zero() {
    let mut state = state_at(30.0, 10.0);
    state.input = input(true, false, true, false);

    state.advance(1.0);

    assert_eq!(state.player.position, Vec2::ZERO);
}

#[test]
fn bottom_edge_clamps_player() {
    let mut state = state_at(0.0, WORLD.y - 25.0);
    state.input.down = true;
    state.advance(1.0);
    assert_eq!(state.player.position.y, WORLD.y - 20.0);
}

#[test]
fn up_moves_toward_smaller_y() {
    let mut state = state_at(1_000.0, 1_000.0);
    state.input.up = true;
    state.advance(0.5);
    assert_eq!(state.player.position, Vec2::new(1_000.0, 800.0));
}

#[test]
fn opposite_directions_cancel() {
    let mut state = state_at(1_000.0, 1_000.0);
    state.input = input(true, true, true, true);
    state.advance(1.0);
    assert_eq!(state.player.position, Vec2::new(1_000.0, 1_000.0));
}

#[test]
fn diagonal_is_not_normalized() {
    let v = velocity(input(false, true, false, true), SPEED);
    assert_eq!(v, Vec2::new(SPEED, SPEED));

    let speed = (v.x * v.x + v.y * v.y).sqrt();
    assert!((speed - SPEED * std::f32::consts::SQRT_2).abs() < 0.01);
}

#[test]
fn integrate_pins_to_zero_when_body_exceeds_world() {
    let body = Rect::new(0.0, 0.0, 50.0, 50.0);
    let next = integrate(body, Vec2::new(100.0, 100.0), 1.0, Vec2::new(40.0, 40.0));
    assert_eq!(next, Vec2::ZERO);
}

#[test]
fn input_state_reads_move_actions_from_snapshot() {
    let snapshot = snapshot_from_actions(&[InputAction::MoveLeft, InputAction::MoveDown]);
    assert_eq!(
        InputState::from_snapshot(&snapshot),
        input(false, true, true, false)
    );
    assert!(InputState::from_snapshot(&InputSnapshot::empty()).is_idle());
}

#[test]
fn bullet_fires_at_offset_from_shooter_with_direction() {
    let bullet = Bullet::fire(player_at(100.0, 200.0), ShootDirection::Left, BULLET_SPEC);

    assert_eq!(bullet.rect, Rect::new(120.0, 200.0, 5.0, 20.0));
    assert_eq!((bullet.x_direction, bullet.y_direction), (-1, 0));
    assert!(!bullet.dead);
}

#[test]
fn bullet_unit_steps_move_one_unit() {
    let mut bullet = Bullet::fire(player_at(0.0, 0.0), ShootDirection::Up, BULLET_SPEC);
    let start = bullet.rect.position;

    bullet.move_right();
    bullet.move_right();
    bullet.move_down();
    assert_eq!(bullet.rect.position, Vec2::new(start.x + 2.0, start.y + 1.0));

    bullet.move_left();
    bullet.move_up();
    assert_eq!(bullet.rect.position, Vec2::new(start.x + 1.0, start.y));
}

#[test]
fn shoot_appends_static_bullet() {
    let mut state = state_at(10.0, 10.0);
    state.shoot(ShootDirection::Down);
    state.shoot(ShootDirection::Right);

    assert_eq!(state.bullets.len(), 2);
    state.input.right = true;
    state.advance(1.0);
    assert_eq!(state.bullets[0].rect.position, Vec2::new(30.0, 10.0));
    assert_eq!(state.bullets[1].rect.position, Vec2::new(30.0, 10.0));
}

#[test]
fn generated_tilemap_has_requested_wall_count() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let tilemap = generate_tilemap(50, 40, 20.0, 100, &mut rng).expect("tilemap");

    assert_eq!(tilemap.tile_count(), 2_000);
    assert_eq!(tilemap.filled_count(), 100);
    assert_eq!(tilemap.filled_indices().count(), 100);
    assert_eq!(tilemap.world_size(), Vec2::new(1_000.0, 800.0));
}

#[test]
fn generated_tilemap_is_reproducible_from_seed() {
    let first = generate_tilemap(30, 30, 20.0, 45, &mut ChaCha8Rng::seed_from_u64(77))
        .expect("tilemap");
    let second = generate_tilemap(30, 30, 20.0, 45, &mut ChaCha8Rng::seed_from_u64(77))
        .expect("tilemap");
    assert_eq!(first, second);
}

#[test]
fn generation_edge_counts() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let empty = generate_tilemap(4, 4, 10.0, 0, &mut rng).expect("tilemap");
    let full = generate_tilemap(4, 4, 10.0, 16, &mut rng).expect("tilemap");

    assert_eq!(empty.filled_count(), 0);
    assert_eq!(full.filled_count(), 16);
    assert!(matches!(
        generate_tilemap(4, 4, 10.0, 17, &mut rng),
        Err(WorldGenError::Sample(_))
    ));
    assert!(matches!(
        generate_tilemap(0, 4, 10.0, 0, &mut rng),
        Err(WorldGenError::Tilemap(_))
    ));
}

#[test]
fn scene_load_installs_tilemap_player_and_camera() {
    let (_scene, world) = loaded_scene(5_000.0, 5_000.0);

    let tilemap = world.tilemap().expect("tilemap installed");
    assert_eq!(tilemap.filled_count(), 3);
    assert_eq!(world.entity_count(), 1);
    assert_eq!(world.entities()[0].rect, player_at(5_000.0, 5_000.0));
    assert_eq!(world.camera().focus, Vec2::new(5_010.0, 5_010.0));
}

#[test]
fn scene_update_moves_player_entity_and_camera() {
    let (mut scene, mut world) = loaded_scene(5_000.0, 5_000.0);
    let snapshot = snapshot_from_actions(&[InputAction::MoveRight]);

    scene.update(0.5, &snapshot, &mut world);

    assert_eq!(scene.state().player.position, Vec2::new(5_200.0, 5_000.0));
    assert_eq!(
        world.entities()[0].rect.position,
        Vec2::new(5_200.0, 5_000.0)
    );
    assert_eq!(world.camera().focus, Vec2::new(5_210.0, 5_010.0));

    let viewport = Viewport {
        width: 800,
        height: 800,
    };
    assert_eq!(
        viewport.scroll_offset(world.camera().focus, world.world_size()),
        Vec2::new(4_810.0, 4_610.0)
    );
}

#[test]
fn scene_update_spawns_one_bullet_per_shot_before_moving() {
    let (mut scene, mut world) = loaded_scene(1_000.0, 1_000.0);
    let snapshot = InputSnapshot::empty()
        .with_action_down(InputAction::MoveDown, true)
        .with_shot(ShootDirection::Up)
        .with_shot(ShootDirection::Left);

    scene.update(1.0, &snapshot, &mut world);

    assert_eq!(scene.state().bullets.len(), 2);
    assert_eq!(world.entity_count(), 3);
    for bullet in &world.entities()[1..] {
        assert_eq!(bullet.rect, Rect::new(1_020.0, 1_000.0, 5.0, 20.0));
        assert_eq!(bullet.renderable.debug_name, "bullet");
    }
    assert_eq!(scene.state().player.position, Vec2::new(1_000.0, 1_400.0));

    scene.update(1.0, &InputSnapshot::empty(), &mut world);
    assert_eq!(world.entity_count(), 3);
}

#[test]
fn scene_reload_restores_bullet_entities() {
    let (mut scene, mut world) = loaded_scene(0.0, 0.0);
    scene.update(
        0.016,
        &InputSnapshot::empty().with_shot(ShootDirection::Right),
        &mut world,
    );

    scene.unload(&mut world);
    assert_eq!(world.entity_count(), 0);
    assert!(world.tilemap().is_none());

    scene.load(&mut world);
    assert_eq!(world.entity_count(), 2);
}

#[test]
fn debug_title_reports_position_and_bullets() {
    let (mut scene, mut world) = loaded_scene(5_000.0, 5_000.0);
    scene.update(
        0.0,
        &InputSnapshot::empty().with_shot(ShootDirection::Down),
        &mut world,
    );

    assert_eq!(
        scene.debug_title(&world).as_deref(),
        Some("Tile Scroller | player (5000, 5000) | bullets 1")
    );
}

#[test]
fn scroll_offset_centers_on_player_center_at_spawn() {
    let (_scene, world) = loaded_scene(5_000.0, 5_000.0);
    let viewport = Viewport {
        width: 800,
        height: 800,
    };

    assert_eq!(
        viewport.scroll_offset(world.camera().focus, world.world_size()),
        Vec2::new(4_610.0, 4_610.0)
    );
}
