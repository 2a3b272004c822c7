mod bullet;
mod controller;
mod scene;
mod state;
mod world_gen;

pub(crate) use bullet::BulletSpec;
pub(crate) use scene::TileScrollScene;
pub(crate) use state::GameState;
pub(crate) use world_gen::{generate_tilemap, WorldGenError};

#[cfg(test)]
mod tests;
