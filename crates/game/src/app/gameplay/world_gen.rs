use rand::Rng;
use thiserror::Error;
use tilescroll_engine::{sample_without_replacement, SampleError, Tilemap, TilemapError};

#[derive(Debug, Error)]
pub(crate) enum WorldGenError {
    #[error("failed to pick filled tiles: {0}")]
    Sample(#[from] SampleError),
    #[error("failed to build tilemap: {0}")]
    Tilemap(#[from] TilemapError),
}

/// Builds a `columns x rows` grid with `filled_tiles` wall tiles picked
/// uniformly without replacement.
pub(crate) fn generate_tilemap<R: Rng + ?Sized>(
    columns: u32,
    rows: u32,
    tile_size: f32,
    filled_tiles: usize,
    rng: &mut R,
) -> Result<Tilemap, WorldGenError> {
    let tile_count = columns as usize * rows as usize;
    let filled = sample_without_replacement(filled_tiles, tile_count, rng)?;
    Ok(Tilemap::with_filled_tiles(columns, rows, tile_size, filled)?)
}
