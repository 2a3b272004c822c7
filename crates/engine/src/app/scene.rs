use super::input::{ActionStates, InputAction, ShootDirection, ShotCounts};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    actions: ActionStates,
    shots: ShotCounts,
}

impl InputSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn new(actions: ActionStates, shots: ShotCounts) -> Self {
        Self { actions, shots }
    }

    pub fn is_down(&self, action: InputAction) -> bool {
        self.actions.is_down(action)
    }

    pub fn with_action_down(mut self, action: InputAction, is_down: bool) -> Self {
        self.actions.set(action, is_down);
        self
    }

    pub fn with_shot(mut self, direction: ShootDirection) -> Self {
        self.shots.record(direction);
        self
    }

    /// One entry per shoot press since the previous frame.
    pub fn shots(&self) -> impl Iterator<Item = ShootDirection> + '_ {
        self.shots.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u64);

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in world units. `position` is the top-left corner;
/// y grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub position: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            position: Vec2 { x, y },
            size: Vec2 {
                x: width,
                y: height,
            },
        }
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        Vec2 {
            x: self.position.x + self.size.x * 0.5,
            y: self.position.y + self.size.y * 0.5,
        }
    }
}

/// Camera state published by the scene. The renderer derives the scroll
/// offset from `focus` and its own viewport every frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct Camera2D {
    pub focus: Vec2,
}

/// Tilemap layout convention:
/// - tile (0,0) covers `[0, tile_size)` on both axes, rows grow downward.
/// - the linear index of (column,row) is `row * columns + column`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tilemap {
    columns: u32,
    rows: u32,
    tile_size: f32,
    filled: Vec<bool>,
    filled_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TilemapError {
    #[error("tilemap must have at least one column and one row, got {columns}x{rows}")]
    EmptyGrid { columns: u32, rows: u32 },
    #[error("tile size must be positive and finite, got {tile_size}")]
    InvalidTileSize { tile_size: f32 },
    #[error("filled tile index {index} is outside 0..{tile_count}")]
    IndexOutOfRange { index: usize, tile_count: usize },
    #[error("filled tile index {index} listed more than once")]
    DuplicateIndex { index: usize },
}

impl Tilemap {
    pub fn new(columns: u32, rows: u32, tile_size: f32) -> Result<Self, TilemapError> {
        if columns == 0 || rows == 0 {
            return Err(TilemapError::EmptyGrid { columns, rows });
        }
        if !tile_size.is_finite() || tile_size <= 0.0 {
            return Err(TilemapError::InvalidTileSize { tile_size });
        }
        let tile_count = columns as usize * rows as usize;
        Ok(Self {
            columns,
            rows,
            tile_size,
            filled: vec![false; tile_count],
            filled_count: 0,
        })
    }

    pub fn with_filled_tiles(
        columns: u32,
        rows: u32,
        tile_size: f32,
        filled_indices: impl IntoIterator<Item = usize>,
    ) -> Result<Self, TilemapError> {
        let mut tilemap = Self::new(columns, rows, tile_size)?;
        let tile_count = tilemap.tile_count();
        for index in filled_indices {
            let Some(slot) = tilemap.filled.get_mut(index) else {
                return Err(TilemapError::IndexOutOfRange { index, tile_count });
            };
            if *slot {
                return Err(TilemapError::DuplicateIndex { index });
            }
            *slot = true;
            tilemap.filled_count += 1;
        }
        Ok(tilemap)
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    pub fn tile_count(&self) -> usize {
        self.filled.len()
    }

    pub fn filled_count(&self) -> usize {
        self.filled_count
    }

    pub fn world_size(&self) -> Vec2 {
        Vec2 {
            x: self.columns as f32 * self.tile_size,
            y: self.rows as f32 * self.tile_size,
        }
    }

    pub fn index_of(&self, column: u32, row: u32) -> Option<usize> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        Some(row as usize * self.columns as usize + column as usize)
    }

    pub fn is_filled(&self, column: u32, row: u32) -> bool {
        self.index_of(column, row)
            .map(|index| self.filled[index])
            .unwrap_or(false)
    }

    pub fn filled_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.filled
            .iter()
            .enumerate()
            .filter_map(|(index, filled)| filled.then_some(index))
    }

    pub fn tile_rect(&self, column: u32, row: u32) -> Option<Rect> {
        self.index_of(column, row)?;
        Some(Rect::new(
            column as f32 * self.tile_size,
            row as f32 * self.tile_size,
            self.tile_size,
            self.tile_size,
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderableDesc {
    pub fill: [u8; 4],
    pub outline: Option<[u8; 4]>,
    pub debug_name: &'static str,
}

#[derive(Debug, Clone)]
pub struct Entity {
    pub id: EntityId,
    pub rect: Rect,
    pub renderable: RenderableDesc,
}

#[derive(Debug, Default)]
pub struct SceneWorld {
    tilemap: Option<Tilemap>,
    camera: Camera2D,
    entities: Vec<Entity>,
    next_entity_id: u64,
}

impl SceneWorld {
    pub fn spawn(&mut self, rect: Rect, renderable: RenderableDesc) -> EntityId {
        let id = EntityId(self.next_entity_id);
        self.next_entity_id = self.next_entity_id.saturating_add(1);
        self.entities.push(Entity {
            id,
            rect,
            renderable,
        });
        id
    }

    pub fn find_entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|entity| entity.id == id)
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn set_tilemap(&mut self, tilemap: Tilemap) {
        self.tilemap = Some(tilemap);
    }

    pub fn tilemap(&self) -> Option<&Tilemap> {
        self.tilemap.as_ref()
    }

    pub fn camera(&self) -> &Camera2D {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera2D {
        &mut self.camera
    }

    /// World extent in units, or zero when no tilemap is installed.
    pub fn world_size(&self) -> Vec2 {
        self.tilemap
            .as_ref()
            .map(Tilemap::world_size)
            .unwrap_or(Vec2::ZERO)
    }

    pub fn clear(&mut self) {
        self.entities.clear();
        self.tilemap = None;
        self.camera = Camera2D::default();
    }
}

pub trait Scene {
    fn load(&mut self, world: &mut SceneWorld);
    fn update(&mut self, frame_dt_seconds: f32, input: &InputSnapshot, world: &mut SceneWorld);
    fn unload(&mut self, world: &mut SceneWorld);
    fn debug_title(&self, _world: &SceneWorld) -> Option<String> {
        None
    }
}
