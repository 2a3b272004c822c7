use std::sync::Arc;

use pixels::{Error, Pixels, SurfaceTexture};
use winit::dpi::PhysicalSize;
use winit::window::Window;

use crate::app::{Rect, SceneWorld, Tilemap, Vec2};

use super::{world_to_screen_px, Viewport};

const BACKGROUND_COLOR: [u8; 4] = [255, 255, 255, 255];
const FILLED_TILE_COLOR: [u8; 4] = [105, 105, 105, 255];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TileRectInclusive {
    x_min: u32,
    x_max: u32,
    y_min: u32,
    y_max: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScreenRectPx {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

/// Software renderer over a `pixels` frame buffer sized to the logical window
/// size, so one world unit maps to one logical pixel.
pub struct Renderer {
    window: Arc<Window>,
    pixels: Pixels<'static>,
    viewport: Viewport,
}

impl Renderer {
    pub fn new(window: Arc<Window>) -> Result<Self, Error> {
        let size = window.inner_size();
        let viewport = logical_viewport(size, window.scale_factor());
        let pixels = Self::build_pixels(Arc::clone(&window), size, viewport)?;
        Ok(Self {
            window,
            pixels,
            viewport,
        })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), Error> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        let size = PhysicalSize::new(width, height);
        let viewport = logical_viewport(size, self.window.scale_factor());
        self.pixels = Self::build_pixels(Arc::clone(&self.window), size, viewport)?;
        self.viewport = viewport;
        Ok(())
    }

    fn build_pixels(
        window: Arc<Window>,
        size: PhysicalSize<u32>,
        viewport: Viewport,
    ) -> Result<Pixels<'static>, Error> {
        let surface = SurfaceTexture::new(size.width, size.height, window);
        Pixels::new(viewport.width, viewport.height, surface)
    }

    pub(crate) fn render_world(&mut self, world: &SceneWorld) -> Result<(), Error> {
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Ok(());
        }
        draw_scene(self.pixels.frame_mut(), self.viewport, world);
        self.pixels.render()
    }
}

fn logical_viewport(size: PhysicalSize<u32>, scale_factor: f64) -> Viewport {
    let logical = size.to_logical::<u32>(scale_factor);
    Viewport {
        width: logical.width.max(1),
        height: logical.height.max(1),
    }
}

fn draw_scene(frame: &mut [u8], viewport: Viewport, world: &SceneWorld) {
    for chunk in frame.chunks_exact_mut(4) {
        chunk.copy_from_slice(&BACKGROUND_COLOR);
    }

    let scroll_offset = viewport.scroll_offset(world.camera().focus, world.world_size());
    if let Some(tilemap) = world.tilemap() {
        draw_tilemap(frame, viewport, tilemap, scroll_offset);
    }

    for entity in world.entities() {
        let Some(rect) = screen_rect_for(entity.rect, scroll_offset, viewport) else {
            continue;
        };
        fill_rect(frame, viewport, rect, entity.renderable.fill);
        if let Some(outline) = entity.renderable.outline {
            draw_rect_outline(frame, viewport, rect, outline);
        }
    }
}

fn draw_tilemap(frame: &mut [u8], viewport: Viewport, tilemap: &Tilemap, scroll_offset: Vec2) {
    let Some(visible) = visible_tile_rect(tilemap, scroll_offset, viewport) else {
        return;
    };

    for row in visible.y_min..=visible.y_max {
        for column in visible.x_min..=visible.x_max {
            if !tilemap.is_filled(column, row) {
                continue;
            }
            let Some(tile) = tilemap.tile_rect(column, row) else {
                continue;
            };
            if let Some(rect) = screen_rect_for(tile, scroll_offset, viewport) {
                fill_rect(frame, viewport, rect, FILLED_TILE_COLOR);
            }
        }
    }
}

fn visible_tile_rect(
    tilemap: &Tilemap,
    scroll_offset: Vec2,
    viewport: Viewport,
) -> Option<TileRectInclusive> {
    let tile_size = tilemap.tile_size();
    let raw_x_min = (scroll_offset.x / tile_size).floor() as i64;
    let raw_x_max = ((scroll_offset.x + viewport.width as f32) / tile_size).ceil() as i64 - 1;
    let raw_y_min = (scroll_offset.y / tile_size).floor() as i64;
    let raw_y_max = ((scroll_offset.y + viewport.height as f32) / tile_size).ceil() as i64 - 1;

    let x_min = raw_x_min.max(0);
    let x_max = raw_x_max.min(tilemap.columns() as i64 - 1);
    let y_min = raw_y_min.max(0);
    let y_max = raw_y_max.min(tilemap.rows() as i64 - 1);

    if x_min > x_max || y_min > y_max {
        return None;
    }

    Some(TileRectInclusive {
        x_min: x_min as u32,
        x_max: x_max as u32,
        y_min: y_min as u32,
        y_max: y_max as u32,
    })
}

/// Projects a world rect to half-open screen pixels, clipped to the viewport.
/// Edges are floored independently so adjacent tiles never leave a seam.
fn screen_rect_for(rect: Rect, scroll_offset: Vec2, viewport: Viewport) -> Option<ScreenRectPx> {
    let (left, top) = world_to_screen_px(rect.position, scroll_offset);
    let (right, bottom) = world_to_screen_px(
        Vec2 {
            x: rect.right(),
            y: rect.bottom(),
        },
        scroll_offset,
    );
    let left = left.max(0);
    let top = top.max(0);
    let right = right.min(viewport.width as i32);
    let bottom = bottom.min(viewport.height as i32);

    if left >= right || top >= bottom {
        return None;
    }
    Some(ScreenRectPx {
        left,
        top,
        right,
        bottom,
    })
}

fn fill_rect(frame: &mut [u8], viewport: Viewport, rect: ScreenRectPx, color: [u8; 4]) {
    for y in rect.top..rect.bottom {
        for x in rect.left..rect.right {
            write_pixel_rgba_clipped(frame, viewport.width as usize, x, y, color);
        }
    }
}

fn draw_rect_outline(frame: &mut [u8], viewport: Viewport, rect: ScreenRectPx, color: [u8; 4]) {
    let width = viewport.width as usize;
    let right = rect.right - 1;
    let bottom = rect.bottom - 1;
    for x in rect.left..rect.right {
        write_pixel_rgba_clipped(frame, width, x, rect.top, color);
        write_pixel_rgba_clipped(frame, width, x, bottom, color);
    }
    for y in rect.top..rect.bottom {
        write_pixel_rgba_clipped(frame, width, rect.left, y, color);
        write_pixel_rgba_clipped(frame, width, right, y, color);
    }
}

fn write_pixel_rgba_clipped(frame: &mut [u8], width: usize, x: i32, y: i32, color: [u8; 4]) {
    if x < 0 || y < 0 || x as usize >= width {
        return;
    }
    let x = x as usize;
    let y = y as usize;
    let Some(pixel_offset) = y.checked_mul(width).and_then(|row| row.checked_add(x)) else {
        return;
    };
    let Some(byte_offset) = pixel_offset.checked_mul(4) else {
        return;
    };
    let Some(end) = byte_offset.checked_add(4) else {
        return;
    };
    if end > frame.len() {
        return;
    }
    frame[byte_offset..end].copy_from_slice(&color);
}
