//! Draws the whole scene from [`EditorState`] every frame: canvas first,
//! then the menu pane on top.

use crate::canvas::{PixelCoord, ATTRIBUTE_SIZE};
use crate::editor::EditorState;
use crate::menu::{swatch_offset, HitZone, ZoneRect, INK_MODE_ICON, PAPER_MODE_ICON};
use crate::palette;
use crate::surface::{Rect, Rgba, Surface};

const BACKGROUND: Rgba = [255, 255, 255, 255];
const CELL_OUTLINE: Rgba = [20, 20, 20, 255];
const GRID_MINOR: Rgba = [0, 0, 0, 15];
const GRID_MAJOR: Rgba = [0, 0, 0, 30];
const MENU_PANE: Rgba = [220, 220, 220, 255];
const HIGHLIGHT: Rgba = [0, 0, 0, 255];
const ICON_BACKING: Rgba = [255, 255, 255, 255];

/// Grid lines are only legible from this zoom upwards.
pub const MIN_GRID_ZOOM: u32 = 4;

const PREVIEW_HEIGHT: u32 = 5;

pub fn draw_scene<S: Surface>(surface: &mut S, editor: &EditorState) {
    surface.set_viewport(Rect::new(0, 0, editor.layout.window_width, editor.layout.window_height));
    surface.clear(BACKGROUND);

    surface.set_viewport(editor.layout.main_grid);
    draw_screen(surface, editor);
    draw_grid(surface, editor);

    surface.set_viewport(editor.layout.main_menu);
    draw_menu_pane(surface, editor);
    draw_color_options(surface, editor);
    draw_icons(surface, editor);
}

fn draw_screen<S: Surface>(surface: &mut S, editor: &EditorState) {
    let pixel_size = editor.view.pixel_size;
    let cell_size = pixel_size * ATTRIBUTE_SIZE as u32;

    for (col, row, attribute) in editor.canvas.attributes().iter() {
        let cell_rect = Rect::new(
            (col as u32 * cell_size) as i32,
            (row as u32 * cell_size) as i32,
            cell_size,
            cell_size,
        );
        surface.fill_rect(cell_rect, palette::color(attribute.bright, attribute.paper).to_rgba());

        let ink = palette::color(attribute.bright, attribute.ink).to_rgba();
        for py in row * ATTRIBUTE_SIZE..(row + 1) * ATTRIBUTE_SIZE {
            for px in col * ATTRIBUTE_SIZE..(col + 1) * ATTRIBUTE_SIZE {
                let set = PixelCoord::new(px, py).map_or(false, |p| editor.canvas.pixel(p));
                if set {
                    surface.fill_rect(pixel_rect(px, py, pixel_size), ink);
                }
            }
        }

        surface.draw_rect(cell_rect, CELL_OUTLINE);
    }
}

fn draw_grid<S: Surface>(surface: &mut S, editor: &EditorState) {
    let pixel_size = editor.view.pixel_size;
    if !editor.view.show_grid || pixel_size < MIN_GRID_ZOOM {
        return;
    }

    let pixels = editor.canvas.pixels();
    for py in 0..pixels.height() {
        for px in 0..pixels.width() {
            surface.draw_rect(pixel_rect(px, py, pixel_size), GRID_MINOR);
        }
    }

    let cell_size = pixel_size * ATTRIBUTE_SIZE as u32;
    for (col, row, _) in editor.canvas.attributes().iter() {
        let rect = Rect::new(
            (col as u32 * cell_size) as i32,
            (row as u32 * cell_size) as i32,
            cell_size,
            cell_size,
        );
        surface.draw_rect(rect, GRID_MAJOR);
    }
}

fn draw_menu_pane<S: Surface>(surface: &mut S, editor: &EditorState) {
    let menu = editor.layout.main_menu;
    surface.fill_rect(Rect::new(0, 0, menu.width, menu.height), MENU_PANE);
}

fn draw_color_options<S: Surface>(surface: &mut S, editor: &EditorState) {
    let origin = editor.layout.main_menu.x;
    let block = editor.block_size();

    for (bright, hue, zone) in editor.zones.swatches() {
        let offset = swatch_offset(hue);
        let rect = Rect::new(
            zone.rect.x1 - origin,
            zone.rect.y1,
            block,
            block.saturating_sub(offset as u32),
        );
        surface.fill_rect(rect, palette::color(bright, hue).to_rgba());
        if zone.hover || zone.selected {
            surface.draw_rect(rect, HIGHLIGHT);
        }
    }

    let pen = editor.selected;
    let previews = [
        (INK_MODE_ICON, palette::color(pen.bright, pen.ink)),
        (PAPER_MODE_ICON, palette::color(pen.bright, pen.paper)),
    ];
    for (icon, color) in previews {
        if let Some(zone) = editor.zones.icon(icon) {
            let rect = Rect::new(
                zone.rect.x1 - origin + 1,
                zone.rect.y1 + block as i32 + 2,
                block.saturating_sub(2),
                PREVIEW_HEIGHT,
            );
            surface.fill_rect(rect, color.to_rgba());
        }
    }
}

fn draw_icons<S: Surface>(surface: &mut S, editor: &EditorState) {
    let origin = editor.layout.main_menu.x;
    let block = editor.block_size();

    for (index, zone) in editor.zones.icons().iter().enumerate() {
        let rect = icon_rect(zone, origin, block);
        surface.fill_rect(rect, ICON_BACKING);
        if let Some(bitmap) = editor.icons.get(index) {
            surface.blit(bitmap, rect);
        }
        if zone.hover || zone.selected {
            surface.draw_rect(rect, HIGHLIGHT);
        }
    }
}

fn pixel_rect(px: usize, py: usize, pixel_size: u32) -> Rect {
    Rect::new(
        (px as u32 * pixel_size) as i32,
        (py as u32 * pixel_size) as i32,
        pixel_size,
        pixel_size,
    )
}

fn icon_rect(zone: &HitZone, origin: i32, block: u32) -> Rect {
    let ZoneRect { x1, y1, .. } = zone.rect;
    Rect::new(x1 - origin, y1, block, block)
}
