//! Menu pane hot-zones: the ten tool icons and the 2x8 colour swatches.
//!
//! Zone rectangles are in window coordinates and are rebuilt from the
//! window size by [`HitZoneRegistry::layout`]; hover and selected flags
//! survive a relayout.

use crate::grid::Grid;
use crate::palette::HUES;

/// Width of the menu pane on the right edge of the window.
pub const MENU_WIDTH: u32 = 130;
pub const ICON_COUNT: usize = 10;

const MENU_MARGIN_X: i32 = 30;
const ICON_TOP: i32 = 20;
const SWATCH_BOTTOM_GAP: i32 = 20;

/// Left edge of the menu pane. It overlaps the canvas viewport by one pixel.
pub fn menu_origin_x(window_width: u32) -> i32 {
    window_width as i32 - (MENU_WIDTH as i32 - 1)
}

/// Width of the canvas viewport left of the menu pane.
pub fn canvas_width(window_width: u32) -> u32 {
    window_width.saturating_sub(MENU_WIDTH)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconAction {
    ZoomIn,
    ZoomOut,
    GridOn,
    GridOff,
    Reserved,
    InkMode,
    PaperMode,
}

impl IconAction {
    pub fn for_icon(index: usize) -> Self {
        match index {
            0 => IconAction::ZoomIn,
            1 => IconAction::ZoomOut,
            2 => IconAction::GridOn,
            3 => IconAction::GridOff,
            8 => IconAction::InkMode,
            9 => IconAction::PaperMode,
            _ => IconAction::Reserved,
        }
    }
}

pub const INK_MODE_ICON: usize = 8;
pub const PAPER_MODE_ICON: usize = 9;

/// Inclusive rectangle in window coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZoneRect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl ZoneRect {
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.x1 <= x && x <= self.x2 && self.y1 <= y && y <= self.y2
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitZone {
    pub rect: ZoneRect,
    pub hover: bool,
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneId {
    Icon(usize),
    Swatch { bright: bool, hue: u8 },
}

#[derive(Debug, Clone)]
pub struct HitZoneRegistry {
    icons: Vec<HitZone>,
    swatches: Grid<HitZone>, // (hue, bright row)
}

impl HitZoneRegistry {
    pub fn new() -> Self {
        let mut icons = vec![HitZone::default(); ICON_COUNT];
        icons[INK_MODE_ICON].selected = true;
        Self {
            icons,
            swatches: Grid::new(HUES, 2, HitZone::default()),
        }
    }

    /// Recomputes every rectangle for the given window size.
    pub fn layout(&mut self, window_width: u32, window_height: u32, block_size: u32) {
        let origin = menu_origin_x(window_width);
        let block = block_size as i32;

        for (index, zone) in self.icons.iter_mut().enumerate() {
            let i = index as i32;
            let (x1, y1) = if index % 2 == 0 {
                (origin + MENU_MARGIN_X, i * block + ICON_TOP)
            } else {
                (origin + MENU_MARGIN_X + block + 1, i * block + ICON_TOP - block)
            };
            zone.rect = ZoneRect {
                x1,
                y1,
                x2: x1 + block,
                y2: y1 + block,
            };
        }

        let stack_top = window_height as i32 - block * HUES as i32 - SWATCH_BOTTOM_GAP;
        for (hue, row, zone) in self.swatches.iter_mut() {
            let (hue, row) = (hue as i32, row as i32);
            let x1 = origin + MENU_MARGIN_X + row + row * block;
            let y1 = stack_top + hue * block + swatch_offset(hue as u8);
            zone.rect = ZoneRect {
                x1,
                y1,
                x2: x1 + block,
                y2: y1 + block,
            };
        }
    }

    /// First zone containing the point: icons in order, then swatches.
    pub fn hit_test(&self, x: i32, y: i32) -> Option<ZoneId> {
        if let Some(index) = self.icons.iter().position(|z| z.rect.contains(x, y)) {
            return Some(ZoneId::Icon(index));
        }
        self.swatches
            .iter()
            .find(|(_, _, z)| z.rect.contains(x, y))
            .map(|(hue, row, _)| ZoneId::Swatch {
                bright: row == 1,
                hue: hue as u8,
            })
    }

    /// Marks the zone under the point as hovered and clears every other.
    pub fn update_hover(&mut self, x: i32, y: i32) -> Option<ZoneId> {
        let hit = self.hit_test(x, y);
        for (index, zone) in self.icons.iter_mut().enumerate() {
            zone.hover = hit == Some(ZoneId::Icon(index));
        }
        for (hue, row, zone) in self.swatches.iter_mut() {
            zone.hover = hit
                == Some(ZoneId::Swatch {
                    bright: row == 1,
                    hue: hue as u8,
                });
        }
        hit
    }

    pub fn set_hover(&mut self, id: ZoneId, hover: bool) {
        if let Some(zone) = self.zone_mut(id) {
            zone.hover = hover;
        }
    }

    pub fn set_selected(&mut self, id: ZoneId, selected: bool) {
        if let Some(zone) = self.zone_mut(id) {
            zone.selected = selected;
        }
    }

    pub fn zone(&self, id: ZoneId) -> Option<&HitZone> {
        match id {
            ZoneId::Icon(index) => self.icons.get(index),
            ZoneId::Swatch { bright, hue } => self.swatches.get(hue as usize, bright as usize),
        }
    }

    fn zone_mut(&mut self, id: ZoneId) -> Option<&mut HitZone> {
        match id {
            ZoneId::Icon(index) => self.icons.get_mut(index),
            ZoneId::Swatch { bright, hue } => self.swatches.get_mut(hue as usize, bright as usize),
        }
    }

    pub fn icons(&self) -> &[HitZone] {
        &self.icons
    }

    pub fn icon(&self, index: usize) -> Option<&HitZone> {
        self.icons.get(index)
    }

    /// Swatch zones as `(bright, hue, zone)`.
    pub fn swatches(&self) -> impl Iterator<Item = (bool, u8, &HitZone)> {
        self.swatches
            .iter()
            .map(|(hue, row, zone)| (row == 1, hue as u8, zone))
    }

    pub fn swatch_ids(&self) -> Vec<ZoneId> {
        self.swatches()
            .map(|(bright, hue, _)| ZoneId::Swatch { bright, hue })
            .collect()
    }
}

impl Default for HitZoneRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Swatches after the first sit one pixel lower so neighbours show a gap.
pub fn swatch_offset(hue: u8) -> i32 {
    if hue == 0 {
        0
    } else {
        1
    }
}
