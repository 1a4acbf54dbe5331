//! The 256x192 pixel bitmap and its 32x24 colour-attribute grid.
//!
//! Every 8x8 block of pixels shares one [`Attribute`]: set pixels draw in
//! the cell's ink colour, clear pixels in its paper colour, both taken from
//! the bright or normal palette row.

use crate::grid::Grid;

pub const SCREEN_WIDTH: usize = 256;
pub const SCREEN_HEIGHT: usize = 192;
pub const ATTRIBUTE_SIZE: usize = 8;
pub const ATTRIBUTE_COLS: usize = SCREEN_WIDTH / ATTRIBUTE_SIZE;
pub const ATTRIBUTE_ROWS: usize = SCREEN_HEIGHT / ATTRIBUTE_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute {
    pub ink: u8,
    pub paper: u8,
    pub bright: bool,
}

impl Default for Attribute {
    fn default() -> Self {
        Self {
            ink: 0,
            paper: 7,
            bright: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Ink,
    Paper,
}

/// A pixel position known to lie inside the 256x192 screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelCoord {
    x: usize,
    y: usize,
}

impl PixelCoord {
    pub fn new(x: usize, y: usize) -> Option<Self> {
        if x < SCREEN_WIDTH && y < SCREEN_HEIGHT {
            Some(Self { x, y })
        } else {
            None
        }
    }

    /// Maps a pointer position at the given zoom to the pixel under it.
    pub fn from_pointer(screen_x: u32, screen_y: u32, pixel_size: u32) -> Option<Self> {
        let pixel_size = pixel_size.max(1);
        Self::new(
            (screen_x / pixel_size) as usize,
            (screen_y / pixel_size) as usize,
        )
    }

    pub fn x(self) -> usize {
        self.x
    }

    pub fn y(self) -> usize {
        self.y
    }

    /// The attribute cell this pixel belongs to.
    pub fn cell(self) -> CellCoord {
        CellCoord {
            col: self.x / ATTRIBUTE_SIZE,
            row: self.y / ATTRIBUTE_SIZE,
        }
    }
}

/// An attribute cell position known to lie inside the 32x24 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellCoord {
    col: usize,
    row: usize,
}

impl CellCoord {
    pub fn new(col: usize, row: usize) -> Option<Self> {
        if col < ATTRIBUTE_COLS && row < ATTRIBUTE_ROWS {
            Some(Self { col, row })
        } else {
            None
        }
    }

    pub fn col(self) -> usize {
        self.col
    }

    pub fn row(self) -> usize {
        self.row
    }
}

#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: Grid<bool>,
    attributes: Grid<Attribute>,
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            pixels: Grid::new(SCREEN_WIDTH, SCREEN_HEIGHT, false),
            attributes: Grid::new(ATTRIBUTE_COLS, ATTRIBUTE_ROWS, Attribute::default()),
        }
    }

    pub fn reset(&mut self) {
        self.pixels.fill(false);
        self.attributes.fill(Attribute::default());
    }

    /// Sets the pixel. Already-set pixels stay set.
    pub fn set_pixel(&mut self, pixel: PixelCoord) {
        self.pixels[(pixel.x, pixel.y)] = true;
    }

    pub fn pixel(&self, pixel: PixelCoord) -> bool {
        self.pixels[(pixel.x, pixel.y)]
    }

    /// Overwrites one colour channel of a cell, leaving the other channel
    /// and the bright flag untouched.
    pub fn paint_attribute(&mut self, cell: CellCoord, channel: Channel, value: u8) {
        let attribute = &mut self.attributes[(cell.col, cell.row)];
        match channel {
            Channel::Ink => attribute.ink = value,
            Channel::Paper => attribute.paper = value,
        }
    }

    pub fn set_bright(&mut self, cell: CellCoord, bright: bool) {
        self.attributes[(cell.col, cell.row)].bright = bright;
    }

    pub fn attribute(&self, cell: CellCoord) -> Attribute {
        self.attributes[(cell.col, cell.row)]
    }

    pub fn attributes(&self) -> &Grid<Attribute> {
        &self.attributes
    }

    pub fn pixels(&self) -> &Grid<bool> {
        &self.pixels
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}
