//! Spectrum-style palette: eight hues in a normal and a bright row.
//!
//! Index a colour with `[bright as usize][hue]`. Black is the same in both
//! rows; the normal row uses a reduced intensity of 215.

/// Number of hues per brightness row.
pub const HUES: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

pub const PALETTE: [[Rgb; HUES]; 2] = [
    [
        Rgb::new(0, 0, 0),       // black
        Rgb::new(0, 0, 215),     // blue
        Rgb::new(215, 0, 0),     // red
        Rgb::new(215, 0, 215),   // magenta
        Rgb::new(0, 215, 0),     // green
        Rgb::new(0, 215, 215),   // cyan
        Rgb::new(215, 215, 0),   // yellow
        Rgb::new(215, 215, 215), // white
    ],
    [
        Rgb::new(0, 0, 0),
        Rgb::new(0, 0, 255),
        Rgb::new(255, 0, 0),
        Rgb::new(255, 0, 255),
        Rgb::new(0, 255, 0),
        Rgb::new(0, 255, 255),
        Rgb::new(255, 255, 0),
        Rgb::new(255, 255, 255),
    ],
];

/// Looks up a hue in the given brightness row. Hues wrap into 0..8.
pub fn color(bright: bool, hue: u8) -> Rgb {
    PALETTE[bright as usize][hue as usize % HUES]
}
