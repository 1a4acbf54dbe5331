//! The ten menu icons, stored as 16x16 XPM text and decoded at reset.

use crate::menu::ICON_COUNT;
use crate::surface::Bitmap;
use crate::xpm;

const ZOOM_IN: &[&str] = &[
    "16 16 3 1",
    ". c None",
    "# c #000000",
    "o c #808080",
    "................",
    "....#####.......",
    "...#.....#......",
    "..#...#...#.....",
    ".#....#....#....",
    ".#....#....#....",
    ".#..#####..#....",
    ".#....#....#....",
    ".#....#....#....",
    "..#...#...#.....",
    "...#.....#......",
    "....######......",
    "..........##....",
    "...........##...",
    "............##..",
    "................",
];

const ZOOM_OUT: &[&str] = &[
    "16 16 3 1",
    ". c None",
    "# c #000000",
    "o c #808080",
    "................",
    "....#####.......",
    "...#.....#......",
    "..#.......#.....",
    ".#.........#....",
    ".#.........#....",
    ".#..#####..#....",
    ".#.........#....",
    ".#.........#....",
    "..#.......#.....",
    "...#.....#......",
    "....######......",
    "..........##....",
    "...........##...",
    "............##..",
    "................",
];

const GRID_ON: &[&str] = &[
    "16 16 3 1",
    ". c None",
    "# c #000000",
    "o c #808080",
    "................",
    ".##############.",
    ".#...#....#...#.",
    ".#...#....#...#.",
    ".#...#....#...#.",
    ".#...#....#...#.",
    ".##############.",
    ".#...#....#...#.",
    ".#...#....#...#.",
    ".#...#....#...#.",
    ".##############.",
    ".#...#....#...#.",
    ".#...#....#...#.",
    ".#...#....#...#.",
    ".##############.",
    "................",
];

const GRID_OFF: &[&str] = &[
    "16 16 3 1",
    ". c None",
    "# c #000000",
    "o c #808080",
    "................",
    ".oooooooooooooo.",
    ".o............o.",
    ".o............o.",
    ".o............o.",
    ".o............o.",
    ".o............o.",
    ".o............o.",
    ".o............o.",
    ".o............o.",
    ".o............o.",
    ".o............o.",
    ".o............o.",
    ".o............o.",
    ".oooooooooooooo.",
    "................",
];

const RESERVED: &[&str] = &[
    "16 16 3 1",
    ". c None",
    "# c #000000",
    "o c #808080",
    "................",
    "................",
    "................",
    "................",
    "................",
    "................",
    "................",
    ".......oo.......",
    ".......oo.......",
    "................",
    "................",
    "................",
    "................",
    "................",
    "................",
    "................",
];

const INK: &[&str] = &[
    "16 16 3 1",
    ". c None",
    "# c #000000",
    "o c #808080",
    "................",
    "...........##...",
    "..........#..#..",
    ".........#..#...",
    "........#..#....",
    ".......#..#.....",
    "......#..#......",
    ".....#..#.......",
    "....#..#........",
    "...#..#.........",
    "..###.#.........",
    "..####..........",
    "..###...........",
    "..#.............",
    "................",
    "................",
];

const PAPER: &[&str] = &[
    "16 16 3 1",
    ". c None",
    "# c #000000",
    "o c #808080",
    "................",
    "..#########.....",
    "..#.......##....",
    "..#.......#o#...",
    "..#.......####..",
    "..#..........#..",
    "..#..........#..",
    "..#..........#..",
    "..#..........#..",
    "..#..........#..",
    "..#..........#..",
    "..#..........#..",
    "..#..........#..",
    "..############..",
    "................",
    "................",
];

/// Icon sources in menu order. Slots 4-7 are reserved.
const ICON_SOURCES: [&[&str]; ICON_COUNT] = [
    ZOOM_IN, ZOOM_OUT, GRID_ON, GRID_OFF, RESERVED, RESERVED, RESERVED, RESERVED, INK, PAPER,
];

#[derive(Debug, Clone, Default)]
pub struct IconSet {
    bitmaps: Vec<Option<Bitmap>>,
}

impl IconSet {
    /// Decodes every icon. An icon that fails to decode is logged and left
    /// empty; the menu still reserves its slot.
    pub fn load() -> Self {
        let bitmaps = ICON_SOURCES
            .iter()
            .enumerate()
            .map(|(index, source)| match xpm::decode(source) {
                Ok(bitmap) => Some(bitmap),
                Err(err) => {
                    log::warn!("Unable to load icon {}: {}", index, err);
                    None
                }
            })
            .collect();
        Self { bitmaps }
    }

    pub fn get(&self, index: usize) -> Option<&Bitmap> {
        self.bitmaps.get(index).and_then(Option::as_ref)
    }

    pub fn len(&self) -> usize {
        self.bitmaps.len()
    }
}
