//! Drawing surface used by the renderer, plus an RGBA frame buffer
//! implementation backing the `pixels` texture.
//!
//! All drawing is relative to the current viewport origin and clipped to
//! the viewport and the frame.

pub type Rgba = [u8; 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= x || bottom <= y {
            None
        } else {
            Some(Rect::new(x, y, (right - x) as u32, (bottom - y) as u32))
        }
    }
}

/// RGBA image ready to blit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Bitmap {
    pub fn new(width: u32, height: u32, pixels: Vec<Rgba>) -> Self {
        debug_assert_eq!(pixels.len(), (width * height) as usize);
        Self { width, height, pixels }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        self.pixels[(y * self.width + x) as usize]
    }
}

pub trait Surface {
    /// Moves the drawing origin and clip area. Coordinates are absolute.
    fn set_viewport(&mut self, viewport: Rect);

    /// Fills the whole surface, ignoring the viewport.
    fn clear(&mut self, color: Rgba);

    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    /// One-pixel outline along the inside edge of `rect`.
    fn draw_rect(&mut self, rect: Rect, color: Rgba);

    /// Draws `bitmap` scaled to `dest`, skipping transparent pixels.
    fn blit(&mut self, bitmap: &Bitmap, dest: Rect);
}

/// [`Surface`] over a row-major RGBA8 frame.
pub struct FrameSurface<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
    viewport: Rect,
}

impl<'a> FrameSurface<'a> {
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Self {
        Self {
            frame,
            width,
            height,
            viewport: Rect::new(0, 0, width, height),
        }
    }

    /// Absolute clip rectangle for a viewport-relative `rect`.
    fn clip(&self, rect: Rect) -> Option<Rect> {
        let absolute = Rect::new(
            rect.x + self.viewport.x,
            rect.y + self.viewport.y,
            rect.width,
            rect.height,
        );
        absolute
            .intersect(&self.viewport)?
            .intersect(&Rect::new(0, 0, self.width, self.height))
    }

    fn blend(&mut self, x: i32, y: i32, color: Rgba) {
        let index = ((y as u32 * self.width + x as u32) * 4) as usize;
        if let Some(dst) = self.frame.get_mut(index..index + 4) {
            match color[3] {
                0 => {}
                255 => dst.copy_from_slice(&color),
                alpha => {
                    let a = alpha as u16;
                    for channel in 0..3 {
                        let src = color[channel] as u16;
                        let old = dst[channel] as u16;
                        dst[channel] = ((src * a + old * (255 - a)) / 255) as u8;
                    }
                    dst[3] = 255;
                }
            }
        }
    }

    fn fill_absolute(&mut self, rect: Rect, color: Rgba) {
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                self.blend(x, y, color);
            }
        }
    }
}

impl Surface for FrameSurface<'_> {
    fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    fn clear(&mut self, color: Rgba) {
        for pixel in self.frame.chunks_exact_mut(4) {
            pixel.copy_from_slice(&color);
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        if let Some(clipped) = self.clip(rect) {
            self.fill_absolute(clipped, color);
        }
    }

    fn draw_rect(&mut self, rect: Rect, color: Rgba) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        self.fill_rect(Rect::new(rect.x, rect.y, rect.width, 1), color);
        if rect.height > 1 {
            self.fill_rect(Rect::new(rect.x, rect.bottom() - 1, rect.width, 1), color);
        }
        if rect.height > 2 {
            let side = rect.height - 2;
            self.fill_rect(Rect::new(rect.x, rect.y + 1, 1, side), color);
            if rect.width > 1 {
                self.fill_rect(Rect::new(rect.right() - 1, rect.y + 1, 1, side), color);
            }
        }
    }

    fn blit(&mut self, bitmap: &Bitmap, dest: Rect) {
        if bitmap.width() == 0 || bitmap.height() == 0 {
            return;
        }
        let Some(clipped) = self.clip(dest) else {
            return;
        };
        let origin_x = dest.x + self.viewport.x;
        let origin_y = dest.y + self.viewport.y;
        for y in clipped.y..clipped.bottom() {
            let src_y = ((y - origin_y) as u32 * bitmap.height()) / dest.height;
            for x in clipped.x..clipped.right() {
                let src_x = ((x - origin_x) as u32 * bitmap.width()) / dest.width;
                self.blend(x, y, bitmap.pixel(src_x, src_y));
            }
        }
    }
}
