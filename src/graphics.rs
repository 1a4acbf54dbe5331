use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::editor::EditorState;
use crate::error::{FrameError, PlatformError};
use crate::renderer;
use crate::surface::FrameSurface;

/// Owns the `pixels` surface. The frame buffer always matches the window's
/// physical size so one buffer pixel is one screen pixel.
pub struct GraphicsRenderer {
    pixels: Pixels,
    width: u32,
    height: u32,
}

impl GraphicsRenderer {
    pub fn new(window: &Window) -> Result<Self, PlatformError> {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, window);
        let pixels = Pixels::new(window_size.width, window_size.height, surface_texture)?;

        Ok(Self {
            pixels,
            width: window_size.width,
            height: window_size.height,
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), FrameError> {
        if width == 0 || height == 0 {
            // Minimised; keep the old buffer until the window comes back.
            return Ok(());
        }
        self.pixels.resize_surface(width, height)?;
        self.pixels.resize_buffer(width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Redraws the whole scene and presents it.
    pub fn draw(&mut self, editor: &EditorState) -> Result<(), FrameError> {
        let mut surface = FrameSurface::new(self.pixels.frame_mut(), self.width, self.height);
        renderer::draw_scene(&mut surface, editor);
        self.pixels.render()?;
        Ok(())
    }
}
