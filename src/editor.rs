use crate::canvas::Canvas;
use crate::config::{EditorConfig, MAX_PIXEL_SIZE};
use crate::icons::IconSet;
use crate::menu::{canvas_width, menu_origin_x, HitZoneRegistry, MENU_WIDTH};
use crate::surface::Rect;

const MIN_ZOOM_OUT: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintMode {
    Ink,
    Paper,
}

/// The current pen applied by canvas edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedColors {
    pub ink: u8,
    pub paper: u8,
    pub bright: bool,
}

impl Default for SelectedColors {
    fn default() -> Self {
        Self {
            ink: 0,
            paper: 2,
            bright: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MouseState {
    pub x: i32,
    pub y: i32,
    pub clicked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub pixel_size: u32,
    pub show_grid: bool,
}

impl ViewState {
    pub fn zoom_in(&mut self) {
        if self.pixel_size < MAX_PIXEL_SIZE {
            self.pixel_size += 1;
        }
    }

    pub fn zoom_out(&mut self) {
        if self.pixel_size > MIN_ZOOM_OUT {
            self.pixel_size -= 1;
        }
    }
}

/// Window split into the canvas viewport and the menu pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub window_width: u32,
    pub window_height: u32,
    pub main_grid: Rect,
    pub main_menu: Rect,
}

impl ScreenLayout {
    pub fn new(window_width: u32, window_height: u32) -> Self {
        Self {
            window_width,
            window_height,
            main_grid: Rect::new(0, 0, canvas_width(window_width), window_height),
            main_menu: Rect::new(menu_origin_x(window_width), 0, MENU_WIDTH, window_height),
        }
    }
}

/// Everything the event loop mutates and the renderer draws.
#[derive(Debug, Clone)]
pub struct EditorState {
    pub canvas: Canvas,
    pub view: ViewState,
    pub mode: PaintMode,
    pub selected: SelectedColors,
    pub zones: HitZoneRegistry,
    pub mouse: MouseState,
    pub layout: ScreenLayout,
    pub icons: IconSet,
    config: EditorConfig,
}

impl EditorState {
    pub fn new(config: EditorConfig) -> Self {
        let mut editor = Self {
            canvas: Canvas::new(),
            view: ViewState {
                pixel_size: config.pixel_size,
                show_grid: false,
            },
            mode: PaintMode::Ink,
            selected: SelectedColors::default(),
            zones: HitZoneRegistry::new(),
            mouse: MouseState::default(),
            layout: ScreenLayout::new(config.window_width, config.window_height),
            icons: IconSet::default(),
            config,
        };
        editor.reset();
        editor
    }

    /// Back to a blank canvas with default pen, zoom and menu state. Icons
    /// are decoded again.
    pub fn reset(&mut self) {
        self.canvas.reset();
        self.view = ViewState {
            pixel_size: self.config.pixel_size,
            show_grid: false,
        };
        self.mode = PaintMode::Ink;
        self.selected = SelectedColors::default();
        self.zones = HitZoneRegistry::new();
        self.mouse = MouseState::default();
        self.icons = IconSet::load();
        self.relayout();
    }

    pub fn resize(&mut self, window_width: u32, window_height: u32) {
        self.layout = ScreenLayout::new(window_width, window_height);
        self.zones
            .layout(window_width, window_height, self.config.block_size);
    }

    pub fn block_size(&self) -> u32 {
        self.config.block_size
    }

    fn relayout(&mut self) {
        let (width, height) = (self.layout.window_width, self.layout.window_height);
        self.resize(width, height);
    }
}
