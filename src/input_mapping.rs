//! Turns pointer events into canvas edits, view changes and menu state.
//!
//! The pointer position and button flag are read from
//! [`EditorState::mouse`], which the event source keeps current.

use rand::Rng;

use crate::canvas::{Channel, PixelCoord, SCREEN_WIDTH};
use crate::config::SwatchPick;
use crate::editor::{EditorState, PaintMode};
use crate::menu::{IconAction, ZoneId, ICON_COUNT, INK_MODE_ICON, PAPER_MODE_ICON};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PointerTarget {
    Canvas(PixelCoord),
    Menu,
    Nowhere,
}

pub struct InputMapper {
    swatch_pick: SwatchPick,
}

impl InputMapper {
    pub fn new(swatch_pick: SwatchPick) -> Self {
        Self { swatch_pick }
    }

    /// Pointer moved. Hover follows the pointer; with the button held the
    /// move also paints.
    pub fn pointer_moved(&self, editor: &mut EditorState) {
        editor.zones.update_hover(editor.mouse.x, editor.mouse.y);
        if editor.mouse.clicked {
            if let PointerTarget::Canvas(pixel) = Self::target(editor) {
                Self::paint(editor, pixel);
            }
        }
    }

    pub fn pointer_pressed<R: Rng>(&self, editor: &mut EditorState, rng: &mut R) {
        match Self::target(editor) {
            PointerTarget::Canvas(pixel) => Self::paint(editor, pixel),
            PointerTarget::Menu => self.click_menu(editor, rng),
            PointerTarget::Nowhere => {}
        }
    }

    pub fn pointer_released(&self, editor: &mut EditorState) {
        editor.zones.update_hover(editor.mouse.x, editor.mouse.y);
    }

    /// Canvas when the pointer is inside the canvas viewport and left of
    /// pixel column 256; the menu otherwise.
    fn target(editor: &EditorState) -> PointerTarget {
        let (x, y) = (editor.mouse.x, editor.mouse.y);
        if x < 0 {
            return PointerTarget::Nowhere;
        }
        let pixel_size = editor.view.pixel_size.max(1);
        let in_viewport = (x as u32) < editor.layout.main_grid.width;
        if !in_viewport || (x as u32 / pixel_size) as usize >= SCREEN_WIDTH {
            return PointerTarget::Menu;
        }
        if y < 0 {
            return PointerTarget::Nowhere;
        }
        match PixelCoord::from_pointer(x as u32, y as u32, pixel_size) {
            Some(pixel) => PointerTarget::Canvas(pixel),
            None => PointerTarget::Nowhere,
        }
    }

    fn paint(editor: &mut EditorState, pixel: PixelCoord) {
        let cell = pixel.cell();
        let pen = editor.selected;
        log::trace!(
            "Paint pixel ({}, {}) in cell ({}, {})",
            pixel.x(),
            pixel.y(),
            cell.col(),
            cell.row()
        );
        match editor.mode {
            PaintMode::Ink => {
                editor.canvas.set_pixel(pixel);
                editor.canvas.paint_attribute(cell, Channel::Ink, pen.ink);
            }
            PaintMode::Paper => {
                editor.canvas.paint_attribute(cell, Channel::Paper, pen.paper);
            }
        }
        editor.canvas.set_bright(cell, pen.bright);
    }

    fn click_menu<R: Rng>(&self, editor: &mut EditorState, rng: &mut R) {
        let (x, y) = (editor.mouse.x, editor.mouse.y);

        for index in 0..ICON_COUNT {
            let id = ZoneId::Icon(index);
            let hit = editor
                .zones
                .zone(id)
                .map_or(false, |zone| zone.rect.contains(x, y));
            editor.zones.set_selected(id, hit);
            if hit {
                Self::apply(editor, IconAction::for_icon(index));
            }
        }

        // The mode icons always show the active mode.
        let ink = editor.mode == PaintMode::Ink;
        editor.zones.set_selected(ZoneId::Icon(INK_MODE_ICON), ink);
        editor.zones.set_selected(ZoneId::Icon(PAPER_MODE_ICON), !ink);

        for id in editor.zones.swatch_ids() {
            let hit = editor
                .zones
                .zone(id)
                .map_or(false, |zone| zone.rect.contains(x, y));
            editor.zones.set_selected(id, hit);
            if hit {
                self.pick_swatch(editor, id, rng);
            }
        }
    }

    fn apply(editor: &mut EditorState, action: IconAction) {
        match action {
            IconAction::ZoomIn => {
                editor.view.zoom_in();
                log::debug!("Zoom in: pixel size {}", editor.view.pixel_size);
            }
            IconAction::ZoomOut => {
                editor.view.zoom_out();
                log::debug!("Zoom out: pixel size {}", editor.view.pixel_size);
            }
            IconAction::GridOn => editor.view.show_grid = true,
            IconAction::GridOff => editor.view.show_grid = false,
            IconAction::InkMode => editor.mode = PaintMode::Ink,
            IconAction::PaperMode => editor.mode = PaintMode::Paper,
            IconAction::Reserved => {}
        }
    }

    fn pick_swatch<R: Rng>(&self, editor: &mut EditorState, id: ZoneId, rng: &mut R) {
        let ZoneId::Swatch { bright, hue } = id else {
            return;
        };
        match self.swatch_pick {
            SwatchPick::Randomize => {
                editor.selected.ink = rng.gen_range(0..=7);
                editor.selected.paper = rng.gen_range(0..=7);
                editor.selected.bright = rng.gen_bool(0.5);
            }
            SwatchPick::Exact => {
                match editor.mode {
                    PaintMode::Ink => editor.selected.ink = hue,
                    PaintMode::Paper => editor.selected.paper = hue,
                }
                editor.selected.bright = bright;
            }
        }
        log::debug!("Selected colours now {:?}", editor.selected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Attribute, CellCoord};
    use crate::config::EditorConfig;
    use crate::editor::SelectedColors;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use test_log::test;

    fn editor() -> EditorState {
        EditorState::new(EditorConfig::default())
    }

    fn press_at(mapper: &InputMapper, editor: &mut EditorState, rng: &mut StdRng, x: i32, y: i32) {
        editor.mouse.x = x;
        editor.mouse.y = y;
        editor.mouse.clicked = true;
        mapper.pointer_pressed(editor, rng);
        editor.mouse.clicked = false;
        mapper.pointer_released(editor);
    }

    fn icon_centre(editor: &EditorState, index: usize) -> (i32, i32) {
        let rect = editor.zones.icon(index).unwrap().rect;
        ((rect.x1 + rect.x2) / 2, (rect.y1 + rect.y2) / 2)
    }

    fn click_icon(mapper: &InputMapper, editor: &mut EditorState, rng: &mut StdRng, index: usize) {
        let (x, y) = icon_centre(editor, index);
        press_at(mapper, editor, rng, x, y);
    }

    #[test]
    fn ink_press_at_origin_sets_pixel_and_ink() {
        let mapper = InputMapper::new(SwatchPick::Randomize);
        let mut rng = StdRng::seed_from_u64(1);
        let mut editor = editor();
        editor.selected = SelectedColors { ink: 5, paper: 1, bright: false };

        press_at(&mapper, &mut editor, &mut rng, 0, 0);

        let pixel = PixelCoord::new(0, 0).unwrap();
        assert!(editor.canvas.pixel(pixel));
        assert_eq!(
            editor.canvas.attribute(pixel.cell()),
            Attribute { ink: 5, paper: 7, bright: false }
        );
    }

    #[test]
    fn press_lands_in_the_cell_under_the_pointer_at_any_zoom() {
        let mapper = InputMapper::new(SwatchPick::Randomize);
        let mut rng = StdRng::seed_from_u64(1);
        let mut editor = editor();
        editor.view.pixel_size = 3;

        press_at(&mapper, &mut editor, &mut rng, 100, 50);

        let pixel = PixelCoord::new(33, 16).unwrap();
        assert!(editor.canvas.pixel(pixel));
        assert_eq!(pixel.cell(), CellCoord::new(4, 2).unwrap());
        assert_eq!(editor.canvas.attribute(pixel.cell()).ink, editor.selected.ink);
    }

    #[test]
    fn repeated_ink_press_never_toggles_off() {
        let mapper = InputMapper::new(SwatchPick::Randomize);
        let mut rng = StdRng::seed_from_u64(1);
        let mut editor = editor();

        press_at(&mapper, &mut editor, &mut rng, 9, 9);
        let first = editor.canvas.attribute(CellCoord::new(0, 0).unwrap());
        press_at(&mapper, &mut editor, &mut rng, 9, 9);

        assert!(editor.canvas.pixel(PixelCoord::new(3, 3).unwrap()));
        assert_eq!(editor.canvas.attribute(CellCoord::new(0, 0).unwrap()), first);
    }

    #[test]
    fn paper_mode_keeps_ink_and_pixels() {
        let mapper = InputMapper::new(SwatchPick::Randomize);
        let mut rng = StdRng::seed_from_u64(1);
        let mut editor = editor();
        let cell = CellCoord::new(0, 0).unwrap();

        editor.selected = SelectedColors { ink: 6, paper: 3, bright: true };
        press_at(&mapper, &mut editor, &mut rng, 0, 0);

        editor.mode = PaintMode::Paper;
        editor.selected = SelectedColors { ink: 1, paper: 4, bright: false };
        press_at(&mapper, &mut editor, &mut rng, 6, 6);

        assert_eq!(editor.canvas.attribute(cell), Attribute { ink: 6, paper: 4, bright: false });
        assert!(!editor.canvas.pixel(PixelCoord::new(2, 2).unwrap()));
    }

    #[test]
    fn zoom_in_nine_times_then_out_eleven_times() {
        let mapper = InputMapper::new(SwatchPick::Randomize);
        let mut rng = StdRng::seed_from_u64(1);
        let mut editor = editor();
        editor.view.pixel_size = 1;

        for _ in 0..9 {
            click_icon(&mapper, &mut editor, &mut rng, 0);
        }
        assert_eq!(editor.view.pixel_size, 10);

        for _ in 0..11 {
            click_icon(&mapper, &mut editor, &mut rng, 1);
        }
        assert_eq!(editor.view.pixel_size, 2);
    }

    #[test]
    fn zoom_in_caps_at_two_hundred() {
        let mapper = InputMapper::new(SwatchPick::Randomize);
        let mut rng = StdRng::seed_from_u64(1);
        let mut editor = editor();
        editor.view.pixel_size = 198;

        for _ in 0..5 {
            click_icon(&mapper, &mut editor, &mut rng, 0);
        }
        assert_eq!(editor.view.pixel_size, 200);
    }

    #[test]
    fn menu_clicks_reach_icons_when_the_canvas_overflows() {
        let mapper = InputMapper::new(SwatchPick::Randomize);
        let mut rng = StdRng::seed_from_u64(1);
        let mut editor = editor();
        editor.view.pixel_size = 10;

        click_icon(&mapper, &mut editor, &mut rng, 2);
        assert!(editor.view.show_grid);
        assert!(editor.canvas.pixels().iter().all(|(_, _, set)| !*set));
    }

    #[test]
    fn grid_and_mode_icons() {
        let mapper = InputMapper::new(SwatchPick::Randomize);
        let mut rng = StdRng::seed_from_u64(1);
        let mut editor = editor();

        click_icon(&mapper, &mut editor, &mut rng, 2);
        assert!(editor.view.show_grid);
        assert!(editor.zones.icon(2).unwrap().selected);

        click_icon(&mapper, &mut editor, &mut rng, 3);
        assert!(!editor.view.show_grid);
        assert!(!editor.zones.icon(2).unwrap().selected);
        assert!(editor.zones.icon(3).unwrap().selected);

        click_icon(&mapper, &mut editor, &mut rng, PAPER_MODE_ICON);
        assert_eq!(editor.mode, PaintMode::Paper);
        assert!(editor.zones.icon(PAPER_MODE_ICON).unwrap().selected);
        assert!(!editor.zones.icon(INK_MODE_ICON).unwrap().selected);

        click_icon(&mapper, &mut editor, &mut rng, 0);
        assert!(editor.zones.icon(PAPER_MODE_ICON).unwrap().selected);

        click_icon(&mapper, &mut editor, &mut rng, INK_MODE_ICON);
        assert_eq!(editor.mode, PaintMode::Ink);
        assert!(editor.zones.icon(INK_MODE_ICON).unwrap().selected);
        assert!(!editor.zones.icon(PAPER_MODE_ICON).unwrap().selected);
    }

    #[test]
    fn reserved_icons_change_nothing() {
        let mapper = InputMapper::new(SwatchPick::Randomize);
        let mut rng = StdRng::seed_from_u64(1);
        let mut editor = editor();
        let (view, mode, selected) = (editor.view, editor.mode, editor.selected);

        for index in 4..8 {
            click_icon(&mapper, &mut editor, &mut rng, index);
        }
        assert_eq!((editor.view, editor.mode, editor.selected), (view, mode, selected));
    }

    #[test]
    fn random_swatch_pick_stays_in_range() {
        let mapper = InputMapper::new(SwatchPick::Randomize);
        let mut rng = StdRng::seed_from_u64(7);
        let mut editor = editor();
        let id = ZoneId::Swatch { bright: false, hue: 4 };
        let rect = editor.zones.zone(id).unwrap().rect;

        for _ in 0..20 {
            press_at(&mapper, &mut editor, &mut rng, rect.x1 + 4, rect.y1 + 4);
            assert!(editor.selected.ink <= 7 && editor.selected.paper <= 7);
        }
        assert!(editor.zones.zone(id).unwrap().selected);

        press_at(&mapper, &mut editor, &mut rng, rect.x1 + 4, 5);
        assert!(!editor.zones.zone(id).unwrap().selected);
    }

    #[test]
    fn exact_swatch_pick_copies_the_swatch() {
        let mapper = InputMapper::new(SwatchPick::Exact);
        let mut rng = StdRng::seed_from_u64(1);
        let mut editor = editor();
        let rect = editor.zones.zone(ZoneId::Swatch { bright: false, hue: 5 }).unwrap().rect;

        press_at(&mapper, &mut editor, &mut rng, rect.x1 + 4, rect.y1 + 4);
        assert_eq!(editor.selected, SelectedColors { ink: 5, paper: 2, bright: false });

        editor.mode = PaintMode::Paper;
        let rect = editor.zones.zone(ZoneId::Swatch { bright: true, hue: 6 }).unwrap().rect;
        press_at(&mapper, &mut editor, &mut rng, rect.x1 + 4, rect.y1 + 4);
        assert_eq!(editor.selected, SelectedColors { ink: 5, paper: 6, bright: true });
    }

    #[test]
    fn move_hovers_exactly_one_icon() {
        let mapper = InputMapper::new(SwatchPick::Randomize);
        let mut editor = editor();

        for index in [0, 3, 9, 1] {
            let (x, y) = icon_centre(&editor, index);
            editor.mouse.x = x;
            editor.mouse.y = y;
            mapper.pointer_moved(&mut editor);
            let hovered: Vec<_> = editor
                .zones
                .icons()
                .iter()
                .enumerate()
                .filter(|(_, z)| z.hover)
                .map(|(i, _)| i)
                .collect();
            assert_eq!(hovered, vec![index]);
        }

        editor.mouse.x = 5;
        editor.mouse.y = 5;
        mapper.pointer_moved(&mut editor);
        assert!(editor.zones.icons().iter().all(|z| !z.hover));
        assert!(editor.canvas.pixels().iter().all(|(_, _, set)| !*set));
    }

    #[test]
    fn drag_with_button_held_paints() {
        let mapper = InputMapper::new(SwatchPick::Randomize);
        let mut rng = StdRng::seed_from_u64(1);
        let mut editor = editor();
        editor.view.pixel_size = 1;

        editor.mouse = crate::editor::MouseState { x: 10, y: 10, clicked: true };
        mapper.pointer_pressed(&mut editor, &mut rng);
        for x in 11..20 {
            editor.mouse.x = x;
            mapper.pointer_moved(&mut editor);
        }
        editor.mouse.clicked = false;
        mapper.pointer_released(&mut editor);
        editor.mouse.x = 30;
        mapper.pointer_moved(&mut editor);

        for x in 10..20 {
            assert!(editor.canvas.pixel(PixelCoord::new(x, 10).unwrap()));
        }
        assert!(!editor.canvas.pixel(PixelCoord::new(30, 10).unwrap()));
    }

    #[test]
    fn drag_over_the_menu_does_not_trigger_icons() {
        let mapper = InputMapper::new(SwatchPick::Randomize);
        let mut editor = editor();
        let (x, y) = icon_centre(&editor, 0);

        editor.mouse = crate::editor::MouseState { x, y, clicked: true };
        mapper.pointer_moved(&mut editor);
        assert_eq!(editor.view.pixel_size, 3);
        assert!(editor.zones.icon(0).unwrap().hover);
    }

    #[test]
    fn presses_below_the_canvas_are_ignored() {
        let mapper = InputMapper::new(SwatchPick::Randomize);
        let mut rng = StdRng::seed_from_u64(1);
        let mut editor = editor();
        let before = editor.canvas.clone();

        press_at(&mapper, &mut editor, &mut rng, 10, 192 * 3 + 5);
        press_at(&mapper, &mut editor, &mut rng, -4, 10);

        assert_eq!(editor.canvas.pixels(), before.pixels());
        assert_eq!(editor.canvas.attributes(), before.attributes());
    }
}
