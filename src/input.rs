use winit::event::{ElementState, KeyboardInput, MouseButton, VirtualKeyCode, WindowEvent};

use crate::editor::MouseState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    None,
    PointerMoved,
    PointerPressed,
    PointerReleased,
    Resized(u32, u32),
    Key(Option<VirtualKeyCode>),
    Quit,
}

/// Translates window events into editor actions and keeps the pointer
/// state current.
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_window_event(&self, event: &WindowEvent, mouse: &mut MouseState) -> InputAction {
        match event {
            WindowEvent::CloseRequested => InputAction::Quit,
            WindowEvent::Resized(size) => InputAction::Resized(size.width, size.height),
            WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                InputAction::Resized(new_inner_size.width, new_inner_size.height)
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer_moved(mouse, position.x as i32, position.y as i32)
            }
            WindowEvent::MouseInput { state, button, .. } => self.mouse_input(mouse, *state, *button),
            WindowEvent::KeyboardInput { input, .. } => self.keyboard_input(input),
            _ => InputAction::None,
        }
    }

    fn pointer_moved(&self, mouse: &mut MouseState, x: i32, y: i32) -> InputAction {
        mouse.x = x;
        mouse.y = y;
        InputAction::PointerMoved
    }

    fn mouse_input(&self, mouse: &mut MouseState, state: ElementState, button: MouseButton) -> InputAction {
        if button != MouseButton::Left {
            return InputAction::None;
        }
        match state {
            ElementState::Pressed => {
                mouse.clicked = true;
                InputAction::PointerPressed
            }
            ElementState::Released => {
                mouse.clicked = false;
                InputAction::PointerReleased
            }
        }
    }

    fn keyboard_input(&self, input: &KeyboardInput) -> InputAction {
        match input.state {
            ElementState::Pressed => InputAction::Key(input.virtual_keycode),
            ElementState::Released => InputAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn left_button_sets_and_clears_clicked() {
        let handler = InputHandler::new();
        let mut mouse = MouseState::default();

        assert_eq!(
            handler.mouse_input(&mut mouse, ElementState::Pressed, MouseButton::Left),
            InputAction::PointerPressed
        );
        assert!(mouse.clicked);

        assert_eq!(
            handler.mouse_input(&mut mouse, ElementState::Released, MouseButton::Left),
            InputAction::PointerReleased
        );
        assert!(!mouse.clicked);
    }

    #[test]
    fn other_buttons_are_ignored() {
        let handler = InputHandler::new();
        let mut mouse = MouseState::default();
        assert_eq!(
            handler.mouse_input(&mut mouse, ElementState::Pressed, MouseButton::Right),
            InputAction::None
        );
        assert!(!mouse.clicked);
    }

    #[test]
    fn moves_update_the_position_and_keep_the_button() {
        let handler = InputHandler::new();
        let mut mouse = MouseState { x: 0, y: 0, clicked: true };
        assert_eq!(handler.pointer_moved(&mut mouse, 40, 12), InputAction::PointerMoved);
        assert_eq!(mouse, MouseState { x: 40, y: 12, clicked: true });
    }

    #[test]
    fn close_and_resize_map_directly() {
        let handler = InputHandler::new();
        let mut mouse = MouseState::default();
        assert_eq!(
            handler.handle_window_event(&WindowEvent::CloseRequested, &mut mouse),
            InputAction::Quit
        );
        let resized = WindowEvent::Resized(winit::dpi::PhysicalSize::new(1024, 768));
        assert_eq!(
            handler.handle_window_event(&resized, &mut mouse),
            InputAction::Resized(1024, 768)
        );
    }
}
