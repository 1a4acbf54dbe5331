mod canvas;
mod config;
mod editor;
mod error;
mod graphics;
mod grid;
mod icons;
mod input;
mod input_mapping;
mod menu;
mod palette;
mod renderer;
mod surface;
mod xpm;

use std::time::Instant;

use winit::{
    event::Event,
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use crate::config::EditorConfig;
use crate::editor::EditorState;
use crate::error::PlatformError;
use crate::graphics::GraphicsRenderer;
use crate::input::{InputAction, InputHandler};
use crate::input_mapping::InputMapper;

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        log::error!("Error initializing platform - {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), PlatformError> {
    let config = EditorConfig::from_env();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("ZX-Paint")
        .with_inner_size(winit::dpi::LogicalSize::new(config.window_width, config.window_height))
        .with_resizable(true)
        .build(&event_loop)?;

    let mut graphics = GraphicsRenderer::new(&window)?;
    let (width, height) = graphics.size();

    let mut editor = EditorState::new(config.clone());
    editor.resize(width, height);
    log::info!(
        "Editor ready: {}x{} window, pixel size {}",
        width,
        height,
        editor.view.pixel_size
    );

    let input_handler = InputHandler::new();
    let input_mapper = InputMapper::new(config.swatch_pick);
    let mut rng = rand::thread_rng();
    let idle_delay = config.idle_delay();
    let mut redraw_requested = true;

    event_loop.run(move |event, _, control_flow| match event {
        Event::WindowEvent { window_id, event } if window_id == window.id() => {
            match input_handler.handle_window_event(&event, &mut editor.mouse) {
                InputAction::Quit => {
                    log::info!("Exiting");
                    *control_flow = ControlFlow::Exit;
                    return;
                }
                InputAction::Resized(width, height) => {
                    if let Err(err) = graphics.resize(width, height) {
                        log::error!("Frame abandoned: {}", err);
                        return;
                    }
                    let (width, height) = graphics.size();
                    editor.resize(width, height);
                }
                InputAction::PointerMoved => input_mapper.pointer_moved(&mut editor),
                InputAction::PointerPressed => input_mapper.pointer_pressed(&mut editor, &mut rng),
                InputAction::PointerReleased => input_mapper.pointer_released(&mut editor),
                InputAction::Key(key) => log::debug!("key {:?}", key),
                InputAction::None => return,
            }
            redraw_requested = true;
        }
        Event::MainEventsCleared => {
            if redraw_requested {
                if let Err(err) = graphics.draw(&editor) {
                    log::error!("Frame abandoned: {}", err);
                }
                redraw_requested = false;
            }
            *control_flow = ControlFlow::WaitUntil(Instant::now() + idle_delay);
        }
        _ => {}
    })
}
