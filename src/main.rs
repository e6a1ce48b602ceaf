use anyhow::Result;
use log::{debug, info};
use winit::{
    event::{DeviceEvent, Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

use pixelframe::engine::frame::FrameClock;
use pixelframe::engine::input::InputManager;
use pixelframe::game::Player;

/// Claim exclusive cursor capture at startup
const CAPTURE_MOUSE: bool = false;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Pixelframe...");

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Pixelframe")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    let mut input = InputManager::new();
    input.initialize(&window, CAPTURE_MOUSE)?;

    let mut clock = FrameClock::new();
    let mut player = Player::new(200.0, 400.0);

    // Main event loop: the message pump feeds the input buffer, gameplay
    // polls it once per frame, then the frame boundary clears edge state
    event_loop.run(move |event, elwt| {
        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                if let Err(e) = input.shutdown(&window) {
                    debug!("mouse capture release failed: {e}");
                }
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::CursorMoved { position, .. },
                ..
            } => {
                input.process_cursor_moved(position);
            }
            Event::WindowEvent {
                event: WindowEvent::MouseInput { state, button, .. },
                ..
            } => {
                input.process_mouse_button(state, button);
            }
            Event::DeviceEvent {
                event: DeviceEvent::MouseMotion { delta },
                ..
            } => {
                input.process_raw_motion(delta);
            }
            Event::WindowEvent {
                event: WindowEvent::Resized(physical_size),
                ..
            } => {
                info!("Window resized to {:?}", physical_size);
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                let dt = clock.tick();

                // Skip gameplay polling entirely when nothing changed
                if input.state().state_changed() || clock.frame_count() == 1 {
                    debug!(
                        "frame {}: input changed, text buffer {:?}",
                        clock.frame_count(),
                        input.state().text_in()
                    );
                }
                player.update(input.state(), dt);

                if clock.frame_count() % 300 == 0 {
                    info!("fps: {:.1}, player at {:?}", clock.fps(), player.position());
                }

                // Frame boundary: exactly once, after gameplay has read input
                input.end_frame();
                window.request_redraw();
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        }
    })
    .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
