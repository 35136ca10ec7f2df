//! Desktop host for the whiteboard engine.
//!
//! Mouse = fingertip, left button = pinch, `1`-`4` = palette, `C`/Backspace or
//! double click = clear, Escape = quit. Gaze is simulated when
//! `WHITEBOARD_GAZE=snap|smooth`, otherwise reported as unsupported.

mod gaze;
mod input;
mod render;

use std::time::Instant;

use winit::{
    event::*,
    event_loop::{ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

use gaze::GazeMode;
use input::PointerLandmarks;
use render::{GpuState, WINDOW_TITLE};
use whiteboard_core::{
    GazeSupport, GestureEvent, SessionConfig, SharedSession, WhiteboardSession, DEFAULT_PALETTE,
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let gaze_mode = GazeMode::from_env();
    let config = SessionConfig::default().with_gaze_smoothing(gaze_mode.smoothing());
    let mapper = config.mapper();
    let initial_position = config.initial_position;

    let mut session = WhiteboardSession::new(config)?;
    if gaze_mode == GazeMode::Off {
        session.set_gaze_support(GazeSupport::Unsupported);
    }
    session.subscribe_events();
    let session = SharedSession::new(session);

    let _gaze_thread = match gaze_mode {
        GazeMode::Off => None,
        _ => {
            log::info!("simulated gaze ({:?})", gaze_mode);
            Some(gaze::spawn_simulated_gaze(session.clone())?)
        }
    };

    let event_loop = EventLoop::new()?;
    // Landmark frames are ticked continuously, not only on input
    event_loop.set_control_flow(ControlFlow::Poll);
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .build(&event_loop)?;

    let mut gpu = pollster::block_on(GpuState::new(&window, mapper, initial_position))?;
    let mut landmarks = PointerLandmarks::default();
    let mut surface_events = Vec::new();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => gpu.resize(size),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::CursorMoved { position, .. } => {
                let (w, h) = gpu.size();
                landmarks.pointer_moved(position.x, position.y, w, h);
            }
            WindowEvent::CursorLeft { .. } => landmarks.pointer_left(),
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => on_pinch_button(&session, &mut landmarks, state),
            WindowEvent::Focused(false) => {
                session.with(|s| s.on_gesture(GestureEvent::Cancelled));
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if on_key(&session, &event) {
                    elwt.exit();
                }
            }
            WindowEvent::RedrawRequested => match gpu.render() {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => gpu.resize(gpu.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("render error: {:?}", e),
            },
            _ => {}
        },
        Event::AboutToWait => {
            // One landmark observation per frame tick
            let frame = landmarks.next_frame();
            session.with(|s| {
                s.on_frame(&frame);
                s.drain_events(&mut surface_events);
            });
            gpu.apply(&surface_events);
            surface_events.clear();
            gpu.window.request_redraw();
        }
        _ => {}
    })?;
    Ok(())
}

fn on_pinch_button(session: &SharedSession, landmarks: &mut PointerLandmarks, state: ElementState) {
    match state {
        ElementState::Pressed => {
            let double = landmarks.register_press(Instant::now());
            session.with(|s| {
                if double {
                    s.clear();
                }
                s.on_gesture(GestureEvent::Began);
            });
        }
        ElementState::Released => {
            session.with(|s| s.on_gesture(GestureEvent::Ended));
        }
    }
}

/// Returns true when the host should quit.
fn on_key(session: &SharedSession, event: &KeyEvent) -> bool {
    if event.state != ElementState::Pressed || event.repeat {
        return false;
    }
    match &event.logical_key {
        Key::Named(NamedKey::Escape) => return true,
        Key::Named(NamedKey::Backspace) => session.with(|s| s.clear()),
        Key::Character(ch) => {
            if let Some(i) = input::palette_index_for_key(ch.as_str()) {
                session.with(|s| s.set_color(DEFAULT_PALETTE[i]));
            } else if input::is_clear_key(ch.as_str()) {
                session.with(|s| s.clear());
            }
        }
        _ => {}
    }
    false
}
