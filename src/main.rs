use anyhow::Result;
use log::{debug, info, warn};
use std::rc::Rc;
use winit::{
    event::{DeviceEvent, Event, WindowEvent},
    event_loop::EventLoop,
    keyboard::PhysicalKey,
    window::{CursorGrabMode, Window, WindowBuilder},
};

mod engine;

use engine::events::EntityRef;
use engine::input::{
    dispatch_keyboard_event, BindMap, ButtonState, DebugInputRouter, Dispatcher, InputEvent,
    MouseAxis, MouseAxisEvent, PointerGrab,
};
use engine::EngineContext;

/// Pointer grab backed by the winit window
///
/// Grab failures (unsupported platform, unfocused window) are logged and
/// swallowed; input handling must not fail because the cursor stayed free.
struct WindowPointer {
    window: Rc<Window>,
}

impl PointerGrab for WindowPointer {
    fn set_grabbed(&mut self, grabbed: bool) {
        let mode = if grabbed {
            CursorGrabMode::Locked
        } else {
            CursorGrabMode::None
        };
        if let Err(err) = self.window.set_cursor_grab(mode) {
            warn!("Cursor grab change failed: {}", err);
        }
        self.window.set_cursor_visible(!grabbed);
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Voxelfall...");

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = Rc::new(
        WindowBuilder::new()
            .with_title("Voxelfall")
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
            .with_resizable(true)
            .build(&event_loop)?,
    );

    info!("Window created successfully");

    let mut ctx = EngineContext::new(Box::new(WindowPointer {
        window: Rc::clone(&window),
    }));
    let mut router = DebugInputRouter::new(&mut ctx.ui);
    let dispatcher = Dispatcher::new(DebugInputRouter::handlers());
    let binds = BindMap::with_defaults();

    // Start with the pointer grabbed, matching the router's initial state
    ctx.pointer.set_grabbed(router.mouse_grabbed());

    // The local connection and the body it controls
    let client = EntityRef::client(1);
    let character = EntityRef::character(2);

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput {
                    event: key_event, ..
                },
                ..
            } => {
                if let PhysicalKey::Code(code) = key_event.physical_key {
                    dispatch_keyboard_event(
                        &dispatcher,
                        &mut router,
                        &mut ctx,
                        &binds,
                        code,
                        ButtonState::from(key_event.state),
                        key_event.repeat,
                        client,
                    );
                }
            }
            Event::DeviceEvent {
                event: DeviceEvent::MouseMotion { delta },
                ..
            } => {
                let (dx, dy) = delta;
                for (axis, amount) in [(MouseAxis::X, dx as f32), (MouseAxis::Y, dy as f32)] {
                    if amount != 0.0 {
                        let mut event = InputEvent::MouseAxis(MouseAxisEvent::new(axis, amount));
                        dispatcher.dispatch(&mut router, &mut ctx, &mut event, character);
                        if let InputEvent::MouseAxis(motion) = &event {
                            if motion.is_consumed() {
                                debug!(
                                    "Suppressed mouse {:?} motion of {}",
                                    motion.axis(),
                                    motion.delta()
                                );
                            }
                        }
                    }
                }
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                window.request_redraw();
            }
            Event::AboutToWait => {
                // Deliver queued notifications once per loop turn
                for (target, notification) in ctx.bus.drain() {
                    info!("[entity {}] {}", target, notification.message());
                }
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
