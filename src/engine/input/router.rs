// Debug-control input routing
//
// Receives key, mouse, and bind-button events from the dispatch layer and
// turns them into debug-flag toggles, view-distance steps, world-time
// scrubbing, and UI visibility changes. Everything here is a best-effort UI
// toggle: a missing collaborator logs and no-ops, it never aborts dispatch.

use super::dispatch::{EventPriority, HandlerEntry, RequiredComponent};
use super::event::{EventKind, InputEvent, MouseAxis};
use crate::engine::events::{EntityRef, EventBus, NotificationMessageEvent};
use crate::engine::ui::UiManager;
use crate::engine::EngineContext;
use log::error;
use winit::keyboard::KeyCode;

/// Overlay id the router registers for the metrics display
pub const DEBUG_OVERLAY_ID: &str = "engine:debug_overlay";

/// HUD element id for the debug-properties panel
pub const DEBUG_PROPERTIES_ID: &str = "engine:debug_properties";

// World-time scrub steps, in days per keypress
const FINE_TIME_STEP: f32 = 0.005;
const COARSE_TIME_STEP: f32 = 0.02;

/// Stateful router behind the debug-control handlers
///
/// The only state owned here is the pointer-grab flag; everything else is
/// read from and written to the shared context during dispatch.
pub struct DebugInputRouter {
    mouse_grabbed: bool,
}

impl DebugInputRouter {
    /// Create the router and register its UI surfaces
    ///
    /// The debug-properties panel starts hidden; it only shows while the
    /// pointer is released.
    pub fn new(ui: &mut UiManager) -> Self {
        ui.add_overlay(DEBUG_OVERLAY_ID);
        ui.register_hud_element(DEBUG_PROPERTIES_ID, false);
        Self {
            mouse_grabbed: true,
        }
    }

    pub fn mouse_grabbed(&self) -> bool {
        self.mouse_grabbed
    }

    /// Registration table for the dispatcher, resolved once at startup
    pub fn handlers() -> Vec<HandlerEntry> {
        vec![
            HandlerEntry {
                kind: EventKind::HideHud,
                required: RequiredComponent::Client,
                priority: EventPriority::Normal,
                handler: on_hide_hud,
            },
            HandlerEntry {
                kind: EventKind::IncreaseViewDistance,
                required: RequiredComponent::Client,
                priority: EventPriority::Normal,
                handler: on_increase_view_distance,
            },
            HandlerEntry {
                kind: EventKind::DecreaseViewDistance,
                required: RequiredComponent::Client,
                priority: EventPriority::Normal,
                handler: on_decrease_view_distance,
            },
            HandlerEntry {
                kind: EventKind::Key,
                required: RequiredComponent::Client,
                priority: EventPriority::Normal,
                handler: on_key,
            },
            HandlerEntry {
                kind: EventKind::KeyDown,
                required: RequiredComponent::Client,
                priority: EventPriority::Normal,
                handler: on_key_down,
            },
            // Suppression must beat default gameplay handlers for the same
            // mouse motion, hence the elevated priority.
            HandlerEntry {
                kind: EventKind::MouseAxis,
                required: RequiredComponent::Character,
                priority: EventPriority::High,
                handler: on_mouse_axis,
            },
        ]
    }
}

/// Toggle the HUD and first-person elements together
///
/// The two flags must never diverge: both are recomputed from the same
/// `hide` value in one transition.
fn on_hide_hud(
    _router: &mut DebugInputRouter,
    ctx: &mut EngineContext,
    event: &mut InputEvent,
    _entity: EntityRef,
) {
    let bind = match event {
        InputEvent::Bind(bind) => bind,
        _ => return,
    };
    if !bind.state().is_down() {
        return;
    }

    let debug = ctx.config.rendering().debug();
    let hide = !(debug.hud_hidden() && debug.first_person_hidden());

    let debug = ctx.config.rendering_mut().debug_mut();
    debug.set_first_person_hidden(hide);
    debug.set_hud_hidden(hide);

    bind.consume();
}

fn on_increase_view_distance(
    _router: &mut DebugInputRouter,
    ctx: &mut EngineContext,
    event: &mut InputEvent,
    entity: EntityRef,
) {
    let bind = match event {
        InputEvent::Bind(bind) => bind,
        _ => return,
    };
    if !bind.state().is_down() {
        return;
    }

    let current = ctx.config.rendering().view_distance();
    if let Some(greater) = current.step_up() {
        let label = ctx.i18n.translate(greater.display_key()).to_string();
        fire_change_event(
            &mut ctx.bus,
            &format!("Increasing view distance to {}.", label),
            &[entity],
        );
        if greater.performance_warning() {
            fire_change_event(
                &mut ctx.bus,
                &format!(
                    "Warning: Increasing view distance to {} may result in performance issues.",
                    label
                ),
                &[entity],
            );
        }
        ctx.config.rendering_mut().set_view_distance(greater);
    }
    // Clamped at the ceiling: silent no-op, the press is still ours
    bind.consume();
}

fn on_decrease_view_distance(
    _router: &mut DebugInputRouter,
    ctx: &mut EngineContext,
    event: &mut InputEvent,
    entity: EntityRef,
) {
    let bind = match event {
        InputEvent::Bind(bind) => bind,
        _ => return,
    };
    if !bind.state().is_down() {
        return;
    }

    let current = ctx.config.rendering().view_distance();
    if let Some(lesser) = current.step_down() {
        let label = ctx.i18n.translate(lesser.display_key()).to_string();
        fire_change_event(
            &mut ctx.bus,
            &format!("Decreasing view distance to {}.", label),
            &[entity],
        );
        ctx.config.rendering_mut().set_view_distance(lesser);
    }
    bind.consume();
}

/// Scrub the world clock with the arrow keys (debug mode only)
fn on_key(
    _router: &mut DebugInputRouter,
    ctx: &mut EngineContext,
    event: &mut InputEvent,
    _entity: EntityRef,
) {
    let key = match event {
        InputEvent::Key(key) => key,
        _ => return,
    };
    if !ctx.config.system().debug_enabled() || !key.state().is_down() {
        return;
    }

    let delta = match key.key() {
        KeyCode::ArrowUp => FINE_TIME_STEP,
        KeyCode::ArrowDown => -FINE_TIME_STEP,
        KeyCode::ArrowRight => COARSE_TIME_STEP,
        KeyCode::ArrowLeft => -COARSE_TIME_STEP,
        _ => return,
    };
    ctx.time.set_days(ctx.time.days() + delta);
    key.consume();
}

fn on_key_down(
    router: &mut DebugInputRouter,
    ctx: &mut EngineContext,
    event: &mut InputEvent,
    _entity: EntityRef,
) {
    let key = match event {
        InputEvent::KeyDown(key) => key,
        _ => return,
    };

    // Debug-mode-only toggles
    if ctx.config.system().debug_enabled() {
        let debug = ctx.config.rendering_mut().debug_mut();
        match key.key() {
            KeyCode::F6 => {
                debug.set_enabled(!debug.enabled());
                key.consume();
            }
            KeyCode::F8 => {
                debug.set_render_chunk_bounding_boxes(!debug.render_chunk_bounding_boxes());
                key.consume();
            }
            KeyCode::F9 => {
                debug.set_wireframe(!debug.wireframe());
                key.consume();
            }
            _ => {}
        }
    }

    // Global keys, active regardless of debug mode
    match key.key() {
        KeyCode::F2 => {
            router.mouse_grabbed = !router.mouse_grabbed;
            match ctx.ui.hud_element_mut(DEBUG_PROPERTIES_ID) {
                Ok(panel) => panel.set_visible(!router.mouse_grabbed),
                Err(err) => error!("Debug properties panel unavailable: {}", err),
            }
            ctx.pointer.set_grabbed(router.mouse_grabbed);
            key.consume();
        }
        KeyCode::F3 => {
            let system = ctx.config.system_mut();
            system.set_debug_enabled(!system.debug_enabled());
            key.consume();
        }
        KeyCode::F4 => {
            match ctx.ui.overlay_mut(DEBUG_OVERLAY_ID) {
                Ok(overlay) => {
                    overlay.toggle_metrics_mode();
                }
                Err(err) => error!("Debug overlay unavailable: {}", err),
            }
            key.consume();
        }
        _ => {}
    }
}

/// Suppress horizontal mouse look while the pointer is released
fn on_mouse_axis(
    router: &mut DebugInputRouter,
    _ctx: &mut EngineContext,
    event: &mut InputEvent,
    _entity: EntityRef,
) {
    let motion = match event {
        InputEvent::MouseAxis(motion) => motion,
        _ => return,
    };
    if !router.mouse_grabbed && motion.axis() == MouseAxis::X {
        motion.consume();
    }
}

/// Send one identical notification to every entity in the list
pub fn fire_change_event(bus: &mut EventBus, message: &str, entities: &[EntityRef]) {
    for entity in entities {
        bus.send(
            entity.id(),
            NotificationMessageEvent::new(message, entity.id()),
        );
    }
}
