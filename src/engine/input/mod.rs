// Input handling system
//
// Typed input events, a priority-ordered dispatch table, and the debug
// control router that consumes them. No runtime reflection: handlers are
// plain function pointers registered once at startup.
//
// ## Architecture
//
// - `event`: Typed events (key, mouse axis, bind button) with consumed flags
// - `bindings`: Named binds and the key map that produces them
// - `dispatch`: Registration table and synchronous priority dispatch
// - `router`: Debug controls (flag toggles, view distance, time scrub)
// - `device_config`: Narrow input-device facade over the config aggregate

pub mod bindings;
pub mod device_config;
pub mod dispatch;
pub mod event;
pub mod router;

// Re-export commonly used types
pub use bindings::{BindButton, BindMap};
pub use device_config::InputDeviceConfig;
pub use dispatch::{Dispatcher, EventPriority, HandlerEntry, RequiredComponent};
pub use event::{
    BindButtonEvent, ButtonState, EventKind, InputEvent, KeyEvent, MouseAxis, MouseAxisEvent,
};
pub use router::DebugInputRouter;

use crate::engine::events::EntityRef;
use crate::engine::EngineContext;
use winit::keyboard::KeyCode;

/// Pointer grab primitive of the windowing backend
///
/// One boolean call: grab and hide the cursor, or release and show it.
pub trait PointerGrab {
    fn set_grabbed(&mut self, grabbed: bool);
}

/// Deliver one keyboard event from the windowing backend as typed events
///
/// Binds and `KeyDown` fire on the initial Down edge only; OS auto-repeats
/// must not re-trigger them (one physical press, one step). `Key` fires for
/// every press, repeat, and release, so repeat-driven handlers like the
/// world-time scrub keep working while a key is held.
pub fn dispatch_keyboard_event(
    dispatcher: &Dispatcher,
    router: &mut DebugInputRouter,
    ctx: &mut EngineContext,
    binds: &BindMap,
    key: KeyCode,
    state: ButtonState,
    repeat: bool,
    entity: EntityRef,
) {
    if !(state.is_down() && repeat) {
        if let Some(bind) = binds.bind_for(key) {
            let mut event = InputEvent::Bind(BindButtonEvent::new(bind, state));
            dispatcher.dispatch(router, ctx, &mut event, entity);
        }
    }

    if state.is_down() && !repeat {
        let mut event = InputEvent::KeyDown(KeyEvent::new(key, state));
        dispatcher.dispatch(router, ctx, &mut event, entity);
    }

    let mut event = InputEvent::Key(KeyEvent::new(key, state));
    dispatcher.dispatch(router, ctx, &mut event, entity);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::ViewDistance;
    use crate::engine::events::EntityRef;
    use crate::engine::EngineContext;
    use approx::assert_relative_eq;
    use winit::keyboard::KeyCode;

    struct NullPointer;

    impl PointerGrab for NullPointer {
        fn set_grabbed(&mut self, _grabbed: bool) {}
    }

    struct Shell {
        ctx: EngineContext,
        router: DebugInputRouter,
        dispatcher: Dispatcher,
        binds: BindMap,
    }

    fn shell() -> Shell {
        let mut ctx = EngineContext::new(Box::new(NullPointer));
        let router = DebugInputRouter::new(&mut ctx.ui);
        Shell {
            ctx,
            router,
            dispatcher: Dispatcher::new(DebugInputRouter::handlers()),
            binds: BindMap::with_defaults(),
        }
    }

    impl Shell {
        fn key(&mut self, key: KeyCode, state: ButtonState, repeat: bool) {
            dispatch_keyboard_event(
                &self.dispatcher,
                &mut self.router,
                &mut self.ctx,
                &self.binds,
                key,
                state,
                repeat,
                EntityRef::client(1),
            );
        }

        /// Press, auto-repeat `repeats` times, then release
        fn hold(&mut self, key: KeyCode, repeats: usize) {
            self.key(key, ButtonState::Down, false);
            for _ in 0..repeats {
                self.key(key, ButtonState::Down, true);
            }
            self.key(key, ButtonState::Up, false);
        }
    }

    #[test]
    fn test_held_hide_hud_toggles_once() {
        let mut sh = shell();
        sh.hold(KeyCode::KeyH, 5);

        let debug = sh.ctx.config.rendering().debug();
        assert!(debug.hud_hidden());
        assert!(debug.first_person_hidden());
    }

    #[test]
    fn test_held_increase_steps_one_tier() {
        let mut sh = shell();
        sh.ctx
            .config
            .rendering_mut()
            .set_view_distance(ViewDistance::Near);

        sh.hold(KeyCode::Equal, 8);
        assert_eq!(
            sh.ctx.config.rendering().view_distance(),
            ViewDistance::Moderate
        );
        assert_eq!(sh.ctx.bus.len(), 1, "one press, one notification");
    }

    #[test]
    fn test_separate_presses_step_again() {
        let mut sh = shell();
        sh.ctx
            .config
            .rendering_mut()
            .set_view_distance(ViewDistance::Near);

        sh.hold(KeyCode::Equal, 0);
        sh.hold(KeyCode::Equal, 0);
        assert_eq!(sh.ctx.config.rendering().view_distance(), ViewDistance::Far);
    }

    #[test]
    fn test_repeat_does_not_retoggle_debug_mode() {
        let mut sh = shell();
        sh.hold(KeyCode::F3, 3);
        assert!(sh.ctx.config.system().debug_enabled());
    }

    #[test]
    fn test_time_scrub_applies_on_repeats() {
        let mut sh = shell();
        sh.ctx.config.system_mut().set_debug_enabled(true);

        sh.key(KeyCode::ArrowRight, ButtonState::Down, false);
        for _ in 0..4 {
            sh.key(KeyCode::ArrowRight, ButtonState::Down, true);
        }
        assert_relative_eq!(sh.ctx.time.days(), 0.1, epsilon = 1e-5);
    }
}
