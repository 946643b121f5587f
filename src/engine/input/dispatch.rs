// Event dispatch over a fixed registration table
//
// Handlers are registered once at startup as plain function pointers keyed
// by event kind, required component, and priority. Dispatch is synchronous
// on the calling thread: highest priority first, registration order within
// a priority, short-circuited as soon as the event is consumed.

use super::event::{EventKind, InputEvent};
use super::router::DebugInputRouter;
use crate::engine::events::EntityRef;
use crate::engine::EngineContext;

/// Delivery priority; `High` handlers run before `Normal` ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EventPriority {
    Normal,
    High,
}

/// Component the source entity must carry for a handler to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredComponent {
    Client,
    Character,
}

impl RequiredComponent {
    pub fn matches(self, entity: &EntityRef) -> bool {
        match self {
            RequiredComponent::Client => entity.has_client(),
            RequiredComponent::Character => entity.has_character(),
        }
    }
}

/// Handler function registered in the dispatch table
pub type Handler = fn(&mut DebugInputRouter, &mut EngineContext, &mut InputEvent, EntityRef);

/// One row of the registration table
pub struct HandlerEntry {
    pub kind: EventKind,
    pub required: RequiredComponent,
    pub priority: EventPriority,
    pub handler: Handler,
}

/// Priority-ordered dispatch table, built once at startup
pub struct Dispatcher {
    entries: Vec<HandlerEntry>,
}

impl Dispatcher {
    pub fn new(mut entries: Vec<HandlerEntry>) -> Self {
        // Stable sort keeps registration order within a priority
        entries.sort_by(|a, b| b.priority.cmp(&a.priority));
        Self { entries }
    }

    /// Deliver one event instance to every matching handler, in priority
    /// order, until it is consumed
    pub fn dispatch(
        &self,
        router: &mut DebugInputRouter,
        ctx: &mut EngineContext,
        event: &mut InputEvent,
        entity: EntityRef,
    ) {
        for entry in &self.entries {
            if event.is_consumed() {
                break;
            }
            if entry.kind != event.kind() || !entry.required.matches(&entity) {
                continue;
            }
            (entry.handler)(router, ctx, event, entity);
        }
    }
}
