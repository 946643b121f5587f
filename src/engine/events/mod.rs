// Entity references and the notification event bus
//
// The full entity-component runtime lives elsewhere; the debug controls only
// need to know which capabilities the acting entity carries and how to send
// a notification back to it. `EntityRef` models the capability flags, and
// `EventBus` is the synchronous outbound queue drained by the client shell.

/// Opaque entity identifier
pub type EntityId = u32;

/// Lightweight reference to an entity plus the components relevant here
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityRef {
    id: EntityId,
    client: bool,
    character: bool,
}

impl EntityRef {
    pub fn new(id: EntityId, client: bool, character: bool) -> Self {
        Self {
            id,
            client,
            character,
        }
    }

    /// An entity carrying the client component (the local connection)
    pub fn client(id: EntityId) -> Self {
        Self::new(id, true, false)
    }

    /// An entity carrying the character component (the controlled body)
    pub fn character(id: EntityId) -> Self {
        Self::new(id, false, true)
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn has_client(&self) -> bool {
        self.client
    }

    pub fn has_character(&self) -> bool {
        self.character
    }
}

/// User-facing notification addressed to an entity's client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessageEvent {
    message: String,
    source: EntityId,
}

impl NotificationMessageEvent {
    pub fn new(message: impl Into<String>, source: EntityId) -> Self {
        Self {
            message: message.into(),
            source,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source(&self) -> EntityId {
        self.source
    }
}

/// Synchronous outbound event queue
///
/// Handlers push during dispatch; the client shell drains once per frame.
#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<(EntityId, NotificationMessageEvent)>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event for delivery to `target`
    pub fn send(&mut self, target: EntityId, event: NotificationMessageEvent) {
        self.queue.push((target, event));
    }

    /// Take every queued event, leaving the bus empty
    pub fn drain(&mut self) -> Vec<(EntityId, NotificationMessageEvent)> {
        std::mem::take(&mut self.queue)
    }

    /// Peek at queued events without removing them
    pub fn pending(&self) -> &[(EntityId, NotificationMessageEvent)] {
        &self.queue
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_components() {
        let client = EntityRef::client(1);
        assert!(client.has_client());
        assert!(!client.has_character());

        let character = EntityRef::character(2);
        assert!(!character.has_client());
        assert!(character.has_character());
    }

    #[test]
    fn test_bus_send_and_drain() {
        let mut bus = EventBus::new();
        bus.send(1, NotificationMessageEvent::new("hello", 1));
        assert_eq!(bus.len(), 1);

        let drained = bus.drain();
        assert_eq!(drained.len(), 1);
        assert_eq!(drained[0].0, 1);
        assert_eq!(drained[0].1.message(), "hello");
        assert!(bus.is_empty());
    }

    #[test]
    fn test_bus_preserves_order() {
        let mut bus = EventBus::new();
        bus.send(1, NotificationMessageEvent::new("first", 1));
        bus.send(1, NotificationMessageEvent::new("second", 1));

        let drained = bus.drain();
        assert_eq!(drained[0].1.message(), "first");
        assert_eq!(drained[1].1.message(), "second");
    }

    #[test]
    fn test_pending_does_not_remove() {
        let mut bus = EventBus::new();
        bus.send(3, NotificationMessageEvent::new("kept", 3));

        assert_eq!(bus.pending().len(), 1);
        assert_eq!(bus.len(), 1);
    }
}
