// Typed input events carried through the dispatcher
//
// Every event owns a `consumed` flag. Consuming is idempotent and stops the
// dispatcher from delivering the same event instance to lower-priority
// handlers.

use super::bindings::BindButton;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Whether a key or button transitioned down or up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Down,
    Up,
}

impl ButtonState {
    pub fn is_down(self) -> bool {
        self == ButtonState::Down
    }
}

impl From<ElementState> for ButtonState {
    fn from(state: ElementState) -> Self {
        match state {
            ElementState::Pressed => ButtonState::Down,
            ElementState::Released => ButtonState::Up,
        }
    }
}

/// Mouse motion axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAxis {
    X,
    Y,
}

/// Raw key press, repeat, or release
#[derive(Debug, Clone)]
pub struct KeyEvent {
    key: KeyCode,
    state: ButtonState,
    consumed: bool,
}

impl KeyEvent {
    pub fn new(key: KeyCode, state: ButtonState) -> Self {
        Self {
            key,
            state,
            consumed: false,
        }
    }

    pub fn key(&self) -> KeyCode {
        self.key
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed
    }

    pub fn consume(&mut self) {
        self.consumed = true;
    }
}

/// Relative mouse motion along one axis
#[derive(Debug, Clone)]
pub struct MouseAxisEvent {
    axis: MouseAxis,
    delta: f32,
    consumed: bool,
}

impl MouseAxisEvent {
    pub fn new(axis: MouseAxis, delta: f32) -> Self {
        Self {
            axis,
            delta,
            consumed: false,
        }
    }

    pub fn axis(&self) -> MouseAxis {
        self.axis
    }

    pub fn delta(&self) -> f32 {
        self.delta
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed
    }

    pub fn consume(&mut self) {
        self.consumed = true;
    }
}

/// A named bind firing, with the underlying button state
#[derive(Debug, Clone)]
pub struct BindButtonEvent {
    bind: BindButton,
    state: ButtonState,
    consumed: bool,
}

impl BindButtonEvent {
    pub fn new(bind: BindButton, state: ButtonState) -> Self {
        Self {
            bind,
            state,
            consumed: false,
        }
    }

    pub fn bind(&self) -> BindButton {
        self.bind
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed
    }

    pub fn consume(&mut self) {
        self.consumed = true;
    }
}

/// Dispatch key for handler registration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    HideHud,
    IncreaseViewDistance,
    DecreaseViewDistance,
    Key,
    KeyDown,
    MouseAxis,
}

/// Any input event the dispatcher can deliver
///
/// `KeyDown` is delivered once per non-repeat press; `Key` is delivered for
/// every press, repeat, and release. A single physical keystroke therefore
/// produces two separate event instances with independent consumed flags.
#[derive(Debug, Clone)]
pub enum InputEvent {
    Bind(BindButtonEvent),
    Key(KeyEvent),
    KeyDown(KeyEvent),
    MouseAxis(MouseAxisEvent),
}

impl InputEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            InputEvent::Bind(bind) => match bind.bind() {
                BindButton::HideHud => EventKind::HideHud,
                BindButton::IncreaseViewDistance => EventKind::IncreaseViewDistance,
                BindButton::DecreaseViewDistance => EventKind::DecreaseViewDistance,
            },
            InputEvent::Key(_) => EventKind::Key,
            InputEvent::KeyDown(_) => EventKind::KeyDown,
            InputEvent::MouseAxis(_) => EventKind::MouseAxis,
        }
    }

    pub fn is_consumed(&self) -> bool {
        match self {
            InputEvent::Bind(e) => e.is_consumed(),
            InputEvent::Key(e) | InputEvent::KeyDown(e) => e.is_consumed(),
            InputEvent::MouseAxis(e) => e.is_consumed(),
        }
    }

    pub fn consume(&mut self) {
        match self {
            InputEvent::Bind(e) => e.consume(),
            InputEvent::Key(e) | InputEvent::KeyDown(e) => e.consume(),
            InputEvent::MouseAxis(e) => e.consume(),
        }
    }
}
