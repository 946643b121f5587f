// Bind-button definitions and default key bindings

use std::collections::HashMap;
use winit::keyboard::KeyCode;

/// Named input binds dispatched as their own event kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindButton {
    HideHud,
    IncreaseViewDistance,
    DecreaseViewDistance,
}

/// Default key bindings for the debug-control binds
pub fn default_bindings() -> Vec<(KeyCode, BindButton)> {
    vec![
        (KeyCode::KeyH, BindButton::HideHud),
        (KeyCode::Equal, BindButton::IncreaseViewDistance),
        (KeyCode::NumpadAdd, BindButton::IncreaseViewDistance),
        (KeyCode::Minus, BindButton::DecreaseViewDistance),
        (KeyCode::NumpadSubtract, BindButton::DecreaseViewDistance),
    ]
}

/// Mapping from physical keys to bind buttons
#[derive(Debug, Clone, Default)]
pub struct BindMap {
    bindings: HashMap<KeyCode, BindButton>,
}

impl BindMap {
    /// Empty map, nothing bound
    pub fn new() -> Self {
        Self::default()
    }

    /// Map seeded with `default_bindings()`
    pub fn with_defaults() -> Self {
        let mut map = Self::new();
        for (key, bind) in default_bindings() {
            map.bind(key, bind);
        }
        map
    }

    /// Bind a key, replacing any existing binding for that key
    pub fn bind(&mut self, key: KeyCode, bind: BindButton) {
        self.bindings.insert(key, bind);
    }

    pub fn unbind(&mut self, key: KeyCode) {
        self.bindings.remove(&key);
    }

    /// Bind for a key, if any
    pub fn bind_for(&self, key: KeyCode) -> Option<BindButton> {
        self.bindings.get(&key).copied()
    }
}
