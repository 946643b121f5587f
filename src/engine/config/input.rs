// Input-related settings: mouse tuning and the controller registry

use std::collections::HashMap;

/// Default mouse sensitivity applied on first start and after a reset
pub const DEFAULT_MOUSE_SENSITIVITY: f32 = 0.075;

/// Input settings shared by the whole client
///
/// All reads mirror the last write; no validation is performed here.
#[derive(Debug, Clone)]
pub struct InputSettings {
    mouse_sensitivity: f32,
    mouse_y_axis_inverted: bool,
    controllers: ControllerConfig,
}

impl InputSettings {
    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    pub fn set_mouse_sensitivity(&mut self, sensitivity: f32) {
        self.mouse_sensitivity = sensitivity;
    }

    pub fn mouse_y_axis_inverted(&self) -> bool {
        self.mouse_y_axis_inverted
    }

    pub fn set_mouse_y_axis_inverted(&mut self, inverted: bool) {
        self.mouse_y_axis_inverted = inverted;
    }

    pub fn controllers(&self) -> &ControllerConfig {
        &self.controllers
    }

    pub fn controllers_mut(&mut self) -> &mut ControllerConfig {
        &mut self.controllers
    }

    /// Restore mouse settings to their defaults
    ///
    /// Controller registrations come from the input backend, not the user,
    /// so a reset leaves them intact.
    pub fn reset(&mut self) {
        self.mouse_sensitivity = DEFAULT_MOUSE_SENSITIVITY;
        self.mouse_y_axis_inverted = false;
    }
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,
            mouse_y_axis_inverted: false,
            controllers: ControllerConfig::default(),
        }
    }
}

/// Registry of known controllers, keyed by the name the backend reports
#[derive(Debug, Clone, Default)]
pub struct ControllerConfig {
    controllers: HashMap<String, ControllerInfo>,
}

impl ControllerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a controller entry
    pub fn register(&mut self, name: &str, info: ControllerInfo) {
        self.controllers.insert(name.to_string(), info);
    }

    /// Look up a controller by name; absence is an explicit `None`
    pub fn controller(&self, name: &str) -> Option<&ControllerInfo> {
        self.controllers.get(name)
    }

    pub fn controller_mut(&mut self, name: &str) -> Option<&mut ControllerInfo> {
        self.controllers.get_mut(name)
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }
}

/// Per-controller axis tuning
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerInfo {
    pub invert_x: bool,
    pub invert_y: bool,
    pub movement_dead_zone: f32,
    pub rotation_dead_zone: f32,
}

impl Default for ControllerInfo {
    fn default() -> Self {
        Self {
            invert_x: true,
            invert_y: true,
            movement_dead_zone: 0.08,
            rotation_dead_zone: 0.08,
        }
    }
}
