// Narrow input-device view over the configuration aggregate

use crate::engine::config::{Config, ControllerInfo};

/// Borrowing facade exposing only the input-device settings
///
/// Settings screens get this instead of the whole `Config`. Every call
/// delegates straight to the aggregate; no validation, no extra state.
pub struct InputDeviceConfig<'a> {
    config: &'a mut Config,
}

impl<'a> InputDeviceConfig<'a> {
    pub fn new(config: &'a mut Config) -> Self {
        Self { config }
    }

    pub fn mouse_sensitivity(&self) -> f32 {
        self.config.input().mouse_sensitivity()
    }

    pub fn set_mouse_sensitivity(&mut self, sensitivity: f32) {
        self.config.input_mut().set_mouse_sensitivity(sensitivity);
    }

    pub fn mouse_y_axis_inverted(&self) -> bool {
        self.config.input().mouse_y_axis_inverted()
    }

    pub fn set_mouse_y_axis_inverted(&mut self, inverted: bool) {
        self.config.input_mut().set_mouse_y_axis_inverted(inverted);
    }

    /// Registered controller info for `name`, or `None` when absent
    pub fn controller(&self, name: &str) -> Option<&ControllerInfo> {
        self.config.input().controllers().controller(name)
    }

    /// Restore input settings to their defaults
    pub fn reset(&mut self) {
        self.config.input_mut().reset();
    }
}
