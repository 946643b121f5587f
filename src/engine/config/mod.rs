// Client configuration aggregate
//
// One owned settings tree for the whole process. All mutation goes through
// explicit setters on the nested settings types; there is no ambient global
// state and no persistence in this layer.

pub mod input;
pub mod rendering;

pub use input::{ControllerConfig, ControllerInfo, InputSettings};
pub use rendering::{RenderingDebugSettings, RenderingSettings, ViewDistance};

/// Root of the configuration tree
#[derive(Debug, Clone, Default)]
pub struct Config {
    input: InputSettings,
    rendering: RenderingSettings,
    system: SystemSettings,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &InputSettings {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputSettings {
        &mut self.input
    }

    pub fn rendering(&self) -> &RenderingSettings {
        &self.rendering
    }

    pub fn rendering_mut(&mut self) -> &mut RenderingSettings {
        &mut self.rendering
    }

    pub fn system(&self) -> &SystemSettings {
        &self.system
    }

    pub fn system_mut(&mut self) -> &mut SystemSettings {
        &mut self.system
    }
}

/// System-wide switches, currently just the debug-mode flag
#[derive(Debug, Clone, Default)]
pub struct SystemSettings {
    debug_enabled: bool,
}

impl SystemSettings {
    pub fn debug_enabled(&self) -> bool {
        self.debug_enabled
    }

    pub fn set_debug_enabled(&mut self, enabled: bool) {
        self.debug_enabled = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::new();
        assert!(!config.system().debug_enabled());
        assert_eq!(config.rendering().view_distance(), ViewDistance::Moderate);
    }

    #[test]
    fn test_nested_mutation() {
        let mut config = Config::new();
        config.system_mut().set_debug_enabled(true);
        config.input_mut().set_mouse_sensitivity(0.2);

        assert!(config.system().debug_enabled());
        assert_eq!(config.input().mouse_sensitivity(), 0.2);
    }
}
