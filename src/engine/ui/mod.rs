// In-game UI surface: overlays and HUD elements
//
// This is the narrow slice of the UI layer the debug controls talk to:
// registration and lookup by string identifier, plus visibility toggling.
// Widget layout and drawing live in the rendering layer.

pub mod debug_overlay;

pub use debug_overlay::{DebugOverlay, MetricsMode};

use std::collections::HashMap;

/// Errors from UI lookups
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("Overlay not found: {0}")]
    OverlayNotFound(String),

    #[error("HUD element not found: {0}")]
    ElementNotFound(String),
}

/// A HUD element that can be shown or hidden by identifier
#[derive(Debug)]
pub struct HudElement {
    id: String,
    visible: bool,
}

impl HudElement {
    pub fn new(id: &str, visible: bool) -> Self {
        Self {
            id: id.to_string(),
            visible,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// Registry of overlays and HUD elements
#[derive(Debug, Default)]
pub struct UiManager {
    overlays: HashMap<String, DebugOverlay>,
    hud: HashMap<String, HudElement>,
}

impl UiManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an overlay under `id`, replacing any previous registration
    pub fn add_overlay(&mut self, id: &str) -> &mut DebugOverlay {
        let overlay = self.overlays.entry(id.to_string()).or_default();
        *overlay = DebugOverlay::new();
        overlay
    }

    pub fn overlay(&self, id: &str) -> Result<&DebugOverlay, UiError> {
        self.overlays
            .get(id)
            .ok_or_else(|| UiError::OverlayNotFound(id.to_string()))
    }

    pub fn overlay_mut(&mut self, id: &str) -> Result<&mut DebugOverlay, UiError> {
        self.overlays
            .get_mut(id)
            .ok_or_else(|| UiError::OverlayNotFound(id.to_string()))
    }

    /// Register a HUD element under `id` with an initial visibility
    pub fn register_hud_element(&mut self, id: &str, visible: bool) -> &mut HudElement {
        let element = self
            .hud
            .entry(id.to_string())
            .or_insert_with(|| HudElement::new(id, visible));
        element.visible = visible;
        element
    }

    pub fn hud_element(&self, id: &str) -> Result<&HudElement, UiError> {
        self.hud
            .get(id)
            .ok_or_else(|| UiError::ElementNotFound(id.to_string()))
    }

    pub fn hud_element_mut(&mut self, id: &str) -> Result<&mut HudElement, UiError> {
        self.hud
            .get_mut(id)
            .ok_or_else(|| UiError::ElementNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_registration() {
        let mut ui = UiManager::new();
        ui.add_overlay("engine:debug_overlay");

        assert!(ui.overlay("engine:debug_overlay").is_ok());
        assert!(ui.overlay("engine:missing").is_err());
    }

    #[test]
    fn test_hud_element_visibility() {
        let mut ui = UiManager::new();
        ui.register_hud_element("engine:crosshair", true);

        assert!(ui.hud_element("engine:crosshair").unwrap().is_visible());

        ui.hud_element_mut("engine:crosshair")
            .unwrap()
            .set_visible(false);
        assert!(!ui.hud_element("engine:crosshair").unwrap().is_visible());
    }

    #[test]
    fn test_missing_element_is_explicit() {
        let mut ui = UiManager::new();
        let err = ui.hud_element_mut("engine:missing").unwrap_err();
        assert!(matches!(err, UiError::ElementNotFound(_)));
    }

    #[test]
    fn test_error_messages_name_the_id() {
        let ui = UiManager::new();
        let err = ui.overlay("engine:missing").unwrap_err();
        assert_eq!(err.to_string(), "Overlay not found: engine:missing");
    }
}
