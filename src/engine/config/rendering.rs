// Rendering settings: view distance tiers and debug-rendering flags

/// Render-distance tiers, ordered from cheapest to heaviest
///
/// The tier controls how much of the world is streamed and rendered around
/// the player. Adjustments clamp at both ends of the scale and never wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ViewDistance {
    Near = 0,
    Moderate = 1,
    Far = 2,
    Ultra = 3,
    Mega = 4,
    Extreme = 5,
}

impl ViewDistance {
    /// All tiers in ascending order; index into this array matches `index()`
    pub const ALL: [ViewDistance; 6] = [
        ViewDistance::Near,
        ViewDistance::Moderate,
        ViewDistance::Far,
        ViewDistance::Ultra,
        ViewDistance::Mega,
        ViewDistance::Extreme,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn max_index() -> usize {
        Self::ALL.len() - 1
    }

    /// Tier for an index, clamped to the valid range
    pub fn for_index(index: usize) -> ViewDistance {
        Self::ALL[index.min(Self::max_index())]
    }

    /// Next tier up, or `None` at the ceiling
    pub fn step_up(self) -> Option<ViewDistance> {
        if self.index() < Self::max_index() {
            Some(Self::ALL[self.index() + 1])
        } else {
            None
        }
    }

    /// Next tier down, or `None` at the floor
    pub fn step_down(self) -> Option<ViewDistance> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    /// Streaming radius in chunks for this tier
    pub fn chunk_radius(self) -> u32 {
        match self {
            ViewDistance::Near => 4,
            ViewDistance::Moderate => 8,
            ViewDistance::Far => 16,
            ViewDistance::Ultra => 24,
            ViewDistance::Mega => 32,
            ViewDistance::Extreme => 48,
        }
    }

    /// Translation key for the tier's display name
    pub fn display_key(self) -> &'static str {
        match self {
            ViewDistance::Near => "view-distance-near",
            ViewDistance::Moderate => "view-distance-moderate",
            ViewDistance::Far => "view-distance-far",
            ViewDistance::Ultra => "view-distance-ultra",
            ViewDistance::Mega => "view-distance-mega",
            ViewDistance::Extreme => "view-distance-extreme",
        }
    }

    /// The two heaviest tiers warrant a performance warning when selected
    pub fn performance_warning(self) -> bool {
        matches!(self, ViewDistance::Mega | ViewDistance::Extreme)
    }
}

/// Rendering settings shared by the whole client
#[derive(Debug, Clone)]
pub struct RenderingSettings {
    view_distance: ViewDistance,
    debug: RenderingDebugSettings,
}

impl RenderingSettings {
    pub fn view_distance(&self) -> ViewDistance {
        self.view_distance
    }

    pub fn set_view_distance(&mut self, view_distance: ViewDistance) {
        self.view_distance = view_distance;
    }

    pub fn debug(&self) -> &RenderingDebugSettings {
        &self.debug
    }

    pub fn debug_mut(&mut self) -> &mut RenderingDebugSettings {
        &mut self.debug
    }
}

impl Default for RenderingSettings {
    fn default() -> Self {
        Self {
            view_distance: ViewDistance::Moderate,
            debug: RenderingDebugSettings::default(),
        }
    }
}

/// Debug-rendering flags toggled at runtime from the debug controls
#[derive(Debug, Clone, Default)]
pub struct RenderingDebugSettings {
    enabled: bool,
    first_person_hidden: bool,
    hud_hidden: bool,
    render_chunk_bounding_boxes: bool,
    wireframe: bool,
}

impl RenderingDebugSettings {
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn first_person_hidden(&self) -> bool {
        self.first_person_hidden
    }

    pub fn set_first_person_hidden(&mut self, hidden: bool) {
        self.first_person_hidden = hidden;
    }

    pub fn hud_hidden(&self) -> bool {
        self.hud_hidden
    }

    pub fn set_hud_hidden(&mut self, hidden: bool) {
        self.hud_hidden = hidden;
    }

    pub fn render_chunk_bounding_boxes(&self) -> bool {
        self.render_chunk_bounding_boxes
    }

    pub fn set_render_chunk_bounding_boxes(&mut self, render: bool) {
        self.render_chunk_bounding_boxes = render;
    }

    pub fn wireframe(&self) -> bool {
        self.wireframe
    }

    pub fn set_wireframe(&mut self, wireframe: bool) {
        self.wireframe = wireframe;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_order() {
        for (i, tier) in ViewDistance::ALL.iter().enumerate() {
            assert_eq!(tier.index(), i);
            assert_eq!(ViewDistance::for_index(i), *tier);
        }
    }

    #[test]
    fn test_for_index_clamps() {
        assert_eq!(ViewDistance::for_index(99), ViewDistance::Extreme);
        assert_eq!(ViewDistance::for_index(0), ViewDistance::Near);
    }

    #[test]
    fn test_step_up_clamps_at_ceiling() {
        assert_eq!(ViewDistance::Ultra.step_up(), Some(ViewDistance::Mega));
        assert_eq!(ViewDistance::Extreme.step_up(), None);
    }

    #[test]
    fn test_step_down_clamps_at_floor() {
        assert_eq!(ViewDistance::Moderate.step_down(), Some(ViewDistance::Near));
        assert_eq!(ViewDistance::Near.step_down(), None);
    }

    #[test]
    fn test_ordering_matches_index() {
        assert!(ViewDistance::Near < ViewDistance::Moderate);
        assert!(ViewDistance::Mega < ViewDistance::Extreme);
    }

    #[test]
    fn test_warning_tiers() {
        let warning: Vec<_> = ViewDistance::ALL
            .iter()
            .filter(|tier| tier.performance_warning())
            .collect();
        assert_eq!(warning, [&ViewDistance::Mega, &ViewDistance::Extreme]);
    }

    #[test]
    fn test_chunk_radius_is_monotonic() {
        for pair in ViewDistance::ALL.windows(2) {
            assert!(pair[0].chunk_radius() < pair[1].chunk_radius());
        }
    }

    #[test]
    fn test_debug_flags_default_off() {
        let debug = RenderingDebugSettings::default();
        assert!(!debug.enabled());
        assert!(!debug.hud_hidden());
        assert!(!debug.first_person_hidden());
        assert!(!debug.render_chunk_bounding_boxes());
        assert!(!debug.wireframe());
    }

    #[test]
    fn test_view_distance_get_mirrors_set() {
        let mut rendering = RenderingSettings::default();
        assert_eq!(rendering.view_distance(), ViewDistance::Moderate);

        rendering.set_view_distance(ViewDistance::Far);
        assert_eq!(rendering.view_distance(), ViewDistance::Far);
    }
}
