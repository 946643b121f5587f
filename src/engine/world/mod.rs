// World-side state consumed by the debug controls

/// Continuous world clock measured in in-game days
///
/// Fractional values are meaningful: 0.5 is noon of day zero. The debug
/// controls scrub this directly; the world simulation owns the normal
/// advance.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorldTime {
    days: f32,
}

impl WorldTime {
    pub fn new(days: f32) -> Self {
        Self { days }
    }

    pub fn days(&self) -> f32 {
        self.days
    }

    pub fn set_days(&mut self, days: f32) {
        self.days = days;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_get_mirrors_set() {
        let mut time = WorldTime::new(1.5);
        assert_relative_eq!(time.days(), 1.5);

        time.set_days(2.25);
        assert_relative_eq!(time.days(), 2.25);
    }

    #[test]
    fn test_negative_days_allowed() {
        // Scrubbing backwards past day zero is legal; wrapping is the
        // simulation's concern.
        let mut time = WorldTime::default();
        time.set_days(-0.02);
        assert_relative_eq!(time.days(), -0.02);
    }
}
