// Metrics overlay shown on top of the in-game view

/// What the metrics overlay currently displays
///
/// Cycled in declaration order; `Network` wraps back to `Off`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetricsMode {
    #[default]
    Off,
    Fps,
    RunningMeans,
    Spikes,
    Network,
}

impl MetricsMode {
    /// Next mode in the cycle
    pub fn next(self) -> Self {
        match self {
            MetricsMode::Off => MetricsMode::Fps,
            MetricsMode::Fps => MetricsMode::RunningMeans,
            MetricsMode::RunningMeans => MetricsMode::Spikes,
            MetricsMode::Spikes => MetricsMode::Network,
            MetricsMode::Network => MetricsMode::Off,
        }
    }
}

/// Overlay widget state for the debug metrics display
#[derive(Debug, Default)]
pub struct DebugOverlay {
    metrics_mode: MetricsMode,
}

impl DebugOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn metrics_mode(&self) -> MetricsMode {
        self.metrics_mode
    }

    /// Advance to the next metrics mode and return it
    pub fn toggle_metrics_mode(&mut self) -> MetricsMode {
        self.metrics_mode = self.metrics_mode.next();
        self.metrics_mode
    }
}
