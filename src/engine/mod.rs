// Engine modules: configuration, events, input, UI, world state

pub mod config;
pub mod events;
pub mod i18n;
pub mod input;
pub mod ui;
pub mod world;

use config::Config;
use events::EventBus;
use i18n::Translations;
use input::PointerGrab;
use ui::UiManager;
use world::WorldTime;

/// Shared state handed to input handlers during dispatch
///
/// Owned by the client shell and passed by mutable reference. Everything is
/// accessed from the main dispatch thread only, so no locking is involved.
pub struct EngineContext {
    pub config: Config,
    pub time: WorldTime,
    pub ui: UiManager,
    pub bus: EventBus,
    pub i18n: Translations,
    pub pointer: Box<dyn PointerGrab>,
}

impl EngineContext {
    pub fn new(pointer: Box<dyn PointerGrab>) -> Self {
        Self {
            config: Config::new(),
            time: WorldTime::default(),
            ui: UiManager::new(),
            bus: EventBus::new(),
            i18n: Translations::with_defaults(),
            pointer,
        }
    }
}
