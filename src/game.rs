//! Host-facing game facade
//!
//! Bundles simulation state, held keys and settings behind the three calls a
//! host needs: key down, key up, and tick. Events only cover the latest tick,
//! so hosts that care about them drain after every tick.

use crate::input::InputState;
use crate::renderer::{DrawSurface, render_scene};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickOptions, tick};

/// Game instance holding all state
#[derive(Debug, Clone)]
pub struct Game {
    pub state: GameState,
    pub input: InputState,
    options: TickOptions,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        Self::with_settings(seed, &Settings::default())
    }

    pub fn with_settings(seed: u64, settings: &Settings) -> Self {
        Self {
            state: GameState::new(seed),
            input: InputState::new(),
            options: settings.tick_options(),
        }
    }

    pub fn options(&self) -> &TickOptions {
        &self.options
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.options.autopilot = enabled;
    }

    /// Keydown handler. Returns false for keys the game does not use, so the
    /// host can leave their default behavior alone.
    pub fn on_key_down(&mut self, code: u32) -> bool {
        self.input.on_key_down(code)
    }

    /// Keyup handler, same contract as `on_key_down`
    pub fn on_key_up(&mut self, code: u32) -> bool {
        self.input.on_key_up(code)
    }

    /// Keydown handler for DOM `KeyboardEvent.key` values
    pub fn on_dom_key_down(&mut self, key: &str) -> bool {
        self.input.on_dom_key_down(key)
    }

    /// Keyup handler for DOM `KeyboardEvent.key` values
    pub fn on_dom_key_up(&mut self, key: &str) -> bool {
        self.input.on_dom_key_up(key)
    }

    /// Release every key (window lost focus)
    pub fn release_all(&mut self) {
        self.input.clear();
    }

    /// Advance by `elapsed_ms` and draw the resulting frame
    pub fn tick<S: DrawSurface + ?Sized>(&mut self, elapsed_ms: f32, surface: &mut S) {
        self.update(elapsed_ms);
        self.render(surface);
    }

    /// Advance the simulation only
    pub fn update(&mut self, elapsed_ms: f32) {
        tick(&mut self.state, &self.input, elapsed_ms, &self.options);
    }

    /// Draw the current state only
    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        render_scene(&self.state, surface);
    }

    /// Events from the latest tick; older ones are dropped by the next tick
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }
}
