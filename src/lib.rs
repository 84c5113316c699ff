//! Paddle Court - classic two-paddle Pong
//!
//! Core modules:
//! - `sim`: Simulation (entities, collisions, opponent AI, round state machine)
//! - `input`: Held-key tracking for the logical keys the game reacts to
//! - `renderer`: Draw-command boundary, digit glyphs and the scene pass
//! - `game`: Host-facing facade (key handlers + tick)
//! - `settings`: Host configuration (seed, timer cadence, autopilot)
//! - `platform`: Browser canvas surface

pub mod game;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use input::{InputState, Key};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Playing field dimensions (logical units, top-left origin)
    pub const FIELD_WIDTH: f32 = 640.0;
    pub const FIELD_HEIGHT: f32 = 480.0;

    /// Nominal host timer period
    pub const TICK_INTERVAL_MS: u32 = 10;
    /// Longest elapsed time a single tick will integrate
    pub const MAX_ELAPSED_MS: f32 = 100.0;

    /// Paddle size and home positions
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PLAYER_HOME_X: f32 = 25.0;
    pub const ENEMY_HOME_X: f32 = FIELD_WIDTH - 40.0;
    pub const PADDLE_HOME_Y: f32 = 200.0;

    /// Human paddle speed (units/ms)
    pub const PADDLE_SPEED: f32 = 0.35;
    /// AI paddle speed (units/ms) - a little slower than the human
    pub const AI_SPEED: f32 = 0.25;
    /// AI leaves the paddle alone when its aim is within this band
    pub const AI_DEAD_ZONE: f32 = 10.0;

    /// Ball size (square)
    pub const BALL_SIZE: f32 = 15.0;
    /// Converts ball velocity into units/ms
    pub const BALL_VELOCITY_SCALE: f32 = 0.25;
    /// Horizontal launch speed (sign picked at random)
    pub const LAUNCH_SPEED_X: f32 = 2.0;
    /// Vertical launch speed is uniform in [-MAX, MAX]
    pub const LAUNCH_SPEED_Y_MAX: f32 = 2.0;

    /// Scoreboard digit cell size
    pub const DIGIT_PIXEL_SIZE: f32 = 5.0;
}

/// Clamp a value into `[0, max]`, collapsing to 0 if `max` is negative
#[inline]
pub fn clamp_to_span(value: f32, max: f32) -> f32 {
    value.min(max).max(0.0)
}
