//! Simulation module
//!
//! All gameplay logic lives here:
//! - Time-based updates (elapsed milliseconds measured by the host)
//! - Seeded RNG only, so a seed replays the same serves
//! - Fixed update order (player, enemy, ball)
//! - No rendering or platform dependencies

pub mod ai;
pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Collision, ball_paddle_collision, resolve_ball};
pub use state::{Ball, GameEvent, GamePhase, GameState, Paddle, Rect, Side};
pub use tick::{TickOptions, sanitize_elapsed, tick};
