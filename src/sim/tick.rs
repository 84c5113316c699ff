//! Simulation tick
//!
//! Advances the game by the wall-clock time the host measured since the last
//! call. Owns the Stopped/Playing gate: nothing moves until a start key is
//! held, and a goal drops the game back to Stopped.

use super::ai;
use super::collision::Collision;
use super::state::{GameEvent, GamePhase, GameState, Side};
use crate::consts::MAX_ELAPSED_MS;
use crate::input::InputState;

/// Per-session knobs that shape how a tick is applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOptions {
    /// Let the AI drive the player paddle instead of the keyboard
    pub autopilot: bool,
    /// Longest elapsed time integrated in one tick
    pub max_elapsed_ms: f32,
}

impl Default for TickOptions {
    fn default() -> Self {
        Self {
            autopilot: false,
            max_elapsed_ms: MAX_ELAPSED_MS,
        }
    }
}

/// Negative or non-finite elapsed times become 0; long stalls are capped
pub fn sanitize_elapsed(elapsed_ms: f32, max_elapsed_ms: f32) -> f32 {
    if !elapsed_ms.is_finite() || elapsed_ms <= 0.0 {
        return 0.0;
    }
    elapsed_ms.min(max_elapsed_ms.max(0.0))
}

/// Advance the game state by `elapsed_ms`
pub fn tick(state: &mut GameState, input: &InputState, elapsed_ms: f32, opts: &TickOptions) {
    let elapsed_ms = sanitize_elapsed(elapsed_ms, opts.max_elapsed_ms);
    state.clear_events();

    if state.phase == GamePhase::Stopped && input.start_requested() {
        state.start_round();
        log::info!(
            "Round {} served (vel {:.2}, {:.2})",
            state.round,
            state.ball.vel.x,
            state.ball.vel.y
        );
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ms += f64::from(elapsed_ms);

    // Fixed order: player, enemy, ball
    if opts.autopilot {
        ai::update(&mut state.player, &state.ball, elapsed_ms);
    } else {
        state.player.update(elapsed_ms, input);
    }
    ai::update(&mut state.enemy, &state.ball, elapsed_ms);

    match state.ball.update(elapsed_ms, &state.player, &state.enemy) {
        Collision::None => {}
        Collision::Paddle(side) => {
            log::debug!("Ball hit {:?} paddle", side);
            state.push_event(GameEvent::PaddleHit { side });
        }
        Collision::Wall => {
            log::debug!("Ball bounced off wall");
            state.push_event(GameEvent::WallBounce);
        }
        Collision::Goal(scorer) => {
            state.score_goal(scorer);
            let who = match scorer {
                Side::Left => "Player",
                Side::Right => "Enemy",
            };
            log::info!(
                "{} scores ({} - {})",
                who,
                state.player.score,
                state.enemy.score
            );
        }
    }
}
