//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in `GameState`, owned by the host.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{Collision, resolve_ball};
use crate::clamp_to_span;
use crate::consts::*;
use crate::input::{InputState, Key};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Entities frozen, waiting for a start key
    Stopped,
    /// Round in progress
    Playing,
}

/// Which end of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Sign of horizontal velocity that moves toward this side
    pub fn direction(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Axis-aligned rectangle, top-left origin, fixed size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Inclusive overlap test: touching edges count
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() <= other.right()
            && self.right() >= other.left()
            && self.top() <= other.bottom()
            && self.bottom() >= other.top()
    }

    /// Clamp position so the rect lies inside the field
    pub fn keep_in_bounds(&mut self) {
        self.pos.x = clamp_to_span(self.pos.x, FIELD_WIDTH - self.size.x);
        self.pos.y = clamp_to_span(self.pos.y, FIELD_HEIGHT - self.size.y);
    }
}

/// A paddle (player on the left, enemy on the right)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    pub side: Side,
    /// Points this session; survives round resets
    pub score: u32,
    home: Vec2,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        let x = match side {
            Side::Left => PLAYER_HOME_X,
            Side::Right => ENEMY_HOME_X,
        };
        let rect = Rect::new(x, PADDLE_HOME_Y, PADDLE_WIDTH, PADDLE_HEIGHT);
        Self {
            rect,
            side,
            score: 0,
            home: rect.pos,
        }
    }

    /// Return to the starting position (score untouched)
    pub fn reset(&mut self) {
        self.rect.pos = self.home;
    }

    pub fn home(&self) -> Vec2 {
        self.home
    }

    /// Edge the ball bounces off
    pub fn facing_edge(&self) -> f32 {
        match self.side {
            Side::Left => self.rect.right(),
            Side::Right => self.rect.left(),
        }
    }

    /// Shift vertically, then clamp to the field
    pub fn move_by(&mut self, dy: f32) {
        self.rect.pos.y += dy;
        self.rect.keep_in_bounds();
    }

    /// Keyboard-driven update: down wins over up
    pub fn update(&mut self, elapsed_ms: f32, input: &InputState) {
        if input.is_down(Key::Down) {
            self.move_by(PADDLE_SPEED * elapsed_ms);
        } else if input.is_down(Key::Up) {
            self.move_by(-PADDLE_SPEED * elapsed_ms);
        } else {
            self.rect.keep_in_bounds();
        }
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    /// Velocity in launch units; multiply by `BALL_VELOCITY_SCALE` for units/ms
    pub vel: Vec2,
    home: Vec2,
}

impl Default for Ball {
    fn default() -> Self {
        let home = Vec2::new(
            (FIELD_WIDTH / 2.0 - 7.0).floor(),
            (FIELD_HEIGHT / 2.0 - 7.0).floor(),
        );
        Self {
            rect: Rect::new(home.x, home.y, BALL_SIZE, BALL_SIZE),
            vel: Vec2::ZERO,
            home,
        }
    }
}

impl Ball {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to center court, at rest
    pub fn reset(&mut self) {
        self.rect.pos = self.home;
        self.vel = Vec2::ZERO;
    }

    pub fn home(&self) -> Vec2 {
        self.home
    }

    /// Serve: random horizontal direction, random vertical speed
    pub fn launch<R: Rng>(&mut self, rng: &mut R) {
        let vx = if rng.random_bool(0.5) {
            LAUNCH_SPEED_X
        } else {
            -LAUNCH_SPEED_X
        };
        let vy = rng.random_range(-LAUNCH_SPEED_Y_MAX..=LAUNCH_SPEED_Y_MAX);
        self.vel = Vec2::new(vx, vy);
    }

    /// Velocity in units/ms
    pub fn scaled_vel(&self) -> Vec2 {
        self.vel * BALL_VELOCITY_SCALE
    }

    /// Integrate, clamp, then resolve paddles and walls
    pub fn update(&mut self, elapsed_ms: f32, player: &Paddle, enemy: &Paddle) -> Collision {
        self.rect.pos += self.scaled_vel() * elapsed_ms;
        self.rect.keep_in_bounds();
        resolve_ball(self, player, enemy)
    }
}

/// Notable things that happened during a tick (for logging/audio hooks)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    RoundStarted { round: u32, vel: Vec2 },
    PaddleHit { side: Side },
    WallBounce,
    Goal {
        scorer: Side,
        player_score: u32,
        enemy_score: u32,
    },
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the RNG was built from
    pub seed: u64,
    pub phase: GamePhase,
    pub player: Paddle,
    pub enemy: Paddle,
    pub ball: Ball,
    /// Rounds served this session
    pub round: u32,
    /// Simulated milliseconds spent in play
    pub time_ms: f64,
    rng: Pcg32,
    /// Events of the latest tick only; `tick` clears them on entry
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            phase: GamePhase::Stopped,
            player: Paddle::new(Side::Left),
            enemy: Paddle::new(Side::Right),
            ball: Ball::new(),
            round: 0,
            time_ms: 0.0,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.player,
            Side::Right => &mut self.enemy,
        }
    }

    /// Serve the ball and switch to play
    pub fn start_round(&mut self) {
        self.ball.launch(&mut self.rng);
        self.round += 1;
        self.phase = GamePhase::Playing;
        self.push_event(GameEvent::RoundStarted {
            round: self.round,
            vel: self.ball.vel,
        });
    }

    /// Credit a goal, put everything back in place and stop
    pub fn score_goal(&mut self, scorer: Side) {
        self.paddle_mut(scorer).score += 1;
        self.reset_round();
        self.push_event(GameEvent::Goal {
            scorer,
            player_score: self.player.score,
            enemy_score: self.enemy.score,
        });
    }

    /// Entities back to their initial layout; scores kept
    pub fn reset_round(&mut self) {
        self.player.reset();
        self.enemy.reset();
        self.ball.reset();
        self.phase = GamePhase::Stopped;
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Forget events from the previous tick
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Take the events recorded during the latest tick
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
