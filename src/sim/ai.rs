//! Opponent AI
//!
//! Reacts only to incoming balls: projects the ball along a straight line to
//! the paddle's plane (no wall reflections) and slides toward that point.

use super::state::{Ball, Paddle};
use crate::consts::{AI_DEAD_ZONE, AI_SPEED};

/// Where the ball's top edge will be when it reaches this paddle's facing
/// edge, if it is heading this way
pub fn project_target_y(paddle: &Paddle, ball: &Ball) -> Option<f32> {
    let vel = ball.scaled_vel();
    if vel.x * paddle.side.direction() <= 0.0 {
        // Moving away (or at rest): nothing to do
        return None;
    }

    let leading_edge = if vel.x > 0.0 {
        ball.rect.right()
    } else {
        ball.rect.left()
    };
    let remaining = (paddle.facing_edge() - leading_edge).abs();
    let impact_time = remaining / vel.x.abs();

    Some(ball.rect.top() + vel.y * impact_time)
}

/// Advance an AI-controlled paddle. Returns true if it moved.
pub fn update(paddle: &mut Paddle, ball: &Ball, elapsed_ms: f32) -> bool {
    let Some(target_y) = project_target_y(paddle, ball) else {
        return false;
    };

    let center_y = paddle.rect.center().y;
    if (target_y - center_y).abs() < AI_DEAD_ZONE {
        return false;
    }

    let speed = if target_y < center_y { -AI_SPEED } else { AI_SPEED };
    let before = paddle.rect.pos.y;
    paddle.move_by(speed * elapsed_ms);
    paddle.rect.pos.y != before
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Side;
    use glam::Vec2;

    fn ball_at(x: f32, y: f32, vel: Vec2) -> Ball {
        let mut ball = Ball::new();
        ball.rect.pos = Vec2::new(x, y);
        ball.vel = vel;
        ball
    }

    #[test]
    fn test_idle_when_ball_moves_away() {
        let mut enemy = Paddle::new(Side::Right);
        let ball = ball_at(400.0, 20.0, Vec2::new(-2.0, 0.0));
        assert_eq!(project_target_y(&enemy, &ball), None);
        assert!(!update(&mut enemy, &ball, 10.0));
        assert_eq!(enemy.rect.pos, enemy.home());
    }

    #[test]
    fn test_idle_when_ball_at_rest() {
        let enemy = Paddle::new(Side::Right);
        let ball = Ball::new();
        assert_eq!(project_target_y(&enemy, &ball), None);
    }

    #[test]
    fn test_tracks_incoming_ball() {
        let mut enemy = Paddle::new(Side::Right);
        // 485 units to cover at 0.5 units/ms -> 970 ms, drifting 0.25 units/ms down
        let ball = ball_at(100.0, 233.0, Vec2::new(2.0, 1.0));

        let target = project_target_y(&enemy, &ball).unwrap();
        assert!((target - (233.0 + 242.5)).abs() < 1e-3);

        assert!(update(&mut enemy, &ball, 10.0));
        assert!((enemy.rect.pos.y - 202.5).abs() < 1e-4);
    }

    #[test]
    fn test_moves_up_toward_high_target() {
        let mut enemy = Paddle::new(Side::Right);
        let ball = ball_at(100.0, 233.0, Vec2::new(2.0, -1.0));
        assert!(update(&mut enemy, &ball, 10.0));
        assert!((enemy.rect.pos.y - 197.5).abs() < 1e-4);
    }

    #[test]
    fn test_dead_zone() {
        let mut enemy = Paddle::new(Side::Right);
        // Paddle center is 250; ball flies level with its top at 245
        let ball = ball_at(100.0, 245.0, Vec2::new(2.0, 0.0));
        assert_eq!(project_target_y(&enemy, &ball), Some(245.0));
        assert!(!update(&mut enemy, &ball, 10.0));
        assert_eq!(enemy.rect.pos, enemy.home());
    }

    #[test]
    fn test_aims_from_ball_top_edge() {
        let mut enemy = Paddle::new(Side::Right);
        // Top at 238 is 12 units above the paddle center, outside the dead-zone
        let ball = ball_at(100.0, 238.0, Vec2::new(2.0, 0.0));
        assert_eq!(project_target_y(&enemy, &ball), Some(238.0));
        assert!(update(&mut enemy, &ball, 10.0));
        assert!((enemy.rect.pos.y - 197.5).abs() < 1e-4);
    }

    #[test]
    fn test_left_side_tracks_leftward_ball() {
        let mut player = Paddle::new(Side::Left);
        let ball = ball_at(500.0, 100.0, Vec2::new(-2.0, 0.0));
        let target = project_target_y(&player, &ball).unwrap();
        assert!((target - 100.0).abs() < 1e-4);
        assert!(update(&mut player, &ball, 10.0));
        assert!(player.rect.pos.y < 200.0);

        let away = ball_at(500.0, 100.0, Vec2::new(2.0, 0.0));
        assert_eq!(project_target_y(&player, &away), None);
    }

    #[test]
    fn test_clamped_at_field_edge() {
        let mut enemy = Paddle::new(Side::Right);
        enemy.rect.pos.y = 0.0;
        let ball = ball_at(100.0, 0.0, Vec2::new(2.0, -2.0));
        assert!(!update(&mut enemy, &ball, 10.0));
        assert_eq!(enemy.rect.pos.y, 0.0);
    }
}
