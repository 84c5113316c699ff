//! Collision detection and response
//!
//! Runs right after the ball has moved and been clamped. At most one outcome
//! is produced per tick: a paddle hit short-circuits the wall checks, and the
//! wall checks form a single chain so a ball never scores and bounces at once.

use serde::{Deserialize, Serialize};

use super::state::{Ball, Paddle, Side};
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};

/// Result of resolving the ball against paddles and walls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    None,
    /// Ball bounced off the paddle on this side
    Paddle(Side),
    /// Ball reached a side boundary; carries the side that scores
    Goal(Side),
    /// Ball bounced off the top or bottom wall
    Wall,
}

/// Resolve the ball against both paddles and the field walls
pub fn resolve_ball(ball: &mut Ball, player: &Paddle, enemy: &Paddle) -> Collision {
    for paddle in [player, enemy] {
        if ball_paddle_collision(ball, paddle) {
            return Collision::Paddle(paddle.side);
        }
    }

    let rect = &ball.rect;
    if rect.left() <= 0.0 {
        Collision::Goal(Side::Right)
    } else if rect.right() >= FIELD_WIDTH {
        Collision::Goal(Side::Left)
    } else if rect.top() <= 0.0 || rect.bottom() >= FIELD_HEIGHT {
        ball.vel.y = -ball.vel.y;
        Collision::Wall
    } else {
        Collision::None
    }
}

/// Reflect the ball off a paddle it overlaps, placing it flush against the
/// facing edge so it cannot stick inside. Returns whether it hit.
pub fn ball_paddle_collision(ball: &mut Ball, paddle: &Paddle) -> bool {
    if !ball.rect.overlaps(&paddle.rect) {
        return false;
    }

    ball.vel.x = -ball.vel.x;
    ball.rect.pos.x = match paddle.side {
        Side::Left => paddle.facing_edge(),
        Side::Right => paddle.facing_edge() - ball.rect.size.x,
    };
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn paddles() -> (Paddle, Paddle) {
        (Paddle::new(Side::Left), Paddle::new(Side::Right))
    }

    fn ball_at(x: f32, y: f32, vel: Vec2) -> Ball {
        let mut ball = Ball::new();
        ball.rect.pos = Vec2::new(x, y);
        ball.vel = vel;
        ball
    }

    #[test]
    fn test_player_paddle_reflects_and_repositions() {
        let (player, enemy) = paddles();
        // Overlapping the player's right edge (40) while moving left
        let mut ball = ball_at(35.0, 250.0, Vec2::new(-2.0, 1.0));

        let result = resolve_ball(&mut ball, &player, &enemy);
        assert_eq!(result, Collision::Paddle(Side::Left));
        assert_eq!(ball.vel, Vec2::new(2.0, 1.0));
        assert_eq!(ball.rect.left(), player.rect.right());
    }

    #[test]
    fn test_enemy_paddle_reflects_and_repositions() {
        let (player, enemy) = paddles();
        let mut ball = ball_at(590.0, 190.0, Vec2::new(2.0, -0.5));

        let result = resolve_ball(&mut ball, &player, &enemy);
        assert_eq!(result, Collision::Paddle(Side::Right));
        assert_eq!(ball.vel.x, -2.0);
        assert_eq!(ball.rect.right(), enemy.rect.left());
    }

    #[test]
    fn test_touching_edge_counts() {
        let (player, enemy) = paddles();
        // Ball's bottom edge exactly on the paddle's top edge
        let mut ball = ball_at(30.0, 185.0, Vec2::new(-2.0, 0.0));
        assert_eq!(
            resolve_ball(&mut ball, &player, &enemy),
            Collision::Paddle(Side::Left)
        );
    }

    #[test]
    fn test_paddle_hit_skips_wall_checks() {
        let (mut player, enemy) = paddles();
        // Paddle pinned to the top; ball in the corner touching both
        player.rect.pos.y = 0.0;
        let mut ball = ball_at(30.0, 0.0, Vec2::new(-2.0, -1.0));

        let result = resolve_ball(&mut ball, &player, &enemy);
        assert_eq!(result, Collision::Paddle(Side::Left));
        // vy untouched: only one response per tick
        assert_eq!(ball.vel.y, -1.0);
    }

    #[test]
    fn test_left_goal_scores_for_enemy() {
        let (player, enemy) = paddles();
        let mut ball = ball_at(0.0, 50.0, Vec2::new(-2.0, 1.0));
        assert_eq!(
            resolve_ball(&mut ball, &player, &enemy),
            Collision::Goal(Side::Right)
        );
        assert_eq!(ball.vel, Vec2::new(-2.0, 1.0));
    }

    #[test]
    fn test_right_goal_scores_for_player() {
        let (player, enemy) = paddles();
        let mut ball = ball_at(FIELD_WIDTH - 15.0, 420.0, Vec2::new(2.0, 0.0));
        assert_eq!(
            resolve_ball(&mut ball, &player, &enemy),
            Collision::Goal(Side::Left)
        );
    }

    #[test]
    fn test_goal_takes_priority_over_bounce() {
        let (player, enemy) = paddles();
        let mut ball = ball_at(0.0, 0.0, Vec2::new(-2.0, -2.0));
        assert_eq!(
            resolve_ball(&mut ball, &player, &enemy),
            Collision::Goal(Side::Right)
        );
        assert_eq!(ball.vel.y, -2.0);
    }

    #[test]
    fn test_top_and_bottom_bounce() {
        let (player, enemy) = paddles();

        let mut ball = ball_at(300.0, 0.0, Vec2::new(2.0, -1.5));
        assert_eq!(resolve_ball(&mut ball, &player, &enemy), Collision::Wall);
        assert_eq!(ball.vel, Vec2::new(2.0, 1.5));

        let mut ball = ball_at(300.0, FIELD_HEIGHT - 15.0, Vec2::new(-2.0, 1.5));
        assert_eq!(resolve_ball(&mut ball, &player, &enemy), Collision::Wall);
        assert_eq!(ball.vel, Vec2::new(-2.0, -1.5));
    }

    #[test]
    fn test_open_court_no_collision() {
        let (player, enemy) = paddles();
        let mut ball = ball_at(300.0, 200.0, Vec2::new(2.0, 1.0));
        assert_eq!(resolve_ball(&mut ball, &player, &enemy), Collision::None);
        assert_eq!(ball.vel, Vec2::new(2.0, 1.0));
    }
}
