//! Scene pass: court, scores, paddles, ball

use glam::Vec2;

use super::digits::draw_number;
use super::{Color, DrawSurface};
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::sim::{GameState, Rect};

/// Width of the court markings
pub const LINE_WIDTH: f32 = 2.0;
/// Side of the square marked around center court
pub const CENTER_BOX_SIZE: f32 = 50.0;

/// Scoreboard anchors (top-left of the first digit)
pub const PLAYER_SCORE_POS: Vec2 = Vec2::new(FIELD_WIDTH / 2.0 - 100.0, 10.0);
pub const ENEMY_SCORE_POS: Vec2 = Vec2::new(FIELD_WIDTH / 2.0 + 80.0, 10.0);

/// Draw one full frame of the current state
pub fn render_scene<S: DrawSurface + ?Sized>(state: &GameState, surface: &mut S) {
    let field = Vec2::new(FIELD_WIDTH, FIELD_HEIGHT);
    surface.fill_rect(Vec2::ZERO, field, Color::BLACK);

    // Court markings
    let mid_x = FIELD_WIDTH / 2.0;
    surface.stroke_line(
        Vec2::new(mid_x, 0.0),
        Vec2::new(mid_x, FIELD_HEIGHT),
        LINE_WIDTH,
        Color::WHITE,
    );
    let box_size = Vec2::splat(CENTER_BOX_SIZE);
    surface.stroke_rect(field / 2.0 - box_size / 2.0, box_size, LINE_WIDTH, Color::WHITE);

    draw_number(surface, state.player.score, PLAYER_SCORE_POS, Color::WHITE);
    draw_number(surface, state.enemy.score, ENEMY_SCORE_POS, Color::WHITE);

    for rect in [&state.player.rect, &state.enemy.rect, &state.ball.rect] {
        draw_entity(surface, rect);
    }
}

/// Entities snap to whole units
fn draw_entity<S: DrawSurface + ?Sized>(surface: &mut S, rect: &Rect) {
    surface.fill_rect(rect.pos.trunc(), rect.size, Color::WHITE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, DrawList};

    #[test]
    fn test_frame_layout() {
        let state = GameState::new(1);
        let mut list = DrawList::new();
        render_scene(&state, &mut list);

        assert_eq!(
            list.commands[0],
            DrawCommand::FillRect {
                pos: Vec2::ZERO,
                size: Vec2::new(640.0, 480.0),
                color: Color::BLACK,
            }
        );
        assert_eq!(
            list.commands[1],
            DrawCommand::StrokeLine {
                from: Vec2::new(320.0, 0.0),
                to: Vec2::new(320.0, 480.0),
                width: 2.0,
                color: Color::WHITE,
            }
        );
        assert_eq!(
            list.commands[2],
            DrawCommand::StrokeRect {
                pos: Vec2::new(295.0, 215.0),
                size: Vec2::new(50.0, 50.0),
                width: 2.0,
                color: Color::WHITE,
            }
        );

        // Background + line + box + two "0" glyphs (12 cells each) + 3 entities
        assert_eq!(list.len(), 3 + 24 + 3);

        let entities: Vec<_> = list.filled_rects().skip(1 + 24).collect();
        assert_eq!(
            entities,
            vec![
                (Vec2::new(25.0, 200.0), Vec2::new(15.0, 100.0)),
                (Vec2::new(600.0, 200.0), Vec2::new(15.0, 100.0)),
                (Vec2::new(313.0, 233.0), Vec2::new(15.0, 15.0)),
            ]
        );
    }

    #[test]
    fn test_scores_drawn_at_anchors() {
        let mut state = GameState::new(1);
        state.player.score = 1;
        state.enemy.score = 7;
        let mut list = DrawList::new();
        render_scene(&state, &mut list);

        let cells: Vec<_> = list.filled_rects().skip(1).collect();
        // "1" lights (1,0) first; "7" lights (0,0) first
        assert_eq!(cells[0].0, Vec2::new(225.0, 10.0));
        assert_eq!(cells[7].0, Vec2::new(400.0, 10.0));
    }

    #[test]
    fn test_positions_truncated() {
        let mut state = GameState::new(1);
        state.ball.rect.pos = Vec2::new(100.9, 50.2);
        let mut list = DrawList::new();
        render_scene(&state, &mut list);

        let (pos, _) = list.filled_rects().last().unwrap();
        assert_eq!(pos, Vec2::new(100.0, 50.0));
    }
}
