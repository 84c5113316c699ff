//! Scoreboard digits
//!
//! Each digit is a 4x4 bitmap packed into a u16, most significant bit first,
//! row-major. A set bit is drawn as one square cell.

use glam::Vec2;

use super::{Color, DrawSurface};
use crate::consts::DIGIT_PIXEL_SIZE;

/// Glyph bitmaps for 0-9
pub const DIGIT_MASKS: [u16; 10] = [
    0xf99f, 0x6227, 0xe24f, 0xf31f, 0x9f11, 0x742f, 0x8f9f, 0xf248, 0xff9f, 0xf9f1,
];

/// Cells per glyph row/column
pub const GLYPH_SIZE: u32 = 4;

/// Horizontal distance between consecutive digits, in cells (glyph + gap)
pub const GLYPH_ADVANCE: u32 = GLYPH_SIZE + 1;

/// Lit cells of a digit as (column, row), in bit order
pub fn glyph_cells(digit: u8) -> impl Iterator<Item = (u32, u32)> {
    let mask = DIGIT_MASKS[usize::from(digit % 10)];
    (0..GLYPH_SIZE * GLYPH_SIZE)
        .filter(move |bit| mask & (0x8000 >> bit) != 0)
        .map(|bit| (bit % GLYPH_SIZE, bit / GLYPH_SIZE))
}

/// Decimal digits of `number`, most significant first
pub fn decimal_digits(number: u32) -> Vec<u8> {
    number
        .to_string()
        .bytes()
        .map(|b| b - b'0')
        .collect()
}

/// Draw `number` with its top-left corner at `origin`
pub fn draw_number<S: DrawSurface + ?Sized>(
    surface: &mut S,
    number: u32,
    origin: Vec2,
    color: Color,
) {
    let cell = Vec2::splat(DIGIT_PIXEL_SIZE);
    for (place, digit) in decimal_digits(number).into_iter().enumerate() {
        let glyph_x = origin.x + (place as u32 * GLYPH_ADVANCE) as f32 * DIGIT_PIXEL_SIZE;
        for (col, row) in glyph_cells(digit) {
            let pos = Vec2::new(
                glyph_x + col as f32 * DIGIT_PIXEL_SIZE,
                origin.y + row as f32 * DIGIT_PIXEL_SIZE,
            );
            surface.fill_rect(pos, cell, color);
        }
    }
}
