//! Rendering module
//!
//! The game never talks to a graphics API directly. It issues a handful of
//! flat 2D draw calls against a `DrawSurface`; the browser build backs that
//! with a canvas 2D context, tests and the native runner record the calls.

pub mod digits;
pub mod scene;

use glam::Vec2;
use serde::{Deserialize, Serialize};

pub use digits::{DIGIT_MASKS, draw_number};
pub use scene::render_scene;

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// CSS color string (`#rrggbb`, or `rgba(...)` when translucent)
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {:.3})",
                self.r,
                self.g,
                self.b,
                f32::from(self.a) / 255.0
            )
        }
    }
}

/// Something that accepts 2D draw calls
pub trait DrawSurface {
    /// Solid rectangle, top-left at `pos`
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color);

    /// Straight line of the given width
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color);

    /// Rectangle outline, top-left at `pos`
    fn stroke_rect(&mut self, pos: Vec2, size: Vec2, width: f32, color: Color);
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    FillRect {
        pos: Vec2,
        size: Vec2,
        color: Color,
    },
    StrokeLine {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
    },
    StrokeRect {
        pos: Vec2,
        size: Vec2,
        width: f32,
        color: Color,
    },
}

/// Surface that just records what it was asked to draw
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Every filled rect, in draw order
    pub fn filled_rects(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::FillRect { pos, size, .. } => Some((*pos, *size)),
            _ => None,
        })
    }
}

impl DrawSurface for DrawList {
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCommand::FillRect { pos, size, color });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.commands.push(DrawCommand::StrokeLine {
            from,
            to,
            width,
            color,
        });
    }

    fn stroke_rect(&mut self, pos: Vec2, size: Vec2, width: f32, color: Color) {
        self.commands.push(DrawCommand::StrokeRect {
            pos,
            size,
            width,
            color,
        });
    }
}
