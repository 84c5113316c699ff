//! Platform abstraction layer
//!
//! Browser-side glue: a canvas 2D `DrawSurface` and page set-up. The native
//! build has no window and renders into a `DrawList` instead.

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Milliseconds between two clock readings, never negative
pub fn elapsed_between(last_ms: f64, now_ms: f64) -> f32 {
    if now_ms > last_ms {
        (now_ms - last_ms) as f32
    } else {
        0.0
    }
}
