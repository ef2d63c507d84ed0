//! Rendering module
//!
//! `scene` builds draw primitives from the game state; `canvas` paints them
//! with the Canvas2D API (WASM only).

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasPainter;
pub use scene::{Backdrop, Scene, ShipSprite, StarSprite, StarStyle};
