//! Rendering
//!
//! Renderers only read a [`Frame`]; nothing flows back into the simulation.

pub mod text;

pub use text::TextRenderer;

use crate::sim::Frame;

/// Consumes one frame of world state per tick
pub trait Renderer {
    fn render(&mut self, frame: &Frame<'_>);
}
