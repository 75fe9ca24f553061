//! Paint model shared between the clock face and renderers.
//!
//! Colors are linear premultiplied alpha. Gradients are expressed as
//! per-vertex colors on polygons rather than as a separate paint source.

pub mod color;

pub use color::Color;
