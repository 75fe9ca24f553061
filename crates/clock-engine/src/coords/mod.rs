//! Coordinate and geometry types shared across renderers and the clock face.
//!
//! Canonical CPU space for draw commands:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Renderers convert to NDC in shaders using a viewport uniform. Clock geometry
//! is generated in its own +Y-up space and mapped through [`Viewport`] before
//! it is recorded.

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
