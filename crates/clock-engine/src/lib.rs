//! Clock engine crate.
//!
//! Owns the platform + GPU runtime pieces used by the clock face: the winit
//! event loop with its fixed-interval ticker, the wgpu device and surface,
//! shader program loading, the draw list and the renderers that consume it.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
pub mod shader;
pub mod text;
