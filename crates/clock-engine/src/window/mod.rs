//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the clock window, wires them to the GPU
//! layer, and drives the periodic timer.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
pub use winit::dpi::{LogicalPosition, LogicalSize};
