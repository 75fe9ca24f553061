//! GPU rendering subsystem.
//!
//! Renderers consume `scene` draw streams and issue GPU commands via wgpu.
//! Each renderer is responsible for its own GPU resources (pipelines, buffers).
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - Vertex shaders convert to NDC using a viewport uniform at `@group(0) @binding(0)`.

mod compositor;
mod ctx;
pub mod shapes;

pub use compositor::Compositor;
pub use ctx::{RenderCtx, RenderTarget};
