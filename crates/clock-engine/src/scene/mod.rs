//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - provide deterministic ordering (z-index + insertion order)
//! - split the paint order into same-renderer runs
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod key;
mod list;

pub mod shapes;

pub use cmd::{DrawCmd, DrawKind};
pub use key::{SortKey, ZIndex};
pub use list::{DrawItem, DrawList, DrawRun};
pub use shapes::polygon::{PolygonCmd, PolygonVertex};
pub use shapes::text::TextCmd;
