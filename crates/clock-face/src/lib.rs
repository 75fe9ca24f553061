//! Analog clock face.
//!
//! Geometry is generated in clock space (origin at the window center, +Y up,
//! `[-1, 1]` across the window) from an explicit [`ClockConfig`], then
//! recorded into the engine's draw list in logical pixels by the [`Composer`].

pub mod app;
pub mod compose;
pub mod context_menu;
pub mod geometry;
pub mod hands;
pub mod menu;
pub mod options;
pub mod wall_time;

pub use app::{ClockApp, CLEAR_COLOR};
pub use compose::Composer;
pub use menu::{MenuCategory, MenuOption, MenuOutcome};
pub use options::{ClockColor, ClockConfig, ClockShape, ClockSize, DigitsMode};
pub use wall_time::WallTime;
