//! Shape renderers.

mod common;

pub mod polygon;
pub mod text;
