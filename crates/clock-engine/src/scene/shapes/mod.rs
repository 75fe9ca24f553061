pub mod polygon;
pub mod text;
