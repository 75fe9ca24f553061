//! Shader program loading.
//!
//! A program is two WGSL files (vertex + fragment) read from disk at startup,
//! parsed and validated with naga, and checked for a matching stage interface.
//! Any failure is a [`ShaderError`] the caller treats as fatal.

mod error;
mod program;

pub use error::{ShaderError, Stage};
pub use program::{ShaderProgram, StageSource};
