use std::fmt;
use std::path::PathBuf;

/// Pipeline stage a shader source belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Stage {
    Vertex,
    Fragment,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Vertex => f.write_str("vertex"),
            Stage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Failure to turn two shader files into a usable program.
///
/// Every variant is fatal for the clock; the diagnostic text is meant to be
/// logged verbatim before exiting.
#[derive(Debug)]
pub enum ShaderError {
    /// The source file could not be read.
    Open {
        stage: Stage,
        path: PathBuf,
        source: std::io::Error,
    },

    /// WGSL parsing or validation failed. `diagnostic` is the rendered compiler report.
    Compile {
        stage: Stage,
        path: PathBuf,
        diagnostic: String,
    },

    /// Both stages compiled but do not fit together.
    Link(String),
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::Open { stage, path, .. } => {
                write!(f, "failed to open {stage} shader file - {}", path.display())
            }
            ShaderError::Compile { stage, path, diagnostic } => {
                write!(f, "failed to compile {stage} shader - {}\n{diagnostic}", path.display())
            }
            ShaderError::Link(reason) => write!(f, "failed to link shader program: {reason}"),
        }
    }
}

impl std::error::Error for ShaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShaderError::Open { source, .. } => Some(source),
            _ => None,
        }
    }
}
