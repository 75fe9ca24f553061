use crate::scene::shapes::polygon::PolygonCmd;
use crate::scene::shapes::text::TextCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here and in [`DrawKind`]
/// - add a matching renderer under `render::shapes::*` and wire it in the compositor
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Polygon(PolygonCmd),
    Text(TextCmd),
}

/// Which renderer consumes a command.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DrawKind {
    Polygon,
    Text,
}

impl DrawCmd {
    #[inline]
    pub fn kind(&self) -> DrawKind {
        match self {
            DrawCmd::Polygon(_) => DrawKind::Polygon,
            DrawCmd::Text(_) => DrawKind::Text,
        }
    }
}
