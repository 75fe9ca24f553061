use super::{Rect, Vec2};

/// Viewport size in logical pixels.
///
/// Renderers treat this as the coordinate basis for converting logical px
/// positions to NDC in shaders. It also maps the +Y-up unit square used for
/// clock geometry (`[-1, 1]` on both axes) onto logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    #[inline]
    pub fn bounds(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Maps a point from unit space (+Y up, `[-1, 1]` spans the viewport) to logical pixels.
    #[inline]
    pub fn unit_to_logical(self, p: Vec2) -> Vec2 {
        Vec2::new(
            (p.x + 1.0) * 0.5 * self.width,
            (1.0 - p.y) * 0.5 * self.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_origin_maps_to_center() {
        let vp = Viewport::new(600.0, 600.0);
        assert_eq!(vp.unit_to_logical(Vec2::zero()), Vec2::new(300.0, 300.0));
    }

    #[test]
    fn unit_top_left_maps_to_pixel_origin() {
        let vp = Viewport::new(800.0, 400.0);
        assert_eq!(vp.unit_to_logical(Vec2::new(-1.0, 1.0)), Vec2::new(0.0, 0.0));
        assert_eq!(vp.unit_to_logical(Vec2::new(1.0, -1.0)), Vec2::new(800.0, 400.0));
    }
}
