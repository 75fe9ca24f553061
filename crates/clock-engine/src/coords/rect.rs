use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= self.origin.x
            && p.y >= self.origin.y
            && p.x < self.origin.x + self.size.x
            && p.y < self.origin.y + self.size.y
    }

    #[inline]
    pub fn translated(self, offset: Vec2) -> Self {
        Self { origin: self.origin + offset, size: self.size }
    }

    /// Shifts the rectangle so it lies inside `bounds`, preferring to keep the
    /// top-left corner visible when it is larger than `bounds`.
    pub fn shifted_inside(self, bounds: Rect) -> Self {
        let bmax = bounds.max();
        let mut x = self.origin.x;
        let mut y = self.origin.y;

        if x + self.size.x > bmax.x {
            x = bmax.x - self.size.x;
        }
        if y + self.size.y > bmax.y {
            y = bmax.y - self.size.y;
        }

        Rect::new(x.max(bounds.origin.x), y.max(bounds.origin.y), self.size.x, self.size.y)
    }

    /// Corner points in clockwise screen order starting at the top-left.
    #[inline]
    pub fn corners(self) -> [Vec2; 4] {
        let max = self.max();
        [
            self.origin,
            Vec2::new(max.x, self.origin.y),
            max,
            Vec2::new(self.origin.x, max.y),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_top_left_inclusive() {
        assert!(r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn contains_bottom_right_exclusive() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(10.0, 10.0)));
    }

    #[test]
    fn contains_outside() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(-1.0, 5.0)));
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(5.0, -1.0)));
    }

    // ── shifted_inside ────────────────────────────────────────────────────

    #[test]
    fn shifted_inside_keeps_fitting_rect() {
        let rect = r(10.0, 10.0, 50.0, 20.0);
        assert_eq!(rect.shifted_inside(r(0.0, 0.0, 600.0, 600.0)), rect);
    }

    #[test]
    fn shifted_inside_pulls_back_from_bottom_right() {
        let rect = r(580.0, 590.0, 100.0, 40.0);
        let moved = rect.shifted_inside(r(0.0, 0.0, 600.0, 600.0));
        assert_eq!(moved, r(500.0, 560.0, 100.0, 40.0));
    }

    #[test]
    fn shifted_inside_oversized_pins_top_left() {
        let rect = r(50.0, 50.0, 800.0, 10.0);
        let moved = rect.shifted_inside(r(0.0, 0.0, 600.0, 600.0));
        assert_eq!(moved.origin, Vec2::new(0.0, 50.0));
    }

    // ── misc ──────────────────────────────────────────────────────────────

    #[test]
    fn corners_are_clockwise_on_screen() {
        let c = r(1.0, 2.0, 3.0, 4.0).corners();
        assert_eq!(c[0], Vec2::new(1.0, 2.0));
        assert_eq!(c[1], Vec2::new(4.0, 2.0));
        assert_eq!(c[2], Vec2::new(4.0, 6.0));
        assert_eq!(c[3], Vec2::new(1.0, 6.0));
    }

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
