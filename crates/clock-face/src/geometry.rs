//! Clock-face geometry in clock space (origin at the window center, +Y up).
//!
//! Every generator is a pure function of a center, a diameter and the option
//! values it depends on, so the composer can regenerate the whole face every
//! frame without keeping geometry around between option changes.

use std::f32::consts::{FRAC_PI_2, TAU};

use clock_engine::coords::Vec2;

use crate::options::ClockShape;

/// Points per frame/shadow/body outline.
pub const OUTLINE_POINTS: usize = 100;

/// Rounded-square corner: turning-center offset and arc radius, as fractions of the half-size.
pub const CORNER_OFFSET: f32 = 0.8;
pub const CORNER_RADIUS: f32 = 0.2;

pub const DIAL_COUNT: usize = 12;
pub const DIAL_POINTS: usize = 6;

const DIAL_INNER: f32 = 0.26;
const DIAL_OUTER_LONG: f32 = 0.36;
const DIAL_OUTER_SHORT: f32 = 0.32;
/// Where the bar meets the wedge, between inner and outer radius.
const DIAL_BAR_SPLIT: f32 = 0.4;
const DIAL_BAR_HALF_WIDTH: f32 = 0.006;
const DIAL_WEDGE_HALF_WIDTH: f32 = 0.014;

/// Radius of the numeral anchors, as a fraction of the diameter.
pub const DIGIT_RADIUS: f32 = 0.30;

/// Concentric filled outlines that make up the face, back to front.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FaceLayer {
    Frame,
    Shadow,
    Body,
}

impl FaceLayer {
    pub const ALL: [FaceLayer; 3] = [FaceLayer::Frame, FaceLayer::Shadow, FaceLayer::Body];

    /// Layer diameter relative to the frame diameter.
    pub fn diameter_ratio(self) -> f32 {
        match self {
            FaceLayer::Frame => 1.0,
            FaceLayer::Shadow => 0.85,
            FaceLayer::Body => 0.75,
        }
    }
}

/// Outline for `shape`; see [`circle_points`] and [`rounded_square_points`].
pub fn outline(center: Vec2, diameter: f32, shape: ClockShape) -> [Vec2; OUTLINE_POINTS] {
    match shape {
        ClockShape::Circle => circle_points(center, diameter),
        ClockShape::Square => rounded_square_points(center, diameter),
    }
}

/// `OUTLINE_POINTS` equally spaced points at radius `diameter / 2`,
/// counter-clockwise from angle 0.
pub fn circle_points(center: Vec2, diameter: f32) -> [Vec2; OUTLINE_POINTS] {
    let radius = diameter * 0.5;
    let step = TAU / OUTLINE_POINTS as f32;
    std::array::from_fn(|i| center + Vec2::from_polar(i as f32 * step, radius))
}

/// Rounded square of half-size `diameter / 2`.
///
/// The outline is split into four quadrants of `OUTLINE_POINTS / 4` points,
/// each a quarter arc of radius `CORNER_RADIUS · half` around a turning center
/// offset `CORNER_OFFSET · half` along both axes. Points run counter-clockwise
/// from the +X side, matching [`circle_points`].
pub fn rounded_square_points(center: Vec2, diameter: f32) -> [Vec2; OUTLINE_POINTS] {
    const PER_QUADRANT: usize = OUTLINE_POINTS / 4;

    let half = diameter * 0.5;
    let offset = CORNER_OFFSET * half;
    let radius = CORNER_RADIUS * half;
    let last = (PER_QUADRANT - 1) as f32;

    std::array::from_fn(|i| {
        let quadrant = i / PER_QUADRANT;
        let k = (i % PER_QUADRANT) as f32;

        let (sx, sy) = match quadrant {
            0 => (1.0, 1.0),
            1 => (-1.0, 1.0),
            2 => (-1.0, -1.0),
            _ => (1.0, -1.0),
        };
        let turning = Vec2::new(sx * offset, sy * offset);
        let angle = quadrant as f32 * FRAC_PI_2 + (k / last) * FRAC_PI_2;

        center + turning + Vec2::from_polar(angle, radius)
    })
}

/// Dimensions of a hand as fractions of the frame diameter.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DartSpec {
    pub length: f32,
    pub half_width: f32,
    pub tail: f32,
}

/// Tapered quad pointing along `angle`: tip, left shoulder, tail, right shoulder.
///
/// Shoulders sit a quarter of the length out from the center, which keeps the
/// quad convex for any positive spread.
pub fn dart_quad(center: Vec2, angle: f32, diameter: f32, spec: DartSpec) -> [Vec2; 4] {
    let dir = Vec2::from_polar(angle, 1.0);
    let side = Vec2::from_polar(angle + FRAC_PI_2, 1.0);

    let length = spec.length * diameter;
    let spread = side * (spec.half_width * diameter);
    let shoulder = center + dir * (length * 0.25);

    [
        center + dir * length,
        shoulder + spread,
        center - dir * (spec.tail * diameter),
        shoulder - spread,
    ]
}

/// Angle of hour position `index` (0 = 12 o'clock), clockwise on screen.
#[inline]
pub fn hour_position_angle(index: usize) -> f32 {
    FRAC_PI_2 - index as f32 * TAU / DIAL_COUNT as f32
}

/// Whether dial `index` marks a quarter hour and gets the long mark.
#[inline]
pub fn is_long_dial(index: usize) -> bool {
    index % 3 == 0
}

/// Outer radius of dial `index`, as a fraction of the diameter.
pub fn dial_outer_ratio(index: usize) -> f32 {
    if is_long_dial(index) { DIAL_OUTER_LONG } else { DIAL_OUTER_SHORT }
}

/// The twelve hour marks. Mark 0 points at 12 o'clock.
///
/// Each mark is a narrow inner bar that flares into a wedge towards the rim,
/// built along +X and rotated into place.
pub fn dial_marks(center: Vec2, diameter: f32) -> [[Vec2; DIAL_POINTS]; DIAL_COUNT] {
    std::array::from_fn(|i| {
        let r_in = DIAL_INNER * diameter;
        let r_out = dial_outer_ratio(i) * diameter;
        let r_mid = r_in + DIAL_BAR_SPLIT * (r_out - r_in);
        let bw = DIAL_BAR_HALF_WIDTH * diameter;
        let ww = DIAL_WEDGE_HALF_WIDTH * diameter;

        let template = [
            Vec2::new(r_in, -bw),
            Vec2::new(r_mid, -bw),
            Vec2::new(r_out, -ww),
            Vec2::new(r_out, ww),
            Vec2::new(r_mid, bw),
            Vec2::new(r_in, bw),
        ];

        let angle = hour_position_angle(i);
        template.map(|p| center + p.rotated(angle))
    })
}

/// Anchor for the numeral of `hour` (1..=12).
pub fn digit_anchor(center: Vec2, diameter: f32, hour: usize) -> Vec2 {
    center + Vec2::from_polar(hour_position_angle(hour % DIAL_COUNT), DIGIT_RADIUS * diameter)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn circle_points_lie_on_radius() {
        let c = Vec2::new(0.25, -0.1);
        let pts = circle_points(c, 0.8);

        assert_eq!(pts.len(), OUTLINE_POINTS);
        for p in pts {
            assert!(close(p.distance(c), 0.4), "{p:?}");
        }
        // Starts at angle 0 and runs counter-clockwise.
        assert!(close(pts[0].x, 0.65) && close(pts[0].y, -0.1));
        assert!(pts[1].y > pts[0].y);
    }

    #[test]
    fn rounded_square_fits_half_size() {
        let pts = rounded_square_points(Vec2::zero(), 1.0);

        let max_x = pts.iter().map(|p| p.x).fold(f32::MIN, f32::max);
        let max_y = pts.iter().map(|p| p.y).fold(f32::MIN, f32::max);
        let min_x = pts.iter().map(|p| p.x).fold(f32::MAX, f32::min);
        assert!(close(max_x, 0.5) && close(max_y, 0.5) && close(min_x, -0.5));

        // First point of each quadrant is on the side, last one on the next side.
        assert!(close(pts[0].x, 0.5) && close(pts[0].y, 0.4));
        assert!(close(pts[24].x, 0.4) && close(pts[24].y, 0.5));
        assert!(close(pts[25].x, -0.4) && close(pts[25].y, 0.5));
        assert!(close(pts[99].x, 0.5) && close(pts[99].y, -0.4));
    }

    #[test]
    fn rounded_square_corners_are_arcs() {
        let pts = rounded_square_points(Vec2::zero(), 2.0);
        let turning = Vec2::new(0.8, 0.8);
        for p in &pts[..25] {
            assert!(close(p.distance(turning), 0.2));
        }
    }

    #[test]
    fn outline_scales_with_diameter() {
        for shape in [ClockShape::Circle, ClockShape::Square] {
            let small = outline(Vec2::zero(), 0.75, shape);
            let large = outline(Vec2::zero(), 1.5, shape);
            for (s, l) in small.iter().zip(large.iter()) {
                assert!(close(l.x, s.x * 2.0) && close(l.y, s.y * 2.0));
            }
        }
    }

    #[test]
    fn dart_points_along_angle() {
        let spec = DartSpec { length: 0.34, half_width: 0.01, tail: 0.05 };
        let q = dart_quad(Vec2::zero(), FRAC_PI_2, 1.0, spec);

        assert!(close(q[0].x, 0.0) && close(q[0].y, 0.34));
        assert!(close(q[2].x, 0.0) && close(q[2].y, -0.05));
        assert!(close(q[1].x, -0.01) && close(q[3].x, 0.01));
        assert!(close(q[1].y, q[3].y));
    }

    #[test]
    fn twelve_dials_with_long_quarters() {
        let marks = dial_marks(Vec2::zero(), 1.0);
        assert_eq!(marks.len(), 12);

        for (i, mark) in marks.iter().enumerate() {
            let outer = mark.iter().map(|p| p.length()).fold(0.0f32, f32::max);
            let expected = if i % 3 == 0 { 0.36 } else { 0.32 };
            // Outer corners sit slightly off-axis.
            assert!(outer >= expected - EPS && outer < expected + 0.001, "dial {i}: {outer}");
        }
    }

    #[test]
    fn dial_zero_points_up_and_three_points_right() {
        let marks = dial_marks(Vec2::zero(), 1.0);
        let tip = |m: &[Vec2; 6]| (m[2] + m[3]) * 0.5;

        let up = tip(&marks[0]);
        assert!(close(up.x, 0.0) && close(up.y, 0.36));

        let right = tip(&marks[3]);
        assert!(close(right.x, 0.36) && close(right.y, 0.0));
    }

    #[test]
    fn digit_anchors_follow_hours() {
        let twelve = digit_anchor(Vec2::zero(), 1.0, 12);
        assert!(close(twelve.x, 0.0) && close(twelve.y, 0.30));

        let six = digit_anchor(Vec2::zero(), 1.0, 6);
        assert!(close(six.x, 0.0) && close(six.y, -0.30));
    }
}
