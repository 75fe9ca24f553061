use clock_engine::coords::Vec2;
use clock_engine::paint::Color;

use crate::geometry::{dart_quad, DartSpec};
use crate::wall_time::WallTime;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Hand {
    Hour,
    Minute,
    Second,
}

impl Hand {
    /// Paint order: hours under minutes under seconds.
    pub const ALL: [Hand; 3] = [Hand::Hour, Hand::Minute, Hand::Second];

    pub fn dart(self) -> DartSpec {
        match self {
            Hand::Second => DartSpec { length: 0.34, half_width: 0.008, tail: 0.06 },
            Hand::Minute => DartSpec { length: 0.30, half_width: 0.016, tail: 0.05 },
            Hand::Hour => DartSpec { length: 0.22, half_width: 0.024, tail: 0.04 },
        }
    }

    /// Gray gradient from tip to tail.
    pub fn shades(self) -> (Color, Color) {
        match self {
            Hand::Second => (Color::gray(0.55), Color::gray(0.35)),
            Hand::Minute => (Color::gray(0.35), Color::gray(0.15)),
            Hand::Hour => (Color::gray(0.25), Color::gray(0.05)),
        }
    }

    pub fn angle(self, time: &WallTime) -> f32 {
        match self {
            Hand::Second => time.second_angle(),
            Hand::Minute => time.minute_angle(),
            Hand::Hour => time.hour_angle(),
        }
    }

    fn slot(self) -> usize {
        match self {
            Hand::Hour => 0,
            Hand::Minute => 1,
            Hand::Second => 2,
        }
    }
}

/// Hand geometry, refreshed from the wall clock on every timer tick.
///
/// The quads live in fixed arrays that are overwritten in place.
#[derive(Debug, Clone)]
pub struct HandSet {
    time: WallTime,
    quads: [[Vec2; 4]; 3],
}

impl Default for HandSet {
    fn default() -> Self {
        Self { time: WallTime::new(0, 0, 0), quads: [[Vec2::zero(); 4]; 3] }
    }
}

impl HandSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn time(&self) -> WallTime {
        self.time
    }

    /// Recomputes all three hands for `time`. Returns whether the time changed.
    pub fn update(&mut self, time: WallTime, center: Vec2, diameter: f32) -> bool {
        let changed = time != self.time;
        self.time = time;
        self.rebuild(center, diameter);
        changed
    }

    /// Recomputes the hands for the last time seen, e.g. after a size change.
    pub fn rebuild(&mut self, center: Vec2, diameter: f32) {
        for hand in Hand::ALL {
            self.quads[hand.slot()] = dart_quad(center, hand.angle(&self.time), diameter, hand.dart());
        }
    }

    pub fn quad(&self, hand: Hand) -> &[Vec2; 4] {
        &self.quads[hand.slot()]
    }
}
