//! Local wall-clock time and the hand angles derived from it.
//!
//! Angles are in radians, counter-clockwise from +X like the rest of clock
//! space. Clockwise motion comes from subtracting the elapsed fraction of a
//! turn from the 12 o'clock direction (`π/2`).

use std::f32::consts::{FRAC_PI_2, TAU};

use chrono::{Local, NaiveTime, Timelike};

/// A time of day with whole seconds.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct WallTime {
    /// 0..24
    pub hours: u32,
    /// 0..60
    pub minutes: u32,
    /// 0..60
    pub seconds: u32,
}

impl WallTime {
    pub const fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self { hours, minutes, seconds }
    }

    /// Reads the local wall clock.
    pub fn now() -> Self {
        Self::from_time(&Local::now().time())
    }

    pub fn from_time(t: &NaiveTime) -> Self {
        // Leap seconds report second 59 with nanoseconds >= 1e9; `second()` stays in range.
        Self::new(t.hour(), t.minute(), t.second())
    }

    /// `π/2 − (s/60)·2π`.
    pub fn second_angle(&self) -> f32 {
        FRAC_PI_2 - (self.seconds as f32 / 60.0) * TAU
    }

    /// Minute hand, nudged forward by the seconds elapsed in the current minute.
    pub fn minute_angle(&self) -> f32 {
        let s = self.seconds as f32 / 60.0;
        FRAC_PI_2 - (self.minutes as f32 / 60.0) * TAU - s * (1.0 / 60.0) * TAU
    }

    /// Hour hand on a 12-hour dial, nudged forward by the minutes elapsed in the current hour.
    pub fn hour_angle(&self) -> f32 {
        let m = self.minutes as f32 / 60.0;
        FRAC_PI_2 - ((self.hours % 12) as f32 / 12.0) * TAU - m * (1.0 / 12.0) * TAU
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    const EPS: f32 = 1e-5;

    /// Difference of two angles reduced to `(-π, π]`.
    fn angle_delta(a: f32, b: f32) -> f32 {
        let d = (a - b).rem_euclid(TAU);
        if d > PI { d - TAU } else { d }
    }

    #[test]
    fn second_hand_sweeps_clockwise() {
        for s in 0..60 {
            let t = WallTime::new(0, 0, s);
            let expected = FRAC_PI_2 - (s as f32 / 60.0) * TAU;
            assert!(angle_delta(t.second_angle(), expected).abs() < EPS, "s = {s}");
        }

        // Clockwise means the angle decreases as seconds pass.
        let a = WallTime::new(0, 0, 10).second_angle();
        let b = WallTime::new(0, 0, 11).second_angle();
        assert!(b < a);
    }

    #[test]
    fn second_zero_points_up() {
        assert!((WallTime::new(9, 41, 0).second_angle() - FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn minute_hand_moves_with_seconds() {
        let a = WallTime::new(10, 20, 0).minute_angle();
        let b = WallTime::new(10, 20, 30).minute_angle();
        let c = WallTime::new(10, 20, 59).minute_angle();

        assert!(b < a && c < b);
        // Half a minute is half of one minute step (2π/60).
        assert!((a - b - 0.5 * TAU / 60.0).abs() < EPS);
    }

    #[test]
    fn hour_hand_uses_twelve_hour_dial() {
        let am = WallTime::new(3, 0, 0).hour_angle();
        let pm = WallTime::new(15, 0, 0).hour_angle();
        assert!((am - pm).abs() < EPS);
    }

    #[test]
    fn quarter_past_three_and_a_half() {
        let t = WallTime::new(3, 15, 30);

        assert!(angle_delta(t.second_angle(), -FRAC_PI_2).abs() < EPS);

        let minute = FRAC_PI_2 - (15.0 / 60.0) * TAU - (30.0 / 60.0) * (1.0 / 60.0) * TAU;
        assert!((t.minute_angle() - minute).abs() < EPS);

        let hour = FRAC_PI_2 - (3.0 / 12.0) * TAU - (15.0 / 60.0) * (1.0 / 12.0) * TAU;
        assert!((t.hour_angle() - hour).abs() < EPS);
    }

    #[test]
    fn from_naive_time() {
        let t = NaiveTime::from_hms_opt(23, 59, 58).map(|t| WallTime::from_time(&t));
        assert_eq!(t, Some(WallTime::new(23, 59, 58)));
    }
}
