//! User-selectable clock options.

use clock_engine::paint::Color;

/// Outline used for the frame, shadow ring and body.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum ClockShape {
    #[default]
    Circle,
    Square,
}

/// Accent color of the frame and its shadow ring.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum ClockColor {
    #[default]
    Cyan,
    Magenta,
    Yellow,
}

impl ClockColor {
    pub fn palette(self) -> Color {
        match self {
            ClockColor::Cyan => Color::rgb(0.0, 0.55, 0.6),
            ClockColor::Magenta => Color::rgb(0.6, 0.0, 0.5),
            ClockColor::Yellow => Color::rgb(0.8, 0.65, 0.0),
        }
    }

    /// Darker variant used for the shadow ring between frame and body.
    pub fn shadow(self) -> Color {
        self.palette().shaded(0.6)
    }
}

/// Body fill, independent of the color option.
pub const BODY_GRAY: Color = Color::gray(0.97);

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum ClockSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ClockSize {
    /// Scale applied to every generated shape.
    pub fn ratio(self) -> f32 {
        match self {
            ClockSize::Small => 0.75,
            ClockSize::Medium => 1.0,
            ClockSize::Large => 1.5,
        }
    }
}

/// Whether hour positions are labeled with numerals or with dial marks.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum DigitsMode {
    #[default]
    Show,
    Hide,
}

/// Frame diameter in clock space at `ClockSize::Medium`.
pub const BASE_DIAMETER: f32 = 1.0;

/// The complete option state. Geometry and drawing read it; only the menu handler writes it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct ClockConfig {
    pub shape: ClockShape,
    pub color: ClockColor,
    pub size: ClockSize,
    pub digits: DigitsMode,
}

impl ClockConfig {
    /// Frame diameter in clock space for the current size.
    pub fn diameter(&self) -> f32 {
        BASE_DIAMETER * self.size.ratio()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = ClockConfig::default();
        assert_eq!(c.shape, ClockShape::Circle);
        assert_eq!(c.color, ClockColor::Cyan);
        assert_eq!(c.size, ClockSize::Medium);
        assert_eq!(c.digits, DigitsMode::Show);
        assert_eq!(c.diameter(), 1.0);
    }

    #[test]
    fn size_ratios() {
        let mut c = ClockConfig::default();
        c.size = ClockSize::Small;
        assert!((c.diameter() - 0.75).abs() < 1e-6);
        c.size = ClockSize::Large;
        assert!((c.diameter() - 1.5).abs() < 1e-6);
    }

    #[test]
    fn shadow_is_darker_than_palette() {
        for color in [ClockColor::Cyan, ClockColor::Magenta, ClockColor::Yellow] {
            let p = color.palette();
            let s = color.shadow();
            assert!(s.r <= p.r && s.g <= p.g && s.b <= p.b);
            assert_eq!(s.a, 1.0);
        }
    }
}
