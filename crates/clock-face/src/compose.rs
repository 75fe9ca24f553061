use clock_engine::coords::{Vec2, Viewport};
use clock_engine::paint::Color;
use clock_engine::scene::{DrawList, PolygonVertex, ZIndex};
use clock_engine::text::{FontId, FontSystem};

use crate::context_menu::ContextMenu;
use crate::geometry::{digit_anchor, dial_marks, outline, FaceLayer};
use crate::hands::{Hand, HandSet};
use crate::options::{ClockConfig, DigitsMode, BODY_GRAY};

pub const FACE_Z: ZIndex = ZIndex(0);
pub const MARKS_Z: ZIndex = ZIndex(1);
pub const HANDS_Z: ZIndex = ZIndex(2);
pub const MENU_Z: ZIndex = ZIndex(10);

/// Clock center in clock space.
pub const CLOCK_CENTER: Vec2 = Vec2::new(0.0, 0.0);

/// Numeral height relative to the frame diameter, in clock-space units.
const DIGIT_SIZE: f32 = 0.1;

const MARK_COLOR: Color = Color::gray(0.2);
const DIGIT_COLOR: Color = Color::gray(0.15);

/// Where along a hand the shoulders take their color, from tip (0) to tail (1).
const SHOULDER_SHADE: f32 = 0.3;

/// Records one frame of the clock into a draw list.
///
/// Paint order is fixed: frame, shadow ring, body, numerals or dial marks,
/// hour/minute/second hands, then the context menu.
#[derive(Debug, Default)]
pub struct Composer {
    warned_no_font: bool,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compose(
        &mut self,
        list: &mut DrawList,
        viewport: Viewport,
        config: &ClockConfig,
        hands: &HandSet,
        text: Option<(&FontSystem, FontId)>,
        menu: &ContextMenu,
    ) {
        let diameter = config.diameter();
        let to_px = |p: Vec2| viewport.unit_to_logical(p);

        for layer in FaceLayer::ALL {
            let color = match layer {
                FaceLayer::Frame => config.color.palette(),
                FaceLayer::Shadow => config.color.shadow(),
                FaceLayer::Body => BODY_GRAY,
            };
            let points = outline(CLOCK_CENTER, diameter * layer.diameter_ratio(), config.shape)
                .map(to_px);
            list.push_polygon(FACE_Z, &points, color);
        }

        match (config.digits, text) {
            (DigitsMode::Show, Some((fonts, font))) => {
                let size = DIGIT_SIZE * diameter * viewport.height * 0.5;
                for hour in 1..=12 {
                    let label = hour.to_string();
                    let extent = fonts.measure_text(&label, font, size);
                    let anchor = to_px(digit_anchor(CLOCK_CENTER, diameter, hour));
                    list.push_text_centered(MARKS_Z, label, font, size, DIGIT_COLOR, anchor, extent);
                }
            }
            (mode, _) => {
                if mode == DigitsMode::Show && !self.warned_no_font {
                    log::warn!("no font available for clock digits; drawing dial marks instead");
                    self.warned_no_font = true;
                }
                for mark in dial_marks(CLOCK_CENTER, diameter) {
                    list.push_polygon(MARKS_Z, &mark.map(to_px), MARK_COLOR);
                }
            }
        }

        for hand in Hand::ALL {
            let (tip, tail) = hand.shades();
            let shoulder = tip.lerp(tail, SHOULDER_SHADE);
            let shades = [tip, shoulder, tail, shoulder];

            let vertices = hands
                .quad(hand)
                .iter()
                .zip(shades)
                .map(|(&p, c)| PolygonVertex::new(to_px(p), c))
                .collect();
            list.push_shaded_polygon(HANDS_Z, vertices);
        }

        menu.record(list, MENU_Z, config, text);
    }

    /// Whether the missing-font warning has been logged.
    pub fn warned_no_font(&self) -> bool {
        self.warned_no_font
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clock_engine::coords::Rect;
    use clock_engine::scene::DrawCmd;

    use crate::options::{ClockColor, ClockShape, ClockSize};
    use crate::wall_time::WallTime;

    const VIEWPORT: Viewport = Viewport::new(600.0, 600.0);

    fn hands_at(time: WallTime, config: &ClockConfig) -> HandSet {
        let mut hands = HandSet::new();
        hands.update(time, CLOCK_CENTER, config.diameter());
        hands
    }

    fn polygon_colors(list: &mut DrawList) -> Vec<Color> {
        list.iter_in_paint_order()
            .filter_map(|item| match &item.cmd {
                DrawCmd::Polygon(p) => p.vertices.first().map(|v| v.color),
                DrawCmd::Text(_) => None,
            })
            .collect()
    }

    fn compose(config: &ClockConfig, menu: &ContextMenu) -> (DrawList, Composer) {
        let mut composer = Composer::new();
        let mut list = DrawList::new();
        let hands = hands_at(WallTime::new(3, 15, 30), config);
        composer.compose(&mut list, VIEWPORT, config, &hands, None, menu);
        (list, composer)
    }

    #[test]
    fn paint_order_face_marks_hands() {
        let config = ClockConfig { digits: DigitsMode::Hide, ..ClockConfig::default() };
        let (mut list, _) = compose(&config, &ContextMenu::new());

        assert_eq!(list.len(), 3 + 12 + 3);

        let colors = polygon_colors(&mut list);
        assert_eq!(colors[0], ClockColor::Cyan.palette());
        assert_eq!(colors[1], ClockColor::Cyan.shadow());
        assert_eq!(colors[2], BODY_GRAY);
        assert!(colors[3..15].iter().all(|c| *c == MARK_COLOR));

        // Hour, minute, second; tips drawn with each hand's light shade.
        assert_eq!(colors[15], Hand::Hour.shades().0);
        assert_eq!(colors[16], Hand::Minute.shades().0);
        assert_eq!(colors[17], Hand::Second.shades().0);
    }

    #[test]
    fn missing_font_falls_back_to_dials_and_warns_once() {
        let config = ClockConfig::default();
        let mut composer = Composer::new();
        let hands = hands_at(WallTime::new(0, 0, 0), &config);
        let menu = ContextMenu::new();

        for _ in 0..2 {
            let mut list = DrawList::new();
            composer.compose(&mut list, VIEWPORT, &config, &hands, None, &menu);
            assert_eq!(list.len(), 18);
        }
        assert!(composer.warned_no_font());
    }

    #[test]
    fn hidden_digits_do_not_warn() {
        let config = ClockConfig { digits: DigitsMode::Hide, ..ClockConfig::default() };
        let (_, composer) = compose(&config, &ContextMenu::new());
        assert!(!composer.warned_no_font());
    }

    #[test]
    fn frame_scales_with_size() {
        let radius_px = |size| {
            let config = ClockConfig { size, ..ClockConfig::default() };
            let (list, _) = compose(&config, &ContextMenu::new());
            match &list.items()[0].cmd {
                DrawCmd::Polygon(p) => p.vertices[0].pos.distance(Vec2::new(300.0, 300.0)),
                DrawCmd::Text(_) => f32::NAN,
            }
        };

        assert!((radius_px(ClockSize::Small) - 112.5).abs() < 1e-3);
        assert!((radius_px(ClockSize::Medium) - 150.0).abs() < 1e-3);
        assert!((radius_px(ClockSize::Large) - 225.0).abs() < 1e-3);
    }

    #[test]
    fn square_shape_reaches_corners_further() {
        let far = |shape| {
            let config = ClockConfig { shape, ..ClockConfig::default() };
            let (list, _) = compose(&config, &ContextMenu::new());
            match &list.items()[0].cmd {
                DrawCmd::Polygon(p) => p
                    .vertices
                    .iter()
                    .map(|v| v.pos.distance(Vec2::new(300.0, 300.0)))
                    .fold(0.0f32, f32::max),
                DrawCmd::Text(_) => f32::NAN,
            }
        };

        assert!(far(ClockShape::Square) > far(ClockShape::Circle) + 1.0);
    }

    #[test]
    fn open_menu_is_painted_last() {
        let config = ClockConfig { digits: DigitsMode::Hide, ..ClockConfig::default() };
        let mut menu = ContextMenu::new();
        menu.open_at(Vec2::new(20.0, 20.0), Rect::new(0.0, 0.0, 600.0, 600.0));

        let (mut list, _) = compose(&config, &menu);
        assert!(list.len() > 18);

        let last = list.iter_in_paint_order().last().map(|item| item.key.z);
        assert_eq!(last, Some(MENU_Z));
    }
}
