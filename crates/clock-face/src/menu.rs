//! Menu choices and the handler that applies them to a [`ClockConfig`].

use crate::options::{ClockColor, ClockConfig, ClockShape, ClockSize, DigitsMode};

/// A selectable menu leaf.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MenuOption {
    Shape(ClockShape),
    Color(ClockColor),
    Size(ClockSize),
    Digits(DigitsMode),
    Exit,
}

impl MenuOption {
    pub fn label(self) -> &'static str {
        match self {
            MenuOption::Shape(ClockShape::Circle) => "Circle",
            MenuOption::Shape(ClockShape::Square) => "Square",
            MenuOption::Color(ClockColor::Cyan) => "Cyan",
            MenuOption::Color(ClockColor::Magenta) => "Magenta",
            MenuOption::Color(ClockColor::Yellow) => "Yellow",
            MenuOption::Size(ClockSize::Small) => "Small",
            MenuOption::Size(ClockSize::Medium) => "Medium",
            MenuOption::Size(ClockSize::Large) => "Large",
            MenuOption::Digits(DigitsMode::Show) => "Show",
            MenuOption::Digits(DigitsMode::Hide) => "Hide",
            MenuOption::Exit => "Exit",
        }
    }

    /// Whether this leaf is the active choice in `config`. `Exit` never is.
    pub fn is_selected(self, config: &ClockConfig) -> bool {
        match self {
            MenuOption::Shape(v) => config.shape == v,
            MenuOption::Color(v) => config.color == v,
            MenuOption::Size(v) => config.size == v,
            MenuOption::Digits(v) => config.digits == v,
            MenuOption::Exit => false,
        }
    }
}

/// A top-level submenu.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MenuCategory {
    Shape,
    Color,
    Size,
    Digits,
}

impl MenuCategory {
    pub const ALL: [MenuCategory; 4] =
        [MenuCategory::Shape, MenuCategory::Color, MenuCategory::Size, MenuCategory::Digits];

    pub fn label(self) -> &'static str {
        match self {
            MenuCategory::Shape => "Shape",
            MenuCategory::Color => "Color",
            MenuCategory::Size => "Size",
            MenuCategory::Digits => "Digits",
        }
    }

    pub fn options(self) -> &'static [MenuOption] {
        match self {
            MenuCategory::Shape => &[
                MenuOption::Shape(ClockShape::Circle),
                MenuOption::Shape(ClockShape::Square),
            ],
            MenuCategory::Color => &[
                MenuOption::Color(ClockColor::Cyan),
                MenuOption::Color(ClockColor::Magenta),
                MenuOption::Color(ClockColor::Yellow),
            ],
            MenuCategory::Size => &[
                MenuOption::Size(ClockSize::Small),
                MenuOption::Size(ClockSize::Medium),
                MenuOption::Size(ClockSize::Large),
            ],
            MenuCategory::Digits => &[
                MenuOption::Digits(DigitsMode::Show),
                MenuOption::Digits(DigitsMode::Hide),
            ],
        }
    }
}

/// What the caller should do after a selection.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MenuOutcome {
    Redraw,
    Exit,
}

impl ClockConfig {
    /// Applies a menu selection.
    pub fn apply(&mut self, option: MenuOption) -> MenuOutcome {
        let before = *self;
        match option {
            MenuOption::Shape(v) => self.shape = v,
            MenuOption::Color(v) => self.color = v,
            MenuOption::Size(v) => self.size = v,
            MenuOption::Digits(v) => self.digits = v,
            MenuOption::Exit => {
                log::info!("exit selected");
                return MenuOutcome::Exit;
            }
        }

        if *self != before {
            log::debug!("clock options changed: {before:?} -> {self:?}");
        }
        MenuOutcome::Redraw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_switch_keeps_other_options() {
        let mut c = ClockConfig {
            color: ClockColor::Magenta,
            size: ClockSize::Large,
            ..ClockConfig::default()
        };

        assert_eq!(c.apply(MenuOption::Shape(ClockShape::Square)), MenuOutcome::Redraw);
        assert_eq!(c.shape, ClockShape::Square);
        assert_eq!(c.color, ClockColor::Magenta);
        assert_eq!(c.size, ClockSize::Large);
        assert_eq!(c.digits, DigitsMode::Show);
    }

    #[test]
    fn each_leaf_updates_its_field() {
        let mut c = ClockConfig::default();
        c.apply(MenuOption::Color(ClockColor::Yellow));
        c.apply(MenuOption::Size(ClockSize::Small));
        c.apply(MenuOption::Digits(DigitsMode::Hide));

        assert_eq!(c.color, ClockColor::Yellow);
        assert_eq!(c.size, ClockSize::Small);
        assert_eq!(c.digits, DigitsMode::Hide);
    }

    #[test]
    fn exit_leaves_config_untouched() {
        let mut c = ClockConfig::default();
        assert_eq!(c.apply(MenuOption::Exit), MenuOutcome::Exit);
        assert_eq!(c, ClockConfig::default());
    }

    #[test]
    fn exactly_one_selected_leaf_per_category() {
        let c = ClockConfig::default();
        for cat in MenuCategory::ALL {
            let n = cat.options().iter().filter(|o| o.is_selected(&c)).count();
            assert_eq!(n, 1, "{cat:?}");
        }
        assert!(!MenuOption::Exit.is_selected(&c));
    }
}
