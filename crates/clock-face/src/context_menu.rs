//! In-window context menu.
//!
//! Right click opens a top-level panel at the pointer; hovering a category
//! opens its submenu beside it. Everything is laid out in logical pixels and
//! clamped to the window bounds given at open time.

use clock_engine::coords::{Rect, Vec2};
use clock_engine::paint::Color;
use clock_engine::scene::{DrawList, ZIndex};
use clock_engine::text::{FontId, FontSystem};

use crate::menu::{MenuCategory, MenuOption};
use crate::options::ClockConfig;

pub const ROW_HEIGHT: f32 = 24.0;
pub const PANEL_WIDTH: f32 = 128.0;
pub const LABEL_SIZE: f32 = 15.0;

const LABEL_INSET: f32 = 22.0;
const MARKER_INSET: f32 = 11.0;
const MARKER_RADIUS: f32 = 3.5;
const BORDER: f32 = 1.0;

const PANEL_FILL: Color = Color::gray(0.98);
const PANEL_BORDER: Color = Color::gray(0.55);
const HOVER_FILL: Color = Color::rgb(0.80, 0.87, 0.95);
const LABEL_COLOR: Color = Color::gray(0.1);

/// Identity of a clickable row.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MenuRow {
    Category(MenuCategory),
    Option(MenuOption),
}

impl MenuRow {
    pub fn label(self) -> &'static str {
        match self {
            MenuRow::Category(c) => c.label(),
            MenuRow::Option(o) => o.label(),
        }
    }
}

const TOP_ROWS: [MenuRow; 5] = [
    MenuRow::Category(MenuCategory::Shape),
    MenuRow::Category(MenuCategory::Color),
    MenuRow::Category(MenuCategory::Size),
    MenuRow::Category(MenuCategory::Digits),
    MenuRow::Option(MenuOption::Exit),
];

/// Result of hit-testing a point against the open menu.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MenuHit {
    Row(MenuRow),
    Outside,
}

/// Result of a left click while the menu is open.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MenuClick {
    /// A leaf was chosen; the menu has closed.
    Selected(MenuOption),
    /// The click landed on the menu without choosing a leaf.
    Consumed,
    /// The click landed outside; the menu has closed.
    Dismissed,
}

#[derive(Debug, Clone)]
struct OpenMenu {
    bounds: Rect,
    top: Rect,
    submenu: Option<(MenuCategory, Rect)>,
    hovered: Option<MenuRow>,
}

#[derive(Debug, Default)]
pub struct ContextMenu {
    open: Option<OpenMenu>,
}

impl ContextMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Opens the top-level panel with its top-left corner at `pos`, kept inside `bounds`.
    pub fn open_at(&mut self, pos: Vec2, bounds: Rect) {
        let height = ROW_HEIGHT * TOP_ROWS.len() as f32;
        let top = Rect::new(pos.x, pos.y, PANEL_WIDTH, height).shifted_inside(bounds);
        self.open = Some(OpenMenu { bounds, top, submenu: None, hovered: None });
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    /// Top-level panel, when open.
    pub fn top_panel(&self) -> Option<Rect> {
        self.open.as_ref().map(|m| m.top)
    }

    /// Open submenu and its panel.
    pub fn submenu(&self) -> Option<(MenuCategory, Rect)> {
        self.open.as_ref().and_then(|m| m.submenu)
    }

    pub fn hovered(&self) -> Option<MenuRow> {
        self.open.as_ref().and_then(|m| m.hovered)
    }

    /// Visible rows with their rectangles, top panel first.
    pub fn rows(&self) -> Vec<(Rect, MenuRow)> {
        let Some(menu) = &self.open else {
            return Vec::new();
        };

        let mut rows: Vec<(Rect, MenuRow)> = TOP_ROWS
            .iter()
            .enumerate()
            .map(|(i, &row)| (row_rect(menu.top, i), row))
            .collect();

        if let Some((cat, panel)) = menu.submenu {
            rows.extend(
                cat.options()
                    .iter()
                    .enumerate()
                    .map(|(i, &o)| (row_rect(panel, i), MenuRow::Option(o))),
            );
        }
        rows
    }

    pub fn hit(&self, pos: Vec2) -> MenuHit {
        self.rows()
            .into_iter()
            .find(|(rect, _)| rect.contains(pos))
            .map_or(MenuHit::Outside, |(_, row)| MenuHit::Row(row))
    }

    /// Tracks hover; hovering a category opens its submenu, hovering Exit closes it.
    ///
    /// Returns whether anything visible changed.
    pub fn pointer_moved(&mut self, pos: Option<Vec2>) -> bool {
        if self.open.is_none() {
            return false;
        }

        let hovered = match pos.map(|p| self.hit(p)) {
            Some(MenuHit::Row(row)) => Some(row),
            _ => None,
        };

        let Some(menu) = self.open.as_mut() else {
            return false;
        };
        let before = (menu.hovered, menu.submenu.map(|(c, _)| c));

        menu.hovered = hovered;
        match hovered {
            Some(MenuRow::Category(cat)) => menu.open_submenu(cat),
            Some(MenuRow::Option(MenuOption::Exit)) => menu.submenu = None,
            _ => {}
        }

        before != (menu.hovered, menu.submenu.map(|(c, _)| c))
    }

    pub fn left_click(&mut self, pos: Vec2) -> MenuClick {
        match self.hit(pos) {
            MenuHit::Row(MenuRow::Option(option)) => {
                self.close();
                MenuClick::Selected(option)
            }
            MenuHit::Row(MenuRow::Category(cat)) => {
                if let Some(menu) = self.open.as_mut() {
                    menu.open_submenu(cat);
                }
                MenuClick::Consumed
            }
            MenuHit::Outside => {
                self.close();
                MenuClick::Dismissed
            }
        }
    }

    /// Records the menu into `list` at layer `z`.
    ///
    /// Without a font the panels, hover highlight and markers are still drawn;
    /// only the labels are missing.
    pub fn record(
        &self,
        list: &mut DrawList,
        z: ZIndex,
        config: &ClockConfig,
        text: Option<(&FontSystem, FontId)>,
    ) {
        let Some(menu) = &self.open else {
            return;
        };

        push_panel(list, z, menu.top);
        if let Some((_, panel)) = menu.submenu {
            push_panel(list, z, panel);
        }

        for (rect, row) in self.rows() {
            if menu.hovered == Some(row) {
                list.push_polygon(z, &rect.corners(), HOVER_FILL);
            }

            let mid_y = rect.origin.y + ROW_HEIGHT * 0.5;
            match row {
                MenuRow::Category(_) => {
                    let x = rect.max().x - MARKER_INSET;
                    let arrow = [
                        Vec2::new(x - MARKER_RADIUS, mid_y - MARKER_RADIUS * 1.2),
                        Vec2::new(x + MARKER_RADIUS, mid_y),
                        Vec2::new(x - MARKER_RADIUS, mid_y + MARKER_RADIUS * 1.2),
                    ];
                    list.push_polygon(z, &arrow, LABEL_COLOR);
                }
                MenuRow::Option(option) if option.is_selected(config) => {
                    let c = Vec2::new(rect.origin.x + MARKER_INSET, mid_y);
                    let r = MARKER_RADIUS;
                    let dot = [
                        Vec2::new(c.x + r, c.y),
                        Vec2::new(c.x, c.y + r),
                        Vec2::new(c.x - r, c.y),
                        Vec2::new(c.x, c.y - r),
                    ];
                    list.push_polygon(z, &dot, LABEL_COLOR);
                }
                MenuRow::Option(_) => {}
            }

            if let Some((fonts, font)) = text {
                let extent = fonts.measure_text(row.label(), font, LABEL_SIZE);
                let origin = Vec2::new(rect.origin.x + LABEL_INSET, mid_y - extent.y * 0.5);
                list.push_text(z, row.label(), font, LABEL_SIZE, LABEL_COLOR, origin, None);
            }
        }
    }
}

impl OpenMenu {
    fn open_submenu(&mut self, cat: MenuCategory) {
        if self.submenu.is_some_and(|(c, _)| c == cat) {
            return;
        }

        let index = TOP_ROWS
            .iter()
            .position(|r| *r == MenuRow::Category(cat))
            .unwrap_or(0);
        let height = ROW_HEIGHT * cat.options().len() as f32;
        let y = self.top.origin.y + index as f32 * ROW_HEIGHT;

        // Prefer the right side; flip left when that would leave the window.
        let mut x = self.top.max().x;
        if x + PANEL_WIDTH > self.bounds.max().x {
            x = self.top.origin.x - PANEL_WIDTH;
        }

        let panel = Rect::new(x, y, PANEL_WIDTH, height).shifted_inside(self.bounds);
        self.submenu = Some((cat, panel));
    }
}

fn row_rect(panel: Rect, index: usize) -> Rect {
    Rect::new(
        panel.origin.x,
        panel.origin.y + index as f32 * ROW_HEIGHT,
        panel.size.x,
        ROW_HEIGHT,
    )
}

fn push_panel(list: &mut DrawList, z: ZIndex, panel: Rect) {
    let outer = Rect::new(
        panel.origin.x - BORDER,
        panel.origin.y - BORDER,
        panel.size.x + 2.0 * BORDER,
        panel.size.y + 2.0 * BORDER,
    );
    list.push_polygon(z, &outer.corners(), PANEL_BORDER);
    list.push_polygon(z, &panel.corners(), PANEL_FILL);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{ClockColor, ClockShape};

    fn bounds() -> Rect {
        Rect::new(0.0, 0.0, 600.0, 600.0)
    }

    fn center(rect: Rect) -> Vec2 {
        Vec2::new(rect.origin.x + rect.size.x * 0.5, rect.origin.y + rect.size.y * 0.5)
    }

    fn row_of(menu: &ContextMenu, row: MenuRow) -> Rect {
        menu.rows()
            .into_iter()
            .find(|(_, r)| *r == row)
            .map(|(rect, _)| rect)
            .unwrap()
    }

    #[test]
    fn opens_at_pointer() {
        let mut m = ContextMenu::new();
        m.open_at(Vec2::new(100.0, 50.0), bounds());

        assert!(m.is_open());
        assert_eq!(m.top_panel().unwrap().origin, Vec2::new(100.0, 50.0));
        assert_eq!(m.rows().len(), 5);
    }

    #[test]
    fn clamped_inside_window() {
        let mut m = ContextMenu::new();
        m.open_at(Vec2::new(590.0, 590.0), bounds());

        let top = m.top_panel().unwrap();
        assert!(top.max().x <= 600.0 && top.max().y <= 600.0);
    }

    #[test]
    fn hover_opens_submenu_beside_category() {
        let mut m = ContextMenu::new();
        m.open_at(Vec2::new(10.0, 10.0), bounds());

        let color_row = row_of(&m, MenuRow::Category(MenuCategory::Color));
        assert!(m.pointer_moved(Some(center(color_row))));

        let (cat, panel) = m.submenu().unwrap();
        assert_eq!(cat, MenuCategory::Color);
        assert_eq!(panel.origin.x, 10.0 + PANEL_WIDTH);
        assert_eq!(panel.origin.y, color_row.origin.y);
        assert_eq!(m.rows().len(), 5 + 3);
    }

    #[test]
    fn submenu_flips_left_near_right_edge() {
        let mut m = ContextMenu::new();
        m.open_at(Vec2::new(500.0, 10.0), bounds());
        let top = m.top_panel().unwrap();

        let shape_row = row_of(&m, MenuRow::Category(MenuCategory::Shape));
        m.pointer_moved(Some(center(shape_row)));

        let (_, panel) = m.submenu().unwrap();
        assert_eq!(panel.max().x, top.origin.x);
    }

    #[test]
    fn clicking_leaf_selects_and_closes() {
        let mut m = ContextMenu::new();
        m.open_at(Vec2::new(10.0, 10.0), bounds());

        let shape_row = row_of(&m, MenuRow::Category(MenuCategory::Shape));
        m.pointer_moved(Some(center(shape_row)));

        let square = row_of(&m, MenuRow::Option(MenuOption::Shape(ClockShape::Square)));
        assert_eq!(
            m.left_click(center(square)),
            MenuClick::Selected(MenuOption::Shape(ClockShape::Square))
        );
        assert!(!m.is_open());
    }

    #[test]
    fn clicking_category_keeps_menu_open() {
        let mut m = ContextMenu::new();
        m.open_at(Vec2::new(10.0, 10.0), bounds());

        let size_row = row_of(&m, MenuRow::Category(MenuCategory::Size));
        assert_eq!(m.left_click(center(size_row)), MenuClick::Consumed);
        assert_eq!(m.submenu().map(|(c, _)| c), Some(MenuCategory::Size));
    }

    #[test]
    fn clicking_outside_dismisses() {
        let mut m = ContextMenu::new();
        m.open_at(Vec2::new(10.0, 10.0), bounds());

        assert_eq!(m.left_click(Vec2::new(400.0, 400.0)), MenuClick::Dismissed);
        assert!(!m.is_open());
    }

    #[test]
    fn exit_row_is_a_leaf() {
        let mut m = ContextMenu::new();
        m.open_at(Vec2::new(10.0, 10.0), bounds());

        let exit = row_of(&m, MenuRow::Option(MenuOption::Exit));
        assert_eq!(m.left_click(center(exit)), MenuClick::Selected(MenuOption::Exit));
    }

    #[test]
    fn hovering_exit_closes_submenu() {
        let mut m = ContextMenu::new();
        m.open_at(Vec2::new(10.0, 10.0), bounds());

        let digits = row_of(&m, MenuRow::Category(MenuCategory::Digits));
        m.pointer_moved(Some(center(digits)));
        assert!(m.submenu().is_some());

        let exit = row_of(&m, MenuRow::Option(MenuOption::Exit));
        m.pointer_moved(Some(center(exit)));
        assert!(m.submenu().is_none());
    }

    #[test]
    fn records_markers_without_font() {
        let mut m = ContextMenu::new();
        m.open_at(Vec2::new(10.0, 10.0), bounds());
        let color_row = row_of(&m, MenuRow::Category(MenuCategory::Color));
        m.pointer_moved(Some(center(color_row)));

        let config = ClockConfig { color: ClockColor::Magenta, ..ClockConfig::default() };
        let mut list = DrawList::new();
        m.record(&mut list, ZIndex::new(10), &config, None);

        // 2 panels × (border + fill) + hover + 4 category arrows + 1 selected marker.
        assert_eq!(list.len(), 4 + 1 + 4 + 1);
    }

    #[test]
    fn closed_menu_records_nothing() {
        let m = ContextMenu::new();
        let mut list = DrawList::new();
        m.record(&mut list, ZIndex::new(10), &ClockConfig::default(), None);
        assert!(list.is_empty());
    }
}
