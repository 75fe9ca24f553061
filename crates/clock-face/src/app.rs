use clock_engine::coords::{Vec2, Viewport};
use clock_engine::core::{App, AppControl, FrameCtx};
use clock_engine::input::{InputFrame, InputState, Key, MouseButton};
use clock_engine::paint::Color;
use clock_engine::render::Compositor;
use clock_engine::scene::DrawList;
use clock_engine::shader::{ShaderError, ShaderProgram};
use clock_engine::text::{FontId, FontSystem};
use clock_engine::time::Tick;

use crate::compose::{Composer, CLOCK_CENTER};
use crate::context_menu::{ContextMenu, MenuClick};
use crate::hands::HandSet;
use crate::menu::{MenuOption, MenuOutcome};
use crate::options::ClockConfig;
use crate::wall_time::WallTime;

pub const CLEAR_COLOR: Color = Color::gray(0.9);

/// The analog clock application driven by the engine runtime.
///
/// Hands are refreshed from the wall clock on every timer tick; the face,
/// marks and menu are recomposed on every frame from the current options.
pub struct ClockApp {
    config: ClockConfig,
    hands: HandSet,
    menu: ContextMenu,
    composer: Composer,
    compositor: Compositor,
    fonts: FontSystem,
    font: Option<FontId>,
    draw_list: DrawList,
}

impl ClockApp {
    /// `font` is used for the numerals and menu labels; without one the clock
    /// shows dial marks and the menu shows markers only.
    pub fn new(
        program: ShaderProgram,
        fonts: FontSystem,
        font: Option<FontId>,
        config: ClockConfig,
    ) -> Result<Self, ShaderError> {
        let mut hands = HandSet::new();
        hands.update(WallTime::now(), CLOCK_CENTER, config.diameter());

        Ok(Self {
            config,
            hands,
            menu: ContextMenu::new(),
            composer: Composer::new(),
            compositor: Compositor::new(program)?,
            fonts,
            font,
            draw_list: DrawList::new(),
        })
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    fn select(&mut self, option: MenuOption) -> AppControl {
        match self.config.apply(option) {
            MenuOutcome::Exit => AppControl::Exit,
            MenuOutcome::Redraw => {
                self.hands.rebuild(CLOCK_CENTER, self.config.diameter());
                AppControl::Continue
            }
        }
    }

    fn handle_input(&mut self, input: &InputState, frame: &InputFrame, viewport: Viewport) -> AppControl {
        if frame.pointer_moved {
            self.menu
                .pointer_moved(input.pointer_pos.map(|(x, y)| Vec2::new(x, y)));
        }

        for press in &frame.presses {
            let pos = Vec2::new(press.x, press.y);
            match press.button {
                MouseButton::Right if self.menu.is_open() => self.menu.close(),
                MouseButton::Right => self.menu.open_at(pos, viewport.bounds()),
                MouseButton::Left if self.menu.is_open() => {
                    if let MenuClick::Selected(option) = self.menu.left_click(pos) {
                        if self.select(option) == AppControl::Exit {
                            return AppControl::Exit;
                        }
                    }
                }
                _ => {}
            }
        }

        if frame.keys_pressed.contains(&Key::Escape) {
            self.menu.close();
        }

        AppControl::Continue
    }
}

impl App for ClockApp {
    fn on_tick(&mut self, _tick: Tick) -> AppControl {
        self.hands.update(WallTime::now(), CLOCK_CENTER, self.config.diameter());
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if self.handle_input(ctx.input, ctx.input_frame, ctx.window.viewport()) == AppControl::Exit {
            return AppControl::Exit;
        }

        ctx.render(CLEAR_COLOR, |rctx, target| {
            self.draw_list.clear();
            let text = self.font.map(|id| (&self.fonts, id));
            self.composer.compose(
                &mut self.draw_list,
                rctx.viewport,
                &self.config,
                &self.hands,
                text,
                &self.menu,
            );
            self.compositor
                .render(rctx, target, &mut self.draw_list, &self.fonts);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    use clock_engine::input::{
        InputEvent, KeyState, MouseButtonState, PointerButtonEvent, PointerMoveEvent,
    };

    use crate::context_menu::{MenuRow, ROW_HEIGHT};
    use crate::menu::MenuCategory;
    use crate::options::ClockSize;

    const VS: &str = r#"
        struct Viewport { size: vec2<f32>, _pad: vec2<f32> };
        @group(0) @binding(0) var<uniform> viewport: Viewport;

        struct VsOut { @builtin(position) pos: vec4<f32>, @location(0) color: vec4<f32> };

        @vertex
        fn vs_main(@location(0) pos: vec2<f32>, @location(1) color: vec4<f32>) -> VsOut {
            var out: VsOut;
            out.pos = vec4<f32>(pos / viewport.size * 2.0 - 1.0, 0.0, 1.0);
            out.color = color;
            return out;
        }
    "#;

    const FS: &str = r#"
        @fragment
        fn fs_main(@location(0) color: vec4<f32>) -> @location(0) vec4<f32> {
            return color;
        }
    "#;

    const VIEWPORT: Viewport = Viewport::new(600.0, 600.0);

    fn app() -> ClockApp {
        let program =
            ShaderProgram::from_sources(Path::new("v.wgsl"), VS, Path::new("f.wgsl"), FS).unwrap();
        ClockApp::new(program, FontSystem::new(), None, ClockConfig::default()).unwrap()
    }

    struct Input {
        state: InputState,
        frame: InputFrame,
    }

    impl Input {
        fn new() -> Self {
            Self { state: InputState::default(), frame: InputFrame::default() }
        }

        fn click(&mut self, button: MouseButton, pos: Vec2) -> &mut Self {
            let (x, y) = (pos.x, pos.y);
            self.state
                .apply_event(&mut self.frame, InputEvent::PointerMoved(PointerMoveEvent { x, y }));
            for state in [MouseButtonState::Pressed, MouseButtonState::Released] {
                self.state.apply_event(
                    &mut self.frame,
                    InputEvent::PointerButton(PointerButtonEvent { button, state, x, y }),
                );
            }
            self
        }

        fn hover(&mut self, pos: Vec2) -> &mut Self {
            self.state.apply_event(
                &mut self.frame,
                InputEvent::PointerMoved(PointerMoveEvent { x: pos.x, y: pos.y }),
            );
            self
        }

        fn escape(&mut self) -> &mut Self {
            self.state.apply_event(
                &mut self.frame,
                InputEvent::Key { key: Key::Escape, state: KeyState::Pressed, repeat: false },
            );
            self
        }

        fn feed(&mut self, app: &mut ClockApp) -> AppControl {
            let control = app.handle_input(&self.state, &self.frame, VIEWPORT);
            self.frame.clear();
            control
        }
    }

    fn row_center(app: &ClockApp, row: MenuRow) -> Vec2 {
        let (rect, _) = app
            .menu
            .rows()
            .into_iter()
            .find(|(_, r)| *r == row)
            .unwrap();
        Vec2::new(rect.origin.x + 5.0, rect.origin.y + ROW_HEIGHT * 0.5)
    }

    #[test]
    fn right_click_toggles_menu() {
        let mut app = app();
        let mut input = Input::new();

        input.click(MouseButton::Right, Vec2::new(50.0, 50.0));
        assert_eq!(input.feed(&mut app), AppControl::Continue);
        assert!(app.menu.is_open());

        input.click(MouseButton::Right, Vec2::new(60.0, 60.0));
        input.feed(&mut app);
        assert!(!app.menu.is_open());
    }

    #[test]
    fn escape_closes_menu() {
        let mut app = app();
        let mut input = Input::new();

        input.click(MouseButton::Right, Vec2::new(50.0, 50.0)).feed(&mut app);
        input.escape().feed(&mut app);
        assert!(!app.menu.is_open());
    }

    #[test]
    fn selecting_size_updates_config_and_hands() {
        let mut app = app();
        let mut input = Input::new();
        let before = app.hands.quad(crate::hands::Hand::Second)[0];

        input.click(MouseButton::Right, Vec2::new(50.0, 50.0)).feed(&mut app);
        let size_row = row_center(&app, MenuRow::Category(MenuCategory::Size));
        input.hover(size_row).feed(&mut app);

        let large = row_center(&app, MenuRow::Option(MenuOption::Size(ClockSize::Large)));
        assert_eq!(input.click(MouseButton::Left, large).feed(&mut app), AppControl::Continue);

        assert_eq!(app.config().size, ClockSize::Large);
        assert!(!app.menu.is_open());

        let after = app.hands.quad(crate::hands::Hand::Second)[0];
        assert!((after.length() - before.length() * 1.5).abs() < 1e-4);
    }

    #[test]
    fn exit_entry_stops_the_app() {
        let mut app = app();
        let mut input = Input::new();

        input.click(MouseButton::Right, Vec2::new(50.0, 50.0)).feed(&mut app);
        let exit = row_center(&app, MenuRow::Option(MenuOption::Exit));
        assert_eq!(input.click(MouseButton::Left, exit).feed(&mut app), AppControl::Exit);
    }

    #[test]
    fn left_click_without_menu_is_ignored() {
        let mut app = app();
        let mut input = Input::new();

        input.click(MouseButton::Left, Vec2::new(300.0, 300.0));
        assert_eq!(input.feed(&mut app), AppControl::Continue);
        assert!(!app.menu.is_open());
        assert_eq!(*app.config(), ClockConfig::default());
    }
}
