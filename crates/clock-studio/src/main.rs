use std::time::Duration;

use anyhow::{Context, Result};

use clock_engine::device::GpuInit;
use clock_engine::logging::{init_logging, LoggingConfig};
use clock_engine::shader::ShaderProgram;
use clock_engine::text::FontSystem;
use clock_engine::window::{LogicalPosition, LogicalSize, Runtime, RuntimeConfig};
use clock_face::{ClockApp, ClockConfig};

const VERTEX_SHADER: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/shaders/clock.vert.wgsl");
const FRAGMENT_SHADER: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/shaders/clock.frag.wgsl");

const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

const TICK_INTERVAL: Duration = Duration::from_millis(100);

fn main() {
    init_logging(LoggingConfig::default());

    if let Err(e) = run() {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let program = ShaderProgram::load(VERTEX_SHADER, FRAGMENT_SHADER)
        .context("failed to load clock shaders")?;

    let mut fonts = FontSystem::new();
    let font = match fonts.load_first_available(FONT_CANDIDATES) {
        Ok(id) => Some(id),
        Err(e) => {
            log::warn!("{e}; digits and menu labels will not be drawn");
            None
        }
    };

    let app = ClockApp::new(program, fonts, font, ClockConfig::default())
        .context("clock shaders do not fit the polygon vertex layout")?;

    let config = RuntimeConfig {
        title: "Make a Clock".to_string(),
        size: LogicalSize::new(600.0, 600.0),
        position: Some(LogicalPosition::new(50.0, 25.0)),
        resizable: false,
        tick_interval: Some(TICK_INTERVAL),
    };

    Runtime::run(config, GpuInit::default(), app)
}
