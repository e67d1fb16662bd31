// 在桌面視窗預覽棋盤格，不需要 /dev/fb0

use anyhow::{Context, Result};
use log::info;
use minifb::{Window, WindowOptions};

use fbcheck::config::{ConfigBuilder, LogLevel, SystemConfig};
use fbcheck::core::pattern::{PatternRenderer, Rgb565};
use fbcheck::interface::{DisplayBufferProvider, MemoryFrameBuffer};
use fbcheck::utils::logger;

const WIDTH: usize = 640;
const HEIGHT: usize = 480;

fn main() -> Result<()> {
    let config = ConfigBuilder::new()
        .system_config(SystemConfig {
            log_level: LogLevel::Debug,
            ..SystemConfig::default()
        })
        .build();
    logger::init(&config.system).context("cannot initialise logger")?;

    let mut shadow = MemoryFrameBuffer::new(WIDTH, HEIGHT, 16);
    PatternRenderer::new(&config.video).render(shadow.descriptor()?);

    // RGB565 -> 0RGB
    let frame: Vec<u32> = shadow
        .as_bytes()
        .chunks_exact(2)
        .map(|px| Rgb565(u16::from_le_bytes([px[0], px[1]])).to_argb8888())
        .collect();

    let mut window = Window::new(
        "fbcheck preview",
        WIDTH,
        HEIGHT,
        WindowOptions::default(),
    )
    .context("cannot create preview window")?;
    window.limit_update_rate(Some(std::time::Duration::from_millis(50)));

    info!("🪟 preview {}x{}, close the window to exit", WIDTH, HEIGHT);
    while window.is_open() {
        window
            .update_with_buffer(&frame, WIDTH, HEIGHT)
            .context("cannot update preview window")?;
    }
    Ok(())
}
