// fbcheck - 在 framebuffer 上畫出 8x8 棋盤格測試圖樣後結束
// 只點亮綠色通道的 G2 位元，用於檢查顯示線路

use std::process;

use anyhow::{Context, Result};
use log::info;

use fbcheck::config::{Config, ConfigBuilder};
use fbcheck::core::pattern::PatternRenderer;
use fbcheck::interface::{DisplayBufferProvider, FbDevice};
use fbcheck::utils::logger;

fn main() {
    let config = ConfigBuilder::new().build();
    if let Err(e) = logger::init(&config.system) {
        eprintln!("無法初始化日誌: {}", e);
    }

    if let Err(e) = run(&config) {
        eprintln!("{:#}", e);
        process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    let mut device = FbDevice::open(&config.video.device_path).map_err(|e| {
        let what = if e.is_mapping() {
            "Failed to mmap framebuffer"
        } else {
            "Cannot open framebuffer"
        };
        anyhow::Error::new(e).context(what)
    })?;

    let renderer = PatternRenderer::new(&config.video);
    let descriptor = device
        .descriptor()
        .context("Failed to mmap framebuffer")?;
    let (width, height) = (descriptor.width(), descriptor.height());
    renderer.render(descriptor);

    info!(
        "✅ {}: {}x{} checkerboard written",
        device.path().display(),
        width,
        height
    );
    // 解除映射並關閉裝置
    drop(device);
    Ok(())
}
