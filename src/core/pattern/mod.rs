//! Checkerboard pattern renderer

pub mod buffer;
pub mod pixel;

use log::debug;

use crate::config::VideoConfig;
use crate::error::Result;

pub use buffer::{FrameBufferDescriptor, BYTES_PER_PIXEL};
pub use pixel::{PixelEncoder, Rgb565, Rgb565Encoder};

/// 將固定的棋盤格圖樣寫入 framebuffer
///
/// 不保留任何狀態，同一個緩衝區重複繪製會得到完全相同的內容。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternRenderer {
    tile_size: usize,
    encoder: Rgb565Encoder,
}

impl PatternRenderer {
    pub fn new(config: &VideoConfig) -> Self {
        Self {
            tile_size: config.tile_size.max(1),
            encoder: Rgb565Encoder::new(config.off_color, config.on_color),
        }
    }

    pub fn tile_size(&self) -> usize {
        self.tile_size
    }

    /// 座標所在格子的奇偶
    pub fn block_at(&self, x: usize, y: usize) -> u8 {
        ((x / self.tile_size + y / self.tile_size) % 2) as u8
    }

    /// 座標 (x, y) 會寫入的 16 位元值
    pub fn pixel_at(&self, x: usize, y: usize) -> u16 {
        self.encoder.value(self.block_at(x, y))
    }

    pub fn render(&self, mut buffer: FrameBufferDescriptor<'_>) {
        let width = buffer.width();
        self.log_pass(&buffer);
        // 描述子建立時已確認可容納 16 位元像素
        self.fill(buffer.pixels_mut(), width, &self.encoder);
    }

    /// 以指定的編碼器繪製，依光柵順序 (y 外層、x 內層) 每個像素剛好寫一次
    ///
    /// 緩衝區容量不足以容納 `width * height * encoder.bytes_per_pixel()`
    /// 位元組，或編碼器回報 0 位元組時不寫入任何像素並回傳錯誤。
    pub fn render_with<E>(&self, mut buffer: FrameBufferDescriptor<'_>, encoder: &E) -> Result<()>
    where
        E: PixelEncoder + ?Sized,
    {
        let width = buffer.width();
        self.log_pass(&buffer);
        let pixels = buffer.pixels_mut_for(encoder.bytes_per_pixel())?;
        self.fill(pixels, width, encoder);
        Ok(())
    }

    fn log_pass(&self, buffer: &FrameBufferDescriptor<'_>) {
        debug!(
            "rendering {}x{} checkerboard, tile {}px",
            buffer.width(),
            buffer.height(),
            self.tile_size
        );
    }

    // `pixels` 長度剛好是 width * height * bytes_per_pixel
    fn fill<E>(&self, pixels: &mut [u8], width: usize, encoder: &E)
    where
        E: PixelEncoder + ?Sized,
    {
        for (index, pixel) in pixels
            .chunks_exact_mut(encoder.bytes_per_pixel())
            .enumerate()
        {
            encoder.encode(self.block_at(index % width, index / width), pixel);
        }
    }
}

impl Default for PatternRenderer {
    fn default() -> Self {
        PatternRenderer::new(&VideoConfig::default())
    }
}

/// 以預設常數繪製棋盤格
pub fn render(buffer: FrameBufferDescriptor<'_>) {
    PatternRenderer::default().render(buffer);
}
