//! 像素編碼

use crate::config::video::{G2_OFF, G2_ON};

/// 將棋盤格的格子奇偶 (0 或 1) 編碼為單一像素的位元組
pub trait PixelEncoder {
    /// 每個像素佔用的位元組數
    fn bytes_per_pixel(&self) -> usize;

    /// 將 `block` 對應的顏色寫入 `out`，`out` 長度為 `bytes_per_pixel()`
    fn encode(&self, block: u8, out: &mut [u8]);
}

/// 16 bpp 打包格式，little-endian 存放
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb565Encoder {
    pub off: u16,
    pub on: u16,
}

impl Rgb565Encoder {
    /// 黑色與只點亮 G2 的暗綠色
    pub const G2: Self = Self::new(G2_OFF, G2_ON);

    pub const fn new(off: u16, on: u16) -> Self {
        Self { off, on }
    }

    pub fn value(&self, block: u8) -> u16 {
        if block & 1 == 1 {
            self.on
        } else {
            self.off
        }
    }
}

impl Default for Rgb565Encoder {
    fn default() -> Self {
        Self::G2
    }
}

impl PixelEncoder for Rgb565Encoder {
    fn bytes_per_pixel(&self) -> usize {
        2
    }

    fn encode(&self, block: u8, out: &mut [u8]) {
        // 低位元組在前
        out.copy_from_slice(&self.value(block).to_le_bytes());
    }
}

/// RGB565 像素值
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub fn red(&self) -> u8 {
        ((self.0 >> 11) & 0x1F) as u8
    }

    pub fn green(&self) -> u8 {
        ((self.0 >> 5) & 0x3F) as u8
    }

    pub fn blue(&self) -> u8 {
        (self.0 & 0x1F) as u8
    }

    /// 轉成 0xAARRGGBB，alpha 固定為不透明
    pub fn to_argb8888(&self) -> u32 {
        let r = (self.red() << 3) | (self.red() >> 2);
        let g = (self.green() << 2) | (self.green() >> 4);
        let b = (self.blue() << 3) | (self.blue() >> 2);
        0xFF00_0000 | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
    }
}

impl From<u16> for Rgb565 {
    fn from(value: u16) -> Self {
        Rgb565(value)
    }
}
