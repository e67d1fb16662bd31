//! External interface module

#[cfg(unix)]
pub mod fbdev;
pub mod memory;

#[cfg(unix)]
pub use fbdev::FbDevice;
pub use memory::MemoryFrameBuffer;

use crate::core::pattern::FrameBufferDescriptor;
use crate::error::Result;

/// 顯示器回報的幾何資訊
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenGeometry {
    pub width: usize,
    pub height: usize,
    pub bits_per_pixel: u32,
    /// 虛擬解析度的寬度，與 `width` 不同時實際列寬會不一樣
    pub virtual_width: usize,
}

impl ScreenGeometry {
    pub fn new(width: usize, height: usize, bits_per_pixel: u32) -> Self {
        Self {
            width,
            height,
            bits_per_pixel,
            virtual_width: width,
        }
    }

    /// 需要映射的位元組數
    pub fn screen_size(&self) -> usize {
        self.width * self.height * self.bits_per_pixel as usize / 8
    }
}

/// 提供可寫入的顯示緩衝區
///
/// 緩衝區在實作者存活期間保持有效，描述子的生命週期綁定在 `&mut self` 上，
/// 因此繪製期間只會有一個寫入者。
pub trait DisplayBufferProvider {
    fn geometry(&self) -> ScreenGeometry;

    fn descriptor(&mut self) -> Result<FrameBufferDescriptor<'_>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_size() {
        assert_eq!(ScreenGeometry::new(640, 480, 16).screen_size(), 614_400);
        assert_eq!(ScreenGeometry::new(640, 480, 32).screen_size(), 1_228_800);
        assert_eq!(ScreenGeometry::new(3, 1, 8).screen_size(), 3);
    }
}
