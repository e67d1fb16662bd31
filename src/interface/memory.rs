//! Heap-backed shadow framebuffer

use super::{DisplayBufferProvider, ScreenGeometry};
use crate::core::pattern::buffer::pixel_offset;
use crate::core::pattern::FrameBufferDescriptor;
use crate::error::Result;

/// 以 `Vec<u8>` 模擬 framebuffer，配置方式與實體裝置相同
#[derive(Debug, Clone)]
pub struct MemoryFrameBuffer {
    geometry: ScreenGeometry,
    buffer: Vec<u8>,
}

impl MemoryFrameBuffer {
    pub fn new(width: usize, height: usize, bits_per_pixel: u32) -> Self {
        let geometry = ScreenGeometry::new(width, height, bits_per_pixel);
        Self {
            buffer: vec![0; geometry.screen_size()],
            geometry,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// 讀取 (x, y) 的 16 位元像素值，超出範圍時回傳 `None`
    pub fn pixel(&self, x: usize, y: usize) -> Option<u16> {
        if x >= self.geometry.width || y >= self.geometry.height {
            return None;
        }
        let offset = pixel_offset(self.geometry.width, x, y);
        let bytes = self.buffer.get(offset..offset + 2)?;
        Some(u16::from_le_bytes([bytes[0], bytes[1]]))
    }
}

impl DisplayBufferProvider for MemoryFrameBuffer {
    fn geometry(&self) -> ScreenGeometry {
        self.geometry
    }

    fn descriptor(&mut self) -> Result<FrameBufferDescriptor<'_>> {
        FrameBufferDescriptor::new(
            self.geometry.width,
            self.geometry.height,
            self.geometry.bits_per_pixel,
            &mut self.buffer,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_allocates_screen_size() {
        let fb = MemoryFrameBuffer::new(10, 4, 16);
        assert_eq!(fb.as_bytes().len(), 80);
        assert_eq!(fb.pixel(9, 3), Some(0));
        assert_eq!(fb.pixel(10, 0), None);
        assert_eq!(fb.pixel(0, 4), None);
    }

    #[test]
    fn test_pixel_reads_rendered_offsets() {
        let mut fb = MemoryFrameBuffer::new(24, 9, 16);
        crate::core::pattern::render(fb.descriptor().unwrap());
        assert_eq!(fb.pixel(7, 0), Some(0x0000));
        assert_eq!(fb.pixel(8, 0), Some(0x0200));
        assert_eq!(fb.pixel(8, 8), Some(0x0000));
        assert_eq!(fb.pixel(23, 8), Some(0x0200));
    }

    #[test]
    fn test_shallow_depth_cannot_hold_pattern() {
        let mut fb = MemoryFrameBuffer::new(8, 8, 8);
        assert!(matches!(
            fb.descriptor(),
            Err(Error::BufferTooSmall { needed: 128, actual: 64 })
        ));
    }
}
