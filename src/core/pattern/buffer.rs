use log::warn;

use crate::error::{Error, Result};

/// 繪製時每個像素寫入的位元組數
pub const BYTES_PER_PIXEL: usize = 2;

/// 描述一塊外部擁有、於單次繪製期間獨佔借用的像素緩衝區
#[derive(Debug)]
pub struct FrameBufferDescriptor<'a> {
    width: usize,
    height: usize,
    bits_per_pixel: u32,
    buffer: &'a mut [u8],
}

impl<'a> FrameBufferDescriptor<'a> {
    /// 建立描述子
    ///
    /// 寬高不可為零，且 `buffer` 至少要能容納 `width * height` 個 16 位元像素。
    /// 16 以外的色深仍可建立，但只會記錄警告。
    pub fn new(
        width: usize,
        height: usize,
        bits_per_pixel: u32,
        buffer: &'a mut [u8],
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyScreen { width, height });
        }

        let needed = width
            .saturating_mul(height)
            .saturating_mul(BYTES_PER_PIXEL);
        if buffer.len() < needed {
            return Err(Error::BufferTooSmall {
                needed,
                actual: buffer.len(),
            });
        }

        if bits_per_pixel != 16 {
            warn!(
                "framebuffer reports {} bpp, pattern is written as 16 bpp",
                bits_per_pixel
            );
        }

        Ok(Self {
            width,
            height,
            bits_per_pixel,
            buffer,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn bits_per_pixel(&self) -> u32 {
        self.bits_per_pixel
    }

    /// 像素 (x, y) 的位元組偏移
    pub fn pixel_offset(&self, x: usize, y: usize) -> usize {
        pixel_offset(self.width, x, y)
    }

    /// 繪製範圍 `[0, width * height * 2)`
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        let len = self.width * self.height * BYTES_PER_PIXEL;
        &mut self.buffer[..len]
    }

    /// 以每像素 `bytes_per_pixel` 位元組計算的繪製範圍
    pub fn pixels_mut_for(&mut self, bytes_per_pixel: usize) -> Result<&mut [u8]> {
        if bytes_per_pixel == 0 {
            return Err(Error::ZeroPixelSize);
        }
        let needed = self
            .width
            .saturating_mul(self.height)
            .saturating_mul(bytes_per_pixel);
        if self.buffer.len() < needed {
            return Err(Error::BufferTooSmall {
                needed,
                actual: self.buffer.len(),
            });
        }
        Ok(&mut self.buffer[..needed])
    }
}

/// 寬度為 `width` 的 16 位元緩衝區中，像素 (x, y) 的位元組偏移
pub fn pixel_offset(width: usize, x: usize, y: usize) -> usize {
    (x + y * width) * BYTES_PER_PIXEL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_short_buffer() {
        let mut bytes = vec![0u8; 16 * 8 * 2 - 1];
        let err = FrameBufferDescriptor::new(16, 8, 16, &mut bytes).unwrap_err();
        match err {
            Error::BufferTooSmall { needed, actual } => {
                assert_eq!(needed, 256);
                assert_eq!(actual, 255);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_empty_geometry() {
        let mut bytes = vec![0u8; 32];
        assert!(matches!(
            FrameBufferDescriptor::new(0, 8, 16, &mut bytes),
            Err(Error::EmptyScreen { .. })
        ));
        assert!(matches!(
            FrameBufferDescriptor::new(8, 0, 16, &mut bytes),
            Err(Error::EmptyScreen { .. })
        ));
    }

    #[test]
    fn test_pixel_range_excludes_padding() {
        let mut bytes = vec![0u8; 4 * 2 * 2 + 6];
        let mut descriptor = FrameBufferDescriptor::new(4, 2, 16, &mut bytes).unwrap();
        assert_eq!(descriptor.pixels_mut().len(), 16);
        assert_eq!(descriptor.pixel_offset(3, 1), 14);
    }

    #[test]
    fn test_range_sized_by_encoder() {
        let mut bytes = vec![0u8; 4 * 2 * 4];
        let mut descriptor = FrameBufferDescriptor::new(4, 2, 32, &mut bytes).unwrap();
        assert_eq!(descriptor.pixels_mut_for(4).unwrap().len(), 32);
        assert_eq!(descriptor.pixels_mut_for(1).unwrap().len(), 8);
        assert!(matches!(
            descriptor.pixels_mut_for(5),
            Err(Error::BufferTooSmall { needed: 40, actual: 32 })
        ));
        assert!(matches!(descriptor.pixels_mut_for(0), Err(Error::ZeroPixelSize)));
    }

    #[test]
    fn test_other_depths_are_accepted() {
        // 32 bpp 的映射比 16 bpp 需要的空間大
        let mut bytes = vec![0u8; 8 * 8 * 4];
        let descriptor = FrameBufferDescriptor::new(8, 8, 32, &mut bytes).unwrap();
        assert_eq!(descriptor.bits_per_pixel(), 32);
    }
}
