//! Linux fbdev 裝置：開檔、查詢解析度、映射記憶體

use std::fs::{File, OpenOptions};
use std::io;
use std::os::unix::io::AsRawFd;
use std::path::{Path, PathBuf};
use std::ptr;

use log::{debug, info, warn};

use super::{DisplayBufferProvider, ScreenGeometry};
use crate::core::pattern::FrameBufferDescriptor;
use crate::error::{Error, Result};

/// `<linux/fb.h>` 的 FBIOGET_VSCREENINFO
const FBIOGET_VSCREENINFO: libc::c_ulong = 0x4600;

/// `struct fb_bitfield`
#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct FbBitfield {
    pub offset: u32,
    pub length: u32,
    pub msb_right: u32,
}

/// `struct fb_var_screeninfo`
#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct FbVarScreenInfo {
    pub xres: u32,
    pub yres: u32,
    pub xres_virtual: u32,
    pub yres_virtual: u32,
    pub xoffset: u32,
    pub yoffset: u32,
    pub bits_per_pixel: u32,
    pub grayscale: u32,
    pub red: FbBitfield,
    pub green: FbBitfield,
    pub blue: FbBitfield,
    pub transp: FbBitfield,
    pub nonstd: u32,
    pub activate: u32,
    pub height: u32,
    pub width: u32,
    pub accel_flags: u32,
    pub pixclock: u32,
    pub left_margin: u32,
    pub right_margin: u32,
    pub upper_margin: u32,
    pub lower_margin: u32,
    pub hsync_len: u32,
    pub vsync_len: u32,
    pub sync: u32,
    pub vmode: u32,
    pub rotate: u32,
    pub colorspace: u32,
    pub reserved: [u32; 4],
}

impl From<&FbVarScreenInfo> for ScreenGeometry {
    fn from(info: &FbVarScreenInfo) -> Self {
        ScreenGeometry {
            width: info.xres as usize,
            height: info.yres as usize,
            bits_per_pixel: info.bits_per_pixel,
            virtual_width: info.xres_virtual as usize,
        }
    }
}

/// 已映射的 framebuffer 裝置，drop 時解除映射並關閉檔案
#[derive(Debug)]
pub struct FbDevice {
    path: PathBuf,
    geometry: ScreenGeometry,
    map: *mut u8,
    len: usize,
    _file: File,
}

impl FbDevice {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&path)
            .map_err(|source| Error::Open {
                path: path.clone(),
                source,
            })?;

        let info = read_var_screeninfo(&file).map_err(|source| Error::Geometry {
            path: path.clone(),
            source,
        })?;
        let geometry = ScreenGeometry::from(&info);
        debug!("{}: {:?}", path.display(), info);

        if geometry.width == 0 || geometry.height == 0 {
            return Err(Error::EmptyScreen {
                width: geometry.width,
                height: geometry.height,
            });
        }
        info!(
            "{}: {}x{} @ {} bpp",
            path.display(),
            geometry.width,
            geometry.height,
            geometry.bits_per_pixel
        );
        if geometry.virtual_width != geometry.width {
            warn!(
                "virtual width {} differs from visible width {}, rows are addressed with the visible width",
                geometry.virtual_width, geometry.width
            );
        }

        let len = geometry.screen_size();
        let map = unsafe {
            libc::mmap(
                ptr::null_mut(),
                len,
                libc::PROT_READ | libc::PROT_WRITE,
                libc::MAP_SHARED,
                file.as_raw_fd(),
                0,
            )
        };
        if map == libc::MAP_FAILED {
            return Err(Error::Map {
                len,
                source: io::Error::last_os_error(),
            });
        }
        debug!("mapped {} bytes at {:p}", len, map);

        Ok(Self {
            path,
            geometry,
            map: map as *mut u8,
            len,
            _file: file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DisplayBufferProvider for FbDevice {
    fn geometry(&self) -> ScreenGeometry {
        self.geometry
    }

    fn descriptor(&mut self) -> Result<FrameBufferDescriptor<'_>> {
        // 映射在 self 存活期間有效，&mut self 保證沒有其他借用
        let bytes = unsafe { std::slice::from_raw_parts_mut(self.map, self.len) };
        FrameBufferDescriptor::new(
            self.geometry.width,
            self.geometry.height,
            self.geometry.bits_per_pixel,
            bytes,
        )
    }
}

impl Drop for FbDevice {
    fn drop(&mut self) {
        if unsafe { libc::munmap(self.map as *mut libc::c_void, self.len) } != 0 {
            warn!(
                "munmap {} failed: {}",
                self.path.display(),
                io::Error::last_os_error()
            );
        }
    }
}

fn read_var_screeninfo(file: &File) -> io::Result<FbVarScreenInfo> {
    let mut info = FbVarScreenInfo::default();
    let ret = unsafe {
        libc::ioctl(
            file.as_raw_fd(),
            FBIOGET_VSCREENINFO as _,
            &mut info as *mut FbVarScreenInfo,
        )
    };
    if ret == -1 {
        return Err(io::Error::last_os_error());
    }
    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screeninfo_layout() {
        // 與核心標頭一致：40 個 u32
        assert_eq!(std::mem::size_of::<FbVarScreenInfo>(), 160);
    }

    #[test]
    fn test_missing_device_is_acquisition_error() {
        let err = FbDevice::open("/dev/fbcheck-does-not-exist").unwrap_err();
        assert!(matches!(err, Error::Open { .. }));
        assert!(err.is_acquisition());
    }

    #[test]
    fn test_non_framebuffer_fails_geometry_query() {
        let err = FbDevice::open("/dev/null").unwrap_err();
        assert!(matches!(err, Error::Geometry { .. }));
        assert!(err.is_acquisition());
    }

    #[test]
    fn test_geometry_from_screeninfo() {
        let info = FbVarScreenInfo {
            xres: 640,
            yres: 480,
            xres_virtual: 640,
            yres_virtual: 960,
            bits_per_pixel: 16,
            ..FbVarScreenInfo::default()
        };
        let geometry = ScreenGeometry::from(&info);
        assert_eq!(geometry, ScreenGeometry::new(640, 480, 16));
        assert_eq!(geometry.screen_size(), 614_400);
    }
}
