//! 顯示相關常數

use std::path::PathBuf;

/// 預設的 framebuffer 裝置
pub const DEFAULT_DEVICE_PATH: &str = "/dev/fb0";

/// 棋盤格邊長（像素）
pub const TILE_SIZE: usize = 8;

/// 暗格：全黑
pub const G2_OFF: u16 = 0x0000;

/// 亮格：只點亮綠色通道的 bit 9 (G2)
pub const G2_ON: u16 = 0x0200;

/// 顯示與圖樣配置
#[derive(Debug, Clone, PartialEq)]
pub struct VideoConfig {
    pub device_path: PathBuf,
    pub tile_size: usize,
    pub off_color: u16,
    pub on_color: u16,
}

impl Default for VideoConfig {
    fn default() -> Self {
        VideoConfig {
            device_path: PathBuf::from(DEFAULT_DEVICE_PATH),
            tile_size: TILE_SIZE,
            off_color: G2_OFF,
            on_color: G2_ON,
        }
    }
}
