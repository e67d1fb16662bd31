use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 測試圖樣程式的錯誤類型
#[derive(Error, Debug)]
pub enum Error {
    /// 無法開啟 framebuffer 裝置
    #[error("cannot open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// FBIOGET_VSCREENINFO 失敗
    #[error("cannot read screen info from {}", path.display())]
    Geometry {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 裝置回報的解析度為零
    #[error("framebuffer reports an empty screen ({width}x{height})")]
    EmptyScreen { width: usize, height: usize },

    /// mmap 失敗
    #[error("cannot map {len} bytes")]
    Map {
        len: usize,
        #[source]
        source: io::Error,
    },

    /// 緩衝區容量不足以容納 width * height 個像素
    #[error("buffer holds {actual} bytes, {needed} required")]
    BufferTooSmall { needed: usize, actual: usize },

    /// 像素編碼器回報每像素 0 位元組
    #[error("pixel encoder reports zero bytes per pixel")]
    ZeroPixelSize,
}

impl Error {
    /// 取得緩衝區失敗（開檔、查詢幾何資訊）
    pub fn is_acquisition(&self) -> bool {
        matches!(
            self,
            Error::Open { .. } | Error::Geometry { .. } | Error::EmptyScreen { .. }
        )
    }

    /// 映射或描述緩衝區失敗
    pub fn is_mapping(&self) -> bool {
        matches!(self, Error::Map { .. } | Error::BufferTooSmall { .. })
    }
}

/// 結果類型
pub type Result<T> = std::result::Result<T, Error>;
