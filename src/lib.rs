//! framebuffer 棋盤格測試圖樣庫
pub mod config;
pub mod core;
pub mod error;
pub mod interface;
pub mod utils;

pub use crate::config::{Config, ConfigBuilder};
pub use crate::core::pattern::{render, FrameBufferDescriptor, PatternRenderer};
pub use crate::error::{Error, Result};
pub use crate::interface::{DisplayBufferProvider, MemoryFrameBuffer, ScreenGeometry};
