//! 核心元件
pub mod pattern;
