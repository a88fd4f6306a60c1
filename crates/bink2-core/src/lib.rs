//! # bink2-core
//!
//! Bink2 解码框架核心库, 提供基础类型定义、错误处理和位流工具.
//!
//! 本 crate 为上层编解码器提供底层基础设施: 统一错误类型, 小端位序 (LSB first)
//! 的比特流读写器, 以及像素格式描述.

pub mod bitreader;
pub mod bitwriter;
pub mod error;
pub mod pixel_format;

// 重导出常用类型
pub use error::{Bink2Error, Bink2Result};
pub use pixel_format::PixelFormat;
