//! # Bink2
//!
//! 纯 Rust 实现的 Bink2 视频解码框架.
//!
//! - **解码**: `KB2a`..`KB2f` 旧版码流与 `KB2g` 及之后的新版码流, 可选 Alpha 平面
//! - **输出**: 4:2:0 YUV 平面帧 (带 Alpha 时为 YUVA)
//! - **日志**: 基于 tracing 的控制台 + 按日滚动文件日志
//!
//! # 快速开始
//!
//! ```rust,no_run
//! use bink2::codec::{CodecId, CodecParameters, CodecParamsType, Packet, VideoCodecParams};
//! use bink2::core::PixelFormat;
//!
//! let registry = bink2::default_codec_registry();
//! let mut decoder = registry.create_decoder(CodecId::Bink2).unwrap();
//! decoder
//!     .open(&CodecParameters {
//!         codec_id: CodecId::Bink2,
//!         codec_tag: *b"KB2g",
//!         extra_data: 0u32.to_le_bytes().to_vec(),
//!         bit_rate: 0,
//!         params: CodecParamsType::Video(VideoCodecParams {
//!             width: 640,
//!             height: 360,
//!             pixel_format: PixelFormat::Yuv420p,
//!         }),
//!     })
//!     .unwrap();
//!
//! let mut pkt = Packet::from_data(std::fs::read("frame0.bin").unwrap());
//! pkt.is_keyframe = true;
//! decoder.send_packet(&pkt).unwrap();
//! let _frame = decoder.receive_frame().unwrap();
//! ```
//!
//! # Crate 结构
//!
//! | Crate | 功能 |
//! |-------|------|
//! | `bink2-core` | 错误类型, 位流读写, 像素格式 |
//! | `bink2-codec` | 解码器框架与 Bink2 解码器 |

/// 核心类型与工具
pub use bink2_core as core;

/// 解码器框架
pub use bink2_codec as codec;

pub mod logging;

/// 获取版本号
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// 创建已注册所有内置解码器的注册表
pub fn default_codec_registry() -> bink2_codec::CodecRegistry {
    let mut registry = bink2_codec::CodecRegistry::new();
    bink2_codec::register_all(&mut registry);
    registry
}
