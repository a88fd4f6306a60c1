//! # bink2-codec
//!
//! Bink2 解码框架编解码器库, 提供解码器框架与 Packet/Frame 抽象.
//!
//! ## 支持的编解码器
//!
//! - **解码器**: Bink2 视频 (KB2a..KB2f 旧版码流, KB2g 及之后的新版码流, 可选 Alpha 平面)
//!
//! ## 使用示例
//!
//! ```rust
//! use bink2_codec::{CodecId, CodecRegistry};
//!
//! let mut reg = CodecRegistry::new();
//! bink2_codec::register_all(&mut reg);
//!
//! // 按 CodecId 创建解码器实例
//! let decoder = reg.create_decoder(CodecId::Bink2).unwrap();
//! assert_eq!(decoder.name(), "bink2");
//! ```

pub mod codec_id;
pub mod codec_parameters;
pub mod decoder;
pub mod decoders;
pub mod frame;
pub mod packet;
pub mod registry;

// 重导出常用类型
pub use codec_id::CodecId;
pub use codec_parameters::{CodecParameters, CodecParamsType, VideoCodecParams};
pub use decoder::Decoder;
pub use frame::{Frame, PictureType, VideoFrame};
pub use packet::Packet;
pub use registry::CodecRegistry;

/// 注册所有内置编解码器
pub fn register_all(registry: &mut CodecRegistry) {
    decoders::register_all_decoders(registry);
}
