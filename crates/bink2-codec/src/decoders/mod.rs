//! 解码器实现模块.

pub mod bink2;

use crate::codec_id::CodecId;
use crate::registry::CodecRegistry;

/// 注册所有内置解码器
pub fn register_all_decoders(registry: &mut CodecRegistry) {
    registry.register_decoder(CodecId::Bink2, "bink2", bink2::Bink2Decoder::create);
}
