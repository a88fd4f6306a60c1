//! 编解码器参数.
//!
//! 描述打开解码器时由容器层提供的配置参数.

use bink2_core::PixelFormat;

use crate::codec_id::CodecId;

/// 编解码器参数
///
/// 传递给编解码器的配置信息, 通常从容器格式中提取.
#[derive(Debug, Clone)]
pub struct CodecParameters {
    /// 编解码器标识
    pub codec_id: CodecId,
    /// 容器中的 FourCC (Bink2 为 `KB2` + 版本字母)
    pub codec_tag: [u8; 4],
    /// 额外数据 (Bink2 为 4 字节小端标志字, 或 `KB2x` + 标志字共 8 字节)
    pub extra_data: Vec<u8>,
    /// 码率 (bits/s)
    pub bit_rate: u64,
    /// 媒体类型特定参数
    pub params: CodecParamsType,
}

/// 媒体类型特定参数
#[derive(Debug, Clone)]
pub enum CodecParamsType {
    /// 视频参数
    Video(VideoCodecParams),
    /// 无特定参数
    None,
}

/// 视频编解码器参数
#[derive(Debug, Clone)]
pub struct VideoCodecParams {
    /// 宽度 (像素)
    pub width: u32,
    /// 高度 (像素)
    pub height: u32,
    /// 像素格式 (解码器会按码流标志字重新决定)
    pub pixel_format: PixelFormat,
}

impl CodecParameters {
    /// 获取视频参数 (如果是视频流)
    pub fn video(&self) -> Option<&VideoCodecParams> {
        match &self.params {
            CodecParamsType::Video(v) => Some(v),
            CodecParamsType::None => None,
        }
    }
}
