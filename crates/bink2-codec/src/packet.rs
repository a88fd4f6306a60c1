//! 压缩数据包 (Packet).
//!
//! 表示容器层交给解码器的一帧压缩数据.

use bytes::Bytes;

/// 无效时间戳
pub const NOPTS_VALUE: i64 = i64::MIN;

/// 压缩数据包
///
/// Bink2 中一个 Packet 恰好对应一帧视频的压缩数据, 关键帧标志由容器提供.
#[derive(Debug, Clone)]
pub struct Packet {
    /// 压缩数据
    pub data: Bytes,
    /// 显示时间戳 (PTS)
    pub pts: i64,
    /// 解码时间戳 (DTS)
    pub dts: i64,
    /// 数据包时长 (以容器时间基为单位)
    pub duration: i64,
    /// 所属流的索引
    pub stream_index: usize,
    /// 是否为关键帧
    pub is_keyframe: bool,
    /// 在容器中的字节偏移量 (-1 表示未知)
    pub pos: i64,
}

impl Packet {
    /// 创建空数据包
    pub fn empty() -> Self {
        Self {
            data: Bytes::new(),
            pts: NOPTS_VALUE,
            dts: NOPTS_VALUE,
            duration: 0,
            stream_index: 0,
            is_keyframe: false,
            pos: -1,
        }
    }

    /// 从数据创建数据包
    pub fn from_data(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            ..Self::empty()
        }
    }

    /// 数据大小 (字节)
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// 是否为空包 (flush packet)
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
