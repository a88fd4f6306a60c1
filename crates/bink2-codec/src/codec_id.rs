//! 编解码器标识符.
//!
//! 为每种编解码算法分配唯一标识, 并负责从容器 FourCC 识别编解码器.

use std::fmt;

/// 编解码器标识符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CodecId {
    /// 未知编解码器
    None,
    /// RAD Game Tools Bink Video 2
    Bink2,
}

impl CodecId {
    /// 获取编解码器名称
    pub const fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Bink2 => "bink2",
        }
    }

    /// 从容器 FourCC 识别编解码器
    ///
    /// Bink2 的 FourCC 形如 `KB2a`..`KB2j`, 第四个字节为码流版本号.
    pub fn from_fourcc(tag: &[u8; 4]) -> Self {
        if &tag[..3] == b"KB2" && tag[3].is_ascii_lowercase() {
            Self::Bink2
        } else {
            Self::None
        }
    }
}

impl fmt::Display for CodecId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
