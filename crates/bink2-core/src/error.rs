//! 统一错误类型定义.
//!
//! 所有 bink2 crate 共用的错误类型, 支持跨模块传播.

use thiserror::Error;

/// 框架统一错误类型
#[derive(Debug, Error)]
pub enum Bink2Error {
    /// I/O 错误
    #[error("I/O 错误: {0}")]
    Io(#[from] std::io::Error),

    /// 无效参数
    #[error("无效参数: {0}")]
    InvalidArgument(String),

    /// 不支持的操作或码流版本
    #[error("不支持的操作: {0}")]
    Unsupported(String),

    /// 编解码器状态错误
    #[error("编解码器错误: {0}")]
    Codec(String),

    /// 数据不足, 需要更多输入
    #[error("数据不足, 需要更多输入")]
    NeedMoreData,

    /// 已到达流末尾
    #[error("已到达流末尾")]
    Eof,

    /// 未找到指定的编解码器
    #[error("未找到编解码器: {0}")]
    CodecNotFound(String),

    /// 无效数据 (损坏的码流, 越界的量化值, 非法码字等)
    #[error("无效数据: {0}")]
    InvalidData(String),

    /// 位流读取越过缓冲区末尾
    #[error("位流已截断: 需要 {needed} 位, 剩余 {left} 位")]
    Truncated {
        /// 本次读取需要的位数
        needed: usize,
        /// 缓冲区中剩余的位数
        left: usize,
    },
}

impl Bink2Error {
    /// 将位流截断折算为帧级无效数据, 其余错误原样返回
    pub fn into_frame_error(self) -> Self {
        match self {
            Self::Truncated { needed, left } => Self::InvalidData(format!(
                "帧数据被截断: 需要 {} 位, 剩余 {} 位",
                needed, left,
            )),
            Self::Io(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                Self::InvalidData(format!("帧数据被截断: {}", e))
            }
            other => other,
        }
    }
}

/// 框架统一 Result 类型
pub type Bink2Result<T> = Result<T, Bink2Error>;
