//! 解码器 trait 定义.
//!
//! 所有解码器实现必须实现 `Decoder` trait.

use bink2_core::Bink2Result;

use crate::codec_id::CodecId;
use crate::codec_parameters::CodecParameters;
use crate::frame::Frame;
use crate::packet::Packet;

/// 解码器 trait
///
/// 解码流程:
/// 1. 调用 `open()` 提供流参数
/// 2. 调用 `send_packet()` 送入一帧压缩数据
/// 3. 调用 `receive_frame()` 取出解码后的帧
/// 4. 重复以上步骤直到所有数据处理完毕
/// 5. 送入空包 (flush) 后 `receive_frame()` 返回 `Eof`
pub trait Decoder: Send {
    /// 获取解码器标识
    fn codec_id(&self) -> CodecId;

    /// 获取解码器名称
    fn name(&self) -> &str;

    /// 使用参数配置解码器
    ///
    /// 默认实现为空操作, 允许不需要额外配置的解码器跳过此步骤.
    fn open(&mut self, _params: &CodecParameters) -> Bink2Result<()> {
        Ok(())
    }

    /// 送入一个压缩数据包进行解码
    ///
    /// # 返回
    /// - `Ok(())`: 数据包已接受
    /// - `Err(Bink2Error::NeedMoreData)`: 上一帧尚未取出, 需要先调用 `receive_frame()`
    /// - `Err(Bink2Error::InvalidData)`: 码流损坏, 本帧被丢弃, 参考帧保持不变
    fn send_packet(&mut self, packet: &Packet) -> Bink2Result<()>;

    /// 从解码器取出一帧解码数据
    ///
    /// # 返回
    /// - `Ok(frame)`: 成功取出一帧
    /// - `Err(Bink2Error::NeedMoreData)`: 需要送入更多数据包
    /// - `Err(Bink2Error::Eof)`: 所有帧已取出
    fn receive_frame(&mut self) -> Bink2Result<Frame>;

    /// 刷新解码器, 清空内部状态
    ///
    /// 用于 seek 后重置解码器状态, 参考帧一并丢弃.
    fn flush(&mut self);
}
