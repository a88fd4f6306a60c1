//! Bink2 视频解码器.
//!
//! 支持两种码流语法:
//! - `KB2a`..`KB2f`: 浮点 IDCT, 定长 DC/运动矢量字段, 每平面独立量化
//! - `KB2g` 及之后: 整数 IDCT, 变长码, 宏块类型 LRU 编码
//!
//! 帧按 32x32 宏块解码, 划分为若干水平条带. 解码成功的帧成为下一帧的参考帧;
//! 任何错误都丢弃整帧, 参考帧保持不变.

mod block;
mod flags;
mod idct;
mod motion;
mod picture;
mod predict;
mod slice;
mod tables;
mod types;
mod variant_f;
mod variant_g;
mod vlc;

#[cfg(test)]
mod tests;

pub use types::Variant;

use bink2_core::{Bink2Error, Bink2Result};
use byteorder::{ByteOrder, LittleEndian};
use log::{debug, warn};

use crate::codec_id::CodecId;
use crate::codec_parameters::CodecParameters;
use crate::decoder::Decoder;
use crate::frame::{Frame, PictureType};
use crate::packet::Packet;

use self::block::PredictionState;
use self::picture::Picture;
use self::slice::{CbpBitmaps, SliceLayout, StreamInfo, decode_frame, describe};
use self::variant_f::VariantF;
use self::variant_g::VariantG;

/// 侧数据标志字: 带 Alpha 平面
const SIDE_FLAG_ALPHA: u32 = 0x0010_0000;

/// 按版本选定的宏块语法
enum Pipeline {
    F(VariantF),
    G(VariantG),
}

/// 打开时确定的流参数
struct StreamConfig {
    /// 版本字母 (`KB2` 之后的字节)
    version: u8,
    variant: Variant,
    width: u32,
    height: u32,
    has_alpha: bool,
    layout: SliceLayout,
}

/// Bink2 解码器
pub struct Bink2Decoder {
    config: Option<StreamConfig>,
    pipeline: Pipeline,
    state: PredictionState,
    /// 最近一次成功解码的帧的行/列 CBP 位图
    bitmaps: CbpBitmaps,
    /// 参考帧 (上一帧成功解码的结果)
    reference: Option<Picture>,
    /// 已解码帧缓冲
    output_frame: Option<Frame>,
    /// 是否已收到刷新信号 (空包)
    flushing: bool,
}

/// 从 FourCC 与侧数据解析版本字母和标志字
fn parse_side_data(tag: &[u8; 4], extra: &[u8]) -> Bink2Result<(u8, u32)> {
    if extra.len() < 4 {
        return Err(Bink2Error::InvalidData(format!(
            "bink2 侧数据至少需要 4 字节, 实际 {} 字节",
            extra.len()
        )));
    }
    if extra.len() >= 8 && &extra[..3] == b"KB2" {
        return Ok((extra[3], LittleEndian::read_u32(&extra[4..8])));
    }
    if &tag[..3] != b"KB2" {
        return Err(Bink2Error::Unsupported(format!(
            "不是 bink2 码流: FourCC {:?}",
            String::from_utf8_lossy(tag)
        )));
    }
    Ok((tag[3], LittleEndian::read_u32(&extra[..4])))
}

impl Bink2Decoder {
    /// 创建解码器实例 (工厂函数)
    pub fn create() -> Bink2Result<Box<dyn Decoder>> {
        Ok(Box::new(Self::new()))
    }

    pub fn new() -> Self {
        // 码表只构建一次, 之后所有实例共享
        vlc::codebooks();
        Self {
            config: None,
            pipeline: Pipeline::G(VariantG::new()),
            state: PredictionState::new(),
            bitmaps: CbpBitmaps::default(),
            reference: None,
            output_frame: None,
            flushing: false,
        }
    }

    /// 当前流使用的语法变体 (未打开时为 `None`)
    pub fn variant(&self) -> Option<Variant> {
        self.config.as_ref().map(|c| c.variant)
    }

    /// 当前流的条带数 (未打开时为 `None`)
    pub fn slice_count(&self) -> Option<usize> {
        self.config.as_ref().map(|c| c.layout.count())
    }

    /// 最近一次成功解码的帧的行/列 CBP 位图
    pub fn cbp_bitmaps(&self) -> (&[bool], &[bool]) {
        (&self.bitmaps.rows, &self.bitmaps.cols)
    }

    /// 解码一个数据包, 返回重建图像与本帧的行/列位图
    ///
    /// 两者都只在整帧成功后由调用方提交.
    fn decode_packet(&mut self, packet: &Packet) -> Bink2Result<(Picture, CbpBitmaps)> {
        let config = self
            .config
            .as_ref()
            .ok_or_else(|| Bink2Error::Codec("解码器未打开, 请先调用 open()".into()))?;
        let (wa, ha) = (
            (config.width as usize + 31) & !31,
            (config.height as usize + 31) & !31,
        );
        // 帧间帧以参考帧为底, 越界的运动补偿分区保留参考像素
        let mut pic = match (&self.reference, packet.is_keyframe) {
            (Some(r), false) => r.clone(),
            _ => Picture::new(wa, ha, config.has_alpha),
        };
        let stream = StreamInfo {
            width: config.width as usize,
            height: config.height as usize,
            has_alpha: config.has_alpha,
            layout: &config.layout,
        };
        let reference = self.reference.as_ref();
        let keyframe = packet.is_keyframe;
        let mut bitmaps = CbpBitmaps::default();
        match &mut self.pipeline {
            Pipeline::F(dec) => decode_frame(
                &packet.data,
                keyframe,
                &stream,
                dec,
                &mut self.state,
                &mut bitmaps,
                &mut pic,
                reference,
            )?,
            Pipeline::G(dec) => decode_frame(
                &packet.data,
                keyframe,
                &stream,
                dec,
                &mut self.state,
                &mut bitmaps,
                &mut pic,
                reference,
            )?,
        }
        Ok((pic, bitmaps))
    }
}

impl Default for Bink2Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for Bink2Decoder {
    fn codec_id(&self) -> CodecId {
        CodecId::Bink2
    }

    fn name(&self) -> &str {
        "bink2"
    }

    fn open(&mut self, params: &CodecParameters) -> Bink2Result<()> {
        let video = params
            .video()
            .ok_or_else(|| Bink2Error::InvalidArgument("bink2 解码器需要视频参数".into()))?;
        if video.width == 0 || video.height == 0 {
            return Err(Bink2Error::InvalidArgument("宽度和高度不能为 0".into()));
        }

        let (version, side_flags) = parse_side_data(&params.codec_tag, &params.extra_data)?;
        if !version.is_ascii_lowercase() {
            return Err(Bink2Error::Unsupported(format!(
                "未知的 bink2 版本: {:#04x}",
                version
            )));
        }
        let variant = Variant::from_version(version);
        let has_alpha = side_flags & SIDE_FLAG_ALPHA != 0;
        let layout = SliceLayout::new(version, side_flags, video.height as usize)?;

        debug!(
            "打开 bink2 解码器: {}x{}, 版本 KB2{}, {}, alpha={}",
            video.width,
            video.height,
            version as char,
            describe(variant, &layout),
            has_alpha,
        );

        self.pipeline = match variant {
            Variant::F => Pipeline::F(VariantF::new()),
            Variant::G => Pipeline::G(VariantG::new()),
        };
        self.config = Some(StreamConfig {
            version,
            variant,
            width: video.width,
            height: video.height,
            has_alpha,
            layout,
        });
        self.state = PredictionState::new();
        self.bitmaps = CbpBitmaps::default();
        self.reference = None;
        self.output_frame = None;
        self.flushing = false;
        Ok(())
    }

    fn send_packet(&mut self, packet: &Packet) -> Bink2Result<()> {
        if self.config.is_none() {
            return Err(Bink2Error::Codec("解码器未打开, 请先调用 open()".into()));
        }
        if self.output_frame.is_some() {
            return Err(Bink2Error::NeedMoreData);
        }

        // 空包 = flush
        if packet.is_empty() {
            self.flushing = true;
            return Ok(());
        }

        let (pic, bitmaps) = match self.decode_packet(packet) {
            Ok(decoded) => decoded,
            Err(e) => {
                let err = e.into_frame_error();
                warn!("bink2 帧解码失败 (pts={}), 丢弃本帧: {}", packet.pts, err);
                return Err(err);
            }
        };

        let Some(config) = self.config.as_ref() else {
            return Err(Bink2Error::Codec("解码器未打开, 请先调用 open()".into()));
        };
        let mut frame = pic.to_video_frame(config.width, config.height);
        frame.pts = packet.pts;
        frame.duration = packet.duration;
        frame.is_keyframe = packet.is_keyframe;
        frame.picture_type = if packet.is_keyframe {
            PictureType::I
        } else {
            PictureType::P
        };
        debug!(
            "KB2{} 帧解码完成: pts={}, 类型={:?}, {} 字节",
            config.version as char,
            packet.pts,
            frame.picture_type,
            packet.size(),
        );

        self.reference = Some(pic);
        self.bitmaps = bitmaps;
        self.output_frame = Some(Frame::Video(frame));
        Ok(())
    }

    fn receive_frame(&mut self) -> Bink2Result<Frame> {
        if let Some(frame) = self.output_frame.take() {
            return Ok(frame);
        }
        if self.flushing {
            return Err(Bink2Error::Eof);
        }
        Err(Bink2Error::NeedMoreData)
    }

    fn flush(&mut self) {
        self.reference = None;
        self.output_frame = None;
        self.flushing = false;
    }
}
