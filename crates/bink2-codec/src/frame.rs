//! 解码后的帧数据 (Frame).
//!
//! 表示解码后的原始视频数据.

use bink2_core::PixelFormat;

use crate::packet::NOPTS_VALUE;

/// 视频帧
///
/// 包含解码后的原始像素数据, 按平面存储 (Y, U, V, 可选 A).
/// 平面尺寸按 32 像素对齐, 调用方按 `coded_width`/`coded_height` 裁剪显示区域.
#[derive(Debug, Clone)]
pub struct VideoFrame {
    /// 各平面的像素数据
    pub data: Vec<Vec<u8>>,
    /// 各平面每行的字节数 (linesize / stride)
    pub linesize: Vec<usize>,
    /// 解码宽度 (32 对齐, 像素)
    pub width: u32,
    /// 解码高度 (32 对齐, 像素)
    pub height: u32,
    /// 显示宽度 (像素)
    pub coded_width: u32,
    /// 显示高度 (像素)
    pub coded_height: u32,
    /// 像素格式
    pub pixel_format: PixelFormat,
    /// 显示时间戳 (PTS)
    pub pts: i64,
    /// 帧时长 (以容器时间基为单位)
    pub duration: i64,
    /// 是否为关键帧
    pub is_keyframe: bool,
    /// 图片类型 (I/P 帧)
    pub picture_type: PictureType,
}

impl VideoFrame {
    /// 创建空的视频帧
    pub fn new(width: u32, height: u32, pixel_format: PixelFormat) -> Self {
        let plane_count = pixel_format.plane_count() as usize;
        Self {
            data: vec![Vec::new(); plane_count],
            linesize: vec![0; plane_count],
            width,
            height,
            coded_width: width,
            coded_height: height,
            pixel_format,
            pts: NOPTS_VALUE,
            duration: 0,
            is_keyframe: false,
            picture_type: PictureType::None,
        }
    }

    /// 读取指定平面上一个像素 (越界返回 None)
    pub fn pixel(&self, plane: usize, x: usize, y: usize) -> Option<u8> {
        let stride = *self.linesize.get(plane)?;
        if x >= stride {
            return None;
        }
        self.data.get(plane)?.get(y * stride + x).copied()
    }
}

/// 帧 (解码输出的统一包装)
#[derive(Debug, Clone)]
pub enum Frame {
    /// 视频帧
    Video(VideoFrame),
}

/// 图片类型 (I/P 帧)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PictureType {
    /// 未指定
    #[default]
    None,
    /// I 帧 (关键帧, 全部宏块帧内编码)
    I,
    /// P 帧 (参考上一帧)
    P,
}
