//! 解码图像缓冲.
//!
//! 平面尺寸按宏块对齐: 亮度与 Alpha 为 32 的倍数, 色度为其一半.

use bink2_core::PixelFormat;

use crate::frame::VideoFrame;

/// 单个图像平面
#[derive(Clone)]
pub(super) struct Plane {
    pub data: Vec<u8>,
    /// 行跨度, 等于对齐后的宽度
    pub stride: usize,
    pub height: usize,
}

impl Plane {
    fn new(width: usize, height: usize) -> Self {
        Self {
            data: vec![0; width * height],
            stride: width,
            height,
        }
    }

    pub(super) fn width(&self) -> usize {
        self.stride
    }

    pub(super) fn fill(&mut self, value: u8) {
        self.data.fill(value);
    }

    /// 计算 `(x, y)` 处 8x8 块的空间平均
    ///
    /// 每列 8 个样本两两取整平均成树, 再把 8 列结果求和.
    pub(super) fn block_average(&self, x: usize, y: usize) -> i32 {
        let avg = |a: u16, b: u16| (a + b + 1) >> 1;
        let base = y * self.stride + x;
        let mut sum = 0i32;
        for i in 0..8 {
            let s = |row: usize| u16::from(self.data[base + row * self.stride + i]);
            let lo = avg(avg(s(0), s(1)), avg(s(2), s(3)));
            let hi = avg(avg(s(4), s(5)), avg(s(6), s(7)));
            sum += i32::from(avg(lo, hi));
        }
        sum
    }
}

/// 一帧解码图像: Y, U, V 以及可选的 A 平面
#[derive(Clone)]
pub(super) struct Picture {
    pub planes: Vec<Plane>,
}

impl Picture {
    /// 以对齐后的亮度尺寸创建图像
    pub(super) fn new(width_a: usize, height_a: usize, alpha: bool) -> Self {
        let mut planes = vec![
            Plane::new(width_a, height_a),
            Plane::new(width_a / 2, height_a / 2),
            Plane::new(width_a / 2, height_a / 2),
        ];
        if alpha {
            planes.push(Plane::new(width_a, height_a));
        }
        Self { planes }
    }

    pub(super) fn has_alpha(&self) -> bool {
        self.planes.len() > 3
    }

    /// 转换为输出帧 (复制像素数据)
    pub(super) fn to_video_frame(&self, coded_width: u32, coded_height: u32) -> VideoFrame {
        let pixel_format = if self.has_alpha() {
            PixelFormat::Yuva420p
        } else {
            PixelFormat::Yuv420p
        };
        let luma = &self.planes[0];
        let mut frame = VideoFrame::new(luma.width() as u32, luma.height as u32, pixel_format);
        frame.data = self.planes.iter().map(|p| p.data.clone()).collect();
        frame.linesize = self.planes.iter().map(|p| p.stride).collect();
        frame.coded_width = coded_width;
        frame.coded_height = coded_height;
        frame
    }
}
