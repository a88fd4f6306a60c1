//! 像素格式定义.
//!
//! Bink2 只输出两种平面格式: 4:2:0 YUV, 以及带独立 Alpha 平面的 4:2:0 YUVA.

use std::fmt;

/// 像素格式
///
/// 定义了视频帧中每个像素的数据排列方式.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PixelFormat {
    /// 未指定
    None,
    /// YUV 4:2:0 平面格式, 8 位
    Yuv420p,
    /// YUV 4:2:0 平面格式 + 全分辨率 Alpha 平面, 8 位
    Yuva420p,
}

impl PixelFormat {
    /// 平面数量
    pub const fn plane_count(&self) -> u32 {
        match self {
            Self::None => 0,
            Self::Yuv420p => 3,
            Self::Yuva420p => 4,
        }
    }

    /// 是否带 Alpha 平面
    pub const fn has_alpha(&self) -> bool {
        matches!(self, Self::Yuva420p)
    }

    /// 指定平面是否为色度平面 (宽高各为亮度的一半)
    const fn is_chroma_plane(plane: usize) -> bool {
        plane == 1 || plane == 2
    }

    /// 计算指定平面每行的字节数 (linesize / stride)
    ///
    /// # 返回
    /// - `Some(bytes)`: 该平面每行的字节数
    /// - `None`: 格式为 None 或平面索引超出范围
    pub fn plane_linesize(&self, plane: usize, width: u32) -> Option<usize> {
        if plane >= self.plane_count() as usize {
            return None;
        }
        let w = width as usize;
        Some(if Self::is_chroma_plane(plane) {
            w.div_ceil(2)
        } else {
            w
        })
    }

    /// 计算指定平面的行数
    pub fn plane_height(&self, plane: usize, height: u32) -> Option<usize> {
        if plane >= self.plane_count() as usize {
            return None;
        }
        let h = height as usize;
        Some(if Self::is_chroma_plane(plane) {
            h.div_ceil(2)
        } else {
            h
        })
    }

    /// 计算整帧的字节数
    pub fn frame_size(&self, width: u32, height: u32) -> Option<usize> {
        if *self == Self::None {
            return None;
        }
        let mut total = 0usize;
        for plane in 0..self.plane_count() as usize {
            total += self.plane_linesize(plane, width)? * self.plane_height(plane, height)?;
        }
        Some(total)
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Yuv420p => "yuv420p",
            Self::Yuva420p => "yuva420p",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yuv420p_frame_size() {
        let pf = PixelFormat::Yuv420p;
        assert_eq!(pf.frame_size(64, 64), Some(64 * 64 * 3 / 2));
        assert_eq!(pf.plane_linesize(0, 64), Some(64));
        assert_eq!(pf.plane_linesize(1, 64), Some(32));
        assert_eq!(pf.plane_height(2, 64), Some(32));
        assert_eq!(pf.plane_linesize(3, 64), None);
    }

    #[test]
    fn test_yuva420p_alpha_plane_full_size() {
        let pf = PixelFormat::Yuva420p;
        assert!(pf.has_alpha());
        assert_eq!(pf.plane_linesize(3, 96), Some(96));
        assert_eq!(pf.plane_height(3, 32), Some(32));
        assert_eq!(pf.frame_size(32, 32), Some(32 * 32 * 5 / 2));
    }

    #[test]
    fn test_none_return_none() {
        assert_eq!(PixelFormat::None.frame_size(64, 64), None);
        assert_eq!(PixelFormat::None.plane_linesize(0, 64), None);
        assert_eq!(format!("{}", PixelFormat::Yuva420p), "yuva420p");
    }
}
