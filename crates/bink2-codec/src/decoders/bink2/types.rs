//! Bink2 解码器内部类型定义.

use bitflags::bitflags;

/// 码流语法变体
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// `KB2a`..`KB2f`: 浮点 IDCT, 定长字段
    F,
    /// `KB2g` 及之后: 整数 IDCT, 变长码
    G,
}

impl Variant {
    /// 由版本字母选择变体
    pub fn from_version(letter: u8) -> Self {
        if letter <= b'f' { Self::F } else { Self::G }
    }
}

/// 宏块类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum BlockType {
    /// 帧内编码
    Intra,
    /// 从参考帧复制
    Skip,
    /// 仅运动补偿
    Motion,
    /// 运动补偿 + 残差
    Residue,
}

impl BlockType {
    /// 由 2 位字段或 LRU 表项得到宏块类型
    pub(super) fn from_bits(bits: u32) -> Self {
        match bits & 3 {
            0 => Self::Intra,
            1 => Self::Skip,
            2 => Self::Motion,
            _ => Self::Residue,
        }
    }
}

bitflags! {
    /// 帧头标志字中解码器关心的位
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(super) struct FrameFlags: u32 {
        /// 即使启用位图也不传列位图
        const NO_COL_FLAGS = 0x0000_4000;
        /// 即使启用位图也不传行位图
        const NO_ROW_FLAGS = 0x0000_8000;
        /// 帧内带行/列 CBP 位图
        const CBP_BITMAPS = 0x0001_0000;
        /// Variant G 帧间 DC 取宽范围, 并在 CBP 为 0 时省略高上下文位
        const WIDE_INTER_DC = 0x0004_0000;
        /// Alpha 平面整体填充为标志字最高字节
        const ALPHA_FILL = 0x0008_0000;
    }
}

impl FrameFlags {
    /// Alpha 填充值
    pub(super) fn alpha_fill_value(raw: u32) -> u8 {
        (raw >> 24) as u8
    }
}

/// 宏块位置及其邻居可用性
#[derive(Debug, Clone, Copy)]
pub(super) struct MbPos {
    /// 宏块列号
    pub bx: usize,
    /// 宏块行号 (整帧坐标)
    pub by: usize,
    /// 位于所在条带的首行
    pub top: bool,
    /// 位于帧的首列
    pub left: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_版本字母选择变体() {
        assert_eq!(Variant::from_version(b'a'), Variant::F);
        assert_eq!(Variant::from_version(b'f'), Variant::F);
        assert_eq!(Variant::from_version(b'g'), Variant::G);
        assert_eq!(Variant::from_version(b'i'), Variant::G);
    }

    #[test]
    fn test_帧标志位() {
        let flags = FrameFlags::from_bits_retain(0x7F09_0000);
        assert!(flags.contains(FrameFlags::CBP_BITMAPS | FrameFlags::ALPHA_FILL));
        assert!(!flags.contains(FrameFlags::WIDE_INTER_DC));
        assert_eq!(FrameFlags::alpha_fill_value(0x7F09_0000), 0x7F);
    }
}
