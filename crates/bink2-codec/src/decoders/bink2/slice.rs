//! 帧与条带调度.
//!
//! 帧数据以 32 位帧标志字开头, 随后是除最后一个条带外每个条带的结束字节偏移,
//! 然后是各条带的码流. 条带之间宏块预测状态按行延续, 运动矢量在条带开始时清零.

use std::io::Cursor;

use bink2_core::bitreader::BitReader;
use bink2_core::{Bink2Error, Bink2Result};
use byteorder::{LittleEndian, ReadBytesExt};
use log::{debug, trace, warn};

use super::block::{BlockDecoder, FrameInfo, PredictionState};
use super::flags::decode_flags;
use super::picture::Picture;
use super::types::{FrameFlags, MbPos, Variant};

/// 条带结束位置与声明偏移相差不超过该位数时不提示
pub(super) const SLICE_SLACK_BITS: usize = 8;

/// 条带结束位置偏差小于该字节数时按调试信息记录, 否则记为警告
pub(super) const SLICE_WARN_BYTES: usize = 3;

/// `KB2h` 及之后版本由侧数据低 2 位选择的条带数
const SLICE_COUNTS: [usize; 4] = [2, 3, 4, 8];

/// 条带划分, 以 32 像素宏块行为单位
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct SliceLayout {
    /// 各条带的结束宏块行 (不含)
    ends: Vec<usize>,
}

impl SliceLayout {
    /// 按版本字母、侧数据标志字与帧高计算条带划分
    pub(super) fn new(version: u8, flags: u32, height: usize) -> Bink2Result<Self> {
        let height_a = (height + 31) & !31;
        let mut ends = Vec::new();
        if version <= b'f' {
            ends.push((height + 32) >> 6);
        } else if version == b'g' {
            if height_a >= 128 {
                ends.push((height + 31) >> 6);
            }
        } else {
            let n = SLICE_COUNTS[(flags & 3) as usize];
            let mut start = 0usize;
            let mut end = height_a + 32 * n - 1;
            for i in 0..n - 1 {
                start += ((end - start) / (n - i)) & !31;
                end -= 32;
                ends.push(start >> 5);
            }
        }
        ends.push(height_a >> 5);

        let mut prev = 0;
        for &e in &ends {
            if e <= prev {
                return Err(Bink2Error::InvalidData(format!(
                    "条带划分不递增: 高度 {} 得到 {:?}",
                    height, ends
                )));
            }
            prev = e;
        }
        Ok(Self { ends })
    }

    pub(super) fn count(&self) -> usize {
        self.ends.len()
    }

    /// 各条带的 `[起始行, 结束行)`
    pub(super) fn ranges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let starts = std::iter::once(0).chain(self.ends.iter().copied());
        starts.zip(self.ends.iter().copied())
    }
}

/// 帧头: 帧标志字与条带偏移表
#[derive(Debug, Clone)]
pub(super) struct FrameHeader {
    pub raw_flags: u32,
    /// 第 `i + 1` 个条带的起始字节偏移 (相对帧数据起点)
    pub offsets: Vec<u32>,
}

impl FrameHeader {
    pub(super) fn parse(data: &[u8], slices: usize) -> Bink2Result<Self> {
        let needed = 4 * slices;
        if data.len() < needed {
            return Err(Bink2Error::InvalidData(format!(
                "帧头需要 {} 字节, 实际 {} 字节",
                needed,
                data.len()
            )));
        }
        let mut rd = Cursor::new(data);
        let raw_flags = rd.read_u32::<LittleEndian>()?;
        let offsets = (1..slices)
            .map(|_| rd.read_u32::<LittleEndian>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { raw_flags, offsets })
    }

    /// 帧头占用的位数
    pub(super) fn bit_len(&self) -> usize {
        (self.offsets.len() + 1) * 32
    }

    pub(super) fn flags(&self) -> FrameFlags {
        FrameFlags::from_bits_truncate(self.raw_flags)
    }
}

/// 全局行/列 CBP 位图
#[derive(Debug, Default, Clone)]
pub(super) struct CbpBitmaps {
    pub rows: Vec<bool>,
    pub cols: Vec<bool>,
}

impl CbpBitmaps {
    fn decode(
        &mut self,
        br: &mut BitReader,
        flags: FrameFlags,
        width: usize,
        height: usize,
    ) -> Bink2Result<()> {
        self.rows.clear();
        self.cols.clear();
        if flags.contains(FrameFlags::CBP_BITMAPS) {
            if !flags.contains(FrameFlags::NO_ROW_FLAGS) {
                let len = (height + 15) >> 4;
                decode_flags(br, &mut self.rows, true, len * 2 - 1)?;
            }
            if !flags.contains(FrameFlags::NO_COL_FLAGS) {
                let len = (width + 15) >> 4;
                decode_flags(br, &mut self.cols, true, len * 2 - 1)?;
            }
        }
        let (bw, bh) = ((width + 31) >> 5, (height + 31) >> 5);
        self.rows.resize(bh * 4, false);
        self.cols.resize(bw * 4, false);
        Ok(())
    }
}

/// 对齐到字节后跳到下一条带的声明位置
///
/// 实际位置与声明偏移的差异只做记录, 不使本帧失败.
fn resync(br: &mut BitReader, slice: usize, offset: u32) -> Bink2Result<()> {
    br.align_to_byte();
    let expected = offset as usize * 8;
    let actual = br.bits_read();
    let delta = actual.abs_diff(expected);
    if delta <= SLICE_SLACK_BITS {
        trace!("条带 {} 结束于位 {}, 声明位 {}", slice, actual, expected);
    } else if delta < SLICE_WARN_BYTES * 8 {
        debug!(
            "条带 {} 结束位置偏差 {} 位 (实际 {}, 声明 {})",
            slice, delta, actual, expected
        );
    } else {
        warn!(
            "条带 {} 结束位置偏差 {} 字节 (实际位 {}, 声明位 {})",
            slice,
            delta / 8,
            actual,
            expected
        );
    }
    br.seek(expected)
}

/// 单帧解码所需的流级参数
pub(super) struct StreamInfo<'a> {
    pub width: usize,
    pub height: usize,
    pub has_alpha: bool,
    pub layout: &'a SliceLayout,
}

/// 解码一帧的全部条带到 `pic`
///
/// `pic` 在帧间帧中预先填充为参考帧内容. 任何错误都使整帧失败.
#[allow(clippy::too_many_arguments)]
pub(super) fn decode_frame<D: BlockDecoder>(
    data: &[u8],
    keyframe: bool,
    stream: &StreamInfo<'_>,
    dec: &mut D,
    st: &mut PredictionState,
    bitmaps: &mut CbpBitmaps,
    pic: &mut Picture,
    reference: Option<&Picture>,
) -> Bink2Result<()> {
    let header = FrameHeader::parse(data, stream.layout.count())?;
    let flags = header.flags();
    trace!(
        "帧头: 标志 {:#010x}, 条带偏移 {:?}, 关键帧 {}",
        header.raw_flags, header.offsets, keyframe
    );

    let mut br = BitReader::new(data);
    br.seek(header.bit_len())?;

    let mut alpha = stream.has_alpha;
    if alpha && flags.contains(FrameFlags::ALPHA_FILL) {
        alpha = false;
        pic.planes[3].fill(FrameFlags::alpha_fill_value(header.raw_flags));
    }
    bitmaps.decode(&mut br, flags, stream.width, stream.height)?;

    let frame = FrameInfo {
        flags,
        keyframe,
        alpha,
    };
    let bw = (stream.width + 31) >> 5;
    for (slice, (start, end)) in stream.layout.ranges().enumerate() {
        if slice > 0 {
            resync(&mut br, slice - 1, header.offsets[slice - 1])?;
        }
        st.begin_slice(bw);
        for by in start..end {
            dec.begin_row();
            for bx in 0..bw {
                let mb = MbPos {
                    bx,
                    by,
                    top: by == start,
                    left: bx == 0,
                };
                dec.decode_macroblock(&mut br, st, pic, reference, &mb, &frame)?;
            }
            st.end_row();
        }
    }
    Ok(())
}

/// 由变体名生成日志用的简短描述
pub(super) fn describe(variant: Variant, layout: &SliceLayout) -> String {
    let ends: Vec<String> = layout.ends.iter().map(|e| e.to_string()).collect();
    format!("{:?} 变体, {} 个条带 [{}]", variant, layout.count(), ends.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ends(version: u8, flags: u32, height: usize) -> Vec<usize> {
        SliceLayout::new(version, flags, height).unwrap().ends
    }

    #[test]
    fn test_旧版本两条带() {
        assert_eq!(ends(b'f', 0, 64), vec![1, 2]);
        assert_eq!(ends(b'a', 0, 720), vec![11, 23]);
    }

    #[test]
    fn test_kb2g_条带数随高度变化() {
        assert_eq!(ends(b'g', 0, 96), vec![3]);
        assert_eq!(ends(b'g', 0, 128), vec![2, 4]);
    }

    #[test]
    fn test_kb2h_二分条带() {
        assert_eq!(ends(b'h', 0, 256), vec![4, 8]);
        assert_eq!(ends(b'i', 2, 512), vec![4, 8, 12, 16]);
        let eight = ends(b'h', 3, 1080);
        assert_eq!(eight.len(), 8);
        assert_eq!(*eight.last().unwrap(), 34);
        assert!(eight.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_过矮的帧划分失败() {
        assert!(matches!(
            SliceLayout::new(b'h', 3, 64),
            Err(Bink2Error::InvalidData(_))
        ));
        assert!(SliceLayout::new(b'f', 0, 16).is_err());
    }

    #[test]
    fn test_帧头解析() {
        let data = [0x00, 0x00, 0x01, 0x80, 0x10, 0x00, 0x00, 0x00, 0xAA];
        let header = FrameHeader::parse(&data, 2).unwrap();
        assert_eq!(header.raw_flags, 0x8001_0000);
        assert_eq!(header.offsets, vec![16]);
        assert_eq!(header.bit_len(), 64);
        assert!(header.flags().contains(FrameFlags::CBP_BITMAPS));
        assert!(FrameHeader::parse(&data[..7], 2).is_err());
    }

    #[test]
    fn test_条带偏差只记录不报错() {
        let data = [0u8; 16];
        let mut br = BitReader::new(&data);
        br.skip_bits(3).unwrap();
        resync(&mut br, 0, 12).unwrap();
        assert_eq!(br.bits_read(), 96);
        assert!(resync(&mut br, 1, 17).is_err());
    }

    #[test]
    fn test_位图长度() {
        let mut maps = CbpBitmaps::default();
        let data = [0u8; 8];
        let mut br = BitReader::new(&data);
        maps.decode(&mut br, FrameFlags::empty(), 64, 96).unwrap();
        assert_eq!(br.bits_read(), 0);
        assert_eq!(maps.rows.len(), 12);
        assert_eq!(maps.cols.len(), 8);
    }
}
