//! 比特流读取器.
//!
//! 提供从字节缓冲区中按位读取数据的能力, 是 Bink2 熵解码的基础设施.
//!
//! 按小端位序读取 (LSB first): 每个字节先读最低位, 多位字段的第一个位落在结果的最低位.
//! 读取越过缓冲区末尾返回 [`Bink2Error::Truncated`], 不会触发越界访问.

use crate::{Bink2Error, Bink2Result};

/// 比特流读取器
///
/// 从字节缓冲区中按位读取数据, 使用小端位序 (LSB first).
///
/// # 示例
/// ```
/// use bink2_core::bitreader::BitReader;
///
/// let data = [0b1011_0001, 0b0101_0101];
/// let mut br = BitReader::new(&data);
/// assert_eq!(br.read_bits(4).unwrap(), 0b0001);
/// assert_eq!(br.read_bits(4).unwrap(), 0b1011);
/// assert_eq!(br.read_bits(8).unwrap(), 0b0101_0101);
/// ```
pub struct BitReader<'a> {
    /// 源数据
    data: &'a [u8],
    /// 当前位位置 (从缓冲区起点算起)
    pos: usize,
}

impl<'a> BitReader<'a> {
    /// 创建新的比特流读取器
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// 获取已读取的总位数
    pub fn bits_read(&self) -> usize {
        self.pos
    }

    /// 获取剩余可读位数
    pub fn bits_left(&self) -> usize {
        (self.data.len() * 8).saturating_sub(self.pos)
    }

    /// 是否已到达末尾
    pub fn is_eof(&self) -> bool {
        self.bits_left() == 0
    }

    fn check(&self, n: usize) -> Bink2Result<()> {
        let left = self.bits_left();
        if n > left {
            return Err(Bink2Error::Truncated { needed: n, left });
        }
        Ok(())
    }

    /// 读取 1 个位
    pub fn read_bit(&mut self) -> Bink2Result<u32> {
        self.check(1)?;
        let bit = (self.data[self.pos >> 3] >> (self.pos & 7)) & 1;
        self.pos += 1;
        Ok(u32::from(bit))
    }

    /// 读取 1 个位并作为布尔值返回
    pub fn read_bool(&mut self) -> Bink2Result<bool> {
        Ok(self.read_bit()? != 0)
    }

    /// 读取 N 个位 (最多 32 位)
    ///
    /// 按小端位序读取, 第一个读到的位是返回值的最低位.
    pub fn read_bits(&mut self, n: u32) -> Bink2Result<u32> {
        if n == 0 {
            return Ok(0);
        }
        if n > 32 {
            return Err(Bink2Error::InvalidArgument(format!(
                "read_bits: n={} 超过 32 位",
                n,
            )));
        }
        self.check(n as usize)?;

        let mut result: u64 = 0;
        let mut filled = 0u32;
        while filled < n {
            let byte_pos = self.pos >> 3;
            let bit_off = (self.pos & 7) as u32;
            let available = 8 - bit_off;
            let to_read = (n - filled).min(available);
            let mask = (1u32 << to_read) - 1;
            let bits = (u32::from(self.data[byte_pos]) >> bit_off) & mask;
            result |= u64::from(bits) << filled;
            filled += to_read;
            self.pos += to_read as usize;
        }

        Ok(result as u32)
    }

    /// 窥视 N 个位 (不移动位置, 最多 32 位)
    ///
    /// 缓冲区末尾之后的位按 0 填充, 供变长码查表使用; 真正消耗位时再做边界检查.
    pub fn peek_bits(&self, n: u32) -> u32 {
        debug_assert!(n <= 32, "peek_bits: n={} 超过 32 位", n);
        let mut result: u64 = 0;
        let mut filled = 0u32;
        let mut pos = self.pos;
        while filled < n {
            let byte_pos = pos >> 3;
            let Some(&byte) = self.data.get(byte_pos) else {
                break;
            };
            let bit_off = (pos & 7) as u32;
            let to_read = (n - filled).min(8 - bit_off);
            let mask = (1u32 << to_read) - 1;
            result |= u64::from((u32::from(byte) >> bit_off) & mask) << filled;
            filled += to_read;
            pos += to_read as usize;
        }
        result as u32
    }

    /// 跳过 N 个位
    pub fn skip_bits(&mut self, n: usize) -> Bink2Result<()> {
        self.check(n)?;
        self.pos += n;
        Ok(())
    }

    /// 读取截断一元码
    ///
    /// 连续读取位, 遇到 `stop_bit` 或已读满 `limit` 个非终止位时停止,
    /// 返回非终止位的个数. 达到上限时不再消耗终止位.
    ///
    /// 例如 `read_unary_limited(4, 1)` 从 `0, 0, 1` 中读取得到 2.
    pub fn read_unary_limited(&mut self, limit: u32, stop_bit: u32) -> Bink2Result<u32> {
        let stop = stop_bit & 1;
        let mut count = 0u32;
        while count < limit {
            if self.read_bit()? == stop {
                break;
            }
            count += 1;
        }
        Ok(count)
    }

    /// 对齐到下一个字节边界
    ///
    /// 如果当前已在字节边界, 则不做任何事.
    pub fn align_to_byte(&mut self) {
        self.pos = (self.pos + 7) & !7;
    }

    /// 定位到指定的位位置
    ///
    /// 允许定位到缓冲区末尾 (此后任何读取都会返回截断错误).
    pub fn seek(&mut self, bit_pos: usize) -> Bink2Result<()> {
        let total = self.data.len() * 8;
        if bit_pos > total {
            return Err(Bink2Error::InvalidData(format!(
                "定位位置 {} 超出数据长度 {} 位",
                bit_pos, total,
            )));
        }
        self.pos = bit_pos;
        Ok(())
    }

    /// 获取当前字节位置
    pub fn byte_position(&self) -> usize {
        self.pos >> 3
    }

    /// 获取底层数据的引用
    pub fn data(&self) -> &'a [u8] {
        self.data
    }
}
