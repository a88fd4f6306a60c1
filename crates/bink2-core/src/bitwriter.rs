//! 比特流写入器.
//!
//! 向字节缓冲区按位写入数据, 与 [`BitReader`](crate::bitreader::BitReader) 的小端位序对应.
//! 解码器本身不需要写入; 测试与基准使用它构造合成码流.

/// 比特流写入器
///
/// 向字节缓冲区按位写入数据, 使用小端位序 (LSB first).
///
/// # 示例
/// ```
/// use bink2_core::bitwriter::BitWriter;
///
/// let mut bw = BitWriter::new();
/// bw.write_bits(0b0001, 4);
/// bw.write_bits(0b1011, 4);
/// bw.write_bits(0b0101_0101, 8);
/// let data = bw.finish();
/// assert_eq!(data, vec![0b1011_0001, 0b0101_0101]);
/// ```
pub struct BitWriter {
    /// 输出缓冲区
    data: Vec<u8>,
    /// 当前字节 (正在填充)
    current_byte: u8,
    /// 当前字节中已填充的位数 (0-7)
    bit_count: u8,
}

impl BitWriter {
    /// 创建新的比特流写入器
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            current_byte: 0,
            bit_count: 0,
        }
    }

    /// 以指定容量创建比特流写入器
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            current_byte: 0,
            bit_count: 0,
        }
    }

    /// 获取已写入的总位数
    pub fn bits_written(&self) -> usize {
        self.data.len() * 8 + self.bit_count as usize
    }

    /// 写入 1 个位
    pub fn write_bit(&mut self, bit: u32) {
        self.current_byte |= ((bit & 1) as u8) << self.bit_count;
        self.bit_count += 1;
        if self.bit_count >= 8 {
            self.data.push(self.current_byte);
            self.current_byte = 0;
            self.bit_count = 0;
        }
    }

    /// 写入布尔位
    pub fn write_bool(&mut self, bit: bool) {
        self.write_bit(u32::from(bit));
    }

    /// 写入 N 个位 (最多 32 位)
    ///
    /// 值的低 N 位被写入, 最低位在前.
    pub fn write_bits(&mut self, value: u32, n: u32) {
        debug_assert!(n <= 32, "write_bits: n={} 超过 32 位", n);
        for i in 0..n {
            self.write_bit(value >> i);
        }
    }

    /// 写入截断一元码
    ///
    /// 写入 `count` 个非终止位; 仅当 `count < limit` 时追加终止位 `stop_bit`.
    pub fn write_unary_limited(&mut self, count: u32, limit: u32, stop_bit: u32) {
        let fill = 1 - (stop_bit & 1);
        for _ in 0..count {
            self.write_bit(fill);
        }
        if count < limit {
            self.write_bit(stop_bit & 1);
        }
    }

    /// 对齐到字节边界 (用 0 填充)
    pub fn align_to_byte(&mut self) {
        if self.bit_count > 0 {
            self.data.push(self.current_byte);
            self.current_byte = 0;
            self.bit_count = 0;
        }
    }

    /// 完成写入, 返回字节数据
    ///
    /// 如果当前不在字节边界, 自动用 0 填充.
    pub fn finish(mut self) -> Vec<u8> {
        self.align_to_byte();
        self.data
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}
