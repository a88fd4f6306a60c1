//! 行/列 CBP 位图解码.
//!
//! 位图要么逐位存储, 要么使用带上下文切换的游程编码:
//! 游程长度的转义值决定下一段是否沿用上一段的位值, 或直接翻转.

use bink2_core::Bink2Result;
use bink2_core::bitreader::BitReader;

/// 解码 `nbits` 个标志位追加到 `dst`
///
/// `leading_zero` 为真时先追加一个隐含的 0.
pub(super) fn decode_flags(
    br: &mut BitReader,
    dst: &mut Vec<bool>,
    leading_zero: bool,
    nbits: usize,
) -> Bink2Result<()> {
    if leading_zero {
        dst.push(false);
    }
    if !br.read_bool()? {
        for _ in 0..nbits {
            dst.push(br.read_bool()?);
        }
        return Ok(());
    }

    let mut left = nbits;
    // 为真时下一段的位值为上一段取反, 不再读取
    let mut toggle = false;
    let mut lastbit = false;
    while left > 0 {
        if !br.read_bool()? {
            // 单个位 + 最多 4 个原样位
            lastbit = if toggle { !lastbit } else { br.read_bool()? };
            dst.push(lastbit);
            left -= 1;
            let raw = left.min(4);
            for _ in 0..raw {
                dst.push(br.read_bool()?);
            }
            left -= raw;
            toggle = false;
        } else {
            let run_bits: u32 = if left < 4 {
                2
            } else if left < 16 {
                4
            } else {
                5
            };
            lastbit = if toggle { !lastbit } else { br.read_bool()? };
            let base = if toggle { run_bits + 1 } else { run_bits + 2 };
            let mut run = (base as usize).min(left);
            if run != left {
                let add = br.read_bits(run_bits)? as usize;
                run += add;
                toggle = add != (1 << run_bits) - 1;
            }
            // 截断到剩余位数, 损坏码流不会写出超长位图
            let run = run.min(left);
            dst.extend(std::iter::repeat_n(lastbit, run));
            left -= run;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bink2_core::bitwriter::BitWriter;

    #[test]
    fn test_原样存储的标志位() {
        let mut bw = BitWriter::new();
        bw.write_bit(0);
        for b in [1, 0, 1, 1, 0] {
            bw.write_bit(b);
        }
        let data = bw.finish();
        let mut br = BitReader::new(&data);
        let mut flags = Vec::new();
        decode_flags(&mut br, &mut flags, true, 5).unwrap();
        assert_eq!(flags, vec![false, true, false, true, true, false]);
    }

    #[test]
    fn test_游程编码() {
        // 7 个标志: 游程段, 位值 1, 基础长度 4 + 2 = 6, 附加 1 -> 7 个 1
        let mut bw = BitWriter::new();
        bw.write_bit(1);
        bw.write_bit(1);
        bw.write_bit(1);
        bw.write_bits(1, 4);
        let data = bw.finish();
        let mut br = BitReader::new(&data);
        let mut flags = Vec::new();
        decode_flags(&mut br, &mut flags, false, 7).unwrap();
        assert_eq!(flags, vec![true; 7]);
    }

    #[test]
    fn test_翻转模式() {
        // 10 个标志: 6 个 1 (附加 0 -> 翻转模式), 然后单位段自动翻转为 0 加 3 个原样位
        let mut bw = BitWriter::new();
        bw.write_bit(1);
        bw.write_bit(1);
        bw.write_bit(1);
        bw.write_bits(0, 4);
        bw.write_bit(0);
        bw.write_bits(0b101, 3);
        let data = bw.finish();
        let mut br = BitReader::new(&data);
        let mut flags = Vec::new();
        decode_flags(&mut br, &mut flags, false, 10).unwrap();
        assert_eq!(
            flags,
            vec![true, true, true, true, true, true, false, true, false, true]
        );
    }

    #[test]
    fn test_截断报错() {
        let data = [0x01];
        let mut br = BitReader::new(&data);
        let mut flags = Vec::new();
        assert!(decode_flags(&mut br, &mut flags, false, 40).is_err());
    }
}
