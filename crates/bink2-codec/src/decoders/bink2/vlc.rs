//! 变长码表与熵解码辅助函数.
//!
//! Bink2 的变长码按小端位序存储: 码字的第一个位落在最低位.
//! 查表时窥视 `max_len` 位, 以 `code | extra << len` 为索引填充所有后缀.

use std::sync::OnceLock;

use bink2_core::bitreader::BitReader;
use bink2_core::{Bink2Error, Bink2Result};

use super::tables::*;

/// 快速查找表条目
#[derive(Clone, Copy, Default)]
struct VlcEntry {
    /// 码长 (0 = 无效条目)
    len: u8,
    /// 码字序号
    sym: u8,
}

/// 小端位序变长码表
pub(super) struct Codebook {
    /// 查找表, 大小为 `1 << max_len`
    entries: Box<[VlcEntry]>,
    /// 最长码长
    max_len: u32,
}

impl Codebook {
    /// 由码字与码长数组构建码表, 码字序号即符号
    fn build<C: Copy + Into<u32>>(codes: &[C], bits: &[u8]) -> Self {
        debug_assert_eq!(codes.len(), bits.len());
        let max_len = bits.iter().copied().max().unwrap_or(0) as u32;
        let mut entries = vec![VlcEntry::default(); 1usize << max_len];

        for (sym, (&code, &len)) in codes.iter().zip(bits).enumerate() {
            let code: u32 = code.into();
            let fill = 1usize << (max_len - u32::from(len));
            for extra in 0..fill {
                entries[code as usize | (extra << len)] = VlcEntry {
                    len,
                    sym: sym as u8,
                };
            }
        }

        Self {
            entries: entries.into_boxed_slice(),
            max_len,
        }
    }

    /// 读取一个符号
    pub(super) fn read(&self, br: &mut BitReader) -> Bink2Result<u8> {
        let entry = self.entries[br.peek_bits(self.max_len) as usize];
        if entry.len == 0 {
            return Err(Bink2Error::InvalidData(format!(
                "无效的变长码, 位置 {}",
                br.bits_read()
            )));
        }
        br.skip_bits(entry.len as usize)?;
        Ok(entry.sym)
    }
}

/// 解码器使用的全部码表
pub(super) struct Codebooks {
    /// Variant G AC 跳跃码 (高上下文)
    pub run_g1: Codebook,
    /// Variant G AC 跳跃码 (低上下文)
    pub run_g2: Codebook,
    /// Variant G 运动矢量分量
    pub mv: Codebook,
    /// Variant F AC 幅值 (低上下文)
    pub level_f1: Codebook,
    /// Variant F AC 幅值 (高上下文)
    pub level_f2: Codebook,
    /// Variant F AC 跳跃码 (低上下文)
    pub run_f1: Codebook,
    /// Variant F AC 跳跃码 (高上下文)
    pub run_f2: Codebook,
    /// Variant F 量化差值
    pub quant_delta: Codebook,
}

static CODEBOOKS: OnceLock<Codebooks> = OnceLock::new();

/// 获取全局码表 (首次调用时构建)
pub(super) fn codebooks() -> &'static Codebooks {
    CODEBOOKS.get_or_init(|| Codebooks {
        run_g1: Codebook::build(RUN_CODES_G1, RUN_BITS_G1),
        run_g2: Codebook::build(RUN_CODES_G2, RUN_BITS_G2),
        mv: Codebook::build(MV_CODES, MV_BITS),
        level_f1: Codebook::build(LEVEL_CODES_F1, LEVEL_BITS_F1),
        level_f2: Codebook::build(LEVEL_CODES_F2, LEVEL_BITS_F2),
        run_f1: Codebook::build(RUN_CODES_F1, RUN_BITS_F1),
        run_f2: Codebook::build(RUN_CODES_F2, RUN_BITS_F2),
        quant_delta: Codebook::build(QUANT_DELTA_CODES, QUANT_DELTA_BITS),
    })
}

/// 由前缀长度展开幅值: 前缀不小于 4 时追加 `pfx - 3` 个低位
fn expand_prefix(br: &mut BitReader, pfx: u32) -> Bink2Result<i32> {
    if pfx >= 4 {
        let add = br.read_bits(pfx - 3)? as i32;
        Ok((1 << (pfx - 3)) + add + 2)
    } else {
        Ok(pfx as i32)
    }
}

/// 读取可为零的非负幅值 (DC 差值)
pub(super) fn read_code_zero(br: &mut BitReader) -> Bink2Result<i32> {
    let pfx = br.read_unary_limited(12, 0)?;
    if pfx == 0 {
        return Ok(0);
    }
    expand_prefix(br, pfx)
}

/// 读取带符号的非零幅值 (AC 系数)
pub(super) fn read_code_nz(br: &mut BitReader) -> Bink2Result<i32> {
    let pfx = br.read_unary_limited(12, 0)? + 1;
    let val = expand_prefix(br, pfx)?;
    Ok(if br.read_bool()? { -val } else { val })
}

/// 读取 Variant G 量化差值, 结果必须落在 [0, 37)
pub(super) fn decode_quant_g(br: &mut BitReader, prev: u8) -> Bink2Result<u8> {
    let mut code = br.read_unary_limited(4, 1)? as u8;
    if code == 0 {
        return Ok(prev);
    }
    if code == 3 {
        code += br.read_bits(1)? as u8;
    } else if code == 4 {
        code = br.read_bits(5)? as u8 + 5;
    }
    let q = if br.read_bool()? {
        prev.checked_sub(code)
    } else {
        prev.checked_add(code)
    };
    match q {
        Some(q) if (q as usize) < DC_QUANTS_G.len() => Ok(q),
        _ => Err(Bink2Error::InvalidData(format!(
            "量化参数越界: {} 差值 {}",
            prev, code
        ))),
    }
}

/// 读取 Variant F 量化差值, 结果必须落在 [0, 16)
pub(super) fn decode_quant_f(br: &mut BitReader, prev: u8) -> Bink2Result<u8> {
    let diff = codebooks().quant_delta.read(br)?;
    if diff == 0 {
        return Ok(prev);
    }
    let q = if br.read_bool()? {
        prev.checked_sub(diff)
    } else {
        prev.checked_add(diff)
    };
    match q {
        Some(q) if (q as usize) < AC_QUANTS_F.len() => Ok(q),
        _ => Err(Bink2Error::InvalidData(format!(
            "量化参数越界: {} 差值 {}",
            prev, diff
        ))),
    }
}
