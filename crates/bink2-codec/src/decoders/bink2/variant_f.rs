//! Variant F (`KB2a`..`KB2f`) 宏块语法.
//!
//! 浮点 IDCT; 宏块类型为定长 2 位; 每个平面各自维护量化参数 (行首为 8),
//! DC 以定长字段编码, 条带左上角宏块额外带一个 DC 偏置.

use bink2_core::Bink2Result;
use bink2_core::bitreader::BitReader;

use super::block::{
    BlockDecoder, BlockKind, FrameInfo, LumaBlocks, PerPlane, PlaneCbps, PredictionState,
    place_chroma_dcs, place_luma_dcs, write_chroma, write_luma, zero_luma, zero_quad,
};
use super::idct::Quad;
use super::picture::Picture;
use super::predict::{DcPredictor, Mv, MvField};
use super::tables::{
    AC_QUANTS_F, DC_BIAS_BITS_F, DC_QUANTS_F, QMAT_F_CHROMA, QMAT_F_INTER_LUMA,
    QMAT_F_INTRA_LUMA, RUN_SKIPS, SCAN_CHROMA_F, SCAN_LUMA_F,
};
use super::types::{BlockType, MbPos, Variant};
use super::vlc::{codebooks, decode_quant_f};

/// 行首量化参数
const ROW_QUANT: u8 = 8;

const INTRA_DC_RANGE: (i32, i32) = (0, 0x7FF);
const INTER_DC_RANGE: (i32, i32) = (-1023, 1023);

/// 读取亮度 CBP
///
/// 低 16 位按半字节更新前驱, 高 16 位 (高上下文) 对每个非空半字节单独编码.
pub(super) fn decode_cbp_luma(br: &mut BitReader, prev: u32) -> Bink2Result<u32> {
    let low = if br.read_bool()? {
        if br.read_bool()? {
            return Ok(prev);
        }
        prev & 0xFFFF
    } else {
        let mut nib = (prev >> 4) & 0xF;
        let mut low = 0;
        for i in 0..4 {
            if !br.read_bool()? {
                nib = br.read_bits(4)?;
            }
            low |= nib << (i * 4);
        }
        low
    };

    let mut nib_hi = (prev >> 20) & 0xF;
    let mut high = 0u32;
    for i in 0..4 {
        let nib = (low >> (4 * i)) & 0xF;
        if nib == 0 {
            nib_hi = 0;
        } else if nib.count_ones() == 1 || !br.read_bool()? {
            nib_hi = 0;
            for bit in 0..4 {
                if (nib >> bit) & 1 != 0 && br.read_bool()? {
                    nib_hi |= 1 << bit;
                }
            }
        }
        nib_hi &= nib;
        high = (high >> 4) | (nib_hi << 28);
    }
    Ok(low | high)
}

/// 读取色度 CBP
pub(super) fn decode_cbp_chroma(br: &mut BitReader, prev: u32) -> Bink2Result<u32> {
    let low = if !br.read_bool()? {
        br.read_bits(4)?
    } else {
        if br.read_bool()? {
            return Ok(prev);
        }
        prev & 0xF
    };
    if low == 0 {
        return Ok(0);
    }
    if low.count_ones() != 1 {
        let high = (prev >> 16) & low;
        if br.read_bool()? {
            return Ok((high << 16) | low);
        }
    }
    let mut high = 0;
    for bit in 0..4 {
        if (low >> bit) & 1 != 0 && br.read_bool()? {
            high |= 1 << bit;
        }
    }
    Ok((high << 16) | low)
}

/// 定长字段宽度: 3 位, 取 7 时再加 2 位
fn read_field_width(br: &mut BitReader) -> Bink2Result<u32> {
    let mut bits = br.read_bits(3)?;
    if bits == 7 {
        bits += br.read_bits(2)?;
    }
    Ok(bits)
}

/// 块类别对应的扫描顺序与量化矩阵; 色度帧内与帧间共用
pub(super) fn ac_tables(kind: BlockKind) -> (&'static [usize; 64], &'static [f32; 64]) {
    match kind {
        BlockKind::IntraLuma => (SCAN_LUMA_F, QMAT_F_INTRA_LUMA),
        BlockKind::InterLuma => (SCAN_LUMA_F, QMAT_F_INTER_LUMA),
        BlockKind::IntraChroma | BlockKind::InterChroma => (SCAN_CHROMA_F, QMAT_F_CHROMA),
    }
}

/// AC 系数反量化, 矩阵按列主序索引
pub(super) fn dequant_ac(level: i32, qmat: &[f32; 64], pos: usize, quant: f32) -> f32 {
    level as f32 * qmat[(pos & 7) * 8 + (pos >> 3)] * quant
}

/// Variant F 解码器的行内状态
pub(super) struct VariantF {
    intra_cbp: PlaneCbps,
    inter_cbp: PlaneCbps,
    intra_q: PerPlane<u8>,
    inter_q: PerPlane<u8>,
}

impl VariantF {
    pub(super) fn new() -> Self {
        Self {
            intra_cbp: PlaneCbps::default(),
            inter_cbp: PlaneCbps::default(),
            intra_q: PerPlane::splat(ROW_QUANT),
            inter_q: PerPlane::splat(ROW_QUANT),
        }
    }

    fn luma(
        &mut self,
        br: &mut BitReader,
        pred: &mut DcPredictor<16>,
        prev: (u32, u8),
        mb: Option<&MbPos>,
    ) -> Bink2Result<(u32, u8, LumaBlocks<f32>)> {
        let cbp = decode_cbp_luma(br, prev.0)?;
        let q = decode_quant_f(br, prev.1)?;
        let kind = match mb {
            Some(mb) => {
                let diff = self.decode_dc::<16>(br, q, mb.top && mb.left)?;
                pred.predict_intra(&diff, mb, INTRA_DC_RANGE.0, INTRA_DC_RANGE.1);
                BlockKind::IntraLuma
            }
            None => {
                let diff = self.decode_dc::<16>(br, q, false)?;
                pred.predict_inter(&diff, INTER_DC_RANGE.0, INTER_DC_RANGE.1);
                BlockKind::InterLuma
            }
        };
        let mut blocks = zero_luma();
        for (i, quad) in blocks.iter_mut().enumerate() {
            self.decode_ac(br, quad, kind, q, cbp >> (i * 4))?;
        }
        place_luma_dcs(&mut blocks, pred.dcs(), |dc| dc as f32 * 0.125);
        Ok((cbp, q, blocks))
    }

    fn chroma(
        &mut self,
        br: &mut BitReader,
        pred: &mut DcPredictor<4>,
        prev: (u32, u8),
        mb: Option<&MbPos>,
    ) -> Bink2Result<(u32, u8, Quad<f32>)> {
        let cbp = decode_cbp_chroma(br, prev.0)?;
        let q = decode_quant_f(br, prev.1)?;
        let kind = match mb {
            Some(mb) => {
                let diff = self.decode_dc::<4>(br, q, mb.top && mb.left)?;
                pred.predict_intra(&diff, mb, INTRA_DC_RANGE.0, INTRA_DC_RANGE.1);
                BlockKind::IntraChroma
            }
            None => {
                let diff = self.decode_dc::<4>(br, q, false)?;
                pred.predict_inter(&diff, INTER_DC_RANGE.0, INTER_DC_RANGE.1);
                BlockKind::InterChroma
            }
        };
        let mut blocks = zero_quad();
        self.decode_ac(br, &mut blocks, kind, q, cbp)?;
        place_chroma_dcs(&mut blocks, pred.dcs(), |dc| dc as f32 * 0.125);
        Ok((cbp, q, blocks))
    }

    /// 依次解码 Y, V, U 与可选的 A 平面并写回; `intra` 为 `None` 时为残差
    fn decode_planes(
        &mut self,
        br: &mut BitReader,
        st: &mut PredictionState,
        pic: &mut Picture,
        mb: &MbPos,
        alpha: bool,
        intra: bool,
    ) -> Bink2Result<()> {
        let ctx = intra.then_some(mb);
        let (cbps, qs) = if intra {
            (self.intra_cbp, self.intra_q)
        } else {
            (self.inter_cbp, self.inter_q)
        };
        let mut new_cbps = cbps;
        let mut new_qs = qs;

        let (cbp, q, mut y) = self.luma(br, &mut st.y_dc, (cbps.y, qs.y), ctx)?;
        (new_cbps.y, new_qs.y) = (cbp, q);
        let (cbp, q, mut v) = self.chroma(br, &mut st.v_dc, (cbps.v, qs.v), ctx)?;
        (new_cbps.v, new_qs.v) = (cbp, q);
        let (cbp, q, mut u) = self.chroma(br, &mut st.u_dc, (cbps.u, qs.u), ctx)?;
        (new_cbps.u, new_qs.u) = (cbp, q);
        if alpha {
            let (cbp, q, mut a) = self.luma(br, &mut st.a_dc, (cbps.a, qs.a), ctx)?;
            (new_cbps.a, new_qs.a) = (cbp, q);
            write_luma(&mut pic.planes[3], mb, &mut a, !intra);
        }

        if intra {
            self.intra_cbp = new_cbps;
            self.intra_q = new_qs;
        } else {
            self.inter_cbp = new_cbps;
            self.inter_q = new_qs;
        }
        write_luma(&mut pic.planes[0], mb, &mut y, !intra);
        write_chroma(&mut pic.planes[1], mb, &mut u, !intra);
        write_chroma(&mut pic.planes[2], mb, &mut v, !intra);
        Ok(())
    }
}

impl BlockDecoder for VariantF {
    type Coeff = f32;

    const VARIANT: Variant = Variant::F;

    fn begin_row(&mut self) {
        *self = Self::new();
    }

    fn decode_block_type(&mut self, br: &mut BitReader) -> Bink2Result<BlockType> {
        Ok(BlockType::from_bits(br.read_bits(2)?))
    }

    fn decode_dc<const N: usize>(
        &mut self,
        br: &mut BitReader,
        q: u8,
        bias: bool,
    ) -> Bink2Result<[i32; N]> {
        let mut dcs = [0i32; N];
        let bits = read_field_width(br)?;
        let scale = DC_QUANTS_F[usize::from(q)];
        if bits > 0 {
            for chunk in dcs.chunks_mut(4) {
                for dc in chunk.iter_mut() {
                    *dc = br.read_bits(bits)? as i32;
                }
                for dc in chunk.iter_mut().filter(|dc| **dc != 0) {
                    *dc *= scale;
                    if br.read_bool()? {
                        *dc = -*dc;
                    }
                }
            }
        }
        if bias {
            let add_bits = u32::from(DC_BIAS_BITS_F[usize::from(q)]) + bits;
            if add_bits < 10 {
                let pfx = br.read_bits(10 - add_bits)? as i32;
                let mut base = pfx << bits;
                if pfx > 0 && br.read_bool()? {
                    base = -base;
                }
                dcs[0] += base * scale;
            }
        }
        Ok(dcs)
    }

    fn decode_ac(
        &mut self,
        br: &mut BitReader,
        blocks: &mut Quad<f32>,
        kind: BlockKind,
        q: u8,
        cbp: u32,
    ) -> Bink2Result<()> {
        let books = codebooks();
        let quant = AC_QUANTS_F[usize::from(q)];
        let (scan, qmat) = ac_tables(kind);

        for (blk_no, blk) in blocks.iter_mut().enumerate() {
            if (cbp >> blk_no) & 1 == 0 {
                continue;
            }
            let (level_cb, run_cb) = if (cbp >> (16 + blk_no)) & 1 != 0 {
                (&books.level_f2, &books.run_f2)
            } else {
                (&books.level_f1, &books.run_f1)
            };
            let mut esc_len = 0;
            let mut idx = 1;
            while idx < 64 {
                let val = u32::from(level_cb.read(br)?);
                if val != 0 {
                    let mut level = if val >= 4 {
                        (1 << (val - 3)) + br.read_bits(val - 3)? as i32 + 2
                    } else {
                        val as i32
                    };
                    if br.read_bool()? {
                        level = -level;
                    }
                    let pos = scan[idx];
                    blk[pos] = dequant_ac(level, qmat, pos, quant);
                }
                idx += 1;
                if idx >= 64 {
                    break;
                }
                if esc_len >= 1 {
                    esc_len -= 1;
                } else {
                    let sym = run_cb.read(br)?;
                    let skip = if sym == 11 {
                        br.read_bits(6)? as usize
                    } else {
                        RUN_SKIPS[usize::from(sym)]
                    };
                    idx += skip;
                    if idx > 63 {
                        break;
                    }
                    esc_len = if sym == 13 { 6 } else { 0 };
                }
            }
        }
        Ok(())
    }

    fn decode_mv(&mut self, br: &mut BitReader, mvs: &mut MvField, mb: &MbPos) -> Bink2Result<()> {
        let mut deltas = [Mv::ZERO; 4];
        let mut base = Mv::ZERO;
        for comp in 0..2 {
            let bits = read_field_width(br)?;
            let mut vals = [0i16; 4];
            if bits > 0 {
                for v in vals.iter_mut() {
                    *v = br.read_bits(bits)? as i16;
                }
                for v in vals.iter_mut().filter(|v| **v != 0) {
                    if br.read_bool()? {
                        *v = -*v;
                    }
                }
            }
            let mut offset = 0i16;
            if mb.top && mb.left {
                offset = br.read_bits(5)? as i16;
                if offset != 0 && br.read_bool()? {
                    offset = -offset;
                }
            }
            for (d, &v) in deltas.iter_mut().zip(&vals) {
                if comp == 0 {
                    d.x = v;
                } else {
                    d.y = v;
                }
            }
            if comp == 0 {
                base.x = offset * 16;
            } else {
                base.y = offset * 16;
            }
        }
        mvs.set_deltas(mb.bx, &deltas);
        mvs.add_pred_f(mb, base);
        Ok(())
    }

    fn decode_intra(
        &mut self,
        br: &mut BitReader,
        st: &mut PredictionState,
        pic: &mut Picture,
        mb: &MbPos,
        frame: &FrameInfo,
    ) -> Bink2Result<()> {
        self.decode_planes(br, st, pic, mb, frame.alpha, true)
    }

    fn decode_residue(
        &mut self,
        br: &mut BitReader,
        st: &mut PredictionState,
        pic: &mut Picture,
        mb: &MbPos,
        frame: &FrameInfo,
    ) -> Bink2Result<()> {
        self.decode_planes(br, st, pic, mb, frame.alpha, false)
    }
}
