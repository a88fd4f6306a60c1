//! Variant G (`KB2g` 及之后) 宏块语法.
//!
//! 整数 IDCT; 宏块类型用行内 LRU 表编码; 每个宏块共用一个量化参数,
//! 帧内与残差分别从 `bx * 2` 与 `bx * 2 + 1` 槽位预测.

use bink2_core::Bink2Result;
use bink2_core::bitreader::BitReader;
use log::trace;

use super::block::{
    BlockDecoder, BlockKind, FrameInfo, LumaBlocks, PlaneCbps, PredictionState, place_chroma_dcs,
    place_luma_dcs, write_chroma, write_luma, zero_luma, zero_quad,
};
use super::idct::Quad;
use super::picture::Picture;
use super::predict::{DcPredictor, Mv, MvField};
use super::tables::{
    CHROMA_CBPS, DC_QUANTS_G, MV_ESC, MV_SYMS, QMAT_G_INTER, QMAT_G_INTRA_CHROMA,
    QMAT_G_INTRA_LUMA, RUN_SKIPS, ZIGZAG,
};
use super::types::{BlockType, FrameFlags, MbPos, Variant};
use super::vlc::{codebooks, decode_quant_g, read_code_nz, read_code_zero};

/// 行首的宏块类型 LRU 表
const INITIAL_LRU: [BlockType; 4] = [
    BlockType::Motion,
    BlockType::Residue,
    BlockType::Skip,
    BlockType::Intra,
];

/// 帧内 DC 取值范围
const INTRA_DC_RANGE: (i32, i32) = (0, 0x7FF);

/// 读取亮度 CBP
///
/// 以前驱 CBP 中置位数决定是否整体取反; `wide` 为真且 CBP 为 0 时省略高上下文位.
pub(super) fn decode_cbp_luma(br: &mut BitReader, prev: u32, wide: bool) -> Bink2Result<u32> {
    let cnt = (prev & 0xFFFF).count_ones();
    let (min_count, mask) = if cnt < 8 { (cnt, 0) } else { (16 - cnt, 0xFFFF) };

    let mut cbp = 0u32;
    if br.read_bool()? {
        cbp = 0;
    } else if min_count >= 4 {
        cbp = br.read_bits(16)?;
    } else {
        for i in 0..4 {
            if !br.read_bool()? {
                cbp |= br.read_bits(4)? << (i * 4);
            }
        }
    }
    cbp ^= mask;
    if (!wide || cbp != 0) && br.read_bool()? {
        cbp |= cbp << 16;
    }
    Ok(cbp)
}

/// 读取色度 CBP
pub(super) fn decode_cbp_chroma(br: &mut BitReader, last: u32) -> Bink2Result<u32> {
    if br.read_bool()? {
        return Ok((last & 0xF_0000) | CHROMA_CBPS[(last & 0xF) as usize]);
    }
    let cbp = br.read_bits(4)?;
    Ok(if br.read_bool()? { cbp | (cbp << 16) } else { cbp })
}

/// 读取运动矢量分量, 带转义长码
///
/// 转义值最长 16 位, 超出 `i16` 的部分按位截断, 与编码器的回绕一致.
fn read_mv_component(br: &mut BitReader) -> Bink2Result<i16> {
    let sym = MV_SYMS[codebooks().mv.read(br)? as usize];
    if sym != MV_ESC {
        return Ok(i16::from(sym));
    }
    let nlen = br.read_unary_limited(12, 1)? + 4;
    let uval = i64::from(br.read_bits(nlen)?) + (1i64 << nlen) - 1;
    let val = if uval & 1 != 0 { -(uval >> 1) - 1 } else { uval >> 1 };
    if i16::try_from(val).is_err() {
        trace!("运动矢量分量 {} 超出 16 位, 截断为 {}", val, val as i16);
    }
    Ok(val as i16)
}

/// Variant G 解码器的行内状态
pub(super) struct VariantG {
    lru: [BlockType; 4],
    intra_cbp: PlaneCbps,
    inter_cbp: PlaneCbps,
}

impl VariantG {
    pub(super) fn new() -> Self {
        Self {
            lru: INITIAL_LRU,
            intra_cbp: PlaneCbps::default(),
            inter_cbp: PlaneCbps::default(),
        }
    }

    fn luma_intra(
        &mut self,
        br: &mut BitReader,
        pred: &mut DcPredictor<16>,
        prev_cbp: u32,
        q: u8,
        mb: &MbPos,
        flags: FrameFlags,
    ) -> Bink2Result<(u32, LumaBlocks<i32>)> {
        let cbp = decode_cbp_luma(br, prev_cbp, flags.contains(FrameFlags::WIDE_INTER_DC))?;
        let diff = self.decode_dc::<16>(br, q, false)?;
        pred.predict_intra(&diff, mb, INTRA_DC_RANGE.0, INTRA_DC_RANGE.1);
        let mut blocks = zero_luma();
        for (i, quad) in blocks.iter_mut().enumerate() {
            self.decode_ac(br, quad, BlockKind::IntraLuma, q, cbp >> (i * 4))?;
        }
        place_luma_dcs(&mut blocks, pred.dcs(), |dc| dc * 8 + 32);
        Ok((cbp, blocks))
    }

    fn chroma_intra(
        &mut self,
        br: &mut BitReader,
        pred: &mut DcPredictor<4>,
        prev_cbp: u32,
        q: u8,
        mb: &MbPos,
    ) -> Bink2Result<(u32, Quad<i32>)> {
        let cbp = decode_cbp_chroma(br, prev_cbp)?;
        let diff = self.decode_dc::<4>(br, q, false)?;
        pred.predict_intra(&diff, mb, INTRA_DC_RANGE.0, INTRA_DC_RANGE.1);
        let mut blocks = zero_quad();
        self.decode_ac(br, &mut blocks, BlockKind::IntraChroma, q, cbp)?;
        place_chroma_dcs(&mut blocks, pred.dcs(), |dc| dc * 8 + 32);
        Ok((cbp, blocks))
    }

    fn luma_inter(
        &mut self,
        br: &mut BitReader,
        pred: &mut DcPredictor<16>,
        prev_cbp: u32,
        q: u8,
        flags: FrameFlags,
    ) -> Bink2Result<(u32, LumaBlocks<i32>)> {
        let wide = flags.contains(FrameFlags::WIDE_INTER_DC);
        let cbp = decode_cbp_luma(br, prev_cbp, wide)?;
        let (min, max) = inter_dc_range(flags);
        let diff = self.decode_dc::<16>(br, q, false)?;
        pred.predict_inter(&diff, min, max);
        let mut blocks = zero_luma();
        for (i, quad) in blocks.iter_mut().enumerate() {
            self.decode_ac(br, quad, BlockKind::InterLuma, q, cbp >> (i * 4))?;
        }
        place_luma_dcs(&mut blocks, pred.dcs(), |dc| dc * 8);
        Ok((cbp, blocks))
    }

    fn chroma_inter(
        &mut self,
        br: &mut BitReader,
        pred: &mut DcPredictor<4>,
        prev_cbp: u32,
        q: u8,
        flags: FrameFlags,
    ) -> Bink2Result<(u32, Quad<i32>)> {
        let cbp = decode_cbp_chroma(br, prev_cbp)?;
        let (min, max) = inter_dc_range(flags);
        let diff = self.decode_dc::<4>(br, q, false)?;
        pred.predict_inter(&diff, min, max);
        let mut blocks = zero_quad();
        self.decode_ac(br, &mut blocks, BlockKind::InterChroma, q, cbp)?;
        place_chroma_dcs(&mut blocks, pred.dcs(), |dc| dc * 8);
        Ok((cbp, blocks))
    }
}

/// 块类别与量化参数对应的量化矩阵和左移位数
pub(super) fn ac_matrix(kind: BlockKind, q: u8) -> (&'static [i32; 64], u32) {
    let matrices = match kind {
        BlockKind::IntraLuma => QMAT_G_INTRA_LUMA,
        BlockKind::IntraChroma => QMAT_G_INTRA_CHROMA,
        BlockKind::InterLuma | BlockKind::InterChroma => QMAT_G_INTER,
    };
    (&matrices[usize::from(q & 3)], u32::from(q >> 2))
}

/// AC 系数反量化: 幅值乘矩阵项后左移, 再按 1/128 舍入
pub(super) fn dequant_ac(level: i32, qmat: &[i32; 64], pos: usize, shift: u32) -> i32 {
    let val = (((i64::from(level) * i64::from(qmat[pos])) << shift) + 0x40) >> 7;
    val.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

fn inter_dc_range(flags: FrameFlags) -> (i32, i32) {
    if flags.contains(FrameFlags::WIDE_INTER_DC) {
        (-0x7FF, 0x7FF)
    } else {
        (-0x3FF, 0x3FF)
    }
}

impl BlockDecoder for VariantG {
    type Coeff = i32;

    const VARIANT: Variant = Variant::G;

    fn begin_row(&mut self) {
        self.lru = INITIAL_LRU;
        self.intra_cbp = PlaneCbps::default();
        self.inter_cbp = PlaneCbps::default();
    }

    fn decode_block_type(&mut self, br: &mut BitReader) -> Bink2Result<BlockType> {
        let lru = &mut self.lru;
        let btype = match br.read_unary_limited(3, 1)? {
            0 => lru[0],
            1 => {
                lru.swap(0, 1);
                lru[0]
            }
            2 => {
                let bt = lru[3];
                lru.swap(2, 3);
                bt
            }
            _ => {
                let bt = lru[2];
                lru.swap(1, 2);
                bt
            }
        };
        Ok(btype)
    }

    fn decode_dc<const N: usize>(
        &mut self,
        br: &mut BitReader,
        q: u8,
        _bias: bool,
    ) -> Bink2Result<[i32; N]> {
        let mut dcs = [0i32; N];
        if !br.read_bool()? {
            return Ok(dcs);
        }
        let quant = DC_QUANTS_G[usize::from(q.max(8))];
        for dc in dcs.iter_mut() {
            *dc = read_code_zero(br)?;
            if *dc != 0 {
                *dc = (*dc * quant + 0x1FF) >> 10;
                if br.read_bool()? {
                    *dc = -*dc;
                }
            }
        }
        Ok(dcs)
    }

    fn decode_ac(
        &mut self,
        br: &mut BitReader,
        blocks: &mut Quad<i32>,
        kind: BlockKind,
        q: u8,
        cbp: u32,
    ) -> Bink2Result<()> {
        let books = codebooks();
        let cb = if (cbp >> 16) != 0 {
            &books.run_g1
        } else {
            &books.run_g2
        };
        let (qmat, shift) = ac_matrix(kind, q);

        for (blk_no, blk) in blocks.iter_mut().enumerate() {
            if (cbp >> blk_no) & 1 == 0 {
                continue;
            }
            let mut esc_len = 0;
            let mut idx = 1;
            while idx < 64 {
                if esc_len >= 1 {
                    esc_len -= 1;
                } else {
                    let sym = cb.read(br)?;
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
                let pos = ZIGZAG[idx];
                blk[pos] = dequant_ac(read_code_nz(br)?, qmat, pos, shift);
                idx += 1;
            }
        }
        Ok(())
    }

    fn decode_mv(&mut self, br: &mut BitReader, mvs: &mut MvField, mb: &MbPos) -> Bink2Result<()> {
        let single = br.read_bool()?;
        let count = if single { 1 } else { 4 };
        let mut deltas = [Mv::ZERO; 4];
        for d in deltas.iter_mut().take(count) {
            d.x = read_mv_component(br)?;
        }
        for d in deltas.iter_mut().take(count) {
            d.y = read_mv_component(br)?;
        }
        mvs.set_deltas(mb.bx, &deltas);
        if single {
            mvs.add_pred_g1(mb);
        } else {
            mvs.add_pred_g4(mb);
        }
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
        let q = decode_quant_g(br, st.quant.predict(mb.bx * 2, mb.top))?;
        st.quant.set(mb.bx * 2, q);

        let cbps = self.intra_cbp;
        let (cbp_y, mut y) = self.luma_intra(br, &mut st.y_dc, cbps.y, q, mb, frame.flags)?;
        let (cbp_v, mut v) = self.chroma_intra(br, &mut st.v_dc, cbps.v, q, mb)?;
        let (cbp_u, mut u) = self.chroma_intra(br, &mut st.u_dc, cbps.u, q, mb)?;
        self.intra_cbp = PlaneCbps {
            y: cbp_y,
            u: cbp_u,
            v: cbp_v,
            a: cbps.a,
        };
        if frame.alpha {
            let (cbp_a, mut a) = self.luma_intra(br, &mut st.a_dc, cbps.a, q, mb, frame.flags)?;
            self.intra_cbp.a = cbp_a;
            write_luma(&mut pic.planes[3], mb, &mut a, false);
        }

        write_luma(&mut pic.planes[0], mb, &mut y, false);
        write_chroma(&mut pic.planes[1], mb, &mut u, false);
        write_chroma(&mut pic.planes[2], mb, &mut v, false);
        Ok(())
    }

    fn decode_residue(
        &mut self,
        br: &mut BitReader,
        st: &mut PredictionState,
        pic: &mut Picture,
        mb: &MbPos,
        frame: &FrameInfo,
    ) -> Bink2Result<()> {
        let q = decode_quant_g(br, st.quant.predict(mb.bx * 2 + 1, mb.top))?;
        st.quant.set(mb.bx * 2 + 1, q);

        let cbps = self.inter_cbp;
        let (cbp_y, mut y) = self.luma_inter(br, &mut st.y_dc, cbps.y, q, frame.flags)?;
        self.inter_cbp.y = cbp_y;
        if br.read_bool()? {
            let (cbp_v, mut v) = self.chroma_inter(br, &mut st.v_dc, cbps.v, q, frame.flags)?;
            let (cbp_u, mut u) = self.chroma_inter(br, &mut st.u_dc, cbps.u, q, frame.flags)?;
            self.inter_cbp.u = cbp_u;
            self.inter_cbp.v = cbp_v;
            write_chroma(&mut pic.planes[1], mb, &mut u, true);
            write_chroma(&mut pic.planes[2], mb, &mut v, true);
        } else {
            self.inter_cbp.u = 0;
            self.inter_cbp.v = 0;
        }
        if frame.alpha {
            let (cbp_a, mut a) = self.luma_inter(br, &mut st.a_dc, cbps.a, q, frame.flags)?;
            self.inter_cbp.a = cbp_a;
            write_luma(&mut pic.planes[3], mb, &mut a, true);
        }
        write_luma(&mut pic.planes[0], mb, &mut y, true);
        Ok(())
    }
}
