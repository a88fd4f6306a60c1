//! 宏块层公共部分.
//!
//! 两种变体通过 [`BlockDecoder`] 接入同一个宏块循环: 类型、CBP、DC、AC 与量化的
//! 码流语法各自实现, 像素写回、运动补偿与邻居 DC 刷新在这里共用.

use bink2_core::bitreader::BitReader;
use bink2_core::{Bink2Error, Bink2Result};
use log::trace;

use super::idct::{Coeff, Quad, add_quad, put_quad};
use super::motion::{mc_chroma, mc_luma};
use super::picture::{Picture, Plane};
use super::predict::{CHROMA_DC, DcPredictor, LUMA_DC, MvField, QuantPredictor};
use super::types::{BlockType, FrameFlags, MbPos, Variant};

/// 亮度 (或 Alpha) 宏块的 4 个 16x16 子块
pub(super) type LumaBlocks<C> = [Quad<C>; 4];

/// 当前帧的解码参数
#[derive(Debug, Clone, Copy)]
pub(super) struct FrameInfo {
    pub flags: FrameFlags,
    pub keyframe: bool,
    /// 本帧是否编码 Alpha 平面
    pub alpha: bool,
}

/// 各平面的行内前驱值 (CBP 或 Variant F 量化参数)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(super) struct PerPlane<T> {
    pub y: T,
    pub u: T,
    pub v: T,
    pub a: T,
}

impl<T: Copy> PerPlane<T> {
    pub(super) const fn splat(v: T) -> Self {
        Self { y: v, u: v, v, a: v }
    }
}

pub(super) type PlaneCbps = PerPlane<u32>;

/// 跨宏块的预测状态
pub(super) struct PredictionState {
    pub quant: QuantPredictor,
    pub y_dc: DcPredictor<16>,
    pub u_dc: DcPredictor<4>,
    pub v_dc: DcPredictor<4>,
    pub a_dc: DcPredictor<16>,
    pub mvs: MvField,
}

impl PredictionState {
    pub(super) fn new() -> Self {
        Self {
            quant: QuantPredictor::default(),
            y_dc: DcPredictor::new(&LUMA_DC),
            u_dc: DcPredictor::new(&CHROMA_DC),
            v_dc: DcPredictor::new(&CHROMA_DC),
            a_dc: DcPredictor::new(&LUMA_DC),
            mvs: MvField::default(),
        }
    }

    /// 条带开始: 调整各数组大小, 运动矢量清零
    pub(super) fn begin_slice(&mut self, bw: usize) {
        self.quant.resize(bw);
        self.y_dc.resize(bw);
        self.u_dc.resize(bw);
        self.v_dc.resize(bw);
        self.a_dc.resize(bw);
        self.mvs.reset(bw);
    }

    /// 一行宏块结束: 当前行变为上一行
    pub(super) fn end_row(&mut self) {
        self.quant.update_line();
        self.y_dc.update_line();
        self.u_dc.update_line();
        self.v_dc.update_line();
        self.a_dc.update_line();
        self.mvs.update_line();
    }
}

/// 单个变体的宏块语法
pub(super) trait BlockDecoder {
    /// 反变换系数类型
    type Coeff: Coeff;

    const VARIANT: Variant;

    /// 每行宏块开始时复位行内状态 (CBP 前驱, 类型 LRU 等)
    fn begin_row(&mut self);

    /// 读取非关键帧宏块类型
    fn decode_block_type(&mut self, br: &mut BitReader) -> Bink2Result<BlockType>;

    /// 读取 N 个 DC 差值; `bias` 表示该平面位于条带左上角
    fn decode_dc<const N: usize>(
        &mut self,
        br: &mut BitReader,
        q: u8,
        bias: bool,
    ) -> Bink2Result<[i32; N]>;

    /// 读取 4 个 8x8 块的 AC 系数 (反量化后按自然顺序写入)
    fn decode_ac(
        &mut self,
        br: &mut BitReader,
        blocks: &mut Quad<Self::Coeff>,
        kind: BlockKind,
        q: u8,
        cbp: u32,
    ) -> Bink2Result<()>;

    /// 读取运动矢量差值并叠加预测
    fn decode_mv(&mut self, br: &mut BitReader, mvs: &mut MvField, mb: &MbPos) -> Bink2Result<()>;

    /// 解码帧内宏块并写入像素
    fn decode_intra(
        &mut self,
        br: &mut BitReader,
        st: &mut PredictionState,
        pic: &mut Picture,
        mb: &MbPos,
        frame: &FrameInfo,
    ) -> Bink2Result<()>;

    /// 解码残差并叠加到已运动补偿的像素上
    fn decode_residue(
        &mut self,
        br: &mut BitReader,
        st: &mut PredictionState,
        pic: &mut Picture,
        mb: &MbPos,
        frame: &FrameInfo,
    ) -> Bink2Result<()>;

    /// 解码一个宏块: 类型分派、运动补偿、残差与邻居 DC 刷新
    fn decode_macroblock(
        &mut self,
        br: &mut BitReader,
        st: &mut PredictionState,
        pic: &mut Picture,
        reference: Option<&Picture>,
        mb: &MbPos,
        frame: &FrameInfo,
    ) -> Bink2Result<BlockType> {
        let btype = if frame.keyframe {
            BlockType::Intra
        } else {
            let bt = self.decode_block_type(br)?;
            for pos in [mb.bx * 2, mb.bx * 2 + 1] {
                let q = st.quant.predict(pos, mb.top);
                st.quant.set(pos, q);
            }
            bt
        };

        match btype {
            BlockType::Intra => {
                self.decode_intra(br, st, pic, mb, frame)?;
                if !frame.keyframe {
                    st.mvs.predict(mb, Self::VARIANT == Variant::G);
                }
                return Ok(btype);
            }
            BlockType::Skip => {
                st.mvs.zero(mb.bx);
                motion_compensate(pic, reference, &st.mvs, mb, frame.alpha)?;
            }
            BlockType::Motion => {
                self.decode_mv(br, &mut st.mvs, mb)?;
                motion_compensate(pic, reference, &st.mvs, mb, frame.alpha)?;
            }
            BlockType::Residue => {
                self.decode_mv(br, &mut st.mvs, mb)?;
                motion_compensate(pic, reference, &st.mvs, mb, frame.alpha)?;
                self.decode_residue(br, st, pic, mb, frame)?;
            }
        }
        boundary_smooth(st, pic, mb, frame.alpha);
        Ok(btype)
    }
}

/// 块的平面与编码方式, 决定扫描顺序与量化矩阵
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum BlockKind {
    IntraLuma,
    IntraChroma,
    InterLuma,
    InterChroma,
}

pub(super) fn zero_luma<C: Coeff>() -> LumaBlocks<C> {
    [[[C::ZERO; 64]; 4]; 4]
}

pub(super) fn zero_quad<C: Coeff>() -> Quad<C> {
    [[C::ZERO; 64]; 4]
}

/// 把 16 个 DC 写入亮度子块 (子块 i 的第 j 块对应 DC 序号 `i * 4 + j`)
pub(super) fn place_luma_dcs<C: Coeff>(
    blocks: &mut LumaBlocks<C>,
    dcs: &[i32; 16],
    f: impl Fn(i32) -> C,
) {
    for (k, &dc) in dcs.iter().enumerate() {
        blocks[k >> 2][k & 3][0] = f(dc);
    }
}

pub(super) fn place_chroma_dcs<C: Coeff>(
    blocks: &mut Quad<C>,
    dcs: &[i32; 4],
    f: impl Fn(i32) -> C,
) {
    for (blk, &dc) in blocks.iter_mut().zip(dcs) {
        blk[0] = f(dc);
    }
}

/// 写回一个亮度或 Alpha 宏块
pub(super) fn write_luma<C: Coeff>(
    plane: &mut Plane,
    mb: &MbPos,
    blocks: &mut LumaBlocks<C>,
    add: bool,
) {
    for (i, quad) in blocks.iter_mut().enumerate() {
        let x = mb.bx * 32 + (i & 1) * 16;
        let y = mb.by * 32 + (i >> 1) * 16;
        if add {
            add_quad(plane, x, y, quad);
        } else {
            put_quad(plane, x, y, quad);
        }
    }
}

/// 写回一个色度宏块
pub(super) fn write_chroma<C: Coeff>(
    plane: &mut Plane,
    mb: &MbPos,
    blocks: &mut Quad<C>,
    add: bool,
) {
    if add {
        add_quad(plane, mb.bx * 16, mb.by * 16, blocks);
    } else {
        put_quad(plane, mb.bx * 16, mb.by * 16, blocks);
    }
}

/// 按当前宏块的 4 个矢量从参考帧做运动补偿
///
/// 矢量越界的分区保持原内容; 缺少参考帧返回 `InvalidData`.
pub(super) fn motion_compensate(
    pic: &mut Picture,
    reference: Option<&Picture>,
    mvs: &MvField,
    mb: &MbPos,
    alpha: bool,
) -> Bink2Result<()> {
    let Some(reference) = reference else {
        return Err(Bink2Error::InvalidData("帧间宏块缺少参考帧".into()));
    };
    for blk in 0..4 {
        let x = mb.bx * 32 + (blk & 1) * 16;
        let y = mb.by * 32 + (blk & 2) * 8;
        let mv = mvs.get(mb.bx, blk);
        let mut applied = mc_luma(&mut pic.planes[0], &reference.planes[0], x, y, mv);
        applied &= mc_chroma(&mut pic.planes[1], &reference.planes[1], x >> 1, y >> 1, mv);
        applied &= mc_chroma(&mut pic.planes[2], &reference.planes[2], x >> 1, y >> 1, mv);
        if alpha {
            applied &= mc_luma(&mut pic.planes[3], &reference.planes[3], x, y, mv);
        }
        if !applied {
            trace!(
                "宏块 ({}, {}) 分区 {} 矢量 ({}, {}) 越界, 保留原像素",
                mb.bx, mb.by, blk, mv.x, mv.y
            );
        }
    }
    Ok(())
}

fn refresh_plane<const N: usize>(
    pred: &mut DcPredictor<N>,
    plane: &Plane,
    x0: usize,
    y0: usize,
    bx: usize,
) {
    let mut avg = [0i32; N];
    for (i, (x, y)) in pred.layout().refresh_blocks() {
        avg[i] = plane.block_average(x0 + x, y0 + y);
    }
    pred.refresh(bx, &avg);
}

/// 非帧内宏块重建完成后, 用其右列与底行块的空间平均刷新 DC 邻居状态
///
/// 只读取像素, 不修改.
pub(super) fn boundary_smooth(st: &mut PredictionState, pic: &Picture, mb: &MbPos, alpha: bool) {
    let (lx, ly) = (mb.bx * 32, mb.by * 32);
    let (cx, cy) = (mb.bx * 16, mb.by * 16);
    refresh_plane(&mut st.y_dc, &pic.planes[0], lx, ly, mb.bx);
    refresh_plane(&mut st.u_dc, &pic.planes[1], cx, cy, mb.bx);
    refresh_plane(&mut st.v_dc, &pic.planes[2], cx, cy, mb.bx);
    if alpha {
        refresh_plane(&mut st.a_dc, &pic.planes[3], lx, ly, mb.bx);
    }
}
