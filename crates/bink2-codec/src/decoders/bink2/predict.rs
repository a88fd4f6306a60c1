//! 空间预测状态: 量化参数, DC 与运动矢量.
//!
//! 每种预测器都保存 "当前行" 与 "上一行" 两份按宏块列索引的数组,
//! 每解完一行宏块交换一次. 这是预测跨越宏块边界的唯一通道.

use std::mem;
use std::ops::{Add, AddAssign};

use super::types::MbPos;

/// 三者取中值
pub(super) fn mid_pred<V: PartialOrd + Copy>(a: V, b: V, c: V) -> V {
    if a < b {
        if b < c {
            b
        } else if a < c {
            c
        } else {
            a
        }
    } else if b < c {
        if a < c { a } else { c }
    } else {
        b
    }
}

// ============================================================================
// 量化参数预测
// ============================================================================

/// 量化参数预测器
///
/// 每个宏块占两个槽位: `bx * 2` 为帧内量化, `bx * 2 + 1` 为残差量化.
#[derive(Default)]
pub(super) struct QuantPredictor {
    cur: Vec<u8>,
    prev: Vec<u8>,
}

impl QuantPredictor {
    /// 按宏块列数调整大小
    pub(super) fn resize(&mut self, bw: usize) {
        self.cur.resize(bw * 2, 0);
        self.prev.resize(bw * 2, 0);
    }

    /// 预测槽位 `pos` 的量化参数
    pub(super) fn predict(&self, pos: usize, top: bool) -> u8 {
        let left = pos < 2;
        match (top, left) {
            (true, true) => 16,
            (true, false) => self.cur[pos - 2],
            (false, true) => self.prev[pos],
            (false, false) => mid_pred(self.prev[pos - 2], self.prev[pos], self.cur[pos - 2]),
        }
    }

    pub(super) fn set(&mut self, pos: usize, q: u8) {
        self.cur[pos] = q;
    }

    pub(super) fn update_line(&mut self) {
        mem::swap(&mut self.cur, &mut self.prev);
    }
}

// ============================================================================
// DC 预测
// ============================================================================

/// DC 预测规则的取值来源
#[derive(Clone, Copy)]
enum Src {
    /// 本宏块已算出的 DC
    Cur(usize),
    /// 左邻宏块的 DC
    Left(usize),
    /// 上一行 DC 数组中相对本宏块起点的偏移
    Top(usize),
}

/// 单个 DC 位置的预测规则
#[derive(Clone, Copy)]
enum DcRule {
    /// 无邻居, 使用基准值
    Base,
    One(Src),
    /// 两点外推, 限制在两者之间
    Pred2(Src, Src),
    /// 梯度预测 `b - a + c`, 限制在三者范围内
    Pred3(Src, Src, Src),
}

use DcRule::*;
use Src::{Cur as C, Left as L, Top as T};

fn dc_pred2(a: i32, b: i32) -> i32 {
    a.max(b).min(a.min(b).max(a * 2 - b))
}

fn dc_pred3(a: i32, b: i32, c: i32) -> i32 {
    a.max(b).max(c).min(a.min(b).min(c).max(b - a + c))
}

/// 平面类型相关的 DC 网格布局
pub(super) struct DcLayout {
    /// 左上角宏块的规则, 其他位置在此基础上覆盖
    base: &'static [DcRule],
    /// 首列非首行
    left_col: &'static [(usize, DcRule)],
    /// 首行非首列
    top_row: &'static [(usize, DcRule)],
    /// 一般位置
    inner: &'static [(usize, DcRule)],
    /// 每个宏块在行数组中占的项数
    row_width: usize,
    /// 写入下一行数组的块 (底行)
    bottom: &'static [usize],
    /// 非帧内宏块重建后刷新为左邻 DC 的块
    right: &'static [usize],
    /// 块序号到宏块内像素坐标
    origin: fn(usize) -> (usize, usize),
}

impl DcLayout {
    /// 需要由像素重新计算 DC 的全部块
    pub(super) fn refresh_blocks(&self) -> impl Iterator<Item = (usize, (usize, usize))> + '_ {
        let extra = self.bottom.iter().filter(|&&i| !self.right.contains(&i));
        self.right
            .iter()
            .chain(extra)
            .map(move |&i| (i, (self.origin)(i)))
    }
}

/// 亮度 (及 Alpha) DC 布局: 16 个 8x8 块
pub(super) static LUMA_DC: DcLayout = DcLayout {
    base: &[
        Base,
        One(C(0)),
        Pred2(C(0), C(1)),
        Pred3(C(0), C(1), C(2)),
        Pred2(C(1), C(3)),
        One(C(4)),
        Pred3(C(1), C(3), C(4)),
        Pred3(C(4), C(5), C(6)),
        Pred2(C(2), C(3)),
        Pred3(C(2), C(3), C(8)),
        Pred2(C(8), C(9)),
        Pred3(C(8), C(9), C(10)),
        Pred3(C(3), C(6), C(9)),
        Pred3(C(6), C(7), C(12)),
        Pred3(C(9), C(11), C(12)),
        Pred3(C(12), C(13), C(14)),
    ],
    left_col: &[
        (0, Pred2(T(4), T(5))),
        (1, Pred3(T(4), T(5), C(0))),
        (4, Pred3(T(5), T(6), C(1))),
        (5, Pred3(T(6), T(7), C(4))),
    ],
    top_row: &[
        (0, Pred2(L(5), L(7))),
        (2, Pred3(L(5), L(7), C(0))),
        (8, Pred3(L(7), L(13), C(2))),
        (10, Pred3(L(13), L(15), C(8))),
    ],
    inner: &[
        (0, Pred3(T(3), T(4), L(5))),
        (1, Pred3(T(4), T(5), C(0))),
        (2, Pred3(L(5), L(7), C(0))),
        (4, Pred3(T(5), T(6), C(1))),
        (5, Pred3(T(6), T(7), C(4))),
        (8, Pred3(L(7), L(13), C(2))),
        (10, Pred3(L(13), L(15), C(8))),
    ],
    row_width: 4,
    bottom: &[10, 11, 14, 15],
    right: &[5, 7, 13, 15],
    origin: |i| ((i & 4) * 4 + (i & 1) * 8, (i & 8) * 2 + (i & 2) * 4),
};

/// 色度 DC 布局: 4 个 8x8 块
pub(super) static CHROMA_DC: DcLayout = DcLayout {
    base: &[Base, One(C(0)), Pred2(C(0), C(1)), Pred3(C(0), C(1), C(2))],
    left_col: &[(0, Pred2(T(2), T(3))), (1, Pred3(T(2), T(3), C(0)))],
    top_row: &[(0, Pred2(L(1), L(3))), (2, Pred3(L(1), L(3), C(0)))],
    inner: &[
        (0, Pred3(T(1), T(2), L(1))),
        (1, Pred3(T(2), T(3), C(0))),
        (2, Pred3(L(1), L(3), C(0))),
    ],
    row_width: 2,
    bottom: &[2, 3],
    right: &[1, 2, 3],
    origin: |i| ((i & 1) * 8, (i & 2) * 4),
};

/// 单个平面的 DC 预测器
pub(super) struct DcPredictor<const N: usize> {
    layout: &'static DcLayout,
    /// 当前宏块的 DC; 处理下一个宏块前即为左邻
    dcs: [i32; N],
    prev_row: Vec<i32>,
    new_row: Vec<i32>,
}

impl<const N: usize> DcPredictor<N> {
    pub(super) fn new(layout: &'static DcLayout) -> Self {
        debug_assert_eq!(layout.base.len(), N);
        Self {
            layout,
            dcs: [0; N],
            prev_row: Vec::new(),
            new_row: Vec::new(),
        }
    }

    pub(super) fn layout(&self) -> &'static DcLayout {
        self.layout
    }

    /// 按宏块列数调整行数组大小, 保留已有内容
    pub(super) fn resize(&mut self, bw: usize) {
        let stride = (bw + 1) * self.layout.row_width;
        self.prev_row.resize(stride, 0);
        self.new_row.resize(stride, 0);
    }

    /// 当前宏块的 DC
    pub(super) fn dcs(&self) -> &[i32; N] {
        &self.dcs
    }

    fn rule(&self, idx: usize, mb: Option<&MbPos>) -> DcRule {
        let overrides = match mb {
            None => &[][..],
            Some(mb) => match (mb.top, mb.left) {
                (true, true) => &[][..],
                (false, true) => self.layout.left_col,
                (true, false) => self.layout.top_row,
                (false, false) => self.layout.inner,
            },
        };
        overrides
            .iter()
            .find(|(i, _)| *i == idx)
            .map_or(self.layout.base[idx], |&(_, r)| r)
    }

    fn apply(&mut self, diff: &[i32; N], mb: Option<&MbPos>, base: i32, min: i32, max: i32) {
        let top_off = mb.map_or(0, |mb| mb.bx * self.layout.row_width);
        let top = &self.prev_row[top_off..];
        let left = self.dcs;
        let mut out = [0i32; N];
        for i in 0..N {
            let get = |s: Src, out: &[i32; N]| match s {
                Src::Cur(k) => out[k],
                Src::Left(k) => left[k],
                Src::Top(k) => top[k],
            };
            let pred = match self.rule(i, mb) {
                Base => base,
                One(a) => get(a, &out),
                Pred2(a, b) => dc_pred2(get(a, &out), get(b, &out)),
                Pred3(a, b, c) => dc_pred3(get(a, &out), get(b, &out), get(c, &out)),
            };
            out[i] = (diff[i] + pred).max(min).min(max);
        }
        self.dcs = out;
    }

    /// 帧内预测: 按宏块位置选择规则, 并写入下一行数组
    pub(super) fn predict_intra(&mut self, diff: &[i32; N], mb: &MbPos, min: i32, max: i32) {
        self.apply(diff, Some(mb), 1 << 10, min, max);
        let rw = self.layout.row_width;
        let start = mb.bx * rw + rw;
        for (dst, &i) in self.new_row[start..start + rw].iter_mut().zip(self.layout.bottom) {
            *dst = self.dcs[i];
        }
    }

    /// 帧间残差预测: 只在宏块内部预测, 基准为 0
    pub(super) fn predict_inter(&mut self, diff: &[i32; N], min: i32, max: i32) {
        self.apply(diff, None, 0, min, max);
    }

    /// 用重建像素计算出的 DC 刷新邻居状态
    pub(super) fn refresh(&mut self, bx: usize, avg: &[i32; N]) {
        for &i in self.layout.right {
            self.dcs[i] = avg[i];
        }
        let rw = self.layout.row_width;
        let start = bx * rw + rw;
        for (dst, &i) in self.new_row[start..start + rw].iter_mut().zip(self.layout.bottom) {
            *dst = avg[i];
        }
    }

    pub(super) fn update_line(&mut self) {
        mem::swap(&mut self.prev_row, &mut self.new_row);
    }
}

// ============================================================================
// 运动矢量预测
// ============================================================================

/// 运动矢量 (亮度半像素单位)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mv {
    pub x: i16,
    pub y: i16,
}

impl Mv {
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// 分量中值预测
    pub fn pred(a: Self, b: Self, c: Self) -> Self {
        Self {
            x: mid_pred(a.x, b.x, c.x),
            y: mid_pred(a.y, b.y, c.y),
        }
    }
}

impl Add for Mv {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x.wrapping_add(rhs.x),
            y: self.y.wrapping_add(rhs.y),
        }
    }
}

impl AddAssign for Mv {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// 运动矢量场: 每个宏块 4 个矢量, 当前行与上一行
#[derive(Default)]
pub(super) struct MvField {
    mvs: Vec<Mv>,
    stride: usize,
    cur_off: usize,
    prev_off: usize,
}

impl MvField {
    /// 条带开始时重置: 调整大小并清零
    pub(super) fn reset(&mut self, bw: usize) {
        self.stride = bw * 4;
        self.cur_off = 0;
        self.prev_off = self.stride;
        self.mvs.clear();
        self.mvs.resize(self.stride * 2, Mv::ZERO);
    }

    pub(super) fn update_line(&mut self) {
        mem::swap(&mut self.cur_off, &mut self.prev_off);
    }

    /// 当前行矢量, `k` 为相对本宏块首矢量的偏移 (负值指向左邻)
    fn c(&self, bx: usize, k: isize) -> Mv {
        self.mvs[(self.cur_off + bx * 4).wrapping_add_signed(k)]
    }

    /// 上一行矢量
    fn t(&self, bx: usize, k: isize) -> Mv {
        self.mvs[(self.prev_off + bx * 4).wrapping_add_signed(k)]
    }

    fn set(&mut self, bx: usize, k: usize, mv: Mv) {
        self.mvs[self.cur_off + bx * 4 + k] = mv;
    }

    pub(super) fn get(&self, bx: usize, blk: usize) -> Mv {
        self.mvs[self.cur_off + bx * 4 + blk]
    }

    /// 写入未经预测的 4 个差值
    pub(super) fn set_deltas(&mut self, bx: usize, deltas: &[Mv; 4]) {
        let pos = self.cur_off + bx * 4;
        self.mvs[pos..pos + 4].copy_from_slice(deltas);
    }

    pub(super) fn zero(&mut self, bx: usize) {
        self.set_deltas(bx, &[Mv::ZERO; 4]);
    }

    /// 对 4 个差值叠加首行非首列的预测 (两种变体相同)
    fn add_top_row(&mut self, bx: usize) {
        let m0 = self.c(bx, 0) + Mv::pred(self.c(bx, -4), self.c(bx, -3), self.c(bx, -1));
        self.set(bx, 0, m0);
        let m2 = self.c(bx, 2) + Mv::pred(self.c(bx, -3), self.c(bx, -1), self.c(bx, 0));
        self.set(bx, 2, m2);
        let m1 = self.c(bx, 1) + Mv::pred(self.c(bx, -3), self.c(bx, 0), self.c(bx, 2));
        self.set(bx, 1, m1);
        self.add_last(bx);
    }

    /// 对 4 个差值叠加首列非首行的预测 (两种变体相同)
    fn add_left_col(&mut self, bx: usize) {
        let m0 = self.c(bx, 0) + Mv::pred(self.t(bx, 0), self.t(bx, 2), self.t(bx, 3));
        self.set(bx, 0, m0);
        let m1 = self.c(bx, 1) + Mv::pred(self.t(bx, 2), self.t(bx, 3), self.c(bx, 0));
        self.set(bx, 1, m1);
        let m2 = self.c(bx, 2) + Mv::pred(self.t(bx, 2), self.c(bx, 0), self.c(bx, 1));
        self.set(bx, 2, m2);
        self.add_last(bx);
    }

    fn add_last(&mut self, bx: usize) {
        let m3 = self.c(bx, 3) + Mv::pred(self.c(bx, 0), self.c(bx, 1), self.c(bx, 2));
        self.set(bx, 3, m3);
    }

    /// Variant G: 叠加 4 矢量预测
    pub(super) fn add_pred_g4(&mut self, mb: &MbPos) {
        let bx = mb.bx;
        match (mb.top, mb.left) {
            (true, false) => self.add_top_row(bx),
            (true, true) => {
                let m0 = self.c(bx, 0);
                let m1 = self.c(bx, 1) + m0;
                self.set(bx, 1, m1);
                let m2 = self.c(bx, 2) + m0;
                self.set(bx, 2, m2);
                self.add_last(bx);
            }
            (false, true) => self.add_left_col(bx),
            (false, false) => {
                let m0 = self.c(bx, 0) + Mv::pred(self.t(bx, 2), self.t(bx, -1), self.c(bx, -3));
                self.set(bx, 0, m0);
                let m1 = self.c(bx, 1) + Mv::pred(self.t(bx, 2), self.t(bx, 3), self.c(bx, 0));
                self.set(bx, 1, m1);
                let m2 = self.c(bx, 2) + Mv::pred(self.c(bx, -3), self.c(bx, -1), self.c(bx, 0));
                self.set(bx, 2, m2);
                self.add_last(bx);
            }
        }
    }

    /// Variant G: 单矢量模式, 差值存放在首个槽位
    pub(super) fn add_pred_g1(&mut self, mb: &MbPos) {
        let bx = mb.bx;
        let mut mv = self.c(bx, 0);
        match (mb.top, mb.left) {
            (true, false) => mv += Mv::pred(self.c(bx, -4), self.c(bx, -3), self.c(bx, -1)),
            (true, true) => {}
            (false, false) => mv += Mv::pred(self.t(bx, -1), self.t(bx, 2), self.c(bx, -3)),
            (false, true) => mv += Mv::pred(self.t(bx, 0), self.t(bx, 2), self.t(bx, 3)),
        }
        self.set_deltas(bx, &[mv; 4]);
    }

    /// Variant F: 叠加预测; 左上角宏块改为叠加全局偏移
    pub(super) fn add_pred_f(&mut self, mb: &MbPos, base: Mv) {
        let bx = mb.bx;
        match (mb.top, mb.left) {
            (true, true) => {
                for k in 0..4 {
                    let mv = self.c(bx, k as isize) + base;
                    self.set(bx, k, mv);
                }
            }
            (true, false) => self.add_top_row(bx),
            (false, true) => self.add_left_col(bx),
            (false, false) => {
                let m0 = self.c(bx, 0) + Mv::pred(self.t(bx, -1), self.t(bx, 2), self.c(bx, -3));
                self.set(bx, 0, m0);
                let m1 = self.c(bx, 1) + Mv::pred(self.t(bx, 2), self.t(bx, 3), self.c(bx, 0));
                self.set(bx, 1, m1);
                let m2 = self.c(bx, 2) + Mv::pred(self.t(bx, 2), self.c(bx, 0), self.c(bx, 1));
                self.set(bx, 2, m2);
                self.add_last(bx);
            }
        }
    }

    /// 帧间帧中的帧内宏块: 由邻居推出矢量, 供后续宏块预测
    pub(super) fn predict(&mut self, mb: &MbPos, variant_g: bool) {
        let bx = mb.bx;
        match (mb.top, mb.left) {
            (true, true) => self.zero(bx),
            (true, false) => {
                let m0 = Mv::pred(self.c(bx, -4), self.c(bx, -3), self.c(bx, -1));
                self.set(bx, 0, m0);
                let m2 = Mv::pred(self.c(bx, -3), self.c(bx, -1), self.c(bx, 0));
                self.set(bx, 2, m2);
                let m1 = Mv::pred(self.c(bx, -1), self.c(bx, 0), self.c(bx, 2));
                self.set(bx, 1, m1);
            }
            (false, true) => {
                let m0 = Mv::pred(self.t(bx, 0), self.t(bx, 2), self.t(bx, 3));
                self.set(bx, 0, m0);
                let m1 = Mv::pred(self.c(bx, 0), self.t(bx, 2), self.t(bx, 3));
                self.set(bx, 1, m1);
                let m2 = Mv::pred(self.t(bx, 2), self.c(bx, 1), self.c(bx, 0));
                self.set(bx, 2, m2);
            }
            (false, false) => {
                let m0 = Mv::pred(self.c(bx, -3), self.t(bx, -1), self.t(bx, 2));
                self.set(bx, 0, m0);
                let m1 = Mv::pred(self.c(bx, 0), self.t(bx, 2), self.t(bx, 3));
                self.set(bx, 1, m1);
                let m2 = if variant_g {
                    Mv::pred(self.c(bx, -3), self.c(bx, -1), self.c(bx, 0))
                } else {
                    Mv::pred(self.t(bx, 2), self.c(bx, 1), self.c(bx, 0))
                };
                self.set(bx, 2, m2);
            }
        }
        if !(mb.top && mb.left) {
            let m3 = Mv::pred(self.c(bx, 0), self.c(bx, 1), self.c(bx, 2));
            self.set(bx, 3, m3);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(bx: usize, top: bool) -> MbPos {
        MbPos {
            bx,
            by: 0,
            top,
            left: bx == 0,
        }
    }

    #[test]
    fn test_mid_pred() {
        assert_eq!(mid_pred(1, 2, 3), 2);
        assert_eq!(mid_pred(3, 1, 2), 2);
        assert_eq!(mid_pred(2, 3, 1), 2);
        assert_eq!(mid_pred(5, 5, 1), 5);
        assert_eq!(mid_pred(-4, 7, 0), 0);
    }

    #[test]
    fn test_量化预测() {
        let mut qp = QuantPredictor::default();
        qp.resize(2);
        assert_eq!(qp.predict(0, true), 16);
        qp.set(0, 10);
        qp.set(1, 12);
        assert_eq!(qp.predict(2, true), 10);
        qp.set(2, 20);
        qp.set(3, 4);
        qp.update_line();
        assert_eq!(qp.predict(1, false), 12);
        qp.set(0, 14);
        // mid(10, 20, 14)
        assert_eq!(qp.predict(2, false), 14);
    }

    #[test]
    fn test_dc_帧内零差值得到平坦基准() {
        let mut pred = DcPredictor::<16>::new(&LUMA_DC);
        pred.resize(2);
        pred.predict_intra(&[0; 16], &pos(0, true), 0, 0x7FF);
        assert_eq!(pred.dcs(), &[1024; 16]);
        pred.predict_intra(&[0; 16], &pos(1, true), 0, 0x7FF);
        assert_eq!(pred.dcs(), &[1024; 16]);
        pred.update_line();
        pred.predict_intra(&[0; 16], &pos(1, false), 0, 0x7FF);
        assert_eq!(pred.dcs(), &[1024; 16]);

        let mut chroma = DcPredictor::<4>::new(&CHROMA_DC);
        chroma.resize(1);
        chroma.predict_intra(&[3, 0, 0, 0], &pos(0, true), 0, 0x7FF);
        assert_eq!(chroma.dcs(), &[1027; 4]);
    }

    #[test]
    fn test_dc_帧内限幅() {
        let mut pred = DcPredictor::<4>::new(&CHROMA_DC);
        pred.resize(1);
        pred.predict_intra(&[4000, -5000, 0, 0], &pos(0, true), 0, 0x7FF);
        assert_eq!(pred.dcs()[0], 0x7FF);
        assert_eq!(pred.dcs()[1], 0);
    }

    #[test]
    fn test_dc_帧间基准为零() {
        let mut pred = DcPredictor::<16>::new(&LUMA_DC);
        pred.resize(1);
        let mut diff = [0; 16];
        diff[0] = -2000;
        pred.predict_inter(&diff, -1023, 1023);
        assert_eq!(pred.dcs()[0], -1023);
        assert_eq!(pred.dcs()[1], -1023);
    }

    #[test]
    fn test_刷新块坐标() {
        let luma: Vec<_> = LUMA_DC.refresh_blocks().collect();
        assert_eq!(
            luma,
            vec![
                (5, (24, 0)),
                (7, (24, 8)),
                (13, (24, 16)),
                (15, (24, 24)),
                (10, (0, 24)),
                (11, (8, 24)),
                (14, (16, 24)),
            ]
        );
        let chroma: Vec<_> = CHROMA_DC.refresh_blocks().collect();
        assert_eq!(chroma, vec![(1, (8, 0)), (2, (0, 8)), (3, (8, 8))]);
    }

    #[test]
    fn test_运动矢量左上角预测() {
        let mut field = MvField::default();
        field.reset(2);
        field.set_deltas(0, &[Mv::new(2, 0), Mv::new(1, 1), Mv::new(-1, 0), Mv::ZERO]);
        field.add_pred_g4(&pos(0, true));
        assert_eq!(field.get(0, 0), Mv::new(2, 0));
        assert_eq!(field.get(0, 1), Mv::new(3, 1));
        assert_eq!(field.get(0, 2), Mv::new(1, 0));
        // mid((2,0), (3,1), (1,0)) = (2, 0)
        assert_eq!(field.get(0, 3), Mv::new(2, 0));

        field.set_deltas(1, &[Mv::ZERO, Mv::ZERO, Mv::ZERO, Mv::ZERO]);
        field.add_pred_g1(&pos(1, true));
        // mid(c[0], c[1], c[3]) = mid((2,0), (3,1), (2,0))
        assert_eq!(field.get(1, 0), Mv::new(2, 0));
        assert_eq!(field.get(1, 3), Mv::new(2, 0));
    }

    #[test]
    fn test_variant_f_全局偏移() {
        let mut field = MvField::default();
        field.reset(1);
        field.set_deltas(0, &[Mv::new(1, 0); 4]);
        field.add_pred_f(&pos(0, true), Mv::new(16, -32));
        for blk in 0..4 {
            assert_eq!(field.get(0, blk), Mv::new(17, -32));
        }
    }

    #[test]
    fn test_帧内宏块的矢量推导() {
        let mut field = MvField::default();
        field.reset(2);
        field.set_deltas(0, &[Mv::new(4, 4); 4]);
        field.predict(&pos(1, true), true);
        for blk in 0..4 {
            assert_eq!(field.get(1, blk), Mv::new(4, 4));
        }
        field.predict(&pos(0, true), true);
        assert_eq!(field.get(0, 0), Mv::ZERO);
    }
}
