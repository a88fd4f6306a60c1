//! 反变换与像素写回.
//!
//! Variant G 使用移位近似常数的整数 IDCT, Variant F 使用浮点 AAN 蝶形 IDCT.
//! 两者数值不同, 各自只与本变体的扫描表和量化矩阵配套.

use super::picture::Plane;

/// 整数 IDCT 乘法近似
#[inline]
fn mul_a(v: i32) -> i32 {
    v + (v >> 2)
}

#[inline]
fn mul_b(v: i32) -> i32 {
    v >> 1
}

#[inline]
fn mul_c(v: i32) -> i32 {
    v - (v >> 2) - (v >> 4)
}

#[inline]
fn mul_d(v: i32) -> i32 {
    v + (v >> 2) - (v >> 4)
}

#[inline]
fn mul_e(v: i32) -> i32 {
    v >> 2
}

/// 整数一维 8 点 IDCT
///
/// 从 `src[s * k]` 读取输入, 写到 `dst[d * k]`, 结果右移 `shift`.
fn idct_int_1d(src: &[i32], s: usize, dst: &mut [i32], d: usize, shift: u32) {
    let x = |k: usize| src[s * k];
    let t00 = x(3) + x(5);
    let t01 = x(3) - x(5);
    let t02 = mul_a(x(2)) + mul_b(x(6));
    let t03 = mul_b(x(2)) - mul_a(x(6));
    let t0 = (x(0) + x(4)) + t02;
    let t1 = (x(0) + x(4)) - t02;
    let t2 = x(0) - x(4);
    let t3 = x(1) + t00;
    let t4 = x(1) - t00;
    let t5 = t01 + x(7);
    let t6 = t01 - x(7);
    let t7 = t4 + mul_c(t6);
    let t8 = mul_c(t4) - t6;
    let t9 = mul_d(t3) + mul_e(t5);
    let t10 = mul_e(t3) - mul_d(t5);
    let t11 = t2 + t03;
    let t12 = t2 - t03;

    dst[0] = (t0 + t9) >> shift;
    dst[d] = (t11 + t7) >> shift;
    dst[d * 2] = (t12 + t8) >> shift;
    dst[d * 3] = (t1 + t10) >> shift;
    dst[d * 4] = (t1 - t10) >> shift;
    dst[d * 5] = (t12 - t8) >> shift;
    dst[d * 6] = (t11 - t7) >> shift;
    dst[d * 7] = (t0 - t9) >> shift;
}

/// Variant G 整数 8x8 IDCT
///
/// 第一遍把每行变换后写成临时块的列, 第二遍逐行变换并右移 6 位.
pub(super) fn idct_int(block: &mut [i32; 64]) {
    let mut tmp = [0i32; 64];
    for i in 0..8 {
        idct_int_1d(&block[i * 8..], 1, &mut tmp[i..], 8, 0);
    }
    for i in 0..8 {
        idct_int_1d(&tmp[i * 8..], 1, &mut block[i * 8..], 1, 6);
    }
}

/// 浮点一维 8 点 IDCT
fn idct_float_1d(src: &[f32], s: usize, dst: &mut [f32], d: usize) {
    use std::f32::consts::SQRT_2;

    let x = |k: usize| src[s * k];
    let t00 = x(2) + x(6);
    let t01 = (x(2) - x(6)) * SQRT_2 - t00;
    let t02 = x(0) + x(4);
    let t03 = x(0) - x(4);
    let t04 = x(3) + x(5);
    let t05 = x(3) - x(5);
    let t06 = x(1) + x(7);
    let t07 = x(1) - x(7);
    let t08 = t02 + t00;
    let t09 = t02 - t00;
    let t10 = t03 + t01;
    let t11 = t03 - t01;
    let t12 = t06 + t04;
    let t13 = (t06 - t04) * SQRT_2;
    let t14 = (t07 - t05) * 1.847759;
    let t15 = t05 * 2.613126 + t14 - t12;
    let t16 = t13 - t15;
    let t17 = t07 * 1.0823922 - t14 + t16;

    dst[0] = t08 + t12;
    dst[d] = t10 + t15;
    dst[d * 2] = t11 + t16;
    dst[d * 3] = t09 - t17;
    dst[d * 4] = t09 + t17;
    dst[d * 5] = t11 - t16;
    dst[d * 6] = t10 - t15;
    dst[d * 7] = t08 - t12;
}

/// Variant F 浮点 8x8 IDCT
///
/// DC 预先加上 512.5 的偏置, 输出样本转整数后再减去 512.
pub(super) fn idct_float(block: &mut [f32; 64]) {
    let mut tmp = [0f32; 64];
    block[0] += 512.5;
    for i in 0..8 {
        idct_float_1d(&block[i..], 8, &mut tmp[i..], 8);
    }
    for i in 0..8 {
        idct_float_1d(&tmp[i * 8..], 1, &mut block[i * 8..], 1);
    }
}

/// 可做反变换的系数类型
pub(super) trait Coeff: Copy {
    const ZERO: Self;

    fn idct(block: &mut [Self; 64]);

    /// 反变换结果转为像素增量
    fn sample(self) -> i32;
}

impl Coeff for i32 {
    const ZERO: Self = 0;

    fn idct(block: &mut [Self; 64]) {
        idct_int(block);
    }

    fn sample(self) -> i32 {
        self
    }
}

impl Coeff for f32 {
    const ZERO: Self = 0.0;

    fn idct(block: &mut [Self; 64]) {
        idct_float(block);
    }

    fn sample(self) -> i32 {
        self as i32 - 512
    }
}

/// 4 个 8x8 块组成的 16x16 区域: 左上, 右上, 左下, 右下
pub(super) type Quad<C> = [[C; 64]; 4];

fn clip8(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

fn write_quad<C: Coeff>(
    plane: &mut Plane,
    x: usize,
    y: usize,
    blocks: &mut Quad<C>,
    add: bool,
) {
    let stride = plane.stride;
    for (n, blk) in blocks.iter_mut().enumerate() {
        C::idct(blk);
        let bx = x + (n & 1) * 8;
        let by = y + (n >> 1) * 8;
        for (r, coeffs) in blk.chunks_exact(8).enumerate() {
            let row = &mut plane.data[(by + r) * stride + bx..][..8];
            for (pix, &c) in row.iter_mut().zip(coeffs) {
                *pix = if add {
                    clip8(i32::from(*pix) + c.sample())
                } else {
                    clip8(c.sample())
                };
            }
        }
    }
}

/// 反变换并覆盖写入 16x16 区域
pub(super) fn put_quad<C: Coeff>(plane: &mut Plane, x: usize, y: usize, blocks: &mut Quad<C>) {
    write_quad(plane, x, y, blocks, false);
}

/// 反变换并叠加到 16x16 区域
pub(super) fn add_quad<C: Coeff>(plane: &mut Plane, x: usize, y: usize, blocks: &mut Quad<C>) {
    write_quad(plane, x, y, blocks, true);
}
