//! 运动补偿.
//!
//! 亮度 (及 Alpha) 为半像素精度, 16x16 分区, 6 抽头滤波;
//! 色度为四分之一像素精度, 8x8 分区, 双线性插值.
//! 源窗口 (含滤波抽头) 超出参考平面时跳过该分区, 目标保持原内容.

use super::picture::Plane;
use super::predict::Mv;

fn clip8(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

/// 亮度半像素滤波, 以 `off` 与 `off + step` 之间为插值点
#[inline]
fn luma_tap<T: Copy + Into<i32>>(src: &[T], off: usize, step: usize) -> i32 {
    let el = |o: usize| -> i32 { src[o].into() };
    let t0 = el(off) + el(off + step);
    let t1 = el(off - step) + el(off + 2 * step);
    let t2 = el(off - 2 * step) + el(off + 3 * step);
    (((t0 * 19) >> 1) - t1 * 2 + (t2 >> 1) + 8) >> 4
}

/// 检查 `[pos - margin, pos - margin + extent)` 是否落在 `[0, limit]` 内
fn window_fits(pos: isize, margin: isize, extent: isize, limit: usize) -> bool {
    pos - margin >= 0 && pos - margin + extent <= limit as isize
}

/// 亮度 16x16 运动补偿
///
/// 返回 `false` 表示矢量越界, 该分区未写入.
pub(super) fn mc_luma(dst: &mut Plane, src: &Plane, x: usize, y: usize, mv: Mv) -> bool {
    let sx = x as isize + (mv.x >> 1) as isize;
    let sy = y as isize + (mv.y >> 1) as isize;
    let frac_x = (mv.x & 1) != 0;
    let frac_y = (mv.y & 1) != 0;
    let (mx, ex) = if frac_x { (2, 21) } else { (0, 16) };
    let (my, ey) = if frac_y { (2, 21) } else { (0, 16) };
    if !window_fits(sx, mx, ex, src.width()) || !window_fits(sy, my, ey, src.height) {
        return false;
    }

    let sstride = src.stride;
    let dstride = dst.stride;
    let pix = src.data.as_slice();
    let (sx, sy) = (sx as usize, sy as usize);

    if frac_x && frac_y {
        // 先水平滤波 21 行 (上 2 行, 下 3 行), 再在临时缓冲上垂直滤波
        let mut tmp = [0i16; 21 * 16];
        for (r, trow) in tmp.chunks_exact_mut(16).enumerate() {
            let soff = (sy + r - 2) * sstride + sx;
            for (i, t) in trow.iter_mut().enumerate() {
                *t = luma_tap(pix, soff + i, 1) as i16;
            }
        }
        for row in 0..16 {
            let out = &mut dst.data[(y + row) * dstride + x..][..16];
            for (i, o) in out.iter_mut().enumerate() {
                *o = clip8(luma_tap(&tmp[..], (row + 2) * 16 + i, 16));
            }
        }
        return true;
    }

    for row in 0..16 {
        let soff = (sy + row) * sstride + sx;
        let out = &mut dst.data[(y + row) * dstride + x..][..16];
        if !frac_x && !frac_y {
            out.copy_from_slice(&pix[soff..soff + 16]);
            continue;
        }
        let step = if frac_x { 1 } else { sstride };
        for (i, o) in out.iter_mut().enumerate() {
            *o = clip8(luma_tap(pix, soff + i, step));
        }
    }
    true
}

/// 色度双线性插值, 取整加数与移位量相同
#[inline]
fn chroma_tap<T: Copy + Into<i32>>(src: &[T], off: usize, step: usize, frac: i16, shift: u32) -> i32 {
    let e0: i32 = src[off].into();
    let e1: i32 = src[off + step].into();
    let round = shift as i32;
    match frac {
        0 => e0,
        1 => (e0 * 3 + e1 + round) >> shift,
        2 => (e0 * 2 + e1 * 2 + round) >> shift,
        _ => (e0 + e1 * 3 + round) >> shift,
    }
}

/// 色度 8x8 运动补偿
///
/// 返回 `false` 表示矢量越界, 该分区未写入.
pub(super) fn mc_chroma(dst: &mut Plane, src: &Plane, x: usize, y: usize, mv: Mv) -> bool {
    let sx = x as isize + (mv.x >> 2) as isize;
    let sy = y as isize + (mv.y >> 2) as isize;
    let fx = mv.x & 3;
    let fy = mv.y & 3;
    let ex = if fx != 0 { 9 } else { 8 };
    let ey = if fy != 0 { 9 } else { 8 };
    if !window_fits(sx, 0, ex, src.width()) || !window_fits(sy, 0, ey, src.height) {
        return false;
    }

    let sstride = src.stride;
    let dstride = dst.stride;
    let pix = src.data.as_slice();
    let base = sy as usize * sstride + sx as usize;

    if fx != 0 && fy != 0 {
        let mut tmp = [0u16; 9 * 8];
        for (r, trow) in tmp.chunks_exact_mut(8).enumerate() {
            for (i, t) in trow.iter_mut().enumerate() {
                *t = chroma_tap(pix, base + r * sstride + i, 1, fx, 0) as u16;
            }
        }
        for row in 0..8 {
            let out = &mut dst.data[(y + row) * dstride + x..][..8];
            for (i, o) in out.iter_mut().enumerate() {
                *o = chroma_tap(&tmp[..], row * 8 + i, 8, fy, 4) as u8;
            }
        }
        return true;
    }

    for row in 0..8 {
        let soff = base + row * sstride;
        let out = &mut dst.data[(y + row) * dstride + x..][..8];
        for (i, o) in out.iter_mut().enumerate() {
            *o = if fy == 0 {
                chroma_tap(pix, soff + i, 1, fx, 2) as u8
            } else {
                chroma_tap(pix, soff + i, sstride, fy, 2) as u8
            };
        }
    }
    true
}
