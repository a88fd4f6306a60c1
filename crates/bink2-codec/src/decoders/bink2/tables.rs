//! Bink2 静态码表与量化表.
//!
//! 所有表在编译期确定; 变长码表在首次使用时由 [`super::vlc`] 构建一次.

#![allow(clippy::excessive_precision)]

/// 整数 IDCT 系数块的之字形扫描顺序 (Variant G)
pub(super) const ZIGZAG: [usize; 64] = [
     0,  8,  1,  2,  9, 16, 24, 17,
    10,  3,  4, 11, 18, 25, 32, 40,
    33, 26, 19, 12,  5,  6, 13, 20,
    27, 34, 41, 48, 56, 49, 42, 35,
    28, 21, 14,  7, 15, 22, 29, 36,
    43, 50, 57, 58, 51, 44, 37, 30,
    23, 31, 38, 45, 52, 59, 60, 53,
    46, 39, 47, 54, 61, 62, 55, 63
];

/// Variant F 亮度块扫描顺序
pub(super) const SCAN_LUMA_F: &[usize; 64] = &[
     0,  2,  1,  8,  9, 17, 10, 16,
    24,  3, 18, 25, 32, 11, 33, 26,
     4, 40, 19, 12, 27, 41, 34,  5,
    20, 48,  6, 28, 15, 42, 23, 35,
    21, 13, 14,  7, 31, 43, 49, 36,
    22, 56, 39, 50, 30, 44, 29, 51,
    57, 47, 58, 59, 63, 61, 55, 38,
    52, 62, 45, 37, 60, 46, 54, 53
];

/// Variant F 色度块扫描顺序
pub(super) const SCAN_CHROMA_F: &[usize; 64] = &[
     0,  1,  8,  2,  9, 16, 10, 17,
     3, 24, 11, 18, 25, 13, 14,  4,
    15,  5,  6,  7, 12, 19, 20, 21,
    22, 23, 26, 27, 28, 29, 30, 31,
    32, 33, 34, 35, 36, 37, 38, 39,
    40, 41, 42, 43, 44, 45, 46, 47,
    48, 49, 50, 51, 52, 53, 54, 55,
    56, 57, 58, 59, 60, 61, 62, 63
];

/// Variant G 色度 CBP 复用时由上一低 4 位推出的新低 4 位
pub(super) const CHROMA_CBPS: [u32; 16] = [
    0x0, 0x0, 0x0, 0xF,
    0x0, 0xF, 0xF, 0xF,
    0x0, 0xF, 0xF, 0xF,
    0xF, 0xF, 0xF, 0xF
];

/// Variant G DC 量化步长, 以 q 索引 (定点 1/1024)
pub(super) const DC_QUANTS_G: [i32; 37] = [
    0x400,   0x4C2,   0x5A8,   0x6BA,   0x800,   0x983,   0xB50,   0xD74,
    0x1000,  0x1307,  0x16A1,  0x1AE9,  0x2000,  0x260E,  0x2D41,  0x35D1,
    0x4000,  0x4C1C,  0x5A82,  0x6BA3,  0x8000,  0x9838,  0xB505,  0xD745,
    0x10000, 0x13070, 0x16A0A, 0x1AE8A, 0x20000, 0x260E0, 0x2D414, 0x35D14,
    0x40000, 0x4C1C0, 0x5A828, 0x6BA28, 0x80000
];

/// Variant G 帧内亮度量化矩阵, 以 `q & 3` 选择, 之后左移 `q >> 2`
pub(super) const QMAT_G_INTRA_LUMA: &[[i32; 64]; 4] = &[
  [
     0x400,  0x598,  0x5E2,  0x49D,  0x733,  0x7E9, 0x1497, 0x2190,
     0x521,  0x685,  0x65E,  0x688,  0xA41,  0xD72, 0x1F57, 0x31FA,
     0x434,  0x6DB,  0x710,  0x79E,  0xF8C, 0x130B, 0x226D, 0x2E85,
     0x546,  0x74C,  0x84F,  0x7E0, 0x1275, 0x1162, 0x1E20, 0x25A5,
     0x99A,  0xC1F, 0x10CF, 0x10CF, 0x1B33, 0x1AB3, 0x2B47, 0x3435,
     0xD2F, 0x1648, 0x13BC, 0x17A1, 0x23EE, 0x1C40, 0x29E5, 0x266A,
    0x156E, 0x1D61, 0x1E75, 0x1BB3, 0x2B47, 0x2720, 0x34F7, 0x3270,
    0x1C6F, 0x1DE1, 0x1B6C, 0x17D1, 0x23E5, 0x2357, 0x3175, 0x35C8
  ], [
     0x4C2,  0x6A7,  0x6FF,  0x57D,  0x890,  0x968, 0x187C, 0x27EA,
     0x619,  0x7C1,  0x792,  0x7C4,  0xC32,  0xFFD, 0x2545, 0x3B6F,
     0x4FF,  0x827,  0x866,  0x90F, 0x127D, 0x16A6, 0x28F1, 0x3752,
     0x646,  0x8AE,  0x9E2,  0x95E, 0x15F3, 0x14AC, 0x23D3, 0x2CC4,
     0xB6B,  0xE6A, 0x13FD, 0x13FE, 0x2059, 0x1FC0, 0x3378, 0x3E16,
     0xFAE, 0x1A7F, 0x1778, 0x1C1A, 0x2ABA, 0x2198, 0x31D3, 0x2DAE,
    0x197C, 0x22F0, 0x2438, 0x20F1, 0x3378, 0x2E87, 0x3EFD, 0x3BFA,
    0x21D1, 0x2388, 0x209C, 0x1C52, 0x2AAF, 0x2A07, 0x3AD0, 0x3FF5
  ], [
     0x5A8,  0x7E9,  0x852,  0x687,  0xA2F,  0xB30, 0x1D1E, 0x2F77,
     0x740,  0x938,  0x901,  0x93C,  0xE81, 0x1303, 0x2C52, 0x46AE,
     0x5F1,  0x9B2,  0x9FD,  0xAC6, 0x15FC, 0x1AEE, 0x30B0, 0x41C9,
     0x775,  0xA52,  0xBC0,  0xB24, 0x1A1B, 0x1895, 0x2A9A, 0x353D,
     0xD94, 0x1124, 0x17C5, 0x17C6, 0x2677, 0x25C2, 0x3D34, 0x49D5,
    0x12A5, 0x1F82, 0x1BE9, 0x216B, 0x32CF, 0x27F3, 0x3B40, 0x3653,
    0x1E4E, 0x298D, 0x2B12, 0x272C, 0x3D34, 0x3755, 0x4AE7, 0x4753,
    0x2836, 0x2A41, 0x26C7, 0x21AE, 0x32C3, 0x31FA, 0x45F1, 0x4C0E
  ], [
     0x6BA,  0x968,  0x9E5,  0x7C3,  0xC1C,  0xD4E, 0x22A0, 0x3872,
     0x8A0,  0xAF7,  0xAB5,  0xAFB, 0x113F, 0x169C, 0x34B5, 0x540D,
     0x711,  0xB87,  0xBE1,  0xCD0, 0x1A25, 0x2007, 0x39E6, 0x4E3C,
     0x8DF,  0xC46,  0xDFA,  0xD3F, 0x1F0B, 0x1D3C, 0x32A9, 0x3F4F,
    0x1025, 0x1462, 0x1C44, 0x1C46, 0x2DBF, 0x2CE7, 0x48C9, 0x57CE,
    0x162D, 0x2578, 0x2131, 0x27BE, 0x3C6D, 0x2F82, 0x4676, 0x409A,
    0x240A, 0x3169, 0x3338, 0x2E96, 0x48C9, 0x41CD, 0x5914, 0x54D3,
    0x2FD2, 0x3240, 0x2E1E, 0x280E, 0x3C5E, 0x3B6F, 0x532D, 0x5A73
  ]
];

/// Variant G 帧内色度量化矩阵
pub(super) const QMAT_G_INTRA_CHROMA: &[[i32; 64]; 4] = &[
  [
     0x400,  0x4A9,  0x59A,  0x89B, 0x1600, 0x1221, 0x171C, 0x19A3,
     0x4A9,  0x656,  0x713,  0xE16, 0x19A3, 0x1520, 0x1AEE, 0x1DE1,
     0x59A,  0x713,  0xDBB, 0x130B, 0x171C, 0x130B, 0x1847, 0x1AEE,
     0x89B,  0xE16, 0x130B,  0xEF0, 0x1221,  0xEF0, 0x130B, 0x1520,
    0x1600, 0x19A3, 0x171C, 0x1221, 0x1600, 0x1221, 0x171C, 0x19A3,
    0x1221, 0x1520, 0x130B,  0xEF0, 0x1221,  0xEF0, 0x130B, 0x1520,
    0x171C, 0x1AEE, 0x1847, 0x130B, 0x171C, 0x130B, 0x1847, 0x1AEE,
    0x19A3, 0x1DE1, 0x1AEE, 0x1520, 0x19A3, 0x1520, 0x1AEE, 0x1DE1
  ], [
     0x4C2,  0x58B,  0x6AA,  0xA3C, 0x1A2A, 0x158F, 0x1B7B, 0x1E7D,
     0x58B,  0x789,  0x869, 0x10C0, 0x1E7D, 0x1920, 0x2007, 0x2388,
     0x6AA,  0x869, 0x1054, 0x16A6, 0x1B7B, 0x16A6, 0x1CDE, 0x2007,
     0xA3C, 0x10C0, 0x16A6, 0x11C4, 0x158F, 0x11C4, 0x16A6, 0x1920,
    0x1A2A, 0x1E7D, 0x1B7B, 0x158F, 0x1A2A, 0x158F, 0x1B7B, 0x1E7D,
    0x158F, 0x1920, 0x16A6, 0x11C4, 0x158F, 0x11C4, 0x16A6, 0x1920,
    0x1B7B, 0x2007, 0x1CDE, 0x16A6, 0x1B7B, 0x16A6, 0x1CDE, 0x2007,
    0x1E7D, 0x2388, 0x2007, 0x1920, 0x1E7D, 0x1920, 0x2007, 0x2388
  ], [
     0x5A8,  0x698,  0x7EC,  0xC2C, 0x1F1D, 0x19A3, 0x20AF, 0x2442,
     0x698,  0x8F6,  0xA01, 0x13EB, 0x2442, 0x1DE1, 0x2616, 0x2A41,
     0x7EC,  0xA01, 0x136B, 0x1AEE, 0x20AF, 0x1AEE, 0x2255, 0x2616,
     0xC2C, 0x13EB, 0x1AEE, 0x1520, 0x19A3, 0x1520, 0x1AEE, 0x1DE1,
    0x1F1D, 0x2442, 0x20AF, 0x19A3, 0x1F1D, 0x19A3, 0x20AF, 0x2442,
    0x19A3, 0x1DE1, 0x1AEE, 0x1520, 0x19A3, 0x1520, 0x1AEE, 0x1DE1,
    0x20AF, 0x2616, 0x2255, 0x1AEE, 0x20AF, 0x1AEE, 0x2255, 0x2616,
    0x2442, 0x2A41, 0x2616, 0x1DE1, 0x2442, 0x1DE1, 0x2616, 0x2A41
  ], [
     0x6BA,  0x7D7,  0x96C,  0xE7A, 0x2500, 0x1E7D, 0x26DE, 0x2B1E,
     0x7D7,  0xAA9,  0xBE5, 0x17B0, 0x2B1E, 0x2388, 0x2D4B, 0x3240,
     0x96C,  0xBE5, 0x1718, 0x2007, 0x26DE, 0x2007, 0x28D4, 0x2D4B,
     0xE7A, 0x17B0, 0x2007, 0x1920, 0x1E7D, 0x1920, 0x2007, 0x2388,
    0x2500, 0x2B1E, 0x26DE, 0x1E7D, 0x2500, 0x1E7D, 0x26DE, 0x2B1E,
    0x1E7D, 0x2388, 0x2007, 0x1920, 0x1E7D, 0x1920, 0x2007, 0x2388,
    0x26DE, 0x2D4B, 0x28D4, 0x2007, 0x26DE, 0x2007, 0x28D4, 0x2D4B,
    0x2B1E, 0x3240, 0x2D4B, 0x2388, 0x2B1E, 0x2388, 0x2D4B, 0x3240
  ]
];

/// Variant G 帧间量化矩阵 (亮度与色度共用)
pub(super) const QMAT_G_INTER: &[[i32; 64]; 4] = &[
  [
    0x400, 0x4A9, 0x434, 0x34C, 0x41C, 0x392, 0x4C9,  0x5D4,
    0x4A9, 0x56F, 0x4E6, 0x3D7, 0x4CB, 0x429, 0x5B7,  0x718,
    0x434, 0x4E6, 0x489, 0x3A8, 0x4AB, 0x40A, 0x5A4,  0x6CD,
    0x34C, 0x3D7, 0x3A8, 0x32B, 0x41F, 0x39F, 0x519,  0x630,
    0x41C, 0x4CB, 0x4AB, 0x41F, 0x5AB, 0x538, 0x778,  0x932,
    0x392, 0x429, 0x40A, 0x39F, 0x538, 0x521, 0x799,  0x9B6,
    0x4C9, 0x5B7, 0x5A4, 0x519, 0x778, 0x799, 0xBE4,  0xFC7,
    0x5D4, 0x718, 0x6CD, 0x630, 0x932, 0x9B6, 0xFC7, 0x162F
  ], [
    0x4C2, 0x58B, 0x4FF, 0x3EB, 0x4E4, 0x43F,  0x5B1,  0x6EE,
    0x58B, 0x676, 0x5D3, 0x491, 0x5B3, 0x4F3,  0x6CB,  0x86F,
    0x4FF, 0x5D3, 0x565, 0x459, 0x58D, 0x4CE,  0x6B5,  0x816,
    0x3EB, 0x491, 0x459, 0x3C5, 0x4E6, 0x44F,  0x610,  0x75C,
    0x4E4, 0x5B3, 0x58D, 0x4E6, 0x6BD, 0x635,  0x8E2,  0xAEF,
    0x43F, 0x4F3, 0x4CE, 0x44F, 0x635, 0x61A,  0x909,  0xB8C,
    0x5B1, 0x6CB, 0x6B5, 0x610, 0x8E2, 0x909,  0xE24, 0x12C3,
    0x6EE, 0x86F, 0x816, 0x75C, 0xAEF, 0xB8C, 0x12C3, 0x1A61
  ], [
    0x5A8, 0x698, 0x5F1, 0x4A9, 0x5D0, 0x50D,  0x6C4, 0x83E,
    0x698, 0x7AF, 0x6ED, 0x56F, 0x6C7, 0x5E3,  0x814, 0xA08,
    0x5F1, 0x6ED, 0x66A, 0x52B, 0x69A, 0x5B6,  0x7FA, 0x99E,
    0x4A9, 0x56F, 0x52B, 0x47B, 0x5D4, 0x51F,  0x735, 0x8C1,
    0x5D0, 0x6C7, 0x69A, 0x5D4, 0x804, 0x761,  0xA90, 0xD00,
    0x50D, 0x5E3, 0x5B6, 0x51F, 0x761, 0x741,  0xABF, 0xDBB,
    0x6C4, 0x814, 0x7FA, 0x735, 0xA90, 0xABF, 0x10D2, 0x1650,
    0x83E, 0xA08, 0x99E, 0x8C1, 0xD00, 0xDBB, 0x1650, 0x1F5F
  ], [
    0x6BA, 0x7D7, 0x711, 0x58B, 0x6EA,  0x601,  0x80C,  0x9CD,
    0x7D7, 0x923, 0x83C, 0x676, 0x80F,  0x700,  0x99C,  0xBEE,
    0x711, 0x83C, 0x7A1, 0x626, 0x7DA,  0x6CB,  0x97C,  0xB70,
    0x58B, 0x676, 0x626, 0x554, 0x6EE,  0x617,  0x893,  0xA68,
    0x6EA, 0x80F, 0x7DA, 0x6EE, 0x988,  0x8C7,  0xC90,  0xF76,
    0x601, 0x700, 0x6CB, 0x617, 0x8C7,  0x8A1,  0xCC7, 0x1055,
    0x80C, 0x99C, 0x97C, 0x893, 0xC90,  0xCC7, 0x1400, 0x1A89,
    0x9CD, 0xBEE, 0xB70, 0xA68, 0xF76, 0x1055, 0x1A89, 0x254E
  ]
];

/// Variant G AC 跳跃码表 (高上下文)
pub(super) const RUN_CODES_G1: &[u8] = &[
    0x01, 0x04, 0x00, 0x08, 0x02, 0x32, 0x0A, 0x12,
    0x3A, 0x7A, 0xFA, 0x72, 0x06, 0x1A
];
pub(super) const RUN_BITS_G1: &[u8] = &[1, 3, 4, 4, 5, 7, 5, 6, 7, 8, 8, 7, 3, 6];

/// Variant G AC 跳跃码表 (低上下文)
pub(super) const RUN_CODES_G2: &[u16] = &[
    0x01,  0x00,  0x04,  0x2C, 0x6C, 0x0C, 0x4C, 0xAC,
    0xEC, 0x12C, 0x16C, 0x1AC, 0x02, 0x1C
];
pub(super) const RUN_BITS_G2: &[u8] = &[1, 3, 4, 9, 9, 7, 7, 9, 8, 9, 9, 9, 2, 5];

/// AC 跳跃码符号对应的位置增量; 符号 11 另读 6 位, 符号 13 进入 6 次免码的转义段
pub(super) const RUN_SKIPS: [usize; 14] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 64, 0];

/// Variant G 运动矢量分量码表
pub(super) const MV_CODES: &[u8] = &[
    0x01, 0x06, 0x0C, 0x1C, 0x18, 0x38, 0x58, 0x78,
    0x68, 0x48, 0x28, 0x08, 0x14, 0x04, 0x02, 0x00
];
pub(super) const MV_BITS: &[u8] = &[
    1, 3, 5, 5, 7, 7, 7, 7,
    7, 7, 7, 7, 5, 5, 3, 4
];

/// 运动矢量转义符号: 其后是截断一元码长度加定长数值
pub(super) const MV_ESC: i8 = 42;

/// 运动矢量码字序号到分量差值的映射
pub(super) const MV_SYMS: &[i8] = &[
    0, 1, 2, 3, 4, 5, 6, 7,
    -7, -6, -5, -4, -3, -2, -1, MV_ESC
];

/// Variant F AC 幅值码表 (低上下文)
pub(super) const LEVEL_CODES_F1: &[u16] = &[
    0x004, 0x01, 0x002, 0x00, 0x08, 0x18, 0xF8, 0x178,
    0x138, 0x38, 0x1B8, 0x78, 0xB8
];
pub(super) const LEVEL_BITS_F1: &[u8] = &[3, 1, 2, 4, 5, 6, 8, 9, 9, 9, 9, 9, 9];

/// Variant F AC 幅值码表 (高上下文)
pub(super) const LEVEL_CODES_F2: &[u16] = &[
    0x0A, 0x001, 0x004, 0x08, 0x06, 0x00, 0x02, 0x1A,
    0x2A, 0x16A, 0x1EA, 0x6A, 0xEA
];
pub(super) const LEVEL_BITS_F2: &[u8] = &[6, 1, 3, 4, 3, 4, 4, 5, 7, 9, 9, 9, 9];

/// Variant F AC 跳跃码表 (低上下文)
pub(super) const RUN_CODES_F1: &[u16] = &[
    0x00, 0x001, 0x0D, 0x15, 0x45, 0x85, 0xA5, 0x165,
    0x65, 0x1E5, 0xE5, 0x25, 0x03, 0x05
];
pub(super) const RUN_BITS_F1: &[u8] = &[1, 3, 4, 5, 7, 8, 8, 9, 9, 9, 9, 8, 2, 8];

/// Variant F AC 跳跃码表 (高上下文)
pub(super) const RUN_CODES_F2: &[u16] = &[
    0x00, 0x01, 0x003, 0x07, 0x1F, 0x1B, 0x0F, 0x2F,
    0x5B, 0xDB, 0x1DB, 0x3B, 0x05, 0x0B
];
pub(super) const RUN_BITS_F2: &[u8] = &[1, 3, 4, 4, 5, 7, 6, 6, 8, 9, 9, 6, 3, 5];

/// Variant F 量化差值码表
pub(super) const QUANT_DELTA_CODES: &[u8] = &[
    0x01, 0x02, 0x04, 0x08, 0x10, 0x30, 0x50, 0x70,
    0x00, 0x20, 0x40, 0x60, 0x80, 0xA0, 0xC0, 0xE0
];
pub(super) const QUANT_DELTA_BITS: &[u8] = &[1, 2, 3, 4, 7, 7, 7, 7, 8, 8, 8, 8, 8, 8, 8, 8];

/// Variant F AC 量化倍数
pub(super) const AC_QUANTS_F: [f32; 16] = [
    1.0, 2.0, 2.5, 3.0, 3.5, 4.0, 6.0, 7.0, 8.0, 12.0, 16.0, 24.0, 32.0, 48.0, 64.0, 128.0
];

/// Variant F DC 量化倍数
pub(super) const DC_QUANTS_F: [i32; 16] = [
    4, 4, 4, 4, 4, 6, 7, 8, 10, 12, 16, 24, 32, 48, 64, 128
];

/// Variant F 左上角宏块 DC 偏置的额外位数
pub(super) const DC_BIAS_BITS_F: [u8; 16] = [1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 3, 3, 4, 4, 5, 6];

/// Variant F 帧内亮度量化矩阵 (按列主序存放)
pub(super) const QMAT_F_INTRA_LUMA: &[f32; 64] = &[
    0.125,    0.208056, 0.22864901, 0.205778, 0.22499999, 0.235708, 0.33148301,  0.248309,
    0.190718, 0.288582, 0.29449099, 0.34658501, 0.38143599, 0.47678301, 0.600528, 0.44008601,
    0.16332, 0.31714499, 0.34142101, 0.42249799, 0.604285, 0.70576, 0.68942899, 0.42807001,
    0.235175, 0.38735899, 0.46090701, 0.50122303, 0.82311302, 0.73910397, 0.69206202, 0.39741901,
    0.30000001, 0.45078799, 0.65328097, 0.74962097, 0.85000002, 0.79551601, 0.69678998, 0.38625899,
    0.392847, 0.79009801, 0.73142397, 1.004719, 1.070509, 0.80251199, 0.64313799, 0.27096599,
    0.34501299, 0.56299502, 0.60987997, 0.636379, 0.69678998, 0.60061598, 0.43934, 0.19224399,
    0.210373, 0.26309499, 0.252336, 0.25142801, 0.265553, 0.24928901, 0.188511, 0.094199002
];

/// Variant F 色度量化矩阵 (帧内与帧间共用)
pub(super) const QMAT_F_CHROMA: &[f32; 64] = &[
    0.125, 0.17338, 0.217761, 0.383793, 0.6875, 0.54016501, 0.37207201, 0.18968099,
    0.17338, 0.28056601, 0.32721299, 0.74753499, 0.95358998, 0.74923098, 0.51607901, 0.26309499,
    0.217761, 0.32721299, 0.66387498, 1.056244, 0.89826202, 0.70576, 0.48613599, 0.24783,
    0.383793, 0.74753499, 1.056244, 0.95059502, 0.80841398, 0.635167, 0.437511, 0.223041,
    0.6875, 0.95358998, 0.89826202, 0.80841398, 0.6875, 0.54016501, 0.37207201, 0.18968099,
    0.54016501, 0.74923098, 0.70576, 0.635167, 0.54016501, 0.42440501, 0.292335, 0.149031,
    0.37207201, 0.51607901, 0.48613599, 0.437511, 0.37207201, 0.292335, 0.201364, 0.102655,
    0.18968099, 0.26309499, 0.24783, 0.223041, 0.18968099, 0.149031, 0.102655, 0.052333001
];

/// Variant F 帧间亮度量化矩阵
pub(super) const QMAT_F_INTER_LUMA: &[f32; 64] = &[
    0.125, 0.17338, 0.16332, 0.146984, 0.128475, 0.106393, 0.077045999, 0.043109,
    0.17338, 0.240485, 0.226532, 0.20387299, 0.17820001, 0.147571, 0.109474, 0.062454,
    0.16332, 0.226532, 0.219321, 0.202722, 0.181465, 0.149711, 0.112943, 0.062583998,
    0.146984, 0.20387299, 0.202722, 0.201647, 0.183731, 0.15397599, 0.11711, 0.065334998,
    0.128475, 0.17820001, 0.181465, 0.183731, 0.17708801, 0.155499, 0.120267, 0.068016,
    0.106393, 0.147571, 0.149711, 0.15397599, 0.155499, 0.14575601, 0.116636, 0.068494998,
    0.077045999, 0.109474, 0.112943, 0.11711, 0.120267, 0.116636, 0.098646, 0.060141001,
    0.043109, 0.062454, 0.062583998, 0.065334998, 0.068016, 0.068494998, 0.060141001, 0.038853001
];

