use super::*;
use crate::codec_parameters::{CodecParamsType, VideoCodecParams};
use crate::frame::VideoFrame;
use bink2_core::PixelFormat;
use bink2_core::bitwriter::BitWriter;

use super::block::BlockKind;
use super::idct::{Coeff, idct_float, idct_int};
use super::tables::{
    AC_QUANTS_F, DC_QUANTS_G, QUANT_DELTA_BITS, QUANT_DELTA_CODES, RUN_BITS_G2, RUN_CODES_G2,
    ZIGZAG,
};
use super::types::FrameFlags;
use super::{variant_f, variant_g};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn make_params(tag: &[u8; 4], side_flags: u32, width: u32, height: u32) -> CodecParameters {
    CodecParameters {
        codec_id: CodecId::Bink2,
        codec_tag: *tag,
        extra_data: side_flags.to_le_bytes().to_vec(),
        bit_rate: 0,
        params: CodecParamsType::Video(VideoCodecParams {
            width,
            height,
            pixel_format: PixelFormat::Yuv420p,
        }),
    }
}

fn open_decoder(tag: &[u8; 4], side_flags: u32, width: u32, height: u32) -> Bink2Decoder {
    let mut dec = Bink2Decoder::new();
    dec.open(&make_params(tag, side_flags, width, height)).unwrap();
    dec
}

/// 拼接帧标志字、条带偏移表与各条带码流
fn assemble(frame_flags: u32, slices: &[Vec<u8>]) -> Vec<u8> {
    let mut out = frame_flags.to_le_bytes().to_vec();
    let mut offset = 4 * slices.len();
    for s in &slices[..slices.len() - 1] {
        offset += s.len();
        out.extend_from_slice(&(offset as u32).to_le_bytes());
    }
    for s in slices {
        out.extend_from_slice(s);
    }
    out
}

fn packet(data: Vec<u8>, keyframe: bool, pts: i64) -> Packet {
    let mut pkt = Packet::from_data(data);
    pkt.is_keyframe = keyframe;
    pkt.pts = pts;
    pkt
}

fn decode(dec: &mut Bink2Decoder, pkt: &Packet) -> Bink2Result<VideoFrame> {
    dec.send_packet(pkt)?;
    let Frame::Video(frame) = dec.receive_frame()?;
    Ok(frame)
}

fn write_quant_delta(bw: &mut BitWriter, sym: usize) {
    bw.write_bits(
        u32::from(QUANT_DELTA_CODES[sym]),
        u32::from(QUANT_DELTA_BITS[sym]),
    );
}

/// Variant F 空平面: 沿用前驱 CBP (0), 量化不变, DC 宽度 0
fn write_f_plane(bw: &mut BitWriter, bias: bool) {
    bw.write_bits(0b11, 2);
    write_quant_delta(bw, 0);
    bw.write_bits(0, 3);
    if bias {
        // q = 8 时偏置字段宽 10 - 2 - 0 位
        bw.write_bits(0, 8);
    }
}

fn f_intra_slice(bw_mbs: usize, rows: usize, alpha: bool) -> Vec<u8> {
    let mut bw = BitWriter::new();
    for row in 0..rows {
        for bx in 0..bw_mbs {
            let bias = row == 0 && bx == 0;
            for _ in 0..if alpha { 4 } else { 3 } {
                write_f_plane(&mut bw, bias);
            }
        }
    }
    bw.finish()
}

fn f_skip_slice(bw_mbs: usize, rows: usize) -> Vec<u8> {
    let mut bw = BitWriter::new();
    for _ in 0..bw_mbs * rows {
        bw.write_bits(1, 2);
    }
    bw.finish()
}

/// Variant G 空亮度平面: CBP 为 0, 无高上下文, 无 DC
fn write_g_luma(bw: &mut BitWriter) {
    bw.write_bit(1);
    bw.write_bit(0);
    bw.write_bit(0);
}

fn write_g_chroma(bw: &mut BitWriter) {
    bw.write_bit(0);
    bw.write_bits(0, 4);
    bw.write_bit(0);
    bw.write_bit(0);
}

fn g_intra_slice(mbs: usize, alpha: bool) -> Vec<u8> {
    let mut bw = BitWriter::new();
    for _ in 0..mbs {
        bw.write_bit(1);
        write_g_luma(&mut bw);
        write_g_chroma(&mut bw);
        write_g_chroma(&mut bw);
        if alpha {
            write_g_luma(&mut bw);
        }
    }
    bw.finish()
}

fn write_g_run(bw: &mut BitWriter, sym: usize) {
    bw.write_bits(u32::from(RUN_CODES_G2[sym]), u32::from(RUN_BITS_G2[sym]));
}

/// Variant G 亮度平面: 只有块 0 编码, 之字形位置 1 上幅值 +3, 无 DC 差值
fn write_g_luma_with_ac(bw: &mut BitWriter) {
    bw.write_bit(0);
    bw.write_bit(0);
    bw.write_bits(0b0001, 4);
    for _ in 1..4 {
        bw.write_bit(1);
    }
    bw.write_bit(0);
    bw.write_bit(0);
    write_g_run(bw, 0);
    bw.write_unary_limited(2, 12, 0);
    bw.write_bit(0);
    write_g_run(bw, 12);
}

/// 左上角 8x8 有纹理且两侧都偏离 128, 其余像素保持 128
fn assert_only_corner_textured(frame: &VideoFrame) {
    let stride = frame.linesize[0];
    let luma = &frame.data[0];
    let corner: Vec<u8> = (0..8)
        .flat_map(|y| luma[y * stride..y * stride + 8].iter().copied())
        .collect();
    assert!(corner.iter().any(|&p| p > 128), "角块没有亮于 128 的像素");
    assert!(corner.iter().any(|&p| p < 128), "角块没有暗于 128 的像素");
    for y in 0..frame.height as usize {
        for x in 0..frame.width as usize {
            if x >= 8 || y >= 8 {
                assert_eq!(luma[y * stride + x], 128, "亮度 ({}, {})", x, y);
            }
        }
    }
    for plane in &frame.data[1..] {
        assert!(plane.iter().all(|&p| p == 128));
    }
}

/// 带行/列位图的 Variant G 关键帧 (64x64)
fn g_bitmap_keyframe() -> Vec<u8> {
    let mut bw = BitWriter::new();
    // 行位图: 原样存储 7 位
    bw.write_bit(0);
    bw.write_bits(0b101_0011, 7);
    // 列位图: 游程段, 位值 1, 长度 6 + 1
    bw.write_bit(1);
    bw.write_bit(1);
    bw.write_bit(1);
    bw.write_bits(1, 4);
    for _ in 0..4 {
        bw.write_bit(1);
        write_g_luma(&mut bw);
        write_g_chroma(&mut bw);
        write_g_chroma(&mut bw);
    }
    assemble(FrameFlags::CBP_BITMAPS.bits(), &[bw.finish()])
}

fn f_flat_keyframe(alpha: bool) -> Vec<u8> {
    assemble(0, &[f_intra_slice(2, 1, alpha), f_intra_slice(2, 1, alpha)])
}

fn assert_flat(frame: &VideoFrame, value: u8) {
    for (plane, data) in frame.data.iter().enumerate() {
        assert!(
            data.iter().all(|&p| p == value),
            "平面 {} 不是常数 {}",
            plane,
            value
        );
    }
}

#[test]
fn test_创建与打开() {
    let dec = open_decoder(b"KB2f", 0, 64, 64);
    assert_eq!(dec.codec_id(), CodecId::Bink2);
    assert_eq!(dec.name(), "bink2");
    assert_eq!(dec.variant(), Some(Variant::F));
    assert_eq!(dec.slice_count(), Some(2));
}

#[test]
fn test_未打开时送包报错() {
    let mut dec = Bink2Decoder::create().unwrap();
    let pkt = packet(vec![0; 16], true, 0);
    assert!(matches!(dec.send_packet(&pkt), Err(Bink2Error::Codec(_))));
}

#[test]
fn test_f_关键帧两条带平坦输出() {
    let mut dec = open_decoder(b"KB2f", 0, 64, 64);
    let frame = decode(&mut dec, &packet(f_flat_keyframe(false), true, 7)).unwrap();

    assert_eq!(frame.pixel_format, PixelFormat::Yuv420p);
    assert_eq!((frame.width, frame.height), (64, 64));
    assert_eq!(frame.linesize, vec![64, 32, 32]);
    assert_eq!(frame.pts, 7);
    assert!(frame.is_keyframe);
    assert_eq!(frame.picture_type, PictureType::I);
    assert_flat(&frame, 128);
}

#[test]
fn test_g_关键帧平坦输出() {
    let mut dec = open_decoder(b"KB2g", 0, 64, 64);
    assert_eq!(dec.variant(), Some(Variant::G));
    assert_eq!(dec.slice_count(), Some(1));

    let data = assemble(0, &[g_intra_slice(4, false)]);
    let frame = decode(&mut dec, &packet(data, true, 0)).unwrap();
    assert_flat(&frame, 128);
}

#[test]
fn test_显示尺寸与对齐尺寸() {
    let mut dec = open_decoder(b"KB2g", 0, 40, 50);
    let data = assemble(0, &[g_intra_slice(4, false)]);
    let frame = decode(&mut dec, &packet(data, true, 0)).unwrap();
    assert_eq!((frame.width, frame.height), (64, 64));
    assert_eq!((frame.coded_width, frame.coded_height), (40, 50));
}

#[test]
fn test_alpha_平面按亮度编码() {
    let mut dec = open_decoder(b"KB2f", SIDE_FLAG_ALPHA, 64, 64);
    let frame = decode(&mut dec, &packet(f_flat_keyframe(true), true, 0)).unwrap();
    assert_eq!(frame.pixel_format, PixelFormat::Yuva420p);
    assert_eq!(frame.data.len(), 4);
    assert_eq!(frame.linesize[3], 64);
    assert_flat(&frame, 128);
}

#[test]
fn test_alpha_填充() {
    let mut dec = open_decoder(b"KB2g", SIDE_FLAG_ALPHA, 64, 64);
    let flags = FrameFlags::ALPHA_FILL.bits() | (0x7F << 24);
    // 填充帧不再编码 Alpha
    let data = assemble(flags, &[g_intra_slice(4, false)]);
    let frame = decode(&mut dec, &packet(data, true, 0)).unwrap();
    assert!(frame.data[3].iter().all(|&p| p == 0x7F));
    assert!(frame.data[0].iter().all(|&p| p == 128));
}

#[test]
fn test_关键帧不读取宏块类型() {
    // 同一码流作为帧间帧时首 2 位会被读成残差宏块, 因缺少参考帧而失败
    let data = f_flat_keyframe(false);

    let mut dec = open_decoder(b"KB2f", 0, 64, 64);
    assert!(matches!(
        dec.send_packet(&packet(data.clone(), false, 0)),
        Err(Bink2Error::InvalidData(_))
    ));

    let frame = decode(&mut dec, &packet(data, true, 1)).unwrap();
    assert_flat(&frame, 128);
}

#[test]
fn test_跳过宏块复制参考帧() {
    let mut dec = open_decoder(b"KB2f", 0, 64, 64);
    let key = decode(&mut dec, &packet(f_flat_keyframe(false), true, 0)).unwrap();

    let data = assemble(0, &[f_skip_slice(2, 1), f_skip_slice(2, 1)]);
    let inter = decode(&mut dec, &packet(data, false, 1)).unwrap();
    assert_eq!(inter.picture_type, PictureType::P);
    assert!(!inter.is_keyframe);
    assert_eq!(inter.data, key.data);
}

#[test]
fn test_零矢量运动宏块() {
    let mut dec = open_decoder(b"KB2f", 0, 64, 64);
    let key = decode(&mut dec, &packet(f_flat_keyframe(false), true, 0)).unwrap();

    let slice = |_: usize| {
        let mut bw = BitWriter::new();
        for bx in 0..2 {
            bw.write_bits(2, 2);
            for _ in 0..2 {
                bw.write_bits(0, 3);
                if bx == 0 {
                    bw.write_bits(0, 5);
                }
            }
        }
        bw.finish()
    };
    let data = assemble(0, &[slice(0), slice(1)]);
    let inter = decode(&mut dec, &packet(data, false, 1)).unwrap();
    assert_eq!(inter.data, key.data);
}

#[test]
fn test_缺少参考帧报错() {
    let mut dec = open_decoder(b"KB2f", 0, 64, 64);
    let data = assemble(0, &[f_skip_slice(2, 1), f_skip_slice(2, 1)]);
    assert!(matches!(
        dec.send_packet(&packet(data, false, 0)),
        Err(Bink2Error::InvalidData(_))
    ));
    assert!(matches!(dec.receive_frame(), Err(Bink2Error::NeedMoreData)));
}

#[test]
fn test_截断的帧不推进参考帧() {
    init_logger();
    let mut dec = open_decoder(b"KB2f", 0, 64, 64);
    let key = decode(&mut dec, &packet(f_flat_keyframe(false), true, 0)).unwrap();

    let mut bad = f_flat_keyframe(false);
    bad.truncate(10);
    assert!(matches!(
        dec.send_packet(&packet(bad, true, 1)),
        Err(Bink2Error::InvalidData(_))
    ));

    let data = assemble(0, &[f_skip_slice(2, 1), f_skip_slice(2, 1)]);
    let inter = decode(&mut dec, &packet(data, false, 2)).unwrap();
    assert_eq!(inter.data, key.data);
}

#[test]
fn test_帧头过短() {
    let mut dec = open_decoder(b"KB2f", 0, 64, 64);
    assert!(matches!(
        dec.send_packet(&packet(vec![0; 6], true, 0)),
        Err(Bink2Error::InvalidData(_))
    ));
}

#[test]
fn test_f_量化越界() {
    let mut dec = open_decoder(b"KB2f", 0, 64, 64);
    let mut bw = BitWriter::new();
    bw.write_bits(0b11, 2);
    // 8 + 8 = 16 超出 [0, 16)
    write_quant_delta(&mut bw, 8);
    bw.write_bit(0);
    let slice = bw.finish();
    let data = assemble(0, &[slice, f_intra_slice(2, 1, false)]);
    assert!(matches!(
        dec.send_packet(&packet(data, true, 0)),
        Err(Bink2Error::InvalidData(_))
    ));
}

#[test]
fn test_g_量化越界() {
    let mut dec = open_decoder(b"KB2g", 0, 64, 64);
    let mut bw = BitWriter::new();
    // 16 + (16 + 5) = 37 超出 [0, 37)
    bw.write_unary_limited(4, 4, 1);
    bw.write_bits(16, 5);
    bw.write_bit(0);
    let data = assemble(0, &[bw.finish()]);
    assert!(matches!(
        dec.send_packet(&packet(data, true, 0)),
        Err(Bink2Error::InvalidData(_))
    ));
}

#[test]
fn test_解码结果确定() {
    let packets = [
        packet(f_flat_keyframe(true), true, 0),
        packet(
            assemble(0, &[f_skip_slice(2, 1), f_skip_slice(2, 1)]),
            false,
            1,
        ),
    ];
    let run = || {
        let mut dec = open_decoder(b"KB2f", SIDE_FLAG_ALPHA, 64, 64);
        packets
            .iter()
            .map(|p| decode(&mut dec, p).unwrap().data)
            .collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_条带偏移偏差只记录() {
    init_logger();
    let mut dec = open_decoder(b"KB2f", 0, 64, 64);
    let mut first = f_intra_slice(2, 1, false);
    first.extend_from_slice(&[0xAA, 0x55, 0xAA]);
    let data = assemble(0, &[first, f_intra_slice(2, 1, false)]);
    let frame = decode(&mut dec, &packet(data, true, 0)).unwrap();
    assert_flat(&frame, 128);
}

#[test]
fn test_行列位图() {
    let mut dec = open_decoder(b"KB2g", 0, 64, 64);
    let frame = decode(&mut dec, &packet(g_bitmap_keyframe(), true, 0)).unwrap();
    assert_flat(&frame, 128);

    let (rows, cols) = dec.cbp_bitmaps();
    assert_eq!(
        rows,
        &[false, true, true, false, false, true, false, true][..]
    );
    assert_eq!(cols.len(), 8);
    assert!(!cols[0]);
    assert!(cols[1..].iter().all(|&c| c));
}

#[test]
fn test_侧数据不足() {
    let mut dec = Bink2Decoder::new();
    let mut params = make_params(b"KB2g", 0, 64, 64);
    params.extra_data = vec![0, 0, 0];
    assert!(matches!(dec.open(&params), Err(Bink2Error::InvalidData(_))));
}

#[test]
fn test_非_bink2_fourcc() {
    let mut dec = Bink2Decoder::new();
    let params = make_params(b"BIKi", 0, 64, 64);
    assert!(matches!(dec.open(&params), Err(Bink2Error::Unsupported(_))));
}

#[test]
fn test_侧数据内嵌版本() {
    let mut dec = Bink2Decoder::new();
    let mut params = make_params(b"KB2a", 0, 64, 512);
    params.extra_data = b"KB2h".to_vec();
    params.extra_data.extend_from_slice(&2u32.to_le_bytes());
    dec.open(&params).unwrap();
    assert_eq!(dec.variant(), Some(Variant::G));
    assert_eq!(dec.slice_count(), Some(4));
}

#[test]
fn test_收发协议() {
    let mut dec = open_decoder(b"KB2f", 0, 64, 64);
    assert!(matches!(dec.receive_frame(), Err(Bink2Error::NeedMoreData)));

    let pkt = packet(f_flat_keyframe(false), true, 0);
    dec.send_packet(&pkt).unwrap();
    assert!(matches!(dec.send_packet(&pkt), Err(Bink2Error::NeedMoreData)));
    dec.receive_frame().unwrap();

    dec.send_packet(&Packet::empty()).unwrap();
    assert!(matches!(dec.receive_frame(), Err(Bink2Error::Eof)));

    dec.flush();
    assert!(matches!(dec.receive_frame(), Err(Bink2Error::NeedMoreData)));
}

#[test]
fn test_刷新后丢弃参考帧() {
    let mut dec = open_decoder(b"KB2f", 0, 64, 64);
    decode(&mut dec, &packet(f_flat_keyframe(false), true, 0)).unwrap();
    dec.flush();
    let data = assemble(0, &[f_skip_slice(2, 1), f_skip_slice(2, 1)]);
    assert!(dec.send_packet(&packet(data, false, 1)).is_err());
}

#[test]
fn test_丢弃的帧不更新位图() {
    init_logger();
    let mut dec = open_decoder(b"KB2g", 0, 64, 64);
    decode(&mut dec, &packet(g_bitmap_keyframe(), true, 0)).unwrap();
    let (rows, cols) = dec.cbp_bitmaps();
    let committed = (rows.to_vec(), cols.to_vec());

    // 位图本身完整, 之后第一个宏块的量化参数越界
    let mut bw = BitWriter::new();
    bw.write_bit(0);
    bw.write_bits(0x7F, 7);
    bw.write_bit(0);
    bw.write_bits(0, 7);
    bw.write_unary_limited(4, 4, 1);
    bw.write_bits(16, 5);
    bw.write_bit(0);
    let data = assemble(FrameFlags::CBP_BITMAPS.bits(), &[bw.finish()]);
    assert!(matches!(
        dec.send_packet(&packet(data, true, 1)),
        Err(Bink2Error::InvalidData(_))
    ));

    let (rows, cols) = dec.cbp_bitmaps();
    assert_eq!((rows.to_vec(), cols.to_vec()), committed);

    // 下一帧成功后位图随之更新
    let data = assemble(0, &[g_intra_slice(4, false)]);
    decode(&mut dec, &packet(data, true, 2)).unwrap();
    let (rows, cols) = dec.cbp_bitmaps();
    assert!(rows.iter().chain(cols).all(|&b| !b));
}

#[test]
fn test_零系数反量化后反变换为零() {
    let kinds = [
        BlockKind::IntraLuma,
        BlockKind::IntraChroma,
        BlockKind::InterLuma,
        BlockKind::InterChroma,
    ];
    for kind in kinds {
        let (scan, qmat) = variant_f::ac_tables(kind);
        let mut sorted = *scan;
        sorted.sort_unstable();
        assert!(sorted.iter().copied().eq(0..64), "{:?} 扫描表不是排列", kind);
        for &quant in &AC_QUANTS_F {
            let mut blk = [0f32; 64];
            for &pos in scan {
                blk[pos] = variant_f::dequant_ac(0, qmat, pos, quant);
            }
            idct_float(&mut blk);
            assert!(
                blk.iter().all(|&v| v.sample() == 0),
                "variant F {:?} quant {}",
                kind,
                quant
            );
        }

        for q in 0..DC_QUANTS_G.len() as u8 {
            let (qmat, shift) = variant_g::ac_matrix(kind, q);
            let mut blk = [0i32; 64];
            for &pos in &ZIGZAG {
                blk[pos] = variant_g::dequant_ac(0, qmat, pos, shift);
            }
            idct_int(&mut blk);
            assert_eq!(blk, [0; 64], "variant G {:?} q {}", kind, q);
        }
    }
}

#[test]
fn test_g_帧内宏块_ac_系数() {
    let mut dec = open_decoder(b"KB2g", 0, 64, 64);
    let mut bw = BitWriter::new();
    bw.write_bit(1);
    write_g_luma_with_ac(&mut bw);
    write_g_chroma(&mut bw);
    write_g_chroma(&mut bw);
    for _ in 1..4 {
        bw.write_bit(1);
        write_g_luma(&mut bw);
        write_g_chroma(&mut bw);
        write_g_chroma(&mut bw);
    }
    let data = assemble(0, &[bw.finish()]);
    let frame = decode(&mut dec, &packet(data, true, 0)).unwrap();
    assert_only_corner_textured(&frame);

    // 系数位于第 1 行第 0 列: 每行相同, 沿列方向变化
    let stride = frame.linesize[0];
    let row0 = &frame.data[0][..8];
    for y in 1..8 {
        assert_eq!(&frame.data[0][y * stride..y * stride + 8], row0);
    }
    assert_eq!(row0[0], 137);
    assert_eq!(row0[7], 119);
}

#[test]
fn test_g_残差宏块叠加到参考帧() {
    let mut dec = open_decoder(b"KB2g", 0, 64, 64);
    let key = assemble(0, &[g_intra_slice(4, false)]);
    decode(&mut dec, &packet(key, true, 0)).unwrap();

    let mut bw = BitWriter::new();
    // 第 0 行: 残差 (LRU 序号 1), 跳过 (序号 3)
    bw.write_unary_limited(1, 3, 1);
    // 单矢量, 两个分量都为 0
    bw.write_bit(1);
    bw.write_bit(1);
    bw.write_bit(1);
    // 量化参数沿用预测值
    bw.write_bit(1);
    write_g_luma_with_ac(&mut bw);
    // 无色度残差
    bw.write_bit(0);
    bw.write_unary_limited(3, 3, 1);
    // 第 1 行: 两个跳过宏块
    bw.write_unary_limited(3, 3, 1);
    bw.write_unary_limited(1, 3, 1);
    let data = assemble(0, &[bw.finish()]);

    let frame = decode(&mut dec, &packet(data, false, 1)).unwrap();
    assert_eq!(frame.picture_type, PictureType::P);
    assert_only_corner_textured(&frame);
    // 帧间 DC 为 0, 残差只有 AC 分量: 128 + 8 与 128 - 9
    assert_eq!(frame.data[0][0], 136);
    assert_eq!(frame.data[0][7], 119);
}
