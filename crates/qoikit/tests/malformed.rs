/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::Rng;
use qoikit::qoikit_core::colorspace::{ColorCharacteristics, ColorSpace};
use qoikit::qoikit_core::options::DecoderOptions;
use qoikit::{decode, encode, QoiDecoder, QoiDescriptor, QoiErrors};

fn sample_image() -> Vec<u8> {
    let mut pixels = vec![0_u8; 32 * 32 * 4];
    nanorand::WyRand::new_seed(0x6100).fill(&mut pixels);

    let descriptor = QoiDescriptor::new(32, 32, ColorSpace::RGBA, ColorCharacteristics::sRGB);
    encode(&pixels, &descriptor).unwrap()
}

#[test]
fn not_a_qoi_file() {
    let png_magic = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
    let err = decode(png_magic, None).unwrap_err();

    assert!(matches!(err, QoiErrors::WrongMagicBytes));
    assert!(err.is_format_error());
}

#[test]
fn empty_and_short_input() {
    assert!(matches!(
        decode(&[], None),
        Err(QoiErrors::InsufficientData(14, 0))
    ));
    assert!(matches!(
        decode(b"qoif\0\0", None),
        Err(QoiErrors::InsufficientData(14, 6))
    ));
}

#[test]
fn truncated_random_image() {
    let encoded = sample_image();

    // random pixels are rarely runs, cutting half leaves the decoder starving
    let cut = &encoded[..encoded.len() / 2];
    let err = decode(cut, None).unwrap_err();

    match err {
        QoiErrors::TruncatedStream(expected, decoded) => {
            assert_eq!(expected, 32 * 32);
            assert!(decoded < expected);
        }
        err => panic!("Expected a truncated stream, got {err:?}")
    }
    assert!(QoiDecoder::new_with_options(cut, DecoderOptions::new_cmd())
        .decode()
        .is_err());
}

#[test]
fn end_marker() {
    let mut encoded = sample_image();
    let len = encoded.len();
    encoded[len - 3] = 7;

    assert!(matches!(
        decode(&encoded, None),
        Err(QoiErrors::InvalidEndMarker)
    ));
    let lenient = QoiDecoder::new_with_options(&encoded, DecoderOptions::new_cmd())
        .decode()
        .unwrap();
    assert_eq!(lenient.len(), 32 * 32 * 4);

    // trailing data after a good marker is fine
    let mut padded = sample_image();
    padded.extend_from_slice(b"trailing");
    assert!(decode(&padded, None).is_ok());
}

#[test]
fn header_fields() {
    let mut encoded = sample_image();

    encoded[12] = 5;
    assert!(matches!(
        decode(&encoded, None),
        Err(QoiErrors::UnknownChannels(5))
    ));

    encoded[12] = 4;
    encoded[13] = 9;
    assert!(matches!(
        decode(&encoded, None),
        Err(QoiErrors::UnknownColorspace(9))
    ));
    let mut decoder = QoiDecoder::new_with_options(&encoded, DecoderOptions::new_cmd());
    let descriptor = decoder.decode_headers().unwrap();
    assert_eq!(descriptor.characteristics(), ColorCharacteristics::sRGB);

    // 20_000 x 20_000 is at the pixel limit
    encoded[13] = 0;
    encoded[4..8].copy_from_slice(&20_000_u32.to_be_bytes());
    encoded[8..12].copy_from_slice(&20_000_u32.to_be_bytes());
    assert!(matches!(
        decode(&encoded, None),
        Err(QoiErrors::TooManyPixels(20_000, 20_000))
    ));

    let options = DecoderOptions::default().set_max_width(1000);
    let err = QoiDecoder::new_with_options(&encoded, options)
        .decode()
        .unwrap_err();
    assert!(matches!(err, QoiErrors::Generic(_)));
    assert!(!err.is_format_error());
}

#[test]
fn random_bytes_do_not_panic() {
    let mut rng = nanorand::WyRand::new_seed(0x6101);

    for _ in 0..200 {
        let len = rng.generate_range(0_usize..600);
        let mut data = vec![0_u8; len];
        rng.fill(&mut data);

        if len >= 14 {
            // valid header for a small image so chunk decoding runs
            data[..4].copy_from_slice(b"qoif");
            data[4..12].copy_from_slice(&[0, 0, 0, 16, 0, 0, 0, 16]);
            data[12] = 3 + (data[12] & 1);
            data[13] &= 1;
        }
        let _ = decode(&data, None);
        let _ = QoiDecoder::new_with_options(&data, DecoderOptions::new_cmd()).decode();
    }
}

#[test]
fn huge_header_with_empty_body() {
    // 19999 x 19999 RGBA, stays under the pixel limit but has no chunks
    let mut data = b"qoif".to_vec();
    data.extend_from_slice(&19_999_u32.to_be_bytes());
    data.extend_from_slice(&19_999_u32.to_be_bytes());
    data.extend_from_slice(&[4, 0]);
    data.extend_from_slice(&[0, 0, 0, 0, 0, 0, 0, 1]);

    assert!(matches!(
        decode(&data, None),
        Err(QoiErrors::TruncatedStream(399_960_001, 0))
    ));

    let mut decoder = QoiDecoder::new_with_options(&data, DecoderOptions::new_cmd());
    assert!(decoder.decode().is_err());

    // a body one byte short of the densest possible encoding
    let pixels = 62 * 100;
    let mut data = b"qoif".to_vec();
    data.extend_from_slice(&(pixels as u32).to_be_bytes());
    data.extend_from_slice(&1_u32.to_be_bytes());
    data.extend_from_slice(&[3, 0]);
    data.extend_from_slice(&[0xc0 | 61; 99]);

    assert!(matches!(
        decode(&data, None),
        Err(QoiErrors::TruncatedStream(6200, 0))
    ));
    // with the last run chunk it decodes
    data.push(0xc0 | 61);
    data.extend_from_slice(&[0, 0, 0, 0, 0, 0, 0, 1]);
    let (decoded, _) = decode(&data, None).unwrap();
    assert_eq!(decoded.len(), pixels * 3);
}
