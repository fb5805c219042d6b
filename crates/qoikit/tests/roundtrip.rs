/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::Rng;
use qoikit::qoikit_core::bit_depth::BitDepth;
use qoikit::qoikit_core::colorspace::{ColorCharacteristics, ColorSpace};
use qoikit::qoikit_core::options::{DecoderOptions, EncoderOptions};
use qoikit::{decode, encode, QoiDecoder, QoiDescriptor, QoiEncoder};

fn roundtrip(pixels: &[u8], descriptor: QoiDescriptor) -> Vec<u8> {
    let encoded = encode(pixels, &descriptor).unwrap();
    assert!(encoded.len() <= descriptor.max_encoded_size());

    let (decoded, decoded_descriptor) = decode(&encoded, None).unwrap();

    assert_eq!(decoded_descriptor, descriptor);
    assert_eq!(decoded, pixels);

    encoded
}

#[test]
fn random_rgba_images() {
    let mut rng = nanorand::WyRand::new_seed(0x5100);

    for (width, height) in [(1, 1), (3, 7), (64, 64), (333, 17)] {
        let mut pixels = vec![0_u8; width * height * 4];
        rng.fill(&mut pixels);

        let descriptor = QoiDescriptor::new(
            width as u32,
            height as u32,
            ColorSpace::RGBA,
            ColorCharacteristics::sRGB
        );
        roundtrip(&pixels, descriptor);
    }
}

#[test]
fn random_rgb_images() {
    let mut rng = nanorand::WyRand::new_seed(0x5101);

    for (width, height) in [(1, 1), (5, 5), (100, 31)] {
        let mut pixels = vec![0_u8; width * height * 3];
        rng.fill(&mut pixels);

        let descriptor = QoiDescriptor::new(
            width as u32,
            height as u32,
            ColorSpace::RGB,
            ColorCharacteristics::Linear
        );
        roundtrip(&pixels, descriptor);
    }
}

#[test]
fn small_palette_images() {
    // few distinct colors exercise runs and the index
    let mut rng = nanorand::WyRand::new_seed(0x5102);
    let palette = [
        [0, 0, 0, 255],
        [255, 255, 255, 255],
        [12, 200, 30, 128],
        [13, 201, 29, 128],
        [0, 0, 0, 0]
    ];
    let (width, height) = (128, 96);
    let mut pixels = Vec::with_capacity(width * height * 4);

    let mut current = 0;
    for _ in 0..width * height {
        // mostly keep the same color to get runs
        if rng.generate_range(0_u8..8) == 0 {
            current = rng.generate_range(0..palette.len());
        }
        pixels.extend_from_slice(&palette[current]);
    }
    let descriptor = QoiDescriptor::new(
        width as u32,
        height as u32,
        ColorSpace::RGBA,
        ColorCharacteristics::sRGB
    );
    let encoded = roundtrip(&pixels, descriptor);
    // 4 bytes a pixel raw, the codec should do far better on this
    assert!(encoded.len() < pixels.len() / 4);
}

#[test]
fn gradients() {
    let (width, height) = (256, 64);
    let mut pixels = Vec::with_capacity(width * height * 3);

    for y in 0..height {
        for x in 0..width {
            pixels.extend_from_slice(&[x as u8, (x + y) as u8, (y * 4) as u8]);
        }
    }
    let descriptor = QoiDescriptor::new(
        width as u32,
        height as u32,
        ColorSpace::RGB,
        ColorCharacteristics::sRGB
    );
    let encoded = roundtrip(&pixels, descriptor);
    // neighbours differ by one, most pixels become diff chunks
    assert!(encoded.len() < pixels.len() / 2);
}

#[test]
fn colliding_colors_evict_each_other() {
    // (1, 0, 0, 0) and (65, 0, 0, 0) both land in index slot 3
    let a = [1, 0, 0, 0];
    let b = [65, 0, 0, 0];
    let pixels: Vec<u8> = [a, b, a, b, a, a, b].concat();

    let descriptor = QoiDescriptor::new(7, 1, ColorSpace::RGBA, ColorCharacteristics::sRGB);
    roundtrip(&pixels, descriptor);
}

#[test]
fn long_runs() {
    for width in [61, 62, 63, 124, 125, 1000] {
        let pixels = vec![200_u8; width * 4];
        let descriptor =
            QoiDescriptor::new(width as u32, 1, ColorSpace::RGBA, ColorCharacteristics::sRGB);
        let encoded = roundtrip(&pixels, descriptor);

        // one rgba chunk followed by ceil((width - 1) / 62) run chunks
        let runs = (width - 1 + 61) / 62;
        assert_eq!(encoded.len(), 14 + 5 + runs + 8);
    }
}

#[test]
fn rgb_decoded_as_rgba_is_opaque() {
    let mut rng = nanorand::WyRand::new_seed(0x5103);
    let (width, height) = (40, 40);

    let mut pixels = vec![0_u8; width * height * 3];
    rng.fill(&mut pixels);

    let descriptor = QoiDescriptor::new(
        width as u32,
        height as u32,
        ColorSpace::RGB,
        ColorCharacteristics::sRGB
    );
    let encoded = encode(&pixels, &descriptor).unwrap();

    let (rgba, _) = decode(&encoded, Some(ColorSpace::RGBA)).unwrap();
    assert_eq!(rgba.len(), width * height * 4);

    for (rgb, rgba) in pixels.chunks_exact(3).zip(rgba.chunks_exact(4)) {
        assert_eq!(rgb, &rgba[..3]);
        assert_eq!(rgba[3], 255);
    }
}

#[test]
fn streaming_api_matches_free_functions() {
    let mut rng = nanorand::WyRand::new_seed(0x5104);
    let (width, height) = (17, 9);

    let mut pixels = vec![0_u8; width * height * 4];
    rng.fill(&mut pixels);

    let mut encoder = QoiEncoder::new(
        &pixels,
        EncoderOptions::new(width, height, ColorSpace::RGBA, BitDepth::Eight)
    );
    encoder.set_color_characteristics(ColorCharacteristics::Linear);

    // encode into a fixed buffer sized for the worst case
    let mut storage = vec![0_u8; encoder.max_size()];
    let written = encoder.encode(storage.as_mut_slice()).unwrap();
    let encoded = &storage[..written];

    let descriptor = QoiDescriptor::new(
        width as u32,
        height as u32,
        ColorSpace::RGBA,
        ColorCharacteristics::Linear
    );
    assert_eq!(encoded, encode(&pixels, &descriptor).unwrap());

    let mut decoder = QoiDecoder::new_with_options(encoded, DecoderOptions::default());
    let header = decoder.decode_headers().unwrap();

    assert_eq!(header, descriptor);
    assert_eq!(decoder.dimensions(), Some((width, height)));
    assert_eq!(decoder.output_colorspace(), Some(ColorSpace::RGBA));
    assert_eq!(decoder.decode().unwrap(), pixels);
}

#[test]
fn pixel_repeating_after_64_others() {
    let first = [90, 91, 92, 255];
    let mut pixels = first.to_vec();

    for i in 0..64_u8 {
        pixels.extend_from_slice(&[i, i.wrapping_mul(7), 255 - i, 255]);
    }
    pixels.extend_from_slice(&first);

    let descriptor = QoiDescriptor::new(66, 1, ColorSpace::RGBA, ColorCharacteristics::sRGB);
    roundtrip(&pixels, descriptor);
}

#[test]
fn single_pixel_images() {
    for colorspace in [ColorSpace::RGB, ColorSpace::RGBA] {
        for pixel in [[0, 0, 0, 255], [0, 0, 0, 0], [255, 1, 128, 7]] {
            let pixels = &pixel[..colorspace.num_components()];
            let descriptor = QoiDescriptor::new(1, 1, colorspace, ColorCharacteristics::sRGB);
            roundtrip(pixels, descriptor);
        }
    }
}
