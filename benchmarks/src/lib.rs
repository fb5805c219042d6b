/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::Rng;

/// Generate a `width` by `height` image with `channels` interleaved
/// 8 bit channels
///
/// Smooth gradients with flat patches and a sprinkle of noise, so all
/// chunk kinds show up when encoding.
pub fn sample_image(width: usize, height: usize, channels: usize) -> Vec<u8> {
    let mut rng = nanorand::WyRand::new_seed(0x9e37_79b9);
    let mut pixels = Vec::with_capacity(width * height * channels);

    for y in 0..height {
        for x in 0..width {
            let flat = (x / 64 + y / 64) % 3 == 0;

            let mut px = if flat {
                [40, 90, 160, 255]
            } else {
                [x as u8, (x / 2 + y) as u8, (y / 2) as u8, 255]
            };
            if rng.generate_range(0_u8..16) == 0 {
                let noise = rng.generate::<u32>().to_le_bytes();
                px[..3].copy_from_slice(&noise[..3]);
                px[3] = if noise[3] < 32 { noise[3] } else { 255 };
            }
            pixels.extend_from_slice(&px[..channels]);
        }
    }
    pixels
}
