/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

pub const QOI_OP_INDEX: u8 = 0x00;
// 00xxxxxx
pub const QOI_OP_DIFF: u8 = 0x40;
// 01xxxxxx
pub const QOI_OP_LUMA: u8 = 0x80;
// 10xxxxxx
pub const QOI_OP_RUN: u8 = 0xc0;
// 11xxxxxx
pub const QOI_OP_RGB: u8 = 0xfe;
// 11111110
pub const QOI_OP_RGBA: u8 = 0xff; // 11111111

pub const QOI_MASK_2: u8 = 0xc0; // (11)000000

pub const QOI_MAGIC: [u8; 4] = *b"qoif";
pub const QOI_HEADER_SIZE: usize = 14;
pub const QOI_PADDING: [u8; 8] = [0, 0, 0, 0, 0, 0, 0, 1];

/// Worst case is 5 bytes a pixel, 400 million pixels keeps
/// an encoded image under 2GB.
pub const QOI_PIXELS_MAX: usize = 400_000_000;

/// Longest run a single run chunk can carry, 63 and 64 would
/// collide with the RGB and RGBA tags
pub const QOI_MAX_RUN: u8 = 62;

/// An encoder must not emit more consecutive index chunks pointing
/// at slot zero than this, the next one would start to look like the
/// end marker
pub const QOI_MAX_ZERO_INDEX_RUN: usize = 6;
