/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Formatter};

/// A single RGBA pixel
///
/// The four channels are packed big endian into one `u32`
/// (`r` in the most significant byte) so comparing two pixels
/// is a single integer compare, the per channel values are views
/// into that word.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct Pixel(u32);

impl Pixel {
    /// All channels zero, what every index slot starts as
    pub const ZERO: Pixel = Pixel(0);
    /// The previous pixel before the first pixel of an image
    pub const OPAQUE_BLACK: Pixel = Pixel::new(0, 0, 0, 255);

    #[inline(always)]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Pixel {
        Pixel(u32::from_be_bytes([r, g, b, a]))
    }

    /// Create a pixel from `[r, g, b, a]`
    #[inline(always)]
    pub const fn from_bytes(bytes: [u8; 4]) -> Pixel {
        Pixel(u32::from_be_bytes(bytes))
    }

    /// Return the channels as `[r, g, b, a]`
    #[inline(always)]
    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// The packed representation
    #[inline(always)]
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    #[inline(always)]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }
    #[inline(always)]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }
    #[inline(always)]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }
    #[inline(always)]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// Replace the color channels, keeping this pixel's alpha
    #[inline(always)]
    pub const fn with_rgb(self, r: u8, g: u8, b: u8) -> Pixel {
        Pixel::new(r, g, b, self.a())
    }

    /// Add wrapping deltas to the color channels, alpha is unchanged
    #[inline(always)]
    pub const fn wrapping_add_rgb(self, dr: u8, dg: u8, db: u8) -> Pixel {
        self.with_rgb(
            self.r().wrapping_add(dr),
            self.g().wrapping_add(dg),
            self.b().wrapping_add(db)
        )
    }

    /// Position of this pixel in the 64 entry index
    ///
    /// `(r * 3 + g * 5 + b * 7 + a * 11) % 64`, changing this breaks
    /// compatibility with every other QOI implementation.
    #[inline(always)]
    pub const fn hash(self) -> usize {
        (self.r() as usize * 3 + self.g() as usize * 5 + self.b() as usize * 7 + self.a() as usize * 11)
            % 64
    }
}

impl Debug for Pixel {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Pixel(r: {}, g: {}, b: {}, a: {})",
            self.r(),
            self.g(),
            self.b(),
            self.a()
        )
    }
}
