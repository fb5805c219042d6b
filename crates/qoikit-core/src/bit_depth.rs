/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image bit depth information

/// The image bit depth.
///
/// QOI only stores eight bit samples, other depths are kept so
/// encoders can reject them with a meaningful error.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum BitDepth {
    /// Eight bit depth.
    ///
    /// Images with such bit depth use [`u8`] to store
    /// pixels and use the whole range from 0-255.
    Eight,
    /// Sixteen bit depth
    ///
    /// Images with such bit depths use [`u16`] to store values and use the whole range
    /// i.e 0-65535
    Sixteen,
    /// Bit depth information is unknown
    Unknown
}

impl Default for BitDepth {
    fn default() -> Self {
        Self::Eight
    }
}
