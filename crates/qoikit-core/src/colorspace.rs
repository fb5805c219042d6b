/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image Colorspace information

/// Pixel layouts an image buffer may be in.
///
/// Only [`RGB`](ColorSpace::RGB) and [`RGBA`](ColorSpace::RGBA) can be
/// stored in a QOI stream, the rest exist so callers can describe
/// what they have and get a proper error back.
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ColorSpace {
    /// Red, Green , Blue
    RGB,
    /// Red, Green, Blue, Alpha
    RGBA,
    /// Grayscale colorspace
    Luma,
    /// Grayscale with alpha colorspace
    LumaA,
    /// The colorspace is unknown
    Unknown
}

impl ColorSpace {
    /// Number of color channels present for a certain colorspace
    ///
    /// E.g. RGB returns 3 since it contains R,G and B colors to make up a pixel
    pub const fn num_components(&self) -> usize {
        match self {
            Self::RGB => 3,
            Self::RGBA => 4,
            Self::Luma => 1,
            Self::LumaA => 2,
            Self::Unknown => 0
        }
    }

    pub const fn has_alpha(&self) -> bool {
        matches!(self, Self::RGBA | Self::LumaA)
    }

    /// Map an interleaved channel count back to its colour layout
    ///
    /// Returns `None` for counts no layout here uses.
    ///
    /// ```
    /// use qoikit_core::colorspace::ColorSpace;
    /// assert_eq!(ColorSpace::from_components(4), Some(ColorSpace::RGBA));
    /// assert_eq!(ColorSpace::from_components(7), None);
    /// ```
    pub const fn from_components(components: usize) -> Option<ColorSpace> {
        match components {
            1 => Some(Self::Luma),
            2 => Some(Self::LumaA),
            3 => Some(Self::RGB),
            4 => Some(Self::RGBA),
            _ => None
        }
    }
}

/// Color characteristics
///
/// Gives more information about values in a certain
/// colorspace
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ColorCharacteristics {
    /// sRGB Transfer function, alpha is linear
    sRGB,
    /// Linear transfer function for all channels
    Linear
}
