/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::string::String;
/// Errors possible during decoding.
use core::fmt::{Debug, Display, Formatter};

use qoikit_core::bit_depth::BitDepth;
use qoikit_core::bytestream::ZByteIoError;
use qoikit_core::colorspace::ColorSpace;

/// Possible Errors that may occur during decoding
pub enum QoiErrors {
    /// The image does not start with QOI magic bytes `qoif`
    ///
    /// Indicates that image is not a qoi file
    WrongMagicBytes,
    /// The input buffer is too short to hold a header
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes we expected
    /// - 2nd argument is number of bytes actually left
    InsufficientData(usize, usize),
    /// The stream ended before every pixel was decoded
    ///
    /// # Arguments
    /// - 1st argument is the number of pixels the header promised
    /// - 2nd argument is the number of pixels decoded before the data ran out
    TruncatedStream(usize, usize),
    /// The header contains an invalid channel number
    ///
    /// The only supported types are `3` and `4`
    UnknownChannels(u8),
    /// The header contains an invalid colorspace value
    ///
    /// The should be `0` or `1`
    /// but this can be ignored if strict is set to false
    UnknownColorspace(u8),
    /// The header has a zero width or height
    ZeroDimensions,
    /// Width times height goes over the 400 million pixel limit
    ///
    /// Arguments are width and height
    TooManyPixels(usize, usize),
    /// The 8 bytes after the last pixel are not the QOI end marker
    InvalidEndMarker,
    /// Pixels were requested in a layout QOI cannot produce
    UnsupportedOutputColorspace(ColorSpace),
    /// To small output size
    ///
    /// Arguments are the expected and the found size
    TooSmallOutput(usize, usize),
    /// Generic message
    Generic(String),
    /// Generic message does not need heap allocation
    GenericStatic(&'static str),
    IoErrors(ZByteIoError)
}

impl QoiErrors {
    /// Whether this error comes from malformed or foreign data as opposed
    /// to the decoder being asked for something it cannot do
    pub const fn is_format_error(&self) -> bool {
        matches!(
            self,
            QoiErrors::WrongMagicBytes
                | QoiErrors::InsufficientData(..)
                | QoiErrors::TruncatedStream(..)
                | QoiErrors::UnknownChannels(_)
                | QoiErrors::UnknownColorspace(_)
                | QoiErrors::ZeroDimensions
                | QoiErrors::TooManyPixels(..)
                | QoiErrors::InvalidEndMarker
        )
    }
}

impl Debug for QoiErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            QoiErrors::WrongMagicBytes => {
                writeln!(f, "Wrong magic bytes, expected `qoif` as image start")
            }
            QoiErrors::InsufficientData(expected, found) => {
                writeln!(
                    f,
                    "Insufficient data required {expected} but remaining stream has {found}"
                )
            }
            QoiErrors::TruncatedStream(expected, found) => {
                writeln!(
                    f,
                    "Truncated stream, expected {expected} pixels but data ran out after {found}"
                )
            }
            QoiErrors::UnknownChannels(channel) => {
                writeln!(
                    f,
                    "Unknown channel number {channel}, expected either 3 or 4"
                )
            }
            QoiErrors::UnknownColorspace(colorspace) => {
                writeln!(
                    f,
                    "Unknown colorspace number {colorspace}, expected either 0 or 1"
                )
            }
            QoiErrors::ZeroDimensions => {
                writeln!(f, "Image width and height must be greater than zero")
            }
            QoiErrors::TooManyPixels(width, height) => {
                writeln!(
                    f,
                    "Image dimensions {width}x{height} exceed the QOI pixel limit"
                )
            }
            QoiErrors::InvalidEndMarker => {
                writeln!(f, "Last bytes do not match QOI end marker")
            }
            QoiErrors::UnsupportedOutputColorspace(colorspace) => {
                writeln!(
                    f,
                    "Cannot decode QOI into {colorspace:?}, only RGB and RGBA are supported"
                )
            }
            QoiErrors::TooSmallOutput(expected, found) => {
                writeln!(
                    f,
                    "Too small output size, expected {expected}, but found {found}"
                )
            }
            QoiErrors::Generic(val) => {
                writeln!(f, "{val}")
            }
            QoiErrors::GenericStatic(val) => {
                writeln!(f, "{val}")
            }
            QoiErrors::IoErrors(value) => {
                writeln!(f, "I/O error {:?}", value)
            }
        }
    }
}

impl From<&'static str> for QoiErrors {
    fn from(r: &'static str) -> Self {
        Self::GenericStatic(r)
    }
}

impl From<ZByteIoError> for QoiErrors {
    fn from(value: ZByteIoError) -> Self {
        QoiErrors::IoErrors(value)
    }
}
/// Errors encountered during encoding
pub enum QoiEncodeErrors {
    /// No pixels were given
    EmptyInput,
    /// Width or height is zero
    ZeroDimensions,
    /// Unsupported colorspace
    ///
    /// The first argument is the colorspace encountered
    /// The second argument is list of supported colorspaces
    UnsupportedColorspace(ColorSpace, &'static [ColorSpace]),
    /// QOI only stores eight bit samples
    UnsupportedBitDepth(BitDepth),
    /// Width times height goes over the 400 million pixel limit
    ///
    /// Arguments are width and height
    TooManyPixels(usize, usize),
    /// Pixel buffer length does not match the dimensions
    ///
    /// Arguments are the expected and the found length
    LengthMismatch(usize, usize),

    Generic(&'static str),

    IoError(ZByteIoError)
}

impl Debug for QoiEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            QoiEncodeErrors::EmptyInput => {
                writeln!(f, "No pixels to encode")
            }
            QoiEncodeErrors::ZeroDimensions => {
                writeln!(f, "Image width and height must be greater than zero")
            }
            QoiEncodeErrors::UnsupportedColorspace(found, supported) => {
                writeln!(f, "Cannot encode image with colorspace {found:?} into QOI, supported ones are {supported:?}")
            }
            QoiEncodeErrors::UnsupportedBitDepth(depth) => {
                writeln!(
                    f,
                    "Cannot encode {depth:?} images into QOI, only 8 bit images are supported"
                )
            }
            QoiEncodeErrors::TooManyPixels(width, height) => {
                writeln!(
                    f,
                    "Image dimensions {width}x{height} exceed the QOI pixel limit"
                )
            }
            QoiEncodeErrors::LengthMismatch(expected, found) => {
                writeln!(
                    f,
                    "Expected {expected} bytes of pixels, but found {found}"
                )
            }
            QoiEncodeErrors::Generic(val) => {
                writeln!(f, "{}", val)
            }
            QoiEncodeErrors::IoError(v) => {
                writeln!(f, "I/O error {:?}", v)
            }
        }
    }
}

impl Display for QoiEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}
impl Display for QoiErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for QoiEncodeErrors {}

#[cfg(feature = "std")]
impl std::error::Error for QoiErrors {}

impl From<ZByteIoError> for QoiEncodeErrors {
    fn from(value: ZByteIoError) -> Self {
        Self::IoError(value)
    }
}
