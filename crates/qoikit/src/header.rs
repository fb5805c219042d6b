/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Header and end marker handling
//!
//! ```text
//! magic      4 bytes  "qoif"
//! width      4 bytes  big endian
//! height     4 bytes  big endian
//! channels   1 byte   3 = RGB, 4 = RGBA
//! colorspace 1 byte   0 = sRGB with linear alpha, 1 = all channels linear
//! ```
//!
//! followed by the chunks and the end marker `[0, 0, 0, 0, 0, 0, 0, 1]`

use alloc::format;

use qoikit_core::bytestream::{ZByteIoError, ZByteReader, ZByteWriterTrait, ZWriter};
use qoikit_core::colorspace::{ColorCharacteristics, ColorSpace};
use qoikit_core::log::{trace, warn};
use qoikit_core::options::DecoderOptions;

use crate::constants::{QOI_HEADER_SIZE, QOI_MAGIC, QOI_PADDING, QOI_PIXELS_MAX};
use crate::errors::QoiErrors;

/// Description of a QOI image, everything stored in its header
///
/// Passed in when encoding, filled in from the header when decoding.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct QoiDescriptor {
    width:           u32,
    height:          u32,
    colorspace:      ColorSpace,
    characteristics: ColorCharacteristics
}

impl QoiDescriptor {
    /// Create a new descriptor
    ///
    /// # Arguments
    /// - `width`, `height`: Image dimensions in pixels
    /// - `colorspace`: Pixel layout, [RGB] or [RGBA] for images that can be encoded
    /// - `characteristics`: [sRGB] or [Linear], stored as the header's colorspace flag
    ///
    /// Nothing is validated here, encoders validate before writing anything.
    ///
    /// [RGB]: ColorSpace::RGB
    /// [RGBA]: ColorSpace::RGBA
    /// [sRGB]: ColorCharacteristics::sRGB
    /// [Linear]: ColorCharacteristics::Linear
    pub const fn new(
        width: u32, height: u32, colorspace: ColorSpace, characteristics: ColorCharacteristics
    ) -> QoiDescriptor {
        QoiDescriptor {
            width,
            height,
            colorspace,
            characteristics
        }
    }

    pub const fn width(&self) -> usize {
        self.width as usize
    }

    pub const fn height(&self) -> usize {
        self.height as usize
    }

    /// Pixel layout of the image
    pub const fn colorspace(&self) -> ColorSpace {
        self.colorspace
    }

    /// Transfer characteristics of the image
    pub const fn characteristics(&self) -> ColorCharacteristics {
        self.characteristics
    }

    /// Channel count as stored in the header
    pub const fn channels(&self) -> u8 {
        self.colorspace.num_components() as u8
    }

    /// Colorspace flag as stored in the header
    pub const fn colorspace_flag(&self) -> u8 {
        match self.characteristics {
            ColorCharacteristics::sRGB => 0,
            ColorCharacteristics::Linear => 1
        }
    }

    /// Number of pixels in the image
    pub const fn num_pixels(&self) -> usize {
        self.width() * self.height()
    }

    /// Upper bound on the size of an encoded image with this description
    ///
    /// Every pixel costs at most one byte more than its channels (the RGB/RGBA tag)
    pub const fn max_encoded_size(&self) -> usize {
        self.width()
            .saturating_mul(self.height())
            .saturating_mul(self.colorspace.num_components() + 1)
            .saturating_add(QOI_HEADER_SIZE + QOI_PADDING.len())
    }

    pub(crate) fn write<T: ZByteWriterTrait>(
        &self, writer: &mut ZWriter<T>
    ) -> Result<(), ZByteIoError> {
        // qoif
        writer.write_const_bytes(&QOI_MAGIC)?;
        // width
        writer.write_u32_be_err(self.width)?;
        // height
        writer.write_u32_be_err(self.height)?;
        //channel
        writer.write_u8_err(self.channels())?;
        // colorspace
        writer.write_u8_err(self.colorspace_flag())?;

        Ok(())
    }

    /// Parse and validate a header, leaving `stream` at the first chunk
    pub(crate) fn read(
        stream: &mut ZByteReader, options: &DecoderOptions
    ) -> Result<QoiDescriptor, QoiErrors> {
        if !stream.has(QOI_HEADER_SIZE) {
            return Err(QoiErrors::InsufficientData(
                QOI_HEADER_SIZE,
                stream.remaining()
            ));
        }
        // match magic bytes.
        let magic = stream.read_fixed_bytes_or_zero::<4>();

        if magic != QOI_MAGIC {
            return Err(QoiErrors::WrongMagicBytes);
        }

        // these were confirmed to be inbounds by has so use the non failing
        // routines
        let width = stream.get_u32_be();
        let height = stream.get_u32_be();
        let channels = stream.get_u8();
        let colorspace_flag = stream.get_u8();

        if width == 0 || height == 0 {
            return Err(QoiErrors::ZeroDimensions);
        }

        if width as usize > options.max_width() {
            let msg = format!(
                "Width {} greater than max configured width {}",
                width,
                options.max_width()
            );
            return Err(QoiErrors::Generic(msg));
        }

        if height as usize > options.max_height() {
            let msg = format!(
                "Height {} greater than max configured height {}",
                height,
                options.max_height()
            );
            return Err(QoiErrors::Generic(msg));
        }

        if exceeds_pixel_limit(width as usize, height as usize) {
            return Err(QoiErrors::TooManyPixels(width as usize, height as usize));
        }

        let colorspace = match channels {
            3 => ColorSpace::RGB,
            4 => ColorSpace::RGBA,
            _ => return Err(QoiErrors::UnknownChannels(channels))
        };
        let characteristics = match colorspace_flag {
            0 => ColorCharacteristics::sRGB,
            1 => ColorCharacteristics::Linear,
            _ => {
                if options.strict_mode() {
                    return Err(QoiErrors::UnknownColorspace(colorspace_flag));
                }
                warn!("Unknown/invalid colorspace value {colorspace_flag}, expected 0 or 1");
                ColorCharacteristics::sRGB
            }
        };

        trace!("Image width: {:?}", width);
        trace!("Image height: {:?}", height);
        trace!("Image colorspace:{:?}", colorspace);
        trace!("Image characteristics:{:?}", characteristics);

        Ok(QoiDescriptor::new(width, height, colorspace, characteristics))
    }
}

/// Whether `width * height` reaches the pixel limit
///
/// Written as a division so it cannot overflow, `width` must not be zero
#[inline]
pub(crate) const fn exceeds_pixel_limit(width: usize, height: usize) -> bool {
    height >= QOI_PIXELS_MAX / width
}

pub(crate) fn write_end_marker<T: ZByteWriterTrait>(
    writer: &mut ZWriter<T>
) -> Result<(), ZByteIoError> {
    writer.write_const_bytes(&QOI_PADDING)
}

/// Confirm the end marker follows the last chunk
///
/// A missing or damaged marker is an error in strict mode and a warning otherwise
pub(crate) fn read_end_marker(stream: &mut ZByteReader, strict: bool) -> Result<(), QoiErrors> {
    match stream.read_fixed_bytes_or_error::<8>() {
        Ok(marker) if marker == QOI_PADDING => {
            if !stream.eof() {
                trace!("{} trailing bytes after end marker", stream.remaining());
            }
            Ok(())
        }
        _ => {
            if strict {
                return Err(QoiErrors::InvalidEndMarker);
            }
            warn!("Last bytes do not match QOI end marker");
            Ok(())
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for QoiDescriptor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("QoiDescriptor", 5)?;

        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("channels", &self.channels())?;
        state.serialize_field("colorspace", &self.colorspace)?;
        state.serialize_field("characteristics", &self.characteristics)?;

        state.end()
    }
}
