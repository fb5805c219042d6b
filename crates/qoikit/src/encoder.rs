/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;

use qoikit_core::bit_depth::BitDepth;
use qoikit_core::bytestream::{ZByteWriterTrait, ZWriter};
use qoikit_core::colorspace::{ColorCharacteristics, ColorSpace};
use qoikit_core::log::trace;
use qoikit_core::options::EncoderOptions;

use crate::constants::{
    QOI_HEADER_SIZE, QOI_MAX_RUN, QOI_MAX_ZERO_INDEX_RUN, QOI_OP_DIFF, QOI_OP_INDEX, QOI_OP_LUMA,
    QOI_OP_RGB, QOI_OP_RGBA, QOI_OP_RUN, QOI_PADDING
};
use crate::header::{exceeds_pixel_limit, write_end_marker, QoiDescriptor};
use crate::index::IndexCache;
use crate::{Pixel, QoiEncodeErrors};

const SUPPORTED_COLORSPACES: [ColorSpace; 2] = [ColorSpace::RGB, ColorSpace::RGBA];
/// Quite Ok Image Encoder
///
///
/// # Example
/// - Encode a 100 by 100 RGB image
///
/// ```
/// use qoikit::qoikit_core::bit_depth::BitDepth;
/// use qoikit::qoikit_core::colorspace::ColorSpace;
/// use qoikit::qoikit_core::options::EncoderOptions;
/// use qoikit::QoiEncoder;
/// use qoikit::QoiEncodeErrors;
///
/// const W:usize=100;
/// const H:usize=100;
///
/// fn main()->Result<(), QoiEncodeErrors>{
///     let pixels = std::array::from_fn::<u8,{W * H * 3},_>(|i| (i%256) as u8);
///     let encoder = QoiEncoder::new(&pixels,EncoderOptions::new(W,H,ColorSpace::RGB,BitDepth::Eight));
///     let mut sink = vec![];
///     let written = encoder.encode(&mut sink)?;
///     assert_eq!(written, sink.len());
///     Ok(())
///}
/// ```
pub struct QoiEncoder<'a> {
    // raw pixels, in RGB or RGBA
    pixel_data:            &'a [u8],
    options:               EncoderOptions,
    color_characteristics: ColorCharacteristics
}

impl<'a> QoiEncoder<'a> {
    /// Create a new encoder which will encode the pixels
    ///
    /// # Arguments
    /// - data: Pixel data, size must be equal to `width*height*colorspace channels`
    /// - options: Encoder details for data, this contains width, height and number of color components
    #[allow(clippy::redundant_field_names)]
    pub const fn new(data: &'a [u8], options: EncoderOptions) -> QoiEncoder<'a> {
        QoiEncoder {
            pixel_data:            data,
            options:               options,
            color_characteristics: ColorCharacteristics::sRGB
        }
    }
    /// Set the colorspace flag written to the header
    ///
    /// Defaults to [sRGB](ColorCharacteristics::sRGB)
    pub fn set_color_characteristics(&mut self, characteristics: ColorCharacteristics) {
        self.color_characteristics = characteristics;
    }

    /// Return the maximum size for which the encoder can safely
    /// encode the image without fearing for an out of space error
    pub fn max_size(&self) -> usize {
        self.options
            .width()
            .saturating_mul(self.options.height())
            .saturating_mul(self.options.colorspace().num_components() + 1)
            .saturating_add(QOI_HEADER_SIZE + QOI_PADDING.len())
    }

    /// Check the pixels and options can be encoded, returning
    /// what the header will contain
    fn descriptor(&self) -> Result<QoiDescriptor, QoiEncodeErrors> {
        let options = &self.options;

        if self.pixel_data.is_empty() {
            return Err(QoiEncodeErrors::EmptyInput);
        }
        if options.width() == 0 || options.height() == 0 {
            return Err(QoiEncodeErrors::ZeroDimensions);
        }
        if !SUPPORTED_COLORSPACES.contains(&options.colorspace()) {
            return Err(QoiEncodeErrors::UnsupportedColorspace(
                options.colorspace(),
                &SUPPORTED_COLORSPACES
            ));
        }
        if options.depth() != BitDepth::Eight {
            return Err(QoiEncodeErrors::UnsupportedBitDepth(options.depth()));
        }
        if exceeds_pixel_limit(options.width(), options.height()) {
            return Err(QoiEncodeErrors::TooManyPixels(
                options.width(),
                options.height()
            ));
        }
        let expected_len =
            options.width() * options.height() * options.colorspace().num_components();

        if self.pixel_data.len() != expected_len {
            return Err(QoiEncodeErrors::LengthMismatch(
                expected_len,
                self.pixel_data.len()
            ));
        }
        // it's safe to convert to u32 here, the pixel limit keeps
        // both dimensions well below u32::MAX
        Ok(QoiDescriptor::new(
            options.width() as u32,
            options.height() as u32,
            options.colorspace(),
            self.color_characteristics
        ))
    }

    /// Encode the image into `sink`
    ///
    /// Nothing is written if the pixels or options are invalid, a
    /// sink that fails midway (e.g. a too small slice) may hold a partial image.
    ///
    /// # Arguments.
    /// - sink: Where encoded bytes are written to, e.g `&mut Vec<u8>`
    ///
    /// # Returns
    /// - Ok(size): Actual bytes used for encoding
    /// - Err: The error encountered during encoding
    pub fn encode<T: ZByteWriterTrait>(&self, sink: T) -> Result<usize, QoiEncodeErrors> {
        let descriptor = self.descriptor()?;

        let mut stream = ZWriter::new(sink);
        stream.reserve(descriptor.max_encoded_size())?;

        descriptor.write(&mut stream)?;

        match descriptor.colorspace().num_components() {
            3 => self.encode_chunks::<3, T>(&mut stream)?,
            4 => self.encode_chunks::<4, T>(&mut stream)?,
            _ => unreachable!()
        }
        // write trailing bytes
        write_end_marker(&mut stream)?;
        stream.flush()?;
        // done
        let len = stream.bytes_written();

        trace!(
            "Encoded {}x{} {:?} image into {} bytes",
            descriptor.width(),
            descriptor.height(),
            descriptor.colorspace(),
            len
        );

        Ok(len)
    }

    fn encode_chunks<const SIZE: usize, T: ZByteWriterTrait>(
        &self, stream: &mut ZWriter<T>
    ) -> Result<(), QoiEncodeErrors> {
        let mut index = IndexCache::new();
        // starting pixel
        let mut px_prev = Pixel::OPAQUE_BLACK;

        let mut run = 0;
        // consecutive index chunks pointing to slot zero
        let mut zero_index_run = 0;

        for pix_chunk in self.pixel_data.chunks_exact(SIZE) {
            let px = if SIZE == 4 {
                Pixel::new(pix_chunk[0], pix_chunk[1], pix_chunk[2], pix_chunk[3])
            } else {
                px_prev.with_rgb(pix_chunk[0], pix_chunk[1], pix_chunk[2])
            };

            if px == px_prev {
                run += 1;

                if run == QOI_MAX_RUN {
                    stream.write_u8_err(QOI_OP_RUN | (run - 1))?;
                    run = 0;
                    zero_index_run = 0;
                }
            } else {
                if run > 0 {
                    stream.write_u8_err(QOI_OP_RUN | (run - 1))?;
                    run = 0;
                    zero_index_run = 0;
                }

                let index_pos = px.hash();

                if index.get(index_pos) == px && index_chunk_allowed(index_pos, zero_index_run) {
                    stream.write_u8_err(QOI_OP_INDEX | (index_pos as u8))?;

                    if index_pos == 0 {
                        zero_index_run += 1;
                    } else {
                        zero_index_run = 0;
                    }
                } else {
                    zero_index_run = 0;
                    index.insert(px);

                    write_explicit(stream, px, px_prev)?;
                }
            }

            px_prev = px;
        }
        if run > 0 {
            stream.write_u8_err(QOI_OP_RUN | (run - 1))?;
        }
        Ok(())
    }
}

/// Whether an index chunk for `index_pos` may follow `zero_index_run`
/// index chunks pointing at slot zero
///
/// Seven such chunks in a row would read as the end marker. The encoder
/// cannot currently produce two in a row since a pixel repeating its
/// slot zero neighbour becomes a run, this holds regardless.
#[inline(always)]
const fn index_chunk_allowed(index_pos: usize, zero_index_run: usize) -> bool {
    index_pos != 0 || zero_index_run < QOI_MAX_ZERO_INDEX_RUN
}

/// Emit a pixel that is neither a run nor in the index, picking
/// the smallest of diff, luma, rgb and rgba
#[inline(always)]
fn write_explicit<T: ZByteWriterTrait>(
    stream: &mut ZWriter<T>, px: Pixel, px_prev: Pixel
) -> Result<(), QoiEncodeErrors> {
    if px.a() != px_prev.a() {
        stream.write_const_bytes(&[QOI_OP_RGBA, px.r(), px.g(), px.b(), px.a()])?;
        return Ok(());
    }
    let vr = px.r().wrapping_sub(px_prev.r()) as i8;
    let vg = px.g().wrapping_sub(px_prev.g()) as i8;
    let vb = px.b().wrapping_sub(px_prev.b()) as i8;

    let vg_r = vr.wrapping_sub(vg);
    let vg_b = vb.wrapping_sub(vg);

    if (-2..=1).contains(&vr) && (-2..=1).contains(&vg) && (-2..=1).contains(&vb) {
        stream.write_u8_err(
            QOI_OP_DIFF | ((vr + 2) as u8) << 4 | ((vg + 2) as u8) << 2 | ((vb + 2) as u8)
        )?;
    } else if (-8..=7).contains(&vg_r) && (-32..=31).contains(&vg) && (-8..=7).contains(&vg_b) {
        stream.write_const_bytes(&[
            QOI_OP_LUMA | ((vg + 32) as u8),
            ((vg_r + 8) as u8) << 4 | ((vg_b + 8) as u8)
        ])?;
    } else {
        stream.write_const_bytes(&[QOI_OP_RGB, px.r(), px.g(), px.b()])?;
    }
    Ok(())
}

/// Encode interleaved pixels described by `descriptor` into a new buffer
///
/// The number of encoded bytes is the length of the returned vector.
///
/// # Example
/// ```
/// use qoikit::qoikit_core::colorspace::{ColorCharacteristics, ColorSpace};
/// use qoikit::{encode, QoiDescriptor};
///
/// let descriptor = QoiDescriptor::new(1, 1, ColorSpace::RGB, ColorCharacteristics::sRGB);
/// let encoded = encode(&[255, 0, 0], &descriptor).unwrap();
/// // header, one RGB chunk and the end marker
/// assert_eq!(encoded.len(), 14 + 4 + 8);
/// ```
pub fn encode(pixels: &[u8], descriptor: &QoiDescriptor) -> Result<Vec<u8>, QoiEncodeErrors> {
    let options = EncoderOptions::new(
        descriptor.width(),
        descriptor.height(),
        descriptor.colorspace(),
        BitDepth::Eight
    );
    let mut encoder = QoiEncoder::new(pixels, options);
    encoder.set_color_characteristics(descriptor.characteristics());

    let mut output = Vec::new();
    encoder.encode(&mut output)?;

    Ok(output)
}
