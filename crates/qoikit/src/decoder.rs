/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec;
use alloc::vec::Vec;

use qoikit_core::bit_depth::BitDepth;
use qoikit_core::bytestream::{ZByteIoError, ZByteReader};
use qoikit_core::colorspace::ColorSpace;
use qoikit_core::log::trace;
use qoikit_core::options::DecoderOptions;

use crate::constants::{
    QOI_MASK_2, QOI_MAX_RUN, QOI_OP_DIFF, QOI_OP_INDEX, QOI_OP_LUMA, QOI_OP_RGB, QOI_OP_RGBA,
    QOI_OP_RUN
};
use crate::errors::QoiErrors;
use crate::header::{read_end_marker, QoiDescriptor};
use crate::index::IndexCache;
use crate::Pixel;

/// A Quite OK Image decoder
///
/// The decoder is initialized by calling `new`
/// and either of [`decode_headers`] to decode headers
/// or [`decode`] to return uncompressed pixels
///
/// Additional methods are provided that give more
/// details of the compressed image like width and height
/// are accessible after decoding headers
///
/// [`decode_headers`]:QoiDecoder::decode_headers
/// [`decode`]:QoiDecoder::decode
pub struct QoiDecoder<'a> {
    descriptor: Option<QoiDescriptor>,
    stream:     ZByteReader<'a>,
    options:    DecoderOptions
}

impl<'a> QoiDecoder<'a> {
    /// Create a new QOI format decoder with the default options
    ///
    /// # Arguments
    /// - `data`: The compressed qoi data
    ///
    /// # Returns
    /// - A decoder instance which will on calling `decode` will decode
    /// data
    /// # Example
    ///
    /// ```no_run
    /// let mut decoder = qoikit::QoiDecoder::new(&[]);
    /// // additional code
    /// ```
    pub fn new(data: &'a [u8]) -> QoiDecoder<'a> {
        QoiDecoder::new_with_options(data, DecoderOptions::default())
    }
    /// Create a new QOI format decoder that obeys specified restrictions
    ///
    /// E.g can be used to set width and height limits to prevent OOM attacks
    ///
    /// # Arguments
    /// - `data`: The compressed qoi data
    /// - `options`: Decoder options that the decoder should respect
    ///
    /// # Example
    /// ```
    /// use qoikit::qoikit_core::options::DecoderOptions;
    /// use qoikit::QoiDecoder;
    /// // only decode images less than 10 in both width and height
    ///
    /// let options = DecoderOptions::default().set_max_width(10).set_max_height(10);
    ///
    /// let mut decoder = QoiDecoder::new_with_options(&[], options);
    /// ```
    #[allow(clippy::redundant_field_names)]
    pub fn new_with_options(data: &'a [u8], options: DecoderOptions) -> QoiDecoder<'a> {
        QoiDecoder {
            descriptor: None,
            stream:     ZByteReader::new(data),
            options:    options
        }
    }
    /// Decode a QOI header storing needed information into
    /// the decoder instance
    ///
    /// Calling this more than once returns the stored header
    ///
    /// # Returns
    ///
    /// - On success: What the header describes
    /// - On error: The error encountered when decoding headers
    ///     error type will be an instance of [QoiErrors]
    ///
    /// [QoiErrors]:crate::errors::QoiErrors
    pub fn decode_headers(&mut self) -> Result<QoiDescriptor, QoiErrors> {
        if let Some(descriptor) = self.descriptor {
            return Ok(descriptor);
        }
        if let Some(out) = self.options.out_colorspace() {
            if !matches!(out, ColorSpace::RGB | ColorSpace::RGBA) {
                return Err(QoiErrors::UnsupportedOutputColorspace(out));
            }
        }
        let descriptor = QoiDescriptor::read(&mut self.stream, &self.options)?;

        self.descriptor = Some(descriptor);

        Ok(descriptor)
    }

    /// Return the header contents, or `None` if headers haven't been decoded
    pub const fn descriptor(&self) -> Option<QoiDescriptor> {
        self.descriptor
    }

    /// Return the number of bytes required to hold a decoded image frame
    /// decoded using the given input transformations
    ///
    /// # Returns
    ///  - `Some(usize)`: Minimum size for a buffer needed to decode the image
    ///  - `None`: Indicates the image was not decoded.
    pub fn output_buffer_size(&self) -> Option<usize> {
        let descriptor = self.descriptor?;
        let colorspace = self.output_colorspace()?;

        // the pixel limit keeps this from overflowing
        Some(descriptor.num_pixels() * colorspace.num_components())
    }

    /// Decode the bytes of a QOI image data, returning the
    /// uncompressed bytes or  the error encountered during decoding
    ///
    /// Additional details about the encoded image can be found after calling this/[`decode_headers`]
    ///
    /// i.e the width and height. can be accessed by [`dimensions`] method.
    ///
    /// # Returns
    /// - On success: The decoded bytes, laid out as [`output_colorspace`]
    /// - On error: An instance of [QoiErrors] which gives a reason why the image could not
    /// be decoded
    ///
    /// [`decode_headers`]:Self::decode_headers
    /// [`dimensions`]:Self::dimensions
    /// [`output_colorspace`]:Self::output_colorspace
    /// [QoiErrors]:crate::errors::QoiErrors
    pub fn decode(&mut self) -> Result<Vec<u8>, QoiErrors> {
        let descriptor = self.decode_headers()?;
        // before allocating, the header may promise far more than the body holds
        self.check_body_length(&descriptor)?;

        let size = self
            .output_buffer_size()
            .ok_or(QoiErrors::GenericStatic("Headers not decoded"))?;

        let mut output = vec![0; size];

        self.decode_into(&mut output)?;

        Ok(output)
    }

    /// Decode a compressed Qoi image and store the contents
    /// into the output buffer
    ///
    /// Returns an error if the buffer cannot hold the contents
    /// of the buffer, bytes past the image are left untouched
    ///
    /// # Arguments
    ///
    /// * `pixels`: Output buffer for which we will write decoded
    /// pixels
    ///
    /// returns: Result<(), QoiErrors>
    pub fn decode_into(&mut self, pixels: &mut [u8]) -> Result<(), QoiErrors> {
        let descriptor = self.decode_headers()?;

        let out_colorspace = self
            .output_colorspace()
            .ok_or(QoiErrors::GenericStatic("Headers not decoded"))?;

        let size = descriptor.num_pixels() * out_colorspace.num_components();

        if pixels.len() < size {
            return Err(QoiErrors::TooSmallOutput(size, pixels.len()));
        }
        self.check_body_length(&descriptor)?;

        match out_colorspace.num_components() {
            3 => self.decode_inner_generic::<3>(&mut pixels[..size])?,
            4 => self.decode_inner_generic::<4>(&mut pixels[..size])?,
            _ => unreachable!()
        }
        read_end_marker(&mut self.stream, self.options.strict_mode())?;

        trace!("Finished decoding image");

        Ok(())
    }

    /// Reject streams too short to hold every pixel the header promises
    ///
    /// Each chunk is at least one byte and covers at most 62 pixels
    fn check_body_length(&self, descriptor: &QoiDescriptor) -> Result<(), QoiErrors> {
        let expected = descriptor.num_pixels();
        let min_bytes = expected.div_ceil(usize::from(QOI_MAX_RUN));

        if self.stream.remaining() < min_bytes {
            return Err(QoiErrors::TruncatedStream(expected, 0));
        }
        Ok(())
    }

    fn decode_inner_generic<const SIZE: usize>(
        &mut self, pixels: &mut [u8]
    ) -> Result<(), QoiErrors> {
        let expected = pixels.len() / SIZE;
        let stream = &mut self.stream;

        let mut index = IndexCache::new();
        // starting pixel
        let mut px = Pixel::OPAQUE_BLACK;

        let mut run = 0;

        for (pos, pix_chunk) in pixels.chunks_exact_mut(SIZE).enumerate() {
            if run > 0 {
                run -= 1;
                pix_chunk.copy_from_slice(&px.to_bytes()[..SIZE]);
                continue;
            }
            let truncated = |_: ZByteIoError| QoiErrors::TruncatedStream(expected, pos);

            let chunk = stream.get_u8_err().map_err(truncated)?;

            if chunk == QOI_OP_RGB {
                let [r, g, b] = stream.read_fixed_bytes_or_error::<3>().map_err(truncated)?;
                px = px.with_rgb(r, g, b);
                index.insert(px);
            } else if chunk == QOI_OP_RGBA {
                let packed_bytes = stream.read_fixed_bytes_or_error::<4>().map_err(truncated)?;
                px = Pixel::from_bytes(packed_bytes);
                index.insert(px);
            } else if (chunk & QOI_MASK_2) == QOI_OP_INDEX {
                px = index.get(usize::from(chunk));
            } else if (chunk & QOI_MASK_2) == QOI_OP_DIFF {
                px = px.wrapping_add_rgb(
                    ((chunk >> 4) & 0x03).wrapping_sub(2),
                    ((chunk >> 2) & 0x03).wrapping_sub(2),
                    (chunk & 0x03).wrapping_sub(2)
                );
                index.insert(px);
            } else if (chunk & QOI_MASK_2) == QOI_OP_LUMA {
                let b2 = stream.get_u8_err().map_err(truncated)?;
                let vg = (chunk & 0x3f).wrapping_sub(32);

                px = px.wrapping_add_rgb(
                    vg.wrapping_sub(8).wrapping_add(b2 >> 4),
                    vg,
                    vg.wrapping_sub(8).wrapping_add(b2 & 0x0f)
                );
                index.insert(px);
            } else if (chunk & QOI_MASK_2) == QOI_OP_RUN {
                // this pixel plus `run` more copies of it
                run = usize::from(chunk & 0x3f);
                index.insert(px);
            }

            pix_chunk.copy_from_slice(&px.to_bytes()[..SIZE]);
        }
        if run > 0 {
            trace!("Run of {} pixels goes past the end of the image", run);
        }
        Ok(())
    }

    /// Returns QOI colorspace or none if the headers haven't been
    /// decoded
    ///
    /// This is what the header stores, see [`output_colorspace`](Self::output_colorspace)
    /// for the layout of decoded pixels
    ///
    /// # Returns
    /// - `Some(Colorspace)`: The colorspace present
    /// -  `None` : This indicates the image header wasn't decoded hence
    ///   colorspace is unknown
    pub fn colorspace(&self) -> Option<ColorSpace> {
        self.descriptor.map(|d| d.colorspace())
    }

    /// Returns the layout pixels are decoded into
    ///
    /// This is the colorspace set in [`DecoderOptions`] if any, otherwise
    /// the one stored in the header
    pub fn output_colorspace(&self) -> Option<ColorSpace> {
        let descriptor = self.descriptor?;

        Some(
            self.options
                .out_colorspace()
                .unwrap_or(descriptor.colorspace())
        )
    }
    /// Return QOI default bit depth
    ///
    /// This is always 8
    ///
    /// # Example
    ///
    /// ```
    /// use qoikit::qoikit_core::bit_depth::BitDepth;
    /// use qoikit::QoiDecoder;
    /// let decoder = QoiDecoder::new(&[]);
    /// assert_eq!(decoder.bit_depth(),BitDepth::Eight)
    /// ```
    pub const fn bit_depth(&self) -> BitDepth {
        BitDepth::Eight
    }

    /// Return the width and height of the image
    ///
    /// Or none if the headers haven't been decoded
    ///
    /// # Example
    ///
    /// ```no_run
    /// use qoikit::QoiDecoder;
    /// let mut decoder = QoiDecoder::new(&[]);
    ///
    /// decoder.decode_headers().unwrap();
    /// // get dimensions now.
    /// let (w,h)=decoder.dimensions().unwrap();
    /// ```
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        self.descriptor.map(|d| (d.width(), d.height()))
    }
}

/// Decode a whole QOI image held in memory
///
/// `channels` picks the layout of the returned pixels, `None` uses what
/// the header stores. Decoding is strict, use [`QoiDecoder`] with
/// [`DecoderOptions::new_cmd`] to tolerate a damaged end marker.
///
/// # Example
/// ```
/// use qoikit::qoikit_core::colorspace::ColorSpace;
/// // a 1x1 RGB image holding a single red pixel
/// let data = [
///     b'q', b'o', b'i', b'f', 0, 0, 0, 1, 0, 0, 0, 1, 3, 0,
///     0xfe, 255, 0, 0,
///     0, 0, 0, 0, 0, 0, 0, 1
/// ];
/// let (pixels, descriptor) = qoikit::decode(&data, Some(ColorSpace::RGBA)).unwrap();
///
/// assert_eq!(pixels, [255, 0, 0, 255]);
/// assert_eq!(descriptor.colorspace(), ColorSpace::RGB);
/// ```
pub fn decode(
    data: &[u8], channels: Option<ColorSpace>
) -> Result<(Vec<u8>, QoiDescriptor), QoiErrors> {
    let mut options = DecoderOptions::default();

    if let Some(colorspace) = channels {
        options = options.set_out_colorspace(colorspace);
    }
    let mut decoder = QoiDecoder::new_with_options(data, options);

    let pixels = decoder.decode()?;
    let descriptor = decoder.decode_headers()?;

    Ok((pixels, descriptor))
}
