/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Global Decoder options

use crate::colorspace::ColorSpace;

/// Decoder options
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DecoderOptions {
    /// Maximum width for which decoders will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: `u32::MAX`, i.e. anything a header can describe
    max_width:      usize,
    /// Maximum height for which decoders will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: `u32::MAX`
    max_height:     usize,
    /// Treat recoverable oddities as errors
    ///
    /// When set to false, the decoder logs via the `warn!` macro and
    /// carries on, when true it returns an error.
    ///
    /// - Default value: true
    strict_mode:    bool,
    /// Layout of the decoded pixels
    ///
    /// `None` keeps whatever layout the image was stored in.
    ///
    /// - Default value: `None`
    out_colorspace: Option<ColorSpace>
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:      u32::MAX as usize,
            max_height:     u32::MAX as usize,
            strict_mode:    true,
            out_colorspace: None
        }
    }
}

/// Initializers
impl DecoderOptions {
    /// Options used by command line tools
    ///
    /// Error resilient: a wrong colorspace flag or a damaged end marker is
    /// logged instead of failing the whole decode
    pub fn new_cmd() -> DecoderOptions {
        DecoderOptions::default().set_strict_mode(false)
    }
}

/// Global options respected by all decoders
impl DecoderOptions {
    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    pub const fn max_height(&self) -> usize {
        self.max_height
    }

    /// Return true whether the decoder should be in strict mode
    /// And reject most errors
    pub const fn strict_mode(&self) -> bool {
        self.strict_mode
    }

    /// Return the requested layout of decoded pixels, if any
    pub const fn out_colorspace(&self) -> Option<ColorSpace> {
        self.out_colorspace
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    ///
    /// # Arguments
    ///
    /// * `width`:  The maximum width allowed
    ///
    /// returns: DecoderOptions
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    /// # Arguments
    ///
    /// * `height`: The maximum height allowed
    ///
    /// returns: DecoderOptions
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Set whether the decoder should be in standards conforming/
    /// strict mode
    ///
    /// This reduces the error tolerance level for the decoders and invalid
    /// samples will be rejected by the decoder
    ///
    /// # Arguments
    ///
    /// * `yes`: Whether strict mode is on
    ///
    /// returns: DecoderOptions
    pub fn set_strict_mode(mut self, yes: bool) -> Self {
        self.strict_mode = yes;
        self
    }

    /// Set the layout decoded pixels should be returned in
    ///
    /// Decoders reject layouts they cannot produce when decoding starts
    pub fn set_out_colorspace(mut self, colorspace: ColorSpace) -> Self {
        self.out_colorspace = Some(colorspace);
        self
    }
}
