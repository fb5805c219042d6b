/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Reading and writing QOI files

use std::fs::{read, remove_file, File};
use std::io::BufWriter;
use std::path::Path;

use log::debug;
use qoikit::qoikit_core::bit_depth::BitDepth;
use qoikit::qoikit_core::options::{DecoderOptions, EncoderOptions};
use qoikit::{QoiDecoder, QoiDescriptor, QoiEncoder};

use crate::errors::CliErrors;

/// Decode the QOI file at `path`
///
/// Pixels are laid out as the header says unless `options`
/// carries an output colorspace.
pub fn read_qoi<P: AsRef<Path>>(
    path: P, options: DecoderOptions
) -> Result<(Vec<u8>, QoiDescriptor), CliErrors> {
    let data = read(path.as_ref())?;
    debug!("Read {} bytes from {:?}", data.len(), path.as_ref());

    let mut decoder = QoiDecoder::new_with_options(&data, options);
    let pixels = decoder.decode()?;
    let descriptor = decoder.decode_headers()?;

    Ok((pixels, descriptor))
}

/// Encode `pixels` into a QOI file at `path`, returning the file size
///
/// The file is removed again if encoding fails.
pub fn write_qoi<P: AsRef<Path>>(
    path: P, pixels: &[u8], descriptor: &QoiDescriptor
) -> Result<usize, CliErrors> {
    let options = EncoderOptions::new(
        descriptor.width(),
        descriptor.height(),
        descriptor.colorspace(),
        BitDepth::Eight
    );
    let mut encoder = QoiEncoder::new(pixels, options);
    encoder.set_color_characteristics(descriptor.characteristics());

    let mut writer = BufWriter::new(File::create(path.as_ref())?);

    match encoder.encode(&mut writer) {
        Ok(written) => {
            debug!("Wrote {} bytes to {:?}", written, path.as_ref());
            Ok(written)
        }
        Err(err) => {
            drop(writer);
            remove_file(path.as_ref())?;
            Err(err.into())
        }
    }
}
