/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Decoding and encoding Quite Ok Image format
//!
//! [Format Specification](https://qoiformat.org/qoi-specification.pdf)
//!
//! QOI is a lossless format for 8 bit RGB and RGBA images, each pixel is
//! stored as a run of the previous pixel, a reference into a 64 entry
//! table of recently seen pixels, a small difference to the previous
//! pixel, or verbatim.
//!
//! # Features
//! - Decoding and encoding
//! -`no_std`
//! - Encoding into any [`ZByteWriterTrait`](qoikit_core::bytestream::ZByteWriterTrait) sink
//!
//! # Example
//! ```
//! use qoikit::{decode, encode, QoiDescriptor};
//! use qoikit::qoikit_core::colorspace::{ColorCharacteristics, ColorSpace};
//!
//! let pixels = [10, 20, 30, 255, 10, 20, 30, 255];
//! let descriptor = QoiDescriptor::new(2, 1, ColorSpace::RGBA, ColorCharacteristics::sRGB);
//!
//! let encoded = encode(&pixels, &descriptor).unwrap();
//! let (decoded, decoded_descriptor) = decode(&encoded, None).unwrap();
//!
//! assert_eq!(decoded, pixels);
//! assert_eq!(decoded_descriptor, descriptor);
//! ```
//!
//! ## `no_std`
//! You can use `no_std` with alloc feature to compile for `no_std` endpoints

#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;
extern crate core;

pub use decoder::*;
pub use encoder::*;
pub use errors::*;
pub use header::QoiDescriptor;
pub use pixel::Pixel;
pub use qoikit_core;

mod constants;
mod decoder;
mod encoder;
mod errors;
mod header;
mod index;
mod pixel;
