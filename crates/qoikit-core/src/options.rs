/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder and Encoder Options
//!
//! This module exposes a struct for which all implemented
//! decoders get shared options for decoding
//!
//! Options are plain `Copy` values configured through
//! builder style setters, e.g.
//!
//! ```
//! use qoikit_core::options::DecoderOptions;
//! let options = DecoderOptions::default()
//!     .set_max_width(4096)
//!     .set_strict_mode(false);
//! assert_eq!(options.max_width(), 4096);
//! ```
pub use decoder::DecoderOptions;
pub use encoder::EncoderOptions;

mod decoder;
mod encoder;
