/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by the qoikit crates
//!
//! This crate provides the pieces the QOI codec and its command line
//! tool have in common
//!
//! It currently contains
//!
//! - A bounded bytestream reader and a sink based writer with endian aware reads and writes
//! - Colorspace and bit depth information shared by images
//! - Image decoder and encoder options
//! - Logging macros which compile to nothing when the `log` feature is off
//!
//! This library is `#[no_std]` with `alloc` needed for `Vec` sinks.
//!
//! # Features
//!  - `std`: Adds sinks for std writers and `std::error::Error` impls.
//!
//!  - `log`: Forwards the logging macros to the [`log`](https://docs.rs/log) crate.
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub mod bit_depth;
pub mod bytestream;
pub mod colorspace;
pub mod log;
pub mod options;
mod serde;
