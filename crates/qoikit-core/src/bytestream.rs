/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream reader
//! and writer.
//!
//! This module contains two main structs that help in
//! byte reading and byte writing
//!
//! The reader works on an in memory slice and never reads past its end,
//! the writer forwards to anything implementing [`ZByteWriterTrait`]
pub use reader::{ZByteIoError, ZByteReader};
pub use traits::ZByteWriterTrait;
pub use writer::ZWriter;

mod reader;
mod traits;
mod writer;
