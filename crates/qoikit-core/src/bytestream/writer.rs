/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bytestream::{ZByteIoError, ZByteWriterTrait};

mod no_std_writer;
mod std_writer;

/// Encapsulates a simple Byte writer with
/// support for Endian aware writes
///
/// # Example
/// ```
/// use qoikit_core::bytestream::ZWriter;
/// let mut output = vec![];
/// let mut writer = ZWriter::new(&mut output);
/// writer.write_u32_be_err(1).unwrap();
/// assert_eq!(writer.bytes_written(), 4);
/// assert_eq!(output, [0, 0, 0, 1]);
/// ```
pub struct ZWriter<T: ZByteWriterTrait> {
    buffer:        T,
    bytes_written: usize
}

impl<T: ZByteWriterTrait> ZWriter<T> {
    /// Create a new writer for the sink
    pub fn new(data: T) -> ZWriter<T> {
        ZWriter {
            buffer:        data,
            bytes_written: 0
        }
    }

    /// Return the number of bytes the writer has written
    pub const fn bytes_written(&self) -> usize {
        self.bytes_written
    }

    /// Write a fixed size array of bytes or error out
    #[inline(always)]
    pub fn write_const_bytes<const N: usize>(
        &mut self, byte: &[u8; N]
    ) -> Result<(), ZByteIoError> {
        self.buffer.write_const_bytes(byte)?;
        self.bytes_written += N;
        Ok(())
    }

    /// Write a single byte into the sink or error out
    /// if the sink cannot accept it
    #[inline(always)]
    pub fn write_u8_err(&mut self, byte: u8) -> Result<(), ZByteIoError> {
        self.write_const_bytes(&[byte])
    }

    /// Tell the sink how many more bytes are expected
    pub fn reserve(&mut self, additional: usize) -> Result<(), ZByteIoError> {
        self.buffer.reserve_capacity(additional)
    }

    /// Flush the underlying sink
    pub fn flush(&mut self) -> Result<(), ZByteIoError> {
        self.buffer.flush_bytes()
    }
}

impl<T: ZByteWriterTrait> ZWriter<T> {
    /// Write a u32 as a big endian integer
    ///
    /// Returning an error if the underlying sink cannot take four more bytes
    #[inline]
    pub fn write_u32_be_err(&mut self, value: u32) -> Result<(), ZByteIoError> {
        self.write_const_bytes(&value.to_be_bytes())
    }
}
