/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::Formatter;

/// Errors raised by the byte readers and writers
pub enum ZByteIoError {
    #[cfg(feature = "std")]
    StdIoError(std::io::Error),
    // requested, remaining
    NotEnoughBytes(usize, usize),
    // requested, space left
    NotEnoughBuffer(usize, usize),
    Generic(&'static str)
}

impl core::fmt::Debug for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            ZByteIoError::StdIoError(err) => {
                writeln!(f, "Underlying I/O error {}", err)
            }
            ZByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            ZByteIoError::NotEnoughBuffer(expected, found) => {
                writeln!(
                    f,
                    "Not enough buffer to write {expected} bytes, buffer has space for {found}"
                )
            }
            ZByteIoError::Generic(err) => {
                writeln!(f, "Generic I/O error: {err}")
            }
        }
    }
}

impl core::fmt::Display for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ZByteIoError {}

#[cfg(feature = "std")]
impl From<std::io::Error> for ZByteIoError {
    fn from(value: std::io::Error) -> Self {
        ZByteIoError::StdIoError(value)
    }
}

impl From<&'static str> for ZByteIoError {
    fn from(value: &'static str) -> Self {
        ZByteIoError::Generic(value)
    }
}

/// An encapsulation of a byte stream reader
///
/// The reader is bounded by the slice it wraps, reads that would go
/// past the end either return an error (the `_err` family) or
/// return zeroes without moving the position.
///
/// # Example
/// ```
/// use qoikit_core::bytestream::ZByteReader;
/// let mut stream = ZByteReader::new(&[0, 0, 1, 0, 7]);
/// assert_eq!(stream.get_u32_be(), 256);
/// assert_eq!(stream.get_u8_err().unwrap(), 7);
/// assert!(stream.get_u8_err().is_err());
/// ```
pub struct ZByteReader<'a> {
    /// Data stream
    stream:   &'a [u8],
    position: usize
}

impl<'a> ZByteReader<'a> {
    /// Create a new instance of the byte stream
    pub const fn new(buf: &'a [u8]) -> ZByteReader<'a> {
        ZByteReader {
            stream:   buf,
            position: 0
        }
    }

    /// Return whether the underlying buffer
    /// has `num` bytes available for reading
    #[inline]
    pub const fn has(&self, num: usize) -> bool {
        self.position.saturating_add(num) <= self.stream.len()
    }
    /// Get number of bytes available in the stream
    #[inline]
    pub const fn remaining(&self) -> usize {
        // Must be saturating to prevent underflow
        self.stream.len().saturating_sub(self.position)
    }
    /// Return true whether or not we read to the end of the
    /// buffer and have no more bytes left.
    #[inline]
    pub const fn eof(&self) -> bool {
        self.position >= self.stream.len()
    }
    /// Get a single byte from the stream or zero if we are
    /// at the end of the stream
    #[inline(always)]
    pub fn get_u8(&mut self) -> u8 {
        match self.stream.get(self.position) {
            Some(byte) => {
                self.position += 1;
                *byte
            }
            None => 0
        }
    }
    /// Retrieve a byte from the underlying stream
    /// returning an error if there are no more bytes available
    #[inline(always)]
    pub fn get_u8_err(&mut self) -> Result<u8, ZByteIoError> {
        match self.stream.get(self.position) {
            Some(byte) => {
                self.position += 1;
                Ok(*byte)
            }
            None => Err(ZByteIoError::NotEnoughBytes(1, 0))
        }
    }
    /// Read a big endian u32, returning 0 if the underlying
    /// buffer does not have enough bytes
    #[inline]
    pub fn get_u32_be(&mut self) -> u32 {
        u32::from_be_bytes(self.read_fixed_bytes_or_zero())
    }
    /// Read `N` bytes into an array or return an error if
    /// the stream does not hold that many, the position is
    /// left untouched in that case.
    #[inline(always)]
    pub fn read_fixed_bytes_or_error<const N: usize>(&mut self) -> Result<[u8; N], ZByteIoError> {
        match self.stream.get(self.position..self.position + N) {
            Some(bytes) => {
                let mut byte_store: [u8; N] = [0; N];
                byte_store.copy_from_slice(bytes);
                self.position += N;
                Ok(byte_store)
            }
            None => Err(ZByteIoError::NotEnoughBytes(N, self.remaining()))
        }
    }
    /// Read `N` bytes into an array or return zeroes if
    /// the stream does not hold that many
    #[inline(always)]
    pub fn read_fixed_bytes_or_zero<const N: usize>(&mut self) -> [u8; N] {
        self.read_fixed_bytes_or_error().unwrap_or([0; N])
    }
}

#[cfg(test)]
mod tests {
    use crate::bytestream::ZByteReader;

    #[test]
    fn reads_stop_at_the_end() {
        let data = [0xAB, 0xCD, 0x01, 0x02, 0x03];
        let mut stream = ZByteReader::new(&data);

        assert_eq!(stream.get_u32_be(), 0xABCD_0102);
        // failed reads don't move the cursor
        assert!(stream.read_fixed_bytes_or_error::<2>().is_err());
        assert_eq!(stream.remaining(), 1);
        assert_eq!(stream.get_u8(), 3);
        assert_eq!(stream.get_u8(), 0);
        assert!(stream.get_u8_err().is_err());
        assert_eq!(stream.get_u32_be(), 0);
        assert!(stream.eof());
    }

    #[test]
    fn fixed_reads() {
        let data = *b"qoif\x00";
        let mut stream = ZByteReader::new(&data);

        assert!(stream.has(5));
        assert_eq!(&stream.read_fixed_bytes_or_error::<4>().unwrap(), b"qoif");
        assert!(!stream.has(2));
        assert!(stream.read_fixed_bytes_or_error::<2>().is_err());
        assert_eq!(stream.read_fixed_bytes_or_zero::<3>(), [0, 0, 0]);
        assert_eq!(stream.remaining(), 1);
        assert_eq!(stream.get_u8_err().unwrap(), 0);
        assert!(stream.eof());
    }
}
