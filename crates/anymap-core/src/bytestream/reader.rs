/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use crate::bytestream::ByteReaderTrait;

/// Errors raised by byte readers
pub enum ByteIoError {
    StdIoError(std::io::Error)
}

impl Debug for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ByteIoError::StdIoError(err) => {
                writeln!(f, "Underlying I/O error {err}")
            }
        }
    }
}

impl Display for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for ByteIoError {}

impl From<std::io::Error> for ByteIoError {
    fn from(value: std::io::Error) -> Self {
        ByteIoError::StdIoError(value)
    }
}

/// A byte reader over any [`ByteReaderTrait`] source
///
/// This is what decoders hold, it adds the few conveniences
/// decoders need on top of the trait.
pub struct ByteReader<T: ByteReaderTrait> {
    inner: T
}

impl<T: ByteReaderTrait> ByteReader<T> {
    pub fn new(source: T) -> ByteReader<T> {
        ByteReader { inner: source }
    }
    /// Destroy this reader returning
    /// the underlying source of the bytes
    /// from which we were decoding
    #[inline(always)]
    pub fn consume(self) -> T {
        self.inner
    }
    /// Read one byte, `None` at end of stream
    ///
    /// # Errors
    /// Errors from the underlying source
    #[inline(always)]
    pub fn read_u8(&mut self) -> Result<Option<u8>, ByteIoError> {
        self.inner.read_byte()
    }
    /// Look at the next byte without consuming it
    ///
    /// # Errors
    /// Errors from the underlying source
    #[inline(always)]
    pub fn peek_u8(&mut self) -> Result<Option<u8>, ByteIoError> {
        self.inner.peek_byte()
    }
    /// Read until `buf` is full or the stream ends, returning
    /// how many bytes were read
    ///
    /// Unlike a single `read_bytes` call this only returns a short count
    /// when the stream is really exhausted.
    ///
    /// # Errors
    /// Errors from the underlying source
    pub fn read_fully(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        let mut filled = 0;

        while filled < buf.len() {
            let read = self.inner.read_bytes(&mut buf[filled..])?;

            if read == 0 {
                break;
            }
            filled += read;
        }
        Ok(filled)
    }
    /// Skip bytes for as long as `func` returns true
    ///
    /// # Errors
    /// Errors from the underlying source
    pub fn skip_until_false<F: Fn(u8) -> bool>(&mut self, func: F) -> Result<(), ByteIoError> {
        while let Some(byte) = self.inner.peek_byte()? {
            if !(func)(byte) {
                break;
            }
            self.inner.read_byte()?;
        }
        Ok(())
    }

    pub fn name(&self) -> &'static str {
        self.inner.name()
    }
}
