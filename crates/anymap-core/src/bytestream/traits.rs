/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Traits for reading images in anymap

use crate::bytestream::reader::ByteIoError;

/// The input trait implemented for readers.
///
/// This is the minimal set of operations a text-and-binary format
/// decoder needs: single byte reads with one byte of look-ahead, and bulk reads.
///
/// If you have an in memory buffer, prefer [`ByteCursor`](crate::bytestream::ByteCursor)
/// over [`Cursor`](std::io::Cursor), it doesn't go through the `std::io` machinery.
pub trait ByteReaderTrait {
    /// Read a single byte, returning `Ok(None)` at end of stream
    ///
    /// ## Errors
    /// Errors from the underlying reader
    fn read_byte(&mut self) -> Result<Option<u8>, ByteIoError>;

    /// Return the next byte without consuming it, `Ok(None)` at end of stream
    ///
    /// ## Errors
    /// Errors from the underlying reader
    fn peek_byte(&mut self) -> Result<Option<u8>, ByteIoError>;

    /// Read bytes into `buf` returning how many bytes you have read or an error if one occurred
    ///
    /// This doesn't guarantee that buf will be filled with bytes, a short count is
    /// returned at end of stream and zero once the stream is exhausted.
    ///
    /// ## Errors
    /// The error encountered when reading bytes for which we couldn't recover
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError>;

    /// A name for the reader, used in logs
    fn name(&self) -> &'static str;
}
