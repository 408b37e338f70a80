/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::{BufRead, BufReader, Cursor, Read};

use crate::bytestream::{ByteIoError, ByteReaderTrait};

/// `BufRead` gives us look-ahead without seeking back
fn peek_buffered<R: BufRead>(reader: &mut R) -> Result<Option<u8>, ByteIoError> {
    Ok(reader.fill_buf()?.first().copied())
}

fn read_buffered<R: BufRead>(reader: &mut R) -> Result<Option<u8>, ByteIoError> {
    let byte = peek_buffered(reader)?;

    if byte.is_some() {
        reader.consume(1);
    }
    Ok(byte)
}

impl<T> ByteReaderTrait for Cursor<T>
where
    T: AsRef<[u8]>
{
    #[inline(always)]
    fn read_byte(&mut self) -> Result<Option<u8>, ByteIoError> {
        read_buffered(self)
    }

    #[inline(always)]
    fn peek_byte(&mut self) -> Result<Option<u8>, ByteIoError> {
        peek_buffered(self)
    }

    #[inline(always)]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        self.read(buf).map_err(ByteIoError::from)
    }

    fn name(&self) -> &'static str {
        "Cursor<T>"
    }
}

impl<T: Read> ByteReaderTrait for BufReader<T> {
    #[inline(always)]
    fn read_byte(&mut self) -> Result<Option<u8>, ByteIoError> {
        read_buffered(self)
    }

    #[inline(always)]
    fn peek_byte(&mut self) -> Result<Option<u8>, ByteIoError> {
        peek_buffered(self)
    }

    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        self.read(buf).map_err(ByteIoError::from)
    }

    fn name(&self) -> &'static str {
        "BufReader<T>"
    }
}
