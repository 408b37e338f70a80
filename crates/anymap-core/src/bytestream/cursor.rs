/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bytestream::{ByteIoError, ByteReaderTrait};

/// An in-memory cursor over a byte slice like type
///
/// # Example
/// ```
/// use anymap_core::bytestream::{ByteCursor, ByteReaderTrait};
///
/// let mut cursor = ByteCursor::new(b"P6");
/// assert_eq!(cursor.peek_byte().unwrap(), Some(b'P'));
/// assert_eq!(cursor.read_byte().unwrap(), Some(b'P'));
/// assert_eq!(cursor.read_byte().unwrap(), Some(b'6'));
/// assert_eq!(cursor.read_byte().unwrap(), None);
/// ```
pub struct ByteCursor<T: AsRef<[u8]>> {
    stream:   T,
    position: usize
}

impl<T: AsRef<[u8]>> ByteCursor<T> {
    pub fn new(buffer: T) -> ByteCursor<T> {
        ByteCursor {
            stream:   buffer,
            position: 0
        }
    }
    /// Bytes not yet consumed
    pub fn remaining(&self) -> &[u8] {
        let data = self.stream.as_ref();
        &data[self.position.min(data.len())..]
    }
    /// Destroy the cursor, returning the underlying buffer
    pub fn into_inner(self) -> T {
        self.stream
    }
}

impl<T: AsRef<[u8]>> ByteReaderTrait for ByteCursor<T> {
    #[inline(always)]
    fn read_byte(&mut self) -> Result<Option<u8>, ByteIoError> {
        let byte = self.stream.as_ref().get(self.position).copied();

        if byte.is_some() {
            self.position += 1;
        }
        Ok(byte)
    }

    #[inline(always)]
    fn peek_byte(&mut self) -> Result<Option<u8>, ByteIoError> {
        Ok(self.stream.as_ref().get(self.position).copied())
    }

    #[inline]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        let remaining = self.remaining();
        let count = remaining.len().min(buf.len());

        buf[..count].copy_from_slice(&remaining[..count]);
        self.position += count;

        Ok(count)
    }

    fn name(&self) -> &'static str {
        "ByteCursor<T>"
    }
}
