/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream reader
//!
//! Decoders read through [`ByteReader`], which wraps anything implementing
//! [`ByteReaderTrait`]. Implementations are provided for
//!
//! - [`ByteCursor`], an in-memory cursor over anything that is `AsRef<[u8]>`
//! - [`std::io::Cursor`]
//! - [`std::io::BufReader`] e.g over a file
pub use cursor::ByteCursor;
pub use reader::{ByteIoError, ByteReader};
pub use traits::ByteReaderTrait;

mod cursor;
mod reader;
mod std_readers;
mod traits;
