/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A Portable Any-Map decoder and encoder
//!
//! Decodes all six classic netpbm variants into an 8 bit RGB
//! [`PixelBuffer`](anymap_core::buffer::PixelBuffer)
//!
//! | Magic | Format                         |
//! |-------|--------------------------------|
//! | `P1`  | plain (ASCII) bitmap           |
//! | `P2`  | plain graymap                  |
//! | `P3`  | plain pixmap                   |
//! | `P4`  | raw (binary) bitmap            |
//! | `P5`  | raw graymap, 8 or 16 bit       |
//! | `P6`  | raw pixmap, 8 or 16 bit        |
//!
//! Samples are rescaled from `[0, maxval]` to `[0, 255]`, gray and bitmap
//! samples are replicated into all three channels, bitmap `1` is black.
//!
//! # Example
//! ```
//! use anymap_core::bytestream::ByteCursor;
//! use anymap_pnm::PnmDecoder;
//!
//! let mut decoder = PnmDecoder::new(ByteCursor::new(b"P2 2 1 255 0 255"));
//! let pixels = decoder.decode().unwrap();
//!
//! assert_eq!(pixels.as_slice(), &[0, 0, 0, 255, 255, 255]);
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::doc_markdown
)]

pub use crate::decoder::*;
pub use crate::encoder::*;
pub use crate::errors::*;
pub use crate::header::*;

mod decoder;
mod encoder;
mod errors;
mod header;
pub mod tokenizer;
