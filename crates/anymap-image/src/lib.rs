/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! An image type for Portable Any-Map images
//!
//! An [`Image`](crate::image::Image) owns a decoded RGB
//! [`PixelBuffer`](anymap_core::buffer::PixelBuffer) and the metadata
//! of the stream it came from.
//!
//! Filters implement [`OperationsTrait`](crate::traits::OperationsTrait),
//! they compute a new buffer from the old one and the image swaps it in
//! only if the filter succeeded.
//!
//! # Example
//! ```
//! use anymap_core::bytestream::ByteCursor;
//! use anymap_core::options::DecoderOptions;
//! use anymap_image::image::Image;
//!
//! let image = Image::read(ByteCursor::new(b"P3 1 1 255 10 20 30"), DecoderOptions::default()).unwrap();
//!
//! assert_eq!(image.dimensions(), (1, 1));
//! assert_eq!(image.as_bytes(), &[10, 20, 30]);
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

pub mod errors;
pub mod image;
pub mod metadata;
mod serde;
pub mod traits;
