/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image processing routines for `anymap-image`
//!
//! This implements histogram equalization, contrast stretching and
//! 2D convolution over RGB images, each channel is processed on its own.
//!
//! It implements the `OperationsTrait` defined by anymap-image.
//!
//! # Example
//! - Blur an image with a 3x3 box filter
//! ```
//! use anymap_image::image::Image;
//! use anymap_image::traits::OperationsTrait;
//! use anymap_imageprocs::convolve::Convolve;
//!
//! let mut image = Image::fill(100, 100, [233, 10, 50]).unwrap();
//! // execute the filter
//! Convolve::box_blur().execute(&mut image).unwrap();
//! assert_eq!(image.get_pixel_at(50, 50).unwrap(), [233, 10, 50]);
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
    clippy::similar_names,
    clippy::inline_always,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]

pub mod convolve;
pub mod equalize;
pub mod histogram;
pub mod pad;
pub mod statistics;
pub mod stretch_contrast;
pub mod utils;
