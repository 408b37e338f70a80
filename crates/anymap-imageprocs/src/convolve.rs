/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! 2D convolution on images
//!
//! This filter convolves each channel with an odd sized square matrix,
//! pixels beyond the border are taken from the nearest edge pixel.
//!
//! The intermediate calculations are carried in `f32`
//!
use anymap_core::buffer::PixelBuffer;
use anymap_core::log::trace;
use anymap_image::errors::ImageErrors;
use anymap_image::image::Image;
use anymap_image::traits::OperationsTrait;

use crate::pad::replicate;
use crate::utils::{merge_channels, split_channels};

/// Convolve an image
///
/// The matrix is given row-major, the first weight applies to the
/// upper-left neighbour of each pixel. Results are rounded and clamped
/// to `[0, 255]`.
///
/// # Example
/// - Convolve with a 3x3 sharpening matrix
///
/// ```
/// use anymap_image::errors::ImageErrors;
/// use anymap_image::image::Image;
/// use anymap_image::traits::OperationsTrait;
/// use anymap_imageprocs::convolve::Convolve;
///
/// let matrix = vec![ 0.0, -1.0,  0.0,
///                   -1.0,  5.0, -1.0,
///                    0.0, -1.0,  0.0];
/// // create an image that starts from black and ends as white
/// let mut image = Image::from_fn(100, 100, |x, y| [(x + y) as u8; 3])?;
/// // convolve finally
/// Convolve::new(matrix, 3).execute(&mut image)?;
/// # Ok::<(), ImageErrors>(())
/// ```
#[derive(Clone, Debug)]
pub struct Convolve {
    weights: Vec<f32>,
    size:    usize
}

impl Convolve {
    /// Create a new convolve matrix of `size` by `size` weights
    ///
    /// The operation will return an error if `size` isn't odd or
    /// the weights length isn't `size*size`
    #[must_use]
    pub fn new(weights: Vec<f32>, size: usize) -> Convolve {
        Convolve { weights, size }
    }
    /// A 3x3 matrix averaging each pixel with its neighbours
    #[must_use]
    pub fn box_blur() -> Convolve {
        Convolve::new(vec![1.0 / 9.0; 9], 3)
    }
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }
    pub const fn size(&self) -> usize {
        self.size
    }
}

impl OperationsTrait for Convolve {
    fn name(&self) -> &'static str {
        "2D convolution"
    }

    fn execute_impl(&self, image: &Image) -> Result<PixelBuffer, ImageErrors> {
        convolve(image.pixels(), &self.weights, self.size)
    }
}

fn check_matrix(weights: &[f32], size: usize, width: usize, height: usize) -> Result<(), ImageErrors> {
    if size == 0 || size % 2 == 0 {
        return Err(ImageErrors::InvalidArgument(format!(
            "Convolution size must be odd, found {size}"
        )));
    }
    if size.checked_mul(size) != Some(weights.len()) {
        return Err(ImageErrors::InvalidArgument(format!(
            "A {size}x{size} convolution needs {} weights, found {}",
            size * size,
            weights.len()
        )));
    }
    if size > width || size > height {
        return Err(ImageErrors::InvalidArgument(format!(
            "A {size}x{size} convolution doesn't fit an image of {width}x{height}"
        )));
    }
    if !weights.iter().all(|x| x.is_finite()) {
        return Err(ImageErrors::InvalidArgument(
            "Convolution weights must be finite".to_string()
        ));
    }
    Ok(())
}

/// Convolve every channel of `pixels`, returning a new buffer
///
/// # Errors
/// `InvalidArgument` if `size` is even or zero, `weights` isn't `size*size` long,
/// `size` exceeds either image dimension or a weight isn't finite
pub fn convolve(pixels: &PixelBuffer, weights: &[f32], size: usize) -> Result<PixelBuffer, ImageErrors> {
    let (width, height) = pixels.dimensions();

    check_matrix(weights, size, width, height)?;

    trace!("Running {size}x{size} convolution");

    let channels = split_channels(pixels);
    let mut out_channels = [vec![0; width * height], vec![0; width * height], vec![0; width * height]];

    for (in_channel, out_channel) in channels.iter().zip(out_channels.iter_mut()) {
        convolve_channel(in_channel, out_channel, width, height, weights, size);
    }
    Ok(merge_channels(width, height, &out_channels)?)
}

/// Convolve a single channel
///
/// `weights` must hold `size*size` values with `size` odd and both channels
/// must hold `width*height` values. If any of that doesn't hold
/// `out_channel` is left untouched.
pub fn convolve_channel(
    in_channel: &[u8], out_channel: &mut [u8], width: usize, height: usize, weights: &[f32],
    size: usize
) {
    let Some(channel_size) = width.checked_mul(height) else {
        return;
    };
    if size % 2 == 0
        || size.checked_mul(size) != Some(weights.len())
        || in_channel.len() != channel_size
        || out_channel.len() != channel_size
    {
        return;
    }
    let radius = size / 2;
    let padded_w = width + 2 * radius;
    let padded = replicate(in_channel, width, height, radius, radius);

    if padded.is_empty() {
        return;
    }

    for (y, out_row) in out_channel.chunks_exact_mut(width).take(height).enumerate() {
        for (x, out) in out_row.iter_mut().enumerate() {
            let mut sum = 0.0_f32;

            for (ky, kernel_row) in weights.chunks_exact(size).enumerate() {
                let start = (y + ky) * padded_w + x;
                let window = &padded[start..start + size];

                sum += window
                    .iter()
                    .zip(kernel_row)
                    .map(|(pix, weight)| f32::from(*pix) * weight)
                    .sum::<f32>();
            }
            *out = sum.round().clamp(0.0, 255.0) as u8;
        }
    }
}
