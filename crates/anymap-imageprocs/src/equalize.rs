/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Histogram equalization
//!
//! Spreads the values of each channel so that its cumulative
//! histogram is as close to linear as possible.
use anymap_core::buffer::PixelBuffer;
use anymap_core::log::trace;
use anymap_image::errors::ImageErrors;
use anymap_image::image::Image;
use anymap_image::traits::OperationsTrait;

use crate::histogram::histogram;
use crate::utils::{merge_channels, split_channels};

/// Equalize the histogram of each channel independently
///
/// # Example
/// ```
/// use anymap_image::image::Image;
/// use anymap_image::traits::OperationsTrait;
/// use anymap_imageprocs::equalize::HistogramEqualize;
///
/// let mut image = Image::from_fn(2, 1, |x, _| [100 + x as u8, 7, 7]).unwrap();
/// HistogramEqualize::new().execute(&mut image).unwrap();
///
/// assert_eq!(image.as_bytes(), &[0, 7, 7, 255, 7, 7]);
/// ```
#[derive(Default, Copy, Clone)]
pub struct HistogramEqualize;

impl HistogramEqualize {
    #[must_use]
    pub fn new() -> HistogramEqualize {
        HistogramEqualize
    }
}

impl OperationsTrait for HistogramEqualize {
    fn name(&self) -> &'static str {
        "Histogram Equalization"
    }

    fn execute_impl(&self, image: &Image) -> Result<PixelBuffer, ImageErrors> {
        Ok(equalize(image.pixels())?)
    }
}

/// Equalize every channel of `pixels`, returning a new buffer
///
/// # Errors
/// Only if `pixels` is inconsistent
pub fn equalize(pixels: &PixelBuffer) -> Result<PixelBuffer, ImageErrors> {
    let (width, height) = pixels.dimensions();
    let mut channels = split_channels(pixels);

    for channel in &mut channels {
        equalize_channel(channel);
    }
    Ok(merge_channels(width, height, &channels)?)
}

/// Equalize a single channel in place
///
/// A value `v` becomes `round((cdf(v) - cdf_min) * 255 / (n - cdf_min))`
/// where `cdf_min` is the cumulative count of the smallest value present.
/// A channel holding a single value is left as is.
pub fn equalize_channel(channel: &mut [u8]) {
    let histo = histogram(channel);
    let total = channel.len() as u64;

    let mut cdf = [0_u64; 256];
    let mut running = 0;

    for (out, count) in cdf.iter_mut().zip(histo) {
        running += count;
        *out = running;
    }
    let cdf_min = cdf.iter().copied().find(|x| *x != 0).unwrap_or(0);

    if total == cdf_min {
        trace!("Flat channel, skipping equalization");
        return;
    }
    let denominator = total - cdf_min;

    let mut table = [0_u8; 256];

    for (out, value) in table.iter_mut().zip(cdf) {
        let numerator = value.saturating_sub(cdf_min) * 255;
        // round half up
        let mapped = (2 * numerator + denominator) / (2 * denominator);

        *out = u8::try_from(mapped).unwrap_or(u8::MAX);
    }
    for pixel in channel.iter_mut() {
        *pixel = table[usize::from(*pixel)];
    }
}

#[cfg(test)]
mod tests {
    use crate::equalize::equalize_channel;

    #[test]
    fn flat_channel_is_unchanged() {
        let mut channel = vec![42_u8; 64];
        equalize_channel(&mut channel);

        assert_eq!(channel, vec![42_u8; 64]);
    }

    #[test]
    fn extremes_are_reached() {
        let mut channel = vec![10, 10, 20, 30];
        equalize_channel(&mut channel);
        // cdf: 10 -> 2, 20 -> 3, 30 -> 4, cdf_min = 2
        assert_eq!(channel, vec![0, 0, 128, 255]);
    }

    #[test]
    fn order_is_preserved() {
        let mut channel: Vec<u8> = (0..=255).rev().collect();
        let original = channel.clone();

        equalize_channel(&mut channel);

        for (a, b) in channel.windows(2).zip(original.windows(2)) {
            assert_eq!(a[0] >= a[1], b[0] >= b[1]);
        }
        assert_eq!(channel[0], 255);
        assert_eq!(channel[255], 0);
    }
}
