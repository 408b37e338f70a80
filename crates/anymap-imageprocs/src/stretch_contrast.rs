/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use anymap_core::buffer::PixelBuffer;
use anymap_core::log::trace;
use anymap_image::errors::ImageErrors;
use anymap_image::image::Image;
use anymap_image::traits::OperationsTrait;

use crate::utils::{merge_channels, split_channels};

/// Linearly stretch each channel so its darkest value becomes 0
/// and its brightest 255
///
/// Channels holding a single value are left unchanged.
///
/// # Example
/// ```
/// use anymap_image::image::Image;
/// use anymap_image::traits::OperationsTrait;
/// use anymap_imageprocs::stretch_contrast::HistogramStretch;
///
/// let mut image = Image::from_fn(3, 1, |x, _| [50 + 50 * x as u8, 0, 9]).unwrap();
/// HistogramStretch::new().execute(&mut image).unwrap();
///
/// assert_eq!(image.as_bytes(), &[0, 0, 9, 128, 0, 9, 255, 0, 9]);
/// ```
#[derive(Default, Copy, Clone)]
pub struct HistogramStretch;

impl HistogramStretch {
    #[must_use]
    pub fn new() -> HistogramStretch {
        HistogramStretch
    }
}

impl OperationsTrait for HistogramStretch {
    fn name(&self) -> &'static str {
        "Histogram Stretch"
    }

    fn execute_impl(&self, image: &Image) -> Result<PixelBuffer, ImageErrors> {
        Ok(stretch(image.pixels())?)
    }
}

/// Stretch every channel of `pixels`, returning a new buffer
///
/// # Errors
/// Only if `pixels` is inconsistent
pub fn stretch(pixels: &PixelBuffer) -> Result<PixelBuffer, ImageErrors> {
    let (width, height) = pixels.dimensions();
    let mut channels = split_channels(pixels);

    for channel in &mut channels {
        stretch_channel(channel);
    }
    Ok(merge_channels(width, height, &channels)?)
}

/// Map `[min, max]` of `channel` onto `[0, 255]` in place
///
/// `v` becomes `round((v - min) * 255 / (max - min))`
pub fn stretch_channel(channel: &mut [u8]) {
    let (Some(lower), Some(upper)) = (channel.iter().min(), channel.iter().max()) else {
        return;
    };
    let (lower, upper) = (u32::from(*lower), u32::from(*upper));

    if lower == upper {
        trace!("Flat channel, skipping stretch");
        return;
    }
    let range = upper - lower;

    for pixel in channel.iter_mut() {
        let numerator = (u32::from(*pixel) - lower) * 255;
        let scaled = (2 * numerator + range) / (2 * range);

        *pixel = u8::try_from(scaled).unwrap_or(u8::MAX);
    }
}

#[cfg(test)]
mod tests {
    use crate::stretch_contrast::stretch_channel;

    #[test]
    fn flat_and_empty_channels() {
        let mut channel = vec![200_u8; 10];
        stretch_channel(&mut channel);
        assert_eq!(channel, vec![200_u8; 10]);

        let mut empty: Vec<u8> = vec![];
        stretch_channel(&mut empty);
        assert!(empty.is_empty());
    }

    #[test]
    fn full_range_is_identity() {
        let mut channel: Vec<u8> = (0..=255).collect();
        stretch_channel(&mut channel);

        assert!(channel.iter().enumerate().all(|(i, x)| i == usize::from(*x)));
    }

    #[test]
    fn narrow_range_is_widened() {
        let mut channel = vec![100, 101, 102];
        stretch_channel(&mut channel);

        assert_eq!(channel, vec![0, 128, 255]);
    }
}
