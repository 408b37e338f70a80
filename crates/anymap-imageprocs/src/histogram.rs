/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Calculate channel histogram statistics
//!
//! An image histogram is a graph that shows the number of pixels in an image at each intensity value
use anymap_core::buffer::PixelBuffer;
use anymap_image::image::Image;

use crate::utils::split_channels;

/// Per channel histograms of an RGB image
///
/// # Example
/// ```rust
/// use anymap_image::image::Image;
/// use anymap_imageprocs::histogram::ChannelHistogram;
///
/// let image = Image::fill(100, 100, [100, 0, 255]).unwrap();
/// let histogram = ChannelHistogram::new(&image);
/// // r had 100x100 items with value 100
/// assert_eq!(histogram.red()[100], 100_u64 * 100);
/// assert_eq!(histogram.blue()[255], 100_u64 * 100);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChannelHistogram {
    histograms: [[u64; 256]; 3]
}

impl ChannelHistogram {
    /// Count every channel of `image`
    #[must_use]
    pub fn new(image: &Image) -> ChannelHistogram {
        ChannelHistogram::from_pixels(image.pixels())
    }
    #[must_use]
    pub fn from_pixels(pixels: &PixelBuffer) -> ChannelHistogram {
        let [r, g, b] = split_channels(pixels);

        ChannelHistogram {
            histograms: [histogram(&r), histogram(&g), histogram(&b)]
        }
    }
    /// Histograms in R, G, B order
    pub const fn channels(&self) -> &[[u64; 256]; 3] {
        &self.histograms
    }
    pub const fn red(&self) -> &[u64; 256] {
        &self.histograms[0]
    }
    pub const fn green(&self) -> &[u64; 256] {
        &self.histograms[1]
    }
    pub const fn blue(&self) -> &[u64; 256] {
        &self.histograms[2]
    }
}

/// Count occurrences of each value in a single channel
#[must_use]
pub fn histogram(data: &[u8]) -> [u64; 256] {
    // four interleaved tables so consecutive equal bytes don't
    // serialize on the same counter
    let mut counts = [[0_u64; 256]; 4];

    let chunks = data.chunks_exact(4);
    let remainder = chunks.remainder();

    for chunk in chunks {
        counts[0][usize::from(chunk[0])] += 1;
        counts[1][usize::from(chunk[1])] += 1;
        counts[2][usize::from(chunk[2])] += 1;
        counts[3][usize::from(chunk[3])] += 1;
    }
    for value in remainder {
        counts[0][usize::from(*value)] += 1;
    }

    let [mut total, b, c, d] = counts;

    for (((a, b), c), d) in total.iter_mut().zip(b).zip(c).zip(d) {
        *a += b + c + d;
    }
    total
}
