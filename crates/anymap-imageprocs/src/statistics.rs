/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Summary statistics of each channel
use anymap_image::image::Image;

use crate::histogram::ChannelHistogram;

/// Minimum, maximum and mean of one channel
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Statistics {
    pub min:  u8,
    pub max:  u8,
    pub mean: f64
}

/// Statistics of the red, green and blue channels
///
/// # Example
/// ```
/// use anymap_image::image::Image;
/// use anymap_imageprocs::statistics::ChannelStatistics;
///
/// let image = Image::from_fn(2, 1, |x, _| [x as u8 * 10, 5, 5]).unwrap();
/// let stats = ChannelStatistics::new(&image);
///
/// assert_eq!(stats.red().max, 10);
/// assert_eq!(stats.red().mean, 5.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ChannelStatistics {
    channels: [Statistics; 3]
}

impl ChannelStatistics {
    #[must_use]
    pub fn new(image: &Image) -> ChannelStatistics {
        ChannelStatistics::from_histogram(&ChannelHistogram::new(image))
    }

    #[must_use]
    pub fn from_histogram(histogram: &ChannelHistogram) -> ChannelStatistics {
        let histograms = histogram.channels();

        ChannelStatistics {
            channels: [
                channel_statistics(&histograms[0]),
                channel_statistics(&histograms[1]),
                channel_statistics(&histograms[2])
            ]
        }
    }
    /// Statistics in R, G, B order
    pub const fn channels(&self) -> &[Statistics; 3] {
        &self.channels
    }
    pub const fn red(&self) -> &Statistics {
        &self.channels[0]
    }
    pub const fn green(&self) -> &Statistics {
        &self.channels[1]
    }
    pub const fn blue(&self) -> &Statistics {
        &self.channels[2]
    }
}

fn channel_statistics(histogram: &[u64; 256]) -> Statistics {
    let present = || (0..=255_u8).filter(|x| histogram[usize::from(*x)] != 0);

    let min = present().next().unwrap_or(0);
    let max = present().last().unwrap_or(0);

    let (count, sum) = histogram
        .iter()
        .enumerate()
        .fold((0_u64, 0_u64), |(count, sum), (value, times)| {
            (count + times, sum + value as u64 * times)
        });

    let mean = if count == 0 { 0.0 } else { sum as f64 / count as f64 };

    Statistics { min, max, mean }
}

#[cfg(test)]
mod tests {
    use anymap_image::image::Image;

    use crate::statistics::ChannelStatistics;

    #[test]
    fn gradient_statistics() {
        let image = Image::from_fn(256, 1, |x, _| [x as u8, 255 - x as u8, 7]).unwrap();
        let stats = ChannelStatistics::new(&image);

        assert_eq!((stats.red().min, stats.red().max), (0, 255));
        assert_eq!((stats.green().min, stats.green().max), (0, 255));
        assert!((stats.red().mean - 127.5).abs() < f64::EPSILON);

        let blue = stats.blue();
        assert_eq!((blue.min, blue.max), (7, 7));
        assert!((blue.mean - 7.0).abs() < f64::EPSILON);
    }
}
